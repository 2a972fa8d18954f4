//! Page window arithmetic for the summary line.

/// The inclusive, 1-based range of results shown on one page.
///
/// When there are no results at all every field is zero, including the
/// reported `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub begin: u64,
    pub end: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl PageWindow {
    /// Window for `page` when the page actually holds results.
    ///
    /// # Panics
    ///
    /// Panics if `per_page` is zero. Callers validate it before issuing a
    /// search.
    pub fn compute(total_results: u64, per_page: u64, page: u64) -> Self {
        Self::window(total_results, per_page, page, true)
    }

    fn window(total_results: u64, per_page: u64, page: u64, has_items: bool) -> Self {
        assert!(per_page > 0, "per_page must be at least 1");

        if total_results == 0 {
            return PageWindow {
                begin: 0,
                end: 0,
                page: 0,
                total_pages: 0,
            };
        }

        let total_pages = total_results.div_ceil(per_page);

        let mut begin = 1;
        let mut end = per_page.min(total_results);

        if page > 1 {
            end = page.saturating_mul(per_page);
            begin = end - per_page + 1;

            if end > total_results {
                end = total_results;
                begin = total_results - (total_results % per_page);

                // Last partial page: the remainder formula lands one short.
                if has_items && page == total_pages {
                    begin += 1;
                }
            }
        }

        PageWindow {
            begin,
            end,
            page,
            total_pages,
        }
    }

    /// Like [`PageWindow::compute`], but a page that came back empty while
    /// the total is non-zero reports `end = 0` and keeps the clamped `begin`
    /// without the last-page correction.
    pub fn compute_for_items(
        total_results: u64,
        per_page: u64,
        page: u64,
        items_on_page: usize,
    ) -> Self {
        let has_items = items_on_page > 0;
        let mut window = Self::window(total_results, per_page, page, has_items);
        if !has_items && total_results > 0 {
            window.end = 0;
        }
        window
    }
}

/// Free-function form of [`PageWindow::compute`].
pub fn compute_page_window(total_results: u64, per_page: u64, page: u64) -> PageWindow {
    PageWindow::compute(total_results, per_page, page)
}
