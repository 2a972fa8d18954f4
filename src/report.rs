//! Full search report: every item followed by the summary line.

use clap::ValueEnum;

use crate::formatter::{format_item, ItemContext};
use crate::models::SearchResponse;
use crate::pagination::PageWindow;
use crate::style::{paint, Paint};

/// User color preference from `--color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    On,
    Off,
    #[default]
    Auto,
}

/// Everything the renderer needs to know about its output target.
///
/// Built once at the CLI boundary; rendering never queries the terminal or
/// the clock itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: ColorMode,
    /// Terminal width in columns, 0 when unknown or unbounded.
    pub terminal_width: usize,
    pub is_terminal: bool,
    /// Unix seconds used as "now" for relative push times.
    pub now: i64,
}

impl RenderOptions {
    pub fn apply_color(&self) -> bool {
        match self.color {
            ColorMode::On => true,
            ColorMode::Off => false,
            ColorMode::Auto => self.is_terminal,
        }
    }

    /// Descriptions wrap only for colored output on a terminal of known
    /// width.
    pub fn wrap_width(&self) -> Option<usize> {
        (self.is_terminal && self.apply_color() && self.terminal_width > 0)
            .then_some(self.terminal_width)
    }
}

/// Render `response` as output lines, without trailing newlines.
///
/// # Panics
///
/// Panics if `per_page` is zero.
pub fn render(
    response: &SearchResponse,
    page: u64,
    per_page: u64,
    options: &RenderOptions,
) -> Vec<String> {
    let ctx = ItemContext {
        apply_color: options.apply_color(),
        wrap_width: options.wrap_width(),
        now: options.now,
    };

    let mut lines: Vec<String> = response
        .items
        .iter()
        .flat_map(|item| format_item(item, &ctx))
        .collect();

    let window = PageWindow::compute_for_items(
        response.total_count,
        per_page,
        page,
        response.items.len(),
    );
    lines.push(summary_line(response, &window, ctx.apply_color));

    lines
}

/// [`render`], joined into a single newline-terminated block.
pub fn render_search_report(
    response: &SearchResponse,
    page: u64,
    per_page: u64,
    options: &RenderOptions,
) -> String {
    let mut out = render(response, page, per_page, options).join("\n");
    out.push('\n');
    out
}

fn summary_line(response: &SearchResponse, window: &PageWindow, color: bool) -> String {
    format!(
        "{}-{}/{} results | {}/{} pages | {}/{} limit",
        paint(window.begin, Paint::Magenta, color),
        paint(window.end, Paint::Magenta, color),
        paint(response.total_count, Paint::White, color),
        paint(window.page, Paint::Magenta, color),
        paint(window.total_pages, Paint::White, color),
        paint(response.rate_limit.remaining, Paint::Magenta, color),
        paint(response.rate_limit.limit, Paint::White, color),
    )
}
