//! Per-repository lines of the search report.

use crate::fuzzy_time::fuzzy_since;
use crate::lang;
use crate::models::SearchResultItem;
use crate::style::{paint, Paint};

const DESCRIPTION_INDENT: &str = "  ";

/// Settings for a single item, already resolved from
/// [`RenderOptions`](crate::report::RenderOptions).
#[derive(Debug, Clone, Copy)]
pub struct ItemContext {
    pub apply_color: bool,
    /// Description wrap width including the indent; `None` disables wrapping.
    pub wrap_width: Option<usize>,
    pub now: i64,
}

/// Format one result: the header line, the description (if any) and a
/// trailing blank line.
pub fn format_item(item: &SearchResultItem, ctx: &ItemContext) -> Vec<String> {
    let mut lines = vec![header_line(item, ctx)];

    if !item.description.is_empty() {
        lines.extend(description_lines(&item.description, ctx.wrap_width));
    }

    lines.push(String::new());
    lines
}

fn header_line(item: &SearchResultItem, ctx: &ItemContext) -> String {
    let color = ctx.apply_color;
    let fork_symbol = if item.fork { ">" } else { "<" };

    let (magnitude, unit) = match &item.pushed_at {
        Some(pushed_at) => {
            let age = fuzzy_since(pushed_at, ctx.now);
            (age.magnitude.to_string(), age.unit.symbol())
        }
        None => (String::new(), ""),
    };

    format!(
        "{}/{} *{} {}{} !{} [{}] {}{}",
        paint(&item.owner, Paint::Magenta, color),
        paint(&item.name, Paint::White, color),
        paint(item.stars, Paint::Green, color),
        fork_symbol,
        paint(item.forks, Paint::Blue, color),
        paint(item.issues, Paint::Cyan, color),
        paint(&item.language, Paint::Rgb(lang::color(&item.language)), color),
        paint(magnitude, Paint::Yellow, color),
        paint(unit, Paint::Yellow, color),
    )
}

fn description_lines(description: &str, wrap_width: Option<usize>) -> Vec<String> {
    let Some(width) = wrap_width else {
        return vec![format!("{DESCRIPTION_INDENT}{description}")];
    };

    let available = width.saturating_sub(DESCRIPTION_INDENT.len()).max(1);

    wrap_words(description, available)
        .into_iter()
        .map(|line| format!("{DESCRIPTION_INDENT}{line}"))
        .collect()
}

/// Greedy word wrap on whitespace. Words wider than `width` get a line of
/// their own instead of being split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = console::measure_text_width(word);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    const NOW: i64 = 1_700_000_000;

    fn item() -> SearchResultItem {
        SearchResultItem {
            owner: "octobanana".into(),
            name: "stig".into(),
            stars: 1234,
            fork: false,
            forks: 56,
            issues: 7,
            language: "C++".into(),
            description: "A CLI tool for searching repositories on GitHub".into(),
            pushed_at: DateTime::from_timestamp(NOW - 3 * 86_400, 0),
        }
    }

    fn plain(wrap_width: Option<usize>) -> ItemContext {
        ItemContext {
            apply_color: false,
            wrap_width,
            now: NOW,
        }
    }

    #[test]
    fn test_plain_item() {
        let lines = format_item(&item(), &plain(None));
        assert_eq!(
            lines,
            vec![
                "octobanana/stig *1234 <56 !7 [C++] 3D".to_string(),
                "  A CLI tool for searching repositories on GitHub".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_fork_glyph() {
        let mut forked = item();
        forked.fork = true;
        let lines = format_item(&forked, &plain(None));
        assert!(lines[0].contains(" >56 "));
    }

    #[test]
    fn test_missing_fields_degrade() {
        let mut bare = item();
        bare.language.clear();
        bare.description.clear();
        bare.pushed_at = None;

        let lines = format_item(&bare, &plain(None));
        assert_eq!(lines, vec!["octobanana/stig *1234 <56 !7 [] ".to_string(), String::new()]);
    }

    #[test]
    fn test_description_wraps_with_indent() {
        let lines = format_item(&item(), &plain(Some(24)));
        assert_eq!(
            &lines[1..],
            &[
                "  A CLI tool for".to_string(),
                "  searching repositories".to_string(),
                "  on GitHub".to_string(),
                String::new(),
            ]
        );
        for line in &lines[1..] {
            assert!(line.len() <= 24);
        }
    }

    #[test]
    fn test_long_word_gets_own_line() {
        assert_eq!(
            wrap_words("a supercalifragilistic b", 5),
            vec!["a", "supercalifragilistic", "b"]
        );
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_colored_matches_plain_once_stripped() {
        let ctx = ItemContext {
            apply_color: true,
            ..plain(None)
        };
        let colored = format_item(&item(), &ctx);
        let uncolored = format_item(&item(), &plain(None));

        assert!(colored[0].contains('\u{1b}'));
        let stripped: Vec<String> = colored
            .iter()
            .map(|line| console::strip_ansi_codes(line).into_owned())
            .collect();
        assert_eq!(stripped, uncolored);
    }

    #[test]
    fn test_plain_never_emits_escapes() {
        let lines = format_item(&item(), &plain(Some(30)));
        assert!(lines.iter().all(|line| !line.contains('\u{1b}')));
    }
}
