use serde_json::json;
use stig_lib::{
    compute_page_window, render, render_search_report, ColorMode, RateLimit, RenderOptions,
    SearchResponse,
};

// 2023-11-14T22:13:20Z
const NOW: i64 = 1_700_000_000;

fn fixture() -> SearchResponse {
    let body = json!({
        "total_count": 25,
        "incomplete_results": false,
        "items": [
            {
                "name": "stig",
                "owner": { "login": "octobanana" },
                "stargazers_count": 120,
                "fork": false,
                "forks_count": 4,
                "open_issues_count": 1,
                "language": "C++",
                "description": "A CLI tool for searching GitHub from the terminal.",
                "pushed_at": "2023-11-11T22:13:20Z"
            },
            {
                "name": "stig-fork",
                "owner": { "login": "someone" },
                "stargazers_count": 0,
                "fork": true,
                "forks_count": 0,
                "open_issues_count": 3,
                "language": null,
                "description": "",
                "pushed_at": "garbage"
            },
            {
                "name": "ripgrep",
                "owner": { "login": "BurntSushi" },
                "stargazers_count": 45000,
                "fork": false,
                "forks_count": 1900,
                "open_issues_count": 80,
                "language": "Rust",
                "description": null,
                "pushed_at": "2023-11-14T22:12:35Z"
            },
            {
                "name": "old",
                "owner": { "login": "archive" },
                "stargazers_count": 7,
                "fork": false,
                "forks_count": 1,
                "open_issues_count": 0,
                "language": "Brainfudge",
                "description": "Untouched for a while",
                "pushed_at": "2021-11-14T22:13:20Z"
            },
            {
                "name": "hourly",
                "owner": { "login": "cron" },
                "stargazers_count": 2,
                "fork": false,
                "forks_count": 0,
                "open_issues_count": 0,
                "language": "Shell",
                "description": "",
                "pushed_at": "2023-11-14T21:13:20Z"
            }
        ]
    });

    SearchResponse::from_json(
        &body.to_string(),
        RateLimit {
            remaining: 8,
            limit: 10,
        },
    )
    .unwrap()
}

fn options(color: ColorMode, is_terminal: bool, terminal_width: usize) -> RenderOptions {
    RenderOptions {
        color,
        terminal_width,
        is_terminal,
        now: NOW,
    }
}

#[test]
fn plain_report_for_last_partial_page() {
    let report = render_search_report(&fixture(), 3, 10, &options(ColorMode::Off, false, 0));

    let expected = [
        "octobanana/stig *120 <4 !1 [C++] 3D",
        "  A CLI tool for searching GitHub from the terminal.",
        "",
        // unparsable push time renders as an empty token
        "someone/stig-fork *0 >0 !3 [] ",
        "",
        "BurntSushi/ripgrep *45000 <1900 !80 [Rust] 45s",
        "",
        "archive/old *7 <1 !0 [Brainfudge] 2Y",
        "  Untouched for a while",
        "",
        "cron/hourly *2 <0 !0 [Shell] 1h",
        "",
        "21-25/25 results | 3/3 pages | 8/10 limit",
        "",
    ]
    .join("\n");
    assert_eq!(report, expected);
}

#[test]
fn auto_color_follows_terminal() {
    let response = fixture();

    let piped = render(&response, 3, 10, &options(ColorMode::Auto, false, 0));
    assert!(piped.iter().all(|line| !line.contains('\u{1b}')));

    let tty = render(&response, 3, 10, &options(ColorMode::Auto, true, 0));
    assert!(tty.iter().any(|line| line.contains('\u{1b}')));
}

#[test]
fn forced_color_strips_to_plain_output() {
    let response = fixture();

    let colored = render(&response, 3, 10, &options(ColorMode::On, false, 0));
    let plain = render(&response, 3, 10, &options(ColorMode::Off, false, 0));

    let stripped: Vec<String> = colored
        .iter()
        .map(|line| console::strip_ansi_codes(line).into_owned())
        .collect();
    assert_eq!(stripped, plain);
}

#[test]
fn descriptions_wrap_to_terminal_width() {
    let lines: Vec<String> = render(&fixture(), 3, 10, &options(ColorMode::Auto, true, 20))
        .iter()
        .map(|line| console::strip_ansi_codes(line).into_owned())
        .collect();

    assert_eq!(lines[1], "  A CLI tool for");
    assert_eq!(lines[2], "  searching GitHub");
    assert_eq!(lines[3], "  from the terminal.");
    for line in lines.iter().filter(|line| line.starts_with("  ")) {
        assert!(line.len() <= 20, "{line:?}");
    }
}

#[test]
fn color_off_on_terminal_keeps_descriptions_unwrapped() {
    let lines = render(&fixture(), 3, 10, &options(ColorMode::Off, true, 20));

    assert_eq!(lines[1], "  A CLI tool for searching GitHub from the terminal.");
    assert_eq!(lines[2], "");
}

#[test]
fn rendering_is_idempotent() {
    let response = fixture();
    let opts = options(ColorMode::On, true, 40);

    assert_eq!(
        render_search_report(&response, 3, 10, &opts),
        render_search_report(&response, 3, 10, &opts)
    );
}

#[test]
fn empty_page_past_the_end() {
    let mut response = fixture();
    response.items.clear();

    let lines = render(&response, 5, 10, &options(ColorMode::Off, false, 0));
    assert_eq!(lines, vec!["20-0/25 results | 5/3 pages | 8/10 limit"]);
}

#[test]
fn page_window_examples() {
    let w = compute_page_window(25, 10, 1);
    assert_eq!((w.begin, w.end, w.total_pages), (1, 10, 3));

    let w = compute_page_window(25, 10, 3);
    assert_eq!((w.begin, w.end, w.total_pages), (21, 25, 3));

    let w = compute_page_window(10, 10, 1);
    assert_eq!((w.begin, w.end, w.total_pages), (1, 10, 1));

    let w = compute_page_window(0, 30, 7);
    assert_eq!((w.begin, w.end, w.page, w.total_pages), (0, 0, 0, 0));
}

#[test]
fn empty_last_page_keeps_uncorrected_begin() {
    let mut response = fixture();
    response.items.clear();

    let lines = render(&response, 3, 10, &options(ColorMode::Off, false, 0));
    assert_eq!(lines, vec!["20-0/25 results | 3/3 pages | 8/10 limit"]);
}
