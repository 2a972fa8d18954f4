use std::io::Write;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use console::Term;
use dotenv::dotenv;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stig_lib::{
    build_query, render_search_report, Args, GitHubSearcher, ReadmePath, RenderOptions, Result,
    SearchQuery,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so the report stays pipe-safe
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_env("STIG_LOG"))
        .init();

    dotenv().ok();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("run failed: {:?}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let searcher = GitHubSearcher::new(args.token.as_deref())?;

    if let Some(path) = &args.readme {
        let path: ReadmePath = path.parse()?;
        let readme = searcher.readme(&path).await?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&readme)?;
        stdout.flush()?;
        return Ok(());
    }

    let query = SearchQuery {
        query: build_query(args.query.as_deref().unwrap_or_default(), args.filter.as_deref())?,
        sort: args.sort,
        order: args.order,
        page: args.page,
        per_page: args.number,
    };

    let response = searcher.search(&query).await?;

    let term = Term::stdout();
    let is_terminal = term.is_term();
    let options = RenderOptions {
        color: args.color,
        terminal_width: if is_terminal { term.size().1 as usize } else { 0 },
        is_terminal,
        now: Utc::now().timestamp(),
    };
    debug!("Render options: {:?}", options);

    let report = render_search_report(&response, query.page, query.per_page, &options);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
