use clap::{ArgGroup, Parser, ValueEnum};

use crate::report::ColorMode;

/// Search GitHub repositories from the terminal, or print a repository's README.
#[derive(Parser, Debug)]
#[clap(
    name = "stig",
    author,
    version,
    about,
    long_about = "A CLI tool for searching Git repositories on GitHub.\n\n\
        Examples:\n  \
        stig --query 'stig' --number 20 --page 1\n  \
        stig --query 'stig' --filter 'language:cpp'\n  \
        stig --query '' --sort stars --filter 'language:js'\n  \
        stig --query 'http server' --filter 'language:cpp stars:>10'\n  \
        stig --readme 'octobanana/stig/master'"
)]
#[clap(group(ArgGroup::new("mode").required(true).args(["query", "readme"])))]
pub struct Args {
    /// The query string.
    #[clap(short, long, conflicts_with = "readme")]
    pub query: Option<String>,

    /// The page number to get.
    #[clap(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// The number of results to show per page.
    #[clap(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=100))]
    pub number: u64,

    /// How to sort the search results, default is best match.
    #[clap(short, long, value_enum)]
    pub sort: Option<Sort>,

    /// The order to sort the search results, default is desc.
    #[clap(short, long, value_enum, requires = "sort")]
    pub order: Option<Order>,

    /// Filter results with space separated key:value pairs.
    #[clap(short, long, value_name = "key:value[ key:value]...")]
    pub filter: Option<String>,

    /// GitHub API token, enables a greater number of requests before being
    /// rate-limited. Falls back to GITHUB_TOKEN.
    #[clap(long)]
    pub token: Option<String>,

    /// Output color preference.
    #[clap(short, long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print a repo's README to stdout.
    #[clap(short, long, value_name = "user/repo[/ref]")]
    pub readme: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sort {
    Stars,
    Forks,
    Updated,
    Best,
}

impl Sort {
    /// Value of the `sort` query parameter; best match is the API default and
    /// is sent as an empty string.
    pub fn as_param(self) -> &'static str {
        match self {
            Sort::Stars => "stars",
            Sort::Forks => "forks",
            Sort::Updated => "updated",
            Sort::Best => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    pub fn as_param(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}
