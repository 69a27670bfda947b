use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "jobscout",
    version,
    about = "Build job-search URLs with site, remote, location, recency and region filters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a search URL from job-search preferences
    Build(BuildParams),
    /// List supported job sites
    Sites(SitesParams),
    /// List region codes
    Regions,
    /// Suggest job titles matching some text
    Suggest(SuggestParams),
    /// Decode the query and filters of a search URL
    Inspect(InspectParams),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Only the URL
    #[default]
    Url,
    /// Human-readable summary followed by the URL
    Summary,
    /// URL, query, and request as JSON
    Json,
}

#[derive(Args, Debug, Default)]
pub struct BuildParams {
    /// Job title, role, or search text
    #[arg(short, long)]
    pub title: Option<String>,
    /// Job site domain to search (repeatable, e.g. "linkedin.com")
    #[arg(short, long = "site", value_name = "DOMAIN")]
    pub sites: Vec<String>,
    /// Select every catalog site matching a glob (e.g. "*.com", "jobs.*")
    #[arg(long, value_name = "GLOB")]
    pub sites_matching: Option<String>,
    /// Select every catalog site
    #[arg(long)]
    pub all_sites: bool,
    /// Location as "City, State" (repeatable)
    #[arg(short, long = "location", value_name = "LOCATION")]
    pub locations: Vec<String>,
    /// City of an additional location, combined with --state
    #[arg(long)]
    pub city: Option<String>,
    /// State of an additional location, combined with --city
    #[arg(long)]
    pub state: Option<String>,
    /// Include remote-work keywords
    #[arg(long)]
    pub remote: bool,
    /// Recency: "hour", "day", "week", "month", "any", or a code like "w" or "d5"
    #[arg(long)]
    pub timeline: Option<String>,
    /// Region code (e.g. "countryGB") or "any" (default: JOBSCOUT_REGION or "countryUS")
    #[arg(long)]
    pub region: Option<String>,
    /// Match the job title as an exact phrase
    #[arg(long)]
    pub exact: bool,
    /// Read a JSON search request from FILE ("-" for stdin); flags are applied on top
    #[arg(long, value_name = "FILE")]
    pub request: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
    /// Open the search in the default browser
    #[arg(long)]
    pub open: bool,
}

#[derive(Args, Debug, Default)]
pub struct SitesParams {
    /// Glob pattern to filter sites (e.g. "*.io")
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Args, Debug)]
pub struct SuggestParams {
    /// Partial job title
    pub text: String,
}

#[derive(Args, Debug)]
pub struct InspectParams {
    /// Search URL to decode
    pub url: String,
}
