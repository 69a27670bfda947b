//! Search query construction: request model, URL building, and URL inspection.

mod builder;
mod timeline;

pub use builder::{InspectedUrl, QueryBuilder, build_search_url, inspect_search_url};
pub use timeline::{Timeline, TimeUnit, resolve_timeline_arg};

use serde::{Deserialize, Serialize};

/// Region sentinel meaning "no country restriction".
pub const ANY_REGION: &str = "any";
pub const DEFAULT_REGION: &str = "countryUS";

/// A validated job search, produced fresh per submission.
///
/// Field names serialize in camelCase so a request can be supplied as the
/// same JSON object the search form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub job_title: String,
    pub selected_sites: Vec<String>,
    pub locations: Vec<String>,
    pub remote_work: bool,
    /// Raw recency token: `""`, `h|d|w|m`, or `<unit><count>`. Never normalized.
    pub timeline: String,
    pub region: String,
    pub exact_match: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            selected_sites: Vec::new(),
            locations: Vec::new(),
            remote_work: false,
            timeline: String::new(),
            region: DEFAULT_REGION.to_string(),
            exact_match: false,
        }
    }
}
