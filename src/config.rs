use std::env;

use tracing::debug;

use crate::query::DEFAULT_REGION;

const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JOBSCOUT_SEARCH_URL is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JOBSCOUT_SEARCH_URL must use http or https, got '{0}'")]
    InvalidScheme(String),

    #[error("JOBSCOUT_SEARCH_URL must not contain a fragment ('#{0}')")]
    Fragment(String),

    #[error("JOBSCOUT_SEARCH_URL must not set the '{0}' parameter; jobscout adds it")]
    ReservedParam(String),
}

/// Parameters the query builder appends to the endpoint.
const BUILT_PARAMS: [&str; 3] = ["q", "tbs", "cr"];

/// Runtime configuration.
///
/// Read from environment variables:
/// - `JOBSCOUT_SEARCH_URL`: search endpoint (default: Google web search)
/// - `JOBSCOUT_REGION`: region used when `--region` is not given (default: `countryUS`)
/// - `JOBSCOUT_SITES`: comma-separated sites used when no site flag is given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub search_url: String,
    pub default_region: String,
    pub default_sites: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            default_sites: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let search_url = match get("JOBSCOUT_SEARCH_URL") {
            Some(raw) => {
                let parsed = url::Url::parse(&raw)?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(ConfigError::InvalidScheme(parsed.scheme().to_string()));
                }
                if let Some(fragment) = parsed.fragment() {
                    return Err(ConfigError::Fragment(fragment.to_string()));
                }
                if let Some((key, _)) = parsed
                    .query_pairs()
                    .find(|(k, _)| BUILT_PARAMS.contains(&k.as_ref()))
                {
                    return Err(ConfigError::ReservedParam(key.into_owned()));
                }
                debug!(url = %raw, "using custom search endpoint");
                raw
            }
            None => DEFAULT_SEARCH_URL.to_string(),
        };

        let default_region = get("JOBSCOUT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());

        let default_sites = get("JOBSCOUT_SITES")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            search_url,
            default_region,
            default_sites,
        })
    }
}
