//! Static catalogs: supported job boards, region codes, and job-title suggestions.

use globset::Glob;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(String),
}

/// Supported job-board domains, in display order.
pub const JOB_SITES: &[&str] = &[
    "linkedin.com",
    "indeed.com",
    "glassdoor.com",
    "monster.com",
    "ziprecruiter.com",
    "careerbuilder.com",
    "simplyhired.com",
    "dice.com",
    "wellfound.com",
    "builtin.com",
    "themuse.com",
    "usajobs.gov",
    "flexjobs.com",
    "remote.co",
    "weworkremotely.com",
    "boards.greenhouse.io",
    "jobs.lever.co",
    "jobs.ashbyhq.com",
    "myworkdayjobs.com",
    "smartrecruiters.com",
];

/// Region codes accepted by the search engine's `cr` parameter, with display labels.
pub const REGIONS: &[(&str, &str)] = &[
    ("any", "Any Region"),
    ("countryUS", "United States"),
    ("countryCA", "Canada"),
    ("countryGB", "United Kingdom"),
    ("countryDE", "Germany"),
    ("countryFR", "France"),
    ("countryAU", "Australia"),
    ("countryIN", "India"),
    ("countrySG", "Singapore"),
];

pub const TITLE_SUGGESTIONS: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "UX Designer",
    "Marketing Manager",
    "Sales Representative",
    "DevOps Engineer",
    "Business Analyst",
    "Project Manager",
    "Frontend Developer",
];

pub fn region_label(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Case-insensitive substring match against [`TITLE_SUGGESTIONS`].
/// Empty input yields nothing.
pub fn suggest_titles(input: &str) -> Vec<&'static str> {
    if input.is_empty() {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    TITLE_SUGGESTIONS
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .collect()
}

/// Catalog sites matching a glob pattern (e.g. `*.com`, `jobs.*`), in catalog order.
pub fn filter_sites(pattern: &str) -> Result<Vec<&'static str>, CatalogError> {
    let matcher = Glob::new(pattern)
        .map_err(|e| CatalogError::InvalidPattern(e.to_string()))?
        .compile_matcher();
    Ok(JOB_SITES
        .iter()
        .copied()
        .filter(|site| matcher.is_match(site))
        .collect())
}
