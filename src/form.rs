//! Editable search form state and submission validation.

use crate::query::{DEFAULT_REGION, SearchRequest};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Job title is required")]
    EmptyJobTitle,

    #[error("Please select at least one job site")]
    NoSitesSelected,
}

/// Mutable form state. [`SearchForm::submit`] validates it into a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    job_title: String,
    selected_sites: Vec<String>,
    locations: Vec<String>,
    remote_work: bool,
    timeline: String,
    region: String,
    exact_match: bool,
}

impl Default for SearchForm {
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

impl From<SearchRequest> for SearchForm {
    fn from(req: SearchRequest) -> Self {
        Self {
            job_title: req.job_title,
            selected_sites: req.selected_sites,
            locations: req.locations,
            remote_work: req.remote_work,
            timeline: req.timeline,
            region: req.region,
            exact_match: req.exact_match,
        }
    }
}

/// Join trimmed city and state with `", "`, skipping empty parts.
/// `None` when both are empty.
pub fn compose_location(city: &str, state: &str) -> Option<String> {
    let parts: Vec<&str> = [city.trim(), state.trim()]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

impl SearchForm {
    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn selected_sites(&self) -> &[String] {
        &self.selected_sites
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn set_job_title(&mut self, title: impl Into<String>) {
        self.job_title = title.into();
    }

    pub fn set_remote_work(&mut self, remote: bool) {
        self.remote_work = remote;
    }

    pub fn set_timeline(&mut self, timeline: impl Into<String>) {
        self.timeline = timeline.into();
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    pub fn set_exact_match(&mut self, exact: bool) {
        self.exact_match = exact;
    }

    pub fn toggle_site(&mut self, site: &str, checked: bool) {
        if checked {
            if !self.selected_sites.iter().any(|s| s == site) {
                self.selected_sites.push(site.to_string());
            }
        } else {
            self.remove_site(site);
        }
    }

    pub fn remove_site(&mut self, site: &str) {
        self.selected_sites.retain(|s| s != site);
    }

    /// Replace the selection with every catalog site, in catalog order.
    pub fn select_all_sites(&mut self, catalog: &[&str]) {
        self.selected_sites = catalog.iter().map(|s| s.to_string()).collect();
    }

    pub fn clear_sites(&mut self) {
        self.selected_sites.clear();
    }

    /// Append a location composed from city and state.
    ///
    /// Returns `false` when both parts are blank or the location is already listed.
    pub fn add_location(&mut self, city: &str, state: &str) -> bool {
        let Some(location) = compose_location(city, state) else {
            return false;
        };
        if self.locations.contains(&location) {
            return false;
        }
        self.locations.push(location);
        true
    }

    pub fn remove_location(&mut self, location: &str) {
        self.locations.retain(|l| l != location);
    }

    pub fn submit(&self) -> Result<SearchRequest, FormError> {
        if self.job_title.trim().is_empty() {
            return Err(FormError::EmptyJobTitle);
        }
        if self.selected_sites.is_empty() {
            return Err(FormError::NoSitesSelected);
        }
        Ok(SearchRequest {
            job_title: self.job_title.clone(),
            selected_sites: self.selected_sites.clone(),
            locations: self.locations.clone(),
            remote_work: self.remote_work,
            timeline: self.timeline.clone(),
            region: self.region.clone(),
            exact_match: self.exact_match,
        })
    }
}
