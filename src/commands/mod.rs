mod errors;
mod params;

pub use errors::CommandError;
pub use params::{
    BuildParams, Cli, Command, InspectParams, OutputFormat, SitesParams, SuggestParams,
};

use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::{self, JOB_SITES, REGIONS};
use crate::config::Config;
use crate::form::SearchForm;
use crate::format::{format_inspection, format_summary};
use crate::open::{Launcher, SystemLauncher};
use crate::query::{
    ANY_REGION, QueryBuilder, SearchRequest, Timeline, inspect_search_url, resolve_timeline_arg,
};

#[derive(Serialize)]
struct BuildOutput<'a> {
    url: &'a str,
    query: &'a str,
    request: &'a SearchRequest,
}

/// Command dispatcher holding configuration, the query builder, and the browser launcher.
pub struct JobScout<L = SystemLauncher> {
    config: Config,
    builder: QueryBuilder,
    launcher: L,
}

impl JobScout<SystemLauncher> {
    pub fn new(config: Config) -> Self {
        Self::with_launcher(config, SystemLauncher)
    }
}

impl<L: Launcher> JobScout<L> {
    pub fn with_launcher(config: Config, launcher: L) -> Self {
        let builder = QueryBuilder::with_base_url(&config.search_url);
        Self {
            config,
            builder,
            launcher,
        }
    }

    pub fn run(&self, command: Command, out: &mut impl Write) -> Result<(), CommandError> {
        match command {
            Command::Build(params) => self.build(params, out),
            Command::Sites(params) => self.sites(params, out),
            Command::Regions => self.regions(out),
            Command::Suggest(params) => self.suggest(params, out),
            Command::Inspect(params) => self.inspect(params, out),
        }
    }

    fn build(&self, params: BuildParams, out: &mut impl Write) -> Result<(), CommandError> {
        let form = self.fill_form(&params)?;
        let request = form.submit()?;

        info!(
            title = %request.job_title,
            sites = request.selected_sites.len(),
            locations = request.locations.len(),
            "cmd:build"
        );
        warn_on_passthrough(&request);

        let query = self.builder.build_query(&request);
        let url = self.builder.build_search_url(&request);
        debug!(%url, "search URL built");

        match params.format {
            OutputFormat::Url => writeln!(out, "{url}")?,
            OutputFormat::Summary => write!(out, "{}", format_summary(&request, &query, &url))?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&BuildOutput {
                    url: &url,
                    query: &query,
                    request: &request,
                })?;
                writeln!(out, "{json}")?;
            }
        }
        out.flush()?;

        if params.open {
            self.launcher.launch(&url).inspect_err(|e| {
                warn!(error = %e, "failed to open browser");
            })?;
            info!("search opened in browser");
        }

        Ok(())
    }

    /// Seed the form from a request file or defaults, then apply flags on top.
    fn fill_form(&self, params: &BuildParams) -> Result<SearchForm, CommandError> {
        let mut form = match &params.request {
            Some(path) => SearchForm::from(read_request(path)?),
            None => {
                let mut form = SearchForm::default();
                form.set_region(self.config.default_region.clone());
                form
            }
        };

        if let Some(title) = &params.title {
            form.set_job_title(title.clone());
        }

        if params.all_sites {
            form.select_all_sites(JOB_SITES);
        }
        if let Some(pattern) = &params.sites_matching {
            for site in catalog::filter_sites(pattern)? {
                form.toggle_site(site, true);
            }
        }
        for site in &params.sites {
            if !JOB_SITES.contains(&site.as_str()) {
                debug!(%site, "site not in catalog");
            }
            form.toggle_site(site, true);
        }
        if form.selected_sites().is_empty() {
            for site in &self.config.default_sites {
                form.toggle_site(site, true);
            }
        }

        for location in &params.locations {
            form.add_location(location, "");
        }
        if params.city.is_some() || params.state.is_some() {
            form.add_location(
                params.city.as_deref().unwrap_or(""),
                params.state.as_deref().unwrap_or(""),
            );
        }

        if params.remote {
            form.set_remote_work(true);
        }
        if params.exact {
            form.set_exact_match(true);
        }
        if let Some(timeline) = &params.timeline {
            form.set_timeline(resolve_timeline_arg(timeline));
        }
        if let Some(region) = &params.region {
            form.set_region(region.trim());
        }

        Ok(form)
    }

    fn sites(&self, params: SitesParams, out: &mut impl Write) -> Result<(), CommandError> {
        let sites = match &params.pattern {
            Some(pattern) => catalog::filter_sites(pattern)?,
            None => JOB_SITES.to_vec(),
        };
        for site in sites {
            writeln!(out, "{site}")?;
        }
        Ok(())
    }

    fn regions(&self, out: &mut impl Write) -> Result<(), CommandError> {
        for (code, label) in REGIONS {
            writeln!(out, "{code}\t{label}")?;
        }
        Ok(())
    }

    fn suggest(&self, params: SuggestParams, out: &mut impl Write) -> Result<(), CommandError> {
        for title in catalog::suggest_titles(&params.text) {
            writeln!(out, "{title}")?;
        }
        Ok(())
    }

    fn inspect(&self, params: InspectParams, out: &mut impl Write) -> Result<(), CommandError> {
        let inspected = inspect_search_url(params.url.trim())?;
        write!(out, "{}", format_inspection(&inspected))?;
        Ok(())
    }
}

fn read_request(path: &Path) -> Result<SearchRequest, CommandError> {
    let read_err = |source| CommandError::RequestRead {
        path: path.to_path_buf(),
        source,
    };
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };
    serde_json::from_str(&raw).map_err(|source| CommandError::RequestParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Timeline and region tokens are sent verbatim; flag the ones that look wrong.
fn warn_on_passthrough(request: &SearchRequest) {
    if !Timeline::classify(&request.timeline).is_recognized() {
        warn!(timeline = %request.timeline, "unrecognized timeline token, sending as is");
    }
    if !request.region.is_empty()
        && request.region != ANY_REGION
        && catalog::region_label(&request.region).is_none()
    {
        warn!(region = %request.region, "unknown region code, sending as is");
    }
}
