use crate::catalog::region_label;
use crate::query::{ANY_REGION, InspectedUrl, SearchRequest, Timeline};

/// Sites shown by name before collapsing the rest into "+N more".
const VISIBLE_SITES: usize = 8;

fn format_sites(sites: &[String]) -> String {
    if sites.is_empty() {
        return "(none)".to_string();
    }
    let mut out = sites
        .iter()
        .take(VISIBLE_SITES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if sites.len() > VISIBLE_SITES {
        out.push_str(&format!(" +{} more", sites.len() - VISIBLE_SITES));
    }
    out
}

fn format_region(region: &str) -> String {
    if region.is_empty() || region == ANY_REGION {
        return "Any Region".to_string();
    }
    match region_label(region) {
        Some(label) => format!("{label} ({region})"),
        None => region.to_string(),
    }
}

fn format_timeline(token: &str) -> String {
    match Timeline::classify(token) {
        Timeline::Any => Timeline::Any.label(),
        Timeline::Unrecognized => format!("{token} (unrecognized, sent as is)"),
        t => format!("{} ({token})", t.label()),
    }
}

/// Human-readable summary of a search followed by its URL.
pub fn format_summary(request: &SearchRequest, query: &str, url: &str) -> String {
    let mut out = request.job_title.clone();
    if request.exact_match {
        out.push_str(" (exact match)");
    }
    out.push_str("\n\n");

    out.push_str(&format!(
        "sites: {} {}\n",
        request.selected_sites.len(),
        format_sites(&request.selected_sites)
    ));
    if !request.locations.is_empty() {
        out.push_str(&format!("locations: {}\n", request.locations.join("; ")));
    }
    out.push_str(&format!(
        "remote: {}\n",
        if request.remote_work { "yes" } else { "no" }
    ));
    out.push_str(&format!("timeline: {}\n", format_timeline(&request.timeline)));
    out.push_str(&format!("region: {}\n", format_region(&request.region)));
    out.push_str(&format!("\nquery: {query}\n{url}\n"));

    out
}

pub fn format_inspection(inspected: &InspectedUrl) -> String {
    let mut out = format!("endpoint: {}\n", inspected.endpoint);
    out.push_str(&format!(
        "query: {}\n",
        inspected.query.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!(
        "timeline: {}\n",
        format_timeline(inspected.timeline.as_deref().unwrap_or(""))
    ));
    let region = match inspected.region.as_deref() {
        Some(r) => format_region(r),
        None => "Any Region".to_string(),
    };
    out.push_str(&format!("region: {region}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_sites_beyond_limit() {
        let sites: Vec<String> = (0..11).map(|i| format!("site{i}.com")).collect();
        let out = format_sites(&sites);
        assert!(out.ends_with("site7.com +3 more"), "got: {out}");
        assert!(!out.contains("site8.com"));
    }

    #[test]
    fn lists_all_sites_within_limit() {
        let sites = vec!["linkedin.com".to_string(), "indeed.com".to_string()];
        assert_eq!(format_sites(&sites), "linkedin.com, indeed.com");
    }

    #[test]
    fn region_shows_label_and_code() {
        assert_eq!(format_region("countryDE"), "Germany (countryDE)");
        assert_eq!(format_region("any"), "Any Region");
        assert_eq!(format_region("countryZZ"), "countryZZ");
    }

    #[test]
    fn timeline_flags_unrecognized_tokens() {
        assert_eq!(format_timeline("w"), "Past Week (w)");
        assert_eq!(format_timeline(""), "Anytime");
        assert!(format_timeline("x9").contains("unrecognized"));
    }

    #[test]
    fn summary_includes_fields_and_url() {
        let req = SearchRequest {
            job_title: "Software Engineer".into(),
            selected_sites: vec!["linkedin.com".into()],
            locations: vec!["Austin, TX".into()],
            remote_work: true,
            timeline: "d5".into(),
            exact_match: true,
            ..Default::default()
        };
        let out = format_summary(&req, "q", "https://www.google.com/search?q=q");
        assert!(out.starts_with("Software Engineer (exact match)"), "got: {out}");
        assert!(out.contains("sites: 1 linkedin.com"));
        assert!(out.contains("locations: Austin, TX"));
        assert!(out.contains("remote: yes"));
        assert!(out.contains("timeline: Past 5 days (d5)"));
        assert!(out.contains("region: United States (countryUS)"));
        assert!(out.ends_with("https://www.google.com/search?q=q\n"));
    }

    #[test]
    fn inspection_lists_decoded_parts() {
        let inspected = InspectedUrl {
            endpoint: "https://www.google.com/search".into(),
            query: Some("\"UX Designer\" (site:dice.com)".into()),
            timeline: Some("m".into()),
            region: None,
        };
        let out = format_inspection(&inspected);
        assert_eq!(
            out,
            "endpoint: https://www.google.com/search\n\
             query: \"UX Designer\" (site:dice.com)\n\
             timeline: Past Month (m)\n\
             region: Any Region\n"
        );
    }
}
