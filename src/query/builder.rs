use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::{ANY_REGION, SearchRequest};

const SEARCH_BASE: &str = "https://www.google.com/search";

/// Characters to percent-encode in a query component.
/// Leaves alphanumerics and `- _ . ! ~ * ' ( )` intact, the same set a browser's
/// `encodeURIComponent` preserves, so `+` and `&` in free text survive decoding.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const REMOTE_TERMS: [&str; 3] = ["remote", "\"work from home\"", "\"work remotely\""];

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, QUERY_COMPONENT).to_string()
}

fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

/// `(a OR b OR c)`
fn disjunction<I, S>(terms: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = terms
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("({joined})")
}

/// Builds search-engine URLs from a [`SearchRequest`].
///
/// Pure and deterministic: no I/O, no validation of the timeline or region
/// tokens, which are passed through verbatim.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            base_url: SEARCH_BASE.to_string(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assemble the unencoded query: title, site clauses, remote keywords, locations.
    pub fn build_query(&self, request: &SearchRequest) -> String {
        let title = if request.exact_match {
            quote(&request.job_title)
        } else {
            request.job_title.clone()
        };
        let mut parts = vec![title];

        if !request.selected_sites.is_empty() {
            parts.push(disjunction(
                request.selected_sites.iter().map(|s| format!("site:{s}")),
            ));
        }

        if request.remote_work {
            parts.push(disjunction(REMOTE_TERMS));
        }

        if !request.locations.is_empty() {
            parts.push(disjunction(request.locations.iter().map(|l| quote(l))));
        }

        parts.join(" ")
    }

    pub fn build_search_url(&self, request: &SearchRequest) -> String {
        let query = self.build_query(request);
        let sep = if self.base_url.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{sep}q={}", self.base_url, encode_component(&query));

        if !request.timeline.is_empty() {
            url.push_str(&format!("&tbs=qdr:{}", request.timeline));
        }

        if !request.region.is_empty() && request.region != ANY_REGION {
            url.push_str(&format!("&cr={}", request.region));
        }

        url
    }
}

/// Build a search URL against the default search endpoint.
pub fn build_search_url(request: &SearchRequest) -> String {
    QueryBuilder::new().build_search_url(request)
}

/// Decoded parts of a search URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedUrl {
    /// URL without query string or fragment.
    pub endpoint: String,
    pub query: Option<String>,
    /// Timeline token with the `qdr:` prefix removed.
    pub timeline: Option<String>,
    pub region: Option<String>,
}

/// Parse a search URL and decode its `q`, `tbs` and `cr` parameters.
pub fn inspect_search_url(raw: &str) -> Result<InspectedUrl, url::ParseError> {
    let parsed = Url::parse(raw)?;

    let mut endpoint = parsed.clone();
    endpoint.set_query(None);
    endpoint.set_fragment(None);

    let mut inspected = InspectedUrl {
        endpoint: endpoint.to_string(),
        query: None,
        timeline: None,
        region: None,
    };

    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "q" if inspected.query.is_none() => inspected.query = Some(value.into_owned()),
            "tbs" if inspected.timeline.is_none() => {
                let token = value.strip_prefix("qdr:").unwrap_or(value.as_ref());
                inspected.timeline = Some(token.to_string());
            }
            "cr" if inspected.region.is_none() => inspected.region = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(inspected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(title: &str) -> SearchRequest {
        SearchRequest {
            job_title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn exact_single_site_with_timeline_and_region() {
        let req = SearchRequest {
            job_title: "Software Engineer".into(),
            selected_sites: vec!["linkedin.com".into()],
            timeline: "w".into(),
            region: "countryUS".into(),
            exact_match: true,
            ..Default::default()
        };

        let url = build_search_url(&req);
        assert!(url.starts_with("https://www.google.com/search?q="), "got: {url}");
        assert!(url.contains("&tbs=qdr:w"), "got: {url}");
        assert!(url.contains("&cr=countryUS"), "got: {url}");

        let inspected = inspect_search_url(&url).unwrap();
        assert_eq!(
            inspected.query.as_deref(),
            Some(r#""Software Engineer" (site:linkedin.com)"#)
        );
        assert_eq!(inspected.timeline.as_deref(), Some("w"));
        assert_eq!(inspected.region.as_deref(), Some("countryUS"));
    }

    #[test]
    fn multi_site_remote_location_any_region() {
        let req = SearchRequest {
            job_title: "Data Scientist".into(),
            selected_sites: vec!["indeed.com".into(), "linkedin.com".into()],
            locations: vec!["Austin, TX".into()],
            remote_work: true,
            timeline: String::new(),
            region: "any".into(),
            exact_match: false,
        };

        let url = build_search_url(&req);
        let query = inspect_search_url(&url).unwrap().query.unwrap();
        assert_eq!(
            query,
            r#"Data Scientist (site:indeed.com OR site:linkedin.com) (remote OR "work from home" OR "work remotely") ("Austin, TX")"#
        );
        assert!(!url.contains("tbs="), "got: {url}");
        assert!(!url.contains("cr="), "got: {url}");
    }

    #[test]
    fn title_only_when_no_filters() {
        let query = QueryBuilder::new().build_query(&request("Product Manager"));
        assert_eq!(query, "Product Manager");
    }

    #[test]
    fn encodes_spaces_as_percent_20() {
        let url = build_search_url(&SearchRequest {
            region: "any".into(),
            ..request("UX Designer")
        });
        assert_eq!(url, "https://www.google.com/search?q=UX%20Designer");
    }

    #[test]
    fn encodes_reserved_characters() {
        let url = build_search_url(&SearchRequest {
            region: "any".into(),
            exact_match: true,
            ..request("C++ & Rust #1")
        });
        assert_eq!(
            url,
            "https://www.google.com/search?q=%22C%2B%2B%20%26%20Rust%20%231%22"
        );
    }

    #[test]
    fn multiple_locations_are_each_quoted_in_order() {
        let req = SearchRequest {
            locations: vec!["San Francisco, CA".into(), "New York, NY".into()],
            ..request("Engineer")
        };
        assert_eq!(
            QueryBuilder::new().build_query(&req),
            r#"Engineer ("San Francisco, CA" OR "New York, NY")"#
        );
    }

    #[test]
    fn malformed_timeline_passes_through() {
        let url = build_search_url(&SearchRequest {
            timeline: "x9".into(),
            ..request("Engineer")
        });
        assert!(url.contains("&tbs=qdr:x9"), "got: {url}");
    }

    #[test]
    fn custom_timeline_passes_through() {
        let url = build_search_url(&SearchRequest {
            timeline: "d5".into(),
            ..request("Engineer")
        });
        assert!(url.contains("&tbs=qdr:d5"), "got: {url}");
    }

    #[test]
    fn empty_region_adds_no_cr() {
        let url = build_search_url(&SearchRequest {
            region: String::new(),
            ..request("Engineer")
        });
        assert!(!url.contains("cr="), "got: {url}");
    }

    #[test]
    fn custom_base_url_with_existing_query_appends() {
        let builder = QueryBuilder::with_base_url("https://search.example/find?hl=en");
        let url = builder.build_search_url(&request("Engineer"));
        assert!(
            url.starts_with("https://search.example/find?hl=en&q=Engineer"),
            "got: {url}"
        );
    }

    #[test]
    fn inspect_strips_query_from_endpoint() {
        let inspected =
            inspect_search_url("https://www.google.com/search?q=a&tbs=qdr:h#frag").unwrap();
        assert_eq!(inspected.endpoint, "https://www.google.com/search");
        assert_eq!(inspected.query.as_deref(), Some("a"));
        assert_eq!(inspected.timeline.as_deref(), Some("h"));
        assert_eq!(inspected.region, None);
    }

    #[test]
    fn inspect_rejects_relative_url() {
        assert!(inspect_search_url("/search?q=a").is_err());
    }

    fn arb_request() -> impl Strategy<Value = SearchRequest> {
        (
            "[A-Za-z][A-Za-z ]{0,20}",
            prop::collection::vec("[a-z]{1,10}\\.(com|io|co)", 0..6),
            prop::collection::vec("[A-Za-z][A-Za-z ,]{0,15}", 0..4),
            any::<bool>(),
            prop_oneof![
                Just(String::new()),
                "[hdwm]",
                "[hdwm][1-9][0-9]{0,2}"
            ],
            prop_oneof![Just("any".to_string()), "country[A-Z]{2}"],
            any::<bool>(),
        )
            .prop_map(
                |(job_title, selected_sites, locations, remote_work, timeline, region, exact_match)| {
                    SearchRequest {
                        job_title,
                        selected_sites,
                        locations,
                        remote_work,
                        timeline,
                        region,
                        exact_match,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn one_site_clause_per_selected_site(req in arb_request()) {
            let query = QueryBuilder::new().build_query(&req);
            prop_assert_eq!(query.matches("site:").count(), req.selected_sites.len());
            if !req.selected_sites.is_empty() {
                let clauses = req
                    .selected_sites
                    .iter()
                    .map(|s| format!("site:{s}"))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                let expected = format!("({clauses})");
                prop_assert!(query.contains(&expected));
            }
        }

        #[test]
        fn exact_match_controls_quoting(req in arb_request()) {
            let query = QueryBuilder::new().build_query(&req);
            let quoted = format!("\"{}\"", req.job_title);
            if req.exact_match {
                prop_assert!(query.starts_with(&quoted));
            } else {
                prop_assert!(query.starts_with(&req.job_title));
                prop_assert!(!query.starts_with('"'));
            }
        }

        #[test]
        fn remote_adds_work_from_home(req in arb_request()) {
            let query = QueryBuilder::new().build_query(&req);
            prop_assert_eq!(query.contains("work from home"), req.remote_work);
        }

        #[test]
        fn timeline_and_region_pass_through(req in arb_request()) {
            let url = build_search_url(&req);
            let tbs = format!("tbs=qdr:{}", req.timeline);
            prop_assert_eq!(url.contains(&tbs), !req.timeline.is_empty());
            if req.region == "any" {
                prop_assert!(!url.contains("cr="));
            } else {
                let cr = format!("cr={}", req.region);
                prop_assert!(url.contains(&cr));
            }
        }

        #[test]
        fn query_round_trips_through_url(req in arb_request()) {
            let builder = QueryBuilder::new();
            let url = builder.build_search_url(&req);
            let inspected = inspect_search_url(&url).unwrap();
            prop_assert_eq!(inspected.query, Some(builder.build_query(&req)));
        }

        #[test]
        fn arbitrary_title_round_trips(title in "\\PC{1,40}") {
            let req = SearchRequest { job_title: title, exact_match: true, ..Default::default() };
            let builder = QueryBuilder::new();
            let inspected = inspect_search_url(&builder.build_search_url(&req)).unwrap();
            prop_assert_eq!(inspected.query, Some(builder.build_query(&req)));
        }
    }
}
