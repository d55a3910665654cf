//! Search request construction: URL template plus a fixed browser header set.

use crate::amazon::regions::Region;

/// Headers sent with every search, mimicking a desktop Chrome on Windows.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    ),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Connection", "keep-alive"),
];

/// A fully built search request, ready for the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
}

impl SearchRequest {
    /// Builds the search request for `query` against `base_url`.
    ///
    /// The query is not validated.
    pub fn new(base_url: &str, query: &str, headers: &[(&'static str, &'static str)]) -> Self {
        Self { url: search_url(base_url, query), headers: headers.to_vec() }
    }

    /// Builds the search request with [`BROWSER_HEADERS`].
    pub fn with_browser_headers(base_url: &str, query: &str) -> Self {
        Self::new(base_url, query, BROWSER_HEADERS)
    }

    /// Builds the search request with [`BROWSER_HEADERS`], speaking the region's language.
    pub fn for_region(base_url: &str, query: &str, region: Region) -> Self {
        let mut request = Self::with_browser_headers(base_url, query);
        request.set_header("Accept-Language", region.accept_language());
        request
    }

    fn set_header(&mut self, name: &'static str, value: &'static str) {
        match self.headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(header) => header.1 = value,
            None => self.headers.push((name, value)),
        }
    }

    /// Value of header `name`, if set.
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| *v)
    }
}

/// Interpolates the query into `<base>/s?k=<query>`.
///
/// Spaces become `+`; each space-separated segment is percent-encoded so that
/// characters like `&` or `#` cannot split the query string.
pub fn search_url(base_url: &str, query: &str) -> String {
    let keywords = query
        .split(' ')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("+");

    format!("{}/s?k={}", base_url.trim_end_matches('/'), keywords)
}
