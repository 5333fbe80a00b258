//! Page sources and HTML extraction.
//!
//! A [`PageSource`] turns a URL into a page body, or nothing when the page
//! cannot be fetched. The collector only depends on this trait, so pages can
//! come from the network ([`HttpSource`]) or from memory ([`StaticSource`]).

pub mod extract;
pub mod http;

pub use extract::{extract_paragraphs, extract_subtopics};
pub use http::HttpSource;

use reqwest::Url;
use std::collections::HashMap;
use tracing::warn;

/// Front page of the scraped site.
pub const DEFAULT_BASE_URL: &str = "https://anekdoty.ru/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("anekdots/", env!("CARGO_PKG_VERSION"));

/// Source of HTML pages.
///
/// Implementations report unreachable pages by returning `None` and are
/// expected to log the reason themselves.
pub trait PageSource {
    /// Fetches the page at `url`.
    fn fetch(&self, url: &Url) -> Option<String>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch(&self, url: &Url) -> Option<String> {
        (**self).fetch(url)
    }
}

/// In-memory page source keyed by absolute URL.
///
/// Unknown URLs behave like unreachable pages.
///
/// # Examples
///
/// ```
/// use anekdots::source::{PageSource, StaticSource};
/// use reqwest::Url;
///
/// let source = StaticSource::new().with_page("https://example.org", "<p>hi</p>");
/// let url = Url::parse("https://example.org/").unwrap();
/// assert_eq!(source.fetch(&url).as_deref(), Some("<p>hi</p>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
}

impl StaticSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page. The key is normalized the same way [`Url`] serializes it.
    #[must_use]
    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Self {
        let key = Url::parse(url).map_or_else(|_| url.to_string(), String::from);
        self.pages.insert(key, html.into());
        self
    }
}

impl PageSource for StaticSource {
    fn fetch(&self, url: &Url) -> Option<String> {
        let page = self.pages.get(url.as_str()).cloned();
        if page.is_none() {
            warn!(%url, "target site is unreachable");
        }
        page
    }
}
