//! Corpus collection over a page source.
//!
//! Walks every subtopic listed on the front page, then the subtopic's
//! numbered pages until one comes back empty, and writes each preprocessed
//! paragraph as one corpus line.

use crate::error::{FetchError, Result};
use crate::io::CorpusWriter;
use crate::source::{PageSource, extract_paragraphs, extract_subtopics};
use crate::text::preprocess;
use reqwest::Url;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, warn};

/// Default corpus location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data/raw_data/anekdoty_ru.txt";

/// Collector settings.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Front page listing the subtopics.
    pub base_url: Url,
    /// Highest page number fetched per subtopic; `None` walks until a page
    /// yields nothing.
    pub max_pages: Option<usize>,
}

impl CollectorConfig {
    /// Creates a config for `base_url` without a page limit.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            max_pages: None,
        }
    }

    /// Caps the number of pages fetched per subtopic.
    #[must_use]
    pub const fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

/// Summary of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectStats {
    /// Subtopics discovered on the front page.
    pub topics: usize,
    /// Pages whose items were written.
    pub pages: usize,
    /// Items written to the corpus.
    pub items: usize,
}

/// Collects anekdots from a [`PageSource`] into a corpus sink.
///
/// # Examples
///
/// ```
/// use anekdots::collector::{Collector, CollectorConfig};
/// use anekdots::io::CorpusWriter;
/// use anekdots::source::StaticSource;
/// use reqwest::Url;
///
/// let source = StaticSource::new()
///     .with_page(
///         "https://anekdoty.ru/",
///         r#"<body><a href="/">1</a><a href="/x/">2</a><a href="/t/">t</a></body>"#,
///     )
///     .with_page("https://anekdoty.ru/t/", "<body><p>Шутка ,  смешная!!</p></body>");
///
/// let config = CollectorConfig::new(Url::parse("https://anekdoty.ru/").unwrap());
/// let mut sink = CorpusWriter::new(Vec::new());
/// let stats = Collector::new(source, config).collect(&mut sink).unwrap();
///
/// assert_eq!(stats.items, 1);
/// let corpus = String::from_utf8(sink.finish().unwrap()).unwrap();
/// assert_eq!(corpus, "Шутка, смешная!\n");
/// ```
#[derive(Debug)]
pub struct Collector<S: PageSource> {
    source: S,
    config: CollectorConfig,
}

impl<S: PageSource> Collector<S> {
    /// Creates a collector.
    pub const fn new(source: S, config: CollectorConfig) -> Self {
        Self { source, config }
    }

    /// Runs the collection, writing items to `sink` as they arrive.
    ///
    /// An unreachable front page yields an empty run. Within a subtopic the
    /// first page is always written (even when empty); later pages are
    /// fetched until one yields no items.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails or a page URL cannot be
    /// built.
    pub fn collect<W: Write>(&self, sink: &mut CorpusWriter<W>) -> Result<CollectStats> {
        let mut stats = CollectStats::default();

        let Some(front_page) = self.source.fetch(&self.config.base_url) else {
            warn!(url = %self.config.base_url, "no front page, nothing to collect");
            return Ok(stats);
        };

        let topics = extract_subtopics(&front_page, &self.config.base_url);
        info!(count = topics.len(), "discovered subtopics");
        stats.topics = topics.len();

        for topic in &topics {
            let before = stats.items;

            let items = self.page_items(topic);
            sink.write_items(&items)?;
            stats.pages += 1;
            stats.items += items.len();

            let mut page = 2;
            while self.config.max_pages.is_none_or(|max| page <= max) {
                let url = page_url(topic, page)?;
                let items = self.page_items(&url);
                if items.is_empty() {
                    break;
                }
                sink.write_items(&items)?;
                stats.pages += 1;
                stats.items += items.len();
                page += 1;
            }

            info!(
                topic = %topic,
                pages = page - 1,
                items = stats.items - before,
                "subtopic collected"
            );
        }

        Ok(stats)
    }

    /// Fetches a page and returns its preprocessed paragraphs.
    fn page_items(&self, url: &Url) -> Vec<String> {
        let Some(html) = self.source.fetch(url) else {
            return Vec::new();
        };

        let items: Vec<String> = extract_paragraphs(&html)
            .iter()
            .map(|paragraph| preprocess(paragraph))
            .collect();
        debug!(%url, count = items.len(), "extracted items");
        items
    }
}

/// Builds the URL of page `page` of a subtopic: the subtopic URL with
/// `"{page}/"` appended.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if the result does not parse.
pub fn page_url(topic: &Url, page: usize) -> Result<Url> {
    let raw = format!("{topic}{page}/");
    Url::parse(&raw).map_err(|e| {
        FetchError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;

    const BASE: &str = "https://anekdoty.ru/";

    fn front_page(topics: &[&str]) -> String {
        let links: String = topics
            .iter()
            .map(|t| format!(r#"<a href="{t}">{t}</a>"#))
            .collect();
        format!(r#"<body><a href="/">home</a><a href="/best/">best</a>{links}<a href="/p/2/">next</a></body>"#)
    }

    fn page(items: &[&str]) -> String {
        let paragraphs: String = items.iter().map(|i| format!("<p>{i}</p>")).collect();
        format!("<body>{paragraphs}</body>")
    }

    fn run(source: StaticSource, config: CollectorConfig) -> (CollectStats, String) {
        let mut sink = CorpusWriter::new(Vec::new());
        let stats = Collector::new(source, config).collect(&mut sink).unwrap();
        let corpus = String::from_utf8(sink.finish().unwrap()).unwrap();
        (stats, corpus)
    }

    fn config() -> CollectorConfig {
        CollectorConfig::new(Url::parse(BASE).unwrap())
    }

    #[test]
    fn test_page_url() {
        let topic = Url::parse("https://anekdoty.ru/pro-vovochku/").unwrap();
        assert_eq!(
            page_url(&topic, 2).unwrap().as_str(),
            "https://anekdoty.ru/pro-vovochku/2/"
        );
        assert_eq!(
            page_url(&topic, 15).unwrap().as_str(),
            "https://anekdoty.ru/pro-vovochku/15/"
        );
    }

    #[test]
    fn test_unreachable_front_page() {
        let (stats, corpus) = run(StaticSource::new(), config());
        assert_eq!(stats, CollectStats::default());
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_walks_pages_until_empty() {
        let source = StaticSource::new()
            .with_page(BASE, front_page(&["/a/"]))
            .with_page("https://anekdoty.ru/a/", page(&["один"]))
            .with_page("https://anekdoty.ru/a/2/", page(&["два"]))
            .with_page("https://anekdoty.ru/a/3/", page(&[]))
            .with_page("https://anekdoty.ru/a/4/", page(&["не дойдём"]));

        let (stats, corpus) = run(source, config());
        assert_eq!(corpus, "один\nдва\n");
        assert_eq!(
            stats,
            CollectStats {
                topics: 1,
                pages: 2,
                items: 2
            }
        );
    }

    #[test]
    fn test_missing_first_page_still_tries_second() {
        let source = StaticSource::new()
            .with_page(BASE, front_page(&["/a/"]))
            .with_page("https://anekdoty.ru/a/2/", page(&["второй"]));

        let (stats, corpus) = run(source, config());
        assert_eq!(corpus, "второй\n");
        assert_eq!(stats.pages, 2);
    }

    #[test]
    fn test_topics_in_order() {
        let source = StaticSource::new()
            .with_page(BASE, front_page(&["/a/", "/b/"]))
            .with_page("https://anekdoty.ru/a/", page(&["а1", "а2"]))
            .with_page("https://anekdoty.ru/b/", page(&["б1"]));

        let (stats, corpus) = run(source, config());
        assert_eq!(corpus, "а1\nа2\nб1\n");
        assert_eq!(stats.topics, 2);
        assert_eq!(stats.items, 3);
    }

    #[test]
    fn test_items_are_preprocessed_and_empty_ones_kept() {
        let source = StaticSource::new()
            .with_page(BASE, front_page(&["/a/"]))
            .with_page(
                "https://anekdoty.ru/a/",
                page(&["— Ну ,  <b>что</b>??", "(&#9733;)"]),
            );

        let (stats, corpus) = run(source, config());
        assert_eq!(corpus, "— Ну, что?\n\n");
        assert_eq!(stats.items, 2);
    }

    #[test]
    fn test_max_pages_limits_walk() {
        let source = StaticSource::new()
            .with_page(BASE, front_page(&["/a/"]))
            .with_page("https://anekdoty.ru/a/", page(&["1"]))
            .with_page("https://anekdoty.ru/a/2/", page(&["2"]))
            .with_page("https://anekdoty.ru/a/3/", page(&["3"]));

        let (stats, corpus) = run(source, config().with_max_pages(2));
        assert_eq!(corpus, "1\n2\n");
        assert_eq!(stats.pages, 2);
    }

    #[test]
    fn test_max_pages_one_fetches_only_first_page() {
        let source = StaticSource::new()
            .with_page(BASE, front_page(&["/a/"]))
            .with_page("https://anekdoty.ru/a/", page(&["1"]))
            .with_page("https://anekdoty.ru/a/2/", page(&["2"]));

        let (_, corpus) = run(source, config().with_max_pages(1));
        assert_eq!(corpus, "1\n");
    }
}
