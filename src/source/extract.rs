//! HTML extraction for the anekdoty.ru page layout.
//!
//! The front page lists category links right after two navigation anchors;
//! the list ends at the first styled anchor or the first link into the
//! paginated `/p/` section. Topic pages carry one anekdot per `<p>`.

use reqwest::Url;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use tracing::debug;

/// Anchors preceding the category list on the front page.
const LEADING_NAV_LINKS: usize = 2;

/// Marker of links that leave the category list.
const PAGINATED_SECTION: &str = "/p/";

macro_rules! static_selector {
    ($name:ident, $css:expr) => {{
        static $name: OnceLock<Selector> = OnceLock::new();
        $name.get_or_init(|| Selector::parse($css).expect("valid selector"))
    }};
}

#[allow(clippy::expect_used)]
fn anchor_selector() -> &'static Selector {
    static_selector!(ANCHORS, "body a")
}

#[allow(clippy::expect_used)]
fn paragraph_selector() -> &'static Selector {
    static_selector!(PARAGRAPHS, "body p")
}

/// Extracts subtopic URLs from the front page.
///
/// Skips the leading navigation anchors, then takes anchors in document
/// order while they have no `class` attribute and their `href` does not
/// point into the `/p/` section. The first anchor breaking either rule,
/// lacking an `href`, or not resolvable against `base` ends the list.
///
/// # Examples
///
/// ```
/// use anekdots::source::extract_subtopics;
/// use reqwest::Url;
///
/// let html = r#"<body>
///     <a href="/">home</a><a href="/new/">new</a>
///     <a href="/pro-vovochku/">Вовочка</a>
///     <a class="more" href="/all/">all</a>
/// </body>"#;
/// let base = Url::parse("https://anekdoty.ru/").unwrap();
/// let topics = extract_subtopics(html, &base);
/// assert_eq!(topics.len(), 1);
/// assert_eq!(topics[0].as_str(), "https://anekdoty.ru/pro-vovochku/");
/// ```
#[must_use]
pub fn extract_subtopics(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut topics = Vec::new();

    for anchor in document.select(anchor_selector()).skip(LEADING_NAV_LINKS) {
        let element = anchor.value();
        if element.attr("class").is_some() {
            break;
        }
        let Some(href) = element.attr("href") else {
            break;
        };
        if href.contains(PAGINATED_SECTION) {
            break;
        }
        match base.join(href) {
            Ok(url) => topics.push(url),
            Err(e) => {
                debug!(href, error = %e, "unresolvable subtopic link");
                break;
            }
        }
    }

    topics
}

/// Extracts the raw text of every non-empty paragraph on a page.
///
/// A paragraph counts when it has at least one child node; its text is the
/// concatenation of all descendant text nodes, markup removed.
///
/// # Examples
///
/// ```
/// use anekdots::source::extract_paragraphs;
///
/// let html = "<body><p>Раз <b>два</b></p><p></p><p>три</p></body>";
/// assert_eq!(extract_paragraphs(html), vec!["Раз два", "три"]);
/// ```
#[must_use]
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(paragraph_selector())
        .filter(|p| p.has_children())
        .map(|p| p.text().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://anekdoty.ru/").unwrap()
    }

    const FRONT_PAGE: &str = r#"<html><head><title>Анекдоты</title></head><body>
        <a href="/">Главная</a>
        <a href="/luchshie/">Лучшие</a>
        <a href="/pro-vovochku/">Про Вовочку</a>
        <a href="https://anekdoty.ru/pro-shtirlica/">Про Штирлица</a>
        <a href="/p/2/">Дальше</a>
        <a href="/pro-zhenu/">Про жену</a>
    </body></html>"#;

    #[test]
    fn test_subtopics_stop_at_paginated_link() {
        let topics = extract_subtopics(FRONT_PAGE, &base());
        let topics: Vec<&str> = topics.iter().map(Url::as_str).collect();
        assert_eq!(
            topics,
            vec![
                "https://anekdoty.ru/pro-vovochku/",
                "https://anekdoty.ru/pro-shtirlica/"
            ]
        );
    }

    #[test]
    fn test_subtopics_stop_at_styled_link() {
        let html = r#"<body><a href="/">1</a><a href="/x/">2</a>
            <a href="/a/">a</a><a class="btn" href="/b/">b</a><a href="/c/">c</a></body>"#;
        let topics = extract_subtopics(html, &base());
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].path(), "/a/");
    }

    #[test]
    fn test_subtopics_stop_at_missing_href() {
        let html = r#"<body><a href="/">1</a><a href="/x/">2</a>
            <a href="/a/">a</a><a name="anchor">b</a><a href="/c/">c</a></body>"#;
        assert_eq!(extract_subtopics(html, &base()).len(), 1);
    }

    #[test]
    fn test_subtopics_empty_when_only_navigation() {
        let html = r#"<body><a href="/">1</a><a href="/x/">2</a></body>"#;
        assert!(extract_subtopics(html, &base()).is_empty());
    }

    #[test]
    fn test_subtopics_ignore_head_links() {
        let html = r#"<html><head><link href="/style.css"></head>
            <body><a href="/">1</a><a href="/x/">2</a><a href="/t/">t</a></body></html>"#;
        let topics = extract_subtopics(html, &base());
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].path(), "/t/");
    }

    #[test]
    fn test_paragraphs_concatenate_nested_text() {
        let html = "<body><p>— Доктор, <i>я</i> <b>умру</b>?<br>— Обязательно.</p></body>";
        assert_eq!(
            extract_paragraphs(html),
            vec!["— Доктор, я умру?— Обязательно."]
        );
    }

    #[test]
    fn test_paragraphs_skip_childless() {
        let html = "<body><p></p><p>x</p><p> </p></body>";
        // a whitespace-only paragraph still has a text child
        assert_eq!(extract_paragraphs(html), vec!["x", " "]);
    }

    #[test]
    fn test_paragraphs_none() {
        assert!(extract_paragraphs("<body><div>no paragraphs</div></body>").is_empty());
    }
}
