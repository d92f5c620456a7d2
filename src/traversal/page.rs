//! Fetching an article page and pulling the first wikilink out of its
//! main text.
//!
//! Wikipedia serves a rendered page even for articles that do not
//! exist; those carry a placeholder div and are rejected here the same
//! way as a transport-level 404.

use log2::debug;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html};

use super::filter::is_qualifying_link;
use super::site::SiteConfig;
use super::urls::{is_same_article, to_absolute_url};
use crate::error::{PathError, Result};

/// Fetch `url` and parse the response body into a queryable document.
/// A 404 becomes [`PathError::NonexistentArticle`]; any other transport
/// fault passes through as-is.
pub async fn fetch_and_parse(url: &str, client: &Client) -> Result<Html> {
    let response = client.get(url).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(PathError::NonexistentArticle(url.to_string()));
    }

    let html = response.error_for_status()?.text().await?;
    Ok(Html::parse_document(&html))
}

/// Find the element holding the article's main text. A page without
/// the container is not a renderable article.
pub(crate) fn locate_main_content<'a>(
    document: &'a Html,
    url: &str,
    site: &SiteConfig,
) -> Result<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().id() == Some(site.main_content_id.as_str()))
        .ok_or_else(|| PathError::NonexistentArticle(url.to_string()))
}

/// Reject main text that is wikipedia's "no such article" placeholder.
/// The fetch itself succeeds for those pages, so this is checked after
/// parsing.
pub(crate) fn reject_if_nonexistent_placeholder(
    content: ElementRef<'_>,
    url: &str,
    site: &SiteConfig,
) -> Result<()> {
    let is_placeholder = content.descendants().filter_map(ElementRef::wrap).any(|el| {
        el.value().name() == "div"
            && el
                .value()
                .classes()
                .any(|class| class == site.missing_article_class)
    });

    if is_placeholder {
        return Err(PathError::NonexistentArticle(url.to_string()));
    }
    Ok(())
}

/// Direct `<p>` children of the content region, in document order.
/// Nested paragraphs are not scanned.
fn direct_paragraphs<'a>(content: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    content
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p")
}

/// First qualifying wikilink in one paragraph, as a relative URL.
/// Candidates pointing back at `current_url` are skipped; `None` if the
/// paragraph has no other qualifying link.
pub fn first_qualifying_link_in_paragraph(
    paragraph: ElementRef<'_>,
    current_url: &str,
    site: &SiteConfig,
) -> Option<String> {
    paragraph
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| is_qualifying_link(*el, site))
        .filter_map(|el| el.value().attr("href"))
        .find(|href| !is_same_article(href, current_url, site))
        .map(str::to_string)
}

/// The absolute URL of the first wikilink in the main text of the page
/// at `url`. Paragraphs are scanned in document order until one yields
/// a link; [`PathError::NoOutgoingLink`] if none does.
pub async fn first_link_on_page(url: &str, client: &Client, site: &SiteConfig) -> Result<String> {
    let document = fetch_and_parse(url, client).await?;
    let content = locate_main_content(&document, url, site)?;
    reject_if_nonexistent_placeholder(content, url, site)?;

    for paragraph in direct_paragraphs(content) {
        if let Some(link) = first_qualifying_link_in_paragraph(paragraph, url, site) {
            debug!("first wikilink on {}: {}", url, link);
            return Ok(to_absolute_url(&link, site));
        }
    }

    Err(PathError::NoOutgoingLink(url.to_string()))
}
