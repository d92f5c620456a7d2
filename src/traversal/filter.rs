use scraper::ElementRef;

use super::site::SiteConfig;

/// Whether `element` is an `<a>` tag usable as the next hop of the
/// path. A qualifying link is a plain anchor (any class attribute
/// disqualifies it, which filters out citation markers, redirect
/// notices and the like) whose href points into the article directory
/// and not at a special page (internal, user, help or file namespace).
///
/// Missing attributes simply disqualify the element; this never fails.
pub fn is_qualifying_link(element: ElementRef<'_>, site: &SiteConfig) -> bool {
    let tag = element.value();

    if tag.name() != "a" {
        return false;
    }
    if tag.attr("class").is_some() {
        return false;
    }
    let Some(href) = tag.attr("href") else {
        return false;
    };
    if !href.starts_with(&site.article_prefix) {
        return false;
    }

    !site
        .special_page_markers
        .iter()
        .any(|marker| href.contains(marker.as_str()))
}
