//! URL helpers for the traversal.
//!
//! Article references are compared as exact strings. Nothing here
//! normalizes case, fragments, or trailing slashes: a relative wikilink
//! becomes absolute by prefix concatenation and two references are the
//! same article iff the strings match.

use super::site::SiteConfig;

/// Converts a site-relative wikilink (e.g. "/wiki/Ant") to an absolute
/// URL (e.g. "https://en.wikipedia.org/wiki/Ant").
pub fn to_absolute_url(relative_link: &str, site: &SiteConfig) -> String {
    format!("{}{}", site.base_url, relative_link)
}

/// Whether `url` is of the proper format to link to a wikipedia
/// article, i.e. starts with the base URL followed by the article
/// directory. Used to validate the user-supplied start URL.
pub fn is_valid_article_url(url: &str, site: &SiteConfig) -> bool {
    url.starts_with(&format!("{}{}", site.base_url, site.article_prefix))
}

/// Whether the given relative wikilink points back at the page
/// currently being parsed.
pub fn is_same_article(relative_link: &str, current_url: &str, site: &SiteConfig) -> bool {
    to_absolute_url(relative_link, site) == current_url
}

/// Whether `url` is the target (Philosophy) article.
pub fn is_terminal_article(url: &str, site: &SiteConfig) -> bool {
    url == site.target_url
}
