/// Maximum number of hops allowed before giving up on Philosophy
pub const MAX_HOPS: usize = 100;

/// The fixed site constants, bundled so they can be passed by reference
/// into every component. Built once at startup; tests rebase it onto a
/// mock server with [`SiteConfig::for_base`].
pub struct SiteConfig {
    /// Base of all (english) wikipedia URLs, without trailing slash
    pub base_url: String,
    /// Top level directory that all article-relative URLs begin with
    pub article_prefix: String,
    /// URL of the article that ends a successful traversal
    pub target_url: String,
    /// Id of the element holding the main text of an article page
    pub main_content_id: String,
    /// Div class rendered on pages for articles that do not exist
    pub missing_article_class: String,
    /// Href substrings marking special pages (internal, user, help, file
    /// namespaces) that never count as article links
    pub special_page_markers: Vec<String>,
    /// Hop ceiling for one traversal
    pub max_hops: usize,
}

impl SiteConfig {
    /// Constants for english wikipedia.
    pub fn wikipedia() -> Self {
        Self::for_base("https://en.wikipedia.org")
    }

    /// Same constants rebased onto an arbitrary host.
    pub fn for_base(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            article_prefix: "/wiki/".to_string(),
            target_url: format!("{}/wiki/Philosophy", base_url),
            main_content_id: "mw-content-text".to_string(),
            missing_article_class: "noarticletext".to_string(),
            special_page_markers: vec![
                "Wikipedia:".to_string(),
                "User:".to_string(),
                "Help:".to_string(),
                "File:".to_string(),
            ],
            max_hops: MAX_HOPS,
        }
    }
}
