//! Failure conditions of a path-to-philosophy search.
//!
//! Every way a traversal can end short of Philosophy gets its own
//! variant carrying the offending value, so the caller can render a
//! precise message. None of these are retried; each one aborts the run.

/// Error type for the traversal.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The supplied start URL is not an english wikipedia article URL.
    #[error("Invalid input: {0}. Must provide a legitimate english wikipedia url.")]
    InvalidInput(String),

    /// The fetch returned 404, or the page rendered wikipedia's
    /// "no such article" placeholder.
    #[error("Encountered a nonexistant wikipedia article: {0}")]
    NonexistentArticle(String),

    /// The article's main text contains no link to another article.
    #[error("Encountered a wikipedia article with no links to other wikipedia articles: {0}")]
    NoOutgoingLink(String),

    /// Following the next link would revisit a URL already on the path.
    #[error("Cycle exists in path to philosophy. Repeated url: {0}")]
    CycleDetected(String),

    /// Philosophy was not reached within the hop ceiling.
    #[error("Hop Limit Reached. Philosophy was not found after {0} hops.")]
    HopLimitReached(usize),

    /// Transport faults other than 404 pass through unmodified.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for traversal operations.
pub type Result<T> = std::result::Result<T, PathError>;
