//! The hop-by-hop traversal toward Philosophy.

use log2::info;
use reqwest::Client;

use super::page::first_link_on_page;
use super::site::SiteConfig;
use super::urls::is_terminal_article;
use crate::error::{PathError, Result};

/// Receives each visited URL as it is appended to the path, and the
/// final hop count on success. Injected so the traversal can report
/// live progress without being tied to stdout.
pub trait ProgressSink {
    fn visited(&mut self, url: &str);
    fn finished(&mut self, hops: usize);
}

/// Prints one URL per line as it is visited, then the hop count.
pub struct StdoutSink;

impl ProgressSink for StdoutSink {
    fn visited(&mut self, url: &str) {
        println!("{}", url);
    }

    fn finished(&mut self, hops: usize) {
        println!("{} hops", hops);
    }
}

/// Follow the first wikilink of each page starting from `start_url`
/// until the Philosophy article is reached, and return the list of
/// URLs visited. Each URL is reported to `sink` at the moment it is
/// appended, so a long run shows its progress as it goes.
///
/// Fails with [`PathError::CycleDetected`] if the next link would
/// revisit a URL already on the path (checked before appending), and
/// with [`PathError::HopLimitReached`] if Philosophy is not reached
/// within `site.max_hops` hops. A start URL that already is the target
/// succeeds immediately with zero hops and no fetch.
pub async fn create_path_to_philosophy(
    start_url: &str,
    client: &Client,
    site: &SiteConfig,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<String>> {
    let mut path = vec![start_url.to_string()];
    let mut hops: usize = 0;
    let mut current = start_url.to_string();
    sink.visited(&current);

    while !is_terminal_article(&current, site) && hops < site.max_hops {
        let next = first_link_on_page(&current, client, site).await?;

        if path.contains(&next) {
            return Err(PathError::CycleDetected(next));
        }

        sink.visited(&next);
        path.push(next.clone());
        hops += 1;
        current = next;
    }

    if !is_terminal_article(&current, site) {
        return Err(PathError::HopLimitReached(hops));
    }

    info!("reached {} after {} hops", site.target_url, hops);
    sink.finished(hops);

    Ok(path)
}
