use anyhow::Result;
use log2::*;
use reqwest::Client;
use std::time::Instant;
use url::Url;

use wikiphilosophy::config;
use wikiphilosophy::error::PathError;
use wikiphilosophy::traversal::{self, SiteConfig, StdoutSink};

/// Indicates start time of the program, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = config::Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("wikiphilosophy"))
        .compress(false)
        .level(cfg.log_level.to_string())
        .start();

    let site = SiteConfig::wikipedia();

    if !traversal::is_valid_article_url(&cfg.start_url, &site) {
        let err = PathError::InvalidInput(cfg.start_url.clone());
        error!("{}", err);
        return Err(err.into());
    }
    // always parses once the prefix check passed; kept as a sanity check
    let start_url = Url::parse(&cfg.start_url)?;
    debug!("starting traversal from {}", start_url);

    let client = Client::new();
    let mut sink = StdoutSink;

    match traversal::create_path_to_philosophy(cfg.start_url.as_str(), &client, &site, &mut sink)
        .await
    {
        Ok(path) => {
            debug!(
                "visited {} urls in {:?}",
                path.len(),
                START_TIME.elapsed()
            );
        }
        Err(e) => {
            error!("{}", e);
        }
    }

    Ok(())
}
