pub mod request;
pub mod server;
pub mod sort_key;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use crate::config::Settings;

pub use request::request_path;
pub use server::ServerPrefix;
pub use sort_key::{SortKey, SortKeyPatterns};

/// Turns an access log into the ordered list of puzzle image URLs.
#[derive(Debug, Clone)]
pub struct Extractor {
    marker: String,
    strict_requests: bool,
    patterns: SortKeyPatterns,
}

impl Extractor {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            marker: settings.marker.clone(),
            strict_requests: settings.strict_requests,
            patterns: SortKeyPatterns::new(&settings.marker)?,
        })
    }

    #[instrument(skip(self), fields(log = %log_path.display()))]
    pub async fn read_urls(&self, log_path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(log_path)
            .await
            .with_context(|| format!("failed to read log file {}", log_path.display()))?;
        let server = ServerPrefix::from_log_path(log_path)?;
        debug!("server prefix: {}", server);

        let paths = self.ordered_paths(&content)?;
        if paths.is_empty() {
            warn!("no {} requests found", self.marker);
        } else {
            info!("found {} distinct {} urls", paths.len(), self.marker);
        }

        Ok(paths.iter().map(|path| server.join(path)).collect())
    }

    /// Distinct puzzle paths, ascending by sort key. Equal keys fall back to
    /// the path text.
    pub fn ordered_paths<'a>(&self, content: &'a str) -> Result<Vec<&'a str>> {
        let mut keyed: Vec<(SortKey, &str)> = self
            .puzzle_paths(content)?
            .into_iter()
            .map(|path| (self.patterns.resolve(path), path))
            .collect();
        keyed.sort_unstable();

        Ok(keyed.into_iter().map(|(_, path)| path).collect())
    }

    fn puzzle_paths<'a>(&self, content: &'a str) -> Result<HashSet<&'a str>> {
        let mut paths = HashSet::new();

        for (index, line) in content.lines().enumerate() {
            if !line.contains("GET ") {
                continue;
            }
            let Some(path) = request_path(line) else {
                if self.strict_requests {
                    anyhow::bail!("line {}: GET request without a readable path", index + 1);
                }
                warn!("skipping line {}: GET request without a readable path", index + 1);
                continue;
            };
            if path.contains(&self.marker) {
                paths.insert(path);
            }
        }
        Ok(paths)
    }
}

/// [`Extractor::read_urls`] with default settings.
pub async fn read_urls(log_path: &Path) -> Result<Vec<String>> {
    Extractor::new(&Settings::default())?.read_urls(log_path).await
}
