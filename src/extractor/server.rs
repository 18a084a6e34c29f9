use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use url::Url;

/// `https://<server>`, where `<server>` follows the first underscore of the
/// log file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerPrefix(String);

impl ServerPrefix {
    pub fn from_log_path(log_path: &Path) -> Result<Self> {
        let file_name = log_path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("log path {} has no usable file name", log_path.display()))?;
        let name = file_name.strip_suffix(".log").unwrap_or(file_name);

        let Some((_, server)) = name.split_once('_') else {
            anyhow::bail!("log file name {} has no '_' before the server name", file_name);
        };
        if server.is_empty() {
            anyhow::bail!("log file name {} has an empty server name", file_name);
        }

        let prefix = format!("https://{}", server);
        let url = Url::parse(&prefix)
            .with_context(|| format!("{} is not a valid server address", server))?;
        if url.host_str().is_none() {
            anyhow::bail!("{} has no host", prefix);
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for ServerPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
