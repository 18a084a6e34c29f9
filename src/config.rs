use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

static DEFAULT_CONFIG_FILE: &str = "logpuzzle.toml";
static ENV_PREFIX: &str = "LOGPUZZLE";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Substring a request path must contain to count as a puzzle piece.
    pub marker: String,
    pub user_agent: String,
    /// Fail on a `GET` line whose request path can't be read instead of skipping it.
    pub strict_requests: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: "puzzle".to_owned(),
            user_agent: concat!("logpuzzle/", env!("CARGO_PKG_VERSION")).to_owned(),
            strict_requests: false,
        }
    }
}

impl Settings {
    /// Layers `logpuzzle.toml` (optional) or an explicit file (required) and
    /// `LOGPUZZLE_*` variables over the defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_in(Path::new(""), config_path)
    }

    /// Like [`Settings::load`], with the optional `logpuzzle.toml` looked up
    /// in `dir`. Only that exact file name is read, never a bare `logpuzzle`.
    pub fn load_in(dir: &Path, config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::from(dir.join(DEFAULT_CONFIG_FILE))
                .format(config::FileFormat::Toml)
                .required(false),
        };

        Self::build(config::Config::builder().add_source(file))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::build(
            config::Config::builder()
                .add_source(config::File::from_str(content, config::FileFormat::Toml)),
        )
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("failed to deserialize settings: {}", e))
    }
}
