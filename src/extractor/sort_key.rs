use std::fmt;

use anyhow::{Context, Result};
use regex::Regex;

/// Four-character token that orders puzzle pieces. Paths that carry no
/// token get the empty key and sort first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(String);

impl SortKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Long form `<marker>/x-wwww-KKKK.jpg` is tried before short form `<marker>/x-KKKK`.
#[derive(Debug, Clone)]
pub struct SortKeyPatterns {
    long: Regex,
    short: Regex,
}

impl SortKeyPatterns {
    pub fn new(marker: &str) -> Result<Self> {
        let marker = regex::escape(marker);
        let long = Regex::new(&format!(r"{}/.-....-(\w{{4}})\.jpg", marker))
            .context("failed to compile long sort key pattern")?;
        let short = Regex::new(&format!(r"{}/.-(.{{4}})", marker))
            .context("failed to compile short sort key pattern")?;
        Ok(Self { long, short })
    }

    pub fn resolve(&self, path: &str) -> SortKey {
        [&self.long, &self.short]
            .into_iter()
            .find_map(|re| re.captures(path).and_then(|caps| caps.get(1)))
            .map(|m| SortKey(m.as_str().to_owned()))
            .unwrap_or_default()
    }
}
