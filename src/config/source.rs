//! Bundle source configuration.

use std::{path::PathBuf, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    i18n::{BundleSource, DEFAULT_FETCH_TIMEOUT, DirBundleSource, HttpBundleSource},
};

/// Where bundles are loaded from. Exactly one of `dir` or `url` is used;
/// `dir` wins when both are set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SourceConfig {
    /// Extension root directory containing `_locales`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Base URL serving `_locales/<locale>/messages.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// HTTP fetch timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SourceConfig {
    /// A directory source.
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self { dir: Some(path.into()), ..Self::default() }
    }

    /// An HTTP source.
    pub fn url(url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), ..Self::default() }
    }

    /// Check if a source location is configured.
    pub fn is_configured(&self) -> bool {
        self.dir.is_some() || self.url.is_some()
    }

    /// Effective fetch timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map_or(DEFAULT_FETCH_TIMEOUT, Duration::from_secs)
    }

    /// Build the configured bundle source.
    pub fn build(&self) -> Result<Arc<dyn BundleSource>> {
        if let Some(dir) = &self.dir {
            return Ok(Arc::new(DirBundleSource::new(dir.clone())));
        }

        if let Some(url) = &self.url {
            return Ok(Arc::new(HttpBundleSource::new(url, self.timeout())?));
        }

        Err(Error::config(
            "No bundle source configured. Use --source-dir or --source-url, or set source in the config file.",
        ))
    }

    /// Overlay `other` on top of this configuration.
    pub(crate) fn merge(&mut self, other: Self) {
        let other_has_dir = other.dir.is_some();

        if other_has_dir {
            self.dir = other.dir;
            self.url = None;
        }
        if other.url.is_some() {
            self.url = other.url;
            if !other_has_dir {
                self.dir = None;
            }
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }
}
