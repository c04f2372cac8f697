//! Where message bundles come from.
//!
//! Bundles follow the extension layout: `<root>/_locales/<ll_CC>/messages.json`.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use url::Url;

use super::{bundle::RawBundle, locales};
use crate::error::{Error, Result};

/// Default timeout for a single HTTP bundle fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Produces the raw bundle for a locale.
#[async_trait]
pub trait BundleSource: Send + Sync {
    /// Fetch and parse the bundle for `locale`.
    async fn fetch(&self, locale: &str) -> Result<RawBundle>;

    /// Human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Relative path of a locale's bundle under the extension root.
pub fn bundle_path(locale: &str) -> String {
    format!("_locales/{}/messages.json", locales::bundle_dir_name(locale))
}

/// Fetches bundles over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBundleSource {
    client: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl HttpBundleSource {
    /// Create a source rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base_url, timeout)
    }

    /// Create a source that sends requests through `client`.
    pub fn with_client(client: reqwest::Client, base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid bundle URL '{base_url}': {e}")))?;

        // Url::join replaces the last segment unless the path ends with '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { client, base, timeout })
    }

    /// URL of the bundle for `locale`.
    pub fn bundle_url(&self, locale: &str) -> Result<Url> {
        self.base
            .join(&bundle_path(locale))
            .map_err(|e| Error::fetch(locale, format!("cannot build URL: {e}")))
    }
}

#[async_trait]
impl BundleSource for HttpBundleSource {
    async fn fetch(&self, locale: &str) -> Result<RawBundle> {
        let url = self.bundle_url(locale)?;
        tracing::debug!(locale = locale, url = %url, "Fetching bundle");

        let response = self.client.get(url).timeout(self.timeout).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(locale, format!("HTTP status {status}")));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

/// Reads bundles from an unpacked extension directory.
#[derive(Debug, Clone)]
pub struct DirBundleSource {
    root: PathBuf,
}

impl DirBundleSource {
    /// Create a source rooted at `root` (the directory containing `_locales`).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl BundleSource for DirBundleSource {
    async fn fetch(&self, locale: &str) -> Result<RawBundle> {
        let path = self.root.join(bundle_path(locale));
        tracing::debug!(locale = locale, path = %path.display(), "Reading bundle");

        let contents = tokio::fs::read_to_string(&path).await?;

        Ok(serde_json::from_str(&contents)?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Serves bundles from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticBundleSource {
    bundles: HashMap<String, RawBundle>,
}

impl StaticBundleSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle for `locale`.
    pub fn with_bundle(mut self, locale: &str, bundle: RawBundle) -> Self {
        self.bundles.insert(locales::normalize_locale(locale), bundle);
        self
    }

    /// Add a bundle for `locale` parsed from JSON.
    pub fn with_json(self, locale: &str, json: &str) -> Result<Self> {
        let bundle: RawBundle = serde_json::from_str(json)?;
        Ok(self.with_bundle(locale, bundle))
    }
}

#[async_trait]
impl BundleSource for StaticBundleSource {
    async fn fetch(&self, locale: &str) -> Result<RawBundle> {
        self.bundles
            .get(&locales::normalize_locale(locale))
            .cloned()
            .ok_or_else(|| Error::fetch(locale, "no bundle for locale"))
    }

    fn describe(&self) -> String {
        format!("memory ({} bundles)", self.bundles.len())
    }
}
