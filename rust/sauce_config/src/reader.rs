//! Loading and serving the configuration record.

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwapOption;
use tracing::info;

use crate::config::SauceConfig;
use crate::document::{display_name, load_document};
use crate::SauceConfigError;

/// Name of the configuration document, resolved against the reader's
/// configuration directory.
pub const SAUCE_CONFIG: &str = "sauceConfig.json";

static GLOBAL: LazyLock<SauceConfigReader> = LazyLock::new(SauceConfigReader::new);

/// Loads `sauceConfig.json` and serves the parsed values.
///
/// A freshly constructed reader holds no record; the process's startup
/// routine calls [`load`](SauceConfigReader::load) and decides whether a
/// failure is fatal. `load` may be called again at any time: on success the
/// whole record is replaced atomically, on failure the previously loaded
/// record keeps being served.
pub struct SauceConfigReader {
    path: PathBuf,
    config: ArcSwapOption<SauceConfig>,
}

impl SauceConfigReader {
    /// Creates a reader that resolves [`SAUCE_CONFIG`] against the current
    /// working directory.
    pub fn new() -> Self {
        Self::with_dir(".")
    }

    /// Creates a reader that resolves [`SAUCE_CONFIG`] against `dir`.
    ///
    /// Construction performs no I/O; the reader is unloaded until the first
    /// successful [`load`](Self::load).
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SAUCE_CONFIG),
            config: ArcSwapOption::new(None),
        }
    }

    /// The process-wide reader, resolving against the current working
    /// directory.
    ///
    /// First access under concurrency is guarded by a single-initialization
    /// primitive, so no two threads observe a partially constructed
    /// instance. Explicitly constructed readers passed by reference remain
    /// the primary API; this instance exists for components that cannot be
    /// handed one.
    pub fn global() -> &'static SauceConfigReader {
        &GLOBAL
    }

    /// Path of the document this reader loads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads (or reloads) the configuration document.
    ///
    /// On success the stored record is replaced as a whole and the new
    /// record is returned. On failure the previous record, if any, is left
    /// untouched and the error propagates to the caller; there is no retry
    /// and no partial refresh.
    pub fn load(&self) -> Result<Arc<SauceConfig>, SauceConfigError> {
        let file = display_name(&self.path);
        let object = load_document(&self.path)?;
        let config = Arc::new(SauceConfig::from_object(&object, &file)?);
        self.config.store(Some(config.clone()));
        info!("Sauce config loaded successfully");
        Ok(config)
    }

    /// The currently loaded record, or `None` before the first successful
    /// load.
    #[must_use]
    pub fn config(&self) -> Option<Arc<SauceConfig>> {
        self.config.load_full()
    }

    fn loaded(&self) -> Result<Arc<SauceConfig>, SauceConfigError> {
        self.config().ok_or(SauceConfigError::NotLoaded)
    }

    /// The base64-encoded credential of the loaded record.
    pub fn authentication_key(&self) -> Result<String, SauceConfigError> {
        Ok(self.loaded()?.authentication_key().to_owned())
    }

    /// The base endpoint of the loaded record.
    pub fn service_url(&self) -> Result<String, SauceConfigError> {
        Ok(self.loaded()?.service_url().to_owned())
    }

    /// The username of the loaded record.
    pub fn user_name(&self) -> Result<String, SauceConfigError> {
        Ok(self.loaded()?.user_name().to_owned())
    }

    /// The per-account endpoint of the loaded record.
    pub fn full_url(&self) -> Result<String, SauceConfigError> {
        Ok(self.loaded()?.full_url().to_owned())
    }
}

impl Default for SauceConfigReader {
    fn default() -> Self {
        Self::new()
    }
}
