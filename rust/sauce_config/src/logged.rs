//! Logging view over the configuration record.

use tracing::info;

use crate::config::SauceConfig;

/// A view over [`SauceConfig`] whose accessors log each value they return.
///
/// Reading a value through this view emits it at info level before
/// delegating to the pure accessor, so callers that want access traces opt
/// in explicitly instead of paying for logging on every read.
pub struct Logged<'a> {
    config: &'a SauceConfig,
}

impl<'a> Logged<'a> {
    pub(crate) fn new(config: &'a SauceConfig) -> Self {
        Self { config }
    }

    /// The base64-encoded credential. The logged form is redacted.
    pub fn authentication_key(&self) -> &'a str {
        info!("authentication key: <redacted>");
        self.config.authentication_key()
    }

    /// The base endpoint of the sauce service.
    pub fn service_url(&self) -> &'a str {
        let value = self.config.service_url();
        info!("sauce URL: {}", value);
        value
    }

    /// The username embedded in the credential.
    pub fn user_name(&self) -> &'a str {
        let value = self.config.user_name();
        info!("user name: {}", value);
        value
    }

    /// The per-account endpoint.
    pub fn full_url(&self) -> &'a str {
        let value = self.config.full_url();
        info!("URL: {}", value);
        value
    }
}
