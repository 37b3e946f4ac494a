//! Sauce Labs connection configuration.
//!
//! This crate loads the `sauceConfig.json` document that names the
//! credentials and endpoint of a remote Sauce Labs service, decodes the
//! embedded credential, and serves the resulting values for the lifetime of
//! the process. It reads a local file once at startup (or on explicit
//! reload); it is not a network client and issues no credentials of its own.
//!
//! # Getting started
//!
//! Construct a reader for the directory that holds `sauceConfig.json`, load
//! it once during startup, and read the derived values from the returned
//! record:
//!
//! ```no_run
//! use sauce_config::SauceConfigReader;
//!
//! # fn func() -> Result<(), sauce_config::SauceConfigError> {
//! let reader = SauceConfigReader::with_dir("/etc/selion");
//! let config = reader.load()?;
//! println!("forwarding sessions to {}", config.full_url());
//! # Ok(()) }
//! ```
//!
//! The document is a flat JSON object with two required keys:
//!
//! ```json
//! {
//!   "authenticationKey": "<base64 of 'username:password'>",
//!   "sauceURL": "https://ondemand.saucelabs.com"
//! }
//! ```
//!
//! From those the reader derives the username (the text before the first
//! `:` in the decoded credential) and the per-account endpoint
//! (`sauceURL` + `/` + username). The four values are recomputed together on
//! every load, so they are always mutually consistent.
//!
//! # The process-wide reader
//!
//! Components that cannot be handed a reader explicitly can share the
//! process-wide instance. Construction is guarded by a single-initialization
//! primitive and performs no I/O; the startup routine decides whether a
//! failed load is fatal:
//!
//! ```no_run
//! use sauce_config::SauceConfigReader;
//!
//! # fn func() -> Result<(), sauce_config::SauceConfigError> {
//! SauceConfigReader::global().load()?;
//!
//! // Elsewhere, after startup:
//! let user = SauceConfigReader::global().user_name()?;
//! # Ok(()) }
//! ```
//!
//! # Reloading
//!
//! [`SauceConfigReader::load`] may be called again at any time. On success
//! the whole record is replaced atomically; on failure the previously loaded
//! record keeps being served unchanged. Readers always observe a fully-old
//! or fully-new record, never a mix.

#![warn(missing_docs)]

use std::path::PathBuf;

use thiserror::Error;

mod config;
mod credentials;
mod document;
mod logged;
mod reader;

pub use config::SauceConfig;
pub use logged::Logged;
pub use reader::{SauceConfigReader, SAUCE_CONFIG};

/// An error type for errors generated by this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SauceConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadConfig {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not well-formed JSON.
    #[error("Error with the JSON of the sauce config {file}: {source}")]
    ParseConfig {
        /// Name of the offending file.
        file: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The top level of the configuration file is not a JSON object.
    #[error("Expected a JSON object at the top level of {file}")]
    NotAnObject {
        /// Name of the offending file.
        file: String,
    },
    /// A required key is missing, null, blank, or not a string.
    #[error("Invalid property {key} in {file}")]
    InvalidAttribute {
        /// The offending key.
        key: String,
        /// Name of the file the key was read from.
        file: String,
    },
    /// The authentication key is not valid base64.
    #[error("Authentication key is not valid base64: {0}")]
    DecodeKey(#[from] base64::DecodeError),
    /// The decoded authentication key is not valid UTF-8.
    #[error("Decoded authentication key is not valid UTF-8")]
    KeyNotUtf8,
    /// The decoded credential contains no `:` separator.
    #[error("Decoded authentication key has no ':' separator")]
    MissingSeparator,
    /// An accessor was used before the first successful load.
    #[error("Sauce config has not been loaded")]
    NotLoaded,
}
