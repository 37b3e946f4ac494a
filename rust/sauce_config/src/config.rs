//! The parsed configuration record.

use std::fmt;

use serde_json::{Map, Value};

use crate::credentials::decode_authentication_key;
use crate::document::attribute_value;
use crate::logged::Logged;
use crate::SauceConfigError;

const AUTHENTICATION_KEY: &str = "authenticationKey";
const SAUCE_URL: &str = "sauceURL";

/// The values loaded from `sauceConfig.json`, plus the two derived from
/// them.
///
/// A record is immutable once built. The username and per-account URL are
/// computed together with the pair they derive from, so the four values are
/// always mutually consistent.
pub struct SauceConfig {
    authentication_key: String,
    service_url: String,
    user_name: String,
    full_url: String,
}

impl SauceConfig {
    /// Builds a record from the parsed top-level object of `file`.
    ///
    /// Extraction is all-or-nothing: the first invalid attribute or
    /// undecodable credential fails the build, and no partially populated
    /// record is ever produced.
    pub(crate) fn from_object(
        object: &Map<String, Value>,
        file: &str,
    ) -> Result<Self, SauceConfigError> {
        let authentication_key = attribute_value(object, AUTHENTICATION_KEY, file)?;
        let service_url = attribute_value(object, SAUCE_URL, file)?;
        let credentials = decode_authentication_key(&authentication_key)?;
        let full_url = format!("{}/{}", service_url, credentials.user_name);
        Ok(Self {
            authentication_key,
            service_url,
            user_name: credentials.user_name,
            full_url,
        })
    }

    /// The base64-encoded `username:password` credential.
    pub fn authentication_key(&self) -> &str {
        &self.authentication_key
    }

    /// The base endpoint of the sauce service.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The username embedded in the authentication key.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// The per-account endpoint: the service URL with the username appended.
    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    /// Returns a view whose accessors log each value they return.
    pub fn logged(&self) -> Logged<'_> {
        Logged::new(self)
    }
}

// The credential must not leak through debug output.
impl fmt::Debug for SauceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SauceConfig")
            .field("authentication_key", &"<redacted>")
            .field("service_url", &self.service_url)
            .field("user_name", &self.user_name)
            .field("full_url", &self.full_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use base64::prelude::*;
    use serde_json::json;

    use super::*;

    const FILE: &str = "sauceConfig.json";

    fn build(value: Value) -> Result<SauceConfig, SauceConfigError> {
        match value {
            Value::Object(object) => SauceConfig::from_object(&object, FILE),
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn builds_record_with_derived_values() {
        let config = build(json!({
            "authenticationKey": BASE64_STANDARD.encode("alice:secret"),
            "sauceURL": "https://saucelabs.example.com",
        }))
        .unwrap();

        assert_eq!(config.user_name(), "alice");
        assert_eq!(config.service_url(), "https://saucelabs.example.com");
        assert_eq!(config.full_url(), "https://saucelabs.example.com/alice");
        assert_eq!(
            config.authentication_key(),
            BASE64_STANDARD.encode("alice:secret")
        );
    }

    #[test]
    fn full_url_is_service_url_slash_user_name() {
        let config = build(json!({
            "authenticationKey": BASE64_STANDARD.encode("bob:hunter2"),
            "sauceURL": "https://ondemand.saucelabs.com",
        }))
        .unwrap();

        assert_eq!(
            config.full_url(),
            format!("{}/{}", config.service_url(), config.user_name())
        );
    }

    #[test]
    fn ignores_unrecognized_keys() {
        let config = build(json!({
            "authenticationKey": BASE64_STANDARD.encode("alice:secret"),
            "sauceURL": "https://x",
            "retries": 3,
        }))
        .unwrap();

        assert_eq!(config.user_name(), "alice");
    }

    #[test]
    fn missing_authentication_key_names_the_key() {
        let err = build(json!({"sauceURL": "https://x"})).unwrap_err();
        assert_matches!(err, SauceConfigError::InvalidAttribute { key, .. } => {
            assert_eq!(key, "authenticationKey");
        });
    }

    #[test]
    fn missing_sauce_url_names_the_key() {
        let err = build(json!({
            "authenticationKey": BASE64_STANDARD.encode("alice:secret"),
        }))
        .unwrap_err();
        assert_matches!(err, SauceConfigError::InvalidAttribute { key, .. } => {
            assert_eq!(key, "sauceURL");
        });
    }

    #[test]
    fn blank_sauce_url_names_the_key() {
        let err = build(json!({
            "authenticationKey": BASE64_STANDARD.encode("alice:secret"),
            "sauceURL": "  ",
        }))
        .unwrap_err();
        assert_matches!(err, SauceConfigError::InvalidAttribute { key, .. } => {
            assert_eq!(key, "sauceURL");
        });
    }

    #[test]
    fn malformed_base64_is_a_decode_error() {
        let err = build(json!({
            "authenticationKey": "!!!",
            "sauceURL": "https://x",
        }))
        .unwrap_err();
        assert_matches!(err, SauceConfigError::DecodeKey(_));
    }

    #[test]
    fn credential_without_separator_is_an_explicit_error() {
        let err = build(json!({
            "authenticationKey": BASE64_STANDARD.encode("alice"),
            "sauceURL": "https://x",
        }))
        .unwrap_err();
        assert_matches!(err, SauceConfigError::MissingSeparator);
    }

    #[test]
    fn debug_output_redacts_the_credential() {
        let key = BASE64_STANDARD.encode("alice:secret");
        let config = build(json!({
            "authenticationKey": key,
            "sauceURL": "https://x",
        }))
        .unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains(&key));
        assert!(debug.contains("<redacted>"));
    }
}
