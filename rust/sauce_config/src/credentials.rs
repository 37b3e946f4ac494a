//! Decoding of the embedded sauce credential.

use base64::prelude::*;

use crate::SauceConfigError;

/// The decoded form of the `authenticationKey` attribute.
///
/// The key is the base64 encoding of `username:password`. Only the username
/// is retained; the remainder is dropped after the split.
#[derive(Debug)]
pub(crate) struct Credentials {
    pub user_name: String,
}

/// Decodes `key` and extracts the username before the first `:` separator.
///
/// A credential that is not valid base64, does not decode to UTF-8 text, or
/// contains no separator is a configuration error, not a panic.
pub(crate) fn decode_authentication_key(key: &str) -> Result<Credentials, SauceConfigError> {
    let bytes = BASE64_STANDARD.decode(key)?;
    let text = String::from_utf8(bytes).map_err(|_| SauceConfigError::KeyNotUtf8)?;
    let Some((user_name, _)) = text.split_once(':') else {
        return Err(SauceConfigError::MissingSeparator);
    };
    Ok(Credentials {
        user_name: user_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use base64::prelude::*;

    use super::*;

    #[test]
    fn decodes_username_before_separator() {
        let key = BASE64_STANDARD.encode("alice:secret");
        let credentials = decode_authentication_key(&key).unwrap();
        assert_eq!(credentials.user_name, "alice");
    }

    #[test]
    fn keeps_only_text_before_first_separator() {
        let key = BASE64_STANDARD.encode("alice:se:cret");
        let credentials = decode_authentication_key(&key).unwrap();
        assert_eq!(credentials.user_name, "alice");
    }

    #[test]
    fn allows_empty_username() {
        let key = BASE64_STANDARD.encode(":secret");
        let credentials = decode_authentication_key(&key).unwrap();
        assert_eq!(credentials.user_name, "");
    }

    #[test]
    fn rejects_malformed_base64() {
        let err = decode_authentication_key("not base64!").unwrap_err();
        assert_matches!(err, SauceConfigError::DecodeKey(_));
    }

    #[test]
    fn rejects_non_utf8_credential() {
        let key = BASE64_STANDARD.encode([0xff, 0xfe, b':']);
        let err = decode_authentication_key(&key).unwrap_err();
        assert_matches!(err, SauceConfigError::KeyNotUtf8);
    }

    #[test]
    fn rejects_credential_without_separator() {
        let key = BASE64_STANDARD.encode("alice");
        let err = decode_authentication_key(&key).unwrap_err();
        assert_matches!(err, SauceConfigError::MissingSeparator);
    }
}
