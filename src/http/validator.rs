use thiserror::Error;

use crate::http::headers::HeaderStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("invalid header name: {0:?}")]
    InvalidName(String),
    #[error("invalid value for header {0}")]
    InvalidValue(String),
    #[error("malformed Content-Length: {0:?}")]
    MalformedContentLength(String),
}

/// Opt-in structural checks on a populated [`HeaderStore`].
/// Parsing never runs these; callers decide when a store must be well-formed.
pub struct Validator;

impl Validator {
    // RFC 7230 tchar
    fn is_token_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
    }

    fn validate_name(name: &str) -> Result<(), ValidatorError> {
        if name.is_empty() || !name.chars().all(Self::is_token_char) {
            return Err(ValidatorError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    fn validate_value(name: &str, value: &str) -> Result<(), ValidatorError> {
        if value.contains(['\r', '\n', '\0']) {
            return Err(ValidatorError::InvalidValue(name.to_string()));
        }
        Ok(())
    }

    pub fn validate(headers: &HeaderStore) -> Result<(), ValidatorError> {
        for (name, value) in headers.iter() {
            Self::validate_name(name)?;
            Self::validate_value(name, value)?;
        }

        if let Some(value) = headers.get("Content-Length") {
            if value.parse::<usize>().is_err() {
                return Err(ValidatorError::MalformedContentLength(value.to_string()));
            }
        }

        Ok(())
    }
}
