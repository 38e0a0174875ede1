use std::fmt;

use serde::{Deserialize, Serialize};

pub const ZIP_NOT_FOUND_MESSAGE: &str = "ZIP code not found or invalid";
pub const ZIP_SERVICE_UNAVAILABLE_MESSAGE: &str = "Failed to look up ZIP code. Please try again.";

/// Five ASCII digits, checked before any lookup is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(raw: &str) -> Result<Self, ZipInputError> {
        if raw.len() == 5 && raw.bytes().all(|byte| byte.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ZipInputError::InvalidFormat {
                value: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZipInputError {
    #[error("ZIP code must be exactly 5 digits")]
    InvalidFormat { value: String },
}

/// Geographic metadata for a ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCodeInfo {
    pub zip: String,
    pub city: String,
    pub state: String,
    pub county: String,
}
