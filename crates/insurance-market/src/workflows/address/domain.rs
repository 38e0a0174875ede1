use std::fmt;

use serde::{Deserialize, Serialize};

pub const ADDRESS_SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Failed to validate address. Please try again.";
pub const ADDRESS_UNVERIFIED_MESSAGE: &str = "Address could not be verified.";

/// Applicant mailing address as collected by the enrollment form.
///
/// Absent JSON keys deserialize as empty strings so that presence checks are
/// reported by the gateway as missing fields rather than as malformed JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    /// Required fields that are empty after trimming, in declaration order.
    pub fn missing_fields(&self) -> Vec<AddressField> {
        AddressField::required()
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Line1 => &self.line1,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Zip => &self.zip,
        }
    }

    /// Canonical form sent upstream: collapsed whitespace, upper-case state,
    /// and no blank second line.
    pub fn normalized(&self) -> Address {
        Address {
            line1: collapse_whitespace(&self.line1),
            line2: self
                .line2
                .as_deref()
                .map(collapse_whitespace)
                .filter(|line| !line.is_empty()),
            city: collapse_whitespace(&self.city),
            state: collapse_whitespace(&self.state).to_ascii_uppercase(),
            zip: self.zip.trim().to_string(),
        }
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Line1,
    City,
    State,
    Zip,
}

impl AddressField {
    pub const fn required() -> [Self; 4] {
        [Self::Line1, Self::City, Self::State, Self::Zip]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Line1 => "line1",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input rejected before the verification service is contacted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressInputError {
    #[error("missing required address fields: {}", join_fields(.0))]
    MissingFields(Vec<AddressField>),
}

fn join_fields(fields: &[AddressField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Verdict returned by the address verification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    pub deliverable: bool,
    #[serde(default)]
    pub defects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Pass/fail outcome surfaced to the enrollment UI.
///
/// `errors` is empty exactly when `is_valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_address: Option<Address>,
}

impl AddressValidationResult {
    pub fn valid(normalized_address: Option<Address>) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            normalized_address,
        }
    }

    /// Invalid result; an empty defect list becomes a single generic message.
    pub fn invalid(errors: Vec<String>) -> Self {
        let errors = if errors.is_empty() {
            vec![ADDRESS_UNVERIFIED_MESSAGE.to_string()]
        } else {
            errors
        };

        Self {
            is_valid: false,
            errors,
            normalized_address: None,
        }
    }

    pub fn service_unavailable() -> Self {
        Self::invalid(vec![ADDRESS_SERVICE_UNAVAILABLE_MESSAGE.to_string()])
    }
}
