//! Applicant address validation against a third-party verification provider.

pub mod domain;
pub mod router;
pub mod service;
pub mod verifier;

#[cfg(test)]
mod tests;

pub use domain::{
    Address, AddressField, AddressInputError, AddressValidationResult, VerificationVerdict,
    ADDRESS_SERVICE_UNAVAILABLE_MESSAGE, ADDRESS_UNVERIFIED_MESSAGE,
};
pub use router::address_router;
pub use service::AddressValidationGateway;
pub use verifier::{AddressVerifier, HttpAddressVerifier};
