pub mod address;
pub mod eligibility;
pub mod outcome;
pub mod upstream;
pub mod zip;

pub use outcome::{GatewayOutcome, UpstreamDiagnostic};
pub use upstream::{http_client, UpstreamError};
