use std::fmt;

/// Result of a gateway call that passed input validation.
///
/// `NotFound` is a normal answer from the upstream service, not a failure.
/// `UpstreamFailure` keeps the operator-facing diagnostic; transports log it
/// and substitute a fixed message before anything reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome<T> {
    Found(T),
    NotFound,
    UpstreamFailure(UpstreamDiagnostic),
}

impl<T> GatewayOutcome<T> {
    pub fn map<U, F>(self, f: F) -> GatewayOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            GatewayOutcome::Found(value) => GatewayOutcome::Found(f(value)),
            GatewayOutcome::NotFound => GatewayOutcome::NotFound,
            GatewayOutcome::UpstreamFailure(diagnostic) => {
                GatewayOutcome::UpstreamFailure(diagnostic)
            }
        }
    }

    pub fn found(self) -> Option<T> {
        match self {
            GatewayOutcome::Found(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_upstream_failure(&self) -> bool {
        matches!(self, GatewayOutcome::UpstreamFailure(_))
    }
}

/// Operator-only description of why an upstream call failed.
///
/// Not `Serialize`: it goes to logs, never to response bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamDiagnostic {
    pub service: &'static str,
    pub message: String,
}

impl UpstreamDiagnostic {
    pub fn new(service: &'static str, error: impl fmt::Display) -> Self {
        Self {
            service,
            message: error.to_string(),
        }
    }
}

impl fmt::Display for UpstreamDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} call failed: {}", self.service, self.message)
    }
}
