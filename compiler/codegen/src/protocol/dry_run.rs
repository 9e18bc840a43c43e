//! Dry-run verdicts of EC2 services.
//!
//! A dry-run request never succeeds normally: the service answers with one of
//! two signal errors. [`SIGNALS`] is the single table both the generated
//! `dryRun` method and [`classify`] are built from.

/// Message of the client error raised for any other response.
pub const UNRECOGNIZED_RESPONSE: &str = "Unrecognized service response for the dry-run request.";

/// A service error that carries a dry-run verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DryRunSignal {
    /// Service error code.
    pub error_code: &'static str,
    /// HTTP status the error must arrive with.
    pub status_code: u16,
    /// Whether the real request would have been authorized.
    pub would_succeed: bool,
}

/// The dry run would have succeeded.
pub const DRY_RUN_OPERATION: DryRunSignal =
    DryRunSignal { error_code: "DryRunOperation", status_code: 412, would_succeed: true };

/// The caller is not authorized to perform the request.
pub const UNAUTHORIZED_OPERATION: DryRunSignal =
    DryRunSignal { error_code: "UnauthorizedOperation", status_code: 403, would_succeed: false };

/// Signals in the order the generated method tests them.
pub const SIGNALS: [DryRunSignal; 2] = [DRY_RUN_OPERATION, UNAUTHORIZED_OPERATION];

/// What the service did with a dry-run request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DryRunResponse<'a> {
    /// The request completed without a service error.
    Completed,
    /// The service answered with an error.
    ServiceError {
        /// Service error code.
        error_code: &'a str,
        /// HTTP status code.
        status_code: u16,
        /// Service error message.
        message: &'a str,
    },
}

/// What the generated `dryRun` method does with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DryRunOutcome {
    /// A `DryRunResult` is returned.
    Result {
        /// `wouldSucceed` of the result.
        would_succeed: bool,
        /// Service message carried by the result.
        message: String,
    },
    /// An `AmazonClientException` is thrown.
    ClientError {
        /// Exception message.
        message: String,
        /// Whether the service error is attached as the cause.
        has_cause: bool,
    },
}

/// Interpret a dry-run response the way the generated client does.
pub fn classify(response: &DryRunResponse<'_>) -> DryRunOutcome {
    match *response {
        DryRunResponse::Completed => DryRunOutcome::ClientError {
            message: UNRECOGNIZED_RESPONSE.to_string(),
            has_cause: false,
        },
        DryRunResponse::ServiceError { error_code, status_code, message } => SIGNALS
            .iter()
            .find(|signal| signal.error_code == error_code && signal.status_code == status_code)
            .map(|signal| DryRunOutcome::Result {
                would_succeed: signal.would_succeed,
                message: message.to_string(),
            })
            .unwrap_or_else(|| DryRunOutcome::ClientError {
                message: UNRECOGNIZED_RESPONSE.to_string(),
                has_cause: true,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error<'a>(error_code: &'a str, status_code: u16) -> DryRunResponse<'a> {
        DryRunResponse::ServiceError { error_code, status_code, message: "msg" }
    }

    #[test]
    fn test_signal_needs_matching_status() {
        assert!(matches!(
            classify(&error("DryRunOperation", 400)),
            DryRunOutcome::ClientError { has_cause: true, .. }
        ));
        assert!(matches!(
            classify(&error("UnauthorizedOperation", 412)),
            DryRunOutcome::ClientError { has_cause: true, .. }
        ));
    }

    #[test]
    fn test_signals_are_distinct() {
        assert_ne!(SIGNALS[0].error_code, SIGNALS[1].error_code);
        assert_ne!(SIGNALS[0].would_succeed, SIGNALS[1].would_succeed);
    }
}
