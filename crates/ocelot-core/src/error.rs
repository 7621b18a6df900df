use crate::status::RequestStatus;

/// Core protocol errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid state transition from {from} to {to}")]
    InvalidStateTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("invalid MRZ: {0}")]
    InvalidMrz(String),

    #[error("validation error: {0}")]
    ValidationError(String),
}
