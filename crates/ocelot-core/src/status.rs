use std::fmt;

use crate::error::CoreError;

/// The states of a proof request lifecycle.
///
/// The vocabulary is owned by the request-tracking server; the wire tags
/// are the lowercase strings it returns in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Request has been created by the website, not yet picked up.
    Created,
    /// The mobile app has scanned the request and is working on a proof.
    Pending,
    /// The user has approved the request on the device.
    Accepted,
    /// A proof has been submitted and checked by the server. Final state.
    Completed,
    /// The request was declined or the proof did not check out. Final state.
    Rejected,
}

impl RequestStatus {
    /// Whether this is a final (terminal) state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// The lowercase wire tag for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Events that advance a proof request through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    /// The app picks the request up (`/request/start`).
    Start,
    /// The user approves the request (`/request/accept`).
    Accept,
    /// The app submits the generated proof (`/request/complete`).
    Complete,
    /// The user declines, or server-side verification fails.
    Reject,
}

/// Validates proof-request state transitions.
///
/// The server owns the authoritative state; this local model lets the
/// client check that each response advanced the request as expected.
///
/// Valid transitions:
/// - created → pending (Start)
/// - pending → accepted (Accept)
/// - pending → rejected (Reject)
/// - accepted → completed (Complete)
/// - accepted → rejected (Reject)
pub struct RequestStateMachine;

impl RequestStateMachine {
    /// Attempt a state transition based on an event.
    /// Returns the new state on success, or an error for invalid transitions.
    pub fn transition(
        current: RequestStatus,
        event: RequestEvent,
    ) -> Result<RequestStatus, CoreError> {
        let new_state = match (current, event) {
            (RequestStatus::Created, RequestEvent::Start) => RequestStatus::Pending,

            (RequestStatus::Pending, RequestEvent::Accept) => RequestStatus::Accepted,
            (RequestStatus::Pending, RequestEvent::Reject) => RequestStatus::Rejected,

            (RequestStatus::Accepted, RequestEvent::Complete) => RequestStatus::Completed,
            (RequestStatus::Accepted, RequestEvent::Reject) => RequestStatus::Rejected,

            // All other transitions are invalid
            _ => {
                let target = match event {
                    RequestEvent::Start => RequestStatus::Pending,
                    RequestEvent::Accept => RequestStatus::Accepted,
                    RequestEvent::Complete => RequestStatus::Completed,
                    RequestEvent::Reject => RequestStatus::Rejected,
                };
                return Err(CoreError::InvalidStateTransition {
                    from: current,
                    to: target,
                });
            }
        };

        tracing::debug!(
            from = %current,
            to = %new_state,
            event = ?event,
            "request state transition"
        );

        Ok(new_state)
    }

    /// Check if a transition is valid without performing it.
    pub fn can_transition(current: RequestStatus, event: RequestEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}
