use serde::{Deserialize, Serialize};

use crate::status::RequestStatus;

/// A proof request as tracked by the verification server.
///
/// The resource lives server-side; this is the mirror decoded from each
/// lifecycle response. The `id` is assigned by the server on creation and
/// must be threaded through every subsequent call — the client never
/// invents its own identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofRequest {
    /// Opaque identifier assigned by the server.
    pub id: String,
    /// Minimum age the proof must demonstrate.
    pub min_age: Option<i64>,
    /// Reference date for the verification (YYYYMMDD).
    pub current_date: Option<String>,
    /// Current lifecycle state.
    pub status: RequestStatus,
    /// Citizenship condition. Tracked by the server, unused by this flow.
    pub citizenship: Option<String>,
    /// Hex-encoded proof tail, present once submitted.
    pub proof: Option<String>,
}
