//! Ocelot Client — HTTP client for the proof-request lifecycle.
//!
//! Wraps the four POST endpoints of the verification server
//! (`/request/create`, `/request/start`, `/request/accept`,
//! `/request/complete`). One attempt per call, no retries; failures are
//! surfaced as typed errors and the caller decides whether to continue.

pub mod error;
pub mod lifecycle;

pub use error::ClientError;
pub use lifecycle::LifecycleClient;
