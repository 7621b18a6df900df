//! Ocelot Core — Fundamental types for the Ocelot age-verification
//! handshake: the proof-request lifecycle, the server payload mirror,
//! passport MRZ handling, and deterministic date formatting.

pub mod date;
pub mod error;
pub mod mrz;
pub mod request;
pub mod status;

pub use error::CoreError;
pub use mrz::Mrz;
pub use request::ProofRequest;
pub use status::{RequestEvent, RequestStateMachine, RequestStatus};
