//! Ocelot Prover — the adapter between the handshake flow and the
//! zero-knowledge proving library.
//!
//! The proving system itself is an external collaborator reached through
//! the [`ProvingBackend`]/[`Circuit`] trait seam: load a circuit manifest,
//! assemble a witness from MRZ and date bytes, prove, extract the
//! fixed-width proof tail, verify. The in-tree [`MockBackend`] is a
//! deterministic stand-in used by the demo and the test suite.

pub mod backend;
pub mod error;
pub mod manifest;
pub mod mock;
pub mod proof;
pub mod witness;

pub use backend::{Circuit, ProvingBackend};
pub use error::ProverError;
pub use manifest::CircuitManifest;
pub use mock::MockBackend;
pub use proof::{Proof, PROOF_TAIL_BYTES};
pub use witness::{age_witness, Witness, WitnessValue};
