use crate::error::ProverError;
use crate::manifest::CircuitManifest;
use crate::proof::Proof;
use crate::witness::Witness;

/// The proving library behind a seam.
///
/// The real backend lives outside this repository; the flow only ever
/// talks to these two traits. Implementations must be `Send + Sync` and
/// both traits are object-safe so a backend can be chosen at runtime.
pub trait ProvingBackend: Send + Sync {
    /// Instantiate a circuit from a compiled manifest.
    fn create_circuit(&self, manifest: CircuitManifest) -> Result<Box<dyn Circuit>, ProverError>;
}

/// A circuit ready to prove and verify.
pub trait Circuit: Send + Sync {
    /// Generate a proof for the given witness.
    fn prove(&self, witness: &Witness) -> Result<Proof, ProverError>;

    /// Verify a proof generated by this circuit.
    ///
    /// `Ok(false)` means the proof is well-formed but does not check out;
    /// structural problems are errors.
    fn verify(&self, proof: &Proof) -> Result<bool, ProverError>;
}
