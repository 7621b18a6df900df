//! Deterministic mock proving backend.
//!
//! Stands in for the external proving library in the demo flow and the
//! test suite. Proofs are BLAKE3 keystream bytes bound to the manifest
//! digest and the witness, closed with a 32-byte tag the verifier can
//! recompute from the proof alone. **Not zero-knowledge** — the scheme is
//! transparent and exists only to exercise the handshake end to end with
//! realistic proof sizes.

use crate::backend::{Circuit, ProvingBackend};
use crate::error::ProverError;
use crate::manifest::CircuitManifest;
use crate::proof::Proof;
use crate::witness::Witness;

/// Total mock proof size, matching the external backend's fixed proof
/// buffer.
pub const MOCK_PROOF_BYTES: usize = 2208;

const TAG_BYTES: usize = 32;

/// Factory for [`MockCircuit`]s.
pub struct MockBackend;

impl ProvingBackend for MockBackend {
    fn create_circuit(&self, manifest: CircuitManifest) -> Result<Box<dyn Circuit>, ProverError> {
        Ok(Box::new(MockCircuit { manifest }))
    }
}

/// A circuit whose proofs are deterministic digests of manifest + witness.
pub struct MockCircuit {
    manifest: CircuitManifest,
}

impl Circuit for MockCircuit {
    /// `body = XOF(digest(manifest) || canonical(witness))`, then
    /// `tag = H(digest(manifest) || body)`; the proof is `body || tag`.
    fn prove(&self, witness: &Witness) -> Result<Proof, ProverError> {
        if witness.is_empty() {
            return Err(ProverError::MissingInput(
                "witness has no inputs".to_string(),
            ));
        }

        let mut hasher = blake3::Hasher::new();
        hasher.update(self.manifest.digest());
        hasher.update(&witness.canonical_bytes());

        let mut body = vec![0u8; MOCK_PROOF_BYTES - TAG_BYTES];
        hasher.finalize_xof().fill(&mut body);

        let tag = proof_tag(self.manifest.digest(), &body);
        let mut bytes = body;
        bytes.extend_from_slice(&tag);

        tracing::debug!(proof_len = bytes.len(), "mock proof generated");
        Ok(Proof::new(bytes))
    }

    /// Recompute the tag from the proof body; a mismatch is `Ok(false)`,
    /// a wrong-sized buffer is an error.
    fn verify(&self, proof: &Proof) -> Result<bool, ProverError> {
        if proof.len() != MOCK_PROOF_BYTES {
            return Err(ProverError::InvalidProofData(format!(
                "expected {} bytes, got {}",
                MOCK_PROOF_BYTES,
                proof.len()
            )));
        }

        let (body, tag) = proof.as_bytes().split_at(MOCK_PROOF_BYTES - TAG_BYTES);
        Ok(tag == proof_tag(self.manifest.digest(), body))
    }
}

fn proof_tag(manifest_digest: &[u8; 32], body: &[u8]) -> [u8; TAG_BYTES] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(manifest_digest);
    hasher.update(body);
    *hasher.finalize().as_bytes()
}
