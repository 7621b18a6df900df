use crate::error::ProverError;

/// Width of the proof tail the server stores and validates, in raw bytes.
///
/// The backend's proofs carry a fixed-size suffix; only this tail is
/// submitted on `/request/complete`, hex-encoded to `2 * PROOF_TAIL_BYTES`
/// characters.
pub const PROOF_TAIL_BYTES: usize = 2144;

/// A proof as returned by the proving backend — an opaque byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    bytes: Vec<u8>,
}

impl Proof {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Keep only the final `n` raw bytes of the proof, hex-encoded.
    ///
    /// Fails if the proof is shorter than `n`. The result is always
    /// exactly `2 * n` characters.
    pub fn tail_hex(&self, n: usize) -> Result<String, ProverError> {
        if self.bytes.len() < n {
            return Err(ProverError::ProofTooShort {
                needed: n,
                actual: self.bytes.len(),
            });
        }
        Ok(hex::encode(&self.bytes[self.bytes.len() - n..]))
    }
}
