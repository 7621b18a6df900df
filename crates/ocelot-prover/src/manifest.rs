use std::path::Path;

use serde::Deserialize;

use crate::error::ProverError;

/// A compiled-circuit manifest, as produced by the circuit toolchain.
///
/// The format is owned by the proving backend; only the handful of fields
/// the adapter cares about are named here, the rest ride along in `abi`
/// and `bytecode` untouched. A BLAKE3 digest of the raw file binds proofs
/// to the exact manifest they were generated from.
#[derive(Debug, Clone, Deserialize)]
pub struct CircuitManifest {
    /// Circuit name, if the toolchain recorded one.
    #[serde(default)]
    pub name: Option<String>,
    /// Toolchain version that compiled the circuit.
    #[serde(default)]
    pub noir_version: Option<String>,
    /// Parameter ABI, kept opaque.
    #[serde(default)]
    pub abi: Option<serde_json::Value>,
    /// Compiled circuit bytecode, kept opaque.
    #[serde(default)]
    pub bytecode: Option<String>,

    #[serde(skip)]
    digest: [u8; 32],
}

impl CircuitManifest {
    /// Load a manifest from a JSON file.
    ///
    /// A missing or malformed file is an error the caller is expected to
    /// treat as fatal — there is no proving without the circuit.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProverError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| ProverError::ManifestRead {
            path: path.display().to_string(),
            source,
        })?;
        let manifest = Self::from_bytes(&raw).map_err(|source| ProverError::ManifestParse {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            name = manifest.name.as_deref().unwrap_or("<unnamed>"),
            "loaded circuit manifest"
        );
        Ok(manifest)
    }

    /// Decode a manifest from raw JSON bytes.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, serde_json::Error> {
        let mut manifest: CircuitManifest = serde_json::from_slice(raw)?;
        manifest.digest = *blake3::hash(raw).as_bytes();
        Ok(manifest)
    }

    /// BLAKE3 digest of the raw manifest file.
    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }
}
