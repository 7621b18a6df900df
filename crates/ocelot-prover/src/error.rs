/// Proof adapter errors.
#[derive(Debug, thiserror::Error)]
pub enum ProverError {
    #[error("failed to read circuit manifest {path}: {source}")]
    ManifestRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse circuit manifest {path}: {source}")]
    ManifestParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("proof generation failed: {0}")]
    GenerationFailed(String),

    #[error("proof verification failed: {0}")]
    VerificationFailed(String),

    #[error("invalid proof data: {0}")]
    InvalidProofData(String),

    #[error("missing witness input: {0}")]
    MissingInput(String),

    #[error("proof too short: need {needed} bytes, have {actual}")]
    ProofTooShort { needed: usize, actual: usize },
}
