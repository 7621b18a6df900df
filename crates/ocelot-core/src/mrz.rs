use std::fmt;

use crate::error::CoreError;

/// Length in bytes of a TD3 (passport booklet) machine-readable zone:
/// two lines of 44 characters.
pub const MRZ_LEN: usize = 88;

/// The machine-readable zone of a passport, TD3 layout.
///
/// The proving circuit consumes the zone as raw bytes; only the length is
/// checked here. Structural validation (check digits, field layout) is the
/// circuit's concern.
#[derive(Clone, PartialEq, Eq)]
pub struct Mrz([u8; MRZ_LEN]);

impl Mrz {
    /// Create an MRZ from raw bytes. Fails if the length is not 88.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; MRZ_LEN] = bytes.try_into().map_err(|_| {
            CoreError::InvalidMrz(format!("expected {} bytes, got {}", MRZ_LEN, bytes.len()))
        })?;
        Ok(Self(arr))
    }

    /// The raw zone bytes.
    pub fn as_bytes(&self) -> &[u8; MRZ_LEN] {
        &self.0
    }

    /// The specimen document used by the demo flow: passport 123456789
    /// issued by Utopia to SMITH, JOHN, born 1985-03-23.
    pub fn specimen() -> Self {
        Self(
            *b"P<UTOSMITH<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<\
               1234567891UTO8503238M2802154<<<<<<<<<<<<<<00",
        )
    }
}

impl fmt::Debug for Mrz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The zone is ASCII by construction of its sources; show it as text.
        write!(f, "Mrz({})", String::from_utf8_lossy(&self.0))
    }
}
