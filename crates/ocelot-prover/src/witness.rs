use std::collections::BTreeMap;

use ocelot_core::Mrz;

/// Witness input name for the passport machine-readable zone.
pub const INPUT_MRZ: &str = "mrz";
/// Witness input name for the verification reference date.
pub const INPUT_CURRENT_DATE: &str = "current_date";
/// Witness input name for the required minimum age.
pub const INPUT_MIN_AGE: &str = "min_age_required";

/// A single witness input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessValue {
    /// Raw bytes (MRZ, date digits).
    Bytes(Vec<u8>),
    /// Signed integer (age threshold).
    Integer(i64),
}

/// Named inputs handed to the proving circuit.
///
/// Kept as an ordered map so the canonical byte encoding — and therefore
/// any digest derived from it — is independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Witness {
    inputs: BTreeMap<String, WitnessValue>,
}

impl Witness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bytes input.
    pub fn insert_bytes(&mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.inputs
            .insert(name.into(), WitnessValue::Bytes(value.into()));
    }

    /// Add an integer input.
    pub fn insert_integer(&mut self, name: impl Into<String>, value: i64) {
        self.inputs
            .insert(name.into(), WitnessValue::Integer(value));
    }

    pub fn get(&self, name: &str) -> Option<&WitnessValue> {
        self.inputs.get(name)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Deterministic byte encoding of the witness: for each input in name
    /// order, `name || 0x00 || value-bytes || 0xff`. Integers are encoded
    /// little-endian.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (name, value) in &self.inputs {
            out.extend_from_slice(name.as_bytes());
            out.push(0x00);
            match value {
                WitnessValue::Bytes(bytes) => out.extend_from_slice(bytes),
                WitnessValue::Integer(n) => out.extend_from_slice(&n.to_le_bytes()),
            }
            out.push(0xff);
        }
        out
    }
}

/// Assemble the witness for the age circuit: the MRZ bytes, the reference
/// date digits, and the age threshold. Pure data assembly — no validation,
/// no computation.
pub fn age_witness(mrz: &Mrz, current_date: &[u8; 8], min_age: i64) -> Witness {
    let mut witness = Witness::new();
    witness.insert_bytes(INPUT_MRZ, mrz.as_bytes().to_vec());
    witness.insert_bytes(INPUT_CURRENT_DATE, current_date.to_vec());
    witness.insert_integer(INPUT_MIN_AGE, min_age);
    witness
}
