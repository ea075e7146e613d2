//! PGA460 register snapshot decoding.
//!
//! A PG payload is a 46-digit hex run, one byte per configuration
//! register in the fixed order of [`PG_REGISTER_NAMES`].

use crate::constants::{PG_HEX_LEN, PG_REGISTER_COUNT, PG_REGISTER_NAMES};
use crate::error::Sl20Error;
use crate::util::hex::{decode_hex, encode_hex, format_hex_compact};
use log::debug;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Immutable snapshot of the 23 PGA460 configuration registers carried
/// by one PG payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSet {
    values: [u8; PG_REGISTER_COUNT],
}

impl RegisterSet {
    /// Decode a PG payload (46 hex digits, one byte per register).
    pub fn from_hex(pg_hex: &str) -> Result<Self, Sl20Error> {
        let bytes =
            decode_hex(pg_hex).map_err(|e| Sl20Error::MalformedRegisterPayload(e.to_string()))?;

        if bytes.len() != PG_REGISTER_COUNT {
            return Err(Sl20Error::MalformedRegisterPayload(format!(
                "expected {PG_REGISTER_COUNT} register bytes ({PG_HEX_LEN} hex digits), got {}",
                bytes.len()
            )));
        }

        let mut values = [0u8; PG_REGISTER_COUNT];
        values.copy_from_slice(&bytes);
        debug!("decoded PG registers: {}", format_hex_compact(&values));

        Ok(Self { values })
    }

    /// Build a register set from raw register values in wire order.
    pub fn from_values(values: [u8; PG_REGISTER_COUNT]) -> Self {
        Self { values }
    }

    /// Re-encode as a PG payload hex string. Round-trip counterpart of
    /// [`RegisterSet::from_hex`], mainly useful for tooling and tests.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.values)
    }

    /// Look up a register value by its protocol name.
    pub fn get(&self, name: &str) -> Option<u8> {
        PG_REGISTER_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .map(|index| self.values[index])
    }

    /// Registers as (name, value) pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        PG_REGISTER_NAMES.iter().copied().zip(self.values)
    }

    // Named accessors for the registers the chart builders consume.

    /// TVG segment durations 1-2 (two 4-bit codes).
    pub fn tvgain0(&self) -> u8 {
        self.values[0]
    }

    /// TVG segment durations 3-4 (two 4-bit codes).
    pub fn tvgain1(&self) -> u8 {
        self.values[1]
    }

    /// TVG segment durations 5-6 (two 4-bit codes).
    pub fn tvgain2(&self) -> u8 {
        self.values[2]
    }

    /// TVG gain codes, first packed byte.
    pub fn tvgain3(&self) -> u8 {
        self.values[3]
    }

    /// TVG gain codes, second packed byte.
    pub fn tvgain4(&self) -> u8 {
        self.values[4]
    }

    /// TVG gain codes, third packed byte.
    pub fn tvgain5(&self) -> u8 {
        self.values[5]
    }

    /// TVG gain codes, final packed byte.
    pub fn tvgain6(&self) -> u8 {
        self.values[6]
    }

    /// Initial AFE gain; bits [5:0] seed the first two TVG curve points.
    pub fn init_gainafe(&self) -> u8 {
        self.values[7]
    }

    /// Record length; bits [7:4] are the echo record window in ms.
    pub fn rec_length(&self) -> u8 {
        self.values[14]
    }

    /// Decouple/temperature config; bits [7:6] select the AFE gain range.
    pub fn decpl_temp(&self) -> u8 {
        self.values[18]
    }
}

/// Serializes as a name → value map in wire order, matching the register
/// table shown to operators.
impl Serialize for RegisterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(PG_REGISTER_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::proptest;

    const ZERO_PG: &str = "0000000000000000000000000000000000000000000000";

    #[test]
    fn test_decode_all_zero() {
        let registers = RegisterSet::from_hex(ZERO_PG).unwrap();
        for (_, value) in registers.iter() {
            assert_eq!(value, 0);
        }
    }

    #[test]
    fn test_wire_order_is_preserved() {
        let mut values = [0u8; PG_REGISTER_COUNT];
        for (index, value) in values.iter_mut().enumerate() {
            *value = index as u8;
        }
        let registers = RegisterSet::from_hex(&encode_hex(&values)).unwrap();

        let names: Vec<&str> = registers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, PG_REGISTER_NAMES);
        assert_eq!(registers.get("TVGAIN0"), Some(0));
        assert_eq!(registers.get("INIT_GAINAFE"), Some(7));
        assert_eq!(registers.get("REC_LENGTH"), Some(14));
        assert_eq!(registers.get("DECPL_TEMP"), Some(18));
        assert_eq!(registers.get("P2_GAIN_CTRL"), Some(22));
        assert_eq!(registers.get("NOT_A_REGISTER"), None);
    }

    #[test]
    fn test_wrong_byte_count_rejected() {
        let short = "00".repeat(PG_REGISTER_COUNT - 1);
        assert!(matches!(
            RegisterSet::from_hex(&short),
            Err(Sl20Error::MalformedRegisterPayload(_))
        ));

        let long = "00".repeat(PG_REGISTER_COUNT + 1);
        assert!(matches!(
            RegisterSet::from_hex(&long),
            Err(Sl20Error::MalformedRegisterPayload(_))
        ));
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let mut bad = String::from(ZERO_PG);
        bad.replace_range(10..11, "x");
        assert!(matches!(
            RegisterSet::from_hex(&bad),
            Err(Sl20Error::MalformedRegisterPayload(_))
        ));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let registers = RegisterSet::from_hex(ZERO_PG).unwrap();
        let rendered = serde_json::to_string(&registers).unwrap();
        assert!(rendered.starts_with("{\"TVGAIN0\":0,\"TVGAIN1\":0"));
        assert!(rendered.ends_with("\"P2_GAIN_CTRL\":0}"));
    }

    proptest! {
        #[test]
        fn prop_hex_roundtrip(values in proptest::collection::vec(any::<u8>(), PG_REGISTER_COUNT)) {
            let mut array = [0u8; PG_REGISTER_COUNT];
            array.copy_from_slice(&values);
            let registers = RegisterSet::from_values(array);
            let decoded = RegisterSet::from_hex(&registers.to_hex()).unwrap();
            prop_assert_eq!(registers, decoded);
        }
    }
}
