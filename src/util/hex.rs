//! # Hex Payload Primitives
//!
//! Strict hex decoding shared by the register and waveform decoders.
//! SL20 payloads are bare hex digit runs with no separators, so unlike a
//! general-purpose hex reader this module rejects whitespace and any
//! other non-hex character instead of stripping it.
//!
//! ## Usage
//!
//! ```rust
//! use sl20_rs::util::hex::{encode_hex, decode_hex};
//!
//! let data = [0x40, 0x8f, 0x40, 0x8f];
//! let hex_str = encode_hex(&data);
//! assert_eq!(hex_str, "408f408f");
//!
//! let decoded = decode_hex(&hex_str).unwrap();
//! assert_eq!(decoded, data);
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),

    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex payload into bytes
///
/// Accepts both uppercase and lowercase hex characters. A payload must
/// contain at least one byte and an even number of digits; anything that
/// is not a hex digit is an error, never skipped. An odd-length payload
/// is rejected rather than truncated to whole bytes.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    if hex_str.is_empty() {
        return Err(HexError::EmptyString);
    }

    if let Some(bad) = hex_str.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidCharacter(bad));
    }

    if hex_str.len() % 2 != 0 {
        return Err(HexError::OddLength(hex_str.len()));
    }

    hex::decode(hex_str).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "40 8f 40 8f" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
