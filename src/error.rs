//! # SL20 Error Handling
//!
//! This module defines the Sl20Error enum, which represents the different
//! error types that can occur when decoding SL20 telemetry telegrams.

use thiserror::Error;

/// Represents the different error types that can occur in the SL20 crate.
#[derive(Debug, Error)]
pub enum Sl20Error {
    /// Indicates a telegram field is absent or empty where required.
    #[error("Missing telegram field: {0}")]
    MissingField(&'static str),

    /// Indicates the PG register payload could not be decoded.
    #[error("Malformed register payload: {0}")]
    MalformedRegisterPayload(String),

    /// Indicates the RW waveform payload could not be decoded.
    #[error("Malformed waveform payload: {0}")]
    MalformedWaveformPayload(String),

    /// Indicates a negative or non-numeric telegram timestamp.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Indicates the telegram envelope is not the expected JSON shape.
    #[error("Error parsing telegram envelope: {0}")]
    TelegramParseError(String),

    /// A catch‑all error for uncategorized cases.
    #[error("Other error: {0}")]
    Other(String),
}
