//! # sl20-rs - A Rust Crate for SL20 (PGA460) Telemetry Decoding
//!
//! The sl20-rs crate decodes telemetry telegrams emitted by SL20
//! ultrasonic level meters, which are built around the TI PGA460
//! analog front end. A telegram carries a snapshot of the PGA460
//! configuration registers and the raw echo capture that produced the
//! current level reading.
//!
//! ## Features
//!
//! - Split a JSON report envelope into its raw payload fields
//! - Decode the PG payload into the 23 named configuration registers
//! - Reconstruct the time-varying-gain (TVG) curve on a physical
//!   distance axis from the register bit fields
//! - Map the RW payload to an echo waveform with a distance axis derived
//!   from the record length register
//! - Render the acquisition timestamp with a configurable pattern
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! To use the sl20-rs crate in your Rust project, add the following to
//! your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! sl20-rs = "1.0.0"
//! ```
//!
//! Then, in your Rust code, you can import the necessary modules and
//! functions:
//!
//! ```rust
//! use sl20_rs::{
//!     decode_telegram_str, decode_telemetry, format_timestamp,
//!     DecodedTelemetry, RegisterSet, Sl20Error, Telegram, TvgCurve,
//!     Waveform, init_logger, log_info,
//! };
//! ```

pub mod chart;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod telegram;
pub mod timestamp;
pub mod util;

pub use crate::error::Sl20Error;
pub use crate::logging::{init_logger, log_info};

// Core telemetry types
pub use chart::{TvgCurve, Waveform};
pub use decoder::{decode_telemetry, decode_telemetry_with_format, DecodedTelemetry};
pub use telegram::{RegisterSet, Telegram};
pub use timestamp::{format_timestamp, format_timestamp_with};

/// Decode a telegram from its JSON envelope text.
///
/// # Arguments
/// * `payload` - The envelope as received from the transport layer
///
/// # Returns
/// * `Ok(DecodedTelemetry)` - Registers, charts and formatted timestamp
/// * `Err(Sl20Error)` - Envelope or payload decoding failed
pub fn decode_telegram_str(payload: &str) -> Result<DecodedTelemetry, Sl20Error> {
    let telegram = Telegram::from_json_str(payload)?;
    decode_telemetry(&telegram)
}

/// Decode a telegram from an already-deserialized JSON envelope.
///
/// # Arguments
/// * `value` - The envelope as a `serde_json::Value`
///
/// # Returns
/// * `Ok(DecodedTelemetry)` - Registers, charts and formatted timestamp
/// * `Err(Sl20Error)` - Envelope or payload decoding failed
pub fn decode_telegram_value(value: &serde_json::Value) -> Result<DecodedTelemetry, Sl20Error> {
    let telegram = Telegram::from_value(value)?;
    decode_telemetry(&telegram)
}
