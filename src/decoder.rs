//! Telegram decoding pipeline.
//!
//! Ties the envelope, register, chart and timestamp stages together into
//! one immutable result per telegram. Decoding is all-or-nothing: a
//! failed sub-decode propagates instead of defaulting to empty output.

use crate::chart::{TvgCurve, Waveform};
use crate::constants::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::Sl20Error;
use crate::telegram::{RegisterSet, Telegram};
use crate::timestamp::format_timestamp_with;
use log::debug;
use serde::Serialize;

/// Fully decoded SL20 report: the named register configuration, both
/// chart curves and the formatted acquisition time.
#[derive(Debug, Clone, Serialize)]
pub struct DecodedTelemetry {
    pub registers: RegisterSet,
    pub tvg_curve: TvgCurve,
    pub waveform: Waveform,
    pub timestamp: String,
}

/// Decode one telegram with the default timestamp pattern.
pub fn decode_telemetry(telegram: &Telegram) -> Result<DecodedTelemetry, Sl20Error> {
    decode_telemetry_with_format(telegram, DEFAULT_TIMESTAMP_FORMAT)
}

/// Decode one telegram, rendering the timestamp with the given pattern.
pub fn decode_telemetry_with_format(
    telegram: &Telegram,
    timestamp_format: &str,
) -> Result<DecodedTelemetry, Sl20Error> {
    let registers = RegisterSet::from_hex(telegram.pg_hex()?)?;
    let tvg_curve = TvgCurve::from_registers(&registers);
    let waveform = Waveform::from_hex(telegram.rw_hex()?, &registers)?;
    let timestamp = format_timestamp_with(telegram.epoch(), timestamp_format)?;

    debug!(
        "decoded telemetry: {} waveform samples, acquired {timestamp}",
        waveform.amplitude.len()
    );

    Ok(DecodedTelemetry {
        registers,
        tvg_curve,
        waveform,
        timestamp,
    })
}
