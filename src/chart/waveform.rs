//! Raw echo waveform extraction.
//!
//! The RW payload is one hex pair per 8-bit amplitude sample. The
//! distance axis is derived from the REC_LENGTH register: the record
//! window in milliseconds, doubled for the out-and-back echo path and
//! scaled by the approximate speed of sound.

use crate::chart::round_mm;
use crate::constants::SPEED_OF_SOUND_APPROX;
use crate::error::Sl20Error;
use crate::telegram::RegisterSet;
use crate::util::hex::decode_hex;
use log::debug;
use serde::Serialize;

/// One captured echo trace: amplitude samples over distance in metres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waveform {
    pub distance_m: Vec<f64>,
    pub amplitude: Vec<u8>,
}

impl Waveform {
    /// Decode an RW payload against the register snapshot that captured it.
    pub fn from_hex(rw_hex: &str, registers: &RegisterSet) -> Result<Self, Sl20Error> {
        let amplitude =
            decode_hex(rw_hex).map_err(|e| Sl20Error::MalformedWaveformPayload(e.to_string()))?;

        // REC_LENGTH[7:4] is the record window in milliseconds; the echo
        // travels out and back, hence the factor of two.
        let record_length_ms = f64::from(registers.rec_length() >> 4);
        let max_distance = SPEED_OF_SOUND_APPROX * record_length_ms / 1000.0 * 2.0;
        let distance_m = distance_axis(max_distance, amplitude.len());

        debug!(
            "waveform: {} samples over {max_distance} m record window",
            amplitude.len()
        );

        Ok(Self {
            distance_m,
            amplitude,
        })
    }
}

/// `count` evenly spaced points from 0 to `max_distance` inclusive,
/// rounded to millimetres. A single sample degenerates to the origin.
fn distance_axis(max_distance: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![0.0; count];
    }

    let step = max_distance / (count - 1) as f64;
    (0..count).map(|i| round_mm(step * i as f64)).collect()
}
