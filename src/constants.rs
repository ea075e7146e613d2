//! SL20 Protocol Constants
//!
//! This module defines constants used to decode SL20 telemetry telegrams,
//! based on the TI PGA460 register map and the SL20 firmware's report
//! format.

/// Number of PGA460 configuration registers carried in a PG payload.
pub const PG_REGISTER_COUNT: usize = 23;

/// Expected length of a PG payload in hex digits (two per register).
pub const PG_HEX_LEN: usize = 2 * PG_REGISTER_COUNT;

/// PGA460 configuration register names, in wire order.
///
/// Byte *i* of the PG payload is register *i* of this list. The ordering
/// is fixed by the device firmware and must not be rearranged.
pub const PG_REGISTER_NAMES: [&str; PG_REGISTER_COUNT] = [
    "TVGAIN0",
    "TVGAIN1",
    "TVGAIN2",
    "TVGAIN3",
    "TVGAIN4",
    "TVGAIN5",
    "TVGAIN6",
    "INIT_GAINAFE",
    "FREQUENCY",
    "DEADTIME",
    "PULSE_P1",
    "PULSE_P2",
    "CURR_LIM_P1",
    "CURR_LIM_P2",
    "REC_LENGTH",
    "FREQ_DIAG",
    "SAT_FDIAG_TH",
    "FVOLT_DEC",
    "DECPL_TEMP",
    "DSP_SCALE",
    "TEMP_TRIM",
    "P1_GAIN_CTRL",
    "P2_GAIN_CTRL",
];

/// TVG segment durations in device time units, indexed by 4-bit code.
///
/// One duration unit is a tick of the 2 MHz TVG time base (see
/// [`TVG_TIME_BASE_HZ`]).
pub const TVG_DURATION: [u16; 16] = [
    100, 200, 300, 400, 600, 800, 1000, 1200, 1400, 2000, 2400, 3200, 4000, 5200, 6400, 8000,
];

/// TVG time base in Hz, used to convert duration units to seconds.
pub const TVG_TIME_BASE_HZ: f64 = 2_000_000.0;

/// AFE gain range offsets in dB, indexed by DECPL_TEMP bits [7:6].
pub const AFE_GAIN_RANGE: [f64; 4] = [58.0, 52.0, 46.0, 32.0];

/// Approximate speed of sound in air, in m/s.
pub const SPEED_OF_SOUND_APPROX: f64 = 330.0;

/// Default display pattern for telegram timestamps (hour:minute, day,
/// month name, year).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M %d %B %Y";
