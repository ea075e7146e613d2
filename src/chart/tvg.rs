//! Time-varying-gain curve reconstruction.
//!
//! The PGA460 stores its TVG profile as six segment durations (4-bit
//! codes, two per TVGAIN0..TVGAIN2 byte) and seven 6-bit gain codes
//! packed across INIT_GAINAFE and TVGAIN3..TVGAIN6. This module unpacks
//! both and converts the time axis to distance using the approximate
//! speed of sound.

use crate::chart::round_mm;
use crate::constants::{AFE_GAIN_RANGE, SPEED_OF_SOUND_APPROX, TVG_DURATION, TVG_TIME_BASE_HZ};
use crate::telegram::RegisterSet;
use serde::Serialize;

/// Number of points on the reconstructed TVG curve.
pub const TVG_POINTS: usize = 7;

/// The reconstructed TVG profile: gain in dB over distance in metres.
///
/// Both axes are index-aligned and derived entirely from one register
/// snapshot; building a curve cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvgCurve {
    pub distance_m: [f64; TVG_POINTS],
    pub gain_db: [f64; TVG_POINTS],
}

impl TvgCurve {
    /// Reconstruct the TVG curve from a register snapshot.
    pub fn from_registers(registers: &RegisterSet) -> Self {
        Self {
            distance_m: distance_axis(registers),
            gain_db: gain_axis(registers),
        }
    }
}

/// Distance covered during one TVG segment, in metres.
///
/// The duration table is indexed by a 4-bit code and holds tick counts
/// of the 2 MHz TVG time base; ticks over the time base give seconds,
/// scaled by the speed of sound.
fn segment_distance(code: u8) -> f64 {
    f64::from(TVG_DURATION[(code & 0x0F) as usize]) / TVG_TIME_BASE_HZ * SPEED_OF_SOUND_APPROX
}

/// Cumulative distance breakpoints of the six TVG segments, plus the
/// origin. Segment duration codes are drawn high-nibble-first from
/// TVGAIN0, TVGAIN1 and TVGAIN2.
fn distance_axis(registers: &RegisterSet) -> [f64; TVG_POINTS] {
    let segment_bytes = [registers.tvgain0(), registers.tvgain1(), registers.tvgain2()];

    let mut axis = [0.0; TVG_POINTS];
    let mut reach = 0.0;
    let mut point = 1;
    for byte in segment_bytes {
        for code in [byte >> 4, byte & 0x0F] {
            reach += segment_distance(code);
            axis[point] = reach;
            point += 1;
        }
    }

    for breakpoint in &mut axis {
        *breakpoint = round_mm(*breakpoint);
    }
    axis
}

/// The seven raw 6-bit gain codes, unpacked from the register block.
///
/// Bit layout:
/// - g0: INIT_GAINAFE[5:0]
/// - g1: INIT_GAINAFE[5:0] (the shared initial-gain byte drives the
///   first two time segments)
/// - g2: TVGAIN3[7:2]
/// - g3: TVGAIN3[1:0] joined with TVGAIN4[7:4]
/// - g4: TVGAIN4[3:0] joined with TVGAIN5[7:6]
/// - g5: TVGAIN5[5:0]
/// - g6: TVGAIN6[7:2]
fn gain_codes(registers: &RegisterSet) -> [u8; TVG_POINTS] {
    let initial = registers.init_gainafe() & 0x3F;
    [
        initial,
        initial,
        registers.tvgain3() >> 2,
        ((registers.tvgain3() & 0x03) << 4) | (registers.tvgain4() >> 4),
        ((registers.tvgain4() & 0x0F) << 2) | (registers.tvgain5() >> 6),
        registers.tvgain5() & 0x3F,
        registers.tvgain6() >> 2,
    ]
}

/// Gain in dB for each curve point: half a dB per code step above the
/// AFE gain range selected by DECPL_TEMP[7:6].
fn gain_axis(registers: &RegisterSet) -> [f64; TVG_POINTS] {
    let afe_gain = AFE_GAIN_RANGE[(registers.decpl_temp() >> 6) as usize];

    let mut axis = [0.0; TVG_POINTS];
    for (gain, code) in axis.iter_mut().zip(gain_codes(registers)) {
        *gain = 0.5 * f64::from(code + 1) + afe_gain;
    }
    axis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PG_REGISTER_COUNT;
    use proptest::prelude::*;
    use proptest::proptest;

    fn registers_from(values: [u8; PG_REGISTER_COUNT]) -> RegisterSet {
        RegisterSet::from_values(values)
    }

    #[test]
    fn test_all_zero_registers() {
        let curve = TvgCurve::from_registers(&registers_from([0; PG_REGISTER_COUNT]));

        // Duration code 0 is 100 ticks: (100 / 2 MHz) * 330 m/s per segment.
        assert_eq!(
            curve.distance_m,
            [0.0, 0.017, 0.033, 0.05, 0.066, 0.083, 0.099]
        );
        assert_eq!(curve.gain_db, [58.5; TVG_POINTS]);
    }

    #[test]
    fn test_distance_segments_accumulate() {
        let mut values = [0u8; PG_REGISTER_COUNT];
        values[0] = 0x9D; // codes 9 (2000 ticks) and 13 (5200 ticks)
        values[1] = 0xEE; // 6400 ticks twice
        values[2] = 0xEF; // 6400 then 8000 ticks
        let curve = TvgCurve::from_registers(&registers_from(values));

        assert_eq!(
            curve.distance_m,
            [0.0, 0.33, 1.188, 2.244, 3.3, 4.356, 5.676]
        );
    }

    #[test]
    fn test_gain_codes_unpack() {
        let mut values = [0u8; PG_REGISTER_COUNT];
        values[3] = 0x2C; // TVGAIN3: g2 = 11, low bits feed g3
        values[4] = 0x1F; // TVGAIN4: g3 |= 1, g4 = 15 << 2
        values[5] = 0x00; // TVGAIN5
        values[6] = 0xFA; // TVGAIN6: g6 = 62
        values[7] = 0xFD; // INIT_GAINAFE: g0 = g1 = 61
        values[18] = 0x4F; // DECPL_TEMP: range code 1 -> 52 dB
        let curve = TvgCurve::from_registers(&registers_from(values));

        assert_eq!(curve.gain_db, [83.0, 83.0, 58.0, 53.0, 82.5, 52.5, 83.5]);
    }

    #[test]
    fn test_afe_gain_range_selection() {
        for (code, expected) in [(0u8, 58.5), (1, 52.5), (2, 46.5), (3, 32.5)] {
            let mut values = [0u8; PG_REGISTER_COUNT];
            values[18] = code << 6;
            let curve = TvgCurve::from_registers(&registers_from(values));
            assert_eq!(curve.gain_db, [expected; TVG_POINTS]);
        }
    }

    #[test]
    fn test_bits_outside_slices_are_ignored() {
        let mut values = [0u8; PG_REGISTER_COUNT];
        values[7] = 0x15;
        values[18] = 0x40;
        let baseline = TvgCurve::from_registers(&registers_from(values));

        // INIT_GAINAFE[7:6], TVGAIN6[1:0] and DECPL_TEMP[5:0] sit outside
        // every documented slice.
        values[7] |= 0xC0;
        values[6] |= 0x03;
        values[18] |= 0x3F;
        let touched = TvgCurve::from_registers(&registers_from(values));

        assert_eq!(baseline.gain_db, touched.gain_db);
        assert_eq!(baseline.distance_m, touched.distance_m);
    }

    proptest! {
        #[test]
        fn prop_distance_axis_non_decreasing(
            values in proptest::collection::vec(any::<u8>(), PG_REGISTER_COUNT)
        ) {
            let mut array = [0u8; PG_REGISTER_COUNT];
            array.copy_from_slice(&values);
            let curve = TvgCurve::from_registers(&registers_from(array));

            prop_assert_eq!(curve.distance_m[0], 0.0);
            for pair in curve.distance_m.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        #[test]
        fn prop_gain_axis_within_code_domain(
            values in proptest::collection::vec(any::<u8>(), PG_REGISTER_COUNT)
        ) {
            let mut array = [0u8; PG_REGISTER_COUNT];
            array.copy_from_slice(&values);
            let curve = TvgCurve::from_registers(&registers_from(array));

            // 6-bit codes over the four AFE ranges bound every point.
            for gain in curve.gain_db {
                prop_assert!((32.5..=90.0).contains(&gain));
            }
        }
    }
}
