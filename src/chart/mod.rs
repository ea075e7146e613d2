//! The chart module turns a decoded register snapshot and the raw echo
//! payload into the two plottable curves an operator sees: the
//! time-varying-gain profile and the echo waveform, both on a physical
//! distance axis.

pub mod tvg;
pub mod waveform;

pub use tvg::TvgCurve;
pub use waveform::Waveform;

/// Round to millimetre resolution. Chart axes are rounded once, on the
/// finished sequence, never per accumulation step.
pub(crate) fn round_mm(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
