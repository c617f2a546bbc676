//! Text result tables
//!
//! Renders the numeric results as tab-separated tables in scientific
//! notation with a six-digit fractional mantissa, the fixed form downstream
//! consumers (spreadsheets, result panes) expect. Complex values render as
//! `+1.424770E-2-3.210000E-3i`.
//!
//! Non-finite samples format as `NaN`/`inf`; consumers are expected to skip
//! or clamp them rather than treat them as failures.
//!
//! ## Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use zbode_core::table::{format_complex, format_scientific};
//!
//! assert_eq!(format_scientific(0.0142477), "1.424770E-2");
//! assert_eq!(format_complex(Complex64::new(1.0, -0.5)), "+1.000000E0-5.000000E-1i");
//! ```

use crate::freq_response::FrequencyResponse;
use crate::time_response::TimeResponse;
use crate::types::{Complex, SweepConfig};

/// Scientific notation with a six-digit fractional mantissa, e.g.
/// `1.424770E-2`.
pub fn format_scientific(x: f64) -> String {
    format!("{:.6E}", x)
}

/// Scientific notation with an explicit leading sign, e.g. `+1.424770E-2`.
pub fn format_signed(x: f64) -> String {
    format!("{:+.6E}", x)
}

/// Complex value as signed real and imaginary parts with an `i` suffix.
pub fn format_complex(c: Complex) -> String {
    format!("{}{}i", format_signed(c.re), format_signed(c.im))
}

/// Frequency response table: one row per sweep point.
///
/// The first column is the frequency converted back to the unit the sweep
/// was configured with; the second is the complex response. Always exactly
/// 601 data rows.
pub fn frequency_table(resp: &FrequencyResponse, config: &SweepConfig) -> String {
    let mut out = String::with_capacity(resp.response().len() * 48);
    out.push_str("Freq. (");
    out.push_str(&config.unit.to_string());
    out.push_str(")\tComplex Resp.\n");
    for (i, &omega) in resp.frequencies().iter().enumerate() {
        out.push_str(&format_scientific(config.to_display_unit(omega)));
        out.push('\t');
        out.push_str(&format_complex(resp.response()[i]));
        out.push('\n');
    }
    out
}

/// Time response table: one row per output sample.
///
/// Columns are time in seconds (sample index over the sample rate), impulse
/// response, and step response. Always exactly 512 data rows.
pub fn time_table(resp: &TimeResponse, sample_rate: f64) -> String {
    let mut out = String::with_capacity(resp.impulse().len() * 40);
    out.push_str("Time (sec)\tImpulse Response\tStep Function\n");
    for (i, (&imp, &stp)) in resp.impulse().iter().zip(resp.step().iter()).enumerate() {
        out.push_str(&format_scientific(i as f64 / sample_rate));
        out.push('\t');
        out.push_str(&format_scientific(imp));
        out.push('\t');
        out.push_str(&format_scientific(stp));
        out.push('\n');
    }
    out
}
