//! Core types for Z-domain response analysis
//!
//! Defines the error enum shared by every module, the frequency-axis unit
//! and decade selectors, and the sweep configuration that bundles all
//! caller-supplied options into one explicit value. Engines take the
//! configuration as a parameter; there is no ambient or global state.
//!
//! Complex arithmetic uses [`num_complex::Complex64`] throughout. Division
//! rationalizes by the divisor's squared modulus, so dividing by an exact
//! zero yields NaN components rather than panicking. Callers must tolerate
//! non-finite values in results.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// Result type for response computations
pub type ZResult<T> = Result<T, ZError>;

/// Errors detected before or at engine entry.
///
/// All variants echo enough of the offending input to be shown to a user.
/// Non-finite values arising *inside* a successful run (zero-modulus
/// division, log of zero magnitude) are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZError {
    #[error("couldn't parse coefficient: {token}")]
    Parse { token: String },

    #[error("denominator can't be zero")]
    ZeroDenominator,

    #[error("start frequency can't be zero")]
    ZeroStartFrequency,

    #[error("sample rate can't be zero")]
    ZeroSampleRate,

    #[error("{which} coefficients are empty")]
    EmptyCoefficients { which: &'static str },
}

/// Units of measure for the frequency axis.
///
/// The sweep always runs in radians/sample internally; the unit selects the
/// conversion applied to the start frequency on the way in and to the first
/// table column on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyUnit {
    /// Radians per sample (native unit, no conversion)
    RadPerSample,
    /// Cycles per sample
    CycPerSample,
    /// Radians per second
    RadPerSecond,
    /// Cycles per second (Hz)
    CycPerSecond,
}

impl std::fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrequencyUnit::RadPerSample => write!(f, "rad/samp"),
            FrequencyUnit::CycPerSample => write!(f, "cyc/samp"),
            FrequencyUnit::RadPerSecond => write!(f, "rad/sec"),
            FrequencyUnit::CycPerSecond => write!(f, "cyc/sec"),
        }
    }
}

impl FromStr for FrequencyUnit {
    type Err = ZError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rad/samp" => Ok(FrequencyUnit::RadPerSample),
            "cyc/samp" => Ok(FrequencyUnit::CycPerSample),
            "rad/sec" => Ok(FrequencyUnit::RadPerSecond),
            "cyc/sec" => Ok(FrequencyUnit::CycPerSecond),
            other => Err(ZError::Parse {
                token: other.to_string(),
            }),
        }
    }
}

/// Number of decades spanned by the frequency sweep.
///
/// The sweep always has 601 points, so the decade count fixes the
/// points-per-decade density rather than the sweep length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecadeCount {
    Two,
    Three,
    Four,
}

impl DecadeCount {
    /// Geometric density of the sweep: 601 points spread over the decades.
    pub fn points_per_decade(&self) -> usize {
        match self {
            DecadeCount::Two => 300,
            DecadeCount::Three => 200,
            DecadeCount::Four => 150,
        }
    }

    /// Decade count as an integer.
    pub fn count(&self) -> u32 {
        match self {
            DecadeCount::Two => 2,
            DecadeCount::Three => 3,
            DecadeCount::Four => 4,
        }
    }

    /// Build from an arbitrary integer, clamping into 2..=4.
    ///
    /// Out-of-range values saturate; this mirrors how text-driven callers
    /// (argument lists, entry fields) have always been treated.
    pub fn from_clamped(n: i64) -> Self {
        match n {
            i64::MIN..=2 => DecadeCount::Two,
            3 => DecadeCount::Three,
            _ => DecadeCount::Four,
        }
    }
}

impl Default for DecadeCount {
    fn default() -> Self {
        DecadeCount::Two
    }
}

/// Caller-supplied options for a frequency sweep, bundled as one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Frequency at the left edge of the sweep, in `unit`. Must be nonzero.
    pub start_freq: f64,
    /// Unit of `start_freq` and of the rendered frequency column.
    pub unit: FrequencyUnit,
    /// Samples per second. Must be nonzero.
    pub sample_rate: f64,
    /// Decades spanned by the 601-point sweep.
    pub decades: DecadeCount,
}

impl Default for SweepConfig {
    /// Demo preset: 100 Hz start at 44.1 kHz over two decades.
    fn default() -> Self {
        Self {
            start_freq: 100.0,
            unit: FrequencyUnit::CycPerSecond,
            sample_rate: 44100.0,
            decades: DecadeCount::Two,
        }
    }
}

impl SweepConfig {
    /// Reject zero start frequency or zero sample rate.
    pub fn validate(&self) -> ZResult<()> {
        if self.start_freq == 0.0 {
            return Err(ZError::ZeroStartFrequency);
        }
        if self.sample_rate == 0.0 {
            return Err(ZError::ZeroSampleRate);
        }
        Ok(())
    }

    /// Start frequency converted to radians/sample.
    pub fn start_freq_rad_per_sample(&self) -> f64 {
        match self.unit {
            FrequencyUnit::RadPerSample => self.start_freq,
            FrequencyUnit::CycPerSample => self.start_freq * (2.0 * PI),
            FrequencyUnit::RadPerSecond => self.start_freq / self.sample_rate,
            FrequencyUnit::CycPerSecond => self.start_freq / (self.sample_rate / 2.0 / PI),
        }
    }

    /// Convert a radians/sample frequency back to the configured display unit.
    pub fn to_display_unit(&self, rad_per_sample: f64) -> f64 {
        match self.unit {
            FrequencyUnit::RadPerSample => rad_per_sample,
            FrequencyUnit::CycPerSample => rad_per_sample / (2.0 * PI),
            FrequencyUnit::RadPerSecond => rad_per_sample * self.sample_rate,
            FrequencyUnit::CycPerSecond => rad_per_sample * (self.sample_rate / 2.0 / PI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_ops_return_new_values() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -1.0);
        let sum = a + b;
        let prod = a * b;
        assert_eq!(sum, Complex64::new(4.0, 1.0));
        assert_eq!(prod, Complex64::new(5.0, 5.0));
        // operands untouched
        assert_eq!(a, Complex64::new(1.0, 2.0));
        assert_eq!(b, Complex64::new(3.0, -1.0));
    }

    #[test]
    fn test_complex_divide_rationalizes() {
        let a = Complex64::new(1.0, 1.0);
        let b = Complex64::new(0.0, 1.0);
        let q = a / b;
        assert!((q.re - 1.0).abs() < 1e-12);
        assert!((q.im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_complex_divide_by_zero_is_nan() {
        let q = Complex64::new(1.0, 1.0) / Complex64::new(0.0, 0.0);
        assert!(q.re.is_nan());
        assert!(q.im.is_nan());
    }

    #[test]
    fn test_complex_exp_on_unit_circle() {
        // exp(-j*pi/2) = -j
        let z = Complex64::new(0.0, -PI / 2.0).exp();
        assert!(z.re.abs() < 1e-12);
        assert!((z.im + 1.0).abs() < 1e-12);
        assert!((z.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_complex_arg_range() {
        assert!((Complex64::new(-1.0, 0.0).arg() - PI).abs() < 1e-12);
        assert!((Complex64::new(0.0, -1.0).arg() + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_labels_round_trip() {
        for unit in [
            FrequencyUnit::RadPerSample,
            FrequencyUnit::CycPerSample,
            FrequencyUnit::RadPerSecond,
            FrequencyUnit::CycPerSecond,
        ] {
            assert_eq!(unit.to_string().parse::<FrequencyUnit>().unwrap(), unit);
        }
        assert!("furlongs".parse::<FrequencyUnit>().is_err());
    }

    #[test]
    fn test_start_freq_conversion_cyc_per_sec() {
        // 100 Hz at 44.1 kHz is about 0.014247 rad/sample
        let config = SweepConfig::default();
        let w = config.start_freq_rad_per_sample();
        assert!((w - 0.014247).abs() < 1e-6);
    }

    #[test]
    fn test_conversions_invert() {
        for unit in [
            FrequencyUnit::RadPerSample,
            FrequencyUnit::CycPerSample,
            FrequencyUnit::RadPerSecond,
            FrequencyUnit::CycPerSecond,
        ] {
            let config = SweepConfig {
                start_freq: 3.5,
                unit,
                sample_rate: 8000.0,
                decades: DecadeCount::Three,
            };
            let w = config.start_freq_rad_per_sample();
            assert!((config.to_display_unit(w) - 3.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_decade_points() {
        assert_eq!(DecadeCount::Two.points_per_decade(), 300);
        assert_eq!(DecadeCount::Three.points_per_decade(), 200);
        assert_eq!(DecadeCount::Four.points_per_decade(), 150);
    }

    #[test]
    fn test_decade_clamp() {
        assert_eq!(DecadeCount::from_clamped(-7), DecadeCount::Two);
        assert_eq!(DecadeCount::from_clamped(2), DecadeCount::Two);
        assert_eq!(DecadeCount::from_clamped(3), DecadeCount::Three);
        assert_eq!(DecadeCount::from_clamped(4), DecadeCount::Four);
        assert_eq!(DecadeCount::from_clamped(99), DecadeCount::Four);
    }

    #[test]
    fn test_validate_rejects_zeros() {
        let config = SweepConfig {
            start_freq: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ZError::ZeroStartFrequency));

        let config = SweepConfig {
            sample_rate: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ZError::ZeroSampleRate));

        assert_eq!(SweepConfig::default().validate(), Ok(()));
    }
}
