//! Frequency response sweep
//!
//! Evaluates `H(e^jω)` on a geometric 601-point frequency grid. The grid
//! starts at the configured start frequency (converted to radians/sample)
//! and each point is the previous one times `10^(1/points_per_decade)`, so
//! the sweep spans exactly the configured number of decades.
//!
//! Responses are computed by substituting `z⁻¹ = e^(-jω)` into the transfer
//! function. A frequency where the denominator vanishes produces a NaN
//! sample; the sweep continues through it. Frequencies at or above π
//! radians/sample lie beyond the Nyquist limit and are flagged as aliased.
//!
//! ## Example
//!
//! ```rust
//! use zbode_core::freq_response::FrequencyResponse;
//! use zbode_core::transfer_function::TransferFunction;
//! use zbode_core::types::SweepConfig;
//!
//! let tf = TransferFunction::parse("1", "1,-0.5").unwrap();
//! let sweep = FrequencyResponse::compute(&tf, &SweepConfig::default()).unwrap();
//! assert_eq!(sweep.response().len(), 601);
//! let (lo, hi) = sweep.real_extrema().range().unwrap();
//! assert!(lo <= hi);
//! ```

use crate::extrema::Extrema;
use crate::transfer_function::TransferFunction;
use crate::types::{Complex, SweepConfig, ZError, ZResult};
use std::f64::consts::PI;

/// Number of points in every frequency sweep. Fixed compatibility contract.
pub const SWEEP_POINTS: usize = 601;

/// Complex frequency response over a geometric sweep.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Sweep frequencies in radians/sample, strictly increasing.
    freqs: Vec<f64>,
    /// Complex response, aligned index-for-index with `freqs`.
    response: Vec<Complex>,
    real_extrema: Extrema,
    imag_extrema: Extrema,
}

impl FrequencyResponse {
    /// Run the sweep.
    ///
    /// Validates the configuration and refuses empty coefficient arrays;
    /// everything past that point always yields exactly [`SWEEP_POINTS`]
    /// samples, NaN points included.
    pub fn compute(tf: &TransferFunction, config: &SweepConfig) -> ZResult<Self> {
        config.validate()?;
        if tf.numerator().is_empty() {
            return Err(ZError::EmptyCoefficients { which: "numerator" });
        }
        if tf.denominator().is_empty() {
            return Err(ZError::EmptyCoefficients {
                which: "denominator",
            });
        }
        tracing::debug!(
            points = SWEEP_POINTS,
            decades = config.decades.count(),
            start_freq = config.start_freq,
            unit = %config.unit,
            "computing frequency sweep"
        );

        let ratio = 10.0_f64.powf(1.0 / config.decades.points_per_decade() as f64);
        let mut freqs = Vec::with_capacity(SWEEP_POINTS);
        freqs.push(config.start_freq_rad_per_sample());
        for i in 1..SWEEP_POINTS {
            let next = freqs[i - 1] * ratio;
            freqs.push(next);
        }

        let mut response = Vec::with_capacity(SWEEP_POINTS);
        let mut real_extrema = Extrema::new();
        let mut imag_extrema = Extrema::new();
        for &omega in &freqs {
            let z_inv = Complex::new(0.0, -omega).exp();
            let h = tf.evaluate(z_inv);
            real_extrema.update(h.re);
            imag_extrema.update(h.im);
            response.push(h);
        }

        Ok(Self {
            freqs,
            response,
            real_extrema,
            imag_extrema,
        })
    }

    /// Sweep frequencies in radians/sample.
    pub fn frequencies(&self) -> &[f64] {
        &self.freqs
    }

    /// Complex response samples, one per sweep frequency.
    pub fn response(&self) -> &[Complex] {
        &self.response
    }

    /// Bounds of the real part across the sweep.
    pub fn real_extrema(&self) -> &Extrema {
        &self.real_extrema
    }

    /// Bounds of the imaginary part across the sweep.
    pub fn imag_extrema(&self) -> &Extrema {
        &self.imag_extrema
    }

    /// True when the sample lies at or beyond the Nyquist limit
    /// (π radians/sample) and is therefore aliased.
    pub fn is_aliased(&self, index: usize) -> bool {
        self.freqs[index] >= PI
    }

    /// Magnitude in dB at one sweep point: `20·log10(|H|)`.
    ///
    /// May be non-finite (−∞ at a true zero, NaN at a NaN sample).
    pub fn magnitude_db(&self, index: usize) -> f64 {
        20.0 * self.response[index].norm().log10()
    }

    /// Phase in radians at one sweep point, in (−π, π].
    pub fn phase(&self, index: usize) -> f64 {
        self.response[index].arg()
    }
}
