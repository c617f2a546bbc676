//! Impulse and step response via Direct Form I
//!
//! Runs the difference equation of the transfer function twice, once driven
//! by a unit impulse and once by a unit step, producing exactly 512 output
//! samples each:
//!
//! ```text
//! y[n] = ( Σ num[k]·x[n−k]  −  Σ den[k]·y[n−k] ) / den[0]
//!          k=0..|num|-1        k=1..|den|-1
//! ```
//!
//! Taps reaching before n = 0 contribute nothing. `den[0]` is the
//! normalizing divisor: the coefficient at index 0, not the highest power,
//! plays this role.
//!
//! Output extrema are accumulated only over samples 0..500. The last twelve
//! samples are computed but never bound the plot scale; this window is an
//! exact compatibility contract, not an approximation.
//!
//! ## Example
//!
//! ```rust
//! use zbode_core::time_response::TimeResponse;
//! use zbode_core::transfer_function::TransferFunction;
//!
//! // one-pole lowpass: y[n] = x[n] + 0.5·y[n-1]
//! let tf = TransferFunction::parse("1", "1,-0.5").unwrap();
//! let resp = TimeResponse::compute(&tf).unwrap();
//! assert!((resp.impulse()[3] - 0.125).abs() < 1e-12);
//! assert!((resp.step()[511] - 2.0).abs() < 1e-9);
//! ```

use crate::extrema::Extrema;
use crate::transfer_function::TransferFunction;
use crate::types::{ZError, ZResult};

/// Length of each output sequence. Fixed compatibility contract.
pub const TIME_SAMPLES: usize = 512;

/// Extrema accumulate over indices `0..EXTREMA_WINDOW` only.
pub const EXTREMA_WINDOW: usize = 500;

/// Impulse and step response of a transfer function.
#[derive(Debug, Clone)]
pub struct TimeResponse {
    impulse: Vec<f64>,
    step: Vec<f64>,
    impulse_extrema: Extrema,
    step_extrema: Extrema,
}

impl TimeResponse {
    /// Run both recursions.
    ///
    /// Refuses empty coefficient arrays and a zero `den[0]`; no division by
    /// zero can occur past this point.
    pub fn compute(tf: &TransferFunction) -> ZResult<Self> {
        let num = tf.numerator();
        let den = tf.denominator();
        if num.is_empty() {
            return Err(ZError::EmptyCoefficients { which: "numerator" });
        }
        if den.is_empty() {
            return Err(ZError::EmptyCoefficients {
                which: "denominator",
            });
        }
        if den[0] == 0.0 {
            return Err(ZError::ZeroDenominator);
        }
        tracing::debug!(
            samples = TIME_SAMPLES,
            order = tf.order(),
            "computing impulse and step response"
        );

        let mut impulse = vec![0.0; TIME_SAMPLES];
        let mut step = vec![0.0; TIME_SAMPLES];
        let mut impulse_extrema = Extrema::new();
        let mut step_extrema = Extrema::new();

        for n in 0..TIME_SAMPLES {
            // feed-forward taps; impulse input is 1 only at sample 0,
            // step input is 1 everywhere
            for (k, &b) in num.iter().enumerate() {
                let Some(m) = n.checked_sub(k) else { continue };
                if m == 0 {
                    impulse[n] += b / den[0];
                }
                step[n] += b / den[0];
            }
            // feedback taps
            for (k, &a) in den.iter().enumerate().skip(1) {
                let Some(m) = n.checked_sub(k) else { continue };
                impulse[n] -= a * impulse[m] / den[0];
                step[n] -= a * step[m] / den[0];
            }
            if n < EXTREMA_WINDOW {
                impulse_extrema.update(impulse[n]);
                step_extrema.update(step[n]);
            }
        }

        Ok(Self {
            impulse,
            step,
            impulse_extrema,
            step_extrema,
        })
    }

    /// Impulse response, exactly [`TIME_SAMPLES`] samples.
    pub fn impulse(&self) -> &[f64] {
        &self.impulse
    }

    /// Step response, exactly [`TIME_SAMPLES`] samples.
    pub fn step(&self) -> &[f64] {
        &self.step
    }

    /// Impulse response bounds over the extrema window.
    pub fn impulse_extrema(&self) -> &Extrema {
        &self.impulse_extrema
    }

    /// Step response bounds over the extrema window.
    pub fn step_extrema(&self) -> &Extrema {
        &self.step_extrema
    }
}
