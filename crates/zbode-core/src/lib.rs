//! # Z-Domain Response Engine
//!
//! Computes the complex frequency response and time-domain impulse/step
//! responses of a discrete-time linear system given as numerator and
//! denominator polynomial coefficient lists.
//!
//! ## Overview
//!
//! - **Polynomial parsing**: coefficient text with optional bracketed
//!   factors that are multiplied (convolved) together
//! - **Frequency sweep**: 601 geometrically spaced points evaluating
//!   `H(e^jω)` on the unit circle, with running real/imaginary extrema
//! - **Time response**: 512-sample Direct Form I recursion driven by a unit
//!   impulse and a unit step
//! - **Tables**: tab-separated text output in fixed-precision scientific
//!   notation for external renderers and spreadsheets
//!
//! ## Signal Flow
//!
//! ```text
//! coefficient text → TransferFunction ─┬→ FrequencyResponse → frequency_table
//!                                      └→ TimeResponse      → time_table
//! ```
//!
//! Every computation is a pure synchronous function of its inputs: engines
//! hold no state between calls, all loops are bounded, and result values
//! are plain `Send + Sync` data. Concurrent recomputation needs no
//! coordination; the latest result simply replaces the previous one.
//!
//! ## Example
//!
//! ```rust
//! use zbode_core::prelude::*;
//!
//! // notch filter at 0.142797 rad/sample
//! let tf = TransferFunction::parse("0.00439456;(1,2,1)", "1,-1.734834,0.752412").unwrap();
//! let config = SweepConfig::default();
//!
//! let sweep = FrequencyResponse::compute(&tf, &config).unwrap();
//! assert_eq!(sweep.response().len(), 601);
//!
//! let time = TimeResponse::compute(&tf).unwrap();
//! assert_eq!(time.impulse().len(), 512);
//! ```

pub mod extrema;
pub mod freq_response;
pub mod polynomial;
pub mod table;
pub mod time_response;
pub mod transfer_function;
pub mod types;

pub use extrema::Extrema;
pub use freq_response::{FrequencyResponse, SWEEP_POINTS};
pub use table::{frequency_table, time_table};
pub use time_response::{TimeResponse, EXTREMA_WINDOW, TIME_SAMPLES};
pub use transfer_function::TransferFunction;
pub use types::{Complex, DecadeCount, FrequencyUnit, SweepConfig, ZError, ZResult};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::freq_response::FrequencyResponse;
    pub use crate::table::{frequency_table, time_table};
    pub use crate::time_response::TimeResponse;
    pub use crate::transfer_function::TransferFunction;
    pub use crate::types::{DecadeCount, FrequencyUnit, SweepConfig, ZError, ZResult};
}
