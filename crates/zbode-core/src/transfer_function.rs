//! Z-domain transfer function
//!
//! A validated numerator/denominator coefficient pair:
//!
//! ```text
//!        N(z)    n0 + n1·z⁻¹ + n2·z⁻² + ...
//! H(z) = ---- = ----------------------------
//!        D(z)    d0 + d1·z⁻¹ + d2·z⁻² + ...
//! ```
//!
//! `d0` is the normalizing divisor of the time-domain recursion. A
//! denominator that parses to exactly `[0.0]` is rejected here, before any
//! engine can run.
//!
//! ## Example
//!
//! ```rust
//! use zbode_core::transfer_function::TransferFunction;
//! use num_complex::Complex64;
//!
//! let tf = TransferFunction::parse("0.00439456;(1,2,1)", "1,-1.734834,0.752412").unwrap();
//! assert_eq!(tf.numerator().len(), 3);
//!
//! // DC response: z⁻¹ = 1
//! let h0 = tf.evaluate(Complex64::new(1.0, 0.0));
//! assert!(h0.norm() < 1.1);
//! ```

use crate::polynomial::parse_factor_list;
use crate::types::{Complex, ZError, ZResult};

/// Numerator/denominator polynomial pair, ascending powers of z⁻¹.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    numerator: Vec<f64>,
    denominator: Vec<f64>,
}

impl TransferFunction {
    /// Build from coefficient vectors.
    ///
    /// Rejects a denominator of exactly `[0.0]`.
    pub fn new(numerator: Vec<f64>, denominator: Vec<f64>) -> ZResult<Self> {
        if denominator.len() == 1 && denominator[0] == 0.0 {
            return Err(ZError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Parse numerator and denominator factor-list text.
    ///
    /// Both fields accept the full factor grammar, e.g. `"(1,1)(1,1)"`.
    pub fn parse(num_text: &str, den_text: &str) -> ZResult<Self> {
        let numerator = parse_factor_list(num_text)?;
        let denominator = parse_factor_list(den_text)?;
        Self::new(numerator, denominator)
    }

    /// Numerator coefficients.
    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    /// Denominator coefficients.
    pub fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    /// Filter order: highest power of z⁻¹ present.
    pub fn order(&self) -> usize {
        self.numerator
            .len()
            .max(self.denominator.len())
            .saturating_sub(1)
    }

    /// Evaluate `H` at the given value of z⁻¹.
    ///
    /// Both polynomials are accumulated with an incrementally updated power
    /// of z⁻¹; the quotient has NaN components when the denominator
    /// evaluates to exactly zero.
    pub fn evaluate(&self, z_inv: Complex) -> Complex {
        eval_poly(&self.numerator, z_inv) / eval_poly(&self.denominator, z_inv)
    }
}

/// Evaluate a real-coefficient polynomial at a complex point.
fn eval_poly(coeffs: &[f64], z_inv: Complex) -> Complex {
    let mut acc = Complex::new(0.0, 0.0);
    let mut power = Complex::new(1.0, 0.0);
    for &c in coeffs {
        acc += power * c;
        power *= z_inv;
    }
    acc
}

impl std::fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |coeffs: &[f64]| {
            coeffs
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "H(z) = ({}) / ({})",
            join(&self.numerator),
            join(&self.denominator)
        )
    }
}
