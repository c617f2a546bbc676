//! Polynomial parsing and multiplication
//!
//! Coefficients are ordered by ascending power of z⁻¹, so `[1.0, 2.0, 1.0]`
//! is `1 + 2z⁻¹ + z⁻²`. Input text is a comma/whitespace-separated list of
//! numbers, optionally grouped into bracketed factors that are multiplied
//! (convolved) together:
//!
//! ```text
//! "1,2,1"                 single polynomial
//! "(1,1)(1,1)"            product of two factors
//! "0.00439456;(1,2,1)"    scale factor times a polynomial
//! ```
//!
//! ## Example
//!
//! ```rust
//! use zbode_core::polynomial::{convolve, parse_factor_list};
//!
//! let p = parse_factor_list("(1,1)[1,1]").unwrap();
//! assert_eq!(p, vec![1.0, 2.0, 1.0]);
//! assert_eq!(convolve(&p, &[1.0, 1.0]), vec![1.0, 3.0, 3.0, 1.0]);
//! ```

use crate::types::{ZError, ZResult};

/// Parse a comma/whitespace-separated coefficient list.
///
/// Blank input yields an empty vector. The first unparsable token aborts
/// with [`ZError::Parse`] echoing the token.
pub fn parse_coefficients(text: &str) -> ZResult<Vec<f64>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| ZError::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse a list of polynomial factors and convolve them together.
///
/// Opening brackets (`(`, `[`) are treated as whitespace and closing
/// brackets (`)`, `]`) as factor separators, along with explicit `;`.
/// Input with no separators is a single factor. Empty input yields the
/// identity polynomial `[1.0]`.
pub fn parse_factor_list(text: &str) -> ZResult<Vec<f64>> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '(' | '[' => ' ',
            ')' | ']' => ';',
            other => other,
        })
        .collect();

    let mut product = vec![1.0];
    for factor in normalized.split(';') {
        let coeffs = parse_coefficients(factor)?;
        if coeffs.is_empty() {
            continue;
        }
        product = convolve(&product, &coeffs);
    }
    Ok(product)
}

/// Multiply two polynomials by discrete convolution.
///
/// `out[i + j] += a[i] * b[j]`, so `out.len() == a.len() + b.len() - 1`.
/// Either operand being empty gives an empty result.
pub fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_parse_simple_list() {
        assert_eq!(
            parse_coefficients("1,2,1").unwrap(),
            vec![1.0, 2.0, 1.0]
        );
        assert_eq!(
            parse_coefficients(" 1.5\t-2e3  0.25 ").unwrap(),
            vec![1.5, -2000.0, 0.25]
        );
        assert_eq!(parse_coefficients("").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_parse_reports_bad_token() {
        let err = parse_coefficients("1,banana,3").unwrap_err();
        assert_eq!(
            err,
            ZError::Parse {
                token: "banana".to_string()
            }
        );
    }

    #[test]
    fn test_convolve_example() {
        assert_eq!(
            convolve(&[1.0, 2.0, 1.0], &[1.0, 1.0]),
            vec![1.0, 3.0, 3.0, 1.0]
        );
    }

    #[test]
    fn test_convolve_length_law() {
        let a = vec![1.0; 5];
        let b = vec![1.0; 3];
        let c = vec![1.0; 4];
        let abc = convolve(&convolve(&a, &b), &c);
        assert_eq!(abc.len(), 5 + 3 + 4 - 2);
    }

    #[test]
    fn test_convolve_associative() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let len = |rng: &mut StdRng| rng.gen_range(1..6);
            let poly = |rng: &mut StdRng| {
                let n = len(rng);
                (0..n).map(|_| rng.gen_range(-2.0..2.0)).collect::<Vec<f64>>()
            };
            let (a, b, c) = (poly(&mut rng), poly(&mut rng), poly(&mut rng));
            let left = convolve(&convolve(&a, &b), &c);
            let right = convolve(&a, &convolve(&b, &c));
            assert_eq!(left.len(), right.len());
            for (l, r) in left.iter().zip(right.iter()) {
                assert!((l - r).abs() < 1e-9, "{l} vs {r}");
            }
        }
    }

    #[test]
    fn test_factor_list_single_factor() {
        assert_eq!(
            parse_factor_list("1,-1.734834,0.752412").unwrap(),
            vec![1.0, -1.734834, 0.752412]
        );
    }

    #[test]
    fn test_factor_list_brackets() {
        assert_eq!(
            parse_factor_list("(1,1)(1,1)").unwrap(),
            vec![1.0, 2.0, 1.0]
        );
        assert_eq!(
            parse_factor_list("[1,1][1,2,1]").unwrap(),
            vec![1.0, 3.0, 3.0, 1.0]
        );
    }

    #[test]
    fn test_factor_list_scale_times_polynomial() {
        // the stock notch-filter numerator
        let p = parse_factor_list("0.00439456;(1,2,1)").unwrap();
        assert_eq!(p.len(), 3);
        assert!((p[0] - 0.00439456).abs() < 1e-15);
        assert!((p[1] - 0.00878912).abs() < 1e-15);
        assert!((p[2] - 0.00439456).abs() < 1e-15);
    }

    #[test]
    fn test_factor_list_empty_is_identity() {
        assert_eq!(parse_factor_list("").unwrap(), vec![1.0]);
        assert_eq!(parse_factor_list("  ()  ").unwrap(), vec![1.0]);
    }

    #[test]
    fn test_factor_list_propagates_parse_error() {
        let err = parse_factor_list("(1,2)(1,x)").unwrap_err();
        assert_eq!(
            err,
            ZError::Parse {
                token: "x".to_string()
            }
        );
    }
}
