//! Contains functions for reading numbers from composition files
//!
//! # Integers
//! Plain decimal integers with an optional sign. Surrounding whitespace is
//! ignored, but an empty field is an error (there is no sensible default
//! for a nuclide identifier or a mass number).
//!
//! # Floats
//! Besides the usual Rust float syntax, two legacy forms still show up in
//! composition files written by Fortran codes:
//!   - `1.5D-3` with `D` (or `d`) as the exponent marker
//!   - `1.5-3` the 'E-less' ENDF form where the exponent sign follows the
//!     mantissa directly
//!
//! Both are accepted by [to_f64].
//!
use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;

// We need to wrap regex like this so it is compiled only once on first use
lazy_static! {
    static ref ELESS_FLOAT: Regex = Regex::new(r"^([-+]?\d+\.\d*)([-+]\d+)$").unwrap();
    static ref FORTRAN_FLOAT: Regex = Regex::new(r"^([-+]?\d*\.?\d*)[dD]([-+]?\d+)$").unwrap();
}

///
/// Reads an integer from string
///
/// ```
/// use nucdata::conversions::to_i32;
///
/// assert_eq!(922350, to_i32(" 922350 ").unwrap());
/// assert_eq!(-2, to_i32("-2").unwrap());
/// ```
/// Returns ParseIntError for invalid string. That is an empty string,
/// a string which contains multiple numbers, a float or not a number.
/// ```
/// use nucdata::conversions::to_i32;
///
/// assert!(to_i32("  ").is_err());
/// assert!(to_i32("  1  2 ").is_err());
/// assert!(to_i32("  1.2 ").is_err());
/// ```
///
pub fn to_i32(string: &str) -> Result<i32, ParseError> {
    string.trim().parse::<i32>().map_err(|e| ParseError::Int {
        kind: e,
        context: string.to_string(),
    })
}

///
/// Reads a float from string
///
/// Reads any standard float format, the Fortran `D` exponent and the ENDF
/// format where 'E' is omitted e.g. '1.2+2' as '120.0'.
///
/// # Example
/// ```
/// use nucdata::conversions::to_f64;
///
/// assert_eq!(1.2e-12, to_f64("  1.2E-12 ").unwrap());
/// assert_eq!(1.2e-12, to_f64("1.2D-12").unwrap());
/// assert_eq!(1e20, to_f64("  1.+20 ").unwrap());
/// ```
///
pub fn to_f64(string: &str) -> Result<f64, ParseError> {
    let trimmed = string.trim();
    let rewritten = if let Some(c) = ELESS_FLOAT.captures(trimmed) {
        Some(format!("{}E{}", &c[1], &c[2]))
    } else {
        FORTRAN_FLOAT
            .captures(trimmed)
            .map(|c| format!("{}E{}", &c[1], &c[2]))
    };
    let num = match rewritten {
        Some(s) => s.parse::<f64>(),
        None => trimmed.parse::<f64>(),
    };
    num.map_err(|e| ParseError::Float {
        kind: e,
        context: string.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_conversion() {
        // Success
        assert_eq!(4, to_i32("   4").unwrap());
        assert_eq!(0, to_i32("   0").unwrap());
        assert_eq!(3, to_i32("  3  ").unwrap());
        assert_eq!(952421, to_i32("952421").unwrap());

        // Failure
        assert!(to_i32("    ").is_err());
        assert!(to_i32("  1.2 ").is_err());
        assert!(to_i32("  1.E-8 ").is_err());
        assert!(to_i32(" a word ").is_err());
    }

    #[test]
    fn test_f64_conversion() {
        // Success
        assert_eq!(1.2, to_f64("    1.2 ").unwrap());
        assert_eq!(0.5, to_f64(".5").unwrap());
        assert_eq!(1.2e20, to_f64("  1.200E+20 ").unwrap());
        assert_eq!(1.2e20, to_f64("  1.200+20 ").unwrap());
        assert_eq!(1.2e20, to_f64("  1.200d20 ").unwrap());
        assert_eq!(-3.0e-3, to_f64("-3.0D-3").unwrap());

        // Failure
        assert!(to_f64("").is_err());
        assert!(to_f64("1.2.3").is_err());
        assert!(to_f64("D5").is_err());
        assert!(to_f64("U235").is_err());
    }
}
