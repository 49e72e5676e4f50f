//! Parsing of user-typed numbers
//!
//! Entries arrive either as real/imaginary pairs or as text in the usual
//! engineering notation (`0.5`, `1j`, `0.5-0.5j`, `(1+2j)`). Everything is
//! checked here so that no malformed or non-finite value reaches the math.

use crate::error::QubitError;
use crate::matrix::Matrix2;
use crate::Result;
use num_complex::Complex64;

/// Build a complex number from a real/imaginary pair, rejecting NaN and ∞
pub fn complex_from_parts(field: &str, re: f64, im: f64) -> Result<Complex64> {
    if !re.is_finite() || !im.is_finite() {
        return Err(QubitError::malformed(field, "value must be finite"));
    }
    Ok(Complex64::new(re, im))
}

/// Parse a complex number written as text
///
/// Accepts a real part, an imaginary part suffixed with `j`/`J`/`i`/`I`, or
/// both, optionally wrapped in parentheses.
///
/// # Example
/// ```
/// use qubloch_core::parse::parse_complex;
///
/// let z = parse_complex("U01", "0.5-0.5j").unwrap();
/// assert_eq!(z.re, 0.5);
/// assert_eq!(z.im, -0.5);
/// ```
pub fn parse_complex(field: &str, text: &str) -> Result<Complex64> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed)
        .trim();

    if body.is_empty() {
        return Err(QubitError::malformed(field, "entry is empty"));
    }
    if !body.is_ascii() || body.contains(char::is_whitespace) {
        return Err(QubitError::malformed(field, format!("'{}' is not a complex number", text)));
    }

    let value = match body.as_bytes()[body.len() - 1] {
        b'j' | b'J' | b'i' | b'I' => {
            let head = &body[..body.len() - 1];
            match split_point(head) {
                Some(idx) => Complex64::new(
                    parse_real(field, text, &head[..idx])?,
                    parse_imaginary(field, text, &head[idx..])?,
                ),
                None => Complex64::new(0.0, parse_imaginary(field, text, head)?),
            }
        },
        _ => Complex64::new(parse_real(field, text, body)?, 0.0),
    };

    complex_from_parts(field, value.re, value.im)
}

/// Parse the four entries of a 2×2 matrix, row-major
///
/// Field names are built as `{prefix}{row}{col}`, e.g. `ρ01`.
pub fn parse_matrix(prefix: &str, entries: [&str; 4]) -> Result<Matrix2> {
    let mut matrix = [[Complex64::new(0.0, 0.0); 2]; 2];
    for (idx, text) in entries.iter().enumerate() {
        let (row, col) = (idx / 2, idx % 2);
        let field = format!("{}{}{}", prefix, row, col);
        matrix[row][col] = parse_complex(&field, text)?;
    }
    Ok(matrix)
}

/// Index of the sign separating real and imaginary parts, skipping exponent signs
fn split_point(head: &str) -> Option<usize> {
    let bytes = head.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_real(field: &str, text: &str, part: &str) -> Result<f64> {
    part.parse::<f64>()
        .map_err(|_| QubitError::malformed(field, format!("'{}' is not a complex number", text)))
}

fn parse_imaginary(field: &str, text: &str, part: &str) -> Result<f64> {
    match part {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_real(field, text, part),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Complex64 {
        parse_complex("z", text).unwrap()
    }

    #[test]
    fn test_real_only() {
        assert_eq!(parse("0.5"), Complex64::new(0.5, 0.0));
        assert_eq!(parse("-1"), Complex64::new(-1.0, 0.0));
        assert_eq!(parse("  2.5e-1 "), Complex64::new(0.25, 0.0));
    }

    #[test]
    fn test_imaginary_only() {
        assert_eq!(parse("1j"), Complex64::new(0.0, 1.0));
        assert_eq!(parse("j"), Complex64::new(0.0, 1.0));
        assert_eq!(parse("-j"), Complex64::new(0.0, -1.0));
        assert_eq!(parse("-0.5J"), Complex64::new(0.0, -0.5));
        assert_eq!(parse("2i"), Complex64::new(0.0, 2.0));
    }

    #[test]
    fn test_full_complex() {
        assert_eq!(parse("0.5+0.5j"), Complex64::new(0.5, 0.5));
        assert_eq!(parse("(1-2j)"), Complex64::new(1.0, -2.0));
        assert_eq!(parse("1e-3+2J"), Complex64::new(1e-3, 2.0));
        assert_eq!(parse("1-j"), Complex64::new(1.0, -1.0));
        assert_eq!(parse("-1e+2-1e-2j"), Complex64::new(-100.0, -0.01));
    }

    #[test]
    fn test_rejects_garbage() {
        for text in ["", "   ", "abc", "1+", "1 + 2j", "++1j", "1jj", "½"] {
            let err = parse_complex("ρ00", text).unwrap_err();
            assert!(
                matches!(err, QubitError::MalformedInput { ref field, .. } if field == "ρ00"),
                "expected malformed input for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(parse_complex("z", "inf").is_err());
        assert!(parse_complex("z", "nan").is_err());
        assert!(complex_from_parts("z", f64::NAN, 0.0).is_err());
        assert!(complex_from_parts("z", 1.0, 2.0).is_ok());
    }

    #[test]
    fn test_parse_matrix_names_failing_entry() {
        let m = parse_matrix("U", ["1", "0", "0", "1"]).unwrap();
        assert_eq!(m[1][1], Complex64::new(1.0, 0.0));

        let err = parse_matrix("U", ["1", "0", "x", "1"]).unwrap_err();
        assert!(err.to_string().contains("U10"));
    }
}
