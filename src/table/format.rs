//! Text layout for tabulated rows.

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Display, LowerExp, Write};

use crate::FloatScalar;
use super::Row;

/// Width and fixed-point precision of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Minimum field width; values are right-aligned.
    pub width: usize,
    /// Digits after the decimal point.
    pub precision: usize,
}

/// Layout of a rendered table: one `{a, z, P},` line per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    /// Shape parameter column, fixed-point.
    pub shape: Column,
    /// Argument column, fixed-point.
    pub argument: Column,
    /// Mantissa digits after the decimal point for P, scientific notation.
    pub value_digits: usize,
}

/// Scientific notation with a signed, at-least-two-digit exponent
/// (`1.50e-03`, `2.00e+00`), as printed by C's `%e`.
///
/// Rust's `{:e}` writes `1.5e-3`; this keeps tables comparable with output
/// from other numerics tools.
///
/// # Example
///
/// ```
/// use incgamma::table::Scientific;
///
/// assert_eq!(Scientific::new(0.0015_f64, 2).to_string(), "1.50e-03");
/// assert_eq!(Scientific::new(2.0_f64, 2).to_string(), "2.00e+00");
/// assert_eq!(Scientific::new(6.0e-207_f64, 1).to_string(), "6.0e-207");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scientific<T> {
    value: T,
    digits: usize,
}

impl<T> Scientific<T> {
    pub fn new(value: T, digits: usize) -> Self {
        Self { value, digits }
    }
}

impl<T: LowerExp> Display for Scientific<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rust = format!("{:.*e}", self.digits, self.value);
        // NaN and infinities carry no exponent
        let Some((mantissa, exp)) = rust.split_once('e') else {
            return f.write_str(&rust);
        };
        let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exp.unsigned_abs())
    }
}

/// Write `rows` to `out`, one line each.
pub fn write_table<W, T>(out: &mut W, rows: &[Row<T>], format: &TableFormat) -> fmt::Result
where
    W: Write,
    T: FloatScalar + Display + LowerExp,
{
    let TableFormat { shape, argument, value_digits } = *format;
    for row in rows {
        writeln!(
            out,
            "{{{:>sw$.sp$}, {:>aw$.ap$}, {}}},",
            row.a,
            row.z,
            Scientific::new(row.p, value_digits),
            sw = shape.width,
            sp = shape.precision,
            aw = argument.width,
            ap = argument.precision,
        )?;
    }
    Ok(())
}

/// Render `rows` into a new `String`.
pub fn render_table<T>(rows: &[Row<T>], format: &TableFormat) -> String
where
    T: FloatScalar + Display + LowerExp,
{
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_table(&mut out, rows, format);
    out
}
