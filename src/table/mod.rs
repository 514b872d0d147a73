//! Tabulate P(a, z) over a rectangular grid and print it as text.
//!
//! Nothing here has a default: grid bounds, steps, column widths and
//! precisions all come from the caller.
//!
//! # Example
//!
//! ```
//! use incgamma::IncGamma;
//! use incgamma::table::{tabulate, render_table, Column, Sweep, TableFormat};
//!
//! let shapes = Sweep::new(1.0_f64, 2.0, 1.0).unwrap();
//! let args = Sweep::new(0.5_f64, 1.0, 0.5).unwrap();
//! let rows = tabulate(&IncGamma::new(), &shapes, &args).unwrap();
//! assert_eq!(rows.len(), 4);
//!
//! let format = TableFormat {
//!     shape: Column { width: 4, precision: 1 },
//!     argument: Column { width: 8, precision: 6 },
//!     value_digits: 6,
//! };
//! let text = render_table(&rows, &format);
//! assert_eq!(text.lines().next(), Some("{ 1.0, 0.500000, 3.934693e-01},"));
//! ```

use alloc::vec::Vec;

use crate::FloatScalar;
use crate::special::{IncGamma, SpecialError};

mod format;


pub use format::{render_table, write_table, Column, Scientific, TableFormat};

/// Inclusive arithmetic grid `start, start + step, …` up to `stop`.
///
/// Points are computed as `start + i·step`, so long sweeps do not drift.
/// `stop` is included when it lies within √ε (relative) of a grid point.
///
/// # Example
///
/// ```
/// use incgamma::table::Sweep;
///
/// let s = Sweep::new(1.0_f64, 4.0, 0.4).unwrap();
/// assert_eq!(s.len(), 8); // 1.0, 1.4, …, 3.8
/// let last = s.iter().last().unwrap();
/// assert!((last - 3.8).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep<T> {
    start: T,
    step: T,
    len: usize,
}

impl<T: FloatScalar> Sweep<T> {
    /// Build a sweep from `start` to `stop` (inclusive) in increments of `step`.
    ///
    /// Returns `SpecialError::DomainError` if any bound is not finite, if
    /// `step ≤ 0`, or if the grid has more points than fit in `usize`.
    /// `stop < start` gives an empty sweep.
    pub fn new(start: T, stop: T, step: T) -> Result<Self, SpecialError> {
        let zero = T::zero();
        if !start.is_finite() || !stop.is_finite() || !step.is_finite() || !(step > zero) {
            return Err(SpecialError::DomainError);
        }

        let span = (stop - start) / step;
        if span < zero {
            return Ok(Self { start, step, len: 0 });
        }

        let slack = span.max(T::one()) * T::epsilon().sqrt();
        let last = (span + slack).floor();
        let len = num_traits::cast::<T, usize>(last)
            .and_then(|n| n.checked_add(1))
            .ok_or(SpecialError::DomainError)?;
        Ok(Self { start, step, len })
    }

    /// A single-point sweep.
    pub fn single(value: T) -> Result<Self, SpecialError> {
        Self::new(value, value, T::one())
    }

    /// First grid point.
    pub fn start(&self) -> T {
        self.start
    }

    /// Spacing between grid points.
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grid points in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |i| self.start + self.step * T::from(i).unwrap())
    }
}

/// One evaluated grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<T> {
    /// Shape parameter.
    pub a: T,
    /// Argument.
    pub z: T,
    /// P(a, z).
    pub p: T,
}

/// Evaluate P(a, z) for every `a` in `shapes` (outer) and `z` in `args`
/// (inner).
///
/// Stops at the first point that fails and returns its error; no partial
/// table is returned. A grid too large to hold in memory is a
/// `SpecialError::DomainError`.
pub fn tabulate<T: FloatScalar>(
    eval: &IncGamma<T>,
    shapes: &Sweep<T>,
    args: &Sweep<T>,
) -> Result<Vec<Row<T>>, SpecialError> {
    let points = shapes
        .len()
        .checked_mul(args.len())
        .ok_or(SpecialError::DomainError)?;
    let mut rows = Vec::new();
    rows.try_reserve_exact(points)
        .map_err(|_| SpecialError::DomainError)?;
    for a in shapes.iter() {
        for z in args.iter() {
            let p = eval.evaluate(a, z)?;
            rows.push(Row { a, z, p });
        }
    }
    Ok(rows)
}
