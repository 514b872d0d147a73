//! # incgamma
//!
//! Pure-Rust regularized incomplete gamma functions, no-std compatible.
//! No FFI, no heap allocation on the evaluation path, generic over `f32`/`f64`.
//!
//! ## Quick start
//!
//! ```
//! use incgamma::{gamma_inc, gamma_inc_upper, SpecialError};
//!
//! // P(2, 2) = 1 − 3e^{−2}
//! let p = gamma_inc(2.0_f64, 2.0).unwrap();
//! assert!((p - 0.5939941502901619).abs() < 1e-14);
//!
//! // P + Q = 1
//! let q = gamma_inc_upper(2.0_f64, 2.0).unwrap();
//! assert!((p + q - 1.0).abs() < 1e-15);
//!
//! // a must be positive
//! assert_eq!(gamma_inc(0.0_f64, 1.0), Err(SpecialError::DomainError));
//! ```
//!
//! ## Modules
//!
//! - [`special`] — Incomplete gamma P(a,z), Q(a,z) and their unregularized
//!   forms, plus the supporting Γ(x) and ln Γ(x). [`IncGamma`] carries the
//!   convergence tolerance and iteration cap; the free functions use the
//!   defaults.
//!
//! - [`table`] — Sweep a rectangular (a, z) grid and print it as a text
//!   table. Ranges, column widths and precisions are all supplied by the
//!   caller. Requires `alloc`.
//!
//! - [`traits`] — [`FloatScalar`], the element bound for every routine.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impl |
//! | `alloc` | via std  | [`table`] module (`Vec` rows, `String` rendering) |
//!
//! Without `std`, float math falls back to the pure-Rust `libm` backend of
//! `num-traits`, which is always enabled.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod special;
#[cfg(feature = "alloc")]
pub mod table;
pub mod traits;

pub use special::{
    gamma_inc, gamma_inc_upper, gamma_lower, gamma_upper, IncGamma, SpecialError,
};
pub use traits::{FloatScalar, Scalar};
