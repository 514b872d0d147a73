use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for numeric element types.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for the real floating-point types the special functions run on.
///
/// Covers `f32` and `f64`. Everything in [`special`](crate::special) is
/// generic over it; accuracy figures in the docs refer to `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
