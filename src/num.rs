//! Numbers and numerics.

use num_traits as nt;
use std::{fmt, ops::Neg, str::FromStr};

mod sealed {
    pub trait Sealed {}
}

/// The scalar types that tuples and matrices can be built from.
///
/// Implemented for the primitive integer and floating point types only. There
/// is no implementation for `bool` or `char`, so types like `Vec3<char>` are
/// rejected at compile time. Every scalar is [`Pod`](bytemuck::Pod), which lets
/// the nominal tuple types be reinterpreted as one another.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr
    + nt::Num
    + nt::NumAssign
    + Send
    + Sync
    + bytemuck::Pod
    + sealed::Sealed
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Takes the square root and casts the result back to `Self`. For integer
    /// types the root is computed in `f64` and truncated.
    fn sqrt_in_kind(self) -> Self;

    /// Divides `self` by `rhs`, returning `None` where the division is not
    /// defined for the type. Floating point division is always defined.
    fn checked_quotient(self, rhs: Self) -> Option<Self>;

    /// Lossy `as` cast to `f64`.
    fn as_f64(self) -> f64;

    /// Lossy `as` cast from `f64`.
    fn from_f64_as(value: f64) -> Self;
}

/// Scalars that support negation.
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

impl<T: Scalar + Neg<Output = T>> SignedScalar for T {}

/// Floating point scalars.
pub trait FloatScalar: SignedScalar + nt::Float {}

impl<T: SignedScalar + nt::Float> FloatScalar for T {}

macro_rules! impl_integer_scalar {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;

                #[inline]
                fn sqrt_in_kind(self) -> Self {
                    (self as f64).sqrt() as Self
                }

                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64_as(value: f64) -> Self {
                    value as Self
                }
            }
        )*
    };
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const TWO: Self = 2.0;

                #[inline]
                fn sqrt_in_kind(self) -> Self {
                    self.sqrt()
                }

                #[inline]
                fn checked_quotient(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64_as(value: f64) -> Self {
                    value as Self
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn requires_scalar<T: Scalar>() {}

    #[test]
    fn all_primitive_numbers_are_scalars() {
        requires_scalar::<i8>();
        requires_scalar::<i32>();
        requires_scalar::<u64>();
        requires_scalar::<usize>();
        requires_scalar::<f32>();
        requires_scalar::<f64>();
    }

    #[test]
    fn integer_square_root_truncates() {
        assert_eq!(5_i32.sqrt_in_kind(), 2);
        assert_eq!(16_u8.sqrt_in_kind(), 4);
        assert_eq!(18_i64.sqrt_in_kind(), 4);
    }

    #[test]
    fn float_square_root_stays_in_kind() {
        assert_eq!(2.0_f32.sqrt_in_kind(), std::f32::consts::SQRT_2);
        assert_eq!(2.0_f64.sqrt_in_kind(), std::f64::consts::SQRT_2);
    }

    #[test]
    fn integer_quotient_by_zero_is_undefined() {
        assert_eq!(7_i32.checked_quotient(0), None);
        assert_eq!(7_i32.checked_quotient(2), Some(3));
        assert_eq!(i32::MIN.checked_quotient(-1), None);
    }

    #[test]
    fn float_quotient_by_zero_is_infinite() {
        assert_eq!(1.0_f64.checked_quotient(0.0), Some(f64::INFINITY));
    }
}
