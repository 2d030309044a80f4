//! Vectors.

use crate::{
    error::{LinalgError, Result},
    num::Scalar,
    tuple::Tuple,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[T; 2]",
        from = "[T; 2]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Vec2<T> {
    inner: Tuple<T, 2>,
}

/// A 3-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[T; 3]",
        from = "[T; 3]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Vec3<T> {
    inner: Tuple<T, 3>,
}

/// A 4-dimensional vector.
///
/// Used as the homogeneous representation of points (`w = 1`) and directions
/// (`w = 0`), see the `From` conversions in this crate.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[T; 4]",
        from = "[T; 4]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Vec4<T> {
    inner: Tuple<T, 4>,
}

/// Added to the length in [`Vec4::normalized`] so that the zero vector
/// normalizes to itself.
const VEC4_NORMALIZATION_EPSILON: f64 = 1e-30;

impl<T: Scalar> Vec2<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self::wrap(Tuple::new([x, y]))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(Tuple::zeros())
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.as_array()[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.as_array()[1]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[1]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        *self.x_mut() = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        *self.y_mut() = y;
    }

    /// Sets both components.
    #[inline]
    pub fn set_components(&mut self, x: T, y: T) {
        *self = Self::new(x, y);
    }

    /// Resets all components to zero.
    #[inline]
    pub fn zero(&mut self) {
        *self = Self::zeros();
    }

    /// Returns a copy of this vector scaled to unit length.
    ///
    /// # Errors
    /// Returns [`LinalgError::DegenerateNormalization`] if the length is
    /// below `f64::EPSILON`.
    pub fn normalized(&self) -> Result<Self> {
        let mut normalized = *self;
        normalized.normalize()?;
        Ok(normalized)
    }

    /// Appends a z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), z)
    }
}

impl<T: Scalar> Vec3<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::wrap(Tuple::new([x, y, z]))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(Tuple::zeros())
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.as_array()[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.as_array()[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.as_array()[2]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[2]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        *self.x_mut() = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        *self.y_mut() = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        *self.z_mut() = z;
    }

    /// Sets all three components.
    #[inline]
    pub fn set_components(&mut self, x: T, y: T, z: T) {
        *self = Self::new(x, y, z);
    }

    /// Resets all components to zero.
    #[inline]
    pub fn zero(&mut self) {
        *self = Self::zeros();
    }

    /// Returns a copy of this vector scaled to unit length.
    ///
    /// # Errors
    /// Returns [`LinalgError::DegenerateNormalization`] if the length is
    /// below `f64::EPSILON`.
    pub fn normalized(&self) -> Result<Self> {
        let mut normalized = *self;
        normalized.normalize()?;
        Ok(normalized)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    /// Reflects this vector about the plane with the given normal. The
    /// normal is expected to have unit length.
    #[inline]
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (T::TWO * self.dot(normal))
    }

    /// Appends a w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vec4<T> {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }
}

impl<T: Scalar> Vec4<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::wrap(Tuple::new([x, y, z, w]))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(Tuple::zeros())
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.as_array()[0]
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.as_array()[1]
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.as_array()[2]
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> T {
        self.as_array()[3]
    }

    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[0]
    }

    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[1]
    }

    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[2]
    }

    #[inline]
    pub fn w_mut(&mut self) -> &mut T {
        &mut self.inner.as_mut_array()[3]
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        *self.x_mut() = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        *self.y_mut() = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        *self.z_mut() = z;
    }

    #[inline]
    pub fn set_w(&mut self, w: T) {
        *self.w_mut() = w;
    }

    /// Sets all four components.
    #[inline]
    pub fn set_components(&mut self, x: T, y: T, z: T, w: T) {
        *self = Self::new(x, y, z, w);
    }

    /// Resets all components to zero.
    #[inline]
    pub fn zero(&mut self) {
        *self = Self::zeros();
    }

    /// Returns a copy of this vector divided by its length plus a tiny
    /// epsilon. Unlike [`Self::normalize`], a zero vector does not fail for
    /// floating point scalars but comes back as the zero vector.
    ///
    /// # Errors
    /// Returns [`LinalgError::DivisionByZero`] for an integer zero vector,
    /// where the epsilon truncates to zero.
    pub fn normalized(&self) -> Result<Self> {
        let rescaled = Self::wrap(self.inner.rescaled_for_length());
        let padded_length = rescaled.length() + T::from_f64_as(VEC4_NORMALIZATION_EPSILON);
        rescaled.checked_div_scalar(padded_length)
    }

    /// Drops the w-component.
    #[inline]
    pub const fn truncated(&self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Interprets this vector as homogeneous coordinates and divides the
    /// spatial components by w.
    ///
    /// # Errors
    /// Returns [`LinalgError::DivisionByZero`] if w is zero, or if the
    /// division overflows for an integer scalar.
    pub fn project_to_point(&self) -> Result<crate::Point3<T>> {
        let w = self.w();
        if w == T::ZERO {
            return Err(LinalgError::division_by_zero(Self::KIND));
        }
        let divide = |component: T| {
            component
                .checked_quotient(w)
                .ok_or_else(|| LinalgError::division_by_zero(Self::KIND))
        };
        Ok(crate::Point3::new(
            divide(self.x())?,
            divide(self.y())?,
            divide(self.z())?,
        ))
    }
}

impl_tuple_wrapper!(Vec2, 2, "2D vector");
impl_tuple_wrapper!(Vec3, 3, "3D vector");
impl_tuple_wrapper!(Vec4, 4, "4D vector");

impl_componentwise_ops!(Vec2);
impl_componentwise_ops!(Vec3);
impl_componentwise_ops!(Vec4);

impl_checked_division!(Vec2);
impl_checked_division!(Vec3);
impl_checked_division!(Vec4);

impl_metric!(Vec2);
impl_metric!(Vec3);
impl_metric!(Vec4);

macro_rules! impl_vector_index_and_debug {
    ($t:ident, $name:literal, [$($field:literal),+]) => {
        impl<T: Scalar> Default for $t<T> {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<T: Scalar> Index<usize> for $t<T> {
            type Output = T;

            #[inline]
            #[track_caller]
            fn index(&self, index: usize) -> &Self::Output {
                self.inner.component(index, Self::KIND)
            }
        }

        impl<T: Scalar> IndexMut<usize> for $t<T> {
            #[inline]
            #[track_caller]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                self.inner.component_mut(index, Self::KIND)
            }
        }

        impl<T: Scalar> fmt::Debug for $t<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut s = f.debug_struct($name);
                for (field, component) in [$($field),+].iter().zip(self.as_array()) {
                    s.field(field, component);
                }
                s.finish()
            }
        }
    };
}

impl_vector_index_and_debug!(Vec2, "Vec2", ["x", "y"]);
impl_vector_index_and_debug!(Vec3, "Vec3", ["x", "y", "z"]);
impl_vector_index_and_debug!(Vec4, "Vec4", ["x", "y", "z", "w"]);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq};
    use proptest::prelude::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn vec2_new_and_accessors_work() {
        let mut v = Vec2::new(1.5, -2.0);
        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -2.0);
        v.set_x(4.0);
        *v.y_mut() = 5.0;
        assert_eq!(v, Vec2::new(4.0, 5.0));
        v.set_components(0.0, 1.0);
        assert_eq!(v.as_array(), &[0.0, 1.0]);
    }

    #[test]
    fn default_vectors_are_zero() {
        assert_eq!(Vec2::<i32>::default(), Vec2::zeros());
        assert_eq!(Vec3::<f64>::default(), Vec3::new(0.0, 0.0, 0.0));
        assert!(Vec4::<f32>::default().is_zero());
    }

    #[test]
    fn ones_and_same_broadcast() {
        assert_eq!(Vec3::<u8>::ones(), Vec3::new(1, 1, 1));
        assert_eq!(Vec4::same(2.5), Vec4::new(2.5, 2.5, 2.5, 2.5));
        let mut v = Vec2::new(1, 2);
        v.set(9);
        assert_eq!(v, Vec2::new(9, 9));
        v.zero();
        assert!(v.is_zero());
    }

    #[test]
    fn vec3_indexing_works() {
        let mut v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[2], 2.0);
        v[1] = -1.0;
        assert_eq!(v.y(), -1.0);
    }

    #[test]
    #[should_panic(expected = "Index 3 out of range for 3D vector")]
    fn vec3_index_past_end_panics() {
        let v = Vec3::new(0.0, 1.0, 2.0);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "Index 2 out of range for 2D vector")]
    fn vec2_mutable_index_past_end_panics() {
        let mut v = Vec2::new(0, 1);
        v[2] = 5;
    }

    #[test]
    fn checked_indexing_reports_out_of_range() {
        let mut v = Vec4::new(1, 2, 3, 4);
        assert_eq!(v.get(3), Ok(4));
        assert_eq!(
            v.get(4),
            Err(LinalgError::IndexOutOfRange {
                kind: "4D vector",
                index: 4,
                len: 4
            })
        );
        assert!(v.set_component(4, 0).is_err());
        v.set_component(0, 10).unwrap();
        *v.get_mut(1).unwrap() = 20;
        assert_eq!(v, Vec4::new(10, 20, 3, 4));
    }

    #[test]
    fn vec2_negation_and_unary_plus_work() {
        let v = Vec2::new(1.5, -2.0);
        assert_eq!(-v, Vec2::new(-1.5, 2.0));
        assert_eq!(v.pos(), v);
    }

    #[test]
    fn adding_and_subtracting_scalar_works() {
        let v = Vec2::new(0.0, 5.0) + 4.46;
        assert_abs_diff_eq!(v, Vec2::new(4.46, 9.46), epsilon = 1e-12);
        let v = Vec2::new(4.46, 9.46) - 4.46;
        assert_abs_diff_eq!(v, Vec2::new(0.0, 5.0), epsilon = 1e-12);

        let v = Vec4::new(0.0, 0.0, 5.0, 3.5) + 4.46;
        assert_abs_diff_eq!(v, Vec4::new(4.46, 4.46, 9.46, 7.96), epsilon = 1e-12);
        let v = v + Vec4::new(4.0, 6.0, 0.0, 45.0);
        assert_abs_diff_eq!(v, Vec4::new(8.46, 10.46, 9.46, 52.96), epsilon = 1e-12);
    }

    #[test]
    fn scalar_on_the_left_works() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(2.0 * v, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(1.0 + v, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(10_i32 - Vec2::new(1, 4), Vec2::new(9, 6));
        assert_eq!(3_u8 * &Vec4::new(1, 2, 3, 4), Vec4::new(3, 6, 9, 12));
    }

    #[test]
    fn scalar_minus_vector_subtracts_each_component_from_scalar() {
        assert_eq!(5.0 - Vec3::new(1.0, 2.0, 8.0), Vec3::new(4.0, 3.0, -3.0));
        assert_eq!(5.0 - Vec3::new(1.0, 2.0, 8.0), -(Vec3::new(1.0, 2.0, 8.0) - 5.0));
        assert_eq!(1_i64 - &Vec4::new(1, 2, 3, 4), Vec4::new(0, -1, -2, -3));
    }

    #[test]
    fn vector_addition_and_subtraction_work() {
        let v = Vec2::new(4.532, 45.67) + Vec2::new(0.3456, 124.67);
        assert_ulps_eq!(v, Vec2::new(4.8776, 170.34));
        let v = Vec2::new(40.54, 2.4) - Vec2::new(4.20, -1.7);
        assert_ulps_eq!(v, Vec2::new(36.34, 4.1));

        let v = Vec4::new(4.532, 45.67, 0.83, -44.6) + Vec4::new(0.3456, 124.67, 1.0, 9.0);
        assert_ulps_eq!(v, Vec4::new(4.8776, 170.34, 1.83, -35.6));
        let v = Vec4::new(40.54, 2.4, 0.62, 0.0) - Vec4::new(4.20, -1.7, -1.0, -99.99999);
        assert_ulps_eq!(v, Vec4::new(36.34, 4.1, 1.62, 99.99999));
    }

    #[test]
    fn assigning_operators_work() {
        let mut v = Vec3::new(1, 2, 3);
        v += Vec3::new(1, 1, 1);
        v -= 1;
        v *= 3;
        assert_eq!(v, Vec3::new(3, 6, 9));
        v *= &Vec3::new(2, 0, 1);
        assert_eq!(v, Vec3::new(6, 0, 9));
    }

    #[test]
    fn vec4_multiplication_by_number_works() {
        let v = Vec4::new(1.0, 0.0, 5.0, -9.0) * 5.0;
        assert_eq!(v, Vec4::new(5.0, 0.0, 25.0, -45.0));
    }

    #[test]
    fn dividing_by_number_works() {
        let v = Vec4::new(36.6, -30.6, 120.2586, -0.5555555) / 3.0;
        assert_relative_eq!(
            v,
            Vec4::new(36.6 / 3.0, -30.6 / 3.0, 120.2586 / 3.0, -0.5555555 / 3.0)
        );
        assert_eq!(Vec2::new(7, 9) / 2, Vec2::new(3, 4));
    }

    #[test]
    fn dividing_by_vector_works() {
        let v = Vec4::new(434.5, 93.5, 3858.53, -0.99999999)
            / Vec4::new(32.5, -16.2, 0.567, -999.99999999);
        assert_relative_eq!(
            v,
            Vec4::new(
                434.5 / 32.5,
                -93.5 / 16.2,
                3858.53 / 0.567,
                -0.99999999 / -999.99999999
            )
        );
    }

    #[test]
    fn checked_division_by_zero_fails() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(
            v.checked_div_scalar(0.0),
            Err(LinalgError::DivisionByZero { kind: "3D vector" })
        );
        assert_eq!(
            v.checked_div(&Vec3::zeros()),
            Err(LinalgError::DivisionByZero { kind: "3D vector" })
        );
    }

    #[test]
    fn float_division_by_partially_zero_vector_is_infinite() {
        let v = Vec3::new(1.0, 1.0, 1.0)
            .checked_div(&Vec3::new(1.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(v.y(), f64::INFINITY);
    }

    #[test]
    fn integer_division_by_partially_zero_vector_fails() {
        assert!(Vec3::new(4, 4, 4).checked_div(&Vec3::new(2, 0, 1)).is_err());
    }

    #[test]
    #[should_panic(expected = "Cannot divide 2D vector by zero")]
    fn division_operator_by_zero_panics() {
        let _ = Vec2::new(1.0, 2.0) / 0.0;
    }

    #[test]
    fn lengths_work() {
        assert_eq!(Vec2::new(0.0, 0.0).length(), 0.0);
        assert_eq!(Vec2::new(1.0, 1.0).length(), 2.0_f64.sqrt());
        assert_eq!(Vec2::new(3.0, 3.0).length(), 18.0_f64.sqrt());
        assert_eq!(Vec2::new(-5.0, 5.0).length(), 50.0_f64.sqrt());

        assert_eq!(Vec3::new(1.0, 1.0, 1.0).length(), 3.0_f64.sqrt());
        assert_eq!(Vec3::new(3.0, 3.0, 3.0).length(), 27.0_f64.sqrt());
        assert_eq!(Vec3::new(-5.0, -5.0, 5.0).length(), 75.0_f64.sqrt());

        assert_eq!(Vec4::new(3.0, 3.0, 3.0, 3.0).length(), 6.0);
        assert_eq!(Vec4::new(-5.0, -5.0, 5.0, 5.0).length(), 10.0);
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).length_squared(), 9.0);
    }

    #[test]
    fn integer_length_is_truncated() {
        assert_eq!(Vec2::new(1, 1).length(), 1);
        assert_eq!(Vec3::new(2, 3, 6).length(), 7);
    }

    #[test]
    fn normalizing_gives_unit_length() {
        let mut v = Vec2::new(4.53, 93.5);
        v.normalize().unwrap();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);

        let v = Vec3::new(4.36, 7.62, 0.466).normalized().unwrap();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);

        let mut v = Vec4::new(4.53, 93.5, -56.3, -100.00001);
        v.normalize().unwrap();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalizing_zero_vector_fails() {
        let mut v = Vec3::<f64>::zeros();
        assert_eq!(
            v.normalize(),
            Err(LinalgError::DegenerateNormalization { kind: "3D vector" })
        );
        assert!(Vec2::<f32>::zeros().normalized().is_err());
        assert!(Vec4::<f64>::zeros().normalize().is_err());
    }

    #[test]
    fn normalizing_vector_with_overflowing_length_works() {
        let v = Vec3::new(1e200, 0.0, 0.0).normalized().unwrap();
        assert_eq!(v, Vec3::new(1.0, 0.0, 0.0));

        let mut v = Vec2::new(f64::MAX, f64::MAX);
        v.normalize().unwrap();
        assert_abs_diff_eq!(v, Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2), epsilon = 1e-12);

        let v = Vec4::new(0.0, -3e200, 0.0, 4e200).normalized().unwrap();
        assert_abs_diff_eq!(v, Vec4::new(0.0, -0.6, 0.0, 0.8), epsilon = 1e-12);
    }

    #[test]
    fn normalizing_vector_with_infinite_component_fails() {
        assert_eq!(
            Vec3::new(f64::INFINITY, 1.0, 0.0).normalized(),
            Err(LinalgError::DegenerateNormalization { kind: "3D vector" })
        );
        assert!(Vec2::new(f64::NAN, 1.0).normalized().is_err());
    }

    #[test]
    fn vec4_normalized_pads_length_with_epsilon() {
        let v = Vec4::new(4.36, 7.62, 0.466, -30485.55555555).normalized().unwrap();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_eq!(Vec4::<f64>::zeros().normalized(), Ok(Vec4::zeros()));
        assert!(Vec4::<i32>::zeros().normalized().is_err());
    }

    #[test]
    fn dot_products_work() {
        assert_eq!(Vec2::new(3.0, 3.0).dot(&Vec2::new(3.0, 3.0)), 18.0);
        assert_eq!(Vec2::new(-1.0, 5.0).dot(&Vec2::new(-3.0, 3.0)), 18.0);
        assert_eq!(Vec3::new(3.0, 3.0, 4.0).dot(&Vec3::new(3.0, 3.0, 9.0)), 54.0);
        assert_eq!(Vec3::new(-1.0, 5.0, 9.0).dot(&Vec3::new(-3.0, 3.0, 6.0)), 72.0);
        assert_eq!(
            Vec4::new(3.0, 3.0, 4.0, 1.0).dot(&Vec4::new(3.0, 3.0, 9.0, -10.0)),
            44.0
        );
    }

    #[test]
    fn cross_product_of_axes_gives_third_axis() {
        let x = Vec3::new(1, 0, 0);
        let y = Vec3::new(0, 1, 0);
        assert_eq!(x.cross(&y), Vec3::new(0, 0, 1));
        assert_eq!(y.cross(&x), Vec3::new(0, 0, -1));
    }

    #[test]
    fn reflection_about_normal_works() {
        let v = Vec3::new(1.0, -1.0, 0.0).reflect(&Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(v, Vec3::new(1.0, 1.0, 0.0));

        let n = Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0);
        let v = Vec3::new(0.0, -1.0, 0.0).reflect(&n);
        assert_abs_diff_eq!(v, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn equality_is_exact() {
        let v = Vec4::new(4.2, -6.54, 34855.38596, -0.9938375);
        assert_eq!(v, Vec4::new(4.2, -6.54, 34855.38596, -0.9938375));
        assert_ne!(
            Vec4::new(4.2, -6.54, 0.0, 100.0),
            Vec4::new(4.2, -4.36, 0.0, 100.0)
        );
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Vec3::new(1, 9, 9) < Vec3::new(2, 0, 0));
        assert!(Vec2::new(1.0, 2.0) <= Vec2::new(1.0, 2.0));
        assert!(Vec4::new(0, 0, 0, 1) > Vec4::new(0, 0, 0, 0));
    }

    #[test]
    fn extending_and_truncating_work() {
        let v = Vec2::new(1, 2).extended(3);
        assert_eq!(v, Vec3::new(1, 2, 3));
        let v = v.extended(4);
        assert_eq!(v, Vec4::new(1, 2, 3, 4));
        assert_eq!(v.truncated(), Vec3::new(1, 2, 3));
    }

    #[test]
    fn projecting_vec4_to_point_divides_by_w() {
        let p = Vec4::new(2.0, 4.0, 6.0, 2.0).project_to_point().unwrap();
        assert_eq!(p, crate::Point3::new(1.0, 2.0, 3.0));
        assert_eq!(
            Vec4::new(1.0, 1.0, 1.0, 0.0).project_to_point(),
            Err(LinalgError::DivisionByZero { kind: "4D vector" })
        );
    }

    #[test]
    fn projecting_vec4_to_point_with_overflowing_integer_division_fails() {
        assert_eq!(
            Vec4::new(i32::MIN, 0, 0, -1).project_to_point(),
            Err(LinalgError::DivisionByZero { kind: "4D vector" })
        );
        assert_eq!(
            Vec4::new(4, -6, 8, 2).project_to_point(),
            Ok(crate::Point3::new(2, -3, 4))
        );
    }

    #[test]
    fn array_conversion_works() {
        let v: Vec3<i64> = [1, 2, 3].into();
        assert_eq!(v, Vec3::new(1, 2, 3));
        let a: [i64; 3] = v.into();
        assert_eq!(a, [1, 2, 3]);
    }

    #[test]
    fn debug_lists_named_components() {
        assert_eq!(format!("{:?}", Vec2::new(1, 2)), "Vec2 { x: 1, y: 2 }");
    }

    prop_compose! {
        fn vec3_strategy()(
            x in -1e3..1e3_f64,
            y in -1e3..1e3_f64,
            z in -1e3..1e3_f64,
        ) -> Vec3<f64> {
            Vec3::new(x, y, z)
        }
    }

    proptest! {
        #[test]
        fn adding_zero_is_identity(v in vec3_strategy()) {
            prop_assert_eq!(v + Vec3::zeros(), v);
        }

        #[test]
        fn subtracting_self_gives_zero(v in vec3_strategy()) {
            prop_assert!((v - v).is_zero());
        }

        #[test]
        fn double_negation_is_identity(v in vec3_strategy()) {
            prop_assert_eq!(-(-v), v);
        }

        #[test]
        fn dot_product_is_symmetric(a in vec3_strategy(), b in vec3_strategy()) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }

        #[test]
        fn cross_product_is_antisymmetric(a in vec3_strategy(), b in vec3_strategy()) {
            prop_assert!(approx::abs_diff_eq!(a.cross(&b), -b.cross(&a), epsilon = 1e-9));
        }

        #[test]
        fn cross_product_is_orthogonal_to_operands(a in vec3_strategy(), b in vec3_strategy()) {
            let c = a.cross(&b);
            let (a_len, b_len) = (a.length(), b.length());
            let a_scale = a_len * a_len * b_len + 1.0;
            let b_scale = a_len * b_len * b_len + 1.0;
            prop_assert!(approx::abs_diff_eq!(c.dot(&a) / a_scale, 0.0, epsilon = 1e-12));
            prop_assert!(approx::abs_diff_eq!(c.dot(&b) / b_scale, 0.0, epsilon = 1e-12));
        }

        #[test]
        fn normalized_vector_has_unit_length(v in vec3_strategy()) {
            prop_assume!(v.length() > 1e-6);
            let n = v.normalized().unwrap();
            prop_assert!(approx::abs_diff_eq!(n.length(), 1.0, epsilon = 1e-12));
        }
    }
}
