//! Fixed-size numeric tuples.
//!
//! [`Tuple`] holds the componentwise logic shared by all the named tuple
//! types ([`Vec2`](crate::Vec2), [`Vec3`](crate::Vec3), [`Vec4`](crate::Vec4),
//! [`Point3`](crate::Point3) and [`Normal3`](crate::Normal3)). The named
//! types wrap it to get distinct nominal types with identical storage.

use crate::{
    error::{LinalgError, Result},
    num::Scalar,
};
use std::array;

/// An `N`-component tuple of scalars.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Hash)]
pub struct Tuple<T, const N: usize> {
    components: [T; N],
}

impl<T: Scalar, const N: usize> Tuple<T, N> {
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::splat(T::ZERO)
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    #[inline]
    pub const fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.components
    }

    #[inline]
    pub fn get(&self, index: usize, kind: &'static str) -> Result<T> {
        self.components
            .get(index)
            .copied()
            .ok_or_else(|| LinalgError::index_out_of_range(kind, index, N))
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize, kind: &'static str) -> Result<&mut T> {
        self.components
            .get_mut(index)
            .ok_or_else(|| LinalgError::index_out_of_range(kind, index, N))
    }

    /// Returns a reference to the component, panicking with the checked
    /// indexing error if `index` is out of range.
    #[inline]
    #[track_caller]
    pub fn component(&self, index: usize, kind: &'static str) -> &T {
        match self.components.get(index) {
            Some(component) => component,
            None => panic!("{}", LinalgError::index_out_of_range(kind, index, N)),
        }
    }

    /// Mutable counterpart of [`Self::component`].
    #[inline]
    #[track_caller]
    pub fn component_mut(&mut self, index: usize, kind: &'static str) -> &mut T {
        match self.components.get_mut(index) {
            Some(component) => component,
            None => panic!("{}", LinalgError::index_out_of_range(kind, index, N)),
        }
    }

    #[inline]
    pub fn map(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::new(array::from_fn(|i| f(self.components[i])))
    }

    #[inline]
    pub fn zip_map(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::new(array::from_fn(|i| f(self.components[i], other.components[i])))
    }

    /// Like [`Self::map`], but gives up as soon as `f` returns `None`.
    pub fn try_map(&self, mut f: impl FnMut(T) -> Option<T>) -> Option<Self> {
        let mut components = self.components;
        for component in &mut components {
            *component = f(*component)?;
        }
        Some(Self::new(components))
    }

    /// Like [`Self::zip_map`], but gives up as soon as `f` returns `None`.
    pub fn try_zip_map(
        &self,
        other: &Self,
        mut f: impl FnMut(T, T) -> Option<T>,
    ) -> Option<Self> {
        let mut components = self.components;
        for (component, &rhs) in components.iter_mut().zip(&other.components) {
            *component = f(*component, rhs)?;
        }
        Some(Self::new(components))
    }

    #[inline]
    pub fn sum(&self) -> T {
        self.components
            .iter()
            .fold(T::ZERO, |acc, &component| acc + component)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.zip_map(other, |a, b| a * b).sum()
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> T {
        self.length_squared().sqrt_in_kind()
    }

    /// Returns the tuple divided by its largest component magnitude if the
    /// squared length overflows, and the tuple unchanged otherwise. The
    /// direction is preserved either way.
    pub fn rescaled_for_length(&self) -> Self {
        if self.length_squared().as_f64().is_finite() {
            return *self;
        }
        let largest = self
            .components
            .iter()
            .fold(0.0_f64, |acc, component| acc.max(component.as_f64().abs()));
        let largest = T::from_f64_as(largest);
        self.map(|x| x / largest)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|&component| component == T::ZERO)
    }
}

impl<T, const N: usize> approx::AbsDiffEq for Tuple<T, N>
where
    T: Scalar + approx::AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> approx::RelativeEq for Tuple<T, N>
where
    T: Scalar + approx::RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> approx::UlpsEq for Tuple<T, N>
where
    T: Scalar + approx::UlpsEq<Epsilon = T>,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.components
            .iter()
            .zip(&other.components)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn splat_fills_all_components() {
        let tuple = Tuple::<i32, 4>::splat(7);
        assert_eq!(tuple.as_array(), &[7, 7, 7, 7]);
    }

    #[test]
    fn checked_get_rejects_index_past_end() {
        let tuple = Tuple::new([1.0, 2.0, 3.0]);
        assert_eq!(tuple.get(2, "tuple"), Ok(3.0));
        assert_eq!(
            tuple.get(3, "tuple"),
            Err(LinalgError::IndexOutOfRange {
                kind: "tuple",
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    #[should_panic(expected = "Index 5 out of range")]
    fn panicking_component_access_reports_index() {
        let tuple = Tuple::new([1, 2]);
        let _ = tuple.component(5, "tuple");
    }

    #[test]
    fn try_map_stops_at_first_failure() {
        let tuple = Tuple::new([4, 0, 2]);
        assert_eq!(tuple.try_map(|x| 8_i32.checked_div(x)), None);
        assert_eq!(
            Tuple::new([4, 8, 2]).try_map(|x| 8_i32.checked_div(x)),
            Some(Tuple::new([2, 1, 4]))
        );
    }

    #[test]
    fn length_of_float_tuple_works() {
        let tuple = Tuple::new([3.0_f64, 0.0, 4.0]);
        assert_abs_diff_eq!(tuple.length(), 5.0);
        assert_abs_diff_eq!(tuple.length_squared(), 25.0);
    }

    #[test]
    fn length_of_integer_tuple_is_truncated() {
        assert_eq!(Tuple::new([1, 1]).length(), 1);
        assert_eq!(Tuple::new([3, 3]).length(), 4);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Tuple::new([1, 5, 0]) < Tuple::new([2, 0, 0]));
        assert!(Tuple::new([1, 5, 0]) > Tuple::new([1, 4, 9]));
    }

    #[test]
    fn rescaling_only_applies_when_squared_length_overflows() {
        let tuple = Tuple::new([3.0, -4.0]);
        assert_eq!(tuple.rescaled_for_length(), tuple);

        let huge = Tuple::new([1e200_f64, -2e200, 0.0]);
        let rescaled = huge.rescaled_for_length();
        assert_abs_diff_eq!(rescaled, Tuple::new([0.5, -1.0, 0.0]), epsilon = 1e-12);
        assert!(rescaled.length().is_finite());
    }

    #[test]
    fn zero_test_is_exact() {
        assert!(Tuple::<f64, 3>::zeros().is_zero());
        assert!(!Tuple::new([0.0, 1e-300, 0.0]).is_zero());
    }
}
