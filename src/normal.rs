//! Surface normals.

use crate::{
    error::Result,
    num::{Scalar, SignedScalar},
    tuple::Tuple,
    vector::Vec3,
};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 3-dimensional surface normal.
///
/// Kept apart from [`Vec3`] because normals transform differently under
/// non-uniform scaling (see [`Mat4::transform_normal`](crate::Mat4::transform_normal)).
/// Unlike the other tuple types, the default normal has all components set to
/// one, and indexing with `[]` asserts on the index rather than going through
/// the checked indexing error. Use [`Self::get`] for a catchable error.
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
pub struct Normal3<T> {
    inner: Tuple<T, 3>,
}

impl<T: Scalar> Normal3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::wrap(Tuple::new([x, y, z]))
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(Tuple::zeros())
    }

    #[inline]
    pub const fn ones() -> Self {
        Self::same(T::ONE)
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.as_array()[0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.as_array()[1]
    }

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

    #[inline]
    pub fn set_components(&mut self, x: T, y: T, z: T) {
        *self = Self::new(x, y, z);
    }

    #[inline]
    pub fn zero(&mut self) {
        *self = Self::zeros();
    }

    /// Reinterprets the normal as a vector with the same components.
    #[inline]
    pub fn as_vector(&self) -> &Vec3<T> {
        bytemuck::cast_ref(self)
    }

    /// Computes the dot product of this normal with a vector.
    #[inline]
    pub fn dot_vector(&self, vector: &Vec3<T>) -> T {
        self.as_vector().dot(vector)
    }

    /// Returns a copy of this normal scaled to unit length.
    ///
    /// # Errors
    /// Returns [`LinalgError::DegenerateNormalization`](crate::LinalgError)
    /// if the length is below `f64::EPSILON`.
    pub fn normalized(&self) -> Result<Self> {
        let mut normalized = *self;
        normalized.normalize()?;
        Ok(normalized)
    }
}

impl<T: SignedScalar> Normal3<T> {
    /// Returns this normal, flipped if needed so that it lies in the same
    /// hemisphere as `vector`.
    #[inline]
    pub fn face_forward(&self, vector: &Vec3<T>) -> Self {
        if self.dot_vector(vector) < T::ZERO {
            -self
        } else {
            *self
        }
    }
}

impl<T: Scalar> Vec3<T> {
    /// Computes the dot product of this vector with a normal.
    #[inline]
    pub fn dot_normal(&self, normal: &Normal3<T>) -> T {
        normal.dot_vector(self)
    }
}

impl_tuple_wrapper!(Normal3, 3, "3D normal");
impl_componentwise_ops!(Normal3);
impl_metric!(Normal3);

impl<T: Scalar> Default for Normal3<T> {
    fn default() -> Self {
        Self::ones()
    }
}

impl<T: Scalar> Index<usize> for Normal3<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < 3, "Normal3 index {index} must be 0, 1 or 2");
        &self.as_array()[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Normal3<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < 3, "Normal3 index {index} must be 0, 1 or 2");
        &mut self.inner.as_mut_array()[index]
    }
}

impl<T: Scalar> fmt::Debug for Normal3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normal3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl_binop!([T: Scalar] Add, add, Normal3<T>, Vec3<T>, Normal3<T>, |a, b| {
    Normal3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
});

impl_binop!([T: Scalar] Add, add, Vec3<T>, Normal3<T>, Normal3<T>, |a, b| {
    Normal3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
});

impl_binop!([T: Scalar] Mul, mul, Normal3<T>, Vec3<T>, Normal3<T>, |a, b| {
    Normal3::new(a.x() * b.x(), a.y() * b.y(), a.z() * b.z())
});

impl_binop!([T: Scalar] Mul, mul, Vec3<T>, Normal3<T>, Normal3<T>, |a, b| {
    Normal3::new(a.x() * b.x(), a.y() * b.y(), a.z() * b.z())
});
