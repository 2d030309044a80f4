//! Points.

use crate::{num::Scalar, tuple::Tuple, vector::Vec3};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A point in 3-dimensional space.
///
/// Points and vectors combine affinely: the difference of two points is a
/// [`Vec3`], and a point offset by a vector is another point.
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
pub struct Point3<T> {
    inner: Tuple<T, 3>,
}

impl<T: Scalar> Point3<T> {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::wrap(Tuple::new([x, y, z]))
    }

    /// Creates a point at the origin.
    #[inline]
    pub const fn origin() -> Self {
        Self::wrap(Tuple::zeros())
    }

    /// Computes the point halfway between the two given points. Integer
    /// coordinates are truncated.
    #[inline]
    pub fn center_of(point_a: &Self, point_b: &Self) -> Self {
        Self::wrap(
            point_a
                .inner
                .zip_map(&point_b.inner, |a, b| (a + b) / T::TWO),
        )
    }

    /// Reinterprets the point as the vector from the origin to it.
    #[inline]
    pub fn as_vector(&self) -> &Vec3<T> {
        bytemuck::cast_ref(self)
    }

    /// Returns the point whose coordinates are the componentwise minimum of
    /// this point and `other`.
    #[inline]
    pub fn min_with(&self, other: &Self) -> Self {
        Self::wrap(
            self.inner
                .zip_map(&other.inner, |a, b| if b < a { b } else { a }),
        )
    }

    /// Componentwise maximum, see [`Self::min_with`].
    #[inline]
    pub fn max_with(&self, other: &Self) -> Self {
        Self::wrap(
            self.inner
                .zip_map(&other.inner, |a, b| if b > a { b } else { a }),
        )
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

    /// Computes the Euclidean distance between two points.
    #[inline]
    pub fn distance_between(point_a: &Self, point_b: &Self) -> T {
        (point_a - point_b).length()
    }

    #[inline]
    pub fn squared_distance_between(point_a: &Self, point_b: &Self) -> T {
        (point_a - point_b).length_squared()
    }
}

impl_tuple_wrapper!(Point3, 3, "3D point");

impl<T: Scalar> Default for Point3<T> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.inner.component(index, Self::KIND)
    }
}

impl<T: Scalar> IndexMut<usize> for Point3<T> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.inner.component_mut(index, Self::KIND)
    }
}

impl<T: Scalar> fmt::Debug for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl_binop!([T: Scalar] Add, add, Point3<T>, Vec3<T>, Point3<T>, |a, b| {
    Point3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
});

impl_binop!([T: Scalar] Sub, sub, Point3<T>, Vec3<T>, Point3<T>, |a, b| {
    Point3::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
});

impl_binop!([T: Scalar] Sub, sub, Point3<T>, Point3<T>, Vec3<T>, |a, b| {
    Vec3::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
});

// Adding two points is not affine, but yields the componentwise sum as a
// vector, which is what barycentric combinations are built from.
impl_binop!([T: Scalar] Add, add, Point3<T>, Point3<T>, Vec3<T>, |a, b| {
    Vec3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
});

impl_binop!([T: Scalar] Add, add, Vec3<T>, Point3<T>, Vec3<T>, |a, b| {
    Vec3::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z())
});

impl_binop!([T: Scalar] Sub, sub, Vec3<T>, Point3<T>, Vec3<T>, |a, b| {
    Vec3::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z())
});

impl_binop!([T: Scalar] Add, add, Point3<T>, T, Point3<T>, |a, b| {
    Point3::wrap(a.inner.map(|x| x + *b))
});

impl_binop!([T: Scalar] Mul, mul, Point3<T>, T, Point3<T>, |a, b| {
    Point3::wrap(a.inner.map(|x| x * *b))
});

impl_scalar_lhs_binop!(Mul, mul, Point3, Point3, |a, b| {
    Point3::wrap(b.inner.map(|x| *a * x))
});

impl_binop_assign!([T: Scalar] AddAssign, add_assign, Point3<T>, Vec3<T>, |a, b| {
    *a = *a + b;
});

impl_binop_assign!([T: Scalar] SubAssign, sub_assign, Point3<T>, Vec3<T>, |a, b| {
    *a = *a - b;
});
