//! Conversions between the nominal tuple types.
//!
//! All conversions are explicit `From` impls. Going to [`Vec4`] tags the
//! value with a homogeneous w-component: one for points and zero for vectors
//! and normals. Going from [`Vec4`] drops w without dividing by it; use
//! [`Vec4::project_to_point`] for the perspective divide.

use crate::{
    normal::Normal3,
    num::Scalar,
    point::Point3,
    vector::{Vec3, Vec4},
};

macro_rules! impl_three_component_from {
    ($from:ident => $to:ident) => {
        impl<T: Scalar> From<$from<T>> for $to<T> {
            #[inline]
            fn from(value: $from<T>) -> Self {
                Self::new(value.x(), value.y(), value.z())
            }
        }
    };
}

impl_three_component_from!(Vec4 => Vec3);
impl_three_component_from!(Point3 => Vec3);
impl_three_component_from!(Normal3 => Vec3);

impl_three_component_from!(Vec4 => Point3);
impl_three_component_from!(Vec3 => Point3);
impl_three_component_from!(Normal3 => Point3);

impl_three_component_from!(Vec4 => Normal3);
impl_three_component_from!(Point3 => Normal3);
impl_three_component_from!(Vec3 => Normal3);

impl<T: Scalar> From<Vec3<T>> for Vec4<T> {
    #[inline]
    fn from(vector: Vec3<T>) -> Self {
        vector.extended(T::ZERO)
    }
}

impl<T: Scalar> From<Normal3<T>> for Vec4<T> {
    #[inline]
    fn from(normal: Normal3<T>) -> Self {
        Self::new(normal.x(), normal.y(), normal.z(), T::ZERO)
    }
}

impl<T: Scalar> From<Point3<T>> for Vec4<T> {
    #[inline]
    fn from(point: Point3<T>) -> Self {
        Self::new(point.x(), point.y(), point.z(), T::ONE)
    }
}
