//! Conversions to and from [`nalgebra`] types.

use crate::{
    matrix::{Mat2, Mat3, Mat4},
    num::Scalar,
    point::Point3,
    vector::{Vec2, Vec3, Vec4},
};
use std::array;

macro_rules! impl_vector_interop {
    ($t:ident, $na:ident, $n:literal) => {
        impl<T: Scalar> From<$t<T>> for nalgebra::$na<T> {
            #[inline]
            fn from(vector: $t<T>) -> Self {
                Self::from_fn(|i, _| vector.as_array()[i])
            }
        }

        impl<T: Scalar> From<nalgebra::$na<T>> for $t<T> {
            #[inline]
            fn from(vector: nalgebra::$na<T>) -> Self {
                Self::from(array::from_fn::<T, $n, _>(|i| vector[i]))
            }
        }
    };
}

macro_rules! impl_matrix_interop {
    ($m:ident, $na:ident, $n:literal) => {
        impl<T: Scalar> From<$m<T>> for nalgebra::$na<T> {
            #[inline]
            fn from(matrix: $m<T>) -> Self {
                Self::from_fn(|i, j| matrix.rows()[i].as_array()[j])
            }
        }

        impl<T: Scalar> From<nalgebra::$na<T>> for $m<T> {
            #[inline]
            fn from(matrix: nalgebra::$na<T>) -> Self {
                Self::from(array::from_fn::<[T; $n], $n, _>(|i| {
                    array::from_fn(|j| matrix[(i, j)])
                }))
            }
        }
    };
}

impl_vector_interop!(Vec2, Vector2, 2);
impl_vector_interop!(Vec3, Vector3, 3);
impl_vector_interop!(Vec4, Vector4, 4);

impl_matrix_interop!(Mat2, Matrix2, 2);
impl_matrix_interop!(Mat3, Matrix3, 3);
impl_matrix_interop!(Mat4, Matrix4, 4);

impl<T: Scalar> From<Point3<T>> for nalgebra::Point3<T> {
    #[inline]
    fn from(point: Point3<T>) -> Self {
        Self::new(point.x(), point.y(), point.z())
    }
}

impl<T: Scalar> From<nalgebra::Point3<T>> for Point3<T> {
    #[inline]
    fn from(point: nalgebra::Point3<T>) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}
