//! Free-function forms of the vector products and normalization.

use crate::{
    error::Result,
    normal::Normal3,
    num::Scalar,
    vector::{Vec2, Vec3, Vec4},
};

/// Types that have a dot product with `Rhs`.
pub trait Dot<Rhs = Self> {
    type Output;

    fn dot_product(&self, rhs: &Rhs) -> Self::Output;
}

/// Types that can be scaled to unit length.
pub trait Normalize: Sized {
    /// Returns a unit-length copy, following the normalization policy of
    /// the implementing type.
    ///
    /// # Errors
    /// Returns an error if the value cannot be normalized.
    fn normalized_copy(&self) -> Result<Self>;
}

macro_rules! impl_dot_and_normalize {
    ($($t:ident),+) => {
        $(
            impl<T: Scalar> Dot for $t<T> {
                type Output = T;

                #[inline]
                fn dot_product(&self, rhs: &Self) -> T {
                    self.dot(rhs)
                }
            }

            impl<T: Scalar> Normalize for $t<T> {
                #[inline]
                fn normalized_copy(&self) -> Result<Self> {
                    self.normalized()
                }
            }
        )+
    };
}

impl_dot_and_normalize!(Vec2, Vec3, Vec4, Normal3);

impl<T: Scalar> Dot<Vec3<T>> for Normal3<T> {
    type Output = T;

    #[inline]
    fn dot_product(&self, rhs: &Vec3<T>) -> T {
        self.dot_vector(rhs)
    }
}

impl<T: Scalar> Dot<Normal3<T>> for Vec3<T> {
    type Output = T;

    #[inline]
    fn dot_product(&self, rhs: &Normal3<T>) -> T {
        self.dot_normal(rhs)
    }
}

/// Computes the dot product of `a` and `b`.
#[inline]
pub fn dot<A: Dot<B>, B>(a: &A, b: &B) -> A::Output {
    a.dot_product(b)
}

/// Computes the cross product of `a` and `b`.
#[inline]
pub fn cross<T: Scalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

/// Returns a unit-length copy of `value`.
///
/// # Errors
/// See [`Normalize::normalized_copy`]. Note that [`Vec4`] pads the length
/// with a tiny epsilon and does not fail for a floating point zero vector.
#[inline]
pub fn normalized<V: Normalize>(value: &V) -> Result<V> {
    value.normalized_copy()
}

/// Reflects `incident` about the plane with the given unit `normal`.
#[inline]
pub fn reflect<T: Scalar>(incident: &Vec3<T>, normal: &Vec3<T>) -> Vec3<T> {
    incident.reflect(normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinalgError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn free_dot_works_for_all_pairs() {
        assert_eq!(dot(&Vec2::new(1, 2), &Vec2::new(3, 4)), 11);
        assert_eq!(dot(&Vec3::new(1, 2, 3), &Vec3::new(4, 5, 6)), 32);
        assert_eq!(dot(&Vec4::new(1, 1, 1, 1), &Vec4::new(1, 2, 3, 4)), 10);
        assert_eq!(dot(&Normal3::new(1, 0, 0), &Normal3::new(2, 0, 0)), 2);
        assert_eq!(dot(&Normal3::new(1, 2, 3), &Vec3::new(1, 1, 1)), 6);
        assert_eq!(dot(&Vec3::new(1, 1, 1), &Normal3::new(1, 2, 3)), 6);
    }

    #[test]
    fn free_cross_works() {
        let z = cross(&Vec3::new(1.0, 0.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn free_normalized_follows_type_policy() {
        let v = normalized(&Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(v, Vec3::new(0.0, 0.6, 0.8), epsilon = 1e-12);
        assert_eq!(
            normalized(&Vec2::<f64>::zeros()),
            Err(LinalgError::DegenerateNormalization { kind: "2D vector" })
        );
        assert!(normalized(&Normal3::<f64>::zeros()).is_err());
        assert_eq!(normalized(&Vec4::<f64>::zeros()), Ok(Vec4::zeros()));
    }

    #[test]
    fn free_reflect_works() {
        let v = reflect(&Vec3::new(1.0, -1.0, 0.0), &Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(v, Vec3::new(1.0, 1.0, 0.0));
    }
}
