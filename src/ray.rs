//! Rays.

use crate::{num::FloatScalar, point::Point3, vector::Vec3};
use std::fmt;

/// A half-line starting at an origin and extending along a direction, up to
/// a maximum value of the ray parameter.
///
/// The direction is not required to have unit length, so the parameter
/// measures distance in units of the direction's length.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: FloatScalar + serde::Serialize",
        deserialize = "T: FloatScalar + serde::Deserialize<'de>"
    ))
)]
#[derive(Clone, Copy, PartialEq)]
pub struct Ray<T> {
    origin: Point3<T>,
    direction: Vec3<T>,
    max_range: T,
}

impl<T: FloatScalar> Ray<T> {
    /// Creates a new ray with the given origin and direction and an
    /// infinite range.
    #[inline]
    pub fn new(origin: Point3<T>, direction: Vec3<T>) -> Self {
        Self::with_max_range(origin, direction, T::infinity())
    }

    /// Creates a new ray that ends at the given parameter value.
    #[inline]
    pub const fn with_max_range(origin: Point3<T>, direction: Vec3<T>, max_range: T) -> Self {
        Self {
            origin,
            direction,
            max_range,
        }
    }

    #[inline]
    pub const fn origin(&self) -> &Point3<T> {
        &self.origin
    }

    #[inline]
    pub const fn direction(&self) -> &Vec3<T> {
        &self.direction
    }

    /// The largest parameter value the ray extends to.
    #[inline]
    pub const fn max_range(&self) -> T {
        self.max_range
    }

    #[inline]
    pub fn set_origin(&mut self, origin: Point3<T>) {
        self.origin = origin;
    }

    #[inline]
    pub fn set_direction(&mut self, direction: Vec3<T>) {
        self.direction = direction;
    }

    #[inline]
    pub fn set_max_range(&mut self, max_range: T) {
        self.max_range = max_range;
    }

    /// Computes the point `origin + t * direction`.
    ///
    /// The range is not checked; see [`Self::contains_parameter`].
    #[inline]
    pub fn position(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }

    /// Whether `t` lies between zero and the maximum range, inclusive.
    #[inline]
    pub fn contains_parameter(&self, t: T) -> bool {
        t >= T::ZERO && t <= self.max_range
    }
}

impl<T: FloatScalar> Default for Ray<T> {
    fn default() -> Self {
        Self::new(Point3::origin(), Vec3::zeros())
    }
}

impl<T: FloatScalar> fmt::Debug for Ray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ray")
            .field("origin", &self.origin)
            .field("direction", &self.direction)
            .field("max_range", &self.max_range)
            .finish()
    }
}
