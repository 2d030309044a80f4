//! Small generic linear algebra for geometry code.
//!
//! The library provides 2D, 3D and 4D vectors, points and surface normals as
//! distinct nominal types, square matrices up to 4x4 and a simple ray. All
//! of them are generic over a [`Scalar`] element type and come with aliases
//! for the common instantiations, like [`Vec3f`] for `Vec3<f32>`.

#[macro_use]
mod macros;

pub mod convert;
pub mod error;
#[cfg(feature = "nalgebra")]
pub mod interop;
pub mod io;
pub mod matrix;
pub mod normal;
pub mod num;
pub mod ops;
pub mod point;
pub mod ray;
pub mod tuple;
pub mod vector;

pub use error::{LinalgError, Result};
pub use matrix::{Mat2, Mat3, Mat4};
pub use normal::Normal3;
pub use num::{FloatScalar, Scalar, SignedScalar};
pub use ops::{cross, dot, normalized, reflect};
pub use point::Point3;
pub use ray::Ray;
pub use vector::{Vec2, Vec3, Vec4};

macro_rules! define_scalar_aliases {
    ($($t:ident),+) => {
        paste::paste! {
            $(
                #[doc = concat!("[`", stringify!($t), "`] with `i32` elements.")]
                pub type [<$t i>] = $t<i32>;
                #[doc = concat!("[`", stringify!($t), "`] with `f32` elements.")]
                pub type [<$t f>] = $t<f32>;
                #[doc = concat!("[`", stringify!($t), "`] with `f64` elements.")]
                pub type [<$t d>] = $t<f64>;
            )+
        }
    };
}

define_scalar_aliases!(Vec2, Vec3, Vec4, Point3, Normal3, Mat2, Mat3, Mat4);

pub type Rayf = Ray<f32>;
pub type Rayd = Ray<f64>;
