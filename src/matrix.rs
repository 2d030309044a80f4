//! Matrices.

use crate::{
    error::{LinalgError, Result},
    normal::Normal3,
    num::Scalar,
    point::Point3,
    vector::{Vec2, Vec3, Vec4},
};
use std::{
    array, fmt,
    ops::{Index, IndexMut},
};

/// A 2x2 matrix stored as two row vectors.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[[T; 2]; 2]",
        from = "[[T; 2]; 2]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy, PartialEq)]
pub struct Mat2<T> {
    rows: [Vec2<T>; 2],
}

/// A 3x3 matrix stored as three row vectors.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[[T; 3]; 3]",
        from = "[[T; 3]; 3]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy, PartialEq)]
pub struct Mat3<T> {
    rows: [Vec3<T>; 3],
}

/// A 4x4 matrix stored as four row vectors.
///
/// When used as a transform, points and vectors are treated as column vectors
/// multiplied from the right.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "[[T; 4]; 4]",
        from = "[[T; 4]; 4]",
        bound(
            serialize = "T: Scalar + serde::Serialize",
            deserialize = "T: Scalar + serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy, PartialEq)]
pub struct Mat4<T> {
    rows: [Vec4<T>; 4],
}

macro_rules! impl_square_matrix {
    ($m:ident, $v:ident, $n:literal, $kind:literal, [$($row:ident),+]) => {
        impl<T: Scalar> $m<T> {
            pub(crate) const KIND: &'static str = $kind;

            #[inline]
            const fn wrap(rows: [$v<T>; $n]) -> Self {
                Self { rows }
            }

            /// Creates a matrix with the given rows.
            #[inline]
            pub const fn from_rows($($row: $v<T>),+) -> Self {
                Self::wrap([$($row),+])
            }

            /// Creates a matrix with the same value for every element.
            #[inline]
            pub const fn same(value: T) -> Self {
                Self::wrap([$v::same(value); $n])
            }

            /// Creates a matrix with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::same(T::ZERO)
            }

            /// Creates the identity matrix.
            pub fn identity() -> Self {
                let mut matrix = Self::zeros();
                for i in 0..$n {
                    matrix.rows[i][i] = T::ONE;
                }
                matrix
            }

            #[inline]
            pub const fn rows(&self) -> &[$v<T>; $n] {
                &self.rows
            }

            /// The row at the given index.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`] if `i` is not a valid
            /// row index.
            #[inline]
            pub fn row(&self, i: usize) -> Result<&$v<T>> {
                self.rows
                    .get(i)
                    .ok_or_else(|| LinalgError::index_out_of_range(Self::KIND, i, $n))
            }

            /// Mutable counterpart of [`Self::row`].
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`] if `i` is not a valid
            /// row index.
            #[inline]
            pub fn row_mut(&mut self, i: usize) -> Result<&mut $v<T>> {
                self.rows
                    .get_mut(i)
                    .ok_or_else(|| LinalgError::index_out_of_range(Self::KIND, i, $n))
            }

            /// The element in row `i` and column `j`.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`] if either index is out
            /// of range.
            #[inline]
            pub fn element(&self, i: usize, j: usize) -> Result<T> {
                self.row(i)?.get(j)
            }

            /// The column at the given index.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`] if `j` is not a valid
            /// column index.
            #[inline]
            pub fn column(&self, j: usize) -> Result<$v<T>> {
                if j >= $n {
                    return Err(LinalgError::index_out_of_range(Self::KIND, j, $n));
                }
                Ok(self.column_unchecked(j))
            }

            #[inline]
            fn column_unchecked(&self, j: usize) -> $v<T> {
                $v::from(array::from_fn(|i| self.rows[i].as_array()[j]))
            }

            /// Returns the transpose of this matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self::wrap(array::from_fn(|j| self.column_unchecked(j)))
            }

            /// Computes the sum of the diagonal elements.
            #[inline]
            pub fn trace(&self) -> T {
                (0..$n).fold(T::ZERO, |acc, i| acc + self.rows[i].as_array()[i])
            }

            /// Returns a matrix with the given closure applied to each
            /// element.
            #[inline]
            pub fn mapped(&self, mut f: impl FnMut(T) -> T) -> Self {
                Self::wrap(self.rows.map(|row| row.mapped(&mut f)))
            }

            #[inline]
            fn zip_mapped(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
                Self::wrap(array::from_fn(|i| {
                    let (a, b) = (self.rows[i].as_array(), other.rows[i].as_array());
                    $v::from(array::from_fn(|j| f(a[j], b[j])))
                }))
            }

            fn check_element_index(i: usize, j: usize) -> Result<()> {
                if i >= $n {
                    return Err(LinalgError::index_out_of_range(Self::KIND, i, $n));
                }
                if j >= $n {
                    return Err(LinalgError::index_out_of_range(Self::KIND, j, $n));
                }
                Ok(())
            }

            /// Computes the cofactor of the element in row `i` and column
            /// `j`, the minor with the sign of `(-1)^(i + j)`.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`] if either index is out
            /// of range.
            pub fn cofactor(&self, i: usize, j: usize) -> Result<T> {
                Self::check_element_index(i, j)?;
                Ok(self.cofactor_unchecked(i, j))
            }

            fn cofactor_unchecked(&self, i: usize, j: usize) -> T {
                let minor = self.minor_unchecked(i, j);
                if (i + j) % 2 == 0 {
                    minor
                } else {
                    T::ZERO - minor
                }
            }

            /// Computes the inverse as the adjugate divided by the
            /// determinant. All arithmetic happens in `T`, so the inverse of
            /// an integer matrix is truncated.
            ///
            /// # Errors
            /// Returns [`LinalgError::SingularMatrix`] if the determinant is
            /// exactly zero.
            pub fn inverse(&self) -> Result<Self> {
                let determinant = self.determinant();
                if determinant == T::ZERO {
                    return Err(LinalgError::singular_matrix($n));
                }
                Ok(Self::wrap(array::from_fn(|i| {
                    $v::from(array::from_fn(|j| self.cofactor_unchecked(j, i) / determinant))
                })))
            }
        }

        impl<T: Scalar> Default for $m<T> {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<T: Scalar> From<[[T; $n]; $n]> for $m<T> {
            #[inline]
            fn from(elements: [[T; $n]; $n]) -> Self {
                Self::wrap(elements.map($v::from))
            }
        }

        impl<T: Scalar> From<$m<T>> for [[T; $n]; $n] {
            #[inline]
            fn from(matrix: $m<T>) -> Self {
                matrix.rows.map(<[T; $n]>::from)
            }
        }

        impl<T: Scalar> Index<usize> for $m<T> {
            type Output = $v<T>;

            #[inline]
            #[track_caller]
            fn index(&self, i: usize) -> &Self::Output {
                match self.rows.get(i) {
                    Some(row) => row,
                    None => panic!("{}", LinalgError::index_out_of_range(Self::KIND, i, $n)),
                }
            }
        }

        impl<T: Scalar> IndexMut<usize> for $m<T> {
            #[inline]
            #[track_caller]
            fn index_mut(&mut self, i: usize) -> &mut Self::Output {
                match self.rows.get_mut(i) {
                    Some(row) => row,
                    None => panic!("{}", LinalgError::index_out_of_range(Self::KIND, i, $n)),
                }
            }
        }

        impl<T: Scalar> fmt::Debug for $m<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.rows.iter().map($v::as_array)).finish()
            }
        }

        impl_binop!([T: Scalar] Add, add, $m<T>, $m<T>, $m<T>, |a, b| {
            a.zip_mapped(b, |x, y| x + y)
        });

        impl_binop!([T: Scalar] Sub, sub, $m<T>, $m<T>, $m<T>, |a, b| {
            a.zip_mapped(b, |x, y| x - y)
        });

        impl_binop!([T: Scalar] Add, add, $m<T>, T, $m<T>, |a, b| {
            a.mapped(|x| x + *b)
        });

        impl_binop!([T: Scalar] Sub, sub, $m<T>, T, $m<T>, |a, b| {
            a.mapped(|x| x - *b)
        });

        impl_binop!([T: Scalar] Mul, mul, $m<T>, T, $m<T>, |a, b| {
            a.mapped(|x| x * *b)
        });

        impl_scalar_lhs_binop!(Mul, mul, $m, $m, |a, b| { b.mapped(|x| *a * x) });

        impl_binop!([T: Scalar] Mul, mul, $m<T>, $m<T>, $m<T>, |a, b| {
            let columns: [$v<T>; $n] = array::from_fn(|j| b.column_unchecked(j));
            $m::wrap(array::from_fn(|i| {
                $v::from(array::from_fn(|j| a.rows[i].dot(&columns[j])))
            }))
        });

        impl_binop!([T: Scalar] Mul, mul, $m<T>, $v<T>, $v<T>, |a, b| {
            $v::from(array::from_fn(|i| a.rows[i].dot(b)))
        });

        impl_unary_op!([T: crate::num::SignedScalar] Neg, neg, $m<T>, $m<T>, |val| {
            val.mapped(|x| -x)
        });

        impl_binop_assign!([T: Scalar] AddAssign, add_assign, $m<T>, $m<T>, |a, b| {
            *a = *a + b;
        });

        impl_binop_assign!([T: Scalar] SubAssign, sub_assign, $m<T>, $m<T>, |a, b| {
            *a = *a - b;
        });

        impl_binop_assign!([T: Scalar] MulAssign, mul_assign, $m<T>, $m<T>, |a, b| {
            *a = *a * b;
        });

        impl_binop_assign!([T: Scalar] MulAssign, mul_assign, $m<T>, T, |a, b| {
            *a = *a * b;
        });

        // SAFETY: the matrix is `repr(transparent)` over an array of `Pod`
        // row vectors.
        unsafe impl<T: Scalar> bytemuck::Zeroable for $m<T> {}

        // SAFETY: as above.
        unsafe impl<T: Scalar> bytemuck::Pod for $m<T> {}

        impl<T> approx::AbsDiffEq for $m<T>
        where
            T: Scalar + approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.rows
                    .iter()
                    .zip(&other.rows)
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<T> approx::RelativeEq for $m<T>
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
                self.rows
                    .iter()
                    .zip(&other.rows)
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl<T> approx::UlpsEq for $m<T>
        where
            T: Scalar + approx::UlpsEq<Epsilon = T>,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.rows
                    .iter()
                    .zip(&other.rows)
                    .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

/// Implements the minors of a matrix through the determinant of the
/// submatrix of one size lower.
macro_rules! impl_submatrix_minor {
    ($m:ident => $sub:ident, $n:literal) => {
        impl<T: Scalar> $m<T> {
            /// Returns the matrix with row `i` and column `j` removed.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`] if either index is out
            /// of range.
            pub fn submatrix(&self, i: usize, j: usize) -> Result<$sub<T>> {
                Self::check_element_index(i, j)?;
                Ok(self.submatrix_unchecked(i, j))
            }

            fn submatrix_unchecked(&self, i: usize, j: usize) -> $sub<T> {
                let mut submatrix = $sub::zeros();
                for (sub_i, row) in (0..$n).filter(|&row| row != i).enumerate() {
                    for (sub_j, column) in (0..$n).filter(|&column| column != j).enumerate() {
                        submatrix.rows[sub_i][sub_j] = self.rows[row][column];
                    }
                }
                submatrix
            }

            /// Computes the determinant of the submatrix with row `i` and
            /// column `j` removed.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`] if either index is out
            /// of range.
            pub fn minor(&self, i: usize, j: usize) -> Result<T> {
                Self::check_element_index(i, j)?;
                Ok(self.minor_unchecked(i, j))
            }

            fn minor_unchecked(&self, i: usize, j: usize) -> T {
                self.submatrix_unchecked(i, j).determinant()
            }
        }
    };
}

impl_square_matrix!(Mat2, Vec2, 2, "2x2 matrix", [row_0, row_1]);
impl_square_matrix!(Mat3, Vec3, 3, "3x3 matrix", [row_0, row_1, row_2]);
impl_square_matrix!(Mat4, Vec4, 4, "4x4 matrix", [row_0, row_1, row_2, row_3]);

impl_submatrix_minor!(Mat3 => Mat2, 3);
impl_submatrix_minor!(Mat4 => Mat3, 4);

impl<T: Scalar> Mat2<T> {
    /// Computes the determinant `a d - b c`.
    #[inline]
    pub fn determinant(&self) -> T {
        let [a, b] = *self.rows[0].as_array();
        let [c, d] = *self.rows[1].as_array();
        a * d - b * c
    }

    /// The minor of a 2x2 matrix is the single element in the other row and
    /// column.
    ///
    /// # Errors
    /// Returns [`LinalgError::IndexOutOfRange`] if either index is out of
    /// range.
    pub fn minor(&self, i: usize, j: usize) -> Result<T> {
        Self::check_element_index(i, j)?;
        Ok(self.minor_unchecked(i, j))
    }

    fn minor_unchecked(&self, i: usize, j: usize) -> T {
        self.rows[1 - i][1 - j]
    }
}

impl<T: Scalar> Mat3<T> {
    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let [a, b, c] = *self.rows[0].as_array();
        let [d, e, f] = *self.rows[1].as_array();
        let [g, h, i] = *self.rows[2].as_array();
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }
}

impl<T: Scalar> Mat4<T> {
    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let first_row = self.rows[0].as_array();
        let mut determinant = T::ZERO;
        for (j, &element) in first_row.iter().enumerate() {
            let term = element * self.minor_unchecked(0, j);
            if j % 2 == 0 {
                determinant += term;
            } else {
                determinant -= term;
            }
        }
        determinant
    }

    /// Returns the upper-left 3x3 part, which holds the linear part of an
    /// affine transform.
    #[inline]
    pub fn linear_part(&self) -> Mat3<T> {
        Mat3::wrap(array::from_fn(|i| self.rows[i].truncated()))
    }

    /// Transforms a point, treating it as homogeneous coordinates with
    /// `w = 1` and projecting the result back.
    ///
    /// # Errors
    /// Returns [`LinalgError::DivisionByZero`] if the transformed w is zero.
    #[inline]
    pub fn transform_point(&self, point: &Point3<T>) -> Result<Point3<T>> {
        (self * Vec4::from(*point)).project_to_point()
    }

    /// Transforms a direction, treating it as homogeneous coordinates with
    /// `w = 0`.
    #[inline]
    pub fn transform_vector(&self, vector: &Vec3<T>) -> Vec3<T> {
        (self * vector.extended(T::ZERO)).truncated()
    }

    /// Transforms a surface normal with the inverse transpose of the linear
    /// part, which keeps it perpendicular to transformed surfaces.
    ///
    /// # Errors
    /// Returns [`LinalgError::SingularMatrix`] if the linear part is not
    /// invertible.
    pub fn transform_normal(&self, normal: &Normal3<T>) -> Result<Normal3<T>> {
        let normal_matrix = self.linear_part().inverse()?.transpose();
        Ok(Normal3::from(normal_matrix * Vec3::from(*normal)))
    }
}
