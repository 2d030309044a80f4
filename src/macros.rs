//! Crate-local macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands. An optional leading `[...]` list holds the generic
/// parameters of the impls.
macro_rules! impl_binop {
    (
        [$($generics:tt)*]
        $op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl_binop!([] $op, $method, $tl, $tr, $to, |$lhs, $rhs| $body);
    };
}

macro_rules! impl_unary_op {
    ([$($generics:tt)*] $op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl<$($generics)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ([$($generics:tt)*] $op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<$($generics)*> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements a binary operator with a concrete scalar as the left operand,
/// once for every [`Scalar`](crate::num::Scalar) type. `Scalar ∘ Wrapper<T>`
/// cannot be written generically because of the orphan rule.
macro_rules! impl_scalar_lhs_binop {
    ($op:ident, $method:ident, $t:ident, $to:ident, |$lhs:ident, $rhs:ident| $body:block) => {
        impl_scalar_lhs_binop!(
            @each $op, $method, $t, $to, |$lhs, $rhs| $body;
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
        );
    };
    (
        @each $op:ident, $method:ident, $t:ident, $to:ident, |$lhs:ident, $rhs:ident| $body:block;
        $($scalar:ty),*
    ) => {
        $(
            impl_binop!($op, $method, $scalar, $t<$scalar>, $to<$scalar>, |$lhs, $rhs| $body);
        )*
    };
}

/// Implements the `approx` comparison traits for a wrapper around a
/// [`Tuple`](crate::tuple::Tuple) stored in the `inner` field.
macro_rules! impl_approx_eq_via_inner {
    ($t:ident) => {
        impl<T> ::approx::AbsDiffEq for $t<T>
        where
            T: $crate::num::Scalar + ::approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.inner.abs_diff_eq(&other.inner, epsilon)
            }
        }

        impl<T> ::approx::RelativeEq for $t<T>
        where
            T: $crate::num::Scalar + ::approx::RelativeEq<Epsilon = T>,
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
                self.inner.relative_eq(&other.inner, epsilon, max_relative)
            }
        }

        impl<T> ::approx::UlpsEq for $t<T>
        where
            T: $crate::num::Scalar + ::approx::UlpsEq<Epsilon = T>,
        {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                self.inner.ulps_eq(&other.inner, epsilon, max_ulps)
            }
        }
    };
}

/// Implements the operations shared by every wrapper around a
/// [`Tuple`](crate::tuple::Tuple): array conversion, checked indexing,
/// broadcasting and zero tests.
macro_rules! impl_tuple_wrapper {
    ($t:ident, $n:literal, $kind:literal) => {
        impl<T: $crate::num::Scalar> $t<T> {
            pub(crate) const KIND: &'static str = $kind;

            #[inline]
            pub(crate) const fn wrap(inner: $crate::tuple::Tuple<T, $n>) -> Self {
                Self { inner }
            }

            /// Creates a new value with the same value for all components.
            #[inline]
            pub const fn same(value: T) -> Self {
                Self::wrap($crate::tuple::Tuple::splat(value))
            }

            /// The components as an array.
            #[inline]
            pub const fn as_array(&self) -> &[T; $n] {
                self.inner.as_array()
            }

            /// The component at the given index.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError)
            /// if `index` is not a valid component index.
            #[inline]
            pub fn get(&self, index: usize) -> $crate::error::Result<T> {
                self.inner.get(index, Self::KIND)
            }

            /// A mutable reference to the component at the given index.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError)
            /// if `index` is not a valid component index.
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> $crate::error::Result<&mut T> {
                self.inner.get_mut(index, Self::KIND)
            }

            /// Sets the component at the given index.
            ///
            /// # Errors
            /// Returns [`LinalgError::IndexOutOfRange`](crate::LinalgError)
            /// if `index` is not a valid component index.
            #[inline]
            pub fn set_component(&mut self, index: usize, value: T) -> $crate::error::Result<()> {
                *self.get_mut(index)? = value;
                Ok(())
            }

            /// Sets every component to the given value.
            #[inline]
            pub fn set(&mut self, value: T) {
                self.inner = $crate::tuple::Tuple::splat(value);
            }

            /// Whether all components are exactly zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.inner.is_zero()
            }

            /// Returns a value with the given closure applied to each
            /// component.
            #[inline]
            pub fn mapped(&self, f: impl FnMut(T) -> T) -> Self {
                Self::wrap(self.inner.map(f))
            }
        }

        impl<T: $crate::num::Scalar> From<[T; $n]> for $t<T> {
            #[inline]
            fn from(components: [T; $n]) -> Self {
                Self::wrap($crate::tuple::Tuple::new(components))
            }
        }

        impl<T: $crate::num::Scalar> From<$t<T>> for [T; $n] {
            #[inline]
            fn from(value: $t<T>) -> Self {
                *value.as_array()
            }
        }

        // SAFETY: the wrapper is `repr(transparent)` over a `Tuple`, which is
        // `repr(transparent)` over `[T; N]`.
        unsafe impl<T: $crate::num::Scalar + ::bytemuck::Zeroable> ::bytemuck::Zeroable for $t<T> {}

        // SAFETY: as above.
        unsafe impl<T: $crate::num::Scalar + ::bytemuck::Pod> ::bytemuck::Pod for $t<T> {}

        impl_approx_eq_via_inner!($t);
    };
}

/// Implements componentwise `+`, `-` and `*` between two values of the
/// wrapper type and between the wrapper and a scalar (in both operand
/// orders), together with negation and the assigning forms.
macro_rules! impl_componentwise_ops {
    ($t:ident) => {
        impl_binop!([T: $crate::num::Scalar] Add, add, $t<T>, $t<T>, $t<T>, |a, b| {
            $t::wrap(a.inner.zip_map(&b.inner, |x, y| x + y))
        });

        impl_binop!([T: $crate::num::Scalar] Sub, sub, $t<T>, $t<T>, $t<T>, |a, b| {
            $t::wrap(a.inner.zip_map(&b.inner, |x, y| x - y))
        });

        impl_binop!([T: $crate::num::Scalar] Mul, mul, $t<T>, $t<T>, $t<T>, |a, b| {
            $t::wrap(a.inner.zip_map(&b.inner, |x, y| x * y))
        });

        impl_binop!([T: $crate::num::Scalar] Add, add, $t<T>, T, $t<T>, |a, b| {
            $t::wrap(a.inner.map(|x| x + *b))
        });

        impl_binop!([T: $crate::num::Scalar] Sub, sub, $t<T>, T, $t<T>, |a, b| {
            $t::wrap(a.inner.map(|x| x - *b))
        });

        impl_binop!([T: $crate::num::Scalar] Mul, mul, $t<T>, T, $t<T>, |a, b| {
            $t::wrap(a.inner.map(|x| x * *b))
        });

        impl_scalar_lhs_binop!(Add, add, $t, $t, |a, b| { $t::wrap(b.inner.map(|x| *a + x)) });

        impl_scalar_lhs_binop!(Sub, sub, $t, $t, |a, b| { $t::wrap(b.inner.map(|x| *a - x)) });

        impl_scalar_lhs_binop!(Mul, mul, $t, $t, |a, b| { $t::wrap(b.inner.map(|x| *a * x)) });

        impl_binop_assign!([T: $crate::num::Scalar] AddAssign, add_assign, $t<T>, $t<T>, |a, b| {
            *a = *a + b;
        });

        impl_binop_assign!([T: $crate::num::Scalar] SubAssign, sub_assign, $t<T>, $t<T>, |a, b| {
            *a = *a - b;
        });

        impl_binop_assign!([T: $crate::num::Scalar] MulAssign, mul_assign, $t<T>, $t<T>, |a, b| {
            *a = *a * b;
        });

        impl_binop_assign!([T: $crate::num::Scalar] AddAssign, add_assign, $t<T>, T, |a, b| {
            *a = *a + b;
        });

        impl_binop_assign!([T: $crate::num::Scalar] SubAssign, sub_assign, $t<T>, T, |a, b| {
            *a = *a - b;
        });

        impl_binop_assign!([T: $crate::num::Scalar] MulAssign, mul_assign, $t<T>, T, |a, b| {
            *a = *a * b;
        });

        impl_unary_op!([T: $crate::num::SignedScalar] Neg, neg, $t<T>, $t<T>, |val| {
            $t::wrap(val.inner.map(|x| -x))
        });

        impl<T: $crate::num::Scalar> $t<T> {
            /// Unary plus. Returns an unchanged copy.
            #[inline]
            #[must_use]
            pub fn pos(&self) -> Self {
                *self
            }
        }
    };
}

/// Implements checked componentwise division for a vector type, with the
/// `Div` operators panicking where the checked versions return an error.
macro_rules! impl_checked_division {
    ($t:ident) => {
        impl<T: $crate::num::Scalar> $t<T> {
            /// Divides each component by the corresponding component of
            /// `divisor`.
            ///
            /// # Errors
            /// Returns [`LinalgError::DivisionByZero`](crate::LinalgError) if
            /// `divisor` is the zero vector, or if a component division is
            /// undefined for an integer scalar.
            #[inline]
            pub fn checked_div(&self, divisor: &Self) -> $crate::error::Result<Self> {
                if divisor.is_zero() {
                    return Err($crate::error::LinalgError::division_by_zero(Self::KIND));
                }
                self.inner
                    .try_zip_map(&divisor.inner, T::checked_quotient)
                    .map(Self::wrap)
                    .ok_or_else(|| $crate::error::LinalgError::division_by_zero(Self::KIND))
            }

            /// Divides each component by `divisor`.
            ///
            /// # Errors
            /// Returns [`LinalgError::DivisionByZero`](crate::LinalgError) if
            /// `divisor` is zero.
            #[inline]
            pub fn checked_div_scalar(&self, divisor: T) -> $crate::error::Result<Self> {
                if divisor == T::ZERO {
                    return Err($crate::error::LinalgError::division_by_zero(Self::KIND));
                }
                self.inner
                    .try_map(|x| x.checked_quotient(divisor))
                    .map(Self::wrap)
                    .ok_or_else(|| $crate::error::LinalgError::division_by_zero(Self::KIND))
            }
        }

        impl_binop!([T: $crate::num::Scalar] Div, div, $t<T>, $t<T>, $t<T>, |a, b| {
            a.checked_div(b).unwrap_or_else(|err| panic!("{err}"))
        });

        impl_binop!([T: $crate::num::Scalar] Div, div, $t<T>, T, $t<T>, |a, b| {
            a.checked_div_scalar(*b).unwrap_or_else(|err| panic!("{err}"))
        });
    };
}

/// Implements the Euclidean metric on a vector-like wrapper: length, dot
/// product and in-place normalization.
macro_rules! impl_metric {
    ($t:ident) => {
        impl<T: $crate::num::Scalar> $t<T> {
            /// Computes the dot product of this value with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> T {
                self.inner.dot(&other.inner)
            }

            /// Computes the square of the Euclidean length.
            #[inline]
            pub fn length_squared(&self) -> T {
                self.inner.length_squared()
            }

            /// Computes the Euclidean length in the scalar type, so the
            /// length of an integer value is truncated.
            #[inline]
            pub fn length(&self) -> T {
                self.inner.length()
            }

            /// Scales this value to unit length in place.
            ///
            /// # Errors
            /// Returns
            /// [`LinalgError::DegenerateNormalization`](crate::LinalgError)
            /// if the length is below `f64::EPSILON` or not finite. Values
            /// whose squared length overflows are rescaled first, so large
            /// finite values still normalize.
            pub fn normalize(&mut self) -> $crate::error::Result<()> {
                let rescaled = self.inner.rescaled_for_length();
                let length = rescaled.length();
                let length_f64 = length.as_f64();
                if length_f64 < f64::EPSILON || !length_f64.is_finite() {
                    return Err($crate::error::LinalgError::degenerate_normalization(Self::KIND));
                }
                self.inner = rescaled.map(|x| x / length);
                Ok(())
            }
        }
    };
}
