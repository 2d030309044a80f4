//! Textual formatting and parsing.
//!
//! Tuples are written as `(x,y,z)`. Formatting flags such as precision are
//! applied to each component, so `format!("{:.1}", v)` gives `(1.0,2.0,3.0)`.
//! Matrices are written with one row tuple per line.
//!
//! Parsing accepts components separated by commas and/or whitespace, with
//! optional surrounding parentheses for tuples. Matrix input is the
//! elements in row order, where parentheses around rows are ignored, so the
//! output of `Display` parses back.

use crate::{
    error::{LinalgError, Result},
    matrix::{Mat2, Mat3, Mat4},
    normal::Normal3,
    num::Scalar,
    point::Point3,
    vector::{Vec2, Vec3, Vec4},
};
use std::{array, fmt, str::FromStr};

fn write_components<T: Scalar>(f: &mut fmt::Formatter<'_>, components: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        fmt::Display::fmt(component, f)?;
    }
    f.write_str(")")
}

fn is_tuple_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

fn is_matrix_separator(c: char) -> bool {
    is_tuple_separator(c) || c == '(' || c == ')'
}

/// Parses exactly `N` components from tokens of `s` split at `separator`.
fn parse_components<T: Scalar, const N: usize>(
    s: &str,
    separator: fn(char) -> bool,
    kind: &'static str,
) -> Result<[T; N]> {
    let mut components = [T::ZERO; N];
    let mut found = 0;
    for token in s.split(separator).filter(|token| !token.is_empty()) {
        if let Some(component) = components.get_mut(found) {
            *component = match token.parse() {
                Ok(value) => value,
                Err(_) => return Err(LinalgError::invalid_component(kind, token)),
            };
        }
        found += 1;
    }
    if found != N {
        return Err(LinalgError::component_count(kind, N, found));
    }
    Ok(components)
}

fn strip_parentheses(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(trimmed)
}

macro_rules! impl_tuple_io {
    ($t:ident, $n:literal) => {
        impl<T: Scalar> fmt::Display for $t<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_components(f, self.as_array())
            }
        }

        impl<T: Scalar> FromStr for $t<T> {
            type Err = LinalgError;

            fn from_str(s: &str) -> Result<Self> {
                let components: [T; $n] =
                    parse_components(strip_parentheses(s), is_tuple_separator, Self::KIND)?;
                Ok(Self::from(components))
            }
        }
    };
}

macro_rules! impl_matrix_io {
    ($m:ident, $n:literal, $elements:literal) => {
        impl<T: Scalar> fmt::Display for $m<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (i, row) in self.rows().iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    fmt::Display::fmt(row, f)?;
                }
                Ok(())
            }
        }

        impl<T: Scalar> FromStr for $m<T> {
            type Err = LinalgError;

            fn from_str(s: &str) -> Result<Self> {
                let elements: [T; $elements] =
                    parse_components(s, is_matrix_separator, Self::KIND)?;
                let rows: [[T; $n]; $n] =
                    array::from_fn(|i| array::from_fn(|j| elements[i * $n + j]));
                Ok(Self::from(rows))
            }
        }
    };
}

impl_tuple_io!(Vec2, 2);
impl_tuple_io!(Vec3, 3);
impl_tuple_io!(Vec4, 4);
impl_tuple_io!(Point3, 3);
impl_tuple_io!(Normal3, 3);

impl_matrix_io!(Mat2, 2, 4);
impl_matrix_io!(Mat3, 3, 9);
impl_matrix_io!(Mat4, 4, 16);
