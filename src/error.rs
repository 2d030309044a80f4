//! Errors produced by tuple and matrix operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinalgError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LinalgError {
    #[error("Index {index} out of range for {kind} with {len} components")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Cannot divide {kind} by zero")]
    DivisionByZero { kind: &'static str },

    #[error("Cannot normalize zero-length {kind}")]
    DegenerateNormalization { kind: &'static str },

    #[error("Cannot invert singular {dim}x{dim} matrix")]
    SingularMatrix { dim: usize },

    #[error("Expected {expected} components when parsing {kind}, found {found}")]
    ComponentCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid component `{component}` when parsing {kind}")]
    InvalidComponent {
        kind: &'static str,
        component: String,
    },
}

impl LinalgError {
    pub(crate) fn index_out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        log::debug!("Rejected index {index} for {kind} of length {len}");
        Self::IndexOutOfRange { kind, index, len }
    }

    pub(crate) fn division_by_zero(kind: &'static str) -> Self {
        log::debug!("Rejected division of {kind} by zero");
        Self::DivisionByZero { kind }
    }

    pub(crate) fn degenerate_normalization(kind: &'static str) -> Self {
        log::debug!("Rejected normalization of zero-length {kind}");
        Self::DegenerateNormalization { kind }
    }

    pub(crate) fn singular_matrix(dim: usize) -> Self {
        log::debug!("Rejected inversion of singular {dim}x{dim} matrix");
        Self::SingularMatrix { dim }
    }

    pub(crate) fn component_count(kind: &'static str, expected: usize, found: usize) -> Self {
        log::debug!("Parsed {found} components for {kind}, expected {expected}");
        Self::ComponentCount {
            kind,
            expected,
            found,
        }
    }

    pub(crate) fn invalid_component(kind: &'static str, component: &str) -> Self {
        log::debug!("Failed to parse `{component}` as a {kind} component");
        Self::InvalidComponent {
            kind,
            component: component.to_owned(),
        }
    }
}
