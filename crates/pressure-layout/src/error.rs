#![forbid(unsafe_code)]

//! Errors raised while adopting elements or configuring a layout.

use std::fmt;

use pressure_core::geometry::Padding;

/// One of the two box axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// An element could not be measured.
///
/// `value` is `None` when the element exposes no readable value for `axis`
/// and the caller gave no explicit override; otherwise it holds the rejected
/// (non-finite or negative) value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidElementError {
    pub axis: Axis,
    pub value: Option<f64>,
}

impl InvalidElementError {
    pub(crate) const fn missing(axis: Axis) -> Self {
        Self { axis, value: None }
    }

    pub(crate) const fn rejected(axis: Axis, value: f64) -> Self {
        Self {
            axis,
            value: Some(value),
        }
    }
}

impl fmt::Display for InvalidElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            None => write!(f, "element has no readable {}", self.axis),
            Some(value) => write!(f, "element {} must be finite and >= 0, got {value}", self.axis),
        }
    }
}

impl std::error::Error for InvalidElementError {}

/// Failure building or configuring a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// An element could not be adapted into a leaf.
    InvalidElement(InvalidElementError),
    /// Target aspect ratio must be finite and positive.
    InvalidRatio(f64),
    /// Height-cap slack factor must be finite and positive.
    InvalidSlack(f64),
    /// Padding totals must be finite and non-negative.
    InvalidPadding(Padding),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidElement(err) => write!(f, "invalid element: {err}"),
            Self::InvalidRatio(ratio) => {
                write!(f, "layout ratio must be finite and > 0, got {ratio}")
            }
            Self::InvalidSlack(slack) => {
                write!(f, "height-cap slack must be finite and > 0, got {slack}")
            }
            Self::InvalidPadding(padding) => write!(
                f,
                "padding must be finite and >= 0, got {}x{}",
                padding.horizontal, padding.vertical
            ),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::InvalidElement(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<InvalidElementError> for LayoutError {
    fn from(err: InvalidElementError) -> Self {
        Self::InvalidElement(err)
    }
}

/// Standard result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
