#![forbid(unsafe_code)]

//! Pressure public facade crate.
//!
//! Re-exports the box model and layout engine and offers a small prelude.
//!
//! ```
//! use pressure::prelude::*;
//!
//! fn pack(items: &[(f64, f64)]) -> pressure::Result<Vec<Rect>> {
//!     let layout = Layout::from_elements(items.iter().copied(), LayoutConfig::default())?;
//!     Ok(layout.boxes().into_iter().map(|(_, rect)| rect).collect())
//! }
//!
//! assert_eq!(pack(&[(10.0, 10.0), (20.0, 5.0)]).unwrap().len(), 2);
//! ```

use std::fmt;

// --- Geometry re-exports ---------------------------------------------------

pub use pressure_core::geometry::{Padding, Rect, Size};

// --- Layout re-exports -----------------------------------------------------

pub use pressure_layout::{
    Alignment, Axis, Child, Element, GOLDEN_RATIO, InvalidElementError, Layout, LayoutConfig,
    LayoutError, Leaf, Node, PackPlan, adapt,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for pressure.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Building or configuring a layout failed.
    Layout(LayoutError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<InvalidElementError> for Error {
    fn from(err: InvalidElementError) -> Self {
        Self::Layout(err.into())
    }
}

/// Standard result type for pressure APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Child, Element, Error, Layout, LayoutConfig, Leaf, Node, Padding, Rect,
        Result, Size,
    };

    pub use crate::{core, layout};
}

pub use pressure_core as core;
pub use pressure_layout as layout;
