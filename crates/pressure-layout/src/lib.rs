#![forbid(unsafe_code)]

//! Box layout and column packing.
//!
//! This crate arranges sized elements into a non-overlapping layout:
//!
//! - [`Leaf`] - a padded box around one externally owned [`Element`]
//! - [`Layout`] - a group of leaves and nested layouts, with three strategies:
//!   [`Layout::align_horizontal`], [`Layout::align_vertical`] and
//!   [`Layout::optimize`]
//! - [`pack`] - the column-packing heuristic behind `optimize`
//!
//! # Example
//!
//! ```
//! use pressure_layout::{Alignment, Layout, LayoutConfig};
//!
//! let mut layout = Layout::from_elements(
//!     [(40.0, 20.0), (10.0, 30.0), (25.0, 25.0)],
//!     LayoutConfig::default().align(Alignment::Optimized),
//! )
//! .unwrap();
//!
//! // Children were placed at construction; add one more and reflow.
//! layout.push_element((5.0, 5.0)).unwrap();
//! let size = layout.optimize();
//!
//! for (_element, rect) in layout.boxes() {
//!     assert!(rect.right() <= size.width && rect.bottom() <= size.height);
//! }
//! ```

pub mod element;
pub mod error;
pub mod layout;
pub mod node;
pub mod pack;

pub use element::Element;
pub use error::{Axis, InvalidElementError, LayoutError, Result};
pub use layout::{Layout, Leaves};
pub use node::{Child, Leaf, Node, adapt};
pub use pack::{Column, PackPlan, Partition};
pub use pressure_core::geometry::{Padding, Rect, Size};

/// The golden ratio, `(1 + √5) / 2`: the default target width/height.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Which strategy places a layout's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// A single row, left to right.
    Horizontal,
    /// A single column, top to bottom.
    Vertical,
    /// Column packing scored against the target ratio.
    #[default]
    Optimized,
}

/// Layout configuration.
///
/// Built with chained setters:
///
/// ```
/// use pressure_layout::{Alignment, LayoutConfig, Padding};
///
/// let config = LayoutConfig::new()
///     .ratio(16.0 / 9.0)
///     .align(Alignment::Vertical)
///     .child_padding(Padding::new(8.0, 4.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Target width/height ratio, used only when scoring packings.
    pub ratio: f64,
    /// Strategy run at construction and by [`Layout::reflow`].
    pub align: Alignment,
    /// The layout's own padding; `optimize` insets columns by half of it.
    pub padding: Padding,
    /// Padding given to raw elements when they are adopted.
    pub child_padding: Padding,
    /// Multiplier over the even split when capping column heights.
    pub slack: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ratio: GOLDEN_RATIO,
            align: Alignment::default(),
            padding: Padding::DEFAULT,
            child_padding: Padding::DEFAULT,
            slack: pack::DEFAULT_SLACK,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target width/height ratio.
    #[must_use]
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set the alignment strategy.
    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the layout's own padding.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the padding for adopted elements.
    #[must_use]
    pub fn child_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.child_padding = padding.into();
        self
    }

    /// Set the column height-cap slack.
    #[must_use]
    pub fn slack(mut self, slack: f64) -> Self {
        self.slack = slack;
        self
    }

    /// Check that ratio and slack are usable.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidRatio`] or [`LayoutError::InvalidSlack`] for a
    /// value that is not finite and positive, [`LayoutError::InvalidPadding`]
    /// for either padding with a negative or non-finite total.
    pub fn validate(&self) -> Result<()> {
        if !(self.ratio.is_finite() && self.ratio > 0.0) {
            return Err(LayoutError::InvalidRatio(self.ratio));
        }
        if !(self.slack.is_finite() && self.slack > 0.0) {
            return Err(LayoutError::InvalidSlack(self.slack));
        }
        check_padding(self.padding)?;
        check_padding(self.child_padding)?;
        Ok(())
    }
}

pub(crate) fn check_padding(padding: Padding) -> Result<Padding> {
    if padding.is_valid() {
        Ok(padding)
    } else {
        Err(LayoutError::InvalidPadding(padding))
    }
}
