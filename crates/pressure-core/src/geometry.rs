#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are `f64` in the root layout's coordinate space (origin at the
//! top-left, y grows downwards).

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow both axes by the given padding totals.
    #[inline]
    pub fn padded(self, padding: Padding) -> Self {
        Self::new(
            self.width + padding.horizontal,
            self.height + padding.vertical,
        )
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl From<Size> for (f64, f64) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// A positioned rectangle: what a leaf reports through its box query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (right/bottom edges excluded).
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The same rectangle moved by `(dx, dy)`.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrink by the padding, half of each total on either side.
    ///
    /// Dimensions never go below zero.
    pub fn inner(&self, padding: Padding) -> Rect {
        let (left, top) = padding.leading();
        Rect::new(
            self.x + left,
            self.y + top,
            (self.width - padding.horizontal).max(0.0),
            (self.height - padding.vertical).max(0.0),
        )
    }

    /// The smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Compute the intersection with another rectangle, returning `None` if
    /// the overlap has no area.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Whether the two rectangles share a region of positive area.
    ///
    /// Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersection_opt(other).is_some()
    }

    /// `(x, y, width, height)`.
    #[inline]
    pub const fn into_tuple(self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }
}

impl From<Rect> for (f64, f64, f64, f64) {
    fn from(rect: Rect) -> Self {
        rect.into_tuple()
    }
}

/// Padding totals per axis.
///
/// `horizontal` is the sum of left and right padding; each side gets half.
/// Same for `vertical`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Padding {
    /// The stock padding applied to adopted children: 5 on each axis.
    pub const DEFAULT: Self = Self::new(5.0, 5.0);

    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Same total on both axes.
    #[inline]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value)
    }

    /// Left and top insets (half of each total).
    #[inline]
    pub fn leading(&self) -> (f64, f64) {
        (self.horizontal / 2.0, self.vertical / 2.0)
    }

    /// Both totals are finite and non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.horizontal.is_finite()
            && self.vertical.is_finite()
            && self.horizontal >= 0.0
            && self.vertical >= 0.0
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

impl From<(f64, f64)> for Padding {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Self::new(horizontal, vertical)
    }
}
