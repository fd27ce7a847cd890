#![forbid(unsafe_code)]

//! Box model: leaves, layout nodes, and element adoption.
//!
//! Every node stores absolute coordinates in the root's space. Moving a group
//! moves every descendant by the same delta.

use pressure_core::geometry::{Padding, Rect, Size};

use crate::{Layout, check_padding};
use crate::element::{Element, measure};
use crate::error::Result;

/// A box wrapping one externally owned element.
///
/// The stored width/height are the element's intrinsic size plus padding.
/// The element is drawn inside [`content_rect`](Self::content_rect).
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf<E> {
    element: E,
    intrinsic: Size,
    padding: Padding,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl<E: Element> Leaf<E> {
    /// Wrap an element, reading its width and height once.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidElement`](crate::LayoutError::InvalidElement) when
    /// either axis is unreadable, negative, or not finite;
    /// [`LayoutError::InvalidPadding`](crate::LayoutError::InvalidPadding) for
    /// negative or non-finite padding.
    pub fn new(element: E, padding: impl Into<Padding>) -> Result<Self> {
        Self::with_size(element, None, None, padding)
    }

    /// Wrap an element, overriding its intrinsic width and/or height.
    ///
    /// An axis that is overridden is never read from the element.
    pub fn with_size(
        element: E,
        width: Option<f64>,
        height: Option<f64>,
        padding: impl Into<Padding>,
    ) -> Result<Self> {
        let padding = check_padding(padding.into())?;
        let intrinsic = measure(&element, width, height)?;
        Ok(Self::from_parts(element, intrinsic, padding))
    }
}

impl<E> Leaf<E> {
    fn from_parts(element: E, intrinsic: Size, padding: Padding) -> Self {
        let size = intrinsic.padded(padding);
        Self {
            element,
            intrinsic,
            padding,
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Re-wrap the underlying element with new padding.
    ///
    /// The intrinsic size is kept, the position goes back to the origin and
    /// any forced width is dropped. The result never nests wrappers.
    #[must_use]
    pub fn rewrap(self, padding: impl Into<Padding>) -> Self {
        Self::from_parts(self.element, self.intrinsic, padding.into())
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    /// Element size without padding.
    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The box query: `(x, y, width, height)` including padding.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Where the element itself sits: the box minus padding.
    pub fn content_rect(&self) -> Rect {
        self.rect().inner(self.padding)
    }

    /// Intrinsic size plus padding, ignoring any forced width.
    pub fn natural_size(&self) -> Size {
        self.intrinsic.padded(self.padding)
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Change horizontal padding; width moves by exactly the delta.
    pub fn set_padding_horizontal(&mut self, padding: f64) {
        self.width += padding - self.padding.horizontal;
        self.padding.horizontal = padding;
    }

    /// Change vertical padding; height moves by exactly the delta.
    pub fn set_padding_vertical(&mut self, padding: f64) {
        self.height += padding - self.padding.vertical;
        self.padding.vertical = padding;
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        let padding = padding.into();
        self.set_padding_horizontal(padding.horizontal);
        self.set_padding_vertical(padding.vertical);
    }

    /// Stretch (or shrink) the box to `width`, e.g. to line up a column.
    pub fn force_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Drop any forced width and return to the natural size.
    pub fn reset_size(&mut self) {
        let natural = self.natural_size();
        self.width = natural.width;
        self.height = natural.height;
    }
}

/// A child of a [`Layout`]: either a leaf or a nested layout.
#[derive(Debug, Clone)]
pub enum Node<E> {
    Leaf(Leaf<E>),
    Group(Layout<E>),
}

impl<E> Node<E> {
    pub fn x(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.x(),
            Self::Group(group) => group.x(),
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.y(),
            Self::Group(group) => group.y(),
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.width(),
            Self::Group(group) => group.width(),
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.height(),
            Self::Group(group) => group.height(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x(), self.y(), self.width(), self.height())
    }

    /// Size before any width forced by a parent's column commit.
    pub fn natural_size(&self) -> Size {
        match self {
            Self::Leaf(leaf) => leaf.natural_size(),
            Self::Group(group) => group.natural_size(),
        }
    }

    pub fn padding(&self) -> Padding {
        match self {
            Self::Leaf(leaf) => leaf.padding(),
            Self::Group(group) => group.padding(),
        }
    }

    /// Move to `(x, y)`; groups carry their descendants along.
    pub fn set_position(&mut self, x: f64, y: f64) {
        match self {
            Self::Leaf(leaf) => leaf.set_position(x, y),
            Self::Group(group) => group.set_position(x, y),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Self::Leaf(leaf) => leaf.translate(dx, dy),
            Self::Group(group) => group.translate(dx, dy),
        }
    }

    pub fn set_padding_horizontal(&mut self, padding: f64) {
        match self {
            Self::Leaf(leaf) => leaf.set_padding_horizontal(padding),
            Self::Group(group) => group.set_padding_horizontal(padding),
        }
    }

    pub fn set_padding_vertical(&mut self, padding: f64) {
        match self {
            Self::Leaf(leaf) => leaf.set_padding_vertical(padding),
            Self::Group(group) => group.set_padding_vertical(padding),
        }
    }

    pub fn force_width(&mut self, width: f64) {
        match self {
            Self::Leaf(leaf) => leaf.force_width(width),
            Self::Group(group) => group.force_width(width),
        }
    }

    pub fn reset_size(&mut self) {
        match self {
            Self::Leaf(leaf) => leaf.reset_size(),
            Self::Group(group) => group.reset_size(),
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf<E>> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Layout<E>> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(group) => Some(group),
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut Layout<E>> {
        match self {
            Self::Leaf(_) => None,
            Self::Group(group) => Some(group),
        }
    }
}

impl<E> From<Leaf<E>> for Node<E> {
    fn from(leaf: Leaf<E>) -> Self {
        Self::Leaf(leaf)
    }
}

impl<E> From<Layout<E>> for Node<E> {
    fn from(layout: Layout<E>) -> Self {
        Self::Group(layout)
    }
}

/// Anything a layout can adopt: a raw element or an existing node.
#[derive(Debug, Clone)]
pub enum Child<E> {
    Element(E),
    Node(Node<E>),
}

impl<E> From<Node<E>> for Child<E> {
    fn from(node: Node<E>) -> Self {
        Self::Node(node)
    }
}

impl<E> From<Leaf<E>> for Child<E> {
    fn from(leaf: Leaf<E>) -> Self {
        Self::Node(Node::Leaf(leaf))
    }
}

impl<E> From<Layout<E>> for Child<E> {
    fn from(layout: Layout<E>) -> Self {
        Self::Node(Node::Group(layout))
    }
}

/// Turn a child into a node.
///
/// Existing nodes come back untouched, so adopting an already wrapped leaf
/// never produces a wrapper-of-wrapper. Raw elements become leaves with
/// `padding`.
pub fn adapt<E: Element>(child: Child<E>, padding: Padding) -> Result<Node<E>> {
    match child {
        Child::Element(element) => Ok(Node::Leaf(Leaf::new(element, padding)?)),
        Child::Node(node) => Ok(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, LayoutError};
    use std::rc::Rc;

    #[derive(Debug)]
    struct Unsized;

    impl Element for Unsized {
        fn width(&self) -> Option<f64> {
            None
        }

        fn height(&self) -> Option<f64> {
            None
        }
    }

    #[test]
    fn leaf_adds_padding_to_intrinsic_size() {
        let leaf = Leaf::new((10.0, 20.0), Padding::DEFAULT).unwrap();
        assert_eq!(leaf.intrinsic_size(), Size::new(10.0, 20.0));
        assert_eq!(leaf.rect(), Rect::new(0.0, 0.0, 15.0, 25.0));
        assert_eq!(leaf.content_rect(), Rect::new(2.5, 2.5, 10.0, 20.0));
    }

    #[test]
    fn explicit_size_skips_unreadable_element() {
        let leaf = Leaf::with_size(Unsized, Some(4.0), Some(6.0), Padding::ZERO).unwrap();
        assert_eq!(leaf.natural_size(), Size::new(4.0, 6.0));
    }

    #[test]
    fn unreadable_element_is_invalid() {
        let err = Leaf::new(Unsized, Padding::DEFAULT).unwrap_err();
        let LayoutError::InvalidElement(inner) = err else {
            panic!("expected InvalidElement, got {err:?}");
        };
        assert_eq!(inner.axis, Axis::Width);
        assert_eq!(inner.value, None);
    }

    #[test]
    fn invalid_padding_is_rejected() {
        let err = Leaf::new((1.0, 1.0), Padding::new(-3.0, 0.0)).unwrap_err();
        assert_eq!(err, LayoutError::InvalidPadding(Padding::new(-3.0, 0.0)));
        assert!(Leaf::new((1.0, 1.0), Padding::uniform(f64::NAN)).is_err());
    }

    #[test]
    fn padding_changes_shift_size_by_delta() {
        let mut leaf = Leaf::new((10.0, 10.0), Padding::DEFAULT).unwrap();
        leaf.set_padding_horizontal(8.0);
        assert_eq!(leaf.width(), 18.0);
        leaf.set_padding_horizontal(2.0);
        assert_eq!(leaf.width(), 12.0);
        leaf.set_padding_vertical(0.0);
        assert_eq!(leaf.height(), 10.0);
        assert_eq!(leaf.intrinsic_size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn padding_change_keeps_forced_width_offset() {
        let mut leaf = Leaf::new((10.0, 10.0), Padding::DEFAULT).unwrap();
        leaf.force_width(40.0);
        leaf.set_padding_horizontal(7.0);
        assert_eq!(leaf.width(), 42.0);
        leaf.reset_size();
        assert_eq!(leaf.width(), 17.0);
    }

    #[test]
    fn rewrap_unwraps_and_applies_new_padding() {
        let element = Rc::new((3.0, 4.0));
        let mut leaf = Leaf::new(Rc::clone(&element), Padding::DEFAULT).unwrap();
        leaf.set_position(10.0, 10.0);
        let rewrapped = leaf.rewrap(Padding::new(1.0, 2.0));
        assert!(Rc::ptr_eq(rewrapped.element(), &element));
        assert_eq!(rewrapped.rect(), Rect::new(0.0, 0.0, 4.0, 6.0));
    }

    #[test]
    fn adapt_returns_existing_node_unchanged() {
        let element = Rc::new((3.0, 4.0));
        let mut leaf = Leaf::new(Rc::clone(&element), Padding::uniform(2.0)).unwrap();
        leaf.set_position(7.0, 9.0);
        let before = leaf.clone();

        let node = adapt(Child::from(leaf), Padding::DEFAULT).unwrap();
        let adopted = node.as_leaf().expect("leaf");
        assert_eq!(adopted, &before);
        assert!(Rc::ptr_eq(adopted.element(), &element));
    }

    #[test]
    fn adapt_wraps_raw_elements() {
        let node = adapt(Child::Element((1.0, 1.0)), Padding::uniform(4.0)).unwrap();
        assert_eq!(node.rect(), Rect::new(0.0, 0.0, 5.0, 5.0));
        assert!(adapt(Child::Element(Unsized), Padding::DEFAULT).is_err());
    }

    #[test]
    fn zero_size_element_is_valid() {
        let leaf = Leaf::new(Size::ZERO, Padding::ZERO).unwrap();
        assert!(leaf.rect().is_empty());
    }
}
