#![forbid(unsafe_code)]

//! The layout engine: a group node that positions its children.

use pressure_core::geometry::{Padding, Rect, Size};
use pressure_core::{debug, debug_span};

use crate::element::Element;
use crate::error::Result;
use crate::node::{Child, Leaf, Node, adapt};
use crate::pack::{self, PackPlan};
use crate::{Alignment, LayoutConfig};

/// An ordered group of children plus the strategies that place them.
///
/// Children keep absolute coordinates. The layout's own size is derived from
/// them on every read: the bounding extent measured from the layout origin,
/// with the leading inset mirrored on the trailing side. A width or height
/// forced by a parent's column commit overrides the derived value until the
/// next alignment of this layout.
#[derive(Debug, Clone)]
pub struct Layout<E> {
    config: LayoutConfig,
    children: Vec<Node<E>>,
    x: f64,
    y: f64,
    forced_width: Option<f64>,
    forced_height: Option<f64>,
}

impl<E> Default for Layout<E> {
    fn default() -> Self {
        Self::from_nodes(Vec::new(), LayoutConfig::default())
    }
}

impl<E: Element> Layout<E> {
    /// Adopt `children` and run the configured alignment once.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration or on the first child that cannot
    /// be adapted; nothing is built in that case.
    pub fn new<I, C>(children: I, config: LayoutConfig) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child<E>>,
    {
        config.validate()?;
        let nodes = adapt_all(children, config.child_padding)?;
        let mut layout = Self::from_nodes(nodes, config);
        layout.align(config.align);
        Ok(layout)
    }

    /// Build from raw elements.
    pub fn from_elements<I>(elements: I, config: LayoutConfig) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
    {
        Self::new(elements.into_iter().map(Child::Element), config)
    }

    /// Add a group of children.
    ///
    /// A single child is adopted as-is. Several children become one nested
    /// layout that inherits this layout's configuration and is aligned with
    /// its alignment. Does not reflow `self`.
    pub fn add_children<I, C>(&mut self, children: I) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child<E>>,
    {
        self.add_children_with(children, self.config.align)
    }

    /// Like [`add_children`](Self::add_children) with an explicit alignment
    /// for the nested group.
    pub fn add_children_with<I, C>(&mut self, children: I, align: Alignment) -> Result<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child<E>>,
    {
        let mut nodes = adapt_all(children, self.config.child_padding)?;
        let node = match nodes.len() {
            0 => return Ok(()),
            1 => nodes.remove(0),
            _ => {
                let config = self.config.align(align);
                let mut group = Self::from_nodes(nodes, config);
                group.align(align);
                Node::Group(group)
            }
        };
        self.adopt(node);
        Ok(())
    }

    /// Adopt exactly one child. Does not reflow.
    pub fn push(&mut self, child: impl Into<Child<E>>) -> Result<()> {
        let node = adapt(child.into(), self.config.child_padding)?;
        self.adopt(node);
        Ok(())
    }

    /// Adopt one raw element. Does not reflow.
    pub fn push_element(&mut self, element: E) -> Result<()> {
        self.push(Child::Element(element))
    }
}

impl<E> Layout<E> {
    /// A layout with no children.
    ///
    /// # Errors
    ///
    /// Rejects an invalid configuration.
    pub fn empty(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_nodes(Vec::new(), config))
    }

    fn from_nodes(children: Vec<Node<E>>, config: LayoutConfig) -> Self {
        Self {
            config,
            children,
            x: 0.0,
            y: 0.0,
            forced_width: None,
            forced_height: None,
        }
    }

    /// New children start at the layout origin.
    fn adopt(&mut self, mut node: Node<E>) {
        node.set_position(self.x, self.y);
        self.children.push(node);
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Target width/height ratio used by [`optimize`](Self::optimize).
    pub fn ratio(&self) -> f64 {
        self.config.ratio
    }

    pub fn alignment(&self) -> Alignment {
        self.config.align
    }

    pub fn children(&self) -> &[Node<E>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // --- Box model ---------------------------------------------------------

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.forced_width.unwrap_or_else(|| self.extent().width)
    }

    pub fn height(&self) -> f64 {
        self.forced_height.unwrap_or_else(|| self.extent().height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    /// Derived size, ignoring anything forced by a parent.
    pub fn natural_size(&self) -> Size {
        self.extent()
    }

    pub fn padding(&self) -> Padding {
        self.config.padding
    }

    fn extent(&self) -> Size {
        let Some(first) = self.children.first() else {
            return Size::ZERO;
        };
        let bounds = self
            .children
            .iter()
            .skip(1)
            .fold(first.rect(), |acc, child| acc.union(&child.rect()));
        let lead_x = bounds.left() - self.x;
        let lead_y = bounds.top() - self.y;
        Size::new(
            bounds.right() - self.x + lead_x,
            bounds.bottom() - self.y + lead_y,
        )
    }

    /// Move the layout to `(x, y)`, carrying every descendant by the delta.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.translate(x - self.x, y - self.y);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    /// Change the layout's horizontal padding.
    ///
    /// Children shift by half the delta, so the derived width moves by
    /// exactly the delta.
    pub fn set_padding_horizontal(&mut self, padding: f64) {
        let delta = padding - self.config.padding.horizontal;
        self.config.padding.horizontal = padding;
        if let Some(width) = self.forced_width.as_mut() {
            *width += delta;
        }
        for child in &mut self.children {
            child.translate(delta / 2.0, 0.0);
        }
    }

    /// Vertical counterpart of
    /// [`set_padding_horizontal`](Self::set_padding_horizontal).
    pub fn set_padding_vertical(&mut self, padding: f64) {
        let delta = padding - self.config.padding.vertical;
        self.config.padding.vertical = padding;
        if let Some(height) = self.forced_height.as_mut() {
            *height += delta;
        }
        for child in &mut self.children {
            child.translate(0.0, delta / 2.0);
        }
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        let padding = padding.into();
        self.set_padding_horizontal(padding.horizontal);
        self.set_padding_vertical(padding.vertical);
    }

    /// Override the derived width, e.g. to line up a packed column.
    pub fn force_width(&mut self, width: f64) {
        self.forced_width = Some(width);
    }

    pub fn force_height(&mut self, height: f64) {
        self.forced_height = Some(height);
    }

    /// Drop forced dimensions and go back to the derived size.
    pub fn reset_size(&mut self) {
        self.forced_width = None;
        self.forced_height = None;
    }

    // --- Strategies --------------------------------------------------------

    /// Run one strategy and return the resulting `(width, height)`.
    pub fn align(&mut self, align: Alignment) -> Size {
        match align {
            Alignment::Horizontal => self.align_horizontal(),
            Alignment::Vertical => self.align_vertical(),
            Alignment::Optimized => self.optimize(),
        }
    }

    /// Re-align nested layouts bottom-up, then this one with its configured
    /// alignment.
    pub fn reflow(&mut self) -> Size {
        for child in &mut self.children {
            if let Some(group) = child.as_group_mut() {
                group.reflow();
            }
        }
        self.align(self.config.align)
    }

    /// One row, left to right, top edges at the layout's `y`.
    ///
    /// Width is the sum of child widths and height the tallest child.
    pub fn align_horizontal(&mut self) -> Size {
        let span = debug_span!(
            "layout_align",
            direction = "horizontal",
            children = self.children.len()
        );
        let _guard = span.enter();

        self.reset_size();
        let (x, y) = (self.x, self.y);
        let mut offset = 0.0;
        let mut height = 0.0_f64;
        for child in &mut self.children {
            child.reset_size();
            child.set_position(x + offset, y);
            offset += child.width();
            height = height.max(child.height());
        }
        Size::new(offset, height)
    }

    /// One column, top to bottom, left edges at the layout's `x`.
    ///
    /// Width is the widest child and height the sum of child heights.
    pub fn align_vertical(&mut self) -> Size {
        let span = debug_span!(
            "layout_align",
            direction = "vertical",
            children = self.children.len()
        );
        let _guard = span.enter();

        self.reset_size();
        let (x, y) = (self.x, self.y);
        let mut offset = 0.0;
        let mut width = 0.0_f64;
        for child in &mut self.children {
            child.reset_size();
            child.set_position(x, y + offset);
            offset += child.height();
            width = width.max(child.width());
        }
        Size::new(width, offset)
    }

    /// Pack children into columns approximating the target ratio.
    ///
    /// The whole plan is computed before any child moves. Returns the packed
    /// columns' extent plus this layout's padding; `(0, 0)` when empty.
    pub fn optimize(&mut self) -> Size {
        let span = debug_span!("layout_optimize", children = self.children.len());
        let _guard = span.enter();

        self.reset_size();
        if self.children.is_empty() {
            return Size::ZERO;
        }
        let plan = self.plan();
        self.commit(&plan)
    }

    /// The partition [`optimize`](Self::optimize) would commit, without
    /// moving anything.
    pub fn plan(&self) -> PackPlan {
        let sizes: Vec<Size> = self.children.iter().map(Node::natural_size).collect();
        pack::plan(&sizes, self.config.ratio, self.config.slack)
    }

    fn commit(&mut self, plan: &PackPlan) -> Size {
        let padding = self.config.padding;
        let (lead_x, lead_y) = padding.leading();
        let origin_y = self.y + lead_y;
        let mut x = self.x + lead_x;
        let mut tallest = 0.0_f64;

        for column in plan.columns() {
            let mut y = origin_y;
            for &index in column.members() {
                let child = &mut self.children[index];
                child.reset_size();
                child.force_width(column.width());
                child.set_position(x, y);
                y += child.height();
            }
            tallest = tallest.max(y - origin_y);
            x += column.width();
        }

        let size = Size::new(
            x - self.x - lead_x + padding.horizontal,
            tallest + padding.vertical,
        );
        debug!(
            columns = plan.column_count(),
            width = size.width,
            height = size.height,
            "optimized layout committed"
        );
        size
    }

    // --- Consumer queries --------------------------------------------------

    /// Every leaf, depth-first, in insertion order.
    pub fn leaves(&self) -> Leaves<'_, E> {
        Leaves {
            stack: vec![self.children.iter()],
        }
    }

    /// `(element, box)` for every leaf, ready for a renderer.
    pub fn boxes(&self) -> Vec<(&E, Rect)> {
        self.leaves()
            .map(|leaf| (leaf.element(), leaf.rect()))
            .collect()
    }
}

fn adapt_all<E, I, C>(children: I, padding: Padding) -> Result<Vec<Node<E>>>
where
    E: Element,
    I: IntoIterator<Item = C>,
    C: Into<Child<E>>,
{
    children
        .into_iter()
        .map(|child| adapt(child.into(), padding))
        .collect()
}

/// Depth-first iterator over a layout's leaves.
#[derive(Debug)]
pub struct Leaves<'a, E> {
    stack: Vec<std::slice::Iter<'a, Node<E>>>,
}

impl<'a, E> Iterator for Leaves<'a, E> {
    type Item = &'a Leaf<E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.stack.last_mut()?.next();
            match next {
                Some(Node::Leaf(leaf)) => return Some(leaf),
                Some(Node::Group(group)) => self.stack.push(group.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
