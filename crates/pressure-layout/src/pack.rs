#![forbid(unsafe_code)]

//! Column-packing heuristic.
//!
//! For every candidate column count `k` in `1..=N` the items are walked
//! widest-first and dropped into the first column whose height stays strictly
//! under a cap of `total_height / k * slack`; an item that fits nowhere opens a
//! new column. Each resulting partition is scored as
//! `width + ratio * height` (sum of column widths, tallest column) and the
//! first strictly lowest score wins.
//!
//! Greedy and bounded: `O(N² · k)` work, meant for dozens of boxes, not an
//! exact rectangle packer.
//!
//! Everything here works on plain [`Size`]s and indices; committing positions
//! back onto nodes is the layout's job.

use pressure_core::geometry::Size;
use pressure_core::{debug, trace};

/// Default slack over the ideal even split when capping column heights.
pub const DEFAULT_SLACK: f64 = 1.05;

/// One column of a partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    members: Vec<usize>,
    width: f64,
    height: f64,
}

impl Column {
    fn open(index: usize, size: Size) -> Self {
        Self {
            members: vec![index],
            width: size.width,
            height: size.height,
        }
    }

    fn push(&mut self, index: usize, size: Size) {
        self.members.push(index);
        self.width = self.width.max(size.width);
        self.height += size.height;
    }

    /// Item indices, top to bottom.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Widest member; every member is stretched to this on commit.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sum of member heights.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Columns produced for one candidate `k`, with their combined extent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partition {
    columns: Vec<Column>,
    width: f64,
    height: f64,
    score: f64,
}

impl Partition {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Sum of column widths.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the tallest column.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// `width + ratio * height`; lower is better.
    pub fn score(&self) -> f64 {
        self.score
    }

    fn restore_insertion_order(&mut self) {
        for column in &mut self.columns {
            column.members.sort_unstable();
        }
    }
}

/// The winning partition, ready to commit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackPlan {
    partition: Partition,
    candidate: usize,
    evaluated: usize,
}

impl PackPlan {
    /// Columns left to right; members within a column are in insertion order.
    pub fn columns(&self) -> &[Column] {
        self.partition.columns()
    }

    pub fn column_count(&self) -> usize {
        self.partition.column_count()
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn score(&self) -> f64 {
        self.partition.score()
    }

    /// Unpadded extent of the packed columns.
    pub fn size(&self) -> Size {
        self.partition.size()
    }

    /// The column count `k` whose height cap produced this plan (0 when empty).
    pub fn candidate(&self) -> usize {
        self.candidate
    }

    /// How many candidate column counts were scored.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    pub fn is_empty(&self) -> bool {
        self.partition.columns.is_empty()
    }
}

/// Item indices sorted widest first; ties keep their original order.
pub fn order_by_width(sizes: &[Size]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..sizes.len()).collect();
    order.sort_by(|&a, &b| sizes[b].width.total_cmp(&sizes[a].width));
    order
}

/// Greedy partition for one candidate column count.
///
/// `order` is the visiting order (normally [`order_by_width`]); members are
/// recorded in that order. `k` is clamped to at least 1.
pub fn partition(sizes: &[Size], order: &[usize], k: usize, ratio: f64, slack: f64) -> Partition {
    let total_height: f64 = sizes.iter().map(|s| s.height).sum();
    let height_cap = total_height / k.max(1) as f64 * slack;

    let mut columns: Vec<Column> = Vec::new();
    for &index in order {
        let size = sizes[index];
        match columns
            .iter_mut()
            .find(|column| column.height + size.height < height_cap)
        {
            Some(column) => column.push(index, size),
            None => columns.push(Column::open(index, size)),
        }
    }

    let width: f64 = columns.iter().map(Column::width).sum();
    let height = columns.iter().map(Column::height).fold(0.0, f64::max);
    Partition {
        columns,
        width,
        height,
        score: width + ratio * height,
    }
}

/// Try every column count in `1..=N` and keep the lowest-scoring partition.
///
/// Ties keep the smaller `k`. The winner's columns have their members put back
/// into insertion order before it is returned. No items means an empty plan.
pub fn plan(sizes: &[Size], ratio: f64, slack: f64) -> PackPlan {
    if sizes.is_empty() {
        return PackPlan::default();
    }

    let order = order_by_width(sizes);
    let mut best: Option<(usize, Partition)> = None;
    for k in 1..=sizes.len() {
        let candidate = partition(sizes, &order, k, ratio, slack);
        trace!(
            k,
            columns = candidate.column_count(),
            width = candidate.width,
            height = candidate.height,
            score = candidate.score,
            "packing candidate"
        );
        let improves = best
            .as_ref()
            .is_none_or(|(_, current)| candidate.score < current.score);
        if improves {
            best = Some((k, candidate));
        }
    }

    let (k, mut partition) = best.unwrap_or_default();
    partition.restore_insertion_order();
    debug!(
        k,
        columns = partition.column_count(),
        score = partition.score,
        "packing plan chosen"
    );
    PackPlan {
        partition,
        candidate: k,
        evaluated: sizes.len(),
    }
}
