//! FlowLayout - single-line flow of items along one axis.
//!
//! Items are placed one after another along the primary axis, separated by
//! a fixed gap, and never wrap. Rows and columns share one engine: sizes and
//! insets are mapped into axis space, placed, and mapped back.
//!
//! ## Placement
//!
//! ```text
//! snapshot visible items -> resolve cross extent -> look up strategy -> walk cursor
//! ```
//!
//! End alignment walks the items backward from the trailing edge; the
//! resulting rectangles still read in input order.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::primitives::{Rect, Size};

use super::align::{self, Direction, Frame};
use super::axis::{AxisRect, AxisSize};
use super::config::LayoutConfig;
use super::item::{FlowContainer, FlowItem, Visible, snapshot};
use super::length::{Alignment, Insets, LayoutConstant, Orientation};
use super::metrics::{max_cross_extent, total_placed_extent};
use super::sizing::CrossExtent;

/// Bounds assigned to one visible item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// Index of the item in the input slice.
    pub index: usize,
    /// Final rectangle in container coordinates.
    pub bounds: Rect,
}

/// A single-line flow layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowLayout {
    config: LayoutConfig,
}

impl From<LayoutConfig> for FlowLayout {
    fn from(config: LayoutConfig) -> Self {
        Self { config }
    }
}

impl std::fmt::Display for FlowLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.config, f)
    }
}

impl FlowLayout {
    /// Create a layout from per-axis constants.
    ///
    /// See [`LayoutConfig::from_constants`] for the validation rules.
    pub fn new(
        orientation: Orientation,
        horizontal: LayoutConstant,
        vertical: LayoutConstant,
        size: LayoutConstant,
        gap: i32,
    ) -> Result<Self> {
        LayoutConfig::from_constants(orientation, horizontal, vertical, size, gap).map(Self::from)
    }

    /// The configuration driving this layout.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Content size plus insets, from natural sizes only.
    ///
    /// Alignment and size mode have no influence.
    pub fn preferred_size<I: FlowItem>(&self, items: &[I], insets: Insets) -> Size {
        let orientation = self.config.orientation();
        let visible = snapshot(items, orientation);
        let insets = orientation.axis_insets(insets);

        let sizes = visible.iter().map(|v| v.size);
        let primary = total_placed_extent(sizes.clone(), self.config.gap()).wrapping_add(insets.primary());
        let cross = max_cross_extent(sizes).wrapping_add(insets.cross());

        orientation.physical_size(AxisSize::new(primary, cross))
    }

    /// Smallest useful size; identical to [`preferred_size`](Self::preferred_size).
    pub fn minimum_size<I: FlowItem>(&self, items: &[I], insets: Insets) -> Size {
        self.preferred_size(items, insets)
    }

    /// Rectangles for the visible items, in input order.
    pub fn layout<I: FlowItem>(&self, items: &[I], insets: Insets, bounds: Size) -> Vec<Rect> {
        self.place(items, insets, bounds)
            .into_iter()
            .map(|placement| placement.bounds)
            .collect()
    }

    /// Like [`layout`](Self::layout), but each rectangle carries the index
    /// of its item in `items`.
    pub fn place<I: FlowItem>(&self, items: &[I], insets: Insets, bounds: Size) -> Vec<Placement> {
        let orientation = self.config.orientation();
        let visible = snapshot(items, orientation);
        let frame = Frame {
            bounds: orientation.axis_size(bounds),
            insets: orientation.axis_insets(insets),
        };

        tracing::trace!(
            orientation = %orientation,
            visible = visible.len(),
            width = bounds.width,
            height = bounds.height,
            "flow layout pass"
        );

        self.place_visible(&visible, frame)
    }

    /// Lay out a container's children and hand each its bounds.
    pub fn layout_container<C: FlowContainer>(&self, container: &mut C) {
        let placements = self.place(container.items(), container.insets(), container.size());
        for placement in placements {
            container.set_item_bounds(placement.index, placement.bounds);
        }
    }

    fn place_visible(&self, visible: &[Visible], frame: Frame) -> Vec<Placement> {
        let config = &self.config;
        let sizes: Vec<AxisSize> = visible.iter().map(|v| v.size).collect();

        let cross = CrossExtent::resolve(config.size_mode(), &sizes, frame.bounds, frame.insets);
        let cross_alignment = if cross.is_fill() {
            Alignment::Start
        } else {
            config.cross_alignment()
        };
        let strategy = align::lookup(config.primary_alignment(), cross_alignment);

        let gap = config.gap();
        let total = total_placed_extent(sizes.iter().copied(), gap);
        if total > frame.inner_primary() {
            tracing::debug!(
                "flow content overflows: {} placed on {} available",
                total,
                frame.inner_primary()
            );
        }

        let orientation = config.orientation();
        let n = visible.len();
        let mut placements = vec![Placement::default(); n];
        let mut cursor = (strategy.cursor_start)(&frame, total);

        for step in 0..n {
            let slot = match strategy.direction {
                Direction::Forward => step,
                Direction::Reverse => n - 1 - step,
            };
            let item = visible[slot];
            let primary_extent = item.size.primary;
            let cross_extent = cross.extent_for(item.size);

            if strategy.direction == Direction::Reverse {
                cursor = cursor.wrapping_sub(primary_extent);
            }

            let rect = AxisRect {
                primary_offset: cursor,
                cross_offset: (strategy.cross_offset)(&frame, cross_extent),
                primary_extent,
                cross_extent,
            };
            placements[slot] = Placement {
                index: item.index,
                bounds: orientation.physical_rect(rect),
            };

            match strategy.direction {
                Direction::Forward => cursor = cursor.wrapping_add(primary_extent).wrapping_add(gap),
                Direction::Reverse => cursor = cursor.wrapping_sub(gap),
            }
        }

        placements
    }
}
