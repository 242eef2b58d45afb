//! Per-item extents for each size mode.
//!
//! Primary extents are always the item's own preferred primary extent;
//! only the cross extent depends on the mode.

use super::axis::{AxisInsets, AxisSize};
use super::length::SizeMode;
use super::metrics::max_cross_extent;

/// Cross extent policy resolved for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossExtent {
    /// Each item keeps its own preferred cross extent.
    Own,
    /// All items share the largest preferred cross extent.
    Shared(i32),
    /// All items span the interior cross extent (never below 0) and sit at
    /// the leading cross inset, whatever the cross alignment says.
    Fill(i32),
}

impl CrossExtent {
    /// Resolve the mode against this pass's visible sizes and bounds.
    pub fn resolve(mode: SizeMode, sizes: &[AxisSize], bounds: AxisSize, insets: AxisInsets) -> Self {
        match mode {
            SizeMode::Natural => CrossExtent::Own,
            SizeMode::UniformMaxNatural => CrossExtent::Shared(max_cross_extent(sizes.iter().copied())),
            SizeMode::FillAvailable => CrossExtent::Fill(bounds.cross.wrapping_sub(insets.cross()).max(0)),
        }
    }

    /// Cross extent assigned to an item with the given preferred size.
    #[inline]
    pub fn extent_for(self, preferred: AxisSize) -> i32 {
        match self {
            CrossExtent::Own => preferred.cross,
            CrossExtent::Shared(extent) | CrossExtent::Fill(extent) => extent,
        }
    }

    /// Whether cross alignment is overridden.
    #[inline]
    pub fn is_fill(self) -> bool {
        matches!(self, CrossExtent::Fill(_))
    }
}
