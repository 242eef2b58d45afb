//! Flowline: single-axis flow layout.
//!
//! Arranges an ordered list of items in one row or one column inside a
//! container, honoring the container's insets, a gap between items,
//! alignment on both axes and a size mode:
//! - `Natural`: each item keeps its preferred size
//! - `UniformMaxNatural`: items share the largest preferred cross extent
//! - `FillAvailable`: items span the container's interior cross extent
//!
//! Geometry is integral and every pass is a pure function of the items'
//! visibility and preferred sizes, the insets and the container bounds.
//!
//! # Usage
//!
//! ```
//! use flowline::{Alignment, FlowLayout, Insets, Item, LayoutConfig, Rect, Size, SizeMode};
//!
//! let layout = FlowLayout::from(LayoutConfig::row(Alignment::Start, Alignment::Start, SizeMode::Natural, 5));
//! let items = [Item::new(10, 20), Item::new(30, 5)];
//!
//! assert_eq!(layout.preferred_size(&items, Insets::default()), Size::new(45, 20));
//! assert_eq!(
//!     layout.layout(&items, Insets::default(), Size::new(100, 40)),
//!     vec![Rect::new(0, 0, 10, 20), Rect::new(15, 0, 30, 5)],
//! );
//! ```

// Core primitives
pub mod error;
pub mod primitives;

// Layout engine
pub mod layout;

// Re-export core types
pub use error::{LayoutError, Result};
pub use primitives::{Rect, Size};

// Layout system exports
pub use layout::{
    Alignment, FlowContainer, FlowItem, FlowLayout, Insets, Item, LayoutConfig, LayoutConstant, LayoutSpec,
    Orientation, Placement, SizeMode,
};
