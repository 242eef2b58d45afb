//! Flow layout engine.
//!
//! Places a single line of items along a primary axis inside a container's
//! interior, with alignment on both axes and a size mode for the cross
//! extent.
//!
//! # Architecture
//!
//! ```text
//! metrics (aggregate extents) -> sizing (cross extent) -> align (strategy table) -> flow (placement loop)
//! ```
//!
//! Everything works in axis space (`axis`) so rows and columns share one code path.

pub mod align;
pub mod axis;
pub mod config;
pub mod item;
pub mod length;
pub mod metrics;
pub mod sizing;

// flow ties the others together
pub mod flow;

// Re-export core types
pub use axis::{AxisInsets, AxisRect, AxisSize};
pub use config::{LayoutConfig, LayoutSpec};
pub use flow::{FlowLayout, Placement};
pub use item::{FlowContainer, FlowItem, Item};
pub use length::{Alignment, Insets, LayoutConstant, Orientation, SizeMode};
