//! Host-side collaborators.
//!
//! The engine never owns items. It reads visibility and preferred size
//! through [`FlowItem`] and writes results back through
//! [`FlowContainer::set_item_bounds`].

use serde::{Deserialize, Serialize};

use crate::primitives::{Rect, Size};

use super::axis::AxisSize;
use super::length::{Insets, Orientation};

/// Anything that can be placed by a flow layout.
pub trait FlowItem {
    /// Invisible items take no space and receive no bounds.
    fn is_visible(&self) -> bool;

    /// Natural size in physical (width, height).
    fn preferred_size(&self) -> Size;
}

impl<T: FlowItem + ?Sized> FlowItem for &T {
    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn preferred_size(&self) -> Size {
        (**self).preferred_size()
    }
}

/// A container whose children are arranged by a flow layout.
///
/// Exclusive access during [`FlowLayout::layout_container`] stands in for a
/// tree lock: the item list cannot change mid-pass.
///
/// [`FlowLayout::layout_container`]: super::FlowLayout::layout_container
pub trait FlowContainer {
    type Item: FlowItem;

    /// Children in insertion order.
    fn items(&self) -> &[Self::Item];

    /// Interior inset reserved on each side.
    fn insets(&self) -> Insets;

    /// Current outer size.
    fn size(&self) -> Size;

    /// Assign final bounds to the child at `index` in [`items`](Self::items).
    fn set_item_bounds(&mut self, index: usize, bounds: Rect);
}

/// A plain item: a preferred size and a visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub size: Size,
    #[serde(default = "visible_default")]
    pub visible: bool,
}

fn visible_default() -> bool {
    true
}

impl Item {
    /// A visible item with the given preferred size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            visible: true,
        }
    }

    /// An invisible item with the given preferred size.
    pub fn hidden(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            visible: false,
        }
    }

    /// Set visibility.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl FlowItem for Item {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn preferred_size(&self) -> Size {
        self.size
    }
}

/// A visible item captured for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Visible {
    /// Position in the host's item list.
    pub index: usize,
    /// Preferred size in axis space.
    pub size: AxisSize,
}

/// Snapshot visibility and preferred sizes once so a pass sees stable facts.
pub(crate) fn snapshot<I: FlowItem>(items: &[I], orientation: Orientation) -> Vec<Visible> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_visible())
        .map(|(index, item)| Visible {
            index,
            size: orientation.axis_size(item.preferred_size()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builders() {
        assert!(Item::new(1, 2).is_visible());
        assert!(!Item::hidden(1, 2).is_visible());
        assert!(Item::hidden(1, 2).visible(true).is_visible());
        assert_eq!(Item::new(3, 4).preferred_size(), Size::new(3, 4));
    }

    #[test]
    fn test_snapshot_skips_hidden_and_keeps_indices() {
        let items = [Item::new(10, 20), Item::hidden(5, 5), Item::new(30, 40)];
        let visible = snapshot(&items, Orientation::Vertical);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].index, 0);
        assert_eq!(visible[0].size, AxisSize::new(20, 10));
        assert_eq!(visible[1].index, 2);
        assert_eq!(visible[1].size, AxisSize::new(40, 30));
    }

    #[test]
    fn test_item_deserialize_defaults_visible() {
        let item: Item = serde_json::from_str(r#"{"size":{"width":3,"height":4}}"#).unwrap();
        assert_eq!(item, Item::new(3, 4));
    }
}
