//! Axis-relative geometry.
//!
//! The engine works in (primary, cross) coordinates so one code path serves
//! rows and columns. `Orientation` maps physical sizes, insets and
//! rectangles in and out of that space.

use crate::primitives::{Rect, Size};

use super::length::{Insets, Orientation};

/// A size expressed along the primary and cross axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisSize {
    pub primary: i32,
    pub cross: i32,
}

impl AxisSize {
    #[inline]
    pub const fn new(primary: i32, cross: i32) -> Self {
        Self { primary, cross }
    }
}

/// Insets expressed along the primary and cross axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisInsets {
    pub leading_primary: i32,
    pub trailing_primary: i32,
    pub leading_cross: i32,
    pub trailing_cross: i32,
}

impl AxisInsets {
    /// Sum of both primary-axis insets.
    #[inline]
    pub fn primary(&self) -> i32 {
        self.leading_primary.wrapping_add(self.trailing_primary)
    }

    /// Sum of both cross-axis insets.
    #[inline]
    pub fn cross(&self) -> i32 {
        self.leading_cross.wrapping_add(self.trailing_cross)
    }
}

/// A placed rectangle in axis space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisRect {
    pub primary_offset: i32,
    pub cross_offset: i32,
    pub primary_extent: i32,
    pub cross_extent: i32,
}

impl Orientation {
    /// Split a physical size into (primary, cross).
    #[inline]
    pub fn axis_size(self, size: Size) -> AxisSize {
        match self {
            Orientation::Horizontal => AxisSize::new(size.width, size.height),
            Orientation::Vertical => AxisSize::new(size.height, size.width),
        }
    }

    /// Inverse of [`axis_size`](Self::axis_size).
    #[inline]
    pub fn physical_size(self, size: AxisSize) -> Size {
        match self {
            Orientation::Horizontal => Size::new(size.primary, size.cross),
            Orientation::Vertical => Size::new(size.cross, size.primary),
        }
    }

    /// Map physical insets to leading/trailing insets per axis.
    #[inline]
    pub fn axis_insets(self, insets: Insets) -> AxisInsets {
        match self {
            Orientation::Horizontal => AxisInsets {
                leading_primary: insets.left,
                trailing_primary: insets.right,
                leading_cross: insets.top,
                trailing_cross: insets.bottom,
            },
            Orientation::Vertical => AxisInsets {
                leading_primary: insets.top,
                trailing_primary: insets.bottom,
                leading_cross: insets.left,
                trailing_cross: insets.right,
            },
        }
    }

    /// Map an axis-space rectangle back to `(x, y, width, height)`.
    #[inline]
    pub fn physical_rect(self, rect: AxisRect) -> Rect {
        match self {
            Orientation::Horizontal => Rect::new(
                rect.primary_offset,
                rect.cross_offset,
                rect.primary_extent,
                rect.cross_extent,
            ),
            Orientation::Vertical => Rect::new(
                rect.cross_offset,
                rect.primary_offset,
                rect.cross_extent,
                rect.primary_extent,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_size_swaps_for_vertical() {
        let size = Size::new(10, 20);
        assert_eq!(Orientation::Horizontal.axis_size(size), AxisSize::new(10, 20));
        assert_eq!(Orientation::Vertical.axis_size(size), AxisSize::new(20, 10));
        assert_eq!(Orientation::Vertical.physical_size(AxisSize::new(20, 10)), size);
    }

    #[test]
    fn test_axis_insets_mapping() {
        let insets = Insets::new(1, 2, 3, 4);

        let row = Orientation::Horizontal.axis_insets(insets);
        assert_eq!((row.leading_primary, row.trailing_primary), (4, 2));
        assert_eq!((row.leading_cross, row.trailing_cross), (1, 3));

        let column = Orientation::Vertical.axis_insets(insets);
        assert_eq!((column.leading_primary, column.trailing_primary), (1, 3));
        assert_eq!((column.leading_cross, column.trailing_cross), (4, 2));
        assert_eq!(column.primary(), 4);
        assert_eq!(column.cross(), 6);
    }

    #[test]
    fn test_physical_rect() {
        let rect = AxisRect {
            primary_offset: 5,
            cross_offset: 7,
            primary_extent: 30,
            cross_extent: 40,
        };
        assert_eq!(Orientation::Horizontal.physical_rect(rect), Rect::new(5, 7, 30, 40));
        assert_eq!(Orientation::Vertical.physical_rect(rect), Rect::new(7, 5, 40, 30));
    }
}
