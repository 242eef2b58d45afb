//! Layout policy types.
//!
//! Orientation, alignment and sizing enums plus the container's interior
//! insets. `LayoutConstant` is the untyped vocabulary accepted by
//! [`FlowLayout::new`](super::FlowLayout::new), where one value set covers
//! both axes and the size mode and must be checked per parameter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which physical axis items flow along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Items form a single row, left to right.
    #[default]
    Horizontal,
    /// Items form a single column, top to bottom.
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

/// Alignment along one axis.
///
/// The same three values serve the primary and the cross axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Pack at the leading edge (left / top).
    #[default]
    Start,
    /// Center within the interior span.
    Center,
    /// Pack at the trailing edge (right / bottom).
    End,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        })
    }
}

/// How each item's extents are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// Every item gets its own preferred size.
    #[default]
    Natural,
    /// Every item gets the largest preferred cross extent among visible items.
    UniformMaxNatural,
    /// Every item spans the container's full interior cross extent.
    /// Cross alignment has no effect in this mode. When the container is
    /// smaller than its cross insets the span is clamped to 0, never negative.
    FillAvailable,
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeMode::Natural => "natural",
            SizeMode::UniformMaxNatural => "uniform_max_natural",
            SizeMode::FillAvailable => "fill_available",
        })
    }
}

/// Untyped layout constant.
///
/// `Top`/`Bottom` are legal only as vertical alignment, `Left`/`Right` only
/// as horizontal alignment, and `Center` on either axis. The three size
/// constants are legal only as the size mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutConstant {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    Preferred,
    MaxPreferred,
    MaxAvailable,
}

impl LayoutConstant {
    /// Whether this constant is a legal horizontal alignment.
    pub fn is_horizontal_alignment(self) -> bool {
        matches!(self, Self::Left | Self::Center | Self::Right)
    }

    /// Whether this constant is a legal vertical alignment.
    pub fn is_vertical_alignment(self) -> bool {
        matches!(self, Self::Top | Self::Center | Self::Bottom)
    }

    /// Whether this constant names a size mode.
    pub fn is_size_mode(self) -> bool {
        matches!(self, Self::Preferred | Self::MaxPreferred | Self::MaxAvailable)
    }

    /// Interpret as a horizontal alignment.
    pub fn horizontal_alignment(self) -> Option<Alignment> {
        match self {
            Self::Left => Some(Alignment::Start),
            Self::Center => Some(Alignment::Center),
            Self::Right => Some(Alignment::End),
            _ => None,
        }
    }

    /// Interpret as a vertical alignment.
    pub fn vertical_alignment(self) -> Option<Alignment> {
        match self {
            Self::Top => Some(Alignment::Start),
            Self::Center => Some(Alignment::Center),
            Self::Bottom => Some(Alignment::End),
            _ => None,
        }
    }

    /// Interpret as a size mode.
    pub fn size_mode(self) -> Option<SizeMode> {
        match self {
            Self::Preferred => Some(SizeMode::Natural),
            Self::MaxPreferred => Some(SizeMode::UniformMaxNatural),
            Self::MaxAvailable => Some(SizeMode::FillAvailable),
            _ => None,
        }
    }

    /// The horizontal constant for an alignment.
    pub fn from_horizontal(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Start => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::End => Self::Right,
        }
    }

    /// The vertical constant for an alignment.
    pub fn from_vertical(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Start => Self::Top,
            Alignment::Center => Self::Center,
            Alignment::End => Self::Bottom,
        }
    }
}

impl From<SizeMode> for LayoutConstant {
    fn from(mode: SizeMode) -> Self {
        match mode {
            SizeMode::Natural => Self::Preferred,
            SizeMode::UniformMaxNatural => Self::MaxPreferred,
            SizeMode::FillAvailable => Self::MaxAvailable,
        }
    }
}

impl fmt::Display for LayoutConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Preferred => "preferred",
            Self::MaxPreferred => "max_preferred",
            Self::MaxAvailable => "max_available",
        })
    }
}

/// Interior inset of the container on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    /// Create insets with explicit values for each side.
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform insets on all sides.
    pub fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Symmetric insets (horizontal, vertical).
    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_legal_on_both_axes() {
        assert!(LayoutConstant::Center.is_horizontal_alignment());
        assert!(LayoutConstant::Center.is_vertical_alignment());
        assert!(!LayoutConstant::Center.is_size_mode());
    }

    #[test]
    fn test_axis_only_constants() {
        assert!(!LayoutConstant::Top.is_horizontal_alignment());
        assert!(!LayoutConstant::Left.is_vertical_alignment());
        assert_eq!(LayoutConstant::Top.horizontal_alignment(), None);
        assert_eq!(LayoutConstant::Right.horizontal_alignment(), Some(Alignment::End));
        assert_eq!(LayoutConstant::Bottom.vertical_alignment(), Some(Alignment::End));
    }

    #[test]
    fn test_size_constants() {
        assert_eq!(LayoutConstant::MaxPreferred.size_mode(), Some(SizeMode::UniformMaxNatural));
        assert_eq!(LayoutConstant::Left.size_mode(), None);
        for mode in [SizeMode::Natural, SizeMode::UniformMaxNatural, SizeMode::FillAvailable] {
            assert_eq!(LayoutConstant::from(mode).size_mode(), Some(mode));
        }
    }

    #[test]
    fn test_alignment_constant_round_trip() {
        for a in [Alignment::Start, Alignment::Center, Alignment::End] {
            assert_eq!(LayoutConstant::from_horizontal(a).horizontal_alignment(), Some(a));
            assert_eq!(LayoutConstant::from_vertical(a).vertical_alignment(), Some(a));
        }
    }

    #[test]
    fn test_insets_constructors() {
        assert_eq!(Insets::symmetric(5, 7), Insets::new(7, 5, 7, 5));
        assert_eq!(Insets::all(3), Insets::new(3, 3, 3, 3));
    }
}
