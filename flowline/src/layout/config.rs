//! Immutable layout configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

use super::length::{Alignment, LayoutConstant, Orientation, SizeMode};

/// Orientation, alignment on both axes, size mode and gap.
///
/// `Copy` and free of interior state, so one value can drive any number of
/// passes from any number of threads. The gap is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LayoutSpec", into = "LayoutSpec")]
pub struct LayoutConfig {
    orientation: Orientation,
    primary_alignment: Alignment,
    cross_alignment: Alignment,
    size_mode: SizeMode,
    gap: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::row(Alignment::Start, Alignment::Start, SizeMode::Natural, 0)
    }
}

impl LayoutConfig {
    /// Create a configuration. A negative gap is treated as 0.
    pub fn new(
        orientation: Orientation,
        primary_alignment: Alignment,
        cross_alignment: Alignment,
        size_mode: SizeMode,
        gap: i32,
    ) -> Self {
        Self {
            orientation,
            primary_alignment,
            cross_alignment,
            size_mode,
            gap: gap.max(0),
        }
    }

    /// A single row: primary axis horizontal.
    pub fn row(primary_alignment: Alignment, cross_alignment: Alignment, size_mode: SizeMode, gap: i32) -> Self {
        Self::new(Orientation::Horizontal, primary_alignment, cross_alignment, size_mode, gap)
    }

    /// A single column: primary axis vertical.
    pub fn column(primary_alignment: Alignment, cross_alignment: Alignment, size_mode: SizeMode, gap: i32) -> Self {
        Self::new(Orientation::Vertical, primary_alignment, cross_alignment, size_mode, gap)
    }

    /// Create a configuration from untyped constants given per physical axis.
    ///
    /// Fails if `horizontal` is not `Left`/`Center`/`Right`, `vertical` is not
    /// `Top`/`Center`/`Bottom`, or `size` is not a size constant. The checks
    /// run in that order and the first failure is reported.
    pub fn from_constants(
        orientation: Orientation,
        horizontal: LayoutConstant,
        vertical: LayoutConstant,
        size: LayoutConstant,
        gap: i32,
    ) -> Result<Self> {
        let horizontal = horizontal.horizontal_alignment().ok_or(LayoutError::InvalidConfiguration {
            parameter: "horizontal alignment",
            value: horizontal,
        })?;
        let vertical = vertical.vertical_alignment().ok_or(LayoutError::InvalidConfiguration {
            parameter: "vertical alignment",
            value: vertical,
        })?;
        let size_mode = size.size_mode().ok_or(LayoutError::InvalidConfiguration {
            parameter: "size mode",
            value: size,
        })?;

        let (primary, cross) = match orientation {
            Orientation::Horizontal => (horizontal, vertical),
            Orientation::Vertical => (vertical, horizontal),
        };
        Ok(Self::new(orientation, primary, cross, size_mode, gap))
    }

    /// Set primary axis alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.primary_alignment = alignment;
        self
    }

    /// Set cross axis alignment.
    pub fn cross_align(mut self, alignment: Alignment) -> Self {
        self.cross_alignment = alignment;
        self
    }

    /// Set size mode.
    pub fn size(mut self, size_mode: SizeMode) -> Self {
        self.size_mode = size_mode;
        self
    }

    /// Set the gap between adjacent items (negative becomes 0).
    pub fn spacing(mut self, gap: i32) -> Self {
        self.gap = gap.max(0);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn primary_alignment(&self) -> Alignment {
        self.primary_alignment
    }

    pub fn cross_alignment(&self) -> Alignment {
        self.cross_alignment
    }

    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    pub fn gap(&self) -> i32 {
        self.gap
    }

    /// Alignment along the horizontal axis, whichever role it plays.
    pub fn horizontal_alignment(&self) -> Alignment {
        match self.orientation {
            Orientation::Horizontal => self.primary_alignment,
            Orientation::Vertical => self.cross_alignment,
        }
    }

    /// Alignment along the vertical axis, whichever role it plays.
    pub fn vertical_alignment(&self) -> Alignment {
        match self.orientation {
            Orientation::Horizontal => self.cross_alignment,
            Orientation::Vertical => self.primary_alignment,
        }
    }
}

impl fmt::Display for LayoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlowLayout[orientation={};primary={};cross={};sizeMode={};gap={}]",
            self.orientation, self.primary_alignment, self.cross_alignment, self.size_mode, self.gap
        )
    }
}

/// Serialized form of a [`LayoutConfig`].
///
/// Alignments are stored per physical axis as constants, so a stored
/// configuration is validated on load exactly like
/// [`LayoutConfig::from_constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    #[serde(default)]
    pub orientation: Orientation,
    pub horizontal: LayoutConstant,
    pub vertical: LayoutConstant,
    pub size_mode: LayoutConstant,
    #[serde(default)]
    pub gap: i32,
}

impl TryFrom<LayoutSpec> for LayoutConfig {
    type Error = LayoutError;

    fn try_from(spec: LayoutSpec) -> Result<Self> {
        Self::from_constants(spec.orientation, spec.horizontal, spec.vertical, spec.size_mode, spec.gap)
    }
}

impl From<LayoutConfig> for LayoutSpec {
    fn from(config: LayoutConfig) -> Self {
        Self {
            orientation: config.orientation,
            horizontal: LayoutConstant::from_horizontal(config.horizontal_alignment()),
            vertical: LayoutConstant::from_vertical(config.vertical_alignment()),
            size_mode: config.size_mode.into(),
            gap: config.gap,
        }
    }
}
