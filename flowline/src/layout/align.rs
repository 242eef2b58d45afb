//! Alignment resolution.
//!
//! Every (primary, cross) alignment pair maps to a [`Strategy`]: where the
//! primary cursor starts, which way it walks, and how an item's cross
//! offset is derived from its cross extent. All halving uses `/ 2`, which
//! truncates toward zero; existing pixel placement depends on that. Sums
//! wrap on overflow instead of panicking.

use super::axis::{AxisInsets, AxisSize};
use super::length::Alignment;

/// Container geometry for one pass, in axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub bounds: AxisSize,
    pub insets: AxisInsets,
}

impl Frame {
    /// Interior primary span (bounds minus both primary insets).
    #[inline]
    pub fn inner_primary(&self) -> i32 {
        self.bounds.primary.wrapping_sub(self.insets.primary())
    }

    /// Interior cross span (bounds minus both cross insets).
    #[inline]
    pub fn inner_cross(&self) -> i32 {
        self.bounds.cross.wrapping_sub(self.insets.cross())
    }
}

/// Walk order of the placement loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Input order; the cursor is an item's leading edge.
    Forward,
    /// Reverse input order; the cursor is an item's trailing edge.
    Reverse,
}

/// Primary cursor start given the frame and the total placed extent.
pub type CursorStart = fn(&Frame, i32) -> i32;

/// Cross offset given the frame and an item's cross extent.
pub type CrossOffset = fn(&Frame, i32) -> i32;

/// Placement rules for one alignment pair.
#[derive(Clone, Copy)]
pub struct Strategy {
    pub cursor_start: CursorStart,
    pub direction: Direction,
    pub cross_offset: CrossOffset,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("direction", &self.direction).finish_non_exhaustive()
    }
}

fn start_at_leading(frame: &Frame, _total: i32) -> i32 {
    frame.insets.leading_primary
}

fn start_centered(frame: &Frame, total: i32) -> i32 {
    (frame.inner_primary() / 2)
        .wrapping_sub(total / 2)
        .wrapping_add(frame.insets.leading_primary)
}

fn start_at_trailing(frame: &Frame, _total: i32) -> i32 {
    frame.bounds.primary.wrapping_sub(frame.insets.trailing_primary)
}

fn cross_at_leading(frame: &Frame, _extent: i32) -> i32 {
    frame.insets.leading_cross
}

fn cross_centered(frame: &Frame, extent: i32) -> i32 {
    (frame.inner_cross() / 2)
        .wrapping_add(frame.insets.leading_cross)
        .wrapping_sub(extent / 2)
}

fn cross_at_trailing(frame: &Frame, extent: i32) -> i32 {
    frame
        .bounds
        .cross
        .wrapping_sub(frame.insets.trailing_cross)
        .wrapping_sub(extent)
}

const fn strategy(primary: Alignment, cross: Alignment) -> Strategy {
    let (cursor_start, direction) = match primary {
        Alignment::Start => (start_at_leading as CursorStart, Direction::Forward),
        Alignment::Center => (start_centered as CursorStart, Direction::Forward),
        Alignment::End => (start_at_trailing as CursorStart, Direction::Reverse),
    };
    let cross_offset = match cross {
        Alignment::Start => cross_at_leading as CrossOffset,
        Alignment::Center => cross_centered as CrossOffset,
        Alignment::End => cross_at_trailing as CrossOffset,
    };
    Strategy { cursor_start, direction, cross_offset }
}

const ALIGNMENTS: [Alignment; 3] = [Alignment::Start, Alignment::Center, Alignment::End];

/// Indexed by `[primary][cross]` in `Start, Center, End` order.
static STRATEGIES: [[Strategy; 3]; 3] = {
    let mut table = [[strategy(Alignment::Start, Alignment::Start); 3]; 3];
    let mut p = 0;
    while p < 3 {
        let mut c = 0;
        while c < 3 {
            table[p][c] = strategy(ALIGNMENTS[p], ALIGNMENTS[c]);
            c += 1;
        }
        p += 1;
    }
    table
};

#[inline]
const fn slot(alignment: Alignment) -> usize {
    match alignment {
        Alignment::Start => 0,
        Alignment::Center => 1,
        Alignment::End => 2,
    }
}

/// Look up the strategy for an alignment pair.
#[inline]
pub fn lookup(primary: Alignment, cross: Alignment) -> Strategy {
    STRATEGIES[slot(primary)][slot(cross)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(primary: i32, cross: i32, insets: AxisInsets) -> Frame {
        Frame {
            bounds: AxisSize::new(primary, cross),
            insets,
        }
    }

    fn insets(lp: i32, tp: i32, lc: i32, tc: i32) -> AxisInsets {
        AxisInsets {
            leading_primary: lp,
            trailing_primary: tp,
            leading_cross: lc,
            trailing_cross: tc,
        }
    }

    #[test]
    fn test_table_matches_direct_construction() {
        for p in ALIGNMENTS {
            for c in ALIGNMENTS {
                let f = frame(101, 57, insets(3, 7, 2, 9));
                let looked_up = lookup(p, c);
                let direct = strategy(p, c);
                assert_eq!(looked_up.direction, direct.direction);
                assert_eq!((looked_up.cursor_start)(&f, 33), (direct.cursor_start)(&f, 33));
                assert_eq!((looked_up.cross_offset)(&f, 11), (direct.cross_offset)(&f, 11));
            }
        }
    }

    #[test]
    fn test_primary_start_positions() {
        let f = frame(100, 50, insets(4, 6, 0, 0));
        assert_eq!((lookup(Alignment::Start, Alignment::Start).cursor_start)(&f, 65), 4);
        // (100 - 10) / 2 - 65 / 2 + 4 = 45 - 32 + 4
        assert_eq!((lookup(Alignment::Center, Alignment::Start).cursor_start)(&f, 65), 17);
        assert_eq!((lookup(Alignment::End, Alignment::Start).cursor_start)(&f, 65), 94);
    }

    #[test]
    fn test_end_walks_in_reverse() {
        assert_eq!(lookup(Alignment::End, Alignment::Center).direction, Direction::Reverse);
        assert_eq!(lookup(Alignment::Center, Alignment::End).direction, Direction::Forward);
        assert_eq!(lookup(Alignment::Start, Alignment::End).direction, Direction::Forward);
    }

    #[test]
    fn test_cross_offsets() {
        let f = frame(0, 50, insets(0, 0, 4, 6));
        assert_eq!((lookup(Alignment::Start, Alignment::Start).cross_offset)(&f, 11), 4);
        // (50 - 10) / 2 + 4 - 11 / 2 = 20 + 4 - 5
        assert_eq!((lookup(Alignment::Start, Alignment::Center).cross_offset)(&f, 11), 19);
        assert_eq!((lookup(Alignment::Start, Alignment::End).cross_offset)(&f, 11), 33);
    }

    #[test]
    fn test_center_truncates_each_half_separately() {
        // Interior 10 and extent 5: 10 / 2 - 5 / 2 = 3, where (10 - 5) / 2 = 2.
        let f = frame(10, 10, insets(0, 0, 0, 0));
        assert_eq!((lookup(Alignment::Center, Alignment::Center).cross_offset)(&f, 5), 3);
        assert_eq!((lookup(Alignment::Center, Alignment::Center).cursor_start)(&f, 5), 3);
        // Negative intermediates truncate toward zero.
        let tiny = frame(1, 1, insets(0, 0, 0, 0));
        assert_eq!((lookup(Alignment::Center, Alignment::Center).cursor_start)(&tiny, 5), -2);
    }

    #[test]
    fn test_extreme_frames_wrap() {
        let f = frame(i32::MIN, i32::MIN, insets(0, 1, 0, 1));
        assert_eq!(f.inner_primary(), i32::MAX);
        assert_eq!(f.inner_cross(), i32::MAX);
        assert_eq!((lookup(Alignment::End, Alignment::Start).cursor_start)(&f, 0), i32::MAX);
        assert_eq!((lookup(Alignment::Start, Alignment::End).cross_offset)(&f, 0), i32::MAX);
        // (MAX - 1) / 2 - MIN / 2 is MAX, plus the leading inset wraps.
        let centered = frame(i32::MIN, 0, insets(1, 1, 0, 0));
        assert_eq!((lookup(Alignment::Center, Alignment::Start).cursor_start)(&centered, i32::MIN), i32::MIN);
    }
}
