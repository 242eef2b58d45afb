//! Aggregate extents over the visible items of one pass.
//!
//! Callers pass only visible sizes, already mapped to axis space. An empty
//! input is extent 0 everywhere.

use super::axis::AxisSize;

/// Sum of primary extents plus one gap between each adjacent pair.
pub fn total_placed_extent(sizes: impl IntoIterator<Item = AxisSize>, gap: i32) -> i32 {
    let mut total: i32 = 0;
    let mut count: i32 = 0;
    for size in sizes {
        total = total.wrapping_add(size.primary);
        count += 1;
    }
    if count > 1 {
        total = total.wrapping_add(gap.wrapping_mul(count - 1));
    }
    total
}

/// Largest cross extent, or 0 if there are no sizes.
pub fn max_cross_extent(sizes: impl IntoIterator<Item = AxisSize>) -> i32 {
    sizes.into_iter().fold(0, |max, size| max.max(size.cross))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Vec<AxisSize> {
        vec![AxisSize::new(10, 20), AxisSize::new(30, 5), AxisSize::new(15, 40)]
    }

    #[test]
    fn test_total_placed_extent() {
        assert_eq!(total_placed_extent(sizes(), 5), 65);
        assert_eq!(total_placed_extent(sizes(), 0), 55);
    }

    #[test]
    fn test_single_item_has_no_gap() {
        assert_eq!(total_placed_extent([AxisSize::new(12, 3)], 100), 12);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(total_placed_extent(Vec::new(), 7), 0);
        assert_eq!(max_cross_extent(Vec::new()), 0);
    }

    #[test]
    fn test_max_cross_extent() {
        assert_eq!(max_cross_extent(sizes()), 40);
    }

    #[test]
    fn test_max_cross_extent_floors_at_zero() {
        // A negative preferred size never beats the empty baseline.
        assert_eq!(max_cross_extent([AxisSize::new(1, -4)]), 0);
    }

    #[test]
    fn test_total_placed_extent_wraps() {
        let ones = vec![AxisSize::new(1, 1); 3];
        // 3 + 2 * i32::MAX wraps around to 1
        assert_eq!(total_placed_extent(ones, i32::MAX), 1);
        let wide = [AxisSize::new(i32::MAX, 1), AxisSize::new(1, 1)];
        assert_eq!(total_placed_extent(wide, 0), i32::MIN);
    }
}
