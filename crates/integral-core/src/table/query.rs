//! Rectangle queries
//!
//! Sums and means over arbitrary rectangles in O(1), by inclusion-exclusion
//! on four running-sum corners:
//!
//! ```text
//! sum = a(right-1, bottom-1) + a(x-1, y-1) - a(right-1, y-1) - a(x-1, bottom-1)
//! ```
//!
//! Each corner is clamped independently. A coordinate below 0 contributes
//! 0; a coordinate past the last row or column reads the last valid index,
//! whose running sum already covers the whole edge. The result is the sum
//! over the rectangle's intersection with the domain.

use super::{Accumulation, Table};
use crate::error::{Error, Result};
use crate::rect::Rect;

impl<K: Accumulation> Table<K> {
    /// Running sum at a possibly out-of-domain corner
    #[inline]
    fn corner(&self, x: i64, y: i64) -> u64 {
        if x < 0 || y < 0 {
            return 0;
        }
        let x = x.min(self.width as i64 - 1) as u32;
        let y = y.min(self.height as i64 - 1) as u32;
        self.cell_unchecked(x, y)
    }

    /// Sum of accumulated values inside `rect`, clamped to the domain.
    ///
    /// A rectangle that is empty or lies entirely outside the domain sums
    /// to 0.
    pub fn sum(&self, rect: &Rect) -> u64 {
        if rect.is_empty() {
            return 0;
        }
        let x0 = rect.x as i64 - 1;
        let y0 = rect.y as i64 - 1;
        let x1 = rect.x as i64 + rect.w as i64 - 1;
        let y1 = rect.y as i64 + rect.h as i64 - 1;

        let bottom_right = self.corner(x1, y1);
        let top_left = self.corner(x0, y0);
        let top_right = self.corner(x1, y0);
        let bottom_left = self.corner(x0, y1);

        bottom_right
            .wrapping_add(top_left)
            .wrapping_sub(top_right)
            .wrapping_sub(bottom_left)
    }

    /// Mean accumulated value inside `rect`.
    ///
    /// The divisor is the area of the rectangle's intersection with the
    /// domain, not the area of `rect` itself.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateQuery` if the intersection is empty.
    pub fn mean(&self, rect: &Rect) -> Result<f64> {
        let clipped = rect.intersect(&self.bounds()).ok_or_else(|| {
            Error::DegenerateQuery(format!("{:?} does not overlap the table", rect))
        })?;
        Ok(self.sum(rect) as f64 / clipped.area() as f64)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Rect, SquaredTable, Table};

    /// 3x3 grid with values 1..9
    fn create_3x3() -> Table {
        Table::from_intensities(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap()
    }

    #[test]
    fn test_sum_full_and_single() {
        let table = create_3x3();
        assert_eq!(table.sum(&table.bounds()), 45);
        assert_eq!(table.sum(&Rect::new_unchecked(1, 1, 1, 1)), 5);
        assert_eq!(table.sum(&Rect::new_unchecked(0, 0, 1, 1)), 1);
        assert_eq!(table.sum(&Rect::new_unchecked(2, 2, 1, 1)), 9);
    }

    #[test]
    fn test_sum_interior() {
        let table = create_3x3();
        // Bottom-right 2x2: 5 + 6 + 8 + 9
        assert_eq!(table.sum(&Rect::new_unchecked(1, 1, 2, 2)), 28);
        // Middle column: 2 + 5 + 8
        assert_eq!(table.sum(&Rect::new_unchecked(1, 0, 1, 3)), 15);
        // Top row: 1 + 2 + 3
        assert_eq!(table.sum(&Rect::new_unchecked(0, 0, 3, 1)), 6);
    }

    #[test]
    fn test_sum_clamped() {
        let table = create_3x3();
        assert_eq!(table.sum(&Rect::new_unchecked(-5, -5, 100, 100)), 45);
        // Only the right column is inside: 3 + 6 + 9
        assert_eq!(table.sum(&Rect::new_unchecked(2, -1, 4, 10)), 18);
        // Only the top-left pixel is inside
        assert_eq!(table.sum(&Rect::new_unchecked(-3, -3, 4, 4)), 1);
    }

    #[test]
    fn test_sum_outside_is_zero() {
        let table = create_3x3();
        assert_eq!(table.sum(&Rect::new_unchecked(3, 0, 2, 2)), 0);
        assert_eq!(table.sum(&Rect::new_unchecked(0, 5, 2, 2)), 0);
        assert_eq!(table.sum(&Rect::new_unchecked(-4, 0, 2, 3)), 0);
        assert_eq!(table.sum(&Rect::new_unchecked(0, -4, 3, 2)), 0);
        assert_eq!(table.sum(&Rect::new_unchecked(1, 1, 0, 2)), 0);
        assert_eq!(table.sum(&Rect::new_unchecked(1, 1, -2, 2)), 0);
    }

    #[test]
    fn test_mean() {
        let table: Table = Table::from_intensities(3, 1, &[10, 20, 30]).unwrap();
        assert_eq!(table.sum(&table.bounds()), 60);
        assert_eq!(table.mean(&table.bounds()).unwrap(), 20.0);
        // Divisor is the clipped area (2 pixels), not 4
        assert_eq!(table.mean(&Rect::new_unchecked(1, 0, 4, 1)).unwrap(), 25.0);
    }

    #[test]
    fn test_mean_degenerate() {
        let table = create_3x3();
        assert!(table.mean(&Rect::new_unchecked(10, 10, 2, 2)).is_err());
        assert!(table.mean(&Rect::new_unchecked(1, 1, 0, 0)).is_err());
    }

    #[test]
    fn test_squared_mean() {
        let sq = SquaredTable::from_intensities(2, 2, &[1, 2, 3, 4]).unwrap();
        assert_eq!(sq.sum(&sq.bounds()), 30);
        assert_eq!(sq.mean(&sq.bounds()).unwrap(), 7.5);
    }
}
