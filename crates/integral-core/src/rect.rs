//! Rect - Half-open rectangle regions
//!
//! A `Rect` covers the pixels `x..x + w` by `y..y + h`. Rectangles may
//! extend past (or lie entirely outside) a table's domain; queries clamp
//! them to the domain.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A small `Copy` type; fields are public so callers can build query
/// rectangles inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rect dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from two corner points.
    ///
    /// `(x1, y1)` is exclusive once the corners are normalized, so
    /// `from_corners(0, 0, 3, 2)` covers 3x2 pixels.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x, w) = if x1 <= x2 {
            (x1, x2.saturating_sub(x1))
        } else {
            (x2, x1.saturating_sub(x2))
        };
        let (y, h) = if y1 <= y2 {
            (y1, y2.saturating_sub(y1))
        } else {
            (y2, y1.saturating_sub(y2))
        };
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive), saturating at `i32::MAX`
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Get the bottom y coordinate (exclusive), saturating at `i32::MAX`
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rectangle is empty (zero or negative extent)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection of two rectangles
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect {
                x,
                y,
                w: right.saturating_sub(x),
                h: bottom.saturating_sub(y),
            })
        } else {
            None
        }
    }

    /// Clip the rectangle to a `width` x `height` domain at the origin
    pub fn clip(&self, width: i32, height: i32) -> Option<Rect> {
        self.intersect(&Rect::new_unchecked(0, 0, width, height))
    }

    /// Split into a left part `x..at` and a right part `at..right()`.
    ///
    /// `at` is clamped into the rectangle, so one side may be empty.
    pub fn split_at_x(&self, at: i32) -> (Rect, Rect) {
        let at = at.clamp(self.x, self.right().max(self.x));
        (
            Rect::new_unchecked(self.x, self.y, at - self.x, self.h),
            Rect::new_unchecked(at, self.y, self.right() - at, self.h),
        )
    }

    /// Split into a top part `y..at` and a bottom part `at..bottom()`.
    pub fn split_at_y(&self, at: i32) -> (Rect, Rect) {
        let at = at.clamp(self.y, self.bottom().max(self.y));
        (
            Rect::new_unchecked(self.x, self.y, self.w, at - self.y),
            Rect::new_unchecked(self.x, at, self.w, self.bottom() - at),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Rect::new(0, 0, -1, 3).is_err());
        assert!(Rect::new(0, 0, 3, -1).is_err());
        assert!(Rect::new(-4, -4, 0, 0).is_ok());
    }

    #[test]
    fn test_from_corners_normalizes() {
        let r = Rect::from_corners(5, 7, 1, 2);
        assert_eq!(r, Rect::new_unchecked(1, 2, 4, 5));
        assert_eq!(r.right(), 5);
        assert_eq!(r.bottom(), 7);
        assert_eq!(r.area(), 20);
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new_unchecked(0, 0, 4, 4);
        let b = Rect::new_unchecked(2, -3, 10, 5);
        assert_eq!(a.intersect(&b), Some(Rect::new_unchecked(2, 0, 2, 2)));

        let far = Rect::new_unchecked(10, 10, 2, 2);
        assert_eq!(a.intersect(&far), None);

        // Touching edges do not overlap
        let touching = Rect::new_unchecked(4, 0, 2, 2);
        assert_eq!(a.intersect(&touching), None);
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new_unchecked(1, 1, 2, 2);
        assert!(r.contains_point(1, 1));
        assert!(r.contains_point(2, 2));
        assert!(!r.contains_point(3, 2));
        assert!(!r.contains_point(0, 1));
    }

    #[test]
    fn test_extreme_coordinates() {
        let far = Rect::new(i32::MAX - 1, 0, 10, 1).unwrap();
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.clip(3, 1), None);

        let wide = Rect::from_corners(i32::MIN, 0, i32::MAX, 2);
        assert_eq!(wide.w, i32::MAX);
        assert_eq!(wide.clip(3, 1), None);

        let tall = Rect::new_unchecked(0, i32::MIN + 1, 2, i32::MAX);
        assert_eq!(tall.clip(2, 2), None);
        let (top, bottom) = far.split_at_y(i32::MAX);
        assert_eq!(top, far);
        assert!(bottom.is_empty());
    }

    #[test]
    fn test_clip() {
        let r = Rect::new_unchecked(-2, -2, 5, 5);
        assert_eq!(r.clip(2, 10), Some(Rect::new_unchecked(0, 0, 2, 3)));
    }

    #[test]
    fn test_split() {
        let r = Rect::new_unchecked(1, 1, 6, 3);
        let (left, right) = r.split_at_x(4);
        assert_eq!(left, Rect::new_unchecked(1, 1, 3, 3));
        assert_eq!(right, Rect::new_unchecked(4, 1, 3, 3));

        let (top, bottom) = r.split_at_y(100);
        assert_eq!(top, r);
        assert!(bottom.is_empty());
    }
}
