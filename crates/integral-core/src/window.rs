//! Windows - cached corner sums for repeated local queries
//!
//! A [`Window`] captures the four running-sum corners bounding one
//! rectangle of a table, plus the rectangle's dimensions. It is a plain
//! value: it does not borrow the table it came from. Sliding local-statistics
//! code (adaptive thresholding, local contrast) builds one window per pixel
//! and reads `sum`, `mean` or `proportion` from it.
//!
//! The corners are exclusive on the low side: a window with corners at
//! `(x0, y0)` and `(x1, y1)` covers `x0 < x <= x1`, `y0 < y <= y1`, and its
//! size is `(x1 - x0) * (y1 - y0)`.

use crate::error::{Error, Result};
use crate::table::{Accumulation, Table};

/// Intensity of a fully "on" pixel in a binarized image.
///
/// Depends on the bit depth of the upstream image, so it is always passed
/// explicitly to [`Window::proportion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinarizationCeiling(u32);

impl BinarizationCeiling {
    /// 8-bit grayscale "on" value
    pub const GRAY8: Self = BinarizationCeiling(u8::MAX as u32);
    /// 16-bit grayscale "on" value
    pub const GRAY16: Self = BinarizationCeiling(u16::MAX as u32);

    /// Create a ceiling from an arbitrary "on" intensity
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `value` is 0.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(Error::InvalidParameter(
                "binarization ceiling must be > 0".into(),
            ));
        }
        Ok(BinarizationCeiling(value))
    }

    /// Get the ceiling value
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for BinarizationCeiling {
    fn default() -> Self {
        Self::GRAY16
    }
}

/// Four corner sums and the dimensions of the rectangle they bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    top_left: u64,
    top_right: u64,
    bottom_left: u64,
    bottom_right: u64,
    width: u32,
    height: u32,
}

impl Window {
    /// Top-left corner sum
    pub fn top_left(&self) -> u64 {
        self.top_left
    }

    /// Top-right corner sum
    pub fn top_right(&self) -> u64 {
        self.top_right
    }

    /// Bottom-left corner sum
    pub fn bottom_left(&self) -> u64 {
        self.bottom_left
    }

    /// Bottom-right corner sum
    pub fn bottom_right(&self) -> u64 {
        self.bottom_right
    }

    /// Width of the covered rectangle
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the covered rectangle
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sum of accumulated values inside the window
    pub fn sum(&self) -> u64 {
        self.bottom_right
            .wrapping_add(self.top_left)
            .wrapping_sub(self.top_right)
            .wrapping_sub(self.bottom_left)
    }

    /// Number of pixels covered
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Mean accumulated value inside the window.
    ///
    /// Construction rejects zero-size windows, so the divisor is never 0.
    pub fn mean(&self) -> f64 {
        self.sum() as f64 / self.size() as f64
    }

    /// `area / (sum / ceiling) - 1` for a binarized image.
    ///
    /// `sum / ceiling` counts the "on" pixels, assuming each carries exactly
    /// `ceiling`. A window with no "on" pixels yields positive infinity.
    pub fn proportion(&self, ceiling: BinarizationCeiling) -> f64 {
        let area = self.size() as f64;
        let on = self.sum() as f64 / ceiling.value() as f64;
        area / on - 1.0
    }
}

impl<K: Accumulation> Table<K> {
    /// Centered square window around `(x, y)`.
    ///
    /// With `step = size / 2`, the window's corners are
    /// `x - step - 1 ..= x + step` by `y - step - 1 ..= y + step`, each
    /// clamped to the domain. The low corner only moves off 0 once
    /// `x > step + 1` (resp. `y`), so unclamped windows span `2 * step + 1`
    /// pixels and windows touching the low edge lose row/column 0.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateQuery` if `size` is 0, `(x, y)` lies outside
    /// the table, or the clamped window covers no pixels (e.g. a 1-pixel
    /// wide table).
    pub fn window(&self, x: u32, y: u32, size: u32) -> Result<Window> {
        if size == 0 {
            return Err(Error::DegenerateQuery("window size must be > 0".into()));
        }
        self.check_origin(x, y)?;

        let step = size / 2;
        let min_x = if x > step + 1 { x - step - 1 } else { 0 };
        let min_y = if y > step + 1 { y - step - 1 } else { 0 };
        let max_x = (self.width() - 1).min(x.saturating_add(step));
        let max_y = (self.height() - 1).min(y.saturating_add(step));

        self.window_from_corners(min_x, min_y, max_x, max_y)
    }

    /// Full-height strip starting at column `x`, `width` columns wide.
    ///
    /// The far edge is clamped to the last column; the stored width is the
    /// clamped one. Like [`Table::window`], corners are exclusive on the low
    /// side, so column `x` and row 0 are not part of the strip's sum.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateQuery` if `width` is 0, `x` is outside the
    /// table, or the clamped strip covers no pixels.
    pub fn vertical_window(&self, x: u32, width: u32) -> Result<Window> {
        if width == 0 {
            return Err(Error::DegenerateQuery("strip width must be > 0".into()));
        }
        self.check_origin(x, 0)?;

        let max_x = (self.width() - 1).min(x.saturating_add(width));
        self.window_from_corners(x, 0, max_x, self.height() - 1)
    }

    /// Full-width strip starting at row `y`, `height` rows tall.
    ///
    /// The transpose of [`Table::vertical_window`].
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateQuery` if `height` is 0, `y` is outside the
    /// table, or the clamped strip covers no pixels.
    pub fn horizontal_window(&self, y: u32, height: u32) -> Result<Window> {
        if height == 0 {
            return Err(Error::DegenerateQuery("strip height must be > 0".into()));
        }
        self.check_origin(0, y)?;

        let max_y = (self.height() - 1).min(y.saturating_add(height));
        self.window_from_corners(0, y, self.width() - 1, max_y)
    }

    fn check_origin(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::DegenerateQuery(format!(
                "window origin ({}, {}) outside {}x{} table",
                x,
                y,
                self.width(),
                self.height()
            )));
        }
        Ok(())
    }

    fn window_from_corners(
        &self,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    ) -> Result<Window> {
        if max_x <= min_x || max_y <= min_y {
            return Err(Error::DegenerateQuery(format!(
                "window ({}, {})-({}, {}) covers no pixels",
                min_x, min_y, max_x, max_y
            )));
        }
        Ok(Window {
            top_left: self.cell_unchecked(min_x, min_y),
            top_right: self.cell_unchecked(max_x, min_y),
            bottom_left: self.cell_unchecked(min_x, max_y),
            bottom_right: self.cell_unchecked(max_x, max_y),
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }
}
