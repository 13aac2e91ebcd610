//! Table - Summed-area table over 16-bit intensities
//!
//! `Table<K>` stores, for each cell `(x, y)`, the sum of the accumulated
//! values of every pixel `(x', y')` with `x' <= x` and `y' <= y`. The
//! accumulation kind `K` decides what a pixel contributes:
//!
//! - [`Plain`] - the intensity itself ([`Table`], the integral image)
//! - [`Squared`] - the squared intensity ([`SquaredTable`], used for variance)
//!
//! Both kinds share the same storage, builders and query arithmetic.
//!
//! See [`build`] for the batch and incremental builders and [`query`] for
//! rectangle sums and means.
//!
//! # Examples
//!
//! ```
//! use integral_core::{Rect, Table};
//!
//! let table: Table = Table::from_intensities(3, 1, &[10, 20, 30]).unwrap();
//! assert_eq!(table.cells(), &[10, 30, 60]);
//! assert_eq!(table.sum(&Rect::new_unchecked(0, 0, 3, 1)), 60);
//! assert_eq!(table.mean(&Rect::new_unchecked(0, 0, 3, 1)).unwrap(), 20.0);
//! ```
//!
//! # Overflow
//!
//! All accumulator arithmetic wraps modulo 2^64. A [`SquaredTable`] of
//! 16-bit data stays exact up to roughly 4 * 10^9 pixels.

pub mod build;
pub mod query;

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::rect::Rect;

pub use build::{IntensitySink, TableBuilder, build_pair};

/// What a single pixel contributes to a table's running sums.
pub trait Accumulation: Copy + Debug + Default + PartialEq + Eq {
    /// Value accumulated for a pixel of the given intensity
    fn accumulate(intensity: u16) -> u64;

    /// Recover a pixel intensity from its accumulated value
    fn restore(value: u64) -> u16;
}

/// Accumulate raw intensities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Plain;

impl Accumulation for Plain {
    #[inline]
    fn accumulate(intensity: u16) -> u64 {
        intensity as u64
    }

    #[inline]
    fn restore(value: u64) -> u16 {
        value.min(u16::MAX as u64) as u16
    }
}

/// Accumulate squared intensities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Squared;

impl Accumulation for Squared {
    #[inline]
    fn accumulate(intensity: u16) -> u64 {
        let v = intensity as u64;
        v * v
    }

    #[inline]
    fn restore(value: u64) -> u16 {
        value.isqrt().min(u16::MAX as u64) as u16
    }
}

/// Summed-area table
///
/// Immutable once built; use [`TableBuilder`] for cell-by-cell filling.
///
/// # Memory Layout
///
/// Cells are stored in row-major order with no padding. The cell at
/// (x, y) is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<K: Accumulation = Plain> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Running sums (row-major, no padding)
    cells: Vec<u64>,
    _kind: PhantomData<K>,
}

/// Summed-area table of squared intensities
pub type SquaredTable = Table<Squared>;

impl<K: Accumulation> Table<K> {
    pub(crate) fn from_parts(width: u32, height: u32, cells: Vec<u64>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Table {
            width,
            height,
            cells,
            _kind: PhantomData,
        }
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The table's domain, `(0, 0)` to `(width, height)`
    pub fn bounds(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.width as i32, self.height as i32)
    }

    /// Raw running sums in row-major order
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Get a running sum, or `None` if out of bounds
    pub fn cell(&self, x: u32, y: u32) -> Option<u64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cell_unchecked(x, y))
    }

    /// Get a running sum without bounds checking
    #[inline]
    pub(crate) fn cell_unchecked(&self, x: u32, y: u32) -> u64 {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Sum over the whole domain
    pub fn total(&self) -> u64 {
        self.cells.last().copied().unwrap_or(0)
    }

    /// Accumulated value of one pixel, recovered from the running sums.
    ///
    /// For a [`Table`] this is the original intensity, for a
    /// [`SquaredTable`] its square. Returns `None` if out of bounds.
    pub fn value(&self, x: u32, y: u32) -> Option<u64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(recover_value(&self.cells, self.width, x, y))
    }

    /// Original pixel intensity, or `None` if out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<u16> {
        self.value(x, y).map(K::restore)
    }

    /// Recover the whole intensity grid in row-major order
    pub fn to_intensities(&self) -> Vec<u16> {
        let mut out = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(K::restore(recover_value(&self.cells, self.width, x, y)));
            }
        }
        out
    }
}

/// Neighbouring running sums `(left, up, upleft)` of `(x, y)`, zero outside.
#[inline]
fn neighbors(cells: &[u64], width: u32, x: u32, y: u32) -> (u64, u64, u64) {
    let w = width as usize;
    let idx = y as usize * w + x as usize;
    let left = if x > 0 { cells[idx - 1] } else { 0 };
    let up = if y > 0 { cells[idx - w] } else { 0 };
    let upleft = if x > 0 && y > 0 { cells[idx - w - 1] } else { 0 };
    (left, up, upleft)
}

/// Running sum for `(x, y)` given its accumulated value:
/// `value + left + up - upleft`.
#[inline]
pub(crate) fn derive_cell(cells: &[u64], width: u32, x: u32, y: u32, value: u64) -> u64 {
    let (left, up, upleft) = neighbors(cells, width, x, y);
    value
        .wrapping_add(left)
        .wrapping_add(up)
        .wrapping_sub(upleft)
}

/// Inverse of [`derive_cell`]: `cell + upleft - left - up`.
#[inline]
pub(crate) fn recover_value(cells: &[u64], width: u32, x: u32, y: u32) -> u64 {
    let (left, up, upleft) = neighbors(cells, width, x, y);
    let idx = y as usize * width as usize + x as usize;
    cells[idx]
        .wrapping_add(upleft)
        .wrapping_sub(left)
        .wrapping_sub(up)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 grid [[1, 2], [3, 4]]
    fn create_2x2() -> Table {
        Table::from_intensities(2, 2, &[1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn test_accessors() {
        let table = create_2x2();
        assert_eq!(table.width(), 2);
        assert_eq!(table.height(), 2);
        assert_eq!(table.dimensions(), (2, 2));
        assert_eq!(table.bounds(), Rect::new_unchecked(0, 0, 2, 2));
        assert_eq!(table.cells(), &[1, 3, 4, 10]);
        assert_eq!(table.cell(1, 1), Some(10));
        assert_eq!(table.cell(2, 0), None);
        assert_eq!(table.total(), 10);
    }

    #[test]
    fn test_read_back_plain() {
        let table = create_2x2();
        assert_eq!(table.value(0, 0), Some(1));
        assert_eq!(table.value(1, 0), Some(2));
        assert_eq!(table.value(0, 1), Some(3));
        assert_eq!(table.value(1, 1), Some(4));
        assert_eq!(table.pixel(1, 1), Some(4));
        assert_eq!(table.pixel(0, 2), None);
        assert_eq!(table.to_intensities(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_read_back_squared() {
        let sq = SquaredTable::from_intensities(2, 2, &[1, 2, 3, 65535]).unwrap();
        assert_eq!(sq.value(1, 0), Some(4));
        assert_eq!(sq.value(1, 1), Some(65535 * 65535));
        assert_eq!(sq.pixel(1, 1), Some(65535));
        assert_eq!(sq.to_intensities(), vec![1, 2, 3, 65535]);
    }

    #[test]
    fn test_restore_kinds() {
        assert_eq!(Plain::restore(70_000), u16::MAX);
        assert_eq!(Squared::restore(24), 4);
        assert_eq!(Squared::accumulate(300), 90_000);
    }
}
