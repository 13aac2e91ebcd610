//! Table construction
//!
//! Two ways to populate a table:
//!
//! - Batch: [`Table::from_intensities`] / [`Table::from_rows`] consume a
//!   complete grid in one row-major pass.
//! - Incremental: [`TableBuilder`] is filled through the [`IntensitySink`]
//!   capability by an external pixel source, then frozen with
//!   [`TableBuilder::finish`].
//!
//! Both apply the recurrence `a(x,y) = v(x,y) + a(x-1,y) + a(x,y-1) - a(x-1,y-1)`
//! with out-of-domain neighbours taken as 0.

#[cfg(feature = "tracing")]
use tracing::instrument;

use std::marker::PhantomData;

use super::{Accumulation, Plain, SquaredTable, Table, derive_cell};
use crate::error::{Error, Result};

/// Narrow write capability used to fill a table from an external pixel source.
///
/// Implementors accept one intensity per coordinate. Writing a coordinate a
/// second time replaces the earlier value rather than adding to it.
pub trait IntensitySink {
    /// Write the intensity of pixel `(x, y)`
    fn write_intensity(&mut self, x: u32, y: u32, value: u16) -> Result<()>;
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

impl<K: Accumulation> Table<K> {
    /// Build a table from a row-major intensity grid.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `data` - `width * height` intensities, row by row
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0, and
    /// `Error::DataLengthMismatch` if `data` has the wrong length.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(data)))]
    pub fn from_intensities(width: u32, height: u32, data: &[u16]) -> Result<Self> {
        check_dimensions(width, height)?;
        let size = width as usize * height as usize;
        if data.len() != size {
            return Err(Error::DataLengthMismatch {
                expected: size,
                actual: data.len(),
            });
        }

        let mut cells = vec![0u64; size];
        for y in 0..height {
            for x in 0..width {
                let idx = y as usize * width as usize + x as usize;
                let cell = derive_cell(&cells, width, x, y, K::accumulate(data[idx]));
                cells[idx] = cell;
            }
        }

        Ok(Table::from_parts(width, height, cells))
    }

    /// Build a table from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if there are no rows, the first
    /// row is empty, or either count does not fit in `u32` (reported as
    /// `u32::MAX`). Returns `Error::DimensionMismatch` if the rows are
    /// ragged; both shapes are then single-row shapes, `(width, 1)` of the
    /// first row against `(len, 1)` of the first row that differs.
    pub fn from_rows<R: AsRef<[u16]>>(rows: &[R]) -> Result<Self> {
        let height = u32::try_from(rows.len());
        let width = u32::try_from(rows.first().map_or(0, |r| r.as_ref().len()));
        let (width, height) = match (width, height) {
            (Ok(w), Ok(h)) => (w, h),
            (w, h) => {
                return Err(Error::InvalidDimension {
                    width: w.unwrap_or(u32::MAX),
                    height: h.unwrap_or(u32::MAX),
                });
            }
        };
        check_dimensions(width, height)?;

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::DimensionMismatch {
                    expected: (width, 1),
                    actual: (u32::try_from(row.len()).unwrap_or(u32::MAX), 1),
                });
            }
            data.extend_from_slice(row);
        }

        Self::from_intensities(width, height, &data)
    }
}

/// Build a [`Table`] and its [`SquaredTable`] from the same grid.
///
/// # Errors
///
/// Same as [`Table::from_intensities`].
pub fn build_pair(width: u32, height: u32, data: &[u16]) -> Result<(Table, SquaredTable)> {
    let table = Table::<Plain>::from_intensities(width, height, data)?;
    let squared = SquaredTable::from_intensities(width, height, data)?;
    Ok((table, squared))
}

/// Incremental table builder
///
/// Starts with every cell zero. Writes must reach each cell's left, upper and
/// upper-left neighbours first for the final table to be consistent; a
/// row-major pass (top to bottom, left to right) always satisfies this.
///
/// # Examples
///
/// ```
/// use integral_core::{IntensitySink, TableBuilder};
///
/// let mut builder: TableBuilder = TableBuilder::new(2, 2).unwrap();
/// for (i, v) in [1u16, 2, 3, 4].into_iter().enumerate() {
///     builder.write_intensity(i as u32 % 2, i as u32 / 2, v).unwrap();
/// }
/// let table = builder.finish();
/// assert_eq!(table.cells(), &[1, 3, 4, 10]);
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder<K: Accumulation = Plain> {
    width: u32,
    height: u32,
    cells: Vec<u64>,
    _kind: PhantomData<K>,
}

impl<K: Accumulation> TableBuilder<K> {
    /// Create a zeroed builder
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(TableBuilder {
            width,
            height,
            cells: vec![0u64; width as usize * height as usize],
            _kind: PhantomData,
        })
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

    /// Freeze the builder into a queryable table
    pub fn finish(self) -> Table<K> {
        Table::from_parts(self.width, self.height, self.cells)
    }
}

impl<K: Accumulation> IntensitySink for TableBuilder<K> {
    fn write_intensity(&mut self, x: u32, y: u32, value: u16) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfRangeWrite {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = y as usize * self.width as usize + x as usize;
        let cell = derive_cell(&self.cells, self.width, x, y, K::accumulate(value));
        self.cells[idx] = cell;
        Ok(())
    }
}
