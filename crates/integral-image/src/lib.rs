//! integral-image - Bridge between `image` buffers and integral tables
//!
//! Decoding stays with the `image` crate; this crate only moves already
//! decoded gray pixels into an [`IntensitySink`] and back out:
//!
//! - [`draw_gray8`] / [`draw_gray16`] / [`draw_dynamic`] - Blit an image into
//!   any sink at an offset
//! - [`table_from_gray8`] / [`table_from_gray16`] / [`table_from_dynamic`] -
//!   Build a table of the image's size in one call
//! - [`to_gray16`] - Read a table back as a 16-bit gray image
//!
//! # Examples
//!
//! ```
//! use image::{GrayImage, Luma};
//! use integral_core::Table;
//! use integral_image::table_from_gray8;
//!
//! let img = GrayImage::from_fn(4, 3, |x, y| Luma([(x + y) as u8]));
//! let table: Table = table_from_gray8(&img).unwrap();
//! assert_eq!(table.total(), 30);
//! ```

use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use integral_core::{Accumulation, IntensitySink, Result, Table};

/// 16-bit grayscale image buffer
pub type Gray16Image = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Write every pixel of `img` into `sink`, with `img`'s origin at `(x0, y0)`.
///
/// Pixels are written row-major. An 8-bit level is written as-is (0..=255).
///
/// # Errors
///
/// Propagates the first sink error, typically `Error::OutOfRangeWrite` when
/// the image does not fit at the offset. Pixels before the failing one have
/// already been written.
pub fn draw_gray8<S: IntensitySink + ?Sized>(
    sink: &mut S,
    img: &GrayImage,
    x0: u32,
    y0: u32,
) -> Result<()> {
    for (x, y, px) in img.enumerate_pixels() {
        sink.write_intensity(x0.saturating_add(x), y0.saturating_add(y), px.0[0] as u16)?;
    }
    Ok(())
}

/// Write every pixel of a 16-bit gray image into `sink` at `(x0, y0)`.
///
/// # Errors
///
/// Same as [`draw_gray8`].
pub fn draw_gray16<S: IntensitySink + ?Sized>(
    sink: &mut S,
    img: &Gray16Image,
    x0: u32,
    y0: u32,
) -> Result<()> {
    for (x, y, px) in img.enumerate_pixels() {
        sink.write_intensity(x0.saturating_add(x), y0.saturating_add(y), px.0[0])?;
    }
    Ok(())
}

/// Write any decoded image into `sink` at `(x0, y0)` via 16-bit luma.
///
/// Color images are converted to luminance, and 8-bit levels are widened to
/// 16 bits (255 becomes 65535).
///
/// # Errors
///
/// Same as [`draw_gray8`].
pub fn draw_dynamic<S: IntensitySink + ?Sized>(
    sink: &mut S,
    img: &DynamicImage,
    x0: u32,
    y0: u32,
) -> Result<()> {
    draw_gray16(sink, &img.to_luma16(), x0, y0)
}

/// Build a table from an 8-bit gray image.
///
/// # Errors
///
/// Returns `Error::InvalidDimension` for an empty image.
pub fn table_from_gray8<K: Accumulation>(img: &GrayImage) -> Result<Table<K>> {
    let data: Vec<u16> = img.as_raw().iter().map(|&v| v as u16).collect();
    Table::from_intensities(img.width(), img.height(), &data)
}

/// Build a table from a 16-bit gray image.
///
/// # Errors
///
/// Returns `Error::InvalidDimension` for an empty image.
pub fn table_from_gray16<K: Accumulation>(img: &Gray16Image) -> Result<Table<K>> {
    Table::from_intensities(img.width(), img.height(), img.as_raw())
}

/// Build a table from any decoded image via 16-bit luma.
///
/// # Errors
///
/// Returns `Error::InvalidDimension` for an empty image.
pub fn table_from_dynamic<K: Accumulation>(img: &DynamicImage) -> Result<Table<K>> {
    table_from_gray16(&img.to_luma16())
}

/// Read a table back as a 16-bit gray image.
///
/// Each pixel is the table's original intensity ([`Table::pixel`]), so
/// `to_gray16(&table_from_gray16(&img)?)` reproduces `img`.
pub fn to_gray16<K: Accumulation>(table: &Table<K>) -> Gray16Image {
    ImageBuffer::from_fn(table.width(), table.height(), |x, y| {
        Luma([table.pixel(x, y).unwrap_or(0)])
    })
}
