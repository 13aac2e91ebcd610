//! Integral Core - Summed-area tables for image statistics
//!
//! This crate provides integral images over single-channel 16-bit
//! intensities and constant-time statistics on top of them:
//!
//! - [`Table`] / [`SquaredTable`] - Running sums of intensities / squared intensities
//! - [`TableBuilder`] / [`IntensitySink`] - Cell-by-cell filling from a pixel source
//! - [`Rect`] - Query rectangles, clamped to the table's domain
//! - [`Window`] - Cached corner sums for sliding local statistics
//! - [`mean_stddev`] / [`mean_stddev_window`] - Mean and standard deviation
//!
//! Tables are write-then-read: once built (or once a builder is finished)
//! they are immutable, so they can be shared freely between readers.
//!
//! # Features
//!
//! - `tracing` - instrument table construction and statistics with `tracing` spans

pub mod error;
pub mod rect;
pub mod stats;
pub mod table;
pub mod window;

pub use error::{Error, Result};
pub use rect::Rect;
pub use stats::{MeanStdDev, VariancePolicy, mean_stddev, mean_stddev_window};
pub use table::{
    Accumulation, IntensitySink, Plain, Squared, SquaredTable, Table, TableBuilder, build_pair,
};
pub use window::{BinarizationCeiling, Window};
