//! Integral - Summed-area tables for gray images
//!
//! A summed-area table answers the sum of any axis-aligned rectangle of
//! intensities with four lookups. On top of that this crate provides:
//!
//! - Rectangle sums and means with clamping at the image edges
//! - Centered and strip windows for adaptive thresholding
//! - Local mean and standard deviation from a plain/squared table pair
//! - Filling tables from `image` buffers
//!
//! # Example
//!
//! ```
//! use integral::{Rect, VariancePolicy, build_pair, mean_stddev};
//!
//! let (table, squared) = build_pair(2, 2, &[1, 2, 3, 4]).unwrap();
//! assert_eq!(table.sum(&Rect::new(0, 0, 2, 1).unwrap()), 3);
//!
//! let stats = mean_stddev(&table, &squared, &table.bounds(), VariancePolicy::default()).unwrap();
//! assert_eq!(stats.mean, 2.5);
//! assert_eq!(stats.variance, 1.25);
//! ```

// Re-export core types (tables, queries, windows, statistics)
pub use integral_core::*;

// Image adapter as a module to keep `image` names out of the root
pub use integral_image as image;
