//! integral-test - Regression test framework for integral tables
//!
//! This crate provides a small regression harness and deterministic test
//! grids for the integral table crates:
//!
//! - [`RegParams`] - Numbered comparisons that are collected and reported
//!   together instead of panicking at the first mismatch
//! - [`grids`] - Synthetic intensity grids (gradients, checkerboards,
//!   seeded random data) and brute-force oracles
//!
//! # Usage
//!
//! ```ignore
//! use integral_test::RegParams;
//!
//! let mut rp = RegParams::new("table");
//! rp.compare_sums(60, table.sum(&table.bounds()));
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to echo every comparison

mod error;
pub mod grids;
mod params;

pub use error::{TestError, TestResult};
pub use grids::{Grid, brute_force_mean, brute_force_sum, brute_force_sum_squares};
pub use params::{RegParams, RegTestMode};
