//! Mean, variance and standard deviation from paired tables
//!
//! Uses `Var = E[X^2] - E[X]^2` with `E[X]` from a [`Table`] and `E[X^2]`
//! from the [`SquaredTable`] built over the same grid. For near-constant
//! regions floating-point cancellation can make the difference slightly
//! negative; [`VariancePolicy`] decides what happens then.

#[cfg(feature = "tracing")]
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::rect::Rect;
use crate::table::{SquaredTable, Table};

/// Relative tolerance for [`VariancePolicy::Reject`], scaled by `E[X^2]`.
const VARIANCE_TOLERANCE: f64 = 1e-9;

/// How to handle a negative computed variance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariancePolicy {
    /// Clamp to zero before taking the square root
    #[default]
    ClampToZero,
    /// Return `Error::NegativeVariance` when the variance is below
    /// `-tolerance * E[X^2]`; smaller negatives are clamped to zero
    Reject,
    /// Take the square root of whatever comes out; a negative variance
    /// yields a NaN standard deviation
    Unguarded,
}

/// Population statistics of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanStdDev {
    /// Mean intensity
    pub mean: f64,
    /// Population variance (after applying the policy)
    pub variance: f64,
    /// Population standard deviation
    pub stddev: f64,
}

impl MeanStdDev {
    /// Combine `E[X]` and `E[X^2]` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NegativeVariance` only under [`VariancePolicy::Reject`].
    pub fn from_moments(mean: f64, mean_square: f64, policy: VariancePolicy) -> Result<Self> {
        let raw = mean_square - mean * mean;
        let variance = if raw >= 0.0 {
            raw
        } else {
            match policy {
                VariancePolicy::Unguarded => raw,
                VariancePolicy::ClampToZero => clamp_negative(raw),
                VariancePolicy::Reject => {
                    if raw < -VARIANCE_TOLERANCE * mean_square.abs() {
                        return Err(Error::NegativeVariance { variance: raw });
                    }
                    clamp_negative(raw)
                }
            }
        };

        Ok(MeanStdDev {
            mean,
            variance,
            stddev: variance.sqrt(),
        })
    }
}

fn clamp_negative(_raw: f64) -> f64 {
    #[cfg(feature = "tracing")]
    debug!(variance = _raw, "clamping negative variance to zero");
    0.0
}

fn check_paired(table: &Table, squared: &SquaredTable) -> Result<()> {
    if table.dimensions() != squared.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: table.dimensions(),
            actual: squared.dimensions(),
        });
    }
    Ok(())
}

/// Mean and standard deviation of `rect`, clamped to the domain.
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if the tables differ in size,
/// `Error::DegenerateQuery` if `rect` does not overlap the domain, and
/// `Error::NegativeVariance` under [`VariancePolicy::Reject`].
///
/// # Examples
///
/// ```
/// use integral_core::{Rect, VariancePolicy, build_pair, mean_stddev};
///
/// let (table, squared) = build_pair(2, 2, &[1, 2, 3, 4]).unwrap();
/// let stats = mean_stddev(&table, &squared, &table.bounds(), VariancePolicy::default()).unwrap();
/// assert_eq!(stats.mean, 2.5);
/// assert_eq!(stats.variance, 1.25);
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip(table, squared), fields(w = table.width(), h = table.height()))
)]
pub fn mean_stddev(
    table: &Table,
    squared: &SquaredTable,
    rect: &Rect,
    policy: VariancePolicy,
) -> Result<MeanStdDev> {
    check_paired(table, squared)?;
    let mean = table.mean(rect)?;
    let mean_square = squared.mean(rect)?;
    MeanStdDev::from_moments(mean, mean_square, policy)
}

/// Mean and standard deviation of the centered window around `(x, y)`.
///
/// The window has the same shape as [`Table::window`].
///
/// # Errors
///
/// Same as [`mean_stddev`], with `Error::DegenerateQuery` also covering the
/// window validation of [`Table::window`].
pub fn mean_stddev_window(
    table: &Table,
    squared: &SquaredTable,
    x: u32,
    y: u32,
    size: u32,
    policy: VariancePolicy,
) -> Result<MeanStdDev> {
    check_paired(table, squared)?;
    let mean = table.window(x, y, size)?.mean();
    let mean_square = squared.window(x, y, size)?.mean();
    MeanStdDev::from_moments(mean, mean_square, policy)
}
