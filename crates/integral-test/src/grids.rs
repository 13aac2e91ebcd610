//! Synthetic intensity grids and brute-force oracles
//!
//! Grids are deterministic so regression output is reproducible: the
//! random generator is seeded explicitly.

use integral_core::{Rect, SquaredTable, Table};
use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::error::{TestError, TestResult};

/// A row-major intensity grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Intensities (row-major)
    pub data: Vec<u16>,
}

impl Grid {
    /// Build a grid from a per-pixel function
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> u16) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Grid {
            width,
            height,
            data,
        }
    }

    /// Every pixel set to `value`
    pub fn constant(width: u32, height: u32, value: u16) -> Self {
        Self::from_fn(width, height, |_, _| value)
    }

    /// Diagonal gradient spanning `0..=max`
    pub fn gradient(width: u32, height: u32, max: u16) -> Self {
        let span = (width + height).saturating_sub(2).max(1) as u64;
        Self::from_fn(width, height, |x, y| {
            ((x + y) as u64 * max as u64 / span) as u16
        })
    }

    /// Binarized checkerboard of `cell` x `cell` squares, "on" squares set to `on`
    pub fn checkerboard(width: u32, height: u32, cell: u32, on: u16) -> TestResult<Self> {
        if cell == 0 {
            return Err(TestError::InvalidGrid("checkerboard cell must be > 0".into()));
        }
        Ok(Self::from_fn(width, height, |x, y| {
            if (x / cell + y / cell) % 2 == 0 { on } else { 0 }
        }))
    }

    /// Uniform random intensities in `0..=max`, reproducible from `seed`
    pub fn random(width: u32, height: u32, max: u16, seed: u64) -> TestResult<Self> {
        let dist = Uniform::new_inclusive(0u16, max)
            .map_err(|e| TestError::InvalidGrid(format!("uniform range: {}", e)))?;
        let mut rng = StdRng::seed_from_u64(seed);
        let data = (0..width as usize * height as usize)
            .map(|_| dist.sample(&mut rng))
            .collect();
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Intensity at `(x, y)`
    #[inline]
    pub fn at(&self, x: u32, y: u32) -> u16 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Domain rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.width as i32, self.height as i32)
    }

    /// Build the integral table of this grid
    pub fn table(&self) -> TestResult<Table> {
        Ok(Table::from_intensities(self.width, self.height, &self.data)?)
    }

    /// Build the squared integral table of this grid
    pub fn squared_table(&self) -> TestResult<SquaredTable> {
        Ok(SquaredTable::from_intensities(
            self.width,
            self.height,
            &self.data,
        )?)
    }

    fn pixels_in(&self, rect: &Rect) -> impl Iterator<Item = u64> + '_ {
        let clipped = rect.clip(self.width as i32, self.height as i32);
        clipped.into_iter().flat_map(move |r| {
            (r.y..r.bottom()).flat_map(move |y| {
                (r.x..r.right()).map(move |x| self.at(x as u32, y as u32) as u64)
            })
        })
    }
}

/// Sum of `grid` intensities inside `rect` by direct scanning
pub fn brute_force_sum(grid: &Grid, rect: &Rect) -> u64 {
    grid.pixels_in(rect).sum()
}

/// Sum of squared `grid` intensities inside `rect` by direct scanning
pub fn brute_force_sum_squares(grid: &Grid, rect: &Rect) -> u64 {
    grid.pixels_in(rect).map(|v| v * v).sum()
}

/// Mean intensity inside `rect`, or `None` if it covers no pixels
pub fn brute_force_mean(grid: &Grid, rect: &Rect) -> Option<f64> {
    let area = rect.clip(grid.width as i32, grid.height as i32)?.area();
    Some(brute_force_sum(grid, rect) as f64 / area as f64)
}
