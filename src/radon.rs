//! The four-quadrant container produced by the fast engine.

use std::ops::Index;

use ndarray::{Array2, ArrayViewMut2};

use crate::buffer::{require_power_of_two, resize};
use crate::error::Result;

/// Number of 45° quadrant buffers.
pub const QUADRANTS: usize = 4;

/// Fast discrete Radon transform of an n×n image.
///
/// Quadrant `k` covers projection directions in `[45k°, 45(k+1)°]` and has
/// shape `(2n, n)`: row = ray offset, column = slope index. All quadrants
/// always share one shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Radon {
    quadrants: [Array2<f64>; QUADRANTS],
}

impl Default for Radon {
    fn default() -> Self {
        Self {
            quadrants: std::array::from_fn(|_| Array2::zeros((0, 0))),
        }
    }
}

impl Radon {
    /// Zero-filled structure for an n×n image.
    pub fn new(n: usize) -> Result<Self> {
        let mut radon = Self::default();
        radon.set_size(n)?;
        Ok(radon)
    }

    /// Image side length `n` (the number of columns of each quadrant).
    pub fn size(&self) -> usize {
        self.quadrants[0].ncols()
    }

    /// Resize all quadrants to `(2n, n)`.
    ///
    /// A no-op when `n` equals the current size, so data survives repeated
    /// use of one structure; any other `n` zero-fills every quadrant.
    pub fn set_size(&mut self, n: usize) -> Result<()> {
        require_power_of_two("radon size", n)?;
        if n == self.size() {
            return Ok(());
        }
        for q in self.quadrants.iter_mut() {
            resize(q, 2 * n, n);
        }
        Ok(())
    }

    /// Set every quadrant entry to zero without touching the shape.
    pub fn clear(&mut self) {
        for q in self.quadrants.iter_mut() {
            q.fill(0.0);
        }
    }

    pub fn quadrants(&self) -> &[Array2<f64>; QUADRANTS] {
        &self.quadrants
    }

    /// Writable view of quadrant `k`. Views can change values, never shapes.
    pub fn quadrant_mut(&mut self, k: usize) -> ArrayViewMut2<'_, f64> {
        self.quadrants[k].view_mut()
    }

    /// Writable views of all four quadrants at once.
    pub fn quadrants_mut(&mut self) -> [ArrayViewMut2<'_, f64>; QUADRANTS] {
        let [q0, q1, q2, q3] = &mut self.quadrants;
        [q0.view_mut(), q1.view_mut(), q2.view_mut(), q3.view_mut()]
    }
}

impl Index<usize> for Radon {
    type Output = Array2<f64>;

    fn index(&self, k: usize) -> &Array2<f64> {
        &self.quadrants[k]
    }
}
