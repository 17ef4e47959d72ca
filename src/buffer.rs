//! Dense buffer helpers on top of `ndarray::Array2`.
//!
//! The transforms keep reusing caller-owned buffers, so resizing follows one
//! rule: an unchanged shape keeps its data, a changed shape starts from zeros.

use ndarray::Array2;

use crate::error::{DrtError, Result};

/// Reshape `a` to `(rows, cols)`.
///
/// Returns `false` and leaves the contents alone when the shape already
/// matches; otherwise reallocates a zero-filled buffer and returns `true`.
pub fn resize(a: &mut Array2<f64>, rows: usize, cols: usize) -> bool {
    if a.dim() == (rows, cols) {
        return false;
    }
    *a = Array2::zeros((rows, cols));
    true
}

/// Check that `value` is a power of two usable by the fast path (at least 2).
pub fn require_power_of_two(what: &'static str, value: usize) -> Result<()> {
    if value < 2 || !value.is_power_of_two() {
        return Err(DrtError::NotPowerOfTwo { what, value });
    }
    Ok(())
}

/// Check that `image` is square and return its side length.
pub fn require_square(image: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = image.dim();
    if rows != cols {
        return Err(DrtError::NotSquare { rows, cols });
    }
    Ok(rows)
}
