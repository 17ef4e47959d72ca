//! Linear and bilinear interpolation on monotonic sample grids.
//!
//! Queries outside the sampled domain are not errors: they return the
//! caller's fill value.

use ndarray::{ArrayView1, ArrayView2};

/// Index `i` of the grid segment `[xs[i], xs[i+1]]` holding `x`, or `None`
/// when `x` lies outside the grid. Works for ascending and descending grids.
pub fn locate(xs: &[f64], x: f64) -> Option<usize> {
    let n = xs.len();
    if n < 2 {
        return None;
    }
    if x == xs[0] {
        return Some(0);
    }
    if x == xs[n - 1] {
        return Some(n - 2);
    }

    let ascending = xs[n - 1] >= xs[0];
    let (mut lo, mut hi) = (-1isize, n as isize);
    while hi - lo > 1 {
        let mid = (hi + lo) >> 1;
        if (x >= xs[mid as usize]) == ascending {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    if lo < 0 || lo as usize >= n - 1 {
        None
    } else {
        Some(lo as usize)
    }
}

/// Linear interpolation of `(xs, ys)` at `x`.
pub fn interp1d(x: f64, xs: &[f64], ys: ArrayView1<f64>, fill: f64) -> f64 {
    let Some(i) = locate(xs, x) else {
        return fill;
    };
    let u = (x - xs[i]) / (xs[i + 1] - xs[i]);
    (1.0 - u) * ys[i] + u * ys[i + 1]
}

/// Bilinear interpolation of `zs[[i, j]]` sampled at `(xs[i], ys[j])`.
pub fn interp2d(x: f64, y: f64, xs: &[f64], ys: &[f64], zs: ArrayView2<f64>, fill: f64) -> f64 {
    let (Some(i), Some(j)) = (locate(xs, x), locate(ys, y)) else {
        return fill;
    };
    let u = (x - xs[i]) / (xs[i + 1] - xs[i]);
    let v = (y - ys[j]) / (ys[j + 1] - ys[j]);
    (1.0 - u) * (1.0 - v) * zs[[i, j]]
        + u * (1.0 - v) * zs[[i + 1, j]]
        + u * v * zs[[i + 1, j + 1]]
        + (1.0 - u) * v * zs[[i, j + 1]]
}

/// Uniform grid `start + i * step` for `i` in `0..len`.
pub fn uniform_grid(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 * step + start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    #[test]
    fn locate_interior_and_edges() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(locate(&xs, 0.0), Some(0));
        assert_eq!(locate(&xs, 0.5), Some(0));
        assert_eq!(locate(&xs, 2.0), Some(2));
        assert_eq!(locate(&xs, 2.999), Some(2));
        assert_eq!(locate(&xs, 3.0), Some(2));
        assert_eq!(locate(&xs, -0.1), None);
        assert_eq!(locate(&xs, 3.1), None);
    }

    #[test]
    fn locate_descending_grid() {
        let xs = [3.0, 2.0, 1.0, 0.0];
        assert_eq!(locate(&xs, 2.5), Some(0));
        assert_eq!(locate(&xs, 0.5), Some(2));
        assert_eq!(locate(&xs, 0.0), Some(2));
        assert_eq!(locate(&xs, 4.0), None);
    }

    #[test]
    fn interp1d_linear_and_fill() {
        let xs = [0.0, 1.0, 2.0];
        let ys = Array1::from(vec![0.0, 10.0, 30.0]);
        assert_abs_diff_eq!(interp1d(0.25, &xs, ys.view(), -1.0), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp1d(1.5, &xs, ys.view(), -1.0), 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp1d(2.0, &xs, ys.view(), -1.0), 30.0, epsilon = 1e-12);
        assert_eq!(interp1d(2.5, &xs, ys.view(), -1.0), -1.0);
        assert_eq!(interp1d(-0.5, &xs, ys.view(), -1.0), -1.0);
    }

    #[test]
    fn interp2d_reproduces_bilinear_plane() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 2.0];
        // z = 1 + 2x + 3y + xy is bilinear, so interpolation is exact
        let z = |x: f64, y: f64| 1.0 + 2.0 * x + 3.0 * y + x * y;
        let zs = array![[z(0., 0.), z(0., 2.)], [z(1., 0.), z(1., 2.)], [z(2., 0.), z(2., 2.)]];
        for &(x, y) in &[(0.3, 0.7), (1.5, 1.9), (2.0, 2.0), (0.0, 0.0)] {
            assert_abs_diff_eq!(interp2d(x, y, &xs, &ys, zs.view(), 0.0), z(x, y), epsilon = 1e-12);
        }
        assert_eq!(interp2d(1.0, 2.5, &xs, &ys, zs.view(), 42.0), 42.0);
        assert_eq!(interp2d(-1.0, 1.0, &xs, &ys, zs.view(), 42.0), 42.0);
    }

    #[test]
    fn uniform_grid_values() {
        assert_eq!(uniform_grid(-1.0, 0.5, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }
}
