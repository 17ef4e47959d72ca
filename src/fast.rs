//! Fast O(n² log n) discrete Radon transform and its adjoint.
//!
//! Sums run along digital lines of rational slope, built by divide and
//! conquer over column ranges (Brady 1998; Press 2006). Each quadrant buffer
//! is transformed independently.

use std::time::Instant;

use log::debug;
use ndarray::{s, Array2, ArrayViewMut2};

use crate::buffer::{require_power_of_two, require_square};
use crate::error::{DrtError, Result};
use crate::radon::Radon;

/// Forward recursion over columns `[y, y+h)` of one quadrant buffer.
///
/// Afterwards `a[i, y+j]` holds the sum of the original columns along the
/// digital line from `(i, y)` to `(i-j, y+h-1)`. Rows are merged last to first
/// so that row `i` only reads rows `<= i` that are not yet merged.
pub(crate) fn scan_region(mut a: ArrayViewMut2<f64>, h: usize, y: usize) {
    debug_assert!(h.is_power_of_two() && y + h <= a.ncols());
    if h < 2 {
        return;
    }
    let h1 = h >> 1;
    let y1 = y + h1;
    if h1 > 1 {
        scan_region(a.view_mut(), h1, y);
        scan_region(a.view_mut(), h1, y1);
    }

    // rows past ncols + h are still zero at this level
    let rows = (a.ncols() + h).min(a.nrows());
    let mut merged = vec![0.0; h];
    for i in (0..rows).rev() {
        for (j, b) in merged.iter_mut().enumerate() {
            let k = j >> 1;
            let l = (j + 1) >> 1;
            *b = a[[i, y + k]];
            if i >= l {
                *b += a[[i - l, y1 + k]];
            }
        }
        for (j, &b) in merged.iter().enumerate() {
            a[[i, y + j]] = b;
        }
    }
}

/// Adjoint recursion over columns `[y, y+h)` of one quadrant buffer.
///
/// Afterwards `a[i, y+j]` holds the sum along the digital line from `(i, y)`
/// to `(i+j, y+h-1)`. Rows run upward, mirroring [`scan_region`].
pub(crate) fn back_scan_region(mut a: ArrayViewMut2<f64>, h: usize, y: usize) {
    debug_assert!(h.is_power_of_two() && y + h <= a.ncols());
    if h < 2 {
        return;
    }
    let h1 = h >> 1;
    let y1 = y + h1;
    if h1 > 1 {
        back_scan_region(a.view_mut(), h1, y);
        back_scan_region(a.view_mut(), h1, y1);
    }

    let rows = a.nrows().saturating_sub(h);
    let mut merged = vec![0.0; h];
    for i in 0..rows {
        for (j, b) in merged.iter_mut().enumerate() {
            let k = j >> 1;
            let l = (j + 1) >> 1;
            *b = a[[i, y + k]] + a[[i + l, y1 + k]];
        }
        for (j, &b) in merged.iter().enumerate() {
            a[[i, y + j]] = b;
        }
    }
}

/// Fast Radon transform of a square power-of-two image into `d`.
///
/// Quadrant seeds (rows `0..n`, the rest zero):
/// - 0: `A[i, j]`, lines from `(i, 0)` to `(i-j, n-1)`, 0°..45°
/// - 1: `A[j, i]`, lines from `(0, i)` to `(n-1, i-j)`, 45°..90°
/// - 2: `A[n-1-j, i]`, lines from `(n-1, i)` to `(0, i-j)`, 90°..135°
/// - 3: `A[n-1-i, j]`, lines from `(i, n-1)` to `(i-j, 0)`, 135°..180°
pub fn scan_fast_into(d: &mut Radon, image: &Array2<f64>) -> Result<()> {
    let n = require_square(image)?;
    require_power_of_two("image size", n)?;
    let t0 = Instant::now();

    d.set_size(n)?;
    d.clear();
    let flipped = image.slice(s![..;-1, ..]);
    let [mut q0, mut q1, mut q2, mut q3] = d.quadrants_mut();
    q0.slice_mut(s![..n, ..]).assign(image);
    q1.slice_mut(s![..n, ..]).assign(&image.t());
    q2.slice_mut(s![..n, ..]).assign(&flipped.t());
    q3.slice_mut(s![..n, ..]).assign(&flipped);

    for q in [q0, q1, q2, q3] {
        scan_region(q, n, 0);
    }
    debug!("fast scan n={} in {:.3} ms", n, t0.elapsed().as_secs_f64() * 1e3);
    Ok(())
}

/// Fast Radon transform of a square power-of-two image.
pub fn scan_fast(image: &Array2<f64>) -> Result<Radon> {
    let mut d = Radon::default();
    scan_fast_into(&mut d, image)?;
    Ok(d)
}

/// Fast back-projection of filtered quadrants into an n×n image.
///
/// Only an inverse of [`scan_fast`] when `d` went through
/// [`filter_radon`](crate::filter::filter_radon) first.
pub fn back_scan_fast(d: &Radon) -> Result<Array2<f64>> {
    let n = d.size();
    require_power_of_two("radon size", n)?;
    let t0 = Instant::now();

    let mut a = d.clone();
    for (k, mut q) in a.quadrants_mut().into_iter().enumerate() {
        // odd quadrants share their edge rays with their neighbours
        if k & 1 == 1 {
            q.column_mut(0).fill(0.0);
            q.column_mut(n - 1).fill(0.0);
        }
        back_scan_region(q, n, 0);
    }

    let c = 0.25 / (n - 1) as f64;
    let mut image = Array2::zeros((n, n));
    for i in 0..n {
        let ir = n - 1 - i;
        for j in 0..n {
            image[[i, j]] = (a[0][[i, j]] + a[1][[j, i]] + a[2][[j, ir]] + a[3][[ir, j]]) * c;
        }
    }
    debug!("fast back-scan n={} in {:.3} ms", n, t0.elapsed().as_secs_f64() * 1e3);
    Ok(image)
}

fn require_expansion(e: usize) -> Result<()> {
    if e == 0 || !e.is_power_of_two() {
        return Err(DrtError::InvalidParameter(format!(
            "expansion factor must be a power of two, got {e}"
        )));
    }
    Ok(())
}

/// Columns of the expanded transform that stand in for the n original slopes.
fn contracted_columns(n: usize, m: usize) -> Vec<usize> {
    (0..n)
        .map(|c| (2 * (m - 1) * c + n - 1) / (2 * (n - 1)))
        .collect()
}

/// Fast transform computed on an `e`-times expanded grid, then contracted
/// back to size n (Brady 1998, section 3.4).
///
/// Expansion samples the digital lines more finely, which reduces their
/// deviation from straight rays.
pub fn scan_fast_expanded(image: &Array2<f64>, e: usize) -> Result<Radon> {
    require_expansion(e)?;
    let n = require_square(image)?;
    require_power_of_two("image size", n)?;
    if e == 1 {
        return scan_fast(image);
    }

    let m = n * e;
    let mut big = Array2::zeros((m, m));
    for i in 0..m {
        for c in 0..n {
            big[[i, e * c]] = image[[i / e, c]];
        }
    }
    let expanded = scan_fast(&big)?;

    let cols = contracted_columns(n, m);
    let mut d = Radon::new(n)?;
    for (k, mut q) in d.quadrants_mut().into_iter().enumerate() {
        for r in 0..2 * n {
            for (c, &jc) in cols.iter().enumerate() {
                q[[r, c]] = expanded[k][[e * r, jc]];
            }
        }
    }
    Ok(d)
}

/// Adjoint of [`scan_fast_expanded`]: back-projection on the expanded grid.
pub fn back_scan_fast_expanded(d: &Radon, e: usize) -> Result<Array2<f64>> {
    require_expansion(e)?;
    let n = d.size();
    require_power_of_two("radon size", n)?;
    if e == 1 {
        return back_scan_fast(d);
    }

    let m = n * e;
    let mut big = Radon::new(m)?;
    for (k, mut q) in big.quadrants_mut().into_iter().enumerate() {
        for r in 0..2 * m {
            for c in 0..n {
                q[[r, e * c]] = d[k][[r / e, c]];
            }
        }
    }
    let expanded = back_scan_fast(&big)?;

    let cols = contracted_columns(n, m);
    let mut image = Array2::zeros((n, n));
    for i in 0..n {
        for (c, &jc) in cols.iter().enumerate() {
            image[[i, c]] = expanded[[e * i, jc]];
        }
    }
    Ok(image)
}
