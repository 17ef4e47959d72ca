//! Direct Radon transform by numerical line integration.
//!
//! O(m·n²) per image and accepts any image shape. Mostly useful as a
//! reference for the fast engine.

use std::f64::consts::PI;
use std::time::Instant;

use log::debug;
use ndarray::Array2;

use crate::error::{DrtError, Result};
use crate::interp::{interp1d, interp2d, uniform_grid};

/// Centred pixel coordinates `i - (len-1)/2`.
fn centred_grid(len: usize) -> Vec<f64> {
    uniform_grid(-(len as f64 - 1.0) / 2.0, 1.0, len)
}

/// Radius of the disk enclosing an (rows × cols) image.
fn enclosing_radius(rows: usize, cols: usize) -> f64 {
    let x = (rows as f64 - 1.0) / 2.0;
    let y = (cols as f64 - 1.0) / 2.0;
    x.hypot(y)
}

/// Sinogram of `image` with `rays` parallel rays and `angles` directions in `[0, π)`.
///
/// `rays` defaults to the smallest power of two above the image height and
/// `angles` to twice the ray count. Each ray is integrated with `rays`
/// samples spaced like the rays themselves; the sum is not scaled by the
/// sample spacing.
pub fn scan_slow(image: &Array2<f64>, rays: Option<usize>, angles: Option<usize>) -> Result<Array2<f64>> {
    let (rows, cols) = image.dim();
    if rows == 0 || cols == 0 {
        return Err(DrtError::InvalidParameter("image is empty".into()));
    }
    let rays = rays.unwrap_or_else(|| (rows + 1).next_power_of_two());
    let angles = angles.unwrap_or(2 * rays);
    if rays < 2 || angles == 0 {
        return Err(DrtError::InvalidParameter(format!(
            "need at least 2 rays and 1 angle, got {rays}x{angles}"
        )));
    }
    let t0 = Instant::now();

    let x = centred_grid(rows);
    let y = centred_grid(cols);
    let radius = enclosing_radius(rows, cols);
    let dr = 2.0 * radius / (rays - 1) as f64;
    let dth = PI / angles as f64;
    let view = image.view();

    let mut b = Array2::zeros((rays, angles));
    for j in 0..angles {
        let (sth, cth) = (j as f64 * dth).sin_cos();
        for i in 0..rays {
            let r = i as f64 * dr - radius;
            let mut sum = 0.0;
            for k in 0..rays {
                let s = k as f64 * dr - radius;
                sum += interp2d(r * cth - s * sth, r * sth + s * cth, &x, &y, view, 0.0);
            }
            b[[i, j]] = sum;
        }
    }
    debug!(
        "slow scan {}x{} -> {}x{} in {:.3} ms",
        rows,
        cols,
        rays,
        angles,
        t0.elapsed().as_secs_f64() * 1e3
    );
    Ok(b)
}

/// Back-projection of a (filtered) sinogram onto an (rows × cols) image.
///
/// The output defaults to a square of half the ray count. Each pixel is the
/// mean over angles of the sinogram interpolated at the pixel's ray offset.
pub fn back_scan_slow(sinogram: &Array2<f64>, rows: Option<usize>, cols: Option<usize>) -> Result<Array2<f64>> {
    let (rays, angles) = sinogram.dim();
    if rays < 2 || angles == 0 {
        return Err(DrtError::InvalidParameter(format!(
            "need at least 2 rays and 1 angle, got {rays}x{angles}"
        )));
    }
    let rows = rows.unwrap_or(rays / 2);
    let cols = cols.unwrap_or(rows);
    let t0 = Instant::now();

    let radius = enclosing_radius(rows, cols);
    let r = uniform_grid(-radius, 2.0 * radius / (rays - 1) as f64, rays);
    let dth = PI / angles as f64;
    let trig: Vec<(f64, f64)> = (0..angles).map(|k| (k as f64 * dth).sin_cos()).collect();

    let mut b = Array2::zeros((rows, cols));
    let x = centred_grid(rows);
    let y = centred_grid(cols);
    for (i, &xi) in x.iter().enumerate() {
        for (j, &yj) in y.iter().enumerate() {
            let mut sum = 0.0;
            for (k, &(sth, cth)) in trig.iter().enumerate() {
                sum += interp1d(xi * cth + yj * sth, &r, sinogram.column(k), 0.0);
            }
            b[[i, j]] = sum / angles as f64;
        }
    }
    debug!(
        "slow back-scan {}x{} -> {}x{} in {:.3} ms",
        rays,
        angles,
        rows,
        cols,
        t0.elapsed().as_secs_f64() * 1e3
    );
    Ok(b)
}
