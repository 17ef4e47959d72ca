//! Ramp (|ω|) filter of filtered back-projection.
//!
//! Filtering runs along the ray-offset axis (rows), one column at a time.
//! The frequency response is fixed: DC zeroed, Nyquist scaled by π/2, bin `k`
//! scaled by `k·π/len`. Reconstruction accuracy depends on these constants.

use std::f64::consts::{FRAC_PI_2, PI};

use log::debug;
use ndarray::{Array2, ArrayViewMut2, Axis};

use crate::buffer::require_power_of_two;
use crate::error::Result;
use crate::fft::{Direction, RealFft};
use crate::radon::Radon;

/// Apply the ramp response to one column and scale the result by `scale`.
fn ramp_column(v: &mut [f64], fft: &mut RealFft, scale: f64) -> Result<()> {
    let c = PI / v.len() as f64;
    fft.transform(v, Direction::Forward)?;
    v[0] = 0.0;
    v[1] *= FRAC_PI_2;
    for (i, x) in v.iter_mut().enumerate().skip(2) {
        *x *= (i >> 1) as f64 * c;
    }
    fft.transform(v, Direction::Inverse)?;
    for x in v.iter_mut() {
        *x *= scale;
    }
    Ok(())
}

/// Filter every column of `a` in place with the given output scale.
fn filter_columns(mut a: ArrayViewMut2<f64>, fft: &mut RealFft, scale: f64) -> Result<()> {
    let mut v = vec![0.0; a.nrows()];
    for mut col in a.axis_iter_mut(Axis(1)) {
        for (x, &y) in v.iter_mut().zip(col.iter()) {
            *x = y;
        }
        ramp_column(&mut v, fft, scale)?;
        for (y, &x) in col.iter_mut().zip(v.iter()) {
            *y = x;
        }
    }
    Ok(())
}

/// Ramp-filter a (rays × angles) sinogram in place. Rays must be a power of two.
pub fn filter_sinogram_in_place(a: &mut Array2<f64>) -> Result<()> {
    let n = a.nrows();
    require_power_of_two("sinogram rays", n)?;
    let mut fft = RealFft::new(n)?;
    filter_columns(a.view_mut(), &mut fft, 2.0 / n as f64)?;
    debug!("filtered sinogram {}x{}", n, a.ncols());
    Ok(())
}

/// Ramp-filtered copy of a sinogram.
pub fn filter_sinogram(a: &Array2<f64>) -> Result<Array2<f64>> {
    let mut b = a.clone();
    filter_sinogram_in_place(&mut b)?;
    Ok(b)
}

/// Ramp-filter all four quadrants in place.
///
/// Quadrant columns have length 2n, so the transform runs at length 2n and
/// the output is scaled by 1/n.
pub fn filter_radon_in_place(d: &mut Radon) -> Result<()> {
    let n = d.size();
    require_power_of_two("radon size", n)?;
    let mut fft = RealFft::new(2 * n)?;
    let scale = 1.0 / n as f64;
    for q in d.quadrants_mut() {
        filter_columns(q, &mut fft, scale)?;
    }
    debug!("filtered radon quadrants n={}", n);
    Ok(())
}

/// Ramp-filtered copy of a quadrant structure.
pub fn filter_radon(d: &Radon) -> Result<Radon> {
    let mut b = d.clone();
    filter_radon_in_place(&mut b)?;
    Ok(b)
}
