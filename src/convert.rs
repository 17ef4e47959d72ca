//! Resampling between conventional (r, θ) sinograms and the quadrant grid.
//!
//! A sinogram has rays uniformly over `[-R, R]` (rows) and angles `j·π/M`
//! (columns), with `R = (n-1)/√2` the radius of the disk around the n×n
//! image. Quadrant column `j` corresponds to the slope `j/(n-1)`, i.e. angle
//! `atan2(j, n-1)` within its 45° range.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};

use log::{debug, warn};
use ndarray::Array2;

use crate::error::{DrtError, Result};
use crate::interp::{interp2d, uniform_grid};
use crate::radon::Radon;

/// Ray grid `[-R, R]` with `rays` samples for an n×n image.
fn ray_grid(n: usize, rays: usize) -> Vec<f64> {
    let radius = (n - 1) as f64 * FRAC_1_SQRT_2;
    uniform_grid(-radius, 2.0 * radius / (rays - 1) as f64, rays)
}

fn require_rays(rays: usize) -> Result<()> {
    if rays < 2 {
        return Err(DrtError::InvalidParameter(format!(
            "sinogram needs at least 2 rays, got {rays}"
        )));
    }
    Ok(())
}

/// Resample a conventional sinogram onto the quadrant grid of an n×n image.
///
/// `n` defaults to half the number of rays. Quadrant values carry the
/// `cos θ` factor that turns a ray integral into a sum with one sample per
/// column. Out-of-range samples take `fill`.
pub fn radon_from_sinogram(sinogram: &Array2<f64>, n: Option<usize>, fill: f64) -> Result<Radon> {
    let (rays, angles) = sinogram.dim();
    require_rays(rays)?;
    if angles < 2 {
        warn!("sinogram has {} angle sample(s); every lookup will use the fill value", angles);
    }
    let mut d = Radon::new(n.unwrap_or(rays / 2))?;
    let n = d.size();
    let n1 = (n - 1) as f64;

    let r = ray_grid(n, rays);
    let th = uniform_grid(0.0, PI / angles as f64, angles);
    let view = sinogram.view();
    let mut q = d.quadrants_mut();
    for j in 0..n {
        let th1 = (j as f64).atan2(n1);
        let cth = th1.cos();
        let centre = (j as f64 + n1) / 2.0;
        let directions = [th1, FRAC_PI_2 - th1, FRAC_PI_2 + th1, PI - th1];
        for i in 0..2 * n {
            // transverse coordinate of the digital line through row i
            let r1 = (i as f64 - centre) * cth;
            for (k, &theta) in directions.iter().enumerate() {
                q[k][[i, j]] = interp2d(r1, theta, &r, &th, view, fill) * cth;
            }
        }
    }
    // θ = π lies past the last sampled angle; use p(r, π) = p(-r, 0)
    for i in 0..n {
        let mirrored = q[0][[n - 1 - i, 0]];
        q[3][[i, 0]] = mirrored;
    }
    debug!("sinogram {}x{} -> radon n={}", rays, angles, n);
    Ok(d)
}

/// Resample quadrants onto a conventional (rays × angles) sinogram.
///
/// Defaults to `(2n, 4n)`. Each angle picks its quadrant and the matching
/// slope, and the `sec θ` factor undoes the per-column sampling.
pub fn sinogram_from_radon(
    d: &Radon,
    rays: Option<usize>,
    angles: Option<usize>,
    fill: f64,
) -> Result<Array2<f64>> {
    let n = d.size();
    if n < 2 {
        return Err(DrtError::NotPowerOfTwo {
            what: "radon size",
            value: n,
        });
    }
    let rays = rays.unwrap_or(2 * n);
    let angles = angles.unwrap_or(4 * n);
    require_rays(rays)?;
    if angles == 0 {
        return Err(DrtError::InvalidParameter("sinogram needs at least 1 angle".into()));
    }

    let n1 = (n - 1) as f64;
    let r = ray_grid(n, rays);
    let x = uniform_grid(0.0, 1.0, 2 * n);
    let y = uniform_grid(0.0, 1.0, n);
    let dth = PI / angles as f64;

    let mut a = Array2::zeros((rays, angles));
    for j in 0..angles {
        let theta = j as f64 * dth;
        let k = ((theta / FRAC_PI_4).floor() as usize).min(3);
        // fold the angle into the quadrant's own [0, 45°] range
        let mut th = theta - FRAC_PI_2 * ((k + 1) >> 1) as f64;
        if k & 1 == 1 {
            th = -th;
        }
        let y1 = n1 * th.tan();
        let centre = (y1 + n1) / 2.0;
        let sec = 1.0 / th.cos();
        let q = d[k].view();
        for (i, &ri) in r.iter().enumerate() {
            let x1 = ri * sec + centre;
            a[[i, j]] = interp2d(x1, y1, &x, &y, q, fill) * sec;
        }
    }
    debug!("radon n={} -> sinogram {}x{}", n, rays, angles);
    Ok(a)
}

/// Tile the four quadrants into one `(2n, 4n)` image spanning 0°..180°.
///
/// Column `j` of each quadrant is shifted down by `⌊(n-j)/2⌋` rows so that
/// neighbouring quadrants meet without a jump:
///
/// ```text
///   /|\   /|\
///  / | \ / | \
/// |  |  |  |  |
/// | / \ | / \ |
/// |/   \|/   \|
/// 0 45 90 135 180
/// ```
pub fn stitch(d: &Radon) -> Array2<f64> {
    let n = d.size();
    let (n2, n4) = (2 * n, 4 * n);
    let mut a = Array2::zeros((n2, n4));
    for j in 0..n {
        let k = (n - j) >> 1;
        for i in 0..n2 - k {
            a[[i + k, j]] = d[0][[i, j]];
            a[[i + k, n2 - 1 - j]] = d[1][[i, j]];
            a[[i + k, n2 + j]] = d[2][[i, j]];
            a[[i + k, n4 - 1 - j]] = d[3][[i, j]];
        }
    }
    a
}
