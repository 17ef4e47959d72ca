//! Synthetic n×n test images.

use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Distance of pixel `(i, j)` from the image centre.
fn centre_distance(n: usize, i: usize, j: usize) -> f64 {
    let c = (n as f64 - 1.0) / 2.0;
    (i as f64 - c).hypot(j as f64 - c)
}

/// Uniform disk of value 1 with radius `fraction · n/2`.
pub fn disk(n: usize, fraction: f64) -> Array2<f64> {
    let radius = fraction * n as f64 / 2.0;
    Array2::from_shape_fn((n, n), |(i, j)| {
        if centre_distance(n, i, j) <= radius {
            1.0
        } else {
            0.0
        }
    })
}

/// Alternating 0/1 squares of side `cell`.
pub fn checkerboard(n: usize, cell: usize) -> Array2<f64> {
    let cell = cell.max(1);
    Array2::from_shape_fn((n, n), |(i, j)| ((i / cell + j / cell) % 2) as f64)
}

/// Centred isotropic Gaussian with peak 1 and standard deviation `sigma` pixels.
pub fn gaussian(n: usize, sigma: f64) -> Array2<f64> {
    let two_s2 = 2.0 * sigma * sigma;
    Array2::from_shape_fn((n, n), |(i, j)| (-centre_distance(n, i, j).powi(2) / two_s2).exp())
}

/// Single unit pixel at `(i, j)`.
pub fn point(n: usize, i: usize, j: usize) -> Array2<f64> {
    let mut a = Array2::zeros((n, n));
    if i < n && j < n {
        a[[i, j]] = 1.0;
    }
    a
}

/// Uniform noise in `[0, 1)`, reproducible from `seed`.
pub fn random(n: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::random_using((n, n), Uniform::new(0.0, 1.0), &mut rng)
}
