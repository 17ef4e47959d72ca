//! Filtered back-projection: ramp filter followed by back-projection.

use log::info;
use ndarray::Array2;

use crate::config::{Engine, ReconConfig};
use crate::convert::sinogram_from_radon;
use crate::error::Result;
use crate::fast::{back_scan_fast_expanded, scan_fast_expanded};
use crate::filter::{filter_radon, filter_sinogram};
use crate::radon::Radon;
use crate::slow::{back_scan_slow, scan_slow};

/// Image restored from raw fast-engine quadrants.
pub fn reconstruct_fast(d: &Radon) -> Result<Array2<f64>> {
    reconstruct_fast_expanded(d, 1)
}

/// Image restored from raw quadrants, back-projecting on an `e`-times
/// expanded grid.
pub fn reconstruct_fast_expanded(d: &Radon, e: usize) -> Result<Array2<f64>> {
    let filtered = filter_radon(d)?;
    back_scan_fast_expanded(&filtered, e)
}

/// Image of `rows × cols` (default: half the ray count, square) restored
/// from a raw sinogram.
pub fn reconstruct_slow(
    sinogram: &Array2<f64>,
    rows: Option<usize>,
    cols: Option<usize>,
) -> Result<Array2<f64>> {
    let filtered = filter_sinogram(sinogram)?;
    back_scan_slow(&filtered, rows, cols)
}

/// Raw projections from either engine.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Fast(Radon),
    /// Sinogram plus the shape of the image it was taken from.
    Slow {
        sinogram: Array2<f64>,
        rows: usize,
        cols: usize,
    },
}

/// Forward transform, filter and back-projection wired from one config.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: ReconConfig,
}

impl Pipeline {
    pub fn new(config: ReconConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReconConfig {
        &self.config
    }

    /// Forward transform of `image`.
    pub fn project(&self, image: &Array2<f64>) -> Result<Projection> {
        let (rows, cols) = image.dim();
        info!("projecting {}x{} image with {:?} engine", rows, cols, self.config.engine);
        match self.config.engine {
            Engine::Fast => Ok(Projection::Fast(scan_fast_expanded(
                image,
                self.config.expansion,
            )?)),
            Engine::Slow => Ok(Projection::Slow {
                sinogram: scan_slow(image, self.config.rays, self.config.angles)?,
                rows,
                cols,
            }),
        }
    }

    /// Conventional (r, θ) sinogram of a projection.
    pub fn sinogram(&self, p: &Projection) -> Result<Array2<f64>> {
        match p {
            Projection::Fast(d) => sinogram_from_radon(
                d,
                self.config.rays,
                self.config.angles,
                self.config.fill_value,
            ),
            Projection::Slow { sinogram, .. } => Ok(sinogram.clone()),
        }
    }

    /// Restore an image from raw projections.
    pub fn reconstruct(&self, p: &Projection) -> Result<Array2<f64>> {
        let image = match p {
            Projection::Fast(d) => reconstruct_fast_expanded(d, self.config.expansion)?,
            Projection::Slow {
                sinogram,
                rows,
                cols,
            } => reconstruct_slow(sinogram, Some(*rows), Some(*cols))?,
        };
        let (rows, cols) = image.dim();
        info!("reconstructed {}x{} image", rows, cols);
        Ok(image)
    }

    /// Project `image` and restore it again.
    pub fn run(&self, image: &Array2<f64>) -> Result<Array2<f64>> {
        let p = self.project(image)?;
        self.reconstruct(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrtError;
    use crate::fast::scan_fast;

    fn point_image(n: usize) -> Array2<f64> {
        let mut a = Array2::zeros((n, n));
        a[[n / 2, n / 2]] = 1.0;
        a
    }

    #[test]
    fn fast_pipeline_matches_free_functions() {
        let a = point_image(8);
        let pipeline = Pipeline::new(ReconConfig::default()).unwrap();
        let p = pipeline.project(&a).unwrap();
        let expected = reconstruct_fast(&scan_fast(&a).unwrap()).unwrap();
        assert_eq!(p, Projection::Fast(scan_fast(&a).unwrap()));
        assert_eq!(pipeline.reconstruct(&p).unwrap(), expected);
        assert_eq!(pipeline.run(&a).unwrap(), expected);
    }

    #[test]
    fn slow_pipeline_uses_configured_grid() {
        let config = ReconConfig {
            engine: Engine::Slow,
            rays: Some(16),
            angles: Some(12),
            ..Default::default()
        };
        let pipeline = Pipeline::new(config).unwrap();
        let p = pipeline.project(&point_image(8)).unwrap();
        let s = pipeline.sinogram(&p).unwrap();
        assert_eq!(s.dim(), (16, 12));
        assert_eq!(pipeline.reconstruct(&p).unwrap().dim(), (8, 8));
    }

    #[test]
    fn fast_sinogram_uses_configured_grid() {
        let config = ReconConfig {
            rays: Some(20),
            angles: Some(30),
            ..Default::default()
        };
        let pipeline = Pipeline::new(config).unwrap();
        let p = pipeline.project(&point_image(8)).unwrap();
        assert_eq!(pipeline.sinogram(&p).unwrap().dim(), (20, 30));
    }

    #[test]
    fn slow_pipeline_restores_the_input_shape() {
        let pipeline = Pipeline::new(ReconConfig {
            engine: Engine::Slow,
            ..Default::default()
        })
        .unwrap();
        let restored = pipeline.run(&Array2::from_elem((5, 7), 1.0)).unwrap();
        assert_eq!(restored.dim(), (5, 7));

        let pipeline = Pipeline::new(ReconConfig {
            engine: Engine::Slow,
            rays: Some(32),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(pipeline.run(&point_image(8)).unwrap().dim(), (8, 8));
    }

    #[test]
    fn slow_engine_rejects_unfilterable_ray_count_up_front() {
        let config = ReconConfig {
            engine: Engine::Slow,
            rays: Some(20),
            ..Default::default()
        };
        assert!(matches!(Pipeline::new(config), Err(DrtError::Config(_))));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ReconConfig {
            expansion: 6,
            ..Default::default()
        };
        assert!(matches!(Pipeline::new(config), Err(DrtError::Config(_))));
    }

    #[test]
    fn slow_reconstruction_rejects_non_power_of_two_rays() {
        let s = Array2::zeros((12, 8));
        assert!(matches!(
            reconstruct_slow(&s, None, None),
            Err(DrtError::NotPowerOfTwo { value: 12, .. })
        ));
    }
}
