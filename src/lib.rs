//! Discrete Radon transform and filtered back-projection for 2D tomography.
//!
//! Two engines share one filter and one sinogram convention:
//!
//! - [`fast`]: the O(n² log n) dyadic transform over four 45° quadrant
//!   buffers (Brady 1998; Press 2006), with its fast back-projection.
//! - [`slow`]: direct numerical line integration, usable on any image shape.
//!
//! [`convert`] resamples between the quadrant grid and ordinary (r, θ)
//! sinograms, and [`reconstruct`] chains forward transform, ramp filter and
//! back-projection.
//!
//! ```no_run
//! use drt_core::{phantom, reconstruct_fast, scan_fast};
//!
//! let image = phantom::disk(64, 0.6);
//! let radon = scan_fast(&image)?;
//! let restored = reconstruct_fast(&radon)?;
//! assert_eq!(restored.dim(), (64, 64));
//! # Ok::<(), drt_core::DrtError>(())
//! ```

pub mod buffer;
pub mod config;
pub mod convert;
pub mod dump;
pub mod error;
pub mod fast;
pub mod fft;
pub mod filter;
pub mod interp;
pub mod phantom;
pub mod radon;
pub mod reconstruct;
pub mod slow;

pub use config::{load_config, Engine, ReconConfig};
pub use convert::{radon_from_sinogram, sinogram_from_radon, stitch};
pub use error::{DrtError, Result};
pub use fast::{back_scan_fast, back_scan_fast_expanded, scan_fast, scan_fast_expanded, scan_fast_into};
pub use filter::{filter_radon, filter_radon_in_place, filter_sinogram, filter_sinogram_in_place};
pub use radon::Radon;
pub use reconstruct::{reconstruct_fast, reconstruct_fast_expanded, reconstruct_slow, Pipeline, Projection};
pub use slow::{back_scan_slow, scan_slow};
