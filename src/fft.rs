//! Real-valued FFT in packed half-complex layout.
//!
//! Layout of a transformed buffer of length `len`:
//! - `data[0]` = DC bin (real)
//! - `data[1]` = Nyquist bin `len/2` (real)
//! - `data[2k], data[2k+1]` = real/imaginary part of bin `k`, `1 <= k < len/2`
//!
//! The forward kernel is `exp(+2πi jk/len)`. The inverse is unnormalised in the
//! same way as the classic packed routine: forward followed by inverse returns
//! `len/2` times the input. Callers fold the remaining `2/len` into their own
//! scaling.

use std::sync::Arc;

use realfft::num_complex::Complex64;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};

use crate::buffer::require_power_of_two;
use crate::error::{DrtError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Planned real FFT of one fixed power-of-two length.
pub struct RealFft {
    len: usize,
    r2c: Arc<dyn RealToComplex<f64>>,
    c2r: Arc<dyn ComplexToReal<f64>>,
    real: Vec<f64>,
    spectrum: Vec<Complex64>,
    forward_scratch: Vec<Complex64>,
    inverse_scratch: Vec<Complex64>,
}

impl RealFft {
    pub fn new(len: usize) -> Result<Self> {
        require_power_of_two("fft length", len)?;
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(len);
        let c2r = planner.plan_fft_inverse(len);
        Ok(Self {
            len,
            real: r2c.make_input_vec(),
            spectrum: r2c.make_output_vec(),
            forward_scratch: r2c.make_scratch_vec(),
            inverse_scratch: c2r.make_scratch_vec(),
            r2c,
            c2r,
        })
    }

    /// Transform length.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Transform `data` in place.
    pub fn transform(&mut self, data: &mut [f64], direction: Direction) -> Result<()> {
        if data.len() != self.len {
            return Err(DrtError::ShapeMismatch {
                what: "fft buffer length",
                expected: self.len,
                got: data.len(),
            });
        }
        match direction {
            Direction::Forward => self.forward(data),
            Direction::Inverse => self.inverse(data),
        }
    }

    fn forward(&mut self, data: &mut [f64]) -> Result<()> {
        self.real.copy_from_slice(data);
        self.r2c
            .process_with_scratch(&mut self.real, &mut self.spectrum, &mut self.forward_scratch)?;

        // realfft uses exp(-2πi jk/len); the packed layout wants the conjugate
        let half = self.len / 2;
        data[0] = self.spectrum[0].re;
        data[1] = self.spectrum[half].re;
        for k in 1..half {
            data[2 * k] = self.spectrum[k].re;
            data[2 * k + 1] = -self.spectrum[k].im;
        }
        Ok(())
    }

    fn inverse(&mut self, data: &mut [f64]) -> Result<()> {
        let half = self.len / 2;
        self.spectrum[0] = Complex64::new(data[0], 0.0);
        self.spectrum[half] = Complex64::new(data[1], 0.0);
        for k in 1..half {
            self.spectrum[k] = Complex64::new(data[2 * k], -data[2 * k + 1]);
        }
        self.c2r
            .process_with_scratch(&mut self.spectrum, &mut self.real, &mut self.inverse_scratch)?;

        for (x, &y) in data.iter_mut().zip(self.real.iter()) {
            *x = 0.5 * y;
        }
        Ok(())
    }
}
