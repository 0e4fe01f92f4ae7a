// The forward transform: butterfly schedule, then bit-reversal.

use log::{Level, debug, log_enabled, trace};
use num_complex::Complex64;

use crate::bit_reverse::{bit_reverse_in_place, bit_reverse_into};
use crate::butterfly::butterfly_at;
use crate::error::{FftError, FftResult};
use crate::log2::checked_log2;
use crate::schedule::IndexGenerator;
use crate::twiddle::{TwiddleMode, TwiddleTable};

/// Options for building a transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FftConfig {
    pub twiddle_mode: TwiddleMode,
}

/// A forward transform of one fixed power-of-two length.
///
/// The plan owns its twiddle table and nothing else; every call to
/// [`process`](Self::process) starts a fresh [`IndexGenerator`], so a plan
/// can be shared between threads working on different buffers.
#[derive(Debug, Clone)]
pub struct Radix2Fft {
    twiddles: TwiddleTable,
    log2_len: u32,
}

impl Radix2Fft {
    pub fn new(len: usize) -> FftResult<Self> {
        Self::with_config(len, FftConfig::default())
    }

    pub fn with_config(len: usize, config: FftConfig) -> FftResult<Self> {
        let log2_len = checked_log2(len)?;
        let twiddles = TwiddleTable::new(len, config.twiddle_mode)?;

        if log_enabled!(Level::Debug) {
            debug!(
                "radix-2 plan: len={} stages={} twiddles={:?} drift={:e}",
                len,
                log2_len,
                config.twiddle_mode,
                twiddles.drift()
            );
        }

        Ok(Self { twiddles, log2_len })
    }

    pub fn len(&self) -> usize {
        self.twiddles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.twiddles.is_empty()
    }

    pub fn log2_len(&self) -> u32 {
        self.log2_len
    }

    pub fn twiddles(&self) -> &TwiddleTable {
        &self.twiddles
    }

    /// Runs every scheduled butterfly over `buf` and returns how many ran.
    ///
    /// Leaves `buf` holding the spectrum in bit-reversed order.
    pub fn run_butterflies(&self, buf: &mut [Complex64]) -> FftResult<usize> {
        self.check_len(buf.len())?;

        let mut count = 0;
        for b in IndexGenerator::new(buf.len()) {
            butterfly_at(buf, b.i1, b.i2, self.twiddles[b.w]);
            count += 1;
        }

        trace!("len={} butterflies={}", buf.len(), count);
        Ok(count)
    }

    /// Transforms `buf` and writes the naturally ordered spectrum to `out`.
    ///
    /// `buf` is overwritten with the bit-reversed intermediate result.
    pub fn process_into(&self, buf: &mut [Complex64], out: &mut [Complex64]) -> FftResult<()> {
        self.check_len(out.len())?;
        self.run_butterflies(buf)?;
        bit_reverse_into(buf, out);
        Ok(())
    }

    /// Transforms `buf` in place, leaving it in natural order.
    pub fn process(&self, buf: &mut [Complex64]) -> FftResult<()> {
        self.run_butterflies(buf)?;
        bit_reverse_in_place(buf);
        Ok(())
    }

    fn check_len(&self, actual: usize) -> FftResult<()> {
        if actual == self.len() {
            Ok(())
        } else {
            Err(FftError::BufferSizeMismatch {
                expected: self.len(),
                actual,
            })
        }
    }
}

/// Forward DFT of `x`, unnormalized, in natural frequency order.
///
/// `x.len()` must be a positive power of two. On return `x` holds the
/// bit-reversed intermediate result; the spectrum is the returned vector.
pub fn forward_transform(x: &mut [Complex64]) -> FftResult<Vec<Complex64>> {
    forward_transform_with(x, FftConfig::default())
}

/// [`forward_transform`] with explicit options.
pub fn forward_transform_with(x: &mut [Complex64], config: FftConfig) -> FftResult<Vec<Complex64>> {
    let plan = Radix2Fft::with_config(x.len(), config)?;
    let mut out = vec![Complex64::new(0.0, 0.0); x.len()];
    plan.process_into(x, &mut out)?;
    Ok(out)
}
