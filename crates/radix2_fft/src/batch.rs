// Many transforms of one length over a single flat buffer.

use num_complex::Complex64;
use rayon::{ThreadPool, prelude::*};

use crate::error::{FftError, FftResult};
use crate::transform::{FftConfig, Radix2Fft};

/// Transforms each consecutive length-`len` sequence of `data` in place.
///
/// __Arguments:__
///
/// + `data` - sequences stored back to back; its length must be a
///   multiple of `len`
///
/// + `len` - length of each sequence, a positive power of two
///
/// + `config` - options for the shared plan
///
pub fn forward_transform_batch(data: &mut [Complex64], len: usize, config: FftConfig) -> FftResult<()> {
    let plan = batch_plan(data.len(), len, config)?;

    for sequence in data.chunks_exact_mut(len) {
        plan.process(sequence)?;
    }

    Ok(())
}

fn forward_transform_batch_par_internal(
    data: &mut [Complex64],
    len: usize,
    config: FftConfig,
) -> FftResult<()> {
    let plan = batch_plan(data.len(), len, config)?;

    // each rayon job is one sequence; the plan is only read, and each job
    // runs its own schedule over a disjoint chunk
    data.par_chunks_exact_mut(len)
        .try_for_each(|sequence| plan.process(sequence))
}

/// Parallel version of [`forward_transform_batch`]. Sequences are
/// distributed across `thread_pool`; each single transform still runs on
/// one thread.
pub fn forward_transform_batch_par(
    data: &mut [Complex64],
    len: usize,
    config: FftConfig,
    thread_pool: &ThreadPool,
) -> FftResult<()> {
    thread_pool.install(|| forward_transform_batch_par_internal(data, len, config))
}

fn batch_plan(total: usize, len: usize, config: FftConfig) -> FftResult<Radix2Fft> {
    let plan = Radix2Fft::with_config(len, config)?;
    if total % len != 0 {
        return Err(FftError::BatchLength { len: total, chunk: len });
    }
    Ok(plan)
}
