use crate::error::{FftError, FftResult};

/// Returns `e` such that `2^e == n`.
///
/// `n` must be a power of two. Any other value gives a meaningless result
/// (the number of trailing zero bits); use [`checked_log2`] at a boundary.
#[inline]
pub fn log2_exact(n: usize) -> u32 {
    debug_assert!(n.is_power_of_two(), "log2_exact called with {}", n);
    n.trailing_zeros()
}

/// Like [`log2_exact`], but rejects lengths that are not positive powers of two.
pub fn checked_log2(n: usize) -> FftResult<u32> {
    if n.is_power_of_two() {
        Ok(log2_exact(n))
    } else {
        Err(FftError::InvalidLength(n))
    }
}
