use num_complex::Complex64;

/// One radix-2 combine step, in place:
///
/// ```text
/// x1' = x1 + x2
/// x2' = (x1 - x2) * w
/// ```
///
/// Both originals are read before either cell is written.
#[inline]
pub fn butterfly(x1: &mut Complex64, x2: &mut Complex64, w: Complex64) {
    let (a, b) = (*x1, *x2);
    *x1 = a + b;
    *x2 = (a - b) * w;
}

/// Applies [`butterfly`] to `buf[i1]` and `buf[i2]`. Requires `i1 < i2 < buf.len()`.
#[inline]
pub fn butterfly_at(buf: &mut [Complex64], i1: usize, i2: usize, w: Complex64) {
    debug_assert!(i1 < i2, "butterfly indices out of order: ({}, {})", i1, i2);
    let (lo, hi) = buf.split_at_mut(i2);
    butterfly(&mut lo[i1], &mut hi[0], w);
}
