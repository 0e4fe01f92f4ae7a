// Bit-reversal permutation: moves the butterfly output into natural
// frequency order.

use num_complex::Complex64;

use crate::log2::log2_exact;

/// Reverses the order of the low `width` bits of `n`; higher bits are ignored.
#[inline]
pub fn bit_reverse(n: usize, width: u32) -> usize {
    if width == 0 {
        return 0;
    }
    n.reverse_bits() >> (usize::BITS - width)
}

/// Writes `dst[k] = src[bit_reverse(k, log2(len))]`.
///
/// Both slices must have the same power-of-two length.
pub fn bit_reverse_into(src: &[Complex64], dst: &mut [Complex64]) {
    debug_assert_eq!(src.len(), dst.len());
    let width = log2_exact(src.len());

    for (k, out) in dst.iter_mut().enumerate() {
        *out = src[bit_reverse(k, width)];
    }
}

/// Same permutation as [`bit_reverse_into`], done by swapping entries in place.
///
/// The permutation is an involution, so swapping each pair once (when the
/// reversed index is the larger one) is enough.
pub fn bit_reverse_in_place(data: &mut [Complex64]) {
    let width = log2_exact(data.len());

    for k in 0..data.len() {
        let j = bit_reverse(k, width);
        if j > k {
            data.swap(k, j);
        }
    }
}
