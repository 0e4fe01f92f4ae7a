use num_complex::Complex64;

use crate::twiddle::direct_factor;

/// Direct O(N^2) evaluation of the forward DFT, for checking the fast path.
///
/// Works for any length. The exponent `k * n` is reduced modulo `N` before
/// evaluating the rotation so large products do not lose precision.
pub fn naive_dft(x: &[Complex64]) -> Vec<Complex64> {
    let len = x.len();

    (0..len)
        .map(|k| {
            x.iter()
                .enumerate()
                .map(|(n, &xn)| xn * direct_factor((k * n) % len, len))
                .sum::<Complex64>()
        })
        .collect()
}
