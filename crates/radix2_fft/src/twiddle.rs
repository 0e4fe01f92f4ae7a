// Precomputed rotation factors `exp(-i 2 pi k / N)` shared by every butterfly.

use num_complex::Complex64;
use std::f64::consts::PI;
use std::ops::Index;

use crate::error::FftResult;
use crate::log2::checked_log2;

/// How the entries of a [`TwiddleTable`] are evaluated.
///
/// + `Recurrence` - one `sin`/`cos` pair for the base rotation, then each
///   entry is the previous one multiplied by the base. Cheap, but rounding
///   error accumulates roughly linearly in `k`, so the last entries of a
///   large table drift from their exact values.
///
/// + `Direct` - every entry is evaluated from its own angle. Costs `N`
///   transcendental evaluations but carries no accumulated drift.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TwiddleMode {
    #[default]
    Recurrence,
    Direct,
}

/// The `N` twiddle factors for a length-`N` transform; entry 0 is always `1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    factors: Vec<Complex64>,
    mode: TwiddleMode,
}

impl TwiddleTable {
    pub fn new(n: usize, mode: TwiddleMode) -> FftResult<Self> {
        checked_log2(n)?;

        let factors = match mode {
            TwiddleMode::Recurrence => {
                let base = direct_factor(1, n);
                let mut factors = Vec::with_capacity(n);
                let mut w = Complex64::new(1.0, 0.0);
                factors.push(w);
                for _ in 1..n {
                    w *= base;
                    factors.push(w);
                }
                factors
            }
            TwiddleMode::Direct => (0..n).map(|k| direct_factor(k, n)).collect(),
        };

        Ok(Self { factors, mode })
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn mode(&self) -> TwiddleMode {
        self.mode
    }

    pub fn factors(&self) -> &[Complex64] {
        &self.factors
    }

    pub fn into_vec(self) -> Vec<Complex64> {
        self.factors
    }

    /// Largest distance between any entry and its directly evaluated value.
    ///
    /// Always `0.0` for [`TwiddleMode::Direct`]; for the recurrence this is
    /// the accumulated drift at this table size.
    pub fn drift(&self) -> f64 {
        let n = self.factors.len();
        self.factors
            .iter()
            .enumerate()
            .map(|(k, w)| (w - direct_factor(k, n)).norm())
            .fold(0.0, f64::max)
    }
}

impl Index<usize> for TwiddleTable {
    type Output = Complex64;

    #[inline]
    fn index(&self, k: usize) -> &Complex64 {
        &self.factors[k]
    }
}

/// Builds the twiddle factors for a length-`n` transform by recurrence.
pub fn build_twiddle_table(n: usize) -> FftResult<Vec<Complex64>> {
    Ok(TwiddleTable::new(n, TwiddleMode::Recurrence)?.into_vec())
}

#[inline]
pub(crate) fn direct_factor(k: usize, n: usize) -> Complex64 {
    Complex64::from_polar(1.0, -2.0 * PI * (k as f64) / (n as f64))
}
