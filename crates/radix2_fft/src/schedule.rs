// Butterfly schedule generator.
//
// Enumerates every butterfly of the radix-2 transform in the order the
// recursive divide-and-conquer formulation visits them, using a handful of
// counters instead of recursion. After Meyer-Baese, _Digital Signal
// Processing with Field Programmable Gate Arrays_, 4th ed., p. 446.

use std::iter::FusedIterator;

use crate::log2::log2_exact;

/// One scheduled butterfly: the element pair and the twiddle table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Butterfly {
    /// 1-based stage this butterfly belongs to.
    pub stage: u32,
    pub i1: usize,
    pub i2: usize,
    pub w: usize,
}

/// Result of [`IndexGenerator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The state now points at the next butterfly.
    Ready,
    /// All stages are complete.
    Done,
}

/// Iteration state for the butterfly schedule of a length-`n` transform.
///
/// Invariants while not done: `k1 == n >> (stage - 1)`, `k2 == k1 / 2`,
/// `i2 == i1 + k2` and `w < n`. The state is terminal once `stage` exceeds
/// the stage count, which for `n == 1` is already true at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGenerator {
    n: usize,
    log2_n: u32,
    stage: u32,
    group_count: usize,
    i1: usize,
    i2: usize,
    k1: usize,
    k2: usize,
    w: usize,
    dw: usize,
}

impl IndexGenerator {
    /// Fresh state pointing at the first butterfly. `n` must be a power of two.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            log2_n: log2_exact(n),
            stage: 1,
            group_count: 0,
            i1: 0,
            i2: n / 2,
            k1: n,
            k2: n / 2,
            w: 0,
            dw: 1,
        }
    }

    pub fn transform_len(&self) -> usize {
        self.n
    }

    pub fn log2_len(&self) -> u32 {
        self.log2_n
    }

    pub fn stage(&self) -> u32 {
        self.stage
    }

    pub fn is_done(&self) -> bool {
        self.stage > self.log2_n
    }

    /// The butterfly the state currently points at, or `None` once done.
    pub fn current(&self) -> Option<Butterfly> {
        if self.is_done() {
            return None;
        }
        Some(Butterfly {
            stage: self.stage,
            i1: self.i1,
            i2: self.i2,
            w: self.w,
        })
    }

    /// Moves to the next butterfly. Calling this once done is a no-op.
    pub fn advance(&mut self) -> Step {
        if self.is_done() {
            return Step::Done;
        }

        // next butterfly in the group
        self.i1 += self.k1;
        self.i2 = self.i1 + self.k2;

        // the group boundary is `n - 1`, not `n`: the first index of group g
        // is g, so no index of a live group ever reaches `n - 1`
        if self.i1 >= self.n - 1 {
            self.group_count += 1;
            self.i1 = self.group_count;
            self.i2 = self.i1 + self.k2;

            if self.group_count >= self.k2 {
                // stage complete
                self.group_count = 0;
                self.i1 = 0;
                self.i2 = self.k2;
                self.dw *= 2;
                self.stage += 1;

                if self.is_done() {
                    return Step::Done;
                }

                self.k1 = self.k2;
                self.k2 /= 2;
                self.i1 = 0;
                self.i2 = self.k2;
                self.w = 0;
            } else {
                // next group, next twiddle
                self.w += self.dw;
            }
        }

        Step::Ready
    }
}

impl Iterator for IndexGenerator {
    type Item = Butterfly;

    fn next(&mut self) -> Option<Butterfly> {
        let current = self.current()?;
        self.advance();
        Some(current)
    }
}

impl FusedIterator for IndexGenerator {}
