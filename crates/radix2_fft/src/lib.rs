//! Iterative radix-2 FFT for power-of-two lengths.
//!
//! The butterflies are generated by an explicit state machine
//! ([`IndexGenerator`]) rather than by recursion, applied in place with a
//! precomputed [`TwiddleTable`], and the result is put back into natural
//! frequency order with a bit-reversal permutation.
//!
//! ```
//! use num_complex::Complex64;
//! use radix2_fft::forward_transform;
//!
//! let mut x: Vec<Complex64> = [1.0, 0.0, 0.0, 0.0]
//!     .iter()
//!     .map(|&re| Complex64::new(re, 0.0))
//!     .collect();
//!
//! let y = forward_transform(&mut x).unwrap();
//! assert!(y.iter().all(|c| (c - Complex64::new(1.0, 0.0)).norm() < 1e-12));
//! ```


pub mod batch;
pub mod bit_reverse;
pub mod butterfly;
pub mod dft;
pub mod error;
pub mod log2;
pub mod schedule;
pub mod transform;
pub mod twiddle;

pub use batch::{forward_transform_batch, forward_transform_batch_par};
pub use bit_reverse::bit_reverse;
pub use butterfly::butterfly;
pub use dft::naive_dft;
pub use error::{FftError, FftResult};
pub use log2::{checked_log2, log2_exact};
pub use schedule::{Butterfly, IndexGenerator, Step};
pub use transform::{FftConfig, Radix2Fft, forward_transform, forward_transform_with};
pub use twiddle::{TwiddleMode, TwiddleTable, build_twiddle_table};
