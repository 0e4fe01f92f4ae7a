// Runs the transform on a demo sequence and prints the spectrum.

use clap::{Parser, ValueEnum};
use log::info;
use ndarray::Array1;
use num_complex::Complex64;
use radix2_fft::{FftConfig, FftError, Radix2Fft, TwiddleMode, bit_reverse, naive_dft};
use std::f64::consts::PI;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
  /// Demo input: 1 = worked example, 2 = complex harmonic, 3 = constant ones.
  #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
  sequence: u8,

  /// Length for sequences 2 and 3; must be a power of two.
  #[arg(long, default_value_t = 8)]
  len: usize,

  /// Harmonic index for sequence 2.
  #[arg(long, default_value_t = 1)]
  harmonic: usize,

  #[arg(long, value_enum, default_value_t = Twiddles::Recurrence)]
  twiddles: Twiddles,

  /// Compare against a direct DFT and print the largest deviation.
  #[arg(long, action)]
  check: bool,

  /// Print how far the twiddle table drifts from direct evaluation.
  #[arg(long, action)]
  drift: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Twiddles {
  Recurrence,
  Direct,
}

impl From<Twiddles> for TwiddleMode {
  fn from(t: Twiddles) -> Self {
    match t {
      Twiddles::Recurrence => TwiddleMode::Recurrence,
      Twiddles::Direct => TwiddleMode::Direct,
    }
  }
}

fn main() -> Result<(), FftError> {
  env_logger::init();
  let args = Args::parse();

  let mut data = match args.sequence {
    1 => get_test_array_1(),
    2 => get_test_array_2(args.len, args.harmonic),
    _ => get_test_array_3(args.len),
  };
  let original = data.to_vec();

  let config = FftConfig {
    twiddle_mode: args.twiddles.into(),
  };
  let plan = Radix2Fft::with_config(data.len(), config)?;
  info!("transforming {} samples in {} stages", plan.len(), plan.log2_len());

  let mut spectrum = Array1::<Complex64>::zeros(data.len());
  plan.process_into(
    data.as_slice_mut().expect("demo arrays are contiguous"),
    spectrum.as_slice_mut().expect("demo arrays are contiguous"),
  )?;

  for (n, y) in spectrum.iter().enumerate() {
    let n_rev = bit_reverse(n, plan.log2_len());
    println!("y[{}] = x[{}] = {:+.2}{:+.2}j", n, n_rev, y.re, y.im);
  }

  if args.check {
    let reference = naive_dft(&original);
    let max_err = spectrum
      .iter()
      .zip(&reference)
      .map(|(a, b)| (a - b).norm())
      .fold(0.0, f64::max);
    println!("max deviation from direct DFT: {:e}", max_err);
  }

  if args.drift {
    println!(
      "twiddle drift ({:?}): {:e}",
      plan.twiddles().mode(),
      plan.twiddles().drift()
    );
  }

  Ok(())
}

/// The worked example `[0, 1, 2, 1, 0, -1, -2, -1]`.
fn get_test_array_1() -> Array1<Complex64> {
  Array1::from_iter(
    [0f64, 1f64, 2f64, 1f64, 0f64, -1f64, -2f64, -1f64]
      .iter()
      .map(|&re| Complex64::new(re, 0.0)),
  )
}

fn get_test_array_2(len: usize, k: usize) -> Array1<Complex64> {
  // kth harmonic, which should land entirely in bin k
  Array1::from_iter((0..len).map(|n| {
    let phase = 2f64 * PI * (k as f64 / len as f64) * (n as f64);
    Complex64::from_polar(1.0, phase)
  }))
}

fn get_test_array_3(len: usize) -> Array1<Complex64> {
  Array1::from_elem(len, Complex64::new(1.0, 0.0))
}
