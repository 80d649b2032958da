#![no_main]

use arbitrary::Arbitrary;
use brigham_fft::{Complex64, FftError, transform};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct TransformInput {
    samples: Vec<(f64, f64)>,
}

fuzz_target!(|input: TransformInput| {
    // Bound the per-case transform size; 4096 points is plenty for coverage.
    let samples: Vec<Complex64> = input.samples.into_iter().take(4096).collect();
    let len = samples.len();

    match transform(&samples) {
        Ok(spectrum) => {
            assert!(len.is_power_of_two(), "success implies a power-of-two length");
            assert_eq!(spectrum.len(), len);
        }
        Err(err) => {
            assert!(!len.is_power_of_two(), "failure implies a bad length");
            assert_eq!(err, FftError::InvalidInputLength { len });
        }
    }
});
