#![forbid(unsafe_code)]

//! Radix-2 decimation-in-frequency FFT with unitary normalization.
//!
//! The transform follows the classical Cooley-Tukey formulation from
//! E. Oran Brigham, *The Fast Fourier Transform and its Applications*
//! (1988): ν in-place butterfly stages over a working copy of the input,
//! a final bit-reversal permutation back to natural frequency order, and
//! a 1/√N scaling so the transform is unitary.
//!
//! ## Module layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | `complex`   | [`Complex64`] sample representation and arithmetic        |
//! | `transform` | [`transform`], [`bit_reverse`], [`FftError`]              |
//! | `signal`    | `re,im` text codec and the two-tone synthetic generator   |

pub mod complex;
pub mod signal;
pub mod transform;

pub use complex::{Complex64, complex_add, complex_scale, complex_sub, modulus_squared};
pub use signal::{
    SIGNAL_PRECISION, SignalError, format_sample, format_signal, parse_signal, synthetic_tones,
};
pub use transform::{FftError, bit_reverse, transform};

#[cfg(test)]
mod tests {
    use super::{FftError, transform};

    #[test]
    fn flat_api_surface_is_usable() {
        let spectrum = transform(&[(1.0, 0.0), (0.0, 0.0)]).expect("length 2 is a power of two");
        assert_eq!(spectrum.len(), 2);
    }

    #[test]
    fn error_type_is_exposed_at_the_root() {
        let err = transform(&[]).expect_err("empty input must be rejected");
        assert_eq!(err, FftError::InvalidInputLength { len: 0 });
    }
}
