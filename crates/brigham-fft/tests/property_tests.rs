//! Property tests for the radix-2 FFT core.
//!
//! Convention: test_{module}_{function}_{scenario}
//!
//! Seed replay: `PROPTEST_CASES=1000 cargo test -p brigham-fft --test property_tests`
//! Reproduce: `PROPTEST_SEED=<seed> cargo test -p brigham-fft --test property_tests`

use brigham_fft::{Complex64, FftError, bit_reverse, modulus_squared, transform};
use proptest::prelude::*;

fn arbitrary_signal(max_nu: u32) -> impl Strategy<Value = Vec<Complex64>> {
    (0..=max_nu).prop_flat_map(|nu| {
        prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 1usize << nu)
    })
}

// ═══════════════════════════════════════════════════════════════
// Property 1: bit_reverse is an involution on the low nu bits
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_transform_bit_reverse_involution(
        nu in 0u32..=16,
        j in 0usize..usize::MAX,
    ) {
        let j = j & ((1usize << nu) - 1);
        let reversed = bit_reverse(j, nu);
        prop_assert!(reversed < (1usize << nu), "reversal must stay in range");
        prop_assert_eq!(
            bit_reverse(reversed, nu),
            j,
            "reversing twice must restore the index"
        );
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 2: the spectrum always has the input's length
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_transform_length_invariant(signal in arbitrary_signal(10)) {
        let spectrum = transform(&signal).expect("power-of-two length must succeed");
        prop_assert_eq!(spectrum.len(), signal.len());
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 3: every non-power-of-two length is rejected up front
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_transform_rejects_every_non_power_of_two(len in 0usize..1024) {
        prop_assume!(!len.is_power_of_two());
        let input = vec![(1.0, -1.0); len];
        let err = transform(&input).expect_err("non-power-of-two length must fail");
        prop_assert_eq!(err, FftError::InvalidInputLength { len });
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 4: Parseval — the 1/√N normalization conserves energy
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_transform_conserves_energy(signal in arbitrary_signal(10)) {
        let spectrum = transform(&signal).expect("power-of-two length must succeed");
        let energy_in: f64 = signal.iter().copied().map(modulus_squared).sum();
        let energy_out: f64 = spectrum.iter().copied().map(modulus_squared).sum();
        let tol = 1e-9 * energy_in.max(1.0);
        prop_assert!(
            (energy_in - energy_out).abs() <= tol,
            "energy must be conserved: in={energy_in} out={energy_out}"
        );
    }
}

// ═══════════════════════════════════════════════════════════════
// Property 5: bin 0 is the scaled sum of the samples (DC)
// ═══════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_transform_dc_bin_is_scaled_sum(signal in arbitrary_signal(8)) {
        let n = signal.len() as f64;
        let spectrum = transform(&signal).expect("power-of-two length must succeed");
        let sum_re: f64 = signal.iter().map(|s| s.0).sum();
        let sum_im: f64 = signal.iter().map(|s| s.1).sum();
        let tol = 1e-9 * (sum_re.abs() + sum_im.abs()).max(1.0);
        prop_assert!((spectrum[0].0 - sum_re / n.sqrt()).abs() <= tol);
        prop_assert!((spectrum[0].1 - sum_im / n.sqrt()).abs() <= tol);
    }
}
