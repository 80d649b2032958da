//! Text codec for the `re,im` sample format and the synthetic two-tone
//! signal used by the end-to-end harness. Formatting precision is a
//! presentation concern only; the transform itself always works on the
//! full-precision samples.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

use crate::complex::Complex64;

/// Decimal places used by the reference text format.
pub const SIGNAL_PRECISION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// A token did not have the `re,im` shape.
    MalformedSample { token: usize },
    /// A token had the right shape but a component failed to parse.
    InvalidComponent { token: usize },
}

impl Display for SignalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedSample { token } => {
                write!(f, "malformed sample at token {token} (expected `re,im`)")
            }
            Self::InvalidComponent { token } => {
                write!(f, "invalid numeric component at token {token}")
            }
        }
    }
}

impl std::error::Error for SignalError {}

/// Parse whitespace-separated `re,im` tokens into samples.
pub fn parse_signal(text: &str) -> Result<Vec<Complex64>, SignalError> {
    let mut samples = Vec::new();
    for (token, raw) in text.split_whitespace().enumerate() {
        let Some((re, im)) = raw.split_once(',') else {
            return Err(SignalError::MalformedSample { token });
        };
        let re = re
            .parse::<f64>()
            .map_err(|_| SignalError::InvalidComponent { token })?;
        let im = im
            .parse::<f64>()
            .map_err(|_| SignalError::InvalidComponent { token })?;
        samples.push((re, im));
    }
    Ok(samples)
}

/// Render one sample as `re,im` with the given number of decimal places.
#[must_use]
pub fn format_sample(sample: Complex64, precision: usize) -> String {
    format!("{:.p$},{:.p$}", sample.0, sample.1, p = precision)
}

/// Render a signal one sample per line, trailing newline included.
#[must_use]
pub fn format_signal(samples: &[Complex64], precision: usize) -> String {
    let mut out = String::new();
    for &sample in samples {
        out.push_str(&format_sample(sample, precision));
        out.push('\n');
    }
    out
}

/// Two-tone synthetic signal of the given length.
///
/// Tone one sits on an exact bin, tone two (at half amplitude) does not,
/// so its energy leaks across the whole spectrum. Components are rounded
/// to [`SIGNAL_PRECISION`] to match what survives the text format.
#[must_use]
pub fn synthetic_tones(len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|i| {
            let theta = i as f64 / len as f64 * PI;
            let re = (10.0 * theta).cos() + 0.5 * (25.0 * theta).cos();
            let im = (10.0 * theta).sin() + 0.5 * (25.0 * theta).sin();
            (round_to(re, SIGNAL_PRECISION), round_to(im, SIGNAL_PRECISION))
        })
        .collect()
}

fn round_to(value: f64, precision: usize) -> f64 {
    let scale = 10.0_f64.powi(precision as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::{
        SIGNAL_PRECISION, SignalError, format_sample, format_signal, parse_signal, synthetic_tones,
    };

    #[test]
    fn parses_whitespace_separated_tokens() {
        let samples = parse_signal("1.00,0.50\n-2.25,0.00\t3,4").expect("well-formed input");
        assert_eq!(samples, vec![(1.0, 0.5), (-2.25, 0.0), (3.0, 4.0)]);
    }

    #[test]
    fn empty_input_parses_to_an_empty_signal() {
        assert_eq!(parse_signal("").expect("empty input is fine"), vec![]);
        assert_eq!(parse_signal("  \n ").expect("blank input is fine"), vec![]);
    }

    #[test]
    fn missing_comma_is_malformed() {
        let err = parse_signal("1.00,0.50 2.00").expect_err("second token lacks a comma");
        assert_eq!(err, SignalError::MalformedSample { token: 1 });
    }

    #[test]
    fn non_numeric_component_is_invalid() {
        let err = parse_signal("1.0,abc").expect_err("imaginary part is not a number");
        assert_eq!(err, SignalError::InvalidComponent { token: 0 });
        assert_eq!(err.to_string(), "invalid numeric component at token 0");
    }

    #[test]
    fn format_round_trips_through_parse() {
        let samples = vec![(1.5, -0.25), (0.0, 42.0)];
        // Full precision: 10 decimal places are plenty for these values.
        let text = format_signal(&samples, 10);
        assert_eq!(parse_signal(&text).expect("own output must parse"), samples);
    }

    #[test]
    fn format_sample_uses_fixed_decimals() {
        assert_eq!(format_sample((1.0, -0.5), SIGNAL_PRECISION), "1.00,-0.50");
        assert_eq!(format_sample((0.004, 0.005), 2), "0.00,0.01");
    }

    #[test]
    fn synthetic_tones_have_the_requested_length() {
        assert_eq!(synthetic_tones(0).len(), 0);
        assert_eq!(synthetic_tones(64).len(), 64);
    }

    #[test]
    fn synthetic_tones_start_at_the_combined_amplitude() {
        // i = 0: both cosines are 1, both sines are 0.
        assert_eq!(synthetic_tones(16)[0], (1.5, 0.0));
    }

    #[test]
    fn synthetic_tones_survive_the_text_format_exactly() {
        let tones = synthetic_tones(32);
        let parsed = parse_signal(&format_signal(&tones, SIGNAL_PRECISION))
            .expect("rendered tones must parse");
        assert_eq!(parsed, tones);
    }
}
