#![forbid(unsafe_code)]

//! Fixture-driven conformance harness for the radix-2 FFT.
//!
//! Fixtures are JSON packets of cases; each case feeds a signal to
//! [`brigham_fft::transform`] and compares the outcome against either an
//! expected spectrum (within tolerances) or an expected error string.
//! Reports can be persisted as parity artifacts for later inspection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use brigham_fft::{Complex64, transform};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub fixture_root: PathBuf,
    pub artifact_root: PathBuf,
}

impl HarnessConfig {
    #[must_use]
    pub fn default_paths() -> Self {
        let fixture_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let artifact_root = fixture_root.join("artifacts");
        Self {
            fixture_root,
            artifact_root,
        }
    }

    #[must_use]
    pub fn artifact_dir_for(&self, packet_id: &str) -> PathBuf {
        self.artifact_root.join(packet_id)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::default_paths()
    }
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("fixture load failed for {path}: {source}")]
    FixtureIo { path: PathBuf, source: io::Error },
    #[error("fixture parse failed for {path}: {source}")]
    FixtureParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact write failed for {path}: {source}")]
    ArtifactIo { path: PathBuf, source: io::Error },
    #[error("artifact encode failed: {0}")]
    ArtifactEncode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PacketFixture {
    pub packet_id: String,
    pub family: String,
    pub cases: Vec<FftCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FftCase {
    pub case_id: String,
    /// Input samples as `[re, im]` pairs.
    pub input: Vec<[f64; 2]>,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectedOutcome {
    Spectrum {
        bins: Vec<[f64; 2]>,
        atol: f64,
        rtol: f64,
    },
    Error {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseResult {
    pub case_id: String,
    pub passed: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PacketReport {
    pub packet_id: String,
    pub family: String,
    pub case_results: Vec<CaseResult>,
    pub passed_cases: usize,
    pub failed_cases: usize,
    pub generated_unix_ms: u128,
}

/// Direct unitary DFT by the defining sum Σₙ xₙ·e^{-2πikn/N} / √N.
///
/// O(N²); the conformance oracle the fast path is judged against.
#[must_use]
pub fn reference_dft(input: &[Complex64]) -> Vec<Complex64> {
    let n = input.len();
    let mut output = vec![(0.0, 0.0); n];
    for (k, out) in output.iter_mut().enumerate() {
        let mut acc = (0.0, 0.0);
        for (t, &(re, im)) in input.iter().enumerate() {
            let angle =
                -2.0 * std::f64::consts::PI * (k as f64) * (t as f64) / (n as f64);
            let (c, s) = (angle.cos(), angle.sin());
            acc = (acc.0 + re * c - im * s, acc.1 + re * s + im * c);
        }
        *out = acc;
    }
    let scale = 1.0 / (n as f64).sqrt();
    for value in &mut output {
        *value = (value.0 * scale, value.1 * scale);
    }
    output
}

/// Run every case of a fixture packet through the transform.
pub fn run_fft_packet(
    config: &HarnessConfig,
    fixture_name: &str,
) -> Result<PacketReport, HarnessError> {
    let fixture_path = config.fixture_root.join(fixture_name);
    let raw = fs::read_to_string(&fixture_path).map_err(|source| HarnessError::FixtureIo {
        path: fixture_path.clone(),
        source,
    })?;
    let fixture: PacketFixture =
        serde_json::from_str(&raw).map_err(|source| HarnessError::FixtureParse {
            path: fixture_path,
            source,
        })?;

    let mut case_results = Vec::with_capacity(fixture.cases.len());
    for case in &fixture.cases {
        let input: Vec<Complex64> = case.input.iter().map(|&[re, im]| (re, im)).collect();
        let outcome = transform(&input);
        let (passed, message) = compare_case(&case.expected, &outcome);
        case_results.push(CaseResult {
            case_id: case.case_id.clone(),
            passed,
            message,
        });
    }

    Ok(build_packet_report(
        fixture.packet_id,
        fixture.family,
        case_results,
    ))
}

/// Persist a report as a pretty-printed parity artifact, returning its path.
pub fn write_parity_report(
    config: &HarnessConfig,
    report: &PacketReport,
) -> Result<PathBuf, HarnessError> {
    let output_dir = config.artifact_dir_for(&report.packet_id);
    fs::create_dir_all(&output_dir).map_err(|source| HarnessError::ArtifactIo {
        path: output_dir.clone(),
        source,
    })?;

    let report_path = output_dir.join("parity_report.json");
    let report_bytes = serde_json::to_vec_pretty(report)?;
    fs::write(&report_path, report_bytes).map_err(|source| HarnessError::ArtifactIo {
        path: report_path.clone(),
        source,
    })?;
    Ok(report_path)
}

pub fn load_packet_report(path: &Path) -> Result<PacketReport, HarnessError> {
    let raw = fs::read_to_string(path).map_err(|source| HarnessError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| HarnessError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

fn compare_case(
    expected: &ExpectedOutcome,
    observed: &Result<Vec<Complex64>, brigham_fft::FftError>,
) -> (bool, String) {
    match (expected, observed) {
        (ExpectedOutcome::Spectrum { bins, atol, rtol }, Ok(actual)) => {
            if actual.len() != bins.len() {
                return (
                    false,
                    format!(
                        "length mismatch: expected {} bins, got {}",
                        bins.len(),
                        actual.len()
                    ),
                );
            }
            let md = max_diff_spectrum(actual, bins);
            let pass = actual
                .iter()
                .zip(bins.iter())
                .all(|(&(re, im), &[e_re, e_im])| {
                    allclose_scalar(re, e_re, *atol, *rtol)
                        && allclose_scalar(im, e_im, *atol, *rtol)
                });
            let msg = if pass {
                format!("spectrum matched (max_diff={md:.2e})")
            } else {
                format!("spectrum mismatch: max_diff={md:.2e}, atol={atol}, rtol={rtol}")
            };
            (pass, msg)
        }
        (ExpectedOutcome::Error { error }, Err(actual)) => {
            let pass = error == &actual.to_string();
            let msg = if pass {
                "error matched expected contract".to_owned()
            } else {
                format!("error mismatch: expected `{error}`, got `{actual}`")
            };
            (pass, msg)
        }
        (expected, result) => (
            false,
            format!("shape mismatch: expected {expected:?}, got {result:?}"),
        ),
    }
}

fn allclose_scalar(actual: f64, expected: f64, atol: f64, rtol: f64) -> bool {
    (actual - expected).abs() <= atol + rtol * expected.abs()
}

fn max_diff_spectrum(actual: &[Complex64], expected: &[[f64; 2]]) -> f64 {
    actual
        .iter()
        .zip(expected.iter())
        .map(|(&(re, im), &[e_re, e_im])| (re - e_re).abs().max((im - e_im).abs()))
        .fold(0.0_f64, f64::max)
}

fn build_packet_report(
    packet_id: String,
    family: String,
    case_results: Vec<CaseResult>,
) -> PacketReport {
    let passed_cases = case_results.iter().filter(|r| r.passed).count();
    let failed_cases = case_results.len().saturating_sub(passed_cases);
    PacketReport {
        packet_id,
        family,
        case_results,
        passed_cases,
        failed_cases,
        generated_unix_ms: now_unix_ms(),
    }
}

fn now_unix_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis())
}
