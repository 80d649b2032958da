#![forbid(unsafe_code)]

//! Stdin-to-stdout FFT filter.
//!
//! Reads whitespace-separated `re,im` samples, runs the forward transform,
//! and prints the spectrum one `re,im` line per bin. The sample count must
//! be a power of two.

use std::io::Read;
use std::process::ExitCode;

use brigham_fft::{SIGNAL_PRECISION, format_signal, parse_signal, transform};

#[derive(Debug, Clone)]
struct CliArgs {
    precision: usize,
}

#[derive(Debug, Clone)]
enum CliParseError {
    Help,
    Message(String),
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, CliParseError> {
    let mut precision = SIGNAL_PRECISION;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Err(CliParseError::Help),
            "--precision" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --precision",
                    )));
                };
                precision = value.parse().map_err(|_| {
                    CliParseError::Message(format!("invalid value for --precision `{value}`"))
                })?;
                index += 2;
            }
            unknown => {
                return Err(CliParseError::Message(format!(
                    "unrecognized argument `{unknown}`"
                )));
            }
        }
    }

    Ok(CliArgs { precision })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [--precision <n>] < signal.dat");
    eprintln!("  --precision <n>  decimal places in the output (default {SIGNAL_PRECISION})");
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| String::from("fft_cli"));

    let args = match parse_cli_args(&argv[1..]) {
        Ok(args) => args,
        Err(CliParseError::Help) => {
            print_usage(&program);
            return ExitCode::SUCCESS;
        }
        Err(CliParseError::Message(message)) => {
            eprintln!("error: {message}");
            print_usage(&program);
            return ExitCode::FAILURE;
        }
    };

    let mut text = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("error: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    let samples = match parse_signal(&text) {
        Ok(samples) => samples,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let spectrum = match transform(&samples) {
        Ok(spectrum) => spectrum,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", format_signal(&spectrum, args.precision));
    ExitCode::SUCCESS
}
