#![forbid(unsafe_code)]

//! Emits the synthetic two-tone test signal in the `re,im` text format,
//! ready to pipe into `fft_cli`.

use std::process::ExitCode;

use brigham_fft::{SIGNAL_PRECISION, format_signal, synthetic_tones};

#[derive(Debug, Clone)]
struct CliArgs {
    len: usize,
}

#[derive(Debug, Clone)]
enum CliParseError {
    Help,
    Message(String),
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, CliParseError> {
    let mut len = None;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Err(CliParseError::Help),
            "--len" => {
                let Some(value) = args.get(index + 1) else {
                    return Err(CliParseError::Message(String::from(
                        "missing value for --len",
                    )));
                };
                let parsed = value.parse().map_err(|_| {
                    CliParseError::Message(format!("invalid value for --len `{value}`"))
                })?;
                len = Some(parsed);
                index += 2;
            }
            unknown => {
                return Err(CliParseError::Message(format!(
                    "unrecognized argument `{unknown}`"
                )));
            }
        }
    }

    let Some(len) = len else {
        return Err(CliParseError::Message(String::from("--len is required")));
    };
    Ok(CliArgs { len })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} --len <n>");
    eprintln!("  --len <n>  number of samples to emit (must be a power of two)");
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| String::from("gen_signal"));

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

    if !args.len.is_power_of_two() {
        eprintln!(
            "error: --len must be a power of two so the signal can be transformed (got {})",
            args.len
        );
        return ExitCode::FAILURE;
    }

    print!(
        "{}",
        format_signal(&synthetic_tones(args.len), SIGNAL_PRECISION)
    );
    ExitCode::SUCCESS
}
