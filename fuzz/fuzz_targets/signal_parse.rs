#![no_main]

use arbitrary::Arbitrary;
use brigham_fft::{format_signal, parse_signal};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ParseInput {
    text: String,
    precision: u8,
}

fuzz_target!(|input: ParseInput| {
    // Parsing arbitrary text must never panic.
    if let Ok(samples) = parse_signal(&input.text) {
        // Whatever parsed must survive a format/parse round trip
        // (values may change: formatting is lossy at low precision).
        let precision = usize::from(input.precision % 18);
        let rendered = format_signal(&samples, precision);
        let reparsed = parse_signal(&rendered).expect("own rendering must parse");
        assert_eq!(reparsed.len(), samples.len());
    }
});
