//! Fuzz target for the delimited-text parser.
//!
//! Checks that parsing arbitrary bytes never panics, whether the
//! delimiter is auto-detected or fixed.

#![no_main]

use eda::{Parser, ParserConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let _ = Parser::new().parse_bytes(data);

    for delimiter in [b',', b'\t', b';', b'|'] {
        let parser = Parser::with_config(ParserConfig::default().with_delimiter(delimiter));
        let _ = parser.parse_bytes(data);
    }
});
