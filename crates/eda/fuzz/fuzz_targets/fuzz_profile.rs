//! Fuzz target for the full profiling pipeline.
//!
//! Any input the parser accepts must profile without panicking and
//! yield a quality score within [0, 1].

#![no_main]

use eda::{Parser, Profiler};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }

    if let Ok(dataset) = Parser::new().parse_bytes(data) {
        if let Ok(report) = Profiler::new().profile(&dataset) {
            assert!((0.0..=1.0).contains(&report.quality.quality_score));
            assert_eq!(report.flat_summary().len(), dataset.n_cols());
        }
    }
});
