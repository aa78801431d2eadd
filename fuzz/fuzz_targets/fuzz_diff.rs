#![no_main]
use libfuzzer_sys::fuzz_target;
use prose_tools::diff::DiffEngine;

/// Fuzz the full diff pipeline.
///
/// Splits the input at the first newline to obtain an original and a
/// corrected text, then runs segmentation, coarse diff, and fine
/// alignment over both. Also diffs the input against itself, which
/// must never report a change.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let engine = DiffEngine::new();

        if let Some((original, corrected)) = s.split_once('\n') {
            let _ = engine.diff(original, corrected);
        }

        let result = engine.diff(s, s);
        assert!(!result.has_changes());
    }
});
