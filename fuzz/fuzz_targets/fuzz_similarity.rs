#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the content-word similarity measure.
///
/// Splits the input at the first newline and scores the two halves
/// against each other. The score must stay within [0, 1] and must not
/// depend on argument order.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some((a, b)) = s.split_once('\n') {
            let forward = prose_tools::matching::sentence_similarity(a, b);
            let backward = prose_tools::matching::sentence_similarity(b, a);
            assert!((0.0..=1.0).contains(&forward));
            assert!((forward - backward).abs() < f64::EPSILON);
        }
    }
});
