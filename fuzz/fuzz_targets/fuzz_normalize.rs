#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the text normalization entry point.
///
/// Feeds arbitrary UTF-8 strings to `normalize_text`, which strips
/// bullet markers, drops non-prose lines, and breaks at sentence
/// terminators. Normalizing a second time must not change the output.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let once = prose_tools::text::normalize_text(s);
        let twice = prose_tools::text::normalize_text(&once);
        assert_eq!(once, twice);
    }
});
