#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz sentence segmentation.
///
/// Exercises normalization plus terminator splitting, including the
/// abbreviation protection heuristic. Every sentence that comes back
/// must be trimmed and non-empty.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for sentence in prose_tools::text::split_sentences(s) {
            assert!(!sentence.is_empty());
            assert_eq!(sentence, sentence.trim());
        }
    }
});
