//! Canonical normalization of raw journal text.
//!
//! Normalization is insensitive to incidental formatting: bullet markers,
//! indentation, stray blank lines, and missing end-of-line punctuation all
//! disappear, and every sentence ends up on its own line. The output feeds
//! the segmenter, so the sentence-boundary rule here (terminator, optional
//! closing quote, then whitespace) is the single source of truth for what a
//! sentence is.

use regex::Regex;
use std::sync::OnceLock;

/// Dotted tokens that must not end a sentence even though they contain or
/// precede a period. Matched case-sensitively against the text before a
/// candidate terminator.
const ABBREVIATIONS: &[&str] = &["a.m", "p.m", "vs", "Mr", "Ms", "Mrs", "Dr", "e.g", "i.e"];

/// Sentence terminator (`.`, `!`, `?`), optionally followed by a closing
/// quote, then the whitespace that separates it from the next sentence.
fn terminator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"([.!?]['"]?)\s+"#).expect("static regex"))
}

/// Normalize raw multi-line text into one sentence per line.
///
/// Per input line: leading bullet markers (`-`, `*`) and indentation are
/// stripped, lines with no alphanumeric content are dropped, and a line
/// containing at least one ASCII letter that does not already end in a
/// sentence terminator receives a trailing `.`. The surviving lines are
/// joined with single spaces and then re-split at sentence boundaries,
/// skipping terminators that belong to a known abbreviation (`a.m`, `p.m`,
/// `vs`, `Mr`, `Dr`, ...).
///
/// Normalization is idempotent: applying it to its own output is a no-op,
/// so stored text can safely be re-normalized on every read.
///
/// # Examples
///
/// ```
/// use prose_tools::text::normalize_text;
///
/// let raw = "- went to the gym\n- squats felt heavy";
/// assert_eq!(normalize_text(raw), "went to the gym.\nsquats felt heavy.");
///
/// let timed = "I left at 6 p.m. and took the bus home";
/// assert_eq!(normalize_text(timed), "I left at 6 p.m. and took the bus home.");
/// ```
#[must_use]
pub fn normalize_text(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let joined = clean_lines(input).join(" ");
    let broken = break_at_terminators(&joined);
    // Splitting can surface fragments that were hidden inside a line (a
    // mid-line bullet, a punctuation-only run), so clean the lines once
    // more. This is what makes normalization a fixed point.
    clean_lines(&broken).join("\n")
}

/// Per-line cleanup: strip bullet markers and indentation, drop lines with
/// no alphanumeric content, and terminate lines that contain an ASCII
/// letter but no sentence-ending punctuation.
fn clean_lines(text: &str) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for line in text.split(['\n', '\r']) {
        let clean = line
            .trim_start_matches(|c: char| c.is_whitespace() || c == '-' || c == '*')
            .trim();
        if clean.is_empty() || !clean.chars().any(char::is_alphanumeric) {
            continue;
        }
        let mut clean = clean.to_string();
        if clean.chars().any(|c| c.is_ascii_alphabetic()) && !ends_terminated(&clean) {
            clean.push('.');
        }
        cleaned.push(clean);
    }
    cleaned
}

/// Whether a line already ends in `.`, `!`, or `?`, allowing a single
/// trailing closing quote after the terminator.
fn ends_terminated(line: &str) -> bool {
    let mut rev = line.chars().rev();
    match rev.next() {
        Some('.' | '!' | '?') => true,
        Some('\'' | '"') => matches!(rev.next(), Some('.' | '!' | '?')),
        _ => false,
    }
}

/// Replace the whitespace after each sentence terminator with a newline,
/// leaving abbreviation periods alone.
fn break_at_terminators(joined: &str) -> String {
    let mut out = String::with_capacity(joined.len());
    let mut last = 0;
    for caps in terminator_re().captures_iter(joined) {
        let whole = caps.get(0).expect("capture 0 always present");
        let term = caps.get(1).expect("group 1 always present");
        if preceded_by_abbreviation(&joined[..term.start()]) {
            continue;
        }
        out.push_str(&joined[last..term.end()]);
        out.push('\n');
        last = whole.end();
    }
    out.push_str(&joined[last..]);
    out
}

/// Whether the text before a candidate terminator ends with a protected
/// abbreviation at a word boundary (so `6 p.m` protects, `Visa.m` does not).
fn preceded_by_abbreviation(prefix: &str) -> bool {
    ABBREVIATIONS.iter().any(|abbr| {
        if !prefix.ends_with(abbr) {
            return false;
        }
        let before = &prefix[..prefix.len() - abbr.len()];
        match before.chars().next_back() {
            None => true,
            Some(c) => !c.is_ascii_alphanumeric() && c != '_',
        }
    })
}
