//! Lexical similarity between candidate sentences.
//!
//! Alignment decisions are driven by a deliberately crude overlap metric:
//! lowercase, keep letters and digits, drop function words, clip common
//! suffixes, then take the Jaccard index of the resulting token sets. That
//! is enough to tell "same idea, edited" from "unrelated sentence", which
//! is all the aligner needs; no real stemming or semantic model is involved.

pub mod similarity;
pub mod stopwords;
pub mod tokens;

pub use similarity::sentence_similarity;
pub use stopwords::is_stop_word;
pub use tokens::content_tokens;
