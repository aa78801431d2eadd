//! Scoring parameters for the sentence aligner.

use serde::{Deserialize, Serialize};

/// Scoring knobs for the alignment dynamic program.
///
/// A candidate pairing scores `similarity * match_scale` when the similarity
/// clears `similarity_threshold`, and `mismatch_penalty` otherwise. Leaving
/// a sentence unpaired costs `gap_penalty`. With the default values a pair
/// needs roughly one shared content token in six to beat two gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreModel {
    /// Minimum similarity for a pairing to score as a match.
    pub similarity_threshold: f64,
    /// Multiplier applied to similarity for scoring matches.
    pub match_scale: f64,
    /// Score for pairing sentences below the threshold.
    pub mismatch_penalty: f64,
    /// Score for leaving a sentence unpaired.
    pub gap_penalty: f64,
}

impl ScoreModel {
    /// The default model. Pairs sentences that share a modest amount of
    /// vocabulary; everything else falls out as adds and removes.
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            similarity_threshold: 0.15,
            match_scale: 10.0,
            mismatch_penalty: -3.0,
            gap_penalty: -3.0,
        }
    }

    /// Demands substantially more shared vocabulary before pairing, so
    /// heavy rewrites show up as remove-plus-add instead of a modification.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            similarity_threshold: 0.3,
            ..Self::balanced()
        }
    }

    /// Pairs on the faintest overlap. Useful when corrections routinely
    /// replace most of the vocabulary but keep the sentence's subject.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            similarity_threshold: 0.05,
            ..Self::balanced()
        }
    }

    /// Look up a preset by name.
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(Self::strict()),
            "balanced" => Some(Self::balanced()),
            "permissive" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Override the similarity threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Score a candidate pairing with the given similarity.
    #[must_use]
    pub fn pair_score(&self, similarity: f64) -> f64 {
        if similarity > self.similarity_threshold {
            similarity * self.match_scale
        } else {
            self.mismatch_penalty
        }
    }
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self::balanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_balanced() {
        assert_eq!(ScoreModel::default(), ScoreModel::balanced());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(ScoreModel::from_preset("strict"), Some(ScoreModel::strict()));
        assert_eq!(
            ScoreModel::from_preset("balanced"),
            Some(ScoreModel::balanced())
        );
        assert_eq!(
            ScoreModel::from_preset("permissive"),
            Some(ScoreModel::permissive())
        );
        assert_eq!(ScoreModel::from_preset("aggressive"), None);
    }

    #[test]
    fn test_pair_score_above_threshold() {
        let model = ScoreModel::balanced();
        assert!((model.pair_score(0.5) - 5.0).abs() < f64::EPSILON);
        assert!((model.pair_score(1.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pair_score_at_or_below_threshold() {
        let model = ScoreModel::balanced();
        // The threshold itself does not count as a match.
        assert_eq!(model.pair_score(0.15), model.mismatch_penalty);
        assert_eq!(model.pair_score(0.0), model.mismatch_penalty);
    }

    #[test]
    fn test_with_threshold_override() {
        let model = ScoreModel::balanced().with_threshold(0.5);
        assert_eq!(model.pair_score(0.4), model.mismatch_penalty);
        assert!(model.pair_score(0.6) > 0.0);
    }
}
