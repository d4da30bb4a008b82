use super::prelude::*;

/// Inclusive score range, full range by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: Score,
    pub max: Score,
}

impl ScoreRange {
    pub fn contains(&self, score: Score) -> bool {
        score >= self.min && score <= self.max
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: Score::min(),
            max: Score::max(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreFilter {
    pub difficulty: ScoreRange,
    pub fear: ScoreRange,
    pub activity: ScoreRange,
    pub recommendation: ScoreRange,
}

impl ScoreFilter {
    pub fn matches(&self, scores: &ScoreProfile) -> bool {
        self.difficulty.contains(scores.difficulty)
            && self.fear.contains(scores.fear)
            && self.activity.contains(scores.activity)
            && self.recommendation.contains(scores.recommendation)
    }
}

/// A venue passes when at least one of its themes satisfies all four
/// score ranges.
pub fn filter_venues_by_scores<'v>(venues: &'v [Venue], filter: &ScoreFilter) -> Vec<&'v Venue> {
    venues
        .iter()
        .filter(|venue| venue.themes.iter().any(|theme| filter.matches(&theme.scores)))
        .collect()
}
