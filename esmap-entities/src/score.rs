/// A single bounded score in the closed range [0, 10].
///
/// Inputs are clamped to the range by the authoring UI; the clamping
/// constructor is the only lossy way in.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0)
    }

    pub const fn max() -> Self {
        Self(10)
    }

    pub fn clamped(val: i64) -> Self {
        Self(val.clamp(i64::from(Self::min().0), i64::from(Self::max().0)) as u8)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<u8> for Score {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<Score> for u8 {
    fn from(from: Score) -> Self {
        from.0
    }
}

impl From<Score> for f64 {
    fn from(from: Score) -> Self {
        f64::from(from.0)
    }
}

/// The four scores every theme and every review carries.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ScoreProfile {
    pub difficulty: Score,
    pub fear: Score,
    pub activity: Score,
    pub recommendation: Score,
}

impl ScoreProfile {
    pub fn clamped(difficulty: i64, fear: i64, activity: i64, recommendation: i64) -> Self {
        Self {
            difficulty: Score::clamped(difficulty),
            fear: Score::clamped(fear),
            activity: Score::clamped(activity),
            recommendation: Score::clamped(recommendation),
        }
    }

    pub fn is_valid(self) -> bool {
        self.difficulty.is_valid()
            && self.fear.is_valid()
            && self.activity.is_valid()
            && self.recommendation.is_valid()
    }
}

/// Arithmetic mean of a set of scores.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgScore(f64);

impl From<f64> for AvgScore {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgScore> for f64 {
    fn from(from: AvgScore) -> Self {
        from.0
    }
}

impl From<Score> for AvgScore {
    fn from(from: Score) -> Self {
        f64::from(from).into()
    }
}

/// Averaged score profile over a number of reviews.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AvgScores {
    pub difficulty: AvgScore,
    pub fear: AvgScore,
    pub activity: AvgScore,
    pub recommendation: AvgScore,
    pub count: usize,
}

#[derive(Debug, Default, Clone)]
pub struct AvgScoresBuilder {
    difficulty: u64,
    fear: u64,
    activity: u64,
    recommendation: u64,
    count: usize,
}

impl AvgScoresBuilder {
    pub fn add(&mut self, profile: ScoreProfile) {
        debug_assert!(profile.is_valid());
        self.difficulty += u64::from(u8::from(profile.difficulty));
        self.fear += u64::from(u8::from(profile.fear));
        self.activity += u64::from(u8::from(profile.activity));
        self.recommendation += u64::from(u8::from(profile.recommendation));
        self.count += 1;
    }

    pub fn build(self) -> Option<AvgScores> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as f64;
        Some(AvgScores {
            difficulty: (self.difficulty as f64 / n).into(),
            fear: (self.fear as f64 / n).into(),
            activity: (self.activity as f64 / n).into(),
            recommendation: (self.recommendation as f64 / n).into(),
            count: self.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_out_of_range_values() {
        assert_eq!(Score::clamped(12), Score::max());
        assert_eq!(Score::clamped(-3), Score::min());
        assert_eq!(Score::clamped(7), Score::new(7u8));
    }

    #[test]
    fn average_of_profiles() {
        let mut builder = AvgScoresBuilder::default();
        builder.add(ScoreProfile::clamped(4, 2, 6, 8));
        builder.add(ScoreProfile::clamped(6, 4, 8, 10));
        let avg = builder.build().unwrap();
        assert_eq!(avg.count, 2);
        assert_eq!(f64::from(avg.difficulty), 5.0);
        assert_eq!(f64::from(avg.fear), 3.0);
        assert_eq!(f64::from(avg.activity), 7.0);
        assert_eq!(f64::from(avg.recommendation), 9.0);
    }

    #[test]
    fn no_profiles_no_average() {
        assert_eq!(None, AvgScoresBuilder::default().build());
    }
}
