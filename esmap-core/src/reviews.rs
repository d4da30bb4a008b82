use crate::entities::{AvgScores, AvgScoresBuilder, Id, Review};

/// In-memory collection of the reviews fetched or submitted so far,
/// newest first. Reviews are immutable; deletion is the only update.
#[derive(Debug, Default)]
pub struct ReviewLedger {
    reviews: Vec<Review>,
}

impl ReviewLedger {
    /// Replaces the reviews of one theme with freshly fetched data,
    /// keeping the reviews of all other themes.
    pub fn replace_for_theme(&mut self, theme_id: &Id, fetched: Vec<Review>) {
        self.reviews.retain(|r| r.theme_id != *theme_id);
        self.reviews.extend(fetched);
    }

    /// Prepends a newly created review.
    pub fn insert(&mut self, review: Review) {
        self.reviews.insert(0, review);
    }

    pub fn remove(&mut self, id: &Id) -> bool {
        let Some(pos) = self.reviews.iter().position(|r| r.id == *id) else {
            return false;
        };
        self.reviews.remove(pos);
        true
    }

    pub fn reviews_of_theme<'a>(&'a self, theme_id: &'a Id) -> impl Iterator<Item = &'a Review> + 'a {
        self.reviews.iter().filter(move |r| r.theme_id == *theme_id)
    }

    /// Arithmetic mean of the four scores over all reviews of a theme,
    /// `None` when the theme has no reviews.
    pub fn average_scores(&self, theme_id: &Id) -> Option<AvgScores> {
        let mut builder = AvgScoresBuilder::default();
        for review in self.reviews_of_theme(theme_id) {
            builder.add(review.scores);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esmap_entities::builders::*;

    fn review(id: &str, theme_id: &str, scores: (i64, i64, i64, i64)) -> Review {
        Review::build()
            .id(id)
            .theme_id(theme_id)
            .nickname("Escaper")
            .scores(scores.0, scores.1, scores.2, scores.3)
            .comment("fun")
            .finish()
    }

    #[test]
    fn replace_keeps_other_themes_reviews() {
        let mut ledger = ReviewLedger::default();
        ledger.insert(review("r1", "t1", (5, 5, 5, 5)));
        ledger.insert(review("r2", "t2", (3, 3, 3, 3)));
        ledger.replace_for_theme(
            &"t1".into(),
            vec![
                review("r3", "t1", (7, 7, 7, 7)),
                review("r4", "t1", (9, 9, 9, 9)),
            ],
        );
        assert_eq!(ledger.reviews_of_theme(&"t1".into()).count(), 2);
        assert_eq!(ledger.reviews_of_theme(&"t2".into()).count(), 1);
        assert!(!ledger.remove(&"r1".into()));
    }

    #[test]
    fn newest_review_comes_first() {
        let mut ledger = ReviewLedger::default();
        ledger.insert(review("r1", "t1", (5, 5, 5, 5)));
        ledger.insert(review("r2", "t1", (3, 3, 3, 3)));
        let theme = "t1".into();
        let ids: Vec<_> = ledger
            .reviews_of_theme(&theme)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["r2", "r1"]);
    }

    #[test]
    fn averages_match_the_arithmetic_mean() {
        let mut ledger = ReviewLedger::default();
        ledger.insert(review("r1", "t1", (4, 2, 6, 8)));
        ledger.insert(review("r2", "t1", (6, 4, 8, 10)));
        ledger.insert(review("r3", "t2", (0, 0, 0, 0)));
        let avg = ledger.average_scores(&"t1".into()).unwrap();
        assert_eq!(avg.count, 2);
        assert_eq!(f64::from(avg.difficulty), 5.0);
        assert_eq!(f64::from(avg.fear), 3.0);
        assert_eq!(f64::from(avg.activity), 7.0);
        assert_eq!(f64::from(avg.recommendation), 9.0);
    }

    #[test]
    fn no_reviews_no_average() {
        let ledger = ReviewLedger::default();
        assert_eq!(ledger.average_scores(&"t1".into()), None);
    }

    #[test]
    fn same_nickname_may_review_a_theme_twice() {
        let mut ledger = ReviewLedger::default();
        ledger.insert(review("r1", "t1", (5, 5, 5, 5)));
        ledger.insert(review("r2", "t1", (5, 5, 5, 5)));
        assert_eq!(ledger.reviews_of_theme(&"t1".into()).count(), 2);
        assert!(ledger.remove(&"r2".into()));
        assert_eq!(ledger.reviews_of_theme(&"t1".into()).count(), 1);
    }
}
