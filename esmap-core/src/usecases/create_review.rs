use super::prelude::*;

/// User input of the review form.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub theme_id: Id,
    pub nickname: String,
    pub comment: String,
    pub difficulty: i64,
    pub fear: i64,
    pub activity: i64,
    pub recommendation: i64,
}

/// Validates the review input and builds the immutable review value.
pub fn prepare_review(new_review: NewReview, submitted_at: Timestamp) -> Result<Review> {
    let NewReview {
        theme_id,
        nickname,
        comment,
        difficulty,
        fear,
        activity,
        recommendation,
    } = new_review;
    let nickname = nickname.trim().to_owned();
    if nickname.is_empty() {
        return Err(Error::Nickname);
    }
    let comment = comment.trim().to_owned();
    if comment.is_empty() {
        return Err(Error::EmptyComment);
    }
    Ok(Review {
        id: Id::from_report_timestamp("review", submitted_at),
        theme_id,
        nickname,
        scores: ScoreProfile::clamped(difficulty, fear, activity, recommendation),
        comment,
        created_at: submitted_at,
    })
}
