use esmap_boundary::NewReviewRequest;
use esmap_core::{
    entities::{Id, Review, Timestamp},
    usecases,
};
use esmap_frontend_api::PublicApi;

use super::Result;
use crate::app::AppState;

/// Refreshes the ledger with the backend's reviews of one theme.
pub async fn load_reviews(api: &PublicApi, app: &mut AppState, theme_id: &Id) -> Result<usize> {
    let fetched = api.reviews_of_theme(theme_id.as_str()).await?;
    let mut reviews = Vec::with_capacity(fetched.len());
    for json in fetched {
        match Review::try_from(json) {
            Ok(review) => reviews.push(review),
            Err(err) => log::warn!("Skipping fetched review: {err}"),
        }
    }
    let count = reviews.len();
    app.reviews.replace_for_theme(theme_id, reviews);
    Ok(count)
}

/// Validates a review, submits it to the backend and inserts the
/// created review into the ledger.
pub async fn submit_review(
    api: &PublicApi,
    app: &mut AppState,
    new_review: usecases::NewReview,
) -> Result<Review> {
    let review = usecases::prepare_review(new_review, Timestamp::now())?;
    let created = api.create_review(&NewReviewRequest::from(review)).await?;
    let review = Review::try_from(created)?;
    app.reviews.insert(review.clone());
    log::info!("Created review {} for theme {}", review.id, review.theme_id);
    Ok(review)
}

pub async fn delete_review(api: &PublicApi, app: &mut AppState, id: &Id) -> Result<()> {
    api.delete_review(id.as_str()).await?;
    app.reviews.remove(id);
    Ok(())
}
