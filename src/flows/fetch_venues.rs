use esmap_core::{entities::Venue, storage::StateStorage};
use esmap_frontend_api::PublicApi;

use super::Result;
use crate::app::AppState;

/// Fetches the approved venues from the backend and replaces the
/// approved collection wholesale. Pending reports are untouched.
///
/// Fetched entries that do not convert (e.g. out-of-range coordinates)
/// are dropped with a warning instead of failing the whole fetch.
pub async fn fetch_venues<S: StateStorage>(
    api: &PublicApi,
    app: &mut AppState,
    storage: &S,
) -> Result<usize> {
    let branches = api.branches().await?;
    let fetched = branches.len();
    let venues: Vec<Venue> = branches
        .into_iter()
        .filter_map(|branch| {
            Venue::try_from(branch)
                .map_err(|err| {
                    log::warn!("Skipping fetched branch: {err}");
                })
                .ok()
        })
        .collect();
    if venues.len() < fetched {
        log::warn!("Dropped {} of {fetched} fetched branches", fetched - venues.len());
    }
    let count = venues.len();
    app.store.replace_approved(venues);
    app.save_directory(storage)?;
    log::info!("Fetched {count} venues");
    Ok(count)
}
