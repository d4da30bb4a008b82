use esmap_core::entities::Advertisement;
use esmap_frontend_api::PublicApi;

use super::Result;

/// Fetches the current advertisements, sorted for display.
pub async fn fetch_advertisements(api: &PublicApi) -> Result<Vec<Advertisement>> {
    let mut advertisements: Vec<Advertisement> = api
        .advertisements()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    advertisements.sort_by_key(|ad| ad.display_order);
    Ok(advertisements)
}
