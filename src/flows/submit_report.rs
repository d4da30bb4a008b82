use esmap_core::{
    entities::{Id, Timestamp},
    gateways::geocode::GeoCodingGateway,
    storage::StateStorage,
    usecases,
};

use super::Result;
use crate::app::AppState;

/// Validates and geocodes a venue report, then appends it to the
/// pending collection and persists the directory.
pub fn submit_report<S: StateStorage>(
    geocoder: &dyn GeoCodingGateway,
    app: &mut AppState,
    storage: &S,
    report: usecases::NewVenueReport,
) -> Result<Id> {
    let venue = usecases::prepare_venue_report(geocoder, report, Timestamp::now())?;
    let id = venue.id.clone();
    app.store.report(venue);
    app.save_directory(storage)?;
    Ok(id)
}
