use std::time::Duration;

use esmap_boundary::Coordinate;
use esmap_core::gateways::geocode::GeoCodingGateway;

/// Resolves free-text addresses through the geocoding collaborator.
///
/// The endpoint takes the address as a query parameter and answers with
/// a bare `{lat, lng}` document, or 404/500 when the address is unknown.
/// Every failure resolves to `None`; the caller decides whether that
/// blocks a submission.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpGeocoder {
    pub fn try_new(endpoint: String) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { endpoint, client })
    }
}

impl GeoCodingGateway for HttpGeocoder {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", addr)])
            .send()
            .map_err(|err| {
                log::warn!("Unable to reach the geocoding service: {err}");
            })
            .ok()?;
        if !response.status().is_success() {
            log::warn!(
                "Geocoding of '{addr}' failed with status {}",
                response.status()
            );
            return None;
        }
        let coordinate: Coordinate = response
            .json()
            .map_err(|err| {
                log::warn!("Invalid geocoding response for '{addr}': {err}");
            })
            .ok()?;
        Some((coordinate.lat, coordinate.lng))
    }
}
