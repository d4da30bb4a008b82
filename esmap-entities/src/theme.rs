use crate::{geo::MapPoint, id::Id, score::ScoreProfile};

use url::Url;

/// A single rentable experience within a venue.
///
/// A theme has no lifecycle of its own; it is created, approved and
/// removed together with its owning venue.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub poster_url: Option<Url>,
    pub scores: ScoreProfile,
    pub tags: Vec<String>,
}

/// Flat, display-ready projection of a theme with the denormalized
/// fields of its parent venue attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeEntry {
    pub theme: Theme,
    pub venue_id: Id,
    pub brand_name: String,
    pub branch_name: String,
    pub address: String,
    pub pos: MapPoint,
    pub website_url: Option<Url>,
}
