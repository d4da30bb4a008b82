//! # esmap-boundary
//!
//! Serializable, anemic data structures for the JSON documents exchanged
//! with the EscapeMap backend. All payload fields are camelCase on the
//! wire; identifiers arrive as numbers from the backend but as strings
//! for client-assigned report entities, so they are normalized to
//! strings while decoding.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use self::conv::ConversionError;

/// Response envelope wrapped around every backend payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<Error>,
}

/// Error document of a non-success envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct Error {
    pub code: String,
    pub message: String,
}

// The backend serializes database ids as JSON numbers while
// client-assigned report ids are strings. Both decode into a string.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(i64),
        Str(String),
    }
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => n.to_string(),
        IdRepr::Str(s) => s,
    })
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonBranch {
    #[serde(deserialize_with = "id_string")]
    pub id          : String,
    pub brand_name  : String,
    pub branch_name : String,
    pub address     : String,
    pub latitude    : f64,
    pub longitude   : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone       : Option<String>,
    #[serde(default)]
    pub themes      : Vec<JsonTheme>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonTheme {
    #[serde(deserialize_with = "id_string")]
    pub id                   : String,
    pub name                 : String,
    pub description          : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url           : Option<String>,
    pub point_difficulty     : i64,
    pub point_fear           : i64,
    pub point_activity       : i64,
    pub point_recommendation : i64,
    /// Comma-joined tag list, possibly absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags                 : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReview {
    #[serde(deserialize_with = "id_string")]
    pub id                   : String,
    #[serde(deserialize_with = "id_string")]
    pub theme_id             : String,
    pub user_nickname        : String,
    pub point_difficulty     : i64,
    pub point_fear           : i64,
    pub point_activity       : i64,
    pub point_recommendation : i64,
    pub comment              : String,
    /// RFC 3339 creation timestamp.
    pub created_at           : String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBranchRequest {
    pub brand_name: String,
    pub branch_name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub themes: Vec<NewThemeRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThemeRequest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub point_difficulty: i64,
    pub point_fear: i64,
    pub point_activity: i64,
    pub point_recommendation: i64,
    /// Comma-joined tag list.
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReviewRequest {
    pub theme_id: String,
    pub nickname: String,
    pub point_difficulty: i64,
    pub point_fear: i64,
    pub point_activity: i64,
    pub point_recommendation: i64,
    pub comment: String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdvertisement {
    #[serde(deserialize_with = "id_string")]
    pub id            : String,
    pub title         : String,
    pub description   : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url     : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url      : Option<String>,
    pub link_text     : String,
    pub display_order : u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Coordinate pair returned by the geocoding collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}
