use super::*;
use esmap_entities as e;

use e::{geo::MapPoint, score::ScoreProfile, time::Timestamp};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid position: {lat},{lng}")]
    InvalidPosition { lat: f64, lng: f64 },
    #[error("Invalid creation timestamp: {0}")]
    InvalidTimestamp(String),
}

fn split_tags(tags: Option<String>) -> Vec<String> {
    tags.map(|joined| {
        joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

// URLs delivered by the backend are display data; an unparsable one is
// dropped rather than failing the whole document.
fn lenient_url(url: Option<String>) -> Option<e::url::Url> {
    url.as_deref().and_then(|s| s.parse().ok())
}

fn scores(difficulty: i64, fear: i64, activity: i64, recommendation: i64) -> ScoreProfile {
    ScoreProfile::clamped(difficulty, fear, activity, recommendation)
}

impl From<JsonTheme> for e::theme::Theme {
    fn from(from: JsonTheme) -> Self {
        let JsonTheme {
            id,
            name,
            description,
            poster_url,
            point_difficulty,
            point_fear,
            point_activity,
            point_recommendation,
            tags,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            poster_url: lenient_url(poster_url),
            scores: scores(
                point_difficulty,
                point_fear,
                point_activity,
                point_recommendation,
            ),
            tags: split_tags(tags),
        }
    }
}

impl From<e::theme::Theme> for JsonTheme {
    fn from(from: e::theme::Theme) -> Self {
        let e::theme::Theme {
            id,
            name,
            description,
            poster_url,
            scores,
            tags,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            poster_url: poster_url.map(|url| url.to_string()),
            point_difficulty: i64::from(u8::from(scores.difficulty)),
            point_fear: i64::from(u8::from(scores.fear)),
            point_activity: i64::from(u8::from(scores.activity)),
            point_recommendation: i64::from(u8::from(scores.recommendation)),
            tags: Some(join_tags(&tags)),
        }
    }
}

impl TryFrom<JsonBranch> for e::venue::Venue {
    type Error = ConversionError;

    fn try_from(from: JsonBranch) -> Result<Self, Self::Error> {
        let JsonBranch {
            id,
            brand_name,
            branch_name,
            address,
            latitude,
            longitude,
            website_url,
            phone,
            themes,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude).ok_or(
            ConversionError::InvalidPosition {
                lat: latitude,
                lng: longitude,
            },
        )?;
        Ok(Self {
            id: id.into(),
            brand_name,
            branch_name,
            address,
            pos,
            website_url: lenient_url(website_url),
            phone,
            themes: themes.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<e::venue::Venue> for JsonBranch {
    fn from(from: e::venue::Venue) -> Self {
        let e::venue::Venue {
            id,
            brand_name,
            branch_name,
            address,
            pos,
            website_url,
            phone,
            themes,
        } = from;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            brand_name,
            branch_name,
            address,
            latitude,
            longitude,
            website_url: website_url.map(|url| url.to_string()),
            phone,
            themes: themes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::venue::Venue> for NewBranchRequest {
    fn from(from: e::venue::Venue) -> Self {
        let JsonBranch {
            brand_name,
            branch_name,
            address,
            latitude,
            longitude,
            website_url,
            phone,
            themes,
            ..
        } = from.into();
        Self {
            brand_name,
            branch_name,
            address,
            latitude,
            longitude,
            website_url,
            phone,
            themes: themes
                .into_iter()
                .map(|theme| NewThemeRequest {
                    name: theme.name,
                    description: theme.description,
                    poster_url: theme.poster_url,
                    point_difficulty: theme.point_difficulty,
                    point_fear: theme.point_fear,
                    point_activity: theme.point_activity,
                    point_recommendation: theme.point_recommendation,
                    tags: theme.tags.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl TryFrom<JsonReview> for e::review::Review {
    type Error = ConversionError;

    fn try_from(from: JsonReview) -> Result<Self, Self::Error> {
        let JsonReview {
            id,
            theme_id,
            user_nickname,
            point_difficulty,
            point_fear,
            point_activity,
            point_recommendation,
            comment,
            created_at,
        } = from;
        let created_at = OffsetDateTime::parse(&created_at, &Rfc3339)
            .map(Timestamp::from)
            .map_err(|_| ConversionError::InvalidTimestamp(created_at))?;
        Ok(Self {
            id: id.into(),
            theme_id: theme_id.into(),
            nickname: user_nickname,
            scores: scores(
                point_difficulty,
                point_fear,
                point_activity,
                point_recommendation,
            ),
            comment,
            created_at,
        })
    }
}

impl From<e::review::Review> for NewReviewRequest {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            theme_id,
            nickname,
            scores,
            comment,
            ..
        } = from;
        Self {
            theme_id: theme_id.into(),
            nickname,
            point_difficulty: i64::from(u8::from(scores.difficulty)),
            point_fear: i64::from(u8::from(scores.fear)),
            point_activity: i64::from(u8::from(scores.activity)),
            point_recommendation: i64::from(u8::from(scores.recommendation)),
            comment,
        }
    }
}

impl From<JsonAdvertisement> for e::advertisement::Advertisement {
    fn from(from: JsonAdvertisement) -> Self {
        let JsonAdvertisement {
            id,
            title,
            description,
            image_url,
            link_url,
            link_text,
            display_order,
        } = from;
        Self {
            id: id.into(),
            title,
            description,
            image_url: lenient_url(image_url),
            link_url: lenient_url(link_url),
            link_text,
            display_order,
        }
    }
}
