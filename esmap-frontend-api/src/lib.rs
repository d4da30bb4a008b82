//! # esmap-frontend-api
//!
//! Typed async client for the EscapeMap backend REST API. Every
//! response is wrapped in the `{success, data, error}` envelope; a
//! non-success envelope surfaces as [`Error::Api`].

use serde::de::DeserializeOwned;
use thiserror::Error;

use esmap_boundary::ResponseEnvelope;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] esmap_boundary::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

fn unwrap_envelope<T>(envelope: ResponseEnvelope<T>) -> Result<Option<T>> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(envelope
            .error
            .unwrap_or_else(|| esmap_boundary::Error {
                code: "UNKNOWN".into(),
                message: "Unspecified backend error".into(),
            })
            .into())
    }
}

/// Decodes an envelope whose data is required.
pub(crate) async fn into_json<T>(response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: ResponseEnvelope<T> = response.json().await?;
    unwrap_envelope(envelope)?
        .ok_or_else(|| Error::Fetch("Missing data in successful response".into()))
}

/// Decodes an envelope whose data may be `null` (list endpoints return
/// an empty collection in that case).
pub(crate) async fn into_json_or_default<T>(response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let envelope: ResponseEnvelope<T> = response.json().await?;
    Ok(unwrap_envelope(envelope)?.unwrap_or_default())
}

/// Checks the envelope of a data-free operation.
pub(crate) async fn into_unit(response: reqwest::Response) -> Result<()> {
    let envelope: ResponseEnvelope<()> = response.json().await?;
    unwrap_envelope(envelope)?;
    Ok(())
}
