//! # esmap-gateways
//!
//! Implementations of the gateway and storage traits of `esmap-core`:
//! the HTTP geocoding gateway and the JSON-file-backed local state
//! storage.

mod geocode;
mod storage;

pub use self::{geocode::*, storage::*};
