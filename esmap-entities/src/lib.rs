#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # esmap-entities
//!
//! Reusable, agnostic domain entities for EscapeMap.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod advertisement;
pub mod geo;
pub mod id;
pub mod review;
pub mod score;
pub mod theme;
pub mod time;
pub mod user;
pub mod venue;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
