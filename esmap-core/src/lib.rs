//! # esmap-core
//!
//! Business logic of the EscapeMap directory: the marker clusterer, the
//! moderation store with its pending/approved lifecycle, the review
//! ledger and the usecases gluing them together. Free of I/O; network
//! and persistence are reached through the gateway and storage traits.

pub mod cluster;
pub mod gateways;
pub mod reviews;
pub mod storage;
pub mod store;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use esmap_entities::{
        advertisement::*, geo::*, id::*, review::*, score::*, theme::*, time::*, user::*, venue::*,
    };
}
