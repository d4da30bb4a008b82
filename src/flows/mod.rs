// Application flows: each one combines the stores, the gateways and
// the persistence boundary for a single user-triggered operation.

mod advertisements;
mod favorites;
mod fetch_venues;
mod moderate;
mod prefs;
mod reviews;
mod submit_report;

pub use self::{
    advertisements::*, favorites::*, fetch_venues::*, moderate::*, prefs::*, reviews::*,
    submit_report::*,
};

pub type Result<T> = anyhow::Result<T>;
