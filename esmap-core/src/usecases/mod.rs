mod create_review;
mod error;
mod filter_venues;
mod report_venue;
mod search_venues;

pub use self::{
    create_review::*, error::Error, filter_venues::*, report_venue::*, search_venues::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}
