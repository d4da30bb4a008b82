use crate::id::Id;

use url::Url;

/// A sponsored banner fetched from the backend, read-only on the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Advertisement {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub image_url: Option<Url>,
    pub link_url: Option<Url>,
    pub link_text: String,
    pub display_order: u32,
}
