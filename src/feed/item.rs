use url::Url;
use uuid::Uuid;

/// A single entry of the image feed.
///
/// Equality compares every field. Nothing here enforces unique ids across a
/// feed; duplicates pass through as delivered by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
