use crate::feed::{FeedItem, LoadError, LoadResult};
use crate::http::HttpResponse;
use serde::{Deserialize, Deserializer};
use url::Url;
use uuid::Uuid;

const OK_200: u16 = 200;

/// Wire shape of the feed body: `{"items": [...]}`.
#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Wire shape of one item. `description` and `location` may be absent or null.
#[derive(Deserialize)]
struct RemoteFeedItem {
    #[serde(deserialize_with = "hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

/// Accepts only the 36-character hyphenated form (`8-4-4-4-12`), in either
/// case. Simple, braced and URN forms are rejected.
fn hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let bytes = raw.as_bytes();
    let hyphenated = bytes.len() == 36 && [8, 13, 18, 23].iter().all(|&i| bytes[i] == b'-');
    if !hyphenated {
        return Err(serde::de::Error::custom(format!(
            "expected hyphenated UUID, got {:?}",
            raw
        )));
    }
    Uuid::parse_str(&raw).map_err(serde::de::Error::custom)
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Decodes feed responses into [`FeedItem`]s.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Maps a response body to the ordered list of feed items.
    ///
    /// Anything but status 200 fails without looking at the body. Decoding is
    /// all-or-nothing: one malformed item (bad UUID, relative or malformed
    /// image URL, missing field, wrong type) fails the whole response.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidData`] for a non-200 status or a body that
    /// does not match the wire format.
    pub fn map(data: &[u8], response: &HttpResponse) -> LoadResult {
        if response.status != OK_200 {
            tracing::debug!(
                url = %response.url,
                status = response.status,
                "Rejecting feed response with unexpected status"
            );
            return Err(LoadError::InvalidData);
        }

        let root: Root = serde_json::from_slice(data).map_err(|e| {
            tracing::debug!(url = %response.url, error = %e, "Feed body failed to decode");
            LoadError::InvalidData
        })?;

        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
