//! Book provider — Google Books volumes search with ISBN-preferring
//! purchase-link normalization.

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::NormalizedResult;

const BOOKS_API_BASE: &str = "https://www.googleapis.com/books/v1/volumes";
const MAX_BOOKS: usize = 3;
const RETAILER_SEARCH_BASE: &str = "https://www.amazon.in/s?k=";

#[derive(Clone)]
pub struct BookClient {
    client: Client,
    base_url: String,
}

impl BookClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BOOKS_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Returns up to 3 books for a topic, ordered by the provider's relevance
    /// ranking. Empty on any failure.
    pub async fn fetch_top_books(&self, topic: &str) -> Vec<NormalizedResult> {
        match self.search(topic).await {
            Ok(books) => books,
            Err(e) => {
                warn!("Google Books lookup failed for '{topic}': {e}");
                Vec::new()
            }
        }
    }

    async fn search(&self, topic: &str) -> Result<Vec<NormalizedResult>, reqwest::Error> {
        let volumes: VolumesResponse = self
            .client
            .get(&self.base_url)
            .query(&[("q", topic), ("orderBy", "relevance"), ("maxResults", "10")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(volumes
            .items
            .into_iter()
            .filter_map(|v| normalize_volume(v.info))
            .take(MAX_BOOKS)
            .collect())
    }
}

/// Reduces a raw volume to a normalized result, or drops it when it carries
/// neither a title nor any author.
///
/// URL preference: ISBN-13 retailer search → ISBN-10 retailer search →
/// provider info link → canonical volume link → retailer search built from
/// title and author.
pub(crate) fn normalize_volume(info: VolumeInfo) -> Option<NormalizedResult> {
    if info.title.is_none() && info.authors.is_empty() {
        return None;
    }

    let isbn = pick_isbn(&info.industry_identifiers).map(str::to_string);
    let title = info.title.unwrap_or_else(|| "Book".to_string());
    let author = info
        .authors
        .into_iter()
        .next()
        .unwrap_or_else(|| "Unknown".to_string());

    let url = match isbn {
        Some(isbn) => format!("{RETAILER_SEARCH_BASE}{}", urlencoding::encode(&isbn)),
        None => info
            .info_link
            .or(info.canonical_volume_link)
            .unwrap_or_else(|| {
                format!(
                    "{RETAILER_SEARCH_BASE}{}",
                    urlencoding::encode(&format!("{title} {author}"))
                )
            }),
    };

    Some(NormalizedResult {
        title,
        url,
        author: Some(author),
    })
}

fn pick_isbn(identifiers: &[IndustryIdentifier]) -> Option<&str> {
    identifiers
        .iter()
        .find(|id| id.id_type == "ISBN_13")
        .or_else(|| identifiers.iter().find(|id| id.id_type == "ISBN_10"))
        .map(|id| id.identifier.as_str())
}

// ────────────────────────────────────────────────────────────────────────────
// API response shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VolumeInfo {
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) authors: Vec<String>,
    #[serde(rename = "industryIdentifiers", default)]
    pub(crate) industry_identifiers: Vec<IndustryIdentifier>,
    #[serde(rename = "infoLink")]
    pub(crate) info_link: Option<String>,
    #[serde(rename = "canonicalVolumeLink")]
    pub(crate) canonical_volume_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub(crate) id_type: String,
    pub(crate) identifier: String,
}
