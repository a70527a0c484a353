//! Course provider — tiered lookup that never comes back empty.
//!
//! Tiers are an ordered list of independent `try_*` attempts; the first one
//! yielding at least one course wins:
//! 1. Coursera catalog API (no credential needed)
//! 2. Google Custom Search scoped to course-hosting domains (needs both
//!    GOOGLE_API_KEY and GOOGLE_CSE_ID — silently skipped otherwise)
//! 3. Deterministic "search this topic on <platform>" links

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::NormalizedResult;

const COURSERA_API_BASE: &str = "https://api.coursera.org/api/courses.v1";
const CSE_API_BASE: &str = "https://www.googleapis.com/customsearch/v1";
const MAX_COURSES: usize = 5;

/// Platforms behind the deterministic final tier. The topic is URL-encoded
/// into each platform's own search page.
const FALLBACK_PLATFORMS: [(&str, &str); 5] = [
    ("Coursera", "https://www.coursera.org/search?query="),
    ("edX", "https://www.edx.org/search?q="),
    ("Udemy", "https://www.udemy.com/courses/search/?q="),
    ("Pluralsight", "https://www.pluralsight.com/search?q="),
    ("Class Central", "https://www.classcentral.com/search?q="),
];

#[derive(Clone)]
pub struct CourseClient {
    client: Client,
    google_api_key: Option<String>,
    google_cse_id: Option<String>,
    catalog_base_url: String,
    search_base_url: String,
}

impl CourseClient {
    pub fn new(client: Client, google_api_key: Option<String>, google_cse_id: Option<String>) -> Self {
        Self {
            client,
            google_api_key,
            google_cse_id,
            catalog_base_url: COURSERA_API_BASE.to_string(),
            search_base_url: CSE_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_urls(
        client: Client,
        google_api_key: Option<String>,
        google_cse_id: Option<String>,
        catalog_base_url: &str,
        search_base_url: &str,
    ) -> Self {
        Self {
            client,
            google_api_key,
            google_cse_id,
            catalog_base_url: catalog_base_url.to_string(),
            search_base_url: search_base_url.to_string(),
        }
    }

    /// Returns 1 to 5 courses for a topic. Never empty and never fails:
    /// every tier's error is logged and control falls through to the next.
    pub async fn fetch_top_courses(&self, topic: &str) -> Vec<NormalizedResult> {
        match self.try_catalog(topic).await {
            Ok(Some(courses)) => return courses,
            Ok(None) => {}
            Err(e) => warn!("Coursera catalog failed for '{topic}': {e}"),
        }

        match self.try_scoped_search(topic).await {
            Ok(Some(courses)) => return courses,
            Ok(None) => {}
            Err(e) => warn!("Scoped course search failed for '{topic}': {e}"),
        }

        platform_search_links(topic)
    }

    /// Tier 1: public Coursera catalog search. `Ok(None)` when the filtered
    /// result set is empty.
    async fn try_catalog(
        &self,
        topic: &str,
    ) -> Result<Option<Vec<NormalizedResult>>, reqwest::Error> {
        let catalog: CatalogResponse = self
            .client
            .get(&self.catalog_base_url)
            .query(&[
                ("q", "search"),
                ("query", topic),
                ("limit", "10"),
                ("fields", "slug,name"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let courses: Vec<NormalizedResult> = catalog
            .elements
            .into_iter()
            .filter_map(|entry| {
                let slug = entry.slug?;
                Some(NormalizedResult {
                    title: entry.name.unwrap_or_else(|| "Course".to_string()),
                    url: format!("https://www.coursera.org/learn/{slug}"),
                    author: None,
                })
            })
            .take(MAX_COURSES)
            .collect();

        Ok(if courses.is_empty() {
            None
        } else {
            Some(courses)
        })
    }

    /// Tier 2: Google Custom Search constrained to course-hosting domains.
    /// `Ok(None)` when either credential is missing or nothing came back.
    async fn try_scoped_search(
        &self,
        topic: &str,
    ) -> Result<Option<Vec<NormalizedResult>>, reqwest::Error> {
        let (Some(key), Some(cse_id)) = (
            self.google_api_key.as_deref(),
            self.google_cse_id.as_deref(),
        ) else {
            return Ok(None);
        };

        let query = format!(
            "{topic} (site:coursera.org/learn OR site:udemy.com/course OR site:edx.org/course)"
        );
        let results: CseResponse = self
            .client
            .get(&self.search_base_url)
            .query(&[("key", key), ("cx", cse_id), ("q", query.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let courses: Vec<NormalizedResult> = results
            .items
            .into_iter()
            .filter_map(|item| {
                Some(NormalizedResult {
                    title: item.title?,
                    url: item.link?,
                    author: None,
                })
            })
            .take(MAX_COURSES)
            .collect();

        Ok(if courses.is_empty() {
            None
        } else {
            Some(courses)
        })
    }
}

/// Tier 3: deterministic per-platform search links. Pure function of the
/// topic — same input, byte-identical output.
pub(crate) fn platform_search_links(topic: &str) -> Vec<NormalizedResult> {
    let encoded = urlencoding::encode(topic);
    FALLBACK_PLATFORMS
        .iter()
        .map(|(platform, search_url)| NormalizedResult {
            title: format!("{platform}: {topic}"),
            url: format!("{search_url}{encoded}"),
            author: None,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// API response shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    elements: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    slug: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
}

#[derive(Debug, Deserialize)]
struct CseItem {
    title: Option<String>,
    link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_links_are_deterministic() {
        assert_eq!(platform_search_links("Rust"), platform_search_links("Rust"));
    }

    #[test]
    fn test_platform_links_cover_all_five_platforms() {
        let links = platform_search_links("Rust");
        assert_eq!(links.len(), 5);
        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Coursera: Rust",
                "edX: Rust",
                "Udemy: Rust",
                "Pluralsight: Rust",
                "Class Central: Rust"
            ]
        );
    }

    #[test]
    fn test_platform_links_embed_encoded_topic() {
        for link in platform_search_links("Rust") {
            assert!(link.url.contains("Rust"), "{} missing topic", link.url);
            assert!(link.author.is_none());
        }
    }

    #[test]
    fn test_platform_links_encode_spaces() {
        let links = platform_search_links("machine learning");
        assert_eq!(
            links[0].url,
            "https://www.coursera.org/search?query=machine%20learning"
        );
        // Title keeps the readable, unencoded topic.
        assert_eq!(links[0].title, "Coursera: machine learning");
    }

    #[test]
    fn test_catalog_entries_without_slug_are_dropped() {
        let raw = r#"{
            "elements": [
                {"name": "No slug course"},
                {"slug": "rust-programming", "name": "Rust Programming"},
                {"slug": "anonymous-course"}
            ]
        }"#;
        let catalog: CatalogResponse = serde_json::from_str(raw).unwrap();
        let courses: Vec<NormalizedResult> = catalog
            .elements
            .into_iter()
            .filter_map(|entry| {
                let slug = entry.slug?;
                Some(NormalizedResult {
                    title: entry.name.unwrap_or_else(|| "Course".to_string()),
                    url: format!("https://www.coursera.org/learn/{slug}"),
                    author: None,
                })
            })
            .collect();

        assert_eq!(courses.len(), 2);
        assert_eq!(
            courses[0].url,
            "https://www.coursera.org/learn/rust-programming"
        );
        assert_eq!(courses[1].title, "Course");
    }
}
