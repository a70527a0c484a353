//! Learning-resource aggregation — fans one skill/topic string out to the
//! video, course and book providers concurrently and joins their results
//! into a single bundle.
//!
//! Each provider owns its own ranking and fallback policy and never lets a
//! failure escape, so a provider outage only shrinks its own section of the
//! bundle. The policies deliberately differ per provider:
//! - videos: no API key or any failure → empty section
//! - courses: tiered lookup ending in deterministic search links → never empty
//! - books: any failure → empty section

pub mod books;
pub mod courses;
pub mod handlers;
pub mod youtube;

use serde::Serialize;

use crate::config::Config;
use crate::errors::AppError;

/// A single learning resource, independent of its originating provider's
/// raw schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// The complete per-topic output aggregating all providers' results.
/// Built fresh on every call — no caching, no persistence.
#[derive(Debug, Serialize)]
pub struct ResourceBundle {
    pub videos: Vec<NormalizedResult>,
    pub courses: Vec<NormalizedResult>,
    pub books: Vec<NormalizedResult>,
}

/// The aggregator over all resource providers. Stateless per call; the
/// provider clients share one HTTP client and read-only credentials.
#[derive(Clone)]
pub struct ResourceFinder {
    youtube: youtube::YoutubeClient,
    courses: courses::CourseClient,
    books: books::BookClient,
}

impl ResourceFinder {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            youtube: youtube::YoutubeClient::new(client.clone(), config.youtube_api_key.clone()),
            courses: courses::CourseClient::new(
                client.clone(),
                config.google_api_key.clone(),
                config.google_cse_id.clone(),
            ),
            books: books::BookClient::new(client),
        }
    }

    /// Returns the resource bundle for a topic.
    ///
    /// The only error this can produce is an invalid (empty/whitespace)
    /// topic, rejected before any network call. All three providers are
    /// queried concurrently and the bundle is assembled once every provider
    /// pipeline has resolved — no retries here, no partial delivery.
    pub async fn get_resource_bundle(&self, topic: &str) -> Result<ResourceBundle, AppError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::Validation("skill cannot be empty".to_string()));
        }

        let (videos, courses, books) = tokio::join!(
            self.youtube.fetch_top_videos(topic),
            self.courses.fetch_top_courses(topic),
            self.books.fetch_top_books(topic),
        );

        Ok(ResourceBundle {
            videos,
            courses,
            books,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Connection refused locally — simulates a provider outage without
    // touching the external network.
    const DEAD_URL: &str = "http://127.0.0.1:9";

    fn finder_with_dead_providers(youtube_key: Option<String>) -> ResourceFinder {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        ResourceFinder {
            youtube: youtube::YoutubeClient::with_base_url(client.clone(), youtube_key, DEAD_URL),
            courses: courses::CourseClient::with_base_urls(
                client.clone(),
                None,
                None,
                DEAD_URL,
                DEAD_URL,
            ),
            books: books::BookClient::with_base_url(client, DEAD_URL),
        }
    }

    #[tokio::test]
    async fn test_empty_topic_rejected_before_any_call() {
        let finder = finder_with_dead_providers(None);
        assert!(finder.get_resource_bundle("").await.is_err());
        assert!(finder.get_resource_bundle("   ").await.is_err());
    }

    #[tokio::test]
    async fn test_provider_outage_does_not_cross_providers() {
        // Video provider has a key but an unreachable host; book provider is
        // unreachable too. The course provider still serves its deterministic
        // final tier.
        let finder = finder_with_dead_providers(Some("test-key".to_string()));
        let bundle = finder.get_resource_bundle("Rust").await.unwrap();
        assert!(bundle.videos.is_empty());
        assert!(bundle.books.is_empty());
        assert_eq!(bundle.courses.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_video_key_yields_empty_videos() {
        let finder = finder_with_dead_providers(None);
        let bundle = finder.get_resource_bundle("Rust").await.unwrap();
        assert!(bundle.videos.is_empty());
    }

    #[tokio::test]
    async fn test_bundle_bounds_hold_under_total_outage() {
        let finder = finder_with_dead_providers(None);
        let bundle = finder
            .get_resource_bundle("machine learning")
            .await
            .unwrap();
        assert!((1..=5).contains(&bundle.courses.len()));
        assert!(bundle.videos.len() <= 3);
        assert!(bundle.books.len() <= 3);
    }

    #[tokio::test]
    async fn test_topic_is_trimmed_before_fanout() {
        let finder = finder_with_dead_providers(None);
        let bundle = finder.get_resource_bundle("  Rust  ").await.unwrap();
        // The deterministic course tier sees the trimmed topic.
        assert_eq!(bundle.courses[0].title, "Coursera: Rust");
    }
}
