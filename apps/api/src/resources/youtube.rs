//! Video provider — YouTube Data API search, ranked by a view-weighted
//! like ratio.
//!
//! Two-stage lookup: a search call collects up to 10 candidate video ids,
//! then one batched `videos` call fetches their engagement statistics.
//! Without an API key the provider returns nothing at all — a generic
//! search-results-page link is worse than an empty video section, unlike
//! the course provider where a search page is still useful.

use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::NormalizedResult;

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
const TOP_N: usize = 3;
/// Cap on the like-ratio bonus so a tiny video with a perfect ratio cannot
/// outrank a well-watched one.
const LIKE_RATIO_CAP: f64 = 0.2;

#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: YOUTUBE_API_BASE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(client: Client, api_key: Option<String>, base_url: &str) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.to_string(),
        }
    }

    /// Returns the top videos for a topic, at most 3. Empty when no API key
    /// is configured or when anything goes wrong upstream.
    pub async fn fetch_top_videos(&self, topic: &str) -> Vec<NormalizedResult> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Vec::new();
        };

        match self.search_and_rank(topic, api_key).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!("YouTube lookup failed for '{topic}': {e}");
                Vec::new()
            }
        }
    }

    async fn search_and_rank(
        &self,
        topic: &str,
        api_key: &str,
    ) -> Result<Vec<NormalizedResult>, reqwest::Error> {
        // Stage 1: candidate video ids.
        let query = format!("{topic} tutorial");
        let search: SearchResponse = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "10"),
                ("q", query.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let ids: Vec<String> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // Stage 2: batched statistics for all candidates at once.
        let id_list = ids.join(",");
        let stats: VideosResponse = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,statistics"),
                ("id", id_list.as_str()),
                ("key", api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let candidates = stats
            .items
            .into_iter()
            .filter_map(VideoCandidate::from_item)
            .collect();
        Ok(rank_videos(candidates))
    }
}

/// A video with just enough signal to rank it.
#[derive(Debug, Clone)]
pub(crate) struct VideoCandidate {
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) views: u64,
    pub(crate) likes: u64,
}

impl VideoCandidate {
    fn from_item(item: VideoItem) -> Option<Self> {
        let id = item.id?;
        Some(Self {
            title: item
                .snippet
                .title
                .unwrap_or_else(|| "Untitled".to_string()),
            url: format!("https://www.youtube.com/watch?v={id}"),
            views: parse_count(item.statistics.view_count.as_deref()),
            likes: parse_count(item.statistics.like_count.as_deref()),
        })
    }
}

// The API reports counts as decimal strings.
fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// `views * (1 + min(likes/views, 0.2))`, falling back to the raw view count
/// when either views or likes is zero (avoids the zero division and matches
/// the intended "views-only" scoring for unengaged videos).
pub(crate) fn rank_score(views: u64, likes: u64) -> f64 {
    let views_f = views as f64;
    if views > 0 && likes > 0 {
        views_f * (1.0 + (likes as f64 / views_f).min(LIKE_RATIO_CAP))
    } else {
        views_f
    }
}

/// Scores, sorts (stable — ties keep the provider's response order) and
/// truncates candidates to the top 3 normalized results.
pub(crate) fn rank_videos(candidates: Vec<VideoCandidate>) -> Vec<NormalizedResult> {
    let mut scored: Vec<(f64, VideoCandidate)> = candidates
        .into_iter()
        .map(|c| (rank_score(c.views, c.likes), c))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(TOP_N)
        .map(|(_, c)| NormalizedResult {
            title: c.title,
            url: c.url,
            author: None,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// API response shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: SearchItemId,
}

#[derive(Debug, Default, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: Option<String>,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, views: u64, likes: u64) -> VideoCandidate {
        VideoCandidate {
            title: title.to_string(),
            url: format!("https://www.youtube.com/watch?v={title}"),
            views,
            likes,
        }
    }

    // Scores come out of f64 multiplication, so compare with a tolerance
    // rather than exact equality.
    fn assert_score(views: u64, likes: u64, expected: f64) {
        let score = rank_score(views, likes);
        assert!(
            (score - expected).abs() < 1e-9,
            "rank_score({views}, {likes}) = {score}, expected {expected}"
        );
    }

    #[test]
    fn test_score_caps_like_ratio_at_20_percent() {
        // 25/50 = 0.5 ratio, capped at 0.2
        assert_score(50, 25, 60.0);
    }

    #[test]
    fn test_score_uses_raw_ratio_below_cap() {
        // 10/100 = 0.1
        assert_score(100, 10, 110.0);
    }

    #[test]
    fn test_score_zero_views_is_zero() {
        assert_score(0, 500, 0.0);
    }

    #[test]
    fn test_score_zero_likes_is_views_alone() {
        assert_score(1000, 0, 1000.0);
    }

    #[test]
    fn test_ranking_reference_vector() {
        // views [100, 50, 10], likes [10, 25, 1] → scores [110, 60, 11]
        let ranked = rank_videos(vec![
            candidate("ten-views", 10, 1),
            candidate("fifty-views", 50, 25),
            candidate("hundred-views", 100, 10),
        ]);
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["hundred-views", "fifty-views", "ten-views"]);
    }

    #[test]
    fn test_ranking_truncates_to_three() {
        let ranked = rank_videos(vec![
            candidate("a", 5, 0),
            candidate("b", 4, 0),
            candidate("c", 3, 0),
            candidate("d", 2, 0),
            candidate("e", 1, 0),
        ]);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].title, "a");
    }

    #[test]
    fn test_ranking_ties_keep_response_order() {
        let ranked = rank_videos(vec![
            candidate("first", 100, 0),
            candidate("second", 100, 0),
            candidate("third", 100, 0),
        ]);
        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_candidate_from_api_item() {
        let raw = r#"{
            "items": [
                {
                    "id": "abc123",
                    "snippet": {"title": "Rust in 100 Seconds"},
                    "statistics": {"viewCount": "1500000", "likeCount": "98000"}
                },
                {
                    "id": "def456",
                    "snippet": {"title": "No stats video"},
                    "statistics": {}
                }
            ]
        }"#;
        let response: VideosResponse = serde_json::from_str(raw).unwrap();
        let candidates: Vec<VideoCandidate> = response
            .items
            .into_iter()
            .filter_map(VideoCandidate::from_item)
            .collect();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].title, "Rust in 100 Seconds");
        assert_eq!(candidates[0].url, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(candidates[0].views, 1_500_000);
        assert_eq!(candidates[0].likes, 98_000);
        assert_eq!(candidates[1].views, 0);
    }

    #[test]
    fn test_search_response_tolerates_missing_video_id() {
        let raw = r#"{"items": [{"id": {}}, {"id": {"videoId": "xyz"}}]}"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        let ids: Vec<String> = response
            .items
            .into_iter()
            .filter_map(|i| i.id.video_id)
            .collect();
        assert_eq!(ids, ["xyz"]);
    }
}
