//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

pub const MESSAGE_FOUND: &str = "Video found";
pub const MESSAGE_NOT_FOUND: &str = "Video not found";
pub const MESSAGE_SORTED: &str = "Videos sorted successfully";
pub const MESSAGE_TITLE_REQUIRED: &str = "Please provide a title to search";

// =============================================================================
// Requests
// =============================================================================

/// Query string of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub title: Option<String>,
}

impl SearchParams {
    /// Builds the parameters from decoded query pairs.
    ///
    /// A repeated `title` is not an error: the first occurrence wins and the rest are
    /// ignored, as are unknown keys.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let title = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "title").then_some(value));
        Self { title }
    }
}

// =============================================================================
// Responses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
    pub video: String,
}

impl SearchResponse {
    #[must_use]
    pub fn found(video: impl Into<String>) -> Self {
        Self {
            message: MESSAGE_FOUND.to_string(),
            video: video.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResponse {
    pub message: String,
    pub videos: Vec<String>,
}

impl SortResponse {
    #[must_use]
    pub fn sorted(videos: Vec<String>) -> Self {
        Self {
            message: MESSAGE_SORTED.to_string(),
            videos,
        }
    }
}

/// Body of every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable reason, e.g. `"title required"`.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn search_response_serializes_video_field() {
        let json = serde_json::to_value(SearchResponse::found("The Art of Coding")).unwrap();

        assert_eq!(json["message"], "Video found");
        assert_eq!(json["video"], "The Art of Coding");
    }

    #[rstest]
    fn sort_response_serializes_videos_field() {
        let response = SortResponse::sorted(vec!["a".to_string(), "B".to_string()]);
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["message"], "Videos sorted successfully");
        assert_eq!(json["videos"], serde_json::json!(["a", "B"]));
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case(&[], None)]
    #[case(&[("page", "2")], None)]
    #[case(&[("title", "")], Some(""))]
    #[case(&[("title", "a"), ("title", "b")], Some("a"))]
    #[case(&[("page", "2"), ("title", "b")], Some("b"))]
    fn search_params_take_first_title(
        #[case] raw: &[(&str, &str)],
        #[case] expected: Option<&str>,
    ) {
        let params = SearchParams::from_pairs(pairs(raw));
        assert_eq!(params.title.as_deref(), expected);
    }
}
