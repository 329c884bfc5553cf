use serde::{Deserialize, Serialize};

/// Image reference shown when a recommendation has no artwork
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// One anime recommendation, as displayed by the card widget
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Anime {
    /// Title of the series or film
    pub title: String,
    /// Genre label (free text, e.g. "Shounen, Action")
    pub genre: String,
    /// Short plot synopsis
    pub synopsis: String,
    /// Artwork URL, if the service provided one
    pub image_url: Option<String>,
}

impl Anime {
    /// Artwork reference to display, falling back to the placeholder
    pub fn image_ref(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Execution mode understood by the recommendation endpoint
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    /// Agentic reasoning (the only mode the client submits)
    #[default]
    Agent,
    /// Plain RAG chain
    Chain,
}

/// Request body for the `/recommend` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest {
    pub question: String,
    pub mode: Mode,
}

/// Response body from the `/recommend` endpoint
///
/// Both fields default when absent; anything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}
