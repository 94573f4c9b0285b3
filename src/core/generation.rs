//! Hand-off between the generative media provider and the editor.
//!
//! Generation itself happens elsewhere. The editor only sees the finished
//! result: a content URL on success, or a [`GenerationError`] to show the user.
//! Nothing is pending inside the core while a request is in flight.

use serde::{Deserialize, Serialize};

use crate::state::{MediaAsset, MediaKind};

/// The provider operations that produce a new asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationKind {
    GenerateImage,
    EditImage,
    AnimateImage,
    GenerateVideo,
}

impl GenerationKind {
    /// Kind of asset the operation produces.
    pub fn output_kind(self) -> MediaKind {
        match self {
            GenerationKind::GenerateImage | GenerationKind::EditImage => MediaKind::Image,
            GenerationKind::AnimateImage | GenerationKind::GenerateVideo => MediaKind::Video,
        }
    }

    /// Status text shown while the request runs.
    pub fn loading_message(self) -> &'static str {
        match self {
            GenerationKind::GenerateImage => "Dreaming up your image...",
            GenerationKind::EditImage => "Applying magic edits...",
            GenerationKind::AnimateImage => "Animating image...",
            GenerationKind::GenerateVideo => "Directing scene...",
        }
    }

    /// Prompt recorded on the resulting asset.
    pub fn asset_prompt(self, prompt: &str) -> String {
        match self {
            GenerationKind::EditImage => format!("Edit: {}", prompt),
            GenerationKind::AnimateImage => format!("Animate: {}", prompt),
            GenerationKind::GenerateImage | GenerationKind::GenerateVideo => prompt.to_string(),
        }
    }
}

/// A request sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub kind: GenerationKind,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(kind: GenerationKind, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            prompt: prompt.into(),
        }
    }

    /// Turn a finished generation into a library asset.
    pub fn into_asset(self, url: impl Into<String>) -> MediaAsset {
        let prompt = self.kind.asset_prompt(&self.prompt);
        MediaAsset::new(self.kind.output_kind(), url).with_prompt(prompt)
    }
}

/// Failures reported by the provider.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Provider request failed: {0}")]
    Provider(String),

    #[error("Provider returned no media")]
    EmptyResult,
}

/// Check a provider result and build the asset it describes.
pub fn complete_generation(
    request: GenerationRequest,
    result: Result<String, GenerationError>,
) -> Result<MediaAsset, GenerationError> {
    let url = result?;
    if url.trim().is_empty() {
        return Err(GenerationError::EmptyResult);
    }
    Ok(request.into_asset(url))
}
