//! Server configuration

/// External system endpoints used to build image and viewer references
///
/// The hierarchy core never calls these services; it only formats URLs that
/// clients follow.
#[derive(Debug, Clone)]
pub struct ExternalSystems {
    /// IIIF image service base URL
    pub iiif_url: String,

    /// Digital library viewer base URL
    pub viewer_url: String,
}

impl Default for ExternalSystems {
    fn default() -> Self {
        Self {
            iiif_url: "https://iiif.library.example.edu/iiif".to_string(),
            viewer_url: "https://viewer.library.example.edu".to_string(),
        }
    }
}

impl ExternalSystems {
    /// Load from environment variables
    ///
    /// `DTRACK_IIIF_URL` and `DTRACK_VIEWER_URL`; unset or empty values keep
    /// the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let iiif_url = std::env::var("DTRACK_IIIF_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.iiif_url);

        let viewer_url = std::env::var("DTRACK_VIEWER_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.viewer_url);

        tracing::info!(iiif = %iiif_url, viewer = %viewer_url, "external systems configured");

        Self {
            iiif_url,
            viewer_url,
        }
    }
}
