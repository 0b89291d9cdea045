/// Failure while fetching or decoding the creators document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed: {status} {status_text} ({url})")]
    Status {
        status: u16,
        status_text: String,
        url: String,
    },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid JSON: {0}")]
    Parse(String),
    #[error("expected a JSON array of creators, found {found}")]
    Shape { found: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("required element '#{target}' is missing")]
    RenderPrecondition { target: String },
    #[error("invalid gallery config: {0}")]
    Config(String),
}

impl GalleryError {
    /// Only the grid mount point and the data fetch are fatal.
    pub fn is_fatal(&self) -> bool {
        match self {
            GalleryError::Load(_) | GalleryError::RenderPrecondition { .. } => true,
            GalleryError::Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_status_and_url() {
        let error = LoadError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            url: "./data/creators.json?ts=1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("./data/creators.json?ts=1"));
    }

    #[test]
    fn load_error_converts_into_gallery_error() {
        let error: GalleryError = LoadError::Shape { found: "object" }.into();
        assert!(error.is_fatal());
        assert!(error.to_string().contains("object"));
        assert!(!GalleryError::Config("bad".to_string()).is_fatal());
    }

    #[test]
    fn missing_mount_point_is_fatal() {
        let error = GalleryError::RenderPrecondition {
            target: "app".to_string(),
        };
        assert!(error.is_fatal());
        assert_eq!(error.to_string(), "required element '#app' is missing");
    }
}
