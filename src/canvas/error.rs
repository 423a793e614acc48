//! Error types for loading canvas scenes

use thiserror::Error;

/// Errors that can occur while loading a scene or looking up its elements
#[derive(Debug, Error)]
pub enum SceneError {
    /// Scene file could not be read
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    /// Scene JSON is malformed
    #[error("failed to parse scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested moving element is not in the scene
    #[error("element '{id}' not found in scene")]
    UnknownElement { id: String, known: Vec<String> },
}

impl SceneError {
    /// Create an unknown element error listing the ids that do exist
    pub fn unknown_element(id: impl Into<String>, known: Vec<String>) -> Self {
        Self::UnknownElement {
            id: id.into(),
            known,
        }
    }

    /// Ids present in the scene, if this is a lookup failure
    pub fn known_ids(&self) -> Option<&[String]> {
        match self {
            Self::UnknownElement { known, .. } => Some(known),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_element_display() {
        let err = SceneError::unknown_element("photo", vec!["header".to_string()]);
        assert!(err.to_string().contains("photo"));
        assert_eq!(err.known_ids(), Some(&["header".to_string()][..]));
    }
}
