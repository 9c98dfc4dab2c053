//! Error types for loading scenes and rendering them

use thiserror::Error;

/// Errors that can occur when loading or parsing a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Failed to parse scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while loading the scene
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error while serializing connector output
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_display() {
        let err: SceneError = toml::from_str::<toml::Value>("= nope")
            .expect_err("Should fail")
            .into();
        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_render_error_wraps_scene_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = RenderError::from(SceneError::from(io));
        assert!(matches!(err, RenderError::Scene(SceneError::Io(_))));
        assert!(err.to_string().contains("missing"));
    }
}
