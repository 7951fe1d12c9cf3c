//! JSON export of computed scenes.

use std::{fs, path::Path};

use log::{debug, info};
use serde::Serialize;

use crate::{
    error::PartscapeError,
    scene::{DiagramScene, LayoutScene},
};

/// The scenes handed to a renderer, serialized side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<LayoutScene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<DiagramScene>,
}

impl SceneBundle {
    pub fn new(scene: Option<LayoutScene>, diagram: Option<DiagramScene>) -> Self {
        Self { scene, diagram }
    }

    /// Render the bundle as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PartscapeError::Export`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PartscapeError> {
        serde_json::to_string_pretty(self).map_err(|err| PartscapeError::Export(Box::new(err)))
    }

    /// Write the bundle as JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PartscapeError::Export`] if serialization fails, or
    /// [`PartscapeError::Io`] if the file cannot be written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PartscapeError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        debug!(bytes = json.len(); "Serialized scene bundle");

        fs::write(path, json)?;
        info!(path:? = path; "Scene bundle written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use partscape_core::geometry::Size;

    use super::*;

    #[test]
    fn test_empty_bundle() {
        assert_eq!(SceneBundle::default().to_json().unwrap(), "{}");
    }

    #[test]
    fn test_diagram_only() {
        let diagram = DiagramScene {
            nodes: Vec::new(),
            edges: Vec::new(),
            size: Size::new(0.0, 0.0),
        };
        let json = SceneBundle::new(None, Some(diagram)).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("scene").is_none());
        assert_eq!(value["diagram"]["nodes"], serde_json::json!([]));
        assert_eq!(value["diagram"]["size"]["width"], serde_json::json!(0.0));
    }
}
