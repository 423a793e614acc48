//! Host boundary: turning rendering-library objects into plain rectangles
//!
//! Canvas libraries describe objects by their unscaled size plus a scale
//! factor. The snapping engine only works on effective geometry, so the
//! host resolves each object once through [`ResolveRect`] before calling in.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SceneError;
use super::types::{Page, Rect};

/// Anything that can report its effective on-page rectangle
pub trait ResolveRect {
    fn resolve_rect(&self) -> Rect;
}

impl ResolveRect for Rect {
    fn resolve_rect(&self) -> Rect {
        self.clone()
    }
}

fn one() -> f64 {
    1.0
}

fn default_selectable() -> bool {
    true
}

/// An object as a canvas library reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    #[serde(default)]
    pub id: Option<String>,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "one")]
    pub scale_x: f64,
    #[serde(default = "one")]
    pub scale_y: f64,
    #[serde(default = "default_selectable")]
    pub selectable: bool,
}

impl SceneObject {
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }
}

impl ResolveRect for SceneObject {
    fn resolve_rect(&self) -> Rect {
        Rect {
            id: self.id.clone(),
            x: self.left,
            y: self.top,
            width: self.scaled_width(),
            height: self.scaled_height(),
            selectable: self.selectable,
        }
    }
}

/// Resolve a batch of host objects
pub fn resolve_all<T: ResolveRect>(objects: &[T]) -> Vec<Rect> {
    objects.iter().map(ResolveRect::resolve_rect).collect()
}

/// A page with the objects placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub page: Page,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Load a scene from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a scene from a JSON string
    pub fn from_json(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(content)?;
        debug!(objects = scene.objects.len(), "loaded scene");
        Ok(scene)
    }

    /// Effective rectangles of every object, in scene order
    pub fn rects(&self) -> Vec<Rect> {
        resolve_all(&self.objects)
    }

    /// Effective rectangle of the object with `id`
    pub fn find(&self, id: &str) -> Result<Rect, SceneError> {
        self.objects
            .iter()
            .find(|o| o.id.as_deref() == Some(id))
            .map(ResolveRect::resolve_rect)
            .ok_or_else(|| {
                let known = self.objects.iter().filter_map(|o| o.id.clone()).collect();
                SceneError::unknown_element(id, known)
            })
    }
}
