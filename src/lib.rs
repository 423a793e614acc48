//! CV Canvas - layout geometry for a drag-and-drop CV editor
//!
//! This library provides the snapping and alignment engine behind the CV
//! page canvas, plus the small ordering helpers the CV forms rely on.
//!
//! # Example
//!
//! ```rust
//! use cv_canvas::canvas::{compute_guides, Axis, GuideKind, Page, Rect};
//!
//! let page = Page::A4;
//! let header = Rect::new(100.0, 100.0, 100.0, 40.0).with_id("header");
//! let photo = Rect::new(110.0, 300.0, 80.0, 40.0).with_id("photo");
//!
//! let guides = compute_guides(&page, &[header], &photo, 5.0);
//! assert!(guides
//!     .iter()
//!     .any(|g| g.axis == Axis::Vertical && g.kind == GuideKind::Center));
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod favorites;
pub mod period;

pub use canvas::{Guide, Page, Point, Rect, SceneError, Size, SnapSettings};
pub use config::CanvasConfig;
pub use error::ConfigError;
pub use favorites::{dedupe_favorites, has_favorite, sort_by_favorite, toggle_favorite_in};
pub use period::{compare_by_period, period_warning, to_key, PeriodWarning, TimeSpan};

use serde::Serialize;

/// Everything the host needs after one drag tick of `moving`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DragFeedback {
    /// Guides to draw
    pub guides: Vec<Guide>,
    /// Position after magnetic snapping
    pub magnetic: Point,
}

/// Position and size to commit when `moving` is dropped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropResult {
    pub position: Point,
    pub size: Size,
    /// Ids (or `None` for anonymous elements) that now overflow the page
    pub overflowing: Vec<Option<String>>,
}

/// Compute guides and the magnetic position for a drag tick using `config`
pub fn drag_feedback(config: &CanvasConfig, siblings: &[Rect], moving: &Rect) -> DragFeedback {
    DragFeedback {
        guides: canvas::compute_guides(&config.page, siblings, moving, config.guide_threshold),
        magnetic: canvas::magnetic_snap(moving, siblings, config.magnetic_threshold),
    }
}

/// Finalize geometry on drop: snap to the grid, then re-check overflow.
///
/// `siblings` is the scene without `moving`; the snapped element is checked
/// together with them.
pub fn finish_drop(config: &CanvasConfig, siblings: &[Rect], moving: &Rect) -> DropResult {
    let position = config.snap.snap_position(moving.origin(), None);
    let size = config.snap.snap_size(moving.size(), None);

    let mut placed = moving.clone();
    placed.x = position.x;
    placed.y = position.y;
    placed.width = size.width;
    placed.height = size.height;

    let mut scene: Vec<Rect> = siblings
        .iter()
        .filter(|s| !s.is_same_element(moving))
        .cloned()
        .collect();
    scene.push(placed);

    let overflowing = canvas::detect_overflow(&config.page, &scene)
        .into_iter()
        .map(|r| r.id.clone())
        .collect();

    DropResult {
        position,
        size,
        overflowing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_feedback_uses_config_thresholds() {
        let config = CanvasConfig::new()
            .with_page(600.0, 800.0)
            .with_guide_threshold(2.0)
            .with_magnetic_threshold(4.0);
        let sibling = Rect::new(100.0, 100.0, 50.0, 50.0).with_id("a");
        let moving = Rect::new(103.0, 400.0, 50.0, 50.0).with_id("m");

        let feedback = drag_feedback(&config, &[sibling], &moving);
        // 3 units off: outside the guide threshold, inside the magnetic one
        assert!(feedback.guides.iter().all(|g| g.kind.is_page()));
        assert_eq!(feedback.magnetic, Point::new(100.0, 400.0));
    }

    #[test]
    fn test_finish_drop_snaps_and_flags_overflow() {
        let config = CanvasConfig::new().with_page(600.0, 800.0);
        let sibling = Rect::new(700.0, 0.0, 10.0, 10.0).with_id("offpage");
        let moving = Rect::new(583.0, 12.0, 24.0, 3.0).with_id("m");

        let result = finish_drop(&config, &[sibling, moving.clone()], &moving);
        assert_eq!(result.position, Point::new(580.0, 10.0));
        assert_eq!(result.size, Size::new(20.0, 10.0));
        assert_eq!(
            result.overflowing,
            vec![Some("offpage".to_string())]
        );
    }

    #[test]
    fn test_finish_drop_with_snap_disabled() {
        let config = CanvasConfig::new()
            .with_page(600.0, 800.0)
            .with_snap(SnapSettings::new().with_enabled(false));
        let moving = Rect::new(595.5, 12.0, 24.0, 30.0).with_id("m");

        let result = finish_drop(&config, &[], &moving);
        assert_eq!(result.position, Point::new(595.5, 12.0));
        assert_eq!(result.overflowing, vec![Some("m".to_string())]);
    }
}
