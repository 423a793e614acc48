//! Grid snapping primitives
//!
//! Snapping rounds coordinates to the nearest multiple of a grid step. The
//! step and the on/off switch live in a [`SnapSettings`] value owned by the
//! canvas host, so two canvases (or two tests) never share state.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::types::{Point, Size};

/// Smallest accepted grid step
pub const MIN_STEP: f64 = 5.0;

/// Largest accepted grid step
pub const MAX_STEP: f64 = 100.0;

/// Grid step used when none is configured
pub const DEFAULT_STEP: f64 = 10.0;

/// Round `value` to the nearest multiple of `step`, halves rounding up.
///
/// Unlike [`f64::round`], `-2.5` rounds to `-2.0`, not `-3.0`.
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    (value / step + 0.5).floor() * step
}

/// Grid snapping configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    enabled: bool,
    step: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            step: DEFAULT_STEP,
        }
    }
}

impl SnapSettings {
    /// Create settings with defaults (enabled, step 10)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid step, builder style
    pub fn with_step(mut self, step: f64) -> Self {
        self.set_step(step);
        self
    }

    /// Enable or disable snapping, builder style
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Set the grid step, clamped to `MIN_STEP..=MAX_STEP`
    pub fn set_step(&mut self, step: f64) {
        let clamped = step.clamp(MIN_STEP, MAX_STEP);
        if clamped != step {
            trace!(requested = step, applied = clamped, "grid step clamped");
        }
        self.step = clamped;
    }

    /// Clamp an out-of-range step that came in through deserialization
    pub(crate) fn normalized(mut self) -> Self {
        let step = self.step;
        self.set_step(step);
        self
    }

    fn effective_step(&self, step: Option<f64>) -> f64 {
        step.unwrap_or(self.step)
    }

    /// Snap a single coordinate. Returns `value` unchanged when snapping is off.
    pub fn snap(&self, value: f64, step: Option<f64>) -> f64 {
        if !self.enabled {
            return value;
        }
        snap_to_step(value, self.effective_step(step))
    }

    /// Snap both axes of a position independently
    pub fn snap_position(&self, point: Point, step: Option<f64>) -> Point {
        Point::new(self.snap(point.x, step), self.snap(point.y, step))
    }

    /// Snap both dimensions, never going below one grid step
    pub fn snap_size(&self, size: Size, step: Option<f64>) -> Size {
        let step_value = self.effective_step(step);
        Size::new(
            self.snap(size.width, step).max(step_value),
            self.snap(size.height, step).max(step_value),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_nearest_multiple() {
        let s = SnapSettings::new();
        assert_eq!(s.snap(14.0, None), 10.0);
        assert_eq!(s.snap(15.0, None), 20.0);
        assert_eq!(s.snap(23.0, Some(5.0)), 25.0);
    }

    #[test]
    fn test_snap_rounds_half_up_for_negatives() {
        assert_eq!(snap_to_step(-25.0, 10.0), -20.0);
        assert_eq!(snap_to_step(-26.0, 10.0), -30.0);
    }

    #[test]
    fn test_snap_disabled_passes_through() {
        let s = SnapSettings::new().with_enabled(false);
        assert_eq!(s.snap(13.7, None), 13.7);
        assert_eq!(
            s.snap_position(Point::new(1.5, 2.5), None),
            Point::new(1.5, 2.5)
        );
    }

    #[test]
    fn test_set_step_is_clamped() {
        let mut s = SnapSettings::new();
        s.set_step(1.0);
        assert_eq!(s.step(), MIN_STEP);
        s.set_step(500.0);
        assert_eq!(s.step(), MAX_STEP);
        s.set_step(20.0);
        assert_eq!(s.step(), 20.0);
    }

    #[test]
    fn test_toggle_enabled() {
        let mut s = SnapSettings::new();
        assert!(s.is_enabled());
        s.set_enabled(false);
        assert!(!s.is_enabled());
    }

    #[test]
    fn test_snap_position_per_axis() {
        let s = SnapSettings::new().with_step(20.0);
        assert_eq!(
            s.snap_position(Point::new(29.0, 31.0), None),
            Point::new(20.0, 40.0)
        );
    }

    #[test]
    fn test_snap_size_floor() {
        let s = SnapSettings::new();
        assert_eq!(s.snap_size(Size::new(2.0, 0.0), None), Size::new(10.0, 10.0));
        assert_eq!(s.snap_size(Size::new(-40.0, 47.0), None), Size::new(10.0, 50.0));
    }

    #[test]
    fn test_snap_size_floor_applies_when_disabled() {
        let s = SnapSettings::new().with_enabled(false);
        assert_eq!(s.snap_size(Size::new(3.0, 47.0), None), Size::new(10.0, 47.0));
    }

    #[test]
    fn test_deserialized_step_is_normalized() {
        let s: SnapSettings = toml::from_str("step = 2.0").unwrap();
        assert_eq!(s.normalized().step(), MIN_STEP);
        assert!(s.is_enabled());
    }
}
