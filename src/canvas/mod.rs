//! Snapping and alignment engine for the CV canvas editor
//!
//! The rendering surface calls [`compute_guides`] on every drag or resize
//! tick, finalizes geometry on drop through [`SnapSettings`] (and optionally
//! [`magnetic_snap`]), then refreshes warnings with [`detect_overflow`].
//! Everything here reads geometry and returns values; nothing touches the
//! host's scene graph.

pub mod error;
pub mod grid;
pub mod guides;
pub mod magnetic;
pub mod overflow;
pub mod scene;
pub mod types;

pub use error::SceneError;
pub use grid::{snap_to_step, SnapSettings};
pub use guides::{compute_guides, dedup_guides, has_guide};
pub use magnetic::magnetic_snap;
pub use overflow::{badge_anchor, detect_overflow, is_overflowing, overflow_badges, OverflowBadge};
pub use scene::{resolve_all, ResolveRect, Scene, SceneObject};
pub use types::*;
