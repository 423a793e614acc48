//! Page overflow detection
//!
//! Flags elements whose bounding box leaves the page. Touching an edge
//! exactly is allowed. The result is advisory; drawing the warning badge is
//! up to the host, which can place it with [`badge_anchor`].

use serde::Serialize;
use tracing::debug;

use super::types::{Page, Point, Rect};

/// Inset of the badge anchor from the element's top-right corner and from
/// the page edges
pub const BADGE_INSET: f64 = 6.0;

/// Whether `rect` extends outside `page`
pub fn is_overflowing(page: &Page, rect: &Rect) -> bool {
    rect.left() < 0.0
        || rect.top() < 0.0
        || rect.right() > page.width
        || rect.bottom() > page.height
}

/// The overflowing subset of `elements`, in input order.
///
/// Non-selectable elements are never reported.
pub fn detect_overflow<'a>(page: &Page, elements: &'a [Rect]) -> Vec<&'a Rect> {
    let overflowing: Vec<&Rect> = elements
        .iter()
        .filter(|r| r.selectable && is_overflowing(page, r))
        .collect();
    if !overflowing.is_empty() {
        debug!(
            count = overflowing.len(),
            total = elements.len(),
            "elements overflow the page"
        );
    }
    overflowing
}

/// Anchor for an overflow badge: near the element's top-right corner,
/// clamped so the badge stays on the page.
pub fn badge_anchor(page: &Page, rect: &Rect) -> Point {
    let x = (rect.right() - BADGE_INSET)
        .max(BADGE_INSET)
        .min(page.width - BADGE_INSET);
    let y = (rect.top() + BADGE_INSET)
        .max(BADGE_INSET)
        .min(page.height - BADGE_INSET);
    Point::new(x, y)
}

/// A ready-to-draw overflow warning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverflowBadge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub anchor: Point,
}

/// Badges for every overflowing element, in input order
pub fn overflow_badges(page: &Page, elements: &[Rect]) -> Vec<OverflowBadge> {
    detect_overflow(page, elements)
        .into_iter()
        .map(|r| OverflowBadge {
            id: r.id.clone(),
            anchor: badge_anchor(page, r),
        })
        .collect()
}
