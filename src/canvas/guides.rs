//! Alignment guide computation
//!
//! On every drag or resize tick the host passes the moving element, the
//! other placed elements and the page. Every edge or center of the moving
//! element that lies within `threshold` of a sibling's matching edge or
//! center, or of the page's, yields a guide at the sibling's (or page's)
//! coordinate.

use std::collections::HashSet;

use tracing::debug;

use super::types::{Axis, Guide, GuideKind, Page, Rect};

fn within(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() <= threshold
}

/// Compute every guide the moving element qualifies for.
///
/// Output order is sibling input order (vertical center/left/right, then
/// horizontal center/top/bottom per sibling) followed by page guides.
/// Siblings that are non-selectable or that are the moving element itself
/// are skipped. Coinciding guides from different siblings are all kept.
///
/// Give `moving` an `id`: an anonymous clone of it inside `siblings` is
/// treated as a separate element and produces guides against itself.
pub fn compute_guides(page: &Page, siblings: &[Rect], moving: &Rect, threshold: f64) -> Vec<Guide> {
    let mut guides = Vec::new();

    for sibling in siblings {
        if !sibling.selectable || sibling.is_same_element(moving) {
            continue;
        }
        push_sibling_guides(sibling, moving, threshold, &mut guides);
    }

    push_page_guides(page, moving, threshold, &mut guides);

    debug!(
        moving = moving.id_str().unwrap_or("<anon>"),
        siblings = siblings.len(),
        guides = guides.len(),
        "computed guides"
    );
    guides
}

fn push_sibling_guides(sibling: &Rect, moving: &Rect, threshold: f64, guides: &mut Vec<Guide>) {
    let vertical = [
        (moving.center_x(), sibling.center_x(), GuideKind::Center),
        (moving.left(), sibling.left(), GuideKind::Left),
        (moving.right(), sibling.right(), GuideKind::Right),
    ];
    for (ours, theirs, kind) in vertical {
        if within(ours, theirs, threshold) {
            guides.push(Guide::vertical(theirs, kind));
        }
    }

    let horizontal = [
        (moving.center_y(), sibling.center_y(), GuideKind::Center),
        (moving.top(), sibling.top(), GuideKind::Top),
        (moving.bottom(), sibling.bottom(), GuideKind::Bottom),
    ];
    for (ours, theirs, kind) in horizontal {
        if within(ours, theirs, threshold) {
            guides.push(Guide::horizontal(theirs, kind));
        }
    }
}

fn push_page_guides(page: &Page, moving: &Rect, threshold: f64, guides: &mut Vec<Guide>) {
    let vertical = [
        (moving.center_x(), page.width / 2.0, GuideKind::PageCenter),
        (moving.left(), 0.0, GuideKind::PageLeft),
        (moving.right(), page.width, GuideKind::PageRight),
    ];
    for (ours, theirs, kind) in vertical {
        if within(ours, theirs, threshold) {
            guides.push(Guide::vertical(theirs, kind));
        }
    }

    let horizontal = [
        (moving.center_y(), page.height / 2.0, GuideKind::PageCenter),
        (moving.top(), 0.0, GuideKind::PageTop),
        (moving.bottom(), page.height, GuideKind::PageBottom),
    ];
    for (ours, theirs, kind) in horizontal {
        if within(ours, theirs, threshold) {
            guides.push(Guide::horizontal(theirs, kind));
        }
    }
}

/// Collapse guides sharing axis, kind and position (rounded to the pixel).
///
/// Keeps the first occurrence. Hosts that draw one line per coordinate can
/// run this over the output of [`compute_guides`].
pub fn dedup_guides(guides: &[Guide]) -> Vec<Guide> {
    let mut seen: HashSet<(Axis, GuideKind, i64)> = HashSet::new();
    guides
        .iter()
        .filter(|g| seen.insert((g.axis, g.kind, g.position.round() as i64)))
        .copied()
        .collect()
}

/// Whether any guide matches the given axis and kind
pub fn has_guide(guides: &[Guide], axis: Axis, kind: GuideKind) -> bool {
    guides.iter().any(|g| g.axis == axis && g.kind == kind)
}
