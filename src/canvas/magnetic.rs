//! Magnetic snapping to sibling edges
//!
//! Independent of the grid: the host calls this only when magnetic snapping
//! is wanted, and the [`super::grid::SnapSettings`] switch does not apply.

use tracing::trace;

use super::types::{Point, Rect};

/// Best candidate seen so far for one axis
#[derive(Debug, Clone, Copy)]
struct Candidate {
    value: f64,
    distance: f64,
}

fn consider(best: &mut Option<Candidate>, current: f64, candidate: f64, threshold: f64) {
    let distance = (current - candidate).abs();
    if distance > threshold {
        return;
    }
    // Ties keep the earlier candidate
    if best.map_or(true, |b| distance < b.distance) {
        *best = Some(Candidate {
            value: candidate,
            distance,
        });
    }
}

/// Pull the moving element's edges onto the closest sibling edge.
///
/// For x the candidates per sibling are its left and right edges (aligning
/// our left edge) and the same edges minus our width (aligning our right
/// edge). y works the same with top and bottom. The closest candidate within
/// `threshold` wins on each axis; ties go to the first one evaluated in
/// sibling order. An axis without a qualifying candidate keeps its value.
///
/// Give `moving` an `id`: an anonymous clone of it inside `siblings` is
/// treated as a separate element and snaps the element onto itself.
pub fn magnetic_snap(moving: &Rect, siblings: &[Rect], threshold: f64) -> Point {
    let mut best_x: Option<Candidate> = None;
    let mut best_y: Option<Candidate> = None;

    for sibling in siblings {
        if !sibling.selectable || sibling.is_same_element(moving) {
            continue;
        }

        for candidate in [
            sibling.left(),
            sibling.right(),
            sibling.left() - moving.width,
            sibling.right() - moving.width,
        ] {
            consider(&mut best_x, moving.x, candidate, threshold);
        }

        for candidate in [
            sibling.top(),
            sibling.bottom(),
            sibling.top() - moving.height,
            sibling.bottom() - moving.height,
        ] {
            consider(&mut best_y, moving.y, candidate, threshold);
        }
    }

    let snapped = Point::new(
        best_x.map_or(moving.x, |c| c.value),
        best_y.map_or(moving.y, |c| c.value),
    );
    if snapped != moving.origin() {
        trace!(
            from_x = moving.x,
            from_y = moving.y,
            to_x = snapped.x,
            to_y = snapped.y,
            "magnetic snap"
        );
    }
    snapped
}
