//! Nearest-candidate selection for directional navigation.
//!
//! Pure and stateless: given the resolved geometry of every target, the
//! current selection, and a direction, [`select_next`] computes the next
//! selection. The session resolves rectangles fresh for every call, so the
//! selector never sees stale layout.
//!
//! # Algorithm
//!
//! 1. Compute an anchor point per candidate on the edge facing toward the
//!    direction of travel, and a mirrored anchor for the selected target on
//!    the edge facing away.
//! 2. Score each candidate with `trunc(sqrt(|dx|) + sqrt(|dy|))` between the
//!    anchors. The metric is sublinear per axis, so candidates roughly
//!    aligned with the travel axis beat diagonally distant ones.
//! 3. Bucket candidates by the integer score; on a collision the later
//!    candidate replaces the earlier for that bucket.
//! 4. Walk buckets in ascending score order; the first candidate whose
//!    anchor lies strictly on the travel side of the selected anchor wins.
//! 5. If no candidate passes the directional test, fall back to the lowest
//!    score overall so navigation never dead-ends while another target
//!    exists.

use std::collections::BTreeMap;

use crate::geometry::{Direction, Point, Rect};
use crate::traits::TargetId;

/// A target's geometry resolved against the host surface at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: TargetId,
    pub rect: Rect,
}

impl Candidate {
    pub fn new(id: TargetId, rect: Rect) -> Self {
        Self { id, rect }
    }
}

/// Compute the next selection for a directional command.
///
/// Total over any non-empty candidate set: returns `None` only when
/// `candidates` is empty. Without a current selection (or when the selection
/// is not a member of `candidates`) the first candidate is returned; with a
/// single candidate the selection stays unchanged.
pub fn select_next(
    candidates: &[Candidate],
    selection: Option<&TargetId>,
    direction: Direction,
) -> Option<TargetId> {
    let first = candidates.first()?;

    let selected = selection.and_then(|id| candidates.iter().find(|c| &c.id == id));
    let Some(selected) = selected else {
        return Some(first.id.clone());
    };
    if candidates.len() == 1 {
        return Some(selected.id.clone());
    }

    let origin = origin_anchor(&selected.rect, direction);

    let mut by_distance: BTreeMap<i32, &Candidate> = BTreeMap::new();
    for candidate in candidates {
        if candidate.id == selected.id {
            continue;
        }
        let anchor = travel_anchor(&candidate.rect, direction);
        // Colliding scores keep only the last writer for that bucket.
        by_distance.insert(walk_distance(origin, anchor), candidate);
    }

    for candidate in by_distance.values() {
        let anchor = travel_anchor(&candidate.rect, direction);
        if on_travel_side(origin, anchor, direction) {
            return Some(candidate.id.clone());
        }
    }

    // Nothing on the travel side: nearest candidate regardless of direction.
    by_distance.values().next().map(|c| c.id.clone())
}

/// Anchor on the edge of a candidate facing toward the direction of travel.
fn travel_anchor(rect: &Rect, direction: Direction) -> Point {
    match direction {
        Direction::Up => Point::new(rect.x + rect.width / 2, rect.y + rect.height),
        Direction::Down => Point::new(rect.x + rect.width, rect.y),
        Direction::Left => Point::new(rect.x + rect.width, rect.y + rect.height / 2),
        Direction::Right => Point::new(rect.x, rect.y + rect.height / 2),
    }
}

/// Anchor on the edge of the selected target facing away from the travel
/// direction.
fn origin_anchor(rect: &Rect, direction: Direction) -> Point {
    match direction {
        Direction::Up => Point::new(rect.x + rect.width / 2, rect.y),
        Direction::Down => Point::new(rect.x + rect.width / 2, rect.y + rect.height),
        Direction::Left => Point::new(rect.x, rect.y + rect.height / 2),
        Direction::Right => Point::new(rect.x + rect.width, rect.y + rect.height / 2),
    }
}

/// Sublinear anchor distance: `sqrt(|dx|) + sqrt(|dy|)`, truncated toward
/// zero. Not Euclidean; the truncation and the per-axis square roots are
/// load-bearing for selection order and must not be "fixed".
fn walk_distance(from: Point, to: Point) -> i32 {
    let dx = f64::from((to.x - from.x).abs());
    let dy = f64::from((to.y - from.y).abs());
    (dx.sqrt() + dy.sqrt()) as i32
}

/// Strict directional test along the travel axis.
fn on_travel_side(origin: Point, candidate: Point, direction: Direction) -> bool {
    match direction {
        Direction::Up => candidate.y < origin.y,
        Direction::Down => candidate.y > origin.y,
        Direction::Left => candidate.x < origin.x,
        Direction::Right => candidate.x > origin.x,
    }
}
