//! Pointer interaction with laid-out orbs.
//!
//! Orbs near the cursor are pulled toward it by a small, distance-weighted
//! offset. The offset is applied at render time only; layout positions are
//! never rewritten.

use crate::models::Point;
use crate::services::layout::LayoutPosition;

/// Distance in pixels beyond which the cursor has no pull.
pub const MAGNET_RADIUS: f64 = 200.0;
/// Maximum displacement in pixels, reached as the cursor approaches the orb.
pub const MAGNET_STRENGTH: f64 = 15.0;

/// Offset to add to an orb at `orb` for a cursor at `cursor`.
///
/// Zero outside [`MAGNET_RADIUS`] and when the cursor sits exactly on the orb.
#[must_use]
pub fn magnetic_offset(cursor: Point, orb: Point) -> Point {
    let dx = cursor.x - orb.x;
    let dy = cursor.y - orb.y;
    let distance = dx.hypot(dy);

    if distance > 0.0 && distance < MAGNET_RADIUS {
        let force = (1.0 - distance / MAGNET_RADIUS) * MAGNET_STRENGTH;
        Point::new(dx / distance * force, dy / distance * force)
    } else {
        Point::default()
    }
}

/// Position of an orb after the cursor's pull.
#[must_use]
pub fn displaced(position: &LayoutPosition, cursor: Point) -> Point {
    let orb = Point::new(position.x, position.y);
    let offset = magnetic_offset(cursor, orb);
    Point::new(orb.x + offset.x, orb.y + offset.y)
}

/// Id of the orb closest to `point`, if any lies within `max_distance`.
#[must_use]
pub fn nearest_orb(positions: &[LayoutPosition], point: Point, max_distance: f64) -> Option<&str> {
    positions
        .iter()
        .map(|p| (p, (p.x - point.x).hypot(p.y - point.y)))
        .filter(|(_, d)| *d <= max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p.color_id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(id: &str, x: f64, y: f64) -> LayoutPosition {
        LayoutPosition {
            color_id: id.to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_offset_points_toward_cursor() {
        let offset = magnetic_offset(Point::new(100.0, 0.0), Point::new(0.0, 0.0));
        // force = (1 - 100/200) * 15
        assert!((offset.x - 7.5).abs() < 1e-9);
        assert!(offset.y.abs() < 1e-9);
    }

    #[test]
    fn test_offset_zero_outside_radius_and_at_center() {
        assert_eq!(
            magnetic_offset(Point::new(200.0, 0.0), Point::new(0.0, 0.0)),
            Point::default()
        );
        assert_eq!(
            magnetic_offset(Point::new(5.0, 5.0), Point::new(5.0, 5.0)),
            Point::default()
        );
    }

    #[test]
    fn test_offset_never_exceeds_strength() {
        for d in 1..200 {
            let offset = magnetic_offset(Point::new(f64::from(d), 0.0), Point::default());
            assert!(offset.x.hypot(offset.y) <= MAGNET_STRENGTH);
        }
    }

    #[test]
    fn test_displaced_moves_orb() {
        let moved = displaced(&pos("a", 0.0, 0.0), Point::new(0.0, 50.0));
        assert!(moved.y > 0.0);
        assert_eq!(moved.x, 0.0);
    }

    #[test]
    fn test_nearest_orb() {
        let positions = vec![pos("a", 0.0, 0.0), pos("b", 100.0, 0.0)];
        assert_eq!(nearest_orb(&positions, Point::new(70.0, 0.0), 50.0), Some("b"));
        assert_eq!(nearest_orb(&positions, Point::new(20.0, 0.0), 50.0), Some("a"));
        assert_eq!(nearest_orb(&positions, Point::new(50.0, 200.0), 50.0), None);
        assert_eq!(nearest_orb(&[], Point::default(), 50.0), None);
    }
}
