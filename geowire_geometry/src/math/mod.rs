use crate::geo::Vec2;

/// Signed area of a ring via the shoelace formula.
///
/// The closing edge from the last point back to the first is implied, so the
/// ring may be stored open. Positive for counterclockwise winding.
pub fn signed_ring_area<C>(points: &[Vec2<C>]) -> f64 {
	let mut sum = 0f64;
	if let Some(mut p2) = points.last() {
		for p1 in points {
			sum += (p2.x - p1.x) * (p1.y + p2.y);
			p2 = p1;
		}
	}
	sum / 2.0
}
