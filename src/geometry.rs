//! Area helpers for triangles and simple polygons

use glam::Vec2;

/// Triangle area from its three side lengths (Heron's formula)
pub fn triangle_area_heron(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ca = c.distance(a);
    let s = (ab + bc + ca) / 2.0;
    // Rounding can push a degenerate triangle slightly negative
    (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt()
}

/// Triangle area from the cross product of two edges
pub fn triangle_area_cross(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a).abs() / 2.0
}

/// Area of a simple polygon (shoelace formula). Winding order does not
/// matter; fewer than three points has no area.
pub fn polygon_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }

    let sum: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p1, p2)| (p2.x - p1.x) * (p1.y + p2.y))
        .sum();

    (sum * 0.5).abs()
}
