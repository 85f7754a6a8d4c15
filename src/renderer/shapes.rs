//! Shape generation for rope drawing
//!
//! Everything here produces triangle lists; the host decides how to draw them.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};

/// Blend from the rope color toward red as a link stretches past rest length.
///
/// `stretch` is link length over rest length; 1.0 or less is slack.
pub fn stretch_color(stretch: f32) -> [f32; 4] {
    let t = ((stretch - 1.0) / 0.25).clamp(0.0, 1.0);
    let a = colors::ROPE;
    let b = colors::ROPE_STRETCHED;
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        1.0,
    ]
}

/// Generate a thick polyline through the node positions.
///
/// Each link becomes a quad (two triangles) colored by how stretched it is.
pub fn rope_strip(positions: &[Vec2], width: f32, rest_length: f32) -> Vec<Vertex> {
    if positions.len() < 2 {
        return Vec::new();
    }

    let half_width = width * 0.5;
    let mut vertices = Vec::with_capacity((positions.len() - 1) * 6);

    for pair in positions.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        let stretch = if rest_length > 0.0 {
            p1.distance(p2) / rest_length
        } else {
            1.0
        };
        let color = stretch_color(stretch);

        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half_width;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Triangle fan for a filled node dot
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let step = TAU / segments as f32;
    let rim = |i: u32| center + Vec2::from_angle(i as f32 * step) * radius;

    (0..segments)
        .flat_map(|i| {
            let (a, b) = (rim(i), rim(i + 1));
            [
                Vertex::new(center.x, center.y, color),
                Vertex::new(a.x, a.y, color),
                Vertex::new(b.x, b.y, color),
            ]
        })
        .collect()
}

/// Fan segments for a node dot: roughly one per 2.5 units of rim, 6 to 32
pub fn node_segments(radius: f32) -> u32 {
    ((TAU * radius / 2.5).ceil() as u32).clamp(6, 32)
}

/// Full rope mesh: the strip first, then a dot on every node (head in its own color)
pub fn rope_mesh(
    positions: &[Vec2],
    line_width: f32,
    node_radius: f32,
    rest_length: f32,
) -> Vec<Vertex> {
    let segments = node_segments(node_radius);
    let mut vertices = rope_strip(positions, line_width, rest_length);
    vertices.reserve(positions.len() * (segments * 3) as usize);

    for (i, &pos) in positions.iter().enumerate() {
        let color = if i == 0 { colors::HEAD } else { colors::NODE };
        vertices.extend(circle(pos, node_radius, color, segments));
    }

    vertices
}
