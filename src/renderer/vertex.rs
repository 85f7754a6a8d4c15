//! Vertex types for 2D rope drawing

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position and color, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Size of one vertex in bytes
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for rope elements
pub mod colors {
    pub const ROPE: [f32; 4] = [0.85, 0.75, 0.55, 1.0];
    pub const ROPE_STRETCHED: [f32; 4] = [1.0, 0.3, 0.2, 1.0];
    pub const NODE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HEAD: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
}
