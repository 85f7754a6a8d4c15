//! Rope drawing
//!
//! The simulation only hands out node positions. A host implements
//! [`RopeRenderer`] to draw them; [`MeshRenderer`] turns them into a triangle
//! list ready for a GPU vertex buffer.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

use crate::settings::RopeSettings;

/// Receives the node positions once per tick, head first
pub trait RopeRenderer {
    fn draw(&mut self, positions: &[Vec2]);
}

/// Builds a rope mesh from each frame's positions
#[derive(Debug, Clone)]
pub struct MeshRenderer {
    line_width: f32,
    node_radius: f32,
    rest_length: f32,
    vertices: Vec<Vertex>,
}

impl MeshRenderer {
    pub fn new(settings: &RopeSettings) -> Self {
        Self {
            line_width: settings.line_width,
            node_radius: settings.node_radius,
            rest_length: settings.rest_length,
            vertices: Vec::new(),
        }
    }

    /// Vertices from the last `draw`
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices from the last `draw` as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RopeRenderer for MeshRenderer {
    fn draw(&mut self, positions: &[Vec2]) {
        self.vertices = shapes::rope_mesh(
            positions,
            self.line_width,
            self.node_radius,
            self.rest_length,
        );
    }
}
