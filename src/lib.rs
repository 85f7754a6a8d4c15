//! Verlet Rope - a real-time 2D rope simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (nodes, integration, constraint relaxation, tick)
//! - `renderer`: Backend-agnostic rope mesh generation
//! - `platform`: Pointer input adaptation
//! - `settings`: JSON-backed rope configuration
//! - `geometry`: Triangle and polygon area helpers

pub mod error;
pub mod geometry;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Result, RopeError};
pub use settings::{RopePreset, RopeSettings};
pub use sim::{ParticleChain, RopeNode, Simulation};

/// Simulation configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep used by the demo loop (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Rope defaults
    pub const DEFAULT_NODE_COUNT: usize = 30;
    pub const DEFAULT_REST_LENGTH: f32 = 20.0;
    pub const DEFAULT_CONSTRAINT_ITERATIONS: u32 = 20;
    /// Scene units per second squared, pointing down
    pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, -98.0);

    /// Drawing defaults
    pub const DEFAULT_NODE_RADIUS: f32 = 5.0;
    pub const DEFAULT_LINE_WIDTH: f32 = 2.0;
}

