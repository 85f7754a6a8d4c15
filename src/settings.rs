//! Rope settings
//!
//! Fixed at construction. Stored as JSON so a host can tweak a rope without
//! recompiling.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, RopeError};

/// Named rope presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RopePreset {
    Short,
    #[default]
    Standard,
    Long,
}

impl RopePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            RopePreset::Short => "Short",
            RopePreset::Standard => "Standard",
            RopePreset::Long => "Long",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "short" => Some(RopePreset::Short),
            "standard" | "default" => Some(RopePreset::Standard),
            "long" => Some(RopePreset::Long),
            _ => None,
        }
    }

    /// Number of nodes for this preset
    pub fn node_count(&self) -> usize {
        match self {
            RopePreset::Short => 10,
            RopePreset::Standard => DEFAULT_NODE_COUNT,
            RopePreset::Long => 60,
        }
    }

    /// Relaxation passes for this preset.
    ///
    /// Longer ropes need more passes before corrections reach the tail.
    pub fn constraint_iterations(&self) -> u32 {
        match self {
            RopePreset::Short => 10,
            RopePreset::Standard => DEFAULT_CONSTRAINT_ITERATIONS,
            RopePreset::Long => 40,
        }
    }
}

/// Rope configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeSettings {
    // === Simulation ===
    /// Number of nodes including the head
    pub node_count: usize,
    /// Maximum distance between neighbouring nodes
    pub rest_length: f32,
    /// Relaxation passes per tick
    pub constraint_iterations: u32,
    /// Constant acceleration applied to every non-head node
    pub gravity: Vec2,
    /// Where every node starts
    pub initial_head: Vec2,

    // === Drawing ===
    /// Radius of the circle drawn at each node
    pub node_radius: f32,
    /// Width of the line joining the nodes
    pub line_width: f32,
}

impl Default for RopeSettings {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            rest_length: DEFAULT_REST_LENGTH,
            constraint_iterations: DEFAULT_CONSTRAINT_ITERATIONS,
            gravity: DEFAULT_GRAVITY,
            initial_head: Vec2::ZERO,

            node_radius: DEFAULT_NODE_RADIUS,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl RopeSettings {
    /// Create settings from a preset
    pub fn from_preset(preset: RopePreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a preset (node count and iteration count only)
    pub fn apply_preset(&mut self, preset: RopePreset) {
        self.node_count = preset.node_count();
        self.constraint_iterations = preset.constraint_iterations();
    }

    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    pub fn with_rest_length(mut self, rest_length: f32) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_constraint_iterations(mut self, iterations: u32) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_initial_head(mut self, head: Vec2) -> Self {
        self.initial_head = head;
        self
    }

    /// Reject settings the simulation cannot start from
    pub fn validate(&self) -> Result<()> {
        if self.node_count < 2 {
            return Err(RopeError::TooFewNodes {
                count: self.node_count,
            });
        }
        if !(self.rest_length.is_finite() && self.rest_length > 0.0) {
            return Err(RopeError::InvalidRestLength(self.rest_length));
        }
        if !self.gravity.is_finite() {
            return Err(RopeError::NonFiniteGravity);
        }
        if !self.initial_head.is_finite() {
            return Err(RopeError::NonFiniteHead);
        }
        Ok(())
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded rope settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default rope settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Rope settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
