//! Per-frame simulation tick
//!
//! Order within a tick matters:
//! 1. pin the head to the latest target
//! 2. integrate every other node
//! 3. relax the distance constraints
//! 4. hand positions to the renderer
//!
//! Moving the head before integrating is what makes the rope trail behind it.

use glam::Vec2;

use super::chain::ParticleChain;
use super::constraint::relax;
use super::node::integrate_tail;
use crate::error::{Result, RopeError};
use crate::renderer::RopeRenderer;
use crate::settings::RopeSettings;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// New head position, if the pointer moved since the last tick
    pub head_target: Option<Vec2>,
}

/// Advance a chain by one timestep
pub fn tick(chain: &mut ParticleChain, input: &TickInput, gravity: Vec2, dt: f32) {
    if let Some(target) = input.head_target {
        chain.set_head_target(target);
    }
    integrate_tail(chain.nodes_mut(), dt, gravity);
    relax(chain);
}

/// Owns a rope and drives it from host input
#[derive(Debug, Clone)]
pub struct Simulation {
    chain: ParticleChain,
    gravity: Vec2,
    /// Latest head target not yet applied
    pending_head: Option<Vec2>,
    time_ticks: u64,
}

impl Simulation {
    /// Build a simulation with every node resting at the initial head position
    pub fn new(settings: &RopeSettings) -> Result<Self> {
        settings.validate()?;
        let chain = ParticleChain::new(
            settings.node_count,
            settings.rest_length,
            settings.constraint_iterations,
            settings.initial_head,
        )?;
        log::info!(
            "Rope created: {} nodes, rest length {}, {} passes",
            chain.len(),
            chain.rest_length(),
            chain.constraint_iterations()
        );
        Self::from_chain(chain, settings.gravity)
    }

    /// Wrap an existing chain. Fails when `gravity` is not finite.
    pub fn from_chain(chain: ParticleChain, gravity: Vec2) -> Result<Self> {
        if !gravity.is_finite() {
            return Err(RopeError::NonFiniteGravity);
        }
        Ok(Self {
            chain,
            gravity,
            pending_head: None,
            time_ticks: 0,
        })
    }

    /// Record a new head target. Only the most recent one before the next
    /// tick is applied.
    pub fn on_head_target_changed(&mut self, pos: Vec2) {
        self.pending_head = Some(pos);
    }

    /// Advance one frame. `dt` is used as given.
    pub fn tick(&mut self, dt: f32) {
        let input = TickInput {
            head_target: self.pending_head.take(),
        };
        if let Some(target) = input.head_target {
            log::debug!("tick {}: head moved to {:?}", self.time_ticks + 1, target);
        }
        tick(&mut self.chain, &input, self.gravity, dt);
        self.time_ticks += 1;

        log::trace!(
            "tick {}: head={:?} tail={:?} stretch={:.4}",
            self.time_ticks,
            self.chain.head().pos,
            self.chain.tail().pos,
            self.chain.max_stretch()
        );
    }

    /// Snapshot of node positions, head first
    pub fn node_positions(&self) -> Vec<Vec2> {
        self.chain.positions().collect()
    }

    /// Pass the current positions to a renderer
    pub fn render_into<R: RopeRenderer>(&self, renderer: &mut R) {
        let positions = self.node_positions();
        renderer.draw(&positions);
    }

    pub fn chain(&self) -> &ParticleChain {
        &self.chain
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.time_ticks
    }
}
