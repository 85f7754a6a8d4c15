//! Rope simulation
//!
//! Pure and deterministic: no platform dependencies, and drawing only goes
//! through the `RopeRenderer` trait. The same settings, head targets and
//! timesteps always give the same rope.

pub mod chain;
pub mod constraint;
pub mod node;
pub mod tick;

pub use chain::ParticleChain;
pub use constraint::{relax, relax_nodes, relax_pass};
pub use node::{RopeNode, integrate_tail};
pub use tick::{Simulation, TickInput, tick};
