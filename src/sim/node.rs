//! Rope nodes and Verlet integration
//!
//! A node stores where it is and where it was one tick ago. Velocity is never
//! stored; it is the displacement between the two positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single point mass in the rope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RopeNode {
    /// Position this tick
    pub pos: Vec2,
    /// Position one tick ago
    pub prev_pos: Vec2,
}

impl RopeNode {
    /// Create a node at rest (zero implied velocity)
    pub fn new(pos: Vec2) -> Self {
        Self { pos, prev_pos: pos }
    }

    /// Displacement over the last tick
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    /// Advance this node one timestep.
    ///
    /// Gravity is added to the per-tick displacement scaled by `dt` only, not
    /// `dt²`. `dt` is not clamped.
    #[inline]
    pub fn integrate(&mut self, dt: f32, gravity: Vec2) {
        let mut velocity = self.pos - self.prev_pos;
        self.prev_pos = self.pos;
        velocity += gravity * dt;
        self.pos += velocity;
    }
}

/// Integrate every node in the slice except index 0 (the head)
pub fn integrate_tail(nodes: &mut [RopeNode], dt: f32, gravity: Vec2) {
    for node in nodes.iter_mut().skip(1) {
        node.integrate(dt, gravity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_node_at_rest() {
        let node = RopeNode::new(Vec2::new(3.0, -4.0));
        assert_eq!(node.pos, node.prev_pos);
        assert_eq!(node.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_integrate_carries_velocity() {
        let mut node = RopeNode {
            pos: Vec2::new(10.0, 0.0),
            prev_pos: Vec2::new(8.0, 1.0),
        };
        node.integrate(0.5, Vec2::ZERO);
        assert_eq!(node.prev_pos, Vec2::new(10.0, 0.0));
        assert_eq!(node.pos, Vec2::new(12.0, -1.0));
    }

    #[test]
    fn test_integrate_gravity_scaled_by_dt() {
        let mut node = RopeNode::new(Vec2::ZERO);
        node.integrate(0.5, Vec2::new(0.0, -98.0));
        // Velocity term, not half a dt squared
        assert_eq!(node.pos, Vec2::new(0.0, -49.0));
        assert_eq!(node.prev_pos, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_tail_skips_head() {
        let mut nodes = vec![RopeNode::new(Vec2::ZERO); 4];
        integrate_tail(&mut nodes, 1.0, Vec2::new(0.0, -1.0));
        assert_eq!(nodes[0].pos, Vec2::ZERO);
        for node in &nodes[1..] {
            assert_eq!(node.pos, Vec2::new(0.0, -1.0));
        }
    }

    #[test]
    fn test_gravity_velocity_decreases() {
        let mut node = RopeNode::new(Vec2::new(0.0, 100.0));
        let gravity = Vec2::new(0.0, -98.0);
        let dt = 1.0 / 60.0;

        let mut last_vy = node.velocity().y;
        for _ in 0..30 {
            node.integrate(dt, gravity);
            let vy = node.velocity().y;
            assert!(vy < last_vy, "vy {} should drop below {}", vy, last_vy);
            last_vy = vy;
        }
    }

    proptest! {
        #[test]
        fn prop_integrate_is_pure(
            px in -1000.0f32..1000.0,
            py in -1000.0f32..1000.0,
            qx in -1000.0f32..1000.0,
            qy in -1000.0f32..1000.0,
            dt in 0.0f32..0.1,
            gy in -200.0f32..200.0,
        ) {
            let node = RopeNode { pos: Vec2::new(px, py), prev_pos: Vec2::new(qx, qy) };
            let gravity = Vec2::new(0.0, gy);

            let mut a = node;
            let mut b = node;
            a.integrate(dt, gravity);
            b.integrate(dt, gravity);

            prop_assert_eq!(a.pos.x.to_bits(), b.pos.x.to_bits());
            prop_assert_eq!(a.pos.y.to_bits(), b.pos.y.to_bits());
            prop_assert_eq!(a.prev_pos, node.pos);
        }
    }
}
