//! The rope: a fixed-length chain of nodes with a kinematic head
//!
//! Index 0 is the head. It is moved only by `set_head_target`; the integrator
//! and the constraint solver leave it alone.

use glam::Vec2;

use super::node::RopeNode;
use crate::error::{Result, RopeError};

/// An ordered chain of rope nodes
#[derive(Debug, Clone)]
pub struct ParticleChain {
    nodes: Vec<RopeNode>,
    rest_length: f32,
    constraint_iterations: u32,
}

impl ParticleChain {
    /// Create a chain of `count` nodes, all resting at `head`.
    ///
    /// Fails when `count < 2` or `rest_length` is not a positive finite number.
    pub fn new(
        count: usize,
        rest_length: f32,
        constraint_iterations: u32,
        head: Vec2,
    ) -> Result<Self> {
        if count < 2 {
            return Err(RopeError::TooFewNodes { count });
        }
        if !(rest_length.is_finite() && rest_length > 0.0) {
            return Err(RopeError::InvalidRestLength(rest_length));
        }

        Ok(Self {
            nodes: vec![RopeNode::new(head); count],
            rest_length,
            constraint_iterations,
        })
    }

    /// Create a chain laid out in a straight line from `head` along `direction`,
    /// each node `spacing` apart.
    pub fn new_line(
        count: usize,
        rest_length: f32,
        constraint_iterations: u32,
        head: Vec2,
        direction: Vec2,
        spacing: f32,
    ) -> Result<Self> {
        let mut chain = Self::new(count, rest_length, constraint_iterations, head)?;
        let step = direction.normalize_or_zero() * spacing;
        for (i, node) in chain.nodes.iter_mut().enumerate() {
            *node = RopeNode::new(head + step * i as f32);
        }
        Ok(chain)
    }

    /// Number of nodes (never less than 2)
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a chain holds at least two nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of links between nodes
    #[inline]
    pub fn link_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Maximum allowed distance between neighbours
    #[inline]
    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    /// Relaxation passes per tick
    #[inline]
    pub fn constraint_iterations(&self) -> u32 {
        self.constraint_iterations
    }

    pub fn node(&self, index: usize) -> Option<&RopeNode> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut RopeNode> {
        self.nodes.get_mut(index)
    }

    pub fn nodes(&self) -> &[RopeNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [RopeNode] {
        &mut self.nodes
    }

    /// The head node
    #[inline]
    pub fn head(&self) -> &RopeNode {
        &self.nodes[0]
    }

    /// The last node in the chain
    #[inline]
    pub fn tail(&self) -> &RopeNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Pin the head at `pos`. Only the current position is written, so the
    /// head's implied velocity is whatever jump this causes.
    #[inline]
    pub fn set_head_target(&mut self, pos: Vec2) {
        self.nodes[0].pos = pos;
    }

    /// Current positions, head first
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.nodes.iter().map(|n| n.pos)
    }

    /// Distance between each pair of neighbours, head first
    pub fn link_lengths(&self) -> impl Iterator<Item = f32> + '_ {
        self.nodes.windows(2).map(|w| w[0].pos.distance(w[1].pos))
    }

    /// Sum of all link lengths
    pub fn total_length(&self) -> f32 {
        self.link_lengths().sum()
    }

    /// How far the longest link exceeds the rest length (negative if all are slack)
    pub fn max_stretch(&self) -> f32 {
        self.link_lengths()
            .map(|d| d - self.rest_length)
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_too_few_nodes() {
        assert!(matches!(
            ParticleChain::new(0, 20.0, 20, Vec2::ZERO),
            Err(RopeError::TooFewNodes { count: 0 })
        ));
        assert!(matches!(
            ParticleChain::new(1, 20.0, 20, Vec2::ZERO),
            Err(RopeError::TooFewNodes { count: 1 })
        ));
        assert!(ParticleChain::new(2, 20.0, 20, Vec2::ZERO).is_ok());
    }

    #[test]
    fn test_rejects_bad_rest_length() {
        assert!(matches!(
            ParticleChain::new(5, 0.0, 20, Vec2::ZERO),
            Err(RopeError::InvalidRestLength(_))
        ));
    }

    #[test]
    fn test_new_nodes_rest_at_head() {
        let head = Vec2::new(5.0, 7.0);
        let chain = ParticleChain::new(30, 20.0, 20, head).unwrap();
        assert_eq!(chain.len(), 30);
        assert_eq!(chain.link_count(), 29);
        for node in chain.nodes() {
            assert_eq!(node.pos, head);
            assert_eq!(node.prev_pos, head);
        }
    }

    #[test]
    fn test_config_fixed_at_construction() {
        let mut chain = ParticleChain::new(4, 12.5, 7, Vec2::ZERO).unwrap();
        chain.set_head_target(Vec2::new(3.0, 3.0));
        chain.nodes_mut()[2].pos = Vec2::new(50.0, 0.0);
        assert_eq!(chain.rest_length(), 12.5);
        assert_eq!(chain.constraint_iterations(), 7);

        let copy = chain.clone();
        assert_eq!(copy.rest_length(), 12.5);
        assert_eq!(copy.constraint_iterations(), 7);
    }

    #[test]
    fn test_new_line_layout() {
        let chain =
            ParticleChain::new_line(4, 10.0, 20, Vec2::ZERO, Vec2::new(2.0, 0.0), 15.0).unwrap();
        let positions: Vec<_> = chain.positions().collect();
        assert_eq!(
            positions,
            vec![
                Vec2::ZERO,
                Vec2::new(15.0, 0.0),
                Vec2::new(30.0, 0.0),
                Vec2::new(45.0, 0.0)
            ]
        );
        assert!((chain.total_length() - 45.0).abs() < 1e-4);
        assert!((chain.max_stretch() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_set_head_target_keeps_prev_pos() {
        let mut chain = ParticleChain::new(3, 20.0, 20, Vec2::ZERO).unwrap();
        chain.set_head_target(Vec2::new(4.0, 2.0));
        assert_eq!(chain.head().pos, Vec2::new(4.0, 2.0));
        assert_eq!(chain.head().prev_pos, Vec2::ZERO);
        assert_eq!(chain.head().velocity(), Vec2::new(4.0, 2.0));
        assert_eq!(chain.tail().pos, Vec2::ZERO);
    }

    #[test]
    fn test_node_access_out_of_range() {
        let mut chain = ParticleChain::new(2, 20.0, 20, Vec2::ZERO).unwrap();
        assert!(chain.node(2).is_none());
        assert!(chain.node_mut(5).is_none());
        chain.node_mut(1).unwrap().pos = Vec2::new(0.0, -3.0);
        assert_eq!(chain.node(1).unwrap().pos, Vec2::new(0.0, -3.0));
    }
}
