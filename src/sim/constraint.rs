//! Distance constraint relaxation
//!
//! Each link may not be longer than the rest length. A link that is too long
//! is pulled back along its own direction; a slack link is left alone. The
//! link touching the head moves only the second node so the head stays pinned.
//!
//! Links are visited head to tail within a pass, so a correction made early
//! in the pass is already seen by the next link.

use glam::Vec2;

use super::chain::ParticleChain;
use super::node::RopeNode;

/// Run every relaxation pass configured on the chain
pub fn relax(chain: &mut ParticleChain) {
    let rest_length = chain.rest_length();
    let iterations = chain.constraint_iterations();
    relax_nodes(chain.nodes_mut(), rest_length, iterations);
}

/// Run `iterations` passes over a node slice whose first entry is pinned
pub fn relax_nodes(nodes: &mut [RopeNode], rest_length: f32, iterations: u32) {
    for _ in 0..iterations {
        relax_pass(nodes, rest_length);
    }
}

/// One head-to-tail sweep over all links
pub fn relax_pass(nodes: &mut [RopeNode], rest_length: f32) {
    for i in 0..nodes.len().saturating_sub(1) {
        let Some(dir) = correction(nodes[i].pos, nodes[i + 1].pos, rest_length) else {
            continue;
        };

        if i == 0 {
            nodes[1].pos += dir;
        } else {
            let half = dir * 0.5;
            nodes[i].pos -= half;
            nodes[i + 1].pos += half;
        }
    }
}

/// Correction that would bring `b` back to `rest_length` from `a`, pointing
/// from `b` toward `a`. `None` when the link is not over length.
#[inline]
fn correction(a: Vec2, b: Vec2, rest_length: f32) -> Option<Vec2> {
    let delta = a - b;
    let distance = delta.length();
    if distance <= rest_length {
        return None;
    }
    let excess = distance - rest_length;
    Some(delta / distance * excess)
}
