//! Pointer input adapter
//!
//! Pointer events arrive between ticks at any rate. Only the newest one
//! matters; the simulation pulls it once at the start of each tick.

use glam::Vec2;

/// Converts pointer positions into head targets and keeps the latest one
#[derive(Debug, Clone, Default)]
pub struct HeadInput {
    /// Screen position of the simulation origin
    origin: Vec2,
    /// Screen Y grows downward while simulation Y grows upward
    flip_y: bool,
    latest: Option<Vec2>,
}

impl HeadInput {
    /// Adapter for a view whose origin sits at `origin` in screen space
    pub fn new(origin: Vec2, flip_y: bool) -> Self {
        Self {
            origin,
            flip_y,
            latest: None,
        }
    }

    /// Adapter for a `width` x `height` screen with the origin at its center
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(Vec2::new(width / 2.0, height / 2.0), true)
    }

    /// Move the origin to the center of a resized view
    pub fn set_view_size(&mut self, width: f32, height: f32) {
        self.origin = Vec2::new(width / 2.0, height / 2.0);
    }

    /// Convert a screen position to simulation space
    pub fn screen_to_local(&self, x: f32, y: f32) -> Vec2 {
        let dx = x - self.origin.x;
        let dy = y - self.origin.y;
        if self.flip_y {
            Vec2::new(dx, -dy)
        } else {
            Vec2::new(dx, dy)
        }
    }

    /// Record a pointer move given in screen coordinates
    pub fn on_pointer_moved(&mut self, x: f32, y: f32) {
        self.latest = Some(self.screen_to_local(x, y));
    }

    /// Record a head target already in simulation space
    pub fn on_head_target_changed(&mut self, pos: Vec2) {
        self.latest = Some(pos);
    }

    /// Take the newest sample, if any arrived since the last call
    pub fn sample_latest(&mut self) -> Option<Vec2> {
        self.latest.take()
    }
}
