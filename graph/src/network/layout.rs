//! Deterministic initial positions for the network.
//!
//! These are only a starting point for the physics simulation: the main
//! book sits at the origin, similar books on a circle around it and tags on
//! concentric rings.

use goodbooks_config::LayoutConfig;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    fn polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    pub fn distance_from_origin(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// `count` points evenly spaced on a circle, the first at angle 0
pub fn circle(count: usize, radius: f64) -> Vec<Position> {
    (0..count)
        .map(|i| Position::polar(radius, 2.0 * PI * i as f64 / count as f64))
        .collect()
}

/// Positions for `count` tags spread over rings of at most
/// `tags_per_ring` slots. Each ring is rotated by half a slot so tags do not
/// line up with the books on the outer circle.
pub fn tag_rings(count: usize, layout: &LayoutConfig) -> Vec<Position> {
    let per_ring = layout.tags_per_ring.max(1);
    (0..count)
        .map(|i| {
            let ring = i / per_ring;
            let slot = i % per_ring;
            let in_ring = per_ring.min(count - ring * per_ring);
            let radius = layout.tag_ring_radius + ring as f64 * layout.tag_ring_spacing;
            let angle = 2.0 * PI * (slot as f64 + 0.5) / in_ring as f64;
            Position::polar(radius, angle)
        })
        .collect()
}
