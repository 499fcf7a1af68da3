// Normalized 2D coordinates

use glam::Vec2;
use std::fmt;

/// Coordinate of the viewport center on both axes
pub const VIEWPORT_CENTER: f32 = 0.5;

/// A point in normalized viewport space
///
/// (0, 0) is the lower-left corner of the viewport and (1, 1) the upper-right.
/// Values are never clamped: objects off-screen or behind the camera produce
/// whatever the projection yields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    /// The viewport center
    pub const CENTER: Self = Self::new(VIEWPORT_CENTER, VIEWPORT_CENTER);

    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Re-express the point relative to the viewport center, so that an
    /// on-screen point falls within [-0.5, 0.5] on both axes
    pub fn offset_from_center(&self) -> Self {
        Self::new(self.x - VIEWPORT_CENTER, self.y - VIEWPORT_CENTER)
    }

    /// Check if the point lies inside the visible viewport, edges included
    pub fn is_on_screen(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl From<Vec2> for NormalizedPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<NormalizedPoint> for Vec2 {
    fn from(p: NormalizedPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl fmt::Display for NormalizedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
