// Blitzkrieg: small helpers for 2D games
//
// - `core`: range checks, decimal rounding and viewport-space points
// - `engine::camera`: the camera collaborator and an orthographic camera
// - `engine::projection`: world and screen positions to viewport space
// - `engine::random`: random booleans and directions
// - `engine::input`: horizontal swipe classification
//
// Every helper is a free function over its inputs. Nothing here keeps state
// between calls; the active camera and the random generator are passed in
// (or, for randomness, taken from the thread-local generator).

pub mod core;
pub mod engine;

pub use crate::core::{between, between_exclusive, round_to, NormalizedPoint};
pub use crate::engine::camera::{ActiveCamera, Camera, CameraProvider, OrthographicCamera};
pub use crate::engine::input::{eval_horizontal_swipe, Direction, SwipeDetector};
pub use crate::engine::projection::{
    cast_ray_to_click, game_object_position, game_object_x_from_center,
    game_object_y_from_center, WorldObject,
};
pub use crate::engine::random::{
    random_boolean, random_boolean_with, random_direction, random_direction_with, seeded_rng,
};

/// Errors reported by the projection helpers
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    #[error("No active camera available for projection")]
    NoActiveCamera,
}

/// Result type used by the projection helpers
pub type UtilsResult<T> = Result<T, UtilsError>;
