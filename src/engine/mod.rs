// Engine-facing helpers: cameras, projection, input, randomness

pub mod camera;
pub mod input;
pub mod projection;
pub mod random;
