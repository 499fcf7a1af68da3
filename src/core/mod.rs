// Engine-independent helpers: numeric checks and viewport-space points

pub mod math;
pub mod point;

pub use math::{between, between_exclusive, round_to};
pub use point::{NormalizedPoint, VIEWPORT_CENTER};
