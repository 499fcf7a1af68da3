// Input interpretation
//
// Device handling stays with the host engine. This module only turns
// already-sampled positions into gestures.
//
// ## Usage Example
//
// ```rust
// use blitzkrieg::engine::input::{Direction, SwipeDetector};
//
// let detector = SwipeDetector::default();
//
// // Normalized x at touch start and touch end
// if detector.evaluate(0.20, 0.27) == Direction::Right {
//     // Page to the right
// }
// ```

pub mod swipe;

// Re-export commonly used types
pub use swipe::{
    eval_horizontal_swipe, Direction, SwipeDetector, DEFAULT_MIN_SWIPE_DISTANCE, SWIPE_SCALE,
};
