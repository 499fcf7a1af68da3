// Horizontal swipe classification

use std::fmt;

/// Multiplier turning a normalized screen-space delta into swipe units.
/// Thresholds at existing call sites are tuned against this exact value.
pub const SWIPE_SCALE: f32 = 100.0;

/// Threshold used by [`SwipeDetector::default`], in swipe units
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 4.0;

/// Horizontal direction of a gesture or random pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    None,
    Right,
}

impl Direction {
    /// Check if this is [`Direction::None`]
    pub fn is_none(&self) -> bool {
        *self == Direction::None
    }

    /// Get the mirrored direction; `None` stays `None`
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::None => Direction::None,
            Direction::Right => Direction::Left,
        }
    }

    /// Get the direction as a sign along the x axis (-1, 0 or 1)
    pub fn signum(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::None => 0,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::None => "none",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Classify a horizontal swipe from `start` to `end`
///
/// The drag distance is `(end - start) * SWIPE_SCALE`. A swipe counts only if
/// its magnitude is strictly greater than `min_distance`; anything at or
/// under the threshold, a zero-length drag, or a NaN drag yields
/// [`Direction::None`].
pub fn eval_horizontal_swipe(start: f32, end: f32, min_distance: f32) -> Direction {
    let drag_distance = (end - start) * SWIPE_SCALE;

    if drag_distance.abs() > min_distance {
        if drag_distance > 0.0 {
            return Direction::Right;
        } else if drag_distance < 0.0 {
            return Direction::Left;
        }
    }

    Direction::None
}

/// Swipe classifier bound to a fixed threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDetector {
    min_distance: f32,
}

impl SwipeDetector {
    /// Create a detector requiring drags longer than `min_distance` swipe units
    pub fn new(min_distance: f32) -> Self {
        Self { min_distance }
    }

    /// Get the threshold
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Change the threshold
    pub fn set_min_distance(&mut self, min_distance: f32) {
        self.min_distance = min_distance;
    }

    /// Classify a swipe from `start` to `end`
    pub fn evaluate(&self, start: f32, end: f32) -> Direction {
        let direction = eval_horizontal_swipe(start, end, self.min_distance);
        if !direction.is_none() {
            log::debug!("Swipe {} -> {} classified as {}", start, end, direction);
        }
        direction
    }
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE_DISTANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_right() {
        assert_eq!(eval_horizontal_swipe(0.0, 0.05, 4.0), Direction::Right);
    }

    #[test]
    fn test_swipe_left() {
        assert_eq!(eval_horizontal_swipe(0.05, 0.0, 4.0), Direction::Left);
    }

    #[test]
    fn test_swipe_too_short() {
        assert_eq!(eval_horizontal_swipe(0.0, 0.03, 4.0), Direction::None);
        assert_eq!(eval_horizontal_swipe(0.03, 0.0, 4.0), Direction::None);
    }

    #[test]
    fn test_swipe_at_threshold_is_none() {
        // 0.04 * 100 == 4.0 in f32
        assert_eq!(eval_horizontal_swipe(0.0, 0.04, 4.0), Direction::None);
        assert_eq!(eval_horizontal_swipe(0.0, 0.5, 50.0), Direction::None);
    }

    #[test]
    fn test_zero_drag_with_negative_threshold() {
        assert_eq!(eval_horizontal_swipe(0.3, 0.3, -1.0), Direction::None);
    }

    #[test]
    fn test_negative_threshold_accepts_any_movement() {
        assert_eq!(eval_horizontal_swipe(0.3, 0.31, -1.0), Direction::Right);
        assert_eq!(eval_horizontal_swipe(0.31, 0.3, 0.0), Direction::Left);
    }

    #[test]
    fn test_nan_input_is_none() {
        assert_eq!(eval_horizontal_swipe(f32::NAN, 0.5, 4.0), Direction::None);
        assert_eq!(eval_horizontal_swipe(0.0, 0.5, f32::NAN), Direction::None);
    }

    #[test]
    fn test_infinite_drag() {
        assert_eq!(eval_horizontal_swipe(0.0, f32::INFINITY, 4.0), Direction::Right);
        assert_eq!(eval_horizontal_swipe(0.0, f32::NEG_INFINITY, 4.0), Direction::Left);
        assert_eq!(eval_horizontal_swipe(0.0, 1.0, f32::INFINITY), Direction::None);
    }

    #[test]
    fn test_direction_helpers() {
        assert!(Direction::None.is_none());
        assert!(!Direction::Left.is_none());
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::None.opposite(), Direction::None);
        assert_eq!(Direction::Right.signum(), 1);
        assert_eq!(Direction::Left.signum(), -1);
        assert_eq!(Direction::None.signum(), 0);
        assert_eq!(Direction::Right.to_string(), "right");
    }

    #[test]
    fn test_detector_default_threshold() {
        let detector = SwipeDetector::default();
        assert_eq!(detector.min_distance(), DEFAULT_MIN_SWIPE_DISTANCE);
        assert_eq!(detector.evaluate(0.0, 0.05), Direction::Right);
        assert_eq!(detector.evaluate(0.0, 0.03), Direction::None);
    }

    #[test]
    fn test_detector_threshold_change() {
        let mut detector = SwipeDetector::new(10.0);
        assert_eq!(detector.evaluate(0.2, 0.1), Direction::None);
        detector.set_min_distance(5.0);
        assert_eq!(detector.evaluate(0.2, 0.1), Direction::Left);
    }
}
