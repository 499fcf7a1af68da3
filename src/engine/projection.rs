// World and screen to viewport projection helpers

use glam::{Vec2, Vec3};

use super::camera::{Camera, CameraProvider};
use crate::core::math::round_to;
use crate::core::point::NormalizedPoint;
use crate::{UtilsError, UtilsResult};

/// Decimal places kept by the center-relative helpers
pub const CENTER_DECIMALS: u32 = 2;

/// Anything placed in the world that can report where it is
pub trait WorldObject {
    fn world_position(&self) -> Vec3;
}

impl WorldObject for Vec3 {
    fn world_position(&self) -> Vec3 {
        *self
    }
}

impl WorldObject for Vec2 {
    fn world_position(&self) -> Vec3 {
        self.extend(0.0)
    }
}

impl<T: WorldObject + ?Sized> WorldObject for &T {
    fn world_position(&self) -> Vec3 {
        (**self).world_position()
    }
}

fn require_camera<P: CameraProvider + ?Sized>(cameras: &P) -> UtilsResult<&dyn Camera> {
    cameras.active_camera().ok_or_else(|| {
        log::warn!("Projection requested with no active camera");
        UtilsError::NoActiveCamera
    })
}

/// Get the object's position in viewport space
///
/// (0, 0) is the lower-left of the viewport, (1, 1) the upper-right and 0.5
/// the middle of the screen on either axis. Off-screen objects fall outside
/// [0, 1]; behind-camera results are whatever the camera's projection yields.
pub fn game_object_position<P, O>(cameras: &P, object: &O) -> UtilsResult<NormalizedPoint>
where
    P: CameraProvider + ?Sized,
    O: WorldObject + ?Sized,
{
    let camera = require_camera(cameras)?;
    let point = camera.world_to_viewport(object.world_position());
    log::trace!("Projected object to viewport {}", point);
    Ok(point)
}

/// Get the object's viewport X with the screen center as 0, rounded to two
/// decimals (halves away from zero)
pub fn game_object_x_from_center<P, O>(cameras: &P, object: &O) -> UtilsResult<f32>
where
    P: CameraProvider + ?Sized,
    O: WorldObject + ?Sized,
{
    let centered = game_object_position(cameras, object)?.offset_from_center();
    Ok(round_to(centered.x, CENTER_DECIMALS))
}

/// Get the object's viewport Y with the screen center as 0, rounded to two
/// decimals (halves away from zero)
///
/// Older versions of this helper returned the X offset here. The value is now
/// derived from Y; callers that relied on the old result should use
/// [`game_object_x_from_center`].
pub fn game_object_y_from_center<P, O>(cameras: &P, object: &O) -> UtilsResult<f32>
where
    P: CameraProvider + ?Sized,
    O: WorldObject + ?Sized,
{
    let centered = game_object_position(cameras, object)?.offset_from_center();
    Ok(round_to(centered.y, CENTER_DECIMALS))
}

/// Convert a click (or touch) at a screen pixel position into viewport space
pub fn cast_ray_to_click<P>(cameras: &P, screen_x: f32, screen_y: f32) -> UtilsResult<NormalizedPoint>
where
    P: CameraProvider + ?Sized,
{
    let camera = require_camera(cameras)?;
    let point = camera.screen_to_viewport(Vec2::new(screen_x, screen_y));
    log::trace!("Click at ({}, {}) maps to viewport {}", screen_x, screen_y, point);
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::{ActiveCamera, OrthographicCamera};
    use approx::assert_relative_eq;

    fn cameras() -> ActiveCamera<OrthographicCamera> {
        ActiveCamera::with_camera(OrthographicCamera::new(Vec2::ZERO, 800.0, 600.0))
    }

    #[test]
    fn test_position_of_centered_object() {
        let p = game_object_position(&cameras(), &Vec3::ZERO).expect("camera is set");
        assert_eq!(p, NormalizedPoint::CENTER);
    }

    #[test]
    fn test_position_accepts_2d_objects() {
        let p = game_object_position(&cameras(), &Vec2::new(200.0, -150.0)).expect("camera is set");
        assert_relative_eq!(p.x, 0.75, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_x_from_center() {
        let x = game_object_x_from_center(&cameras(), &Vec2::new(200.0, 0.0)).expect("camera is set");
        assert_relative_eq!(x, 0.25);
    }

    #[test]
    fn test_y_from_center_uses_y_coordinate() {
        // X and Y differ, so an X-derived result would be 0.25
        let object = Vec2::new(200.0, -150.0);
        let y = game_object_y_from_center(&cameras(), &object).expect("camera is set");
        assert_relative_eq!(y, -0.25);
    }

    #[test]
    fn test_from_center_rounds_to_two_decimals() {
        // 0.3333... of the half-width right of center
        let object = Vec2::new(400.0 / 3.0, 0.0);
        let x = game_object_x_from_center(&cameras(), &object).expect("camera is set");
        assert_relative_eq!(x, 0.17);
    }

    #[test]
    fn test_cast_ray_to_click() {
        let p = cast_ray_to_click(&cameras(), 200.0, 150.0).expect("camera is set");
        assert_relative_eq!(p.x, 0.25);
        assert_relative_eq!(p.y, 0.75);
    }

    #[test]
    fn test_missing_camera_is_an_error() {
        let empty: ActiveCamera<OrthographicCamera> = ActiveCamera::new();
        assert!(matches!(
            game_object_position(&empty, &Vec3::ZERO),
            Err(UtilsError::NoActiveCamera)
        ));
        assert!(game_object_x_from_center(&empty, &Vec3::ZERO).is_err());
        assert!(game_object_y_from_center(&empty, &Vec3::ZERO).is_err());
        assert!(matches!(
            cast_ray_to_click(&empty, 10.0, 10.0),
            Err(UtilsError::NoActiveCamera)
        ));
    }
}
