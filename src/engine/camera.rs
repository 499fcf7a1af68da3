// Camera collaborators used for viewport projection

use glam::{Mat4, Vec2, Vec3};

use crate::core::point::NormalizedPoint;

/// Smallest zoom an [`OrthographicCamera`] accepts
pub const MIN_ZOOM: f32 = 0.1;

/// A camera able to map world and screen positions into viewport space
pub trait Camera {
    /// Project a world-space position into normalized viewport coordinates
    fn world_to_viewport(&self, world_pos: Vec3) -> NormalizedPoint;

    /// Convert a screen-space pixel position into normalized viewport coordinates
    fn screen_to_viewport(&self, screen_pos: Vec2) -> NormalizedPoint;
}

/// Resolves the camera projections should go through
///
/// The lookup happens at call time and nothing is cached, so switching the
/// camera between frames is picked up by the next call.
pub trait CameraProvider {
    fn active_camera(&self) -> Option<&dyn Camera>;
}

impl<C: Camera> CameraProvider for Option<C> {
    fn active_camera(&self) -> Option<&dyn Camera> {
        self.as_ref().map(|camera| camera as &dyn Camera)
    }
}

impl<P: CameraProvider + ?Sized> CameraProvider for &P {
    fn active_camera(&self) -> Option<&dyn Camera> {
        (**self).active_camera()
    }
}

/// Slot holding the currently active camera, if any
///
/// Host code swaps cameras in and out between frames; projections read
/// whatever is set at the moment they run.
#[derive(Debug, Clone)]
pub struct ActiveCamera<C> {
    camera: Option<C>,
}

impl<C: Camera> ActiveCamera<C> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self { camera: None }
    }

    /// Create a slot with `camera` already active
    pub fn with_camera(camera: C) -> Self {
        Self {
            camera: Some(camera),
        }
    }

    /// Make `camera` the active one, returning the previous camera
    pub fn set(&mut self, camera: C) -> Option<C> {
        log::debug!("Active camera replaced");
        self.camera.replace(camera)
    }

    /// Remove the active camera
    pub fn clear(&mut self) -> Option<C> {
        log::debug!("Active camera cleared");
        self.camera.take()
    }

    /// Get the active camera
    pub fn get(&self) -> Option<&C> {
        self.camera.as_ref()
    }

    /// Get the active camera mutably (to move or zoom it)
    pub fn get_mut(&mut self) -> Option<&mut C> {
        self.camera.as_mut()
    }

    /// Check if a camera is active
    pub fn is_set(&self) -> bool {
        self.camera.is_some()
    }
}

impl<C: Camera> Default for ActiveCamera<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Camera> CameraProvider for ActiveCamera<C> {
    fn active_camera(&self) -> Option<&dyn Camera> {
        self.camera.active_camera()
    }
}

/// 2D orthographic camera
///
/// Screen coordinates are in pixels with the origin at the top-left corner
/// of the window, y pointing down.
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    /// Camera position in world space
    pub position: Vec2,
    /// Camera zoom level (1.0 = normal, 2.0 = zoomed in 2x)
    zoom: f32,
    /// Viewport width in pixels
    viewport_width: f32,
    /// Viewport height in pixels
    viewport_height: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl OrthographicCamera {
    /// Create a new camera centred on `position`
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Update the view-projection matrix
    fn update_view_proj(&mut self) {
        let half_width = (self.viewport_width / 2.0) / self.zoom;
        let half_height = (self.viewport_height / 2.0) / self.zoom;

        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y - half_height,
            self.position.y + half_height,
            -100.0, // Near plane
            100.0,  // Far plane
        );
    }

    /// Set camera position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_view_proj();
    }

    /// Set camera zoom, never below [`MIN_ZOOM`]
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(MIN_ZOOM);
        self.update_view_proj();
    }

    /// Get the camera zoom
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    /// Get the viewport size in pixels
    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

impl Camera for OrthographicCamera {
    fn world_to_viewport(&self, world_pos: Vec3) -> NormalizedPoint {
        // NDC spans [-1, 1]; viewport space spans [0, 1]
        let ndc = self.view_proj.project_point3(world_pos);
        NormalizedPoint::new((ndc.x + 1.0) / 2.0, (ndc.y + 1.0) / 2.0)
    }

    fn screen_to_viewport(&self, screen_pos: Vec2) -> NormalizedPoint {
        NormalizedPoint::new(
            screen_pos.x / self.viewport_width,
            1.0 - screen_pos.y / self.viewport_height,
        )
    }
}

impl CameraProvider for OrthographicCamera {
    fn active_camera(&self) -> Option<&dyn Camera> {
        Some(self)
    }
}
