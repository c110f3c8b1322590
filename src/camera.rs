//! Perspective camera and pointer-ray unprojection.

use glam::{Mat4, Vec2, Vec3};

const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 5.0, 10.0);
const DEFAULT_FOV: f32 = 75.0_f32.to_radians();
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 1000.0;

/// A ray in world space with normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Perspective camera looking at the board.
///
/// Orbit and pan are applied by an external camera controller through
/// `set_position` / `set_target`; this type only holds the view state
/// and derives matrices and pick rays from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a camera at the default vantage point above and in
    /// front of the board, looking at the origin.
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: Vec3::ZERO,
            fov: DEFAULT_FOV,
            aspect: 1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point the camera looks at.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Moves the camera.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Changes the look-at target.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Updates the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Restores the default vantage point, keeping the aspect ratio.
    pub fn reset(&mut self) {
        self.position = DEFAULT_POSITION;
        self.target = Vec3::ZERO;
    }

    /// View matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unprojects a device-normalized point ([-1, 1] on both axes)
    /// into a world-space ray from the near plane through the far plane.
    pub fn ndc_ray(&self, ndc: Vec2) -> Ray {
        let inverse = self.view_projection().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Ray {
            origin: near,
            direction: (far - near).normalize(),
        }
    }

    /// Projects a world-space point to device-normalized coordinates.
    pub fn world_to_ndc(&self, point: Vec3) -> Vec2 {
        self.view_projection().project_point3(point).truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::new();
        let ray = camera.ndc_ray(Vec2::ZERO);
        let expected = (camera.target() - camera.position()).normalize();
        assert!((ray.direction - expected).length() < 1e-4);
    }

    #[test]
    fn test_ndc_round_trip_through_board_plane() {
        let mut camera = Camera::new();
        camera.set_aspect(16.0 / 9.0);
        let point = Vec3::new(2.1, -2.1, 0.0);
        let ndc = camera.world_to_ndc(point);
        let ray = camera.ndc_ray(ndc);

        // Intersect the ray with the z = 0 plane and compare.
        let t = -ray.origin.z / ray.direction.z;
        let hit = ray.at(t);
        assert!((hit - point).length() < 1e-3);
    }

    #[test]
    fn test_reset_restores_vantage_point() {
        let mut camera = Camera::new();
        camera.set_position(Vec3::new(3.0, 3.0, 3.0));
        camera.set_target(Vec3::new(1.0, 0.0, 0.0));
        camera.reset();
        assert_eq!(camera, Camera::new());
    }
}
