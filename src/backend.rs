//! Rendering capability surface consumed by the scene synchronizer.
//!
//! The actual rendering backend (projection, lighting, shading, frame
//! presentation) lives outside this crate. The core only needs to
//! create and dispose a handful of object kinds, cast pick rays, and
//! forward resize notifications.

use crate::camera::Camera;
use crate::palette::Color;
use glam::{Vec2, Vec3};

/// Opaque handle to an object owned by the rendering backend.
///
/// The backend allocates handles; the scene synchronizer is the only
/// component that stores and disposes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub u64);

/// Parameters for a flat rectangular plane.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct PlaneParams {
    /// Plane width.
    pub width: f32,
    /// Plane height.
    pub height: f32,
    /// Center position in world space.
    pub position: Vec3,
    /// Material color.
    pub color: Color,
}

/// Parameters for a torus-shaped O piece.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct RingParams {
    /// Radius from center to tube center.
    pub radius: f32,
    /// Tube radius.
    pub tube: f32,
    /// Center position in world space.
    pub position: Vec3,
    /// Material color.
    pub color: Color,
}

/// Parameters for the two crossed bars of an X piece.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct CrossBarsParams {
    /// Bar cylinder radius.
    pub bar_radius: f32,
    /// Bar length.
    pub bar_length: f32,
    /// Center position in world space.
    pub position: Vec3,
    /// Material color.
    pub color: Color,
}

/// Parameters for a polyline.
#[derive(Debug, Clone, PartialEq, derive_new::new)]
pub struct LineParams {
    /// Points in world space, connected in order.
    pub points: Vec<Vec3>,
    /// Line color.
    pub color: Color,
}

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Converts pixel coordinates (origin top-left, y down) to
    /// device-normalized coordinates in [-1, 1] (y up).
    pub fn ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width as f32) * 2.0 - 1.0,
            -((y / self.height as f32) * 2.0 - 1.0),
        )
    }
}

/// One ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct RayHit {
    /// Handle of the intersected object.
    pub handle: SceneHandle,
    /// Distance from the ray origin.
    pub distance: f32,
}

/// Capability surface the core requires from a rendering backend.
///
/// `cast_ray` must return hits ordered by increasing distance from the
/// camera. `dispose` must release the object's graphics resources;
/// disposing an unknown handle is a recoverable no-op.
pub trait RenderBackend {
    /// Creates a flat plane object.
    fn create_plane(&mut self, params: PlaneParams) -> SceneHandle;

    /// Creates a ring (O piece) object.
    fn create_ring(&mut self, params: RingParams) -> SceneHandle;

    /// Creates a crossed-bars (X piece) object.
    fn create_cross_bars(&mut self, params: CrossBarsParams) -> SceneHandle;

    /// Creates a polyline object.
    fn create_line(&mut self, params: LineParams) -> SceneHandle;

    /// Releases the object's geometry and material resources.
    fn dispose(&mut self, handle: SceneHandle);

    /// Casts a ray from the camera through the given device-normalized
    /// point; returns intersections ordered by increasing distance.
    fn cast_ray(&self, camera: &Camera, ndc: Vec2) -> Vec<RayHit>;

    /// Forwards new viewport dimensions to the backend.
    fn notify_resize(&mut self, viewport: Viewport);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ndc_corners() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(viewport.ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport.ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(viewport.ndc(400.0, 300.0), Vec2::ZERO);
    }

    #[test]
    fn test_aspect() {
        assert!((Viewport::new(1920, 1080).aspect() - 16.0 / 9.0).abs() < 1e-6);
    }
}
