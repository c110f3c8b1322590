//! Headless rendering backend.
//!
//! Implements the full [`RenderBackend`] contract without a GPU:
//! objects are bookkeeping entries with just enough geometry to answer
//! pick rays analytically. Backs the test suites and any embedding
//! that runs the engine without presentation.

use crate::backend::{
    CrossBarsParams, LineParams, PlaneParams, RayHit, RenderBackend, RingParams, SceneHandle,
    Viewport,
};
use crate::camera::{Camera, Ray};
use glam::{Vec2, Vec3};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{trace, warn};

/// Pickable footprint of a live object. All shapes are axis-aligned
/// in the x/y plane at a fixed depth, matching how the synchronizer
/// lays the board out.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PickShape {
    /// Rectangle centered at `center` with the given half extents.
    Rect { center: Vec3, half: Vec2 },
    /// Disc centered at `center` with the given radius.
    Disc { center: Vec3, radius: f32 },
    /// Not pickable (lines).
    None,
}

impl PickShape {
    /// Distance along the ray to the intersection, if any.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let center = match self {
            PickShape::Rect { center, .. } => center,
            PickShape::Disc { center, .. } => center,
            PickShape::None => return None,
        };
        if ray.direction.z.abs() < f32::EPSILON {
            return None;
        }
        let t = (center.z - ray.origin.z) / ray.direction.z;
        if t <= 0.0 {
            return None;
        }
        let point = ray.at(t);
        let on_shape = match self {
            PickShape::Rect { center, half } => {
                (point.x - center.x).abs() <= half.x && (point.y - center.y).abs() <= half.y
            }
            PickShape::Disc { center, radius } => {
                (point.truncate() - center.truncate()).length() <= *radius
            }
            PickShape::None => false,
        };
        on_shape.then_some(t)
    }
}

/// Backend that tracks object lifecycles and answers pick rays
/// without rendering anything.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u64,
    live: HashMap<SceneHandle, PickShape>,
    created_total: usize,
    disposed_total: usize,
    viewport: Option<Viewport>,
    resize_events: usize,
}

impl HeadlessBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (created and not yet disposed) objects.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total objects ever created.
    pub fn created_total(&self) -> usize {
        self.created_total
    }

    /// Total objects disposed. Every successful dispose is counted
    /// exactly once; redundant disposes are ignored.
    pub fn disposed_total(&self) -> usize {
        self.disposed_total
    }

    /// True if the handle refers to a live object.
    pub fn is_live(&self, handle: SceneHandle) -> bool {
        self.live.contains_key(&handle)
    }

    /// Last viewport received via resize notification.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Number of resize notifications received.
    pub fn resize_events(&self) -> usize {
        self.resize_events
    }

    fn alloc(&mut self, shape: PickShape) -> SceneHandle {
        self.next_id += 1;
        let handle = SceneHandle(self.next_id);
        self.live.insert(handle, shape);
        self.created_total += 1;
        trace!(?handle, "object created");
        handle
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_plane(&mut self, params: PlaneParams) -> SceneHandle {
        self.alloc(PickShape::Rect {
            center: params.position,
            half: Vec2::new(params.width / 2.0, params.height / 2.0),
        })
    }

    fn create_ring(&mut self, params: RingParams) -> SceneHandle {
        self.alloc(PickShape::Disc {
            center: params.position,
            radius: params.radius + params.tube,
        })
    }

    fn create_cross_bars(&mut self, params: CrossBarsParams) -> SceneHandle {
        self.alloc(PickShape::Disc {
            center: params.position,
            radius: params.bar_length / 2.0,
        })
    }

    fn create_line(&mut self, _params: LineParams) -> SceneHandle {
        self.alloc(PickShape::None)
    }

    fn dispose(&mut self, handle: SceneHandle) {
        if self.live.remove(&handle).is_some() {
            self.disposed_total += 1;
            trace!(?handle, "object disposed");
        } else {
            warn!(?handle, "dispose of unknown or already disposed handle");
        }
    }

    fn cast_ray(&self, camera: &Camera, ndc: Vec2) -> Vec<RayHit> {
        let ray = camera.ndc_ray(ndc);
        let mut hits: Vec<RayHit> = self
            .live
            .iter()
            .filter_map(|(handle, shape)| {
                shape.intersect(&ray).map(|t| RayHit::new(*handle, t))
            })
            .collect();
        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        });
        hits
    }

    fn notify_resize(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        self.resize_events += 1;
    }
}
