//! Pointer picking: screen-space events to board cells.

use crate::backend::{RenderBackend, SceneHandle, Viewport};
use crate::camera::Camera;
use crate::position::Position;
use tracing::{debug, instrument};

/// Resolves a pointer event to the board cell under it, if any.
///
/// The pointer position is normalized against the viewport, a ray is
/// cast from the camera through that point, and the nearest hit whose
/// handle belongs to the grid-cell set wins. Hits on pieces or lines
/// never select a cell, even when they are closer to the camera: only
/// membership in `grid_cells` makes a hit eligible.
#[instrument(skip(backend, camera, grid_cells))]
pub fn pick_cell<B: RenderBackend>(
    backend: &B,
    camera: &Camera,
    viewport: Viewport,
    grid_cells: &[(SceneHandle, Position)],
    x: f32,
    y: f32,
) -> Option<Position> {
    let ndc = viewport.ndc(x, y);
    let hits = backend.cast_ray(camera, ndc);
    let picked = hits.iter().find_map(|hit| {
        grid_cells
            .iter()
            .find(|(handle, _)| *handle == hit.handle)
            .map(|(_, pos)| *pos)
    });
    debug!(?ndc, hits = hits.len(), ?picked, "pointer pick");
    picked
}
