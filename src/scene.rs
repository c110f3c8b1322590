//! Scene-object ownership and reconciliation.
//!
//! The synchronizer is the sole owner of every tagged scene object.
//! On each state transition it disposes stale objects and creates
//! fresh ones, so the 3D scene always matches the abstract board
//! state and no graphics resources outlive their objects.

use crate::backend::{
    CrossBarsParams, LineParams, PlaneParams, RenderBackend, RingParams, SceneHandle,
};
use crate::layout::{
    BoardLayout, BASE_PLANE_MARGIN, BASE_PLANE_Z, O_RING_RADIUS, O_RING_TUBE, PIECE_Z,
    WINNING_LINE_Z, X_BAR_RADIUS,
};
use crate::palette::{Palette, WINNING_LINE_COLOR};
use crate::position::Position;
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument, warn};

/// Logical role of a tagged scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRole {
    /// One of the 9 pickable cell planes.
    GridCell(Position),
    /// Structural grid geometry: boundary lines and the base plane.
    GridFrame,
    /// A placed X or O piece.
    Piece(Position),
    /// The accent line through the three winning cells.
    WinningLine,
}

impl SceneRole {
    /// True for grid geometry rebuilt on theme or round changes.
    pub fn is_grid(&self) -> bool {
        matches!(self, SceneRole::GridCell(_) | SceneRole::GridFrame)
    }

    /// True for objects recreated on every board change.
    pub fn is_board_state(&self) -> bool {
        matches!(self, SceneRole::Piece(_) | SceneRole::WinningLine)
    }
}

/// A live scene object: backend handle plus its logical role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneObject {
    handle: SceneHandle,
    role: SceneRole,
}

impl SceneObject {
    /// Backend handle of this object.
    pub fn handle(&self) -> SceneHandle {
        self.handle
    }

    /// Logical role of this object.
    pub fn role(&self) -> SceneRole {
        self.role
    }
}

/// Owns and reconciles all tagged scene objects.
///
/// No other component may add or remove tagged objects; picking reads
/// the grid-cell handles through [`SceneSynchronizer::grid_cells`].
#[derive(Debug)]
pub struct SceneSynchronizer<B> {
    backend: B,
    layout: BoardLayout,
    objects: Vec<SceneObject>,
}

impl<B: RenderBackend> SceneSynchronizer<B> {
    /// Creates a synchronizer over the given backend. The scene is
    /// empty until the first [`rebuild_grid`](Self::rebuild_grid).
    pub fn new(backend: B, layout: BoardLayout) -> Self {
        Self {
            backend,
            layout,
            objects: Vec::new(),
        }
    }

    /// Read access to the backend, for picking.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend, for resize notifications.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The board layout objects are placed with.
    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    /// Disposes every grid and winning-line object, then constructs
    /// the 9 tagged cell planes, the 4 boundary lines, and the base
    /// plane with the given palette.
    ///
    /// Must run on every theme change and round start: cell materials
    /// are theme-specific, so old instances are destroyed and replaced
    /// rather than recolored in place.
    #[instrument(skip(self, palette))]
    pub fn rebuild_grid(&mut self, palette: &Palette) {
        self.retire(|role| role.is_grid() || role == SceneRole::WinningLine);

        let cell = self.layout.cell_size();
        for pos in Position::ALL {
            let center = self.layout.cell_center(pos);
            let handle = self.backend.create_plane(PlaneParams::new(
                cell,
                cell,
                center.extend(0.0),
                *palette.cell(),
            ));
            self.objects.push(SceneObject {
                handle,
                role: SceneRole::GridCell(pos),
            });
        }

        for [start, end] in self.layout.frame_lines() {
            let handle = self
                .backend
                .create_line(LineParams::new(vec![start, end], *palette.line()));
            self.objects.push(SceneObject {
                handle,
                role: SceneRole::GridFrame,
            });
        }

        let base_size = self.layout.extent() + BASE_PLANE_MARGIN;
        let handle = self.backend.create_plane(PlaneParams::new(
            base_size,
            base_size,
            glam::Vec3::new(0.0, 0.0, BASE_PLANE_Z),
            *palette.base(),
        ));
        self.objects.push(SceneObject {
            handle,
            role: SceneRole::GridFrame,
        });

        debug!(objects = self.objects.len(), "grid rebuilt");
    }

    /// Disposes every piece and winning-line object, then recreates
    /// pieces for each occupied square and, on a win, the accent line
    /// through the three winning cells.
    ///
    /// Requires the grid for the current theme to be in place, since
    /// pieces share the grid's coordinate system.
    #[instrument(skip(self, board, status, palette))]
    pub fn sync_pieces(&mut self, board: &Board, status: &GameStatus, palette: &Palette) {
        if self.grid_cell_count() != 9 {
            warn!(
                grid_cells = self.grid_cell_count(),
                "syncing pieces without a complete grid"
            );
        }

        self.retire(|role| role.is_board_state());

        for pos in Position::ALL {
            let player = match board.get(pos) {
                Square::Occupied(player) => player,
                Square::Empty => continue,
            };
            let center = self.layout.cell_center(pos).extend(PIECE_Z);
            let handle = match player {
                Player::X => self.backend.create_cross_bars(CrossBarsParams::new(
                    X_BAR_RADIUS,
                    self.layout.x_bar_length(),
                    center,
                    *palette.x_piece(),
                )),
                Player::O => self.backend.create_ring(RingParams::new(
                    O_RING_RADIUS,
                    O_RING_TUBE,
                    center,
                    *palette.o_piece(),
                )),
            };
            self.objects.push(SceneObject {
                handle,
                role: SceneRole::Piece(pos),
            });
        }

        if let GameStatus::Won(_, line) = status {
            let points = line
                .iter()
                .map(|pos| self.layout.cell_center(*pos).extend(WINNING_LINE_Z))
                .collect();
            let handle = self
                .backend
                .create_line(LineParams::new(points, WINNING_LINE_COLOR));
            self.objects.push(SceneObject {
                handle,
                role: SceneRole::WinningLine,
            });
        }

        debug!(
            pieces = self.piece_count(),
            winning_line = self.winning_line_count(),
            "pieces synced"
        );
    }

    /// The 9 pickable cell handles with their positions.
    ///
    /// This is the explicit set ray picking intersects against; piece
    /// and line handles are never part of it.
    pub fn grid_cells(&self) -> Vec<(SceneHandle, Position)> {
        self.objects
            .iter()
            .filter_map(|obj| match obj.role {
                SceneRole::GridCell(pos) => Some((obj.handle, pos)),
                _ => None,
            })
            .collect()
    }

    /// All live tagged objects.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Count of live grid-cell objects.
    pub fn grid_cell_count(&self) -> usize {
        self.count(|role| matches!(role, SceneRole::GridCell(_)))
    }

    /// Count of live piece objects.
    pub fn piece_count(&self) -> usize {
        self.count(|role| matches!(role, SceneRole::Piece(_)))
    }

    /// Count of live winning-line objects.
    pub fn winning_line_count(&self) -> usize {
        self.count(|role| matches!(role, SceneRole::WinningLine))
    }

    fn count(&self, pred: impl Fn(&SceneRole) -> bool) -> usize {
        self.objects.iter().filter(|obj| pred(&obj.role)).count()
    }

    /// Disposes and forgets every object matching the predicate.
    /// Resources are released before the handle is dropped from the
    /// active set.
    fn retire(&mut self, pred: impl Fn(SceneRole) -> bool) {
        let (stale, keep): (Vec<_>, Vec<_>) =
            self.objects.drain(..).partition(|obj| pred(obj.role));
        for obj in &stale {
            self.backend.dispose(obj.handle);
        }
        self.objects = keep;
    }
}
