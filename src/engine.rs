//! Game engine: the sole mutator of game state.
//!
//! Every state-mutating entry point re-synchronizes the scene before
//! returning, so the 3D representation is consistent with logical
//! state by the time the next frame is presented. The render loop
//! itself runs externally and only reads scene objects.

use crate::backend::{RenderBackend, Viewport};
use crate::camera::Camera;
use crate::input;
use crate::layout::BoardLayout;
use crate::palette::{Palette, Theme};
use crate::position::Position;
use crate::rules;
use crate::scene::SceneSynchronizer;
use crate::types::{Board, GameStatus, Player, Score, Square};
use tracing::{debug, info, instrument};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Status published to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    /// Game in progress; the given player moves next.
    NextPlayer(Player),
    /// The given player won the round.
    Winner(Player),
    /// The round ended in a draw.
    Draw,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLine::NextPlayer(player) => write!(f, "Next player: {player}"),
            StatusLine::Winner(player) => write!(f, "Winner: {player}!"),
            StatusLine::Draw => write!(f, "Game: Draw!"),
        }
    }
}

/// Two-player game engine driving board state, scores, theme, and the
/// 3D scene.
///
/// All mutations run synchronously on the caller's thread; the engine
/// assumes serialized input callbacks and is not `Sync`-shared.
#[derive(Debug)]
pub struct GameEngine<B: RenderBackend> {
    scene: SceneSynchronizer<B>,
    camera: Camera,
    viewport: Option<Viewport>,
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Position>,
    score: Score,
    theme: Theme,
}

impl<B: RenderBackend> GameEngine<B> {
    /// Creates an engine over the given backend with the default board
    /// layout and dark theme, and builds the initial empty scene.
    pub fn new(backend: B) -> Self {
        Self::with_layout(backend, BoardLayout::default())
    }

    /// Creates an engine with a custom board layout.
    pub fn with_layout(backend: B, layout: BoardLayout) -> Self {
        let mut engine = Self {
            scene: SceneSynchronizer::new(backend, layout),
            camera: Camera::new(),
            viewport: None,
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            score: Score::new(),
            theme: Theme::Dark,
        };
        engine.rebuild_scene();
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  State transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at the given position.
    ///
    /// On success the turn flips, or the game transitions to a
    /// terminal result; a win credits the winner's score exactly once.
    /// The scene is re-synced before returning.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a terminal result and
    /// [`MoveError::SquareOccupied`] for an occupied square; the
    /// rejected move changes no state.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.status = rules::evaluate(&self.board);

        match self.status {
            GameStatus::Won(winner, _) => {
                self.score.record_win(winner);
                info!(%winner, "round won");
            }
            GameStatus::Draw => info!("round drawn"),
            GameStatus::InProgress => self.to_move = self.to_move.opponent(),
        }

        self.scene
            .sync_pieces(&self.board, &self.status, Palette::of(self.theme));
        Ok(self.status)
    }

    /// Resolves a pointer-down event to a cell pick and applies the
    /// move if one is picked and legal.
    ///
    /// Returns the position the move was applied at. Events before the
    /// first resize notification, picks that miss the grid, and
    /// illegal moves are all quiet no-ops.
    #[instrument(skip(self))]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<Position> {
        let viewport = match self.viewport {
            Some(viewport) => viewport,
            None => {
                debug!("pointer event before first resize, dropped");
                return None;
            }
        };
        if self.status.is_terminal() {
            return None;
        }

        let cells = self.scene.grid_cells();
        let pos = input::pick_cell(self.scene.backend(), &self.camera, viewport, &cells, x, y)?;
        match self.make_move(pos) {
            Ok(_) => Some(pos),
            Err(error) => {
                debug!(%error, "picked move rejected");
                None
            }
        }
    }

    /// Starts a new round: board, turn, and result reset to initial,
    /// scores kept. The grid is rebuilt and the camera returns to its
    /// default vantage point.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        info!("starting new round");
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
        self.rebuild_scene();
        self.camera.reset();
    }

    /// Clears both score counters, then starts a new round.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        info!("resetting scores and round");
        self.score.reset();
        self.new_round();
    }

    /// Flips the theme and rebuilds grid and pieces with the new
    /// palette. Board, turn, result, and scores are unaffected.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = %self.theme, "theme toggled");
        self.rebuild_scene();
    }

    /// Returns the camera to its default vantage point. Game state is
    /// untouched.
    pub fn reset_view(&mut self) {
        self.camera.reset();
    }

    /// Records new viewport dimensions, updating the camera aspect and
    /// notifying the backend. Repeating the same dimensions is a no-op
    /// beyond the first call.
    #[instrument(skip(self))]
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if self.viewport == Some(viewport) {
            return;
        }
        self.viewport = Some(viewport);
        self.camera.set_aspect(viewport.aspect());
        self.scene.backend_mut().notify_resize(viewport);
    }

    /// Rebuilds the grid for the current theme and re-syncs pieces.
    /// Grid first: pieces are positioned relative to the grid's
    /// coordinate system.
    fn rebuild_scene(&mut self) {
        let palette = Palette::of(self.theme);
        self.scene.rebuild_grid(palette);
        self.scene.sync_pieces(&self.board, &self.status, palette);
    }

    // ─────────────────────────────────────────────────────────────
    //  Published state
    // ─────────────────────────────────────────────────────────────

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Display status for the presentation layer.
    pub fn status_line(&self) -> StatusLine {
        match self.status {
            GameStatus::InProgress => StatusLine::NextPlayer(self.to_move),
            GameStatus::Won(winner, _) => StatusLine::Winner(winner),
            GameStatus::Draw => StatusLine::Draw,
        }
    }

    /// Round-win counters for the current match.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The camera, for the external controller and render loop.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for the external orbit/pan controller.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The scene synchronizer, for the render loop's read access.
    pub fn scene(&self) -> &SceneSynchronizer<B> {
        &self.scene
    }
}
