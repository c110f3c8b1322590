//! Two-player 3D tic-tac-toe core.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection and move legality over a
//!   9-cell board
//! - **Scene**: a synchronizer that owns every tagged 3D object and
//!   reconciles the scene with abstract board state on each transition
//! - **Input**: pointer events resolved to board cells by ray casting
//!   against the grid-cell objects
//! - **Engine**: the sole mutator, orchestrating rules, scene, and
//!   input, and publishing status, scores, and theme
//!
//! Rendering itself (projection, lighting, presentation) is an
//! external collaborator behind the [`RenderBackend`] trait; the
//! bundled [`HeadlessBackend`] implements it without a GPU.
//!
//! # Example
//!
//! ```
//! use tictactoe3d::{GameEngine, HeadlessBackend, Position};
//!
//! let mut engine = GameEngine::new(HeadlessBackend::new());
//! engine.handle_resize(1280, 720);
//! engine.make_move(Position::Center)?;
//! assert_eq!(engine.status_line().to_string(), "Next player: O");
//! # Ok::<(), tictactoe3d::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod backend;
mod camera;
mod engine;
mod headless;
mod input;
mod layout;
mod palette;
mod position;
mod rules;
mod scene;
mod types;

pub use backend::{
    CrossBarsParams, LineParams, PlaneParams, RayHit, RenderBackend, RingParams, SceneHandle,
    Viewport,
};
pub use camera::{Camera, Ray};
pub use engine::{GameEngine, MoveError, StatusLine};
pub use headless::HeadlessBackend;
pub use input::pick_cell;
pub use layout::BoardLayout;
pub use palette::{Color, Palette, Theme, WINNING_LINE_COLOR};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_full, is_legal};
pub use scene::{SceneObject, SceneRole, SceneSynchronizer};
pub use types::{Board, GameStatus, Player, Score, Square, WinLine};
