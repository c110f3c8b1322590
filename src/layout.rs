//! Board geometry: cell placement and piece dimensions in scene space.
//!
//! The board lies in the x/y plane centered on the origin. Cells are
//! addressed in row-major order, with rows running top (+y) to bottom
//! (-y) and columns left (-x) to right (+x).

use crate::position::Position;
use glam::{Vec2, Vec3};

/// Height of piece meshes above the board plane.
pub const PIECE_Z: f32 = 0.5;
/// Height of the winning-line overlay, above the pieces.
pub const WINNING_LINE_Z: f32 = 0.6;
/// Depth of the base plane, behind the cell planes.
pub const BASE_PLANE_Z: f32 = -0.1;
/// Extra width of the base plane beyond the board extent.
pub const BASE_PLANE_MARGIN: f32 = 2.0;
/// Radius of the cylindrical bars forming an X piece.
pub const X_BAR_RADIUS: f32 = 0.2;
/// Center radius of the torus forming an O piece.
pub const O_RING_RADIUS: f32 = 0.8;
/// Tube radius of the torus forming an O piece.
pub const O_RING_TUBE: f32 = 0.2;

/// Cell sizing for the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct BoardLayout {
    /// Side length of one cell plane.
    cell_size: f32,
    /// Gap between adjacent cells.
    gap: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            cell_size: 2.0,
            gap: 0.1,
        }
    }
}

impl BoardLayout {
    /// Side length of one cell plane.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Center of the given cell on the board plane.
    pub fn cell_center(&self, pos: Position) -> Vec2 {
        let pitch = self.cell_size + self.gap;
        Vec2::new(
            (pos.col() as f32 - 1.0) * pitch,
            (1.0 - pos.row() as f32) * pitch,
        )
    }

    /// Total board side length: three cells plus two gaps.
    pub fn extent(&self) -> f32 {
        self.cell_size * 3.0 + self.gap * 2.0
    }

    /// Length of the bars forming an X piece.
    pub fn x_bar_length(&self) -> f32 {
        self.cell_size * 1.2
    }

    /// Endpoints of the four boundary lines separating the cells:
    /// two vertical, two horizontal, on the board plane.
    pub fn frame_lines(&self) -> [[Vec3; 2]; 4] {
        let pitch = self.cell_size + self.gap;
        let half = self.extent() / 2.0;
        [
            [Vec3::new(-pitch, half, 0.0), Vec3::new(-pitch, -half, 0.0)],
            [Vec3::new(pitch, half, 0.0), Vec3::new(pitch, -half, 0.0)],
            [Vec3::new(-half, -pitch, 0.0), Vec3::new(half, -pitch, 0.0)],
            [Vec3::new(-half, pitch, 0.0), Vec3::new(half, pitch, 0.0)],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_cell_at_origin() {
        let layout = BoardLayout::default();
        assert_eq!(layout.cell_center(Position::Center), Vec2::ZERO);
    }

    #[test]
    fn test_corner_cells() {
        let layout = BoardLayout::default();
        let top_left = layout.cell_center(Position::TopLeft);
        assert!((top_left.x - -2.1).abs() < 1e-6);
        assert!((top_left.y - 2.1).abs() < 1e-6);

        let bottom_right = layout.cell_center(Position::BottomRight);
        assert!((bottom_right.x - 2.1).abs() < 1e-6);
        assert!((bottom_right.y - -2.1).abs() < 1e-6);
    }

    #[test]
    fn test_extent() {
        let layout = BoardLayout::default();
        assert!((layout.extent() - 6.2).abs() < 1e-6);
    }

    #[test]
    fn test_frame_lines_span_board() {
        let layout = BoardLayout::default();
        let half = layout.extent() / 2.0;
        for [start, end] in layout.frame_lines() {
            let length = (end - start).length();
            assert!((length - half * 2.0).abs() < 1e-6);
        }
    }
}
