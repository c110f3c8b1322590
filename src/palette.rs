//! Theme palettes for scene materials.
//!
//! Materials are theme-specific: switching themes rebuilds objects
//! rather than recoloring them, so a palette is looked up once per
//! rebuild and passed in explicitly.

use serde::{Deserialize, Serialize};

/// An RGB color, components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Creates a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

/// Accent color of the winning-line overlay, independent of theme.
pub const WINNING_LINE_COLOR: Color = Color::from_hex(0xfff000);

/// Visual theme of the scene.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Theme {
    /// Dark backdrop with muted board colors.
    Dark,
    /// Light backdrop with pale board colors.
    Light,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Fixed color assignments for one theme.
#[derive(Debug, Clone, Copy, PartialEq, derive_getters::Getters)]
pub struct Palette {
    /// Scene background.
    background: Color,
    /// Cell plane material.
    cell: Color,
    /// Boundary line material.
    line: Color,
    /// Base plane material.
    base: Color,
    /// X piece material.
    x_piece: Color,
    /// O piece material.
    o_piece: Color,
}

const DARK: Palette = Palette {
    background: Color::from_hex(0x1a1a2e),
    cell: Color::from_hex(0x2c3e50),
    line: Color::from_hex(0xecf0f1),
    base: Color::from_hex(0x34495e),
    x_piece: Color::from_hex(0xe74c3c),
    o_piece: Color::from_hex(0x3498db),
};

const LIGHT: Palette = Palette {
    background: Color::from_hex(0xe0f7fa),
    cell: Color::from_hex(0xbbdefb),
    line: Color::from_hex(0x424242),
    base: Color::from_hex(0x90a4ae),
    x_piece: Color::from_hex(0xc0392b),
    o_piece: Color::from_hex(0x2980b9),
};

impl Palette {
    /// Pure palette lookup for a theme.
    pub fn of(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}
