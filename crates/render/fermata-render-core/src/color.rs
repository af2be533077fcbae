//! Straight-alpha RGBA color and the frame palette.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Hold markers by type.
    pub const START_HAND: Color = Color::rgb(0x22, 0xC5, 0x5E);
    pub const START_FOOT: Color = Color::rgb(0x3B, 0x82, 0xF6);
    pub const FINISH_HOLD: Color = Color::rgb(0xEF, 0x44, 0x44);
    pub const CLIMBING_HOLD: Color = Color::rgb(0xF9, 0x73, 0x16);

    /// Skeleton strokes; bright for visibility over photographs.
    pub const SKELETON: Color = Color::rgb(0xFF, 0xFF, 0x00);

    /// Step label text and its drop shadow.
    pub const LABEL: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const LABEL_SHADOW: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Blank-frame background when no wall image is set.
    pub const BACKGROUND: Color = Color::rgb(0xFF, 0xFF, 0xFF);
}
