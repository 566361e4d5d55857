// File: crates/ascent-core/src/types.rs
// Summary: Shared constants (sizes, paddings) and the named-colour type used by the drawing tree.

use std::borrow::Cow;

/// Plot surface width in pixels.
pub const WIDTH: u32 = 1100;
/// Plot surface height in pixels.
pub const HEIGHT: u32 = 650;
/// Uniform padding between the plot edge and the axes.
pub const PADDING: u32 = 50;

/// Legend surface size.
pub const LEGEND_WIDTH: u32 = 250;
pub const LEGEND_HEIGHT: u32 = 60;

/// RGB colour that remembers its CSS keyword when it was built from one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    name: Option<&'static str>,
}

impl Color {
    pub const RED: Color = Color::named("red", 255, 0, 0);
    pub const GREEN: Color = Color::named("green", 0, 128, 0);
    pub const BLACK: Color = Color::named("black", 0, 0, 0);
    pub const WHITE: Color = Color::named("white", 255, 255, 255);
    pub const LINEN: Color = Color::named("linen", 250, 240, 230);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, name: None }
    }

    pub const fn named(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, name: Some(name) }
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// CSS value: the keyword when known, `#rrggbb` otherwise.
    pub fn css(&self) -> Cow<'static, str> {
        match self.name {
            Some(n) => Cow::Borrowed(n),
            None => Cow::Owned(format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)),
        }
    }
}
