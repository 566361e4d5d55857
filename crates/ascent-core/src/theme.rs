// File: crates/ascent-core/src/theme.rs
// Summary: Light/Dark theming for page, axes, legend and tooltip colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub page_background: Color,
    pub heading: Color,
    pub link: Color,
    pub plot_background: Color,
    pub plot_border: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub legend_background: Color,
    pub legend_label: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
    pub error_border: Color,
    pub error_text: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            page_background: Color::rgb(0x2b, 0x2d, 0x42),
            heading: Color::LINEN,
            link: Color::rgb(0xef, 0x83, 0x54),
            plot_background: Color::LINEN,
            plot_border: Color::LINEN,
            axis_line: Color::BLACK,
            axis_label: Color::BLACK,
            legend_background: Color::LINEN,
            legend_label: Color::BLACK,
            tooltip_background: Color::rgb(0x1d, 0x35, 0x57),
            tooltip_text: Color::LINEN,
            error_border: Color::RED,
            error_text: Color::LINEN,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            page_background: Color::rgb(250, 250, 252),
            heading: Color::rgb(20, 20, 30),
            link: Color::rgb(32, 120, 200),
            plot_background: Color::WHITE,
            plot_border: Color::rgb(60, 60, 70),
            axis_line: Color::rgb(60, 60, 70),
            axis_label: Color::rgb(20, 20, 30),
            legend_background: Color::WHITE,
            legend_label: Color::rgb(20, 20, 30),
            tooltip_background: Color::rgb(40, 40, 48),
            tooltip_text: Color::WHITE,
            error_border: Color::rgb(200, 60, 60),
            error_text: Color::rgb(20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
