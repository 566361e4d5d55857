// File: crates/ascent-core/src/legend.rs
// Summary: Static colour key; independent of the dataset.

use crate::geometry::{Point, Size};
use crate::marker::MarkerKind;
use crate::scene::{Circle, Node, Stroke, Surface, Text};
use crate::theme::Theme;
use crate::types::{Color, LEGEND_HEIGHT, LEGEND_WIDTH};

const ROW_STEP: f32 = 25.0;
const SWATCH_RADIUS: f32 = 10.0;
const LABEL_SIZE: f32 = 16.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub color: Color,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Red for alleged riders first, then green.
    pub fn standard() -> Self {
        let entries = MarkerKind::ALL
            .iter()
            .map(|k| LegendEntry { color: k.color(), label: k.label() })
            .collect();
        Self { entries }
    }

    pub fn colors(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.color.css().into_owned()).collect()
    }

    pub fn to_surface(&self, origin: Point, theme: &Theme) -> Surface {
        let mut surface = Surface::new("legend", origin, Size::new(LEGEND_WIDTH, LEGEND_HEIGHT));
        surface.background = Some(theme.legend_background);

        let mut swatches = Vec::with_capacity(self.entries.len());
        let mut labels = Vec::with_capacity(self.entries.len());
        for (i, e) in self.entries.iter().enumerate() {
            let row = i as f32 * ROW_STEP;
            let mut c = Circle::new(Point::new(15.0, 15.0 + row), SWATCH_RADIUS, e.color);
            c.opacity = 0.8;
            c.stroke = Some(Stroke::new(Color::BLACK, 1.0));
            swatches.push(Node::Circle(c));
            labels.push(Node::Text(Text::new(Point::new(30.0, 20.0 + row), e.label, LABEL_SIZE, theme.legend_label)));
        }
        surface.nodes.extend(swatches);
        surface.nodes.extend(labels);
        surface
    }
}
