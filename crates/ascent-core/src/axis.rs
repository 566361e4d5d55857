// File: crates/ascent-core/src/axis.rs
// Summary: Axis model (ticks + labels) and its conversion into drawing-tree groups.

use crate::geometry::Point;
use crate::ride::format_time;
use crate::scale::{js_round, LinearScale, TimeScale, DEFAULT_TICKS};
use crate::scene::{Group, Line, Node, Stroke, Text, TextAnchor};
use crate::types::Color;

pub const TICK_SIZE: f32 = 6.0;
pub const TICK_PADDING: f32 = 3.0;
pub const LABEL_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: AxisOrient,
    pub translate: Point,
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Year axis along the bottom edge of the plot area, labels as integers.
    pub fn bottom_years(scale: &LinearScale, at_y: f32) -> Self {
        let ticks = scale
            .ticks(DEFAULT_TICKS)
            .into_iter()
            .map(|v| Tick { offset: scale.apply(v), label: format_year(v) })
            .collect();
        Self { id: "x-axis", orient: AxisOrient::Bottom, translate: Point::new(0.0, at_y), range: scale.range, ticks }
    }

    /// Time axis along the left edge, labels as MM:SS.
    pub fn left_times(scale: &TimeScale, at_x: f32) -> Self {
        let ticks = scale
            .ticks(DEFAULT_TICKS)
            .into_iter()
            .map(|t| Tick { offset: scale.apply(t), label: format_time(t) })
            .collect();
        Self { id: "y-axis", orient: AxisOrient::Left, translate: Point::new(at_x, 0.0), range: scale.range, ticks }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// `line` colours the domain and tick marks, `label` the tick text.
    pub fn to_node(&self, line: Color, label: Color) -> Node {
        let stroke = Stroke::new(line, 1.0);
        let mut group = Group::new(Some(self.id), self.translate);
        group.class = Some("axis");
        let (r0, r1) = self.range;

        // domain line with outer ticks at both ends
        let k = match self.orient { AxisOrient::Bottom => TICK_SIZE, AxisOrient::Left => -TICK_SIZE };
        let domain = match self.orient {
            AxisOrient::Bottom => [
                (Point::new(r0, k), Point::new(r0, 0.0)),
                (Point::new(r0, 0.0), Point::new(r1, 0.0)),
                (Point::new(r1, 0.0), Point::new(r1, k)),
            ],
            AxisOrient::Left => [
                (Point::new(k, r0), Point::new(0.0, r0)),
                (Point::new(0.0, r0), Point::new(0.0, r1)),
                (Point::new(0.0, r1), Point::new(k, r1)),
            ],
        };
        for (from, to) in domain {
            group.children.push(Node::Line(Line { from, to, stroke }));
        }

        for tick in &self.ticks {
            let mut g = Group::new(None, Point::ORIGIN);
            g.class = Some("tick");
            let (line, text) = match self.orient {
                AxisOrient::Bottom => {
                    g.translate = Point::new(tick.offset, 0.0);
                    (
                        Line { from: Point::ORIGIN, to: Point::new(0.0, TICK_SIZE), stroke },
                        Text::new(Point::new(0.0, TICK_SIZE + TICK_PADDING), &tick.label, LABEL_SIZE, label)
                            .anchored(TextAnchor::Middle)
                            .shifted(0.71),
                    )
                }
                AxisOrient::Left => {
                    g.translate = Point::new(0.0, tick.offset);
                    (
                        Line { from: Point::ORIGIN, to: Point::new(-TICK_SIZE, 0.0), stroke },
                        Text::new(Point::new(-(TICK_SIZE + TICK_PADDING), 0.0), &tick.label, LABEL_SIZE, label)
                            .anchored(TextAnchor::End)
                            .shifted(0.32),
                    )
                }
            };
            g.children.push(Node::Line(line));
            g.children.push(Node::Text(text));
            group.children.push(Node::Group(g));
        }
        Node::Group(group)
    }
}

/// Integer label; halves round up.
pub fn format_year(v: f64) -> String {
    js_round(v).to_string()
}
