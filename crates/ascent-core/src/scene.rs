// File: crates/ascent-core/src/scene.rs
// Summary: Renderer-agnostic drawing tree returned by chart construction.
// Notes:
// - Coordinates inside a `Surface` are local to it; `Surface::origin` places it on the page.
// - Backends (svg.rs, raster.rs) only read this tree; nothing here draws.

use crate::geometry::{Point, Size};
use crate::marker::Marker;
use crate::scale::ChartScales;
use crate::theme::Theme;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn css(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub pos: Point,
    pub content: String,
    pub size: f32,
    pub fill: Color,
    pub anchor: TextAnchor,
    /// Baseline shift in ems, applied after `pos`.
    pub dy_em: f32,
}

impl Text {
    pub fn new(pos: Point, content: impl Into<String>, size: f32, fill: Color) -> Self {
        Self { pos, content: content.into(), size, fill, anchor: TextAnchor::Start, dy_em: 0.0 }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn shifted(mut self, dy_em: f32) -> Self {
        self.dy_em = dy_em;
        self
    }

    /// Baseline position after applying `dy_em`.
    pub fn baseline(&self) -> Point {
        self.pos.offset(0.0, self.dy_em * self.size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub fill: Color,
    pub opacity: f32,
    pub stroke: Option<Stroke>,
    pub class: Option<&'static str>,
    /// `data-*` attributes, without the prefix.
    pub data: Vec<(&'static str, String)>,
    /// Hover text for document outputs.
    pub title: Option<String>,
}

impl Circle {
    pub fn new(center: Point, radius: f32, fill: Color) -> Self {
        Self { center, radius, fill, opacity: 1.0, stroke: None, class: None, data: Vec::new(), title: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub id: Option<String>,
    pub class: Option<&'static str>,
    pub translate: Point,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(id: Option<&str>, translate: Point) -> Self {
        Self { id: id.map(str::to_string), class: None, translate, children: Vec::new() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Group(Group),
    Circle(Circle),
    Line(Line),
    Text(Text),
}

impl Node {
    /// Depth-first visit in draw order.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        if let Node::Group(g) = self {
            for c in &g.children {
                c.walk(f);
            }
        }
    }
}

/// A fixed-size drawing area (an `<svg>` element in document outputs).
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub id: String,
    pub origin: Point,
    pub size: Size,
    pub background: Option<Color>,
    pub border: Option<Stroke>,
    pub nodes: Vec<Node>,
}

impl Surface {
    pub fn new(id: impl Into<String>, origin: Point, size: Size) -> Self {
        Self { id: id.into(), origin, size, background: None, border: None, nodes: Vec::new() }
    }

    pub fn walk<'a>(&'a self, mut f: impl FnMut(&'a Node)) {
        for n in &self.nodes {
            n.walk(&mut f);
        }
    }

    pub fn circles(&self) -> Vec<&Circle> {
        let mut out = Vec::new();
        self.walk(|n| if let Node::Circle(c) = n { out.push(c) });
        out
    }

    pub fn texts(&self) -> Vec<&Text> {
        let mut out = Vec::new();
        self.walk(|n| if let Node::Text(t) = n { out.push(t) });
        out
    }

    pub fn find_group(&self, id: &str) -> Option<&Group> {
        let mut found = None;
        self.walk(|n| {
            if let Node::Group(g) = n {
                if found.is_none() && g.id.as_deref() == Some(id) {
                    found = Some(g);
                }
            }
        });
        found
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// Page heading, centred on `anchor.x` with its baseline at `anchor.y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Heading {
    pub id: &'static str,
    pub level: u8,
    pub text: String,
    pub link: Option<Link>,
    pub anchor: Point,
    pub size: f32,
    pub color: Color,
}

impl Heading {
    pub fn full_text(&self) -> String {
        match &self.link {
            Some(l) => format!("{}{}", self.text, l.text),
            None => self.text.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartBody {
    pub plot: Surface,
    pub legend: Surface,
    /// Hit-test table in plot-local coordinates, in draw order.
    pub markers: Vec<Marker>,
    pub scales: ChartScales,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorBody {
    pub message: String,
    pub panel: Surface,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Chart(ChartBody),
    Error(ErrorBody),
}

/// Everything a backend needs to draw one page.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDocument {
    pub container_id: String,
    pub size: Size,
    pub theme: Theme,
    pub headings: Vec<Heading>,
    pub body: Body,
}

impl ChartDocument {
    pub fn chart(&self) -> Option<&ChartBody> {
        match &self.body {
            Body::Chart(c) => Some(c),
            Body::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.body {
            Body::Error(e) => Some(e.message.as_str()),
            Body::Chart(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, Body::Error(_))
    }

    /// Surfaces in page draw order.
    pub fn surfaces(&self) -> Vec<&Surface> {
        match &self.body {
            Body::Chart(c) => vec![&c.plot, &c.legend],
            Body::Error(e) => vec![&e.panel],
        }
    }

    pub fn heading(&self, id: &str) -> Option<&Heading> {
        self.headings.iter().find(|h| h.id == id)
    }
}
