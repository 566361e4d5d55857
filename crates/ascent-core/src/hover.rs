// File: crates/ascent-core/src/hover.rs
// Summary: Pointer interaction state and the tooltip positioning routine that reads it.

use crate::dataset::Dataset;
use crate::geometry::Point;
use crate::ride::Ride;
use crate::scene::ChartBody;

/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET: f32 = 20.0;
pub const TOOLTIP_OPACITY: f32 = 0.8;

/// What is hovered right now. Updated only by pointer handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
    hovered: Option<usize>,
    pointer: Option<Point>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Last pointer position in page coordinates.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Pointer moved to `page_point`. Returns true when the tooltip needs redrawing.
    pub fn pointer_move(&mut self, body: &ChartBody, page_point: Point) -> bool {
        let local = page_point.minus(body.plot.origin);
        // last drawn marker is on top
        let hit = body.markers.iter().rev().find(|m| m.contains(local)).map(|m| m.index);

        let changed = hit != self.hovered || (hit.is_some() && self.pointer != Some(page_point));
        self.hovered = hit;
        self.pointer = Some(page_point);
        changed
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.hovered.is_some();
        self.hovered = None;
        self.pointer = None;
        changed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub lines: Vec<String>,
    /// Top-left corner in page coordinates.
    pub anchor: Point,
    pub opacity: f32,
    pub data_year: i32,
    pub data_time: String,
}

/// Tooltip for the hovered ride, placed next to the pointer.
pub fn tooltip(state: &HoverState, dataset: &Dataset) -> Option<Tooltip> {
    let ride = dataset.get(state.hovered?)?;
    let pointer = state.pointer?;
    Some(Tooltip {
        lines: tooltip_lines(ride),
        anchor: pointer.offset(TOOLTIP_OFFSET, TOOLTIP_OFFSET),
        opacity: TOOLTIP_OPACITY,
        data_year: ride.year,
        data_time: ride.formatted_time(),
    })
}

/// Tooltip body; the note line only appears for rides with an allegation.
pub fn tooltip_lines(ride: &Ride) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", ride.name),
        format!("Nationality: {}", ride.nationality),
        format!("Year: {}", ride.year),
        format!("Time: {}", ride.formatted_time()),
    ];
    if let Some(note) = ride.doping_note() {
        lines.push(format!("Note: {note}"));
    }
    lines
}
