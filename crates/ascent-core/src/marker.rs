// File: crates/ascent-core/src/marker.rs
// Summary: Marker categories (colour + legend label) and the per-ride hit-test entry.

use crate::geometry::Point;
use crate::ride::Ride;
use crate::types::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Alleged,
    Clean,
}

impl MarkerKind {
    /// Legend order.
    pub const ALL: [MarkerKind; 2] = [MarkerKind::Alleged, MarkerKind::Clean];

    pub fn for_ride(ride: &Ride) -> Self {
        if ride.has_doping() { MarkerKind::Alleged } else { MarkerKind::Clean }
    }

    pub fn color(&self) -> Color {
        match self {
            MarkerKind::Alleged => Color::RED,
            MarkerKind::Clean => Color::GREEN,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarkerKind::Alleged => "Riders WITH doping allegations",
            MarkerKind::Clean => "Riders WITHOUT doping allegations",
        }
    }
}

/// One plotted ride, in plot-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Position of the ride in the dataset.
    pub index: usize,
    pub center: Point,
    pub radius: f32,
    pub kind: MarkerKind,
}

impl Marker {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance_sq(p) <= self.radius * self.radius
    }
}
