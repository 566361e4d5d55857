// File: crates/ascent-core/src/lib.rs
// Summary: Core library entry point; exports the ride model, data sources, chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod legend;
pub mod marker;
pub mod raster;
pub mod ride;
pub mod scale;
pub mod scene;
pub mod source;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{Axis, AxisOrient};
pub use chart::{render_chart, render_error, try_render_rides, ChartText, Container, RenderOptions};
pub use dataset::Dataset;
pub use error::ChartError;
pub use hover::{tooltip, HoverState, Tooltip};
pub use legend::Legend;
pub use marker::{Marker, MarkerKind};
pub use raster::Rasterizer;
pub use ride::{format_time, parse_time, Ride};
pub use scale::{ChartScales, LinearScale, TimeScale};
pub use scene::{Body, ChartDocument};
pub use source::{Source, DEFAULT_URL};
pub use theme::Theme;
pub use types::Color;
