// File: crates/ascent-core/src/chart.rs
// Summary: Render options and the page builder that turns a dataset into an owned ChartDocument.

use tracing::debug;

use crate::axis::Axis;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::{Point, Size};
use crate::hover::tooltip_lines;
use crate::legend::Legend;
use crate::marker::{Marker, MarkerKind};
use crate::ride::Ride;
use crate::scale::ChartScales;
use crate::scene::{
    Body, ChartBody, ChartDocument, Circle, ErrorBody, Heading, Link, Node, Stroke, Surface, Text, TextAnchor,
};
use crate::theme::Theme;
use crate::types::{Color, HEIGHT, LEGEND_HEIGHT, LEGEND_WIDTH, PADDING, WIDTH};

const PAGE_MARGIN: f32 = 20.0;
const LEGEND_GAP: f32 = 16.0;
const ERROR_PANEL_HEIGHT: u32 = 120;

/// Fixed page copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartText {
    pub title: String,
    pub subtitle: String,
    pub credit_prefix: String,
    pub credit_author: String,
    pub credit_href: String,
}

impl Default for ChartText {
    fn default() -> Self {
        Self {
            title: "Doping in Professional Bicycle Racing".into(),
            subtitle: "Fastest times up Alpe d'Huez".into(),
            credit_prefix: "Created by ".into(),
            credit_author: "Odakris".into(),
            credit_href: "https://github.com/odakris?tab=repositories".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Plot surface size.
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub marker_radius: f32,
    pub marker_opacity: f32,
    pub theme: Theme,
    pub text: ChartText,
    /// Raster backends skip text when false (deterministic images).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            marker_radius: 8.0,
            marker_opacity: 0.6,
            theme: Theme::dark(),
            text: ChartText::default(),
            draw_labels: true,
        }
    }
}

/// The page element the chart is mounted into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub id: String,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new("container")
    }
}

struct PageLayout {
    width: u32,
    body_top: f32,
}

fn headings(opts: &RenderOptions) -> (Vec<Heading>, PageLayout) {
    let page_width = opts.width + 2 * PAGE_MARGIN as u32;
    let cx = page_width as f32 * 0.5;
    let theme = &opts.theme;
    let text = &opts.text;

    let title_y = PAGE_MARGIN + 32.0;
    let subtitle_y = title_y + 36.0;
    let credit_y = subtitle_y + 26.0;

    let hs = vec![
        Heading {
            id: "title",
            level: 1,
            text: text.title.clone(),
            link: None,
            anchor: Point::new(cx, title_y),
            size: 32.0,
            color: theme.heading,
        },
        Heading {
            id: "subtitle",
            level: 2,
            text: text.subtitle.clone(),
            link: None,
            anchor: Point::new(cx, subtitle_y),
            size: 24.0,
            color: theme.heading,
        },
        Heading {
            id: "credit",
            level: 5,
            text: text.credit_prefix.clone(),
            link: Some(Link { text: text.credit_author.clone(), href: text.credit_href.clone() }),
            anchor: Point::new(cx, credit_y),
            size: 13.0,
            color: theme.heading,
        },
    ];
    (hs, PageLayout { width: page_width, body_top: credit_y + 18.0 })
}

/// Build the full page for `dataset`. Pure: the returned tree owns everything it draws.
pub fn render_chart(container: &Container, dataset: &Dataset, opts: &RenderOptions) -> ChartDocument {
    let (headings, layout) = headings(opts);
    let scales = ChartScales::from_dataset(dataset, opts);

    let plot_origin = Point::new(PAGE_MARGIN, layout.body_top);
    let mut plot = Surface::new("scatterplot", plot_origin, Size::new(opts.width, opts.height));
    plot.background = Some(opts.theme.plot_background);
    plot.border = Some(Stroke::new(opts.theme.plot_border, 2.0));

    let markers = build_markers(dataset.rides(), &scales, opts);
    for m in &markers {
        let ride = &dataset.rides()[m.index];
        plot.nodes.push(Node::Circle(marker_circle(m, ride, opts)));
    }

    let h = opts.height as f32;
    let p = opts.padding as f32;
    plot.nodes.push(Axis::bottom_years(&scales.x, h - p).to_node(opts.theme.axis_line, opts.theme.axis_label));
    plot.nodes.push(Axis::left_times(&scales.y, p).to_node(opts.theme.axis_line, opts.theme.axis_label));

    let legend_origin = Point::new(
        (layout.width - LEGEND_WIDTH) as f32 * 0.5,
        plot_origin.y + opts.height as f32 + LEGEND_GAP,
    );
    let legend = Legend::standard().to_surface(legend_origin, &opts.theme);
    let page_height = (legend_origin.y + LEGEND_HEIGHT as f32 + PAGE_MARGIN).ceil() as u32;

    debug!(markers = markers.len(), x_domain = ?scales.x.domain, "chart document built");
    ChartDocument {
        container_id: container.id.clone(),
        size: Size::new(layout.width, page_height),
        theme: opts.theme,
        headings,
        body: Body::Chart(ChartBody { plot, legend, markers, scales }),
    }
}

/// Same as `render_chart` for an unchecked list; fails on an empty one.
pub fn try_render_rides(container: &Container, rides: Vec<Ride>, opts: &RenderOptions) -> Result<ChartDocument> {
    let dataset = Dataset::new(rides)?;
    Ok(render_chart(container, &dataset, opts))
}

/// Visible error state: headings plus an error panel; no plot, no legend.
pub fn render_error(container: &Container, message: &str, opts: &RenderOptions) -> ChartDocument {
    let (headings, layout) = headings(opts);
    let origin = Point::new(PAGE_MARGIN, layout.body_top);
    let mut panel = Surface::new("error", origin, Size::new(opts.width, ERROR_PANEL_HEIGHT));
    panel.border = Some(Stroke::new(opts.theme.error_border, 2.0));

    let cx = opts.width as f32 * 0.5;
    panel.nodes.push(Node::Text(
        Text::new(Point::new(cx, 48.0), "Unable to load ride data", 22.0, opts.theme.error_text)
            .anchored(TextAnchor::Middle),
    ));
    panel.nodes.push(Node::Text(
        Text::new(Point::new(cx, 84.0), message, 14.0, opts.theme.error_text).anchored(TextAnchor::Middle),
    ));

    let page_height = (origin.y + ERROR_PANEL_HEIGHT as f32 + PAGE_MARGIN).ceil() as u32;
    ChartDocument {
        container_id: container.id.clone(),
        size: Size::new(layout.width, page_height),
        theme: opts.theme,
        headings,
        body: Body::Error(ErrorBody { message: message.to_string(), panel }),
    }
}

fn build_markers(rides: &[Ride], scales: &ChartScales, opts: &RenderOptions) -> Vec<Marker> {
    rides
        .iter()
        .enumerate()
        .map(|(index, r)| Marker {
            index,
            center: Point::new(scales.x(r.year), scales.y(r.time)),
            radius: opts.marker_radius,
            kind: MarkerKind::for_ride(r),
        })
        .collect()
}

fn marker_circle(m: &Marker, ride: &Ride, opts: &RenderOptions) -> Circle {
    let mut c = Circle::new(m.center, m.radius, m.kind.color());
    c.opacity = opts.marker_opacity;
    c.stroke = Some(Stroke::new(Color::BLACK, 1.0));
    c.class = Some("dot");
    c.data = vec![
        ("xvalue", ride.year.to_string()),
        ("yvalue", ride.time.format("%H:%M:%S").to_string()),
    ];
    c.title = Some(tooltip_lines(ride).join("\n"));
    c
}
