// File: crates/ascent-viewer/src/main.rs
// Summary: Windowed viewer that renders the chart page via RGBA blit (CPU) using winit + softbuffer,
// and shows the ride tooltip while the pointer is over a marker.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use ascent_core::geometry::Point;
use ascent_core::{
    render_chart, render_error, theme, tooltip, ChartDocument, Container, Dataset, HoverState, Rasterizer,
    RenderOptions, Source,
};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "ascent-viewer")]
#[command(about = "Interactive Alpe d'Huez doping scatterplot")]
struct Args {
    /// Dataset URL (fetched once at startup)
    #[arg(long, default_value = ascent_core::DEFAULT_URL)]
    url: String,

    /// Local .json or .csv file instead of the URL
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    #[arg(long, default_value = "dark")]
    theme: String,
}

/// Loaded page plus the data the tooltip reads from.
struct Page {
    doc: ChartDocument,
    dataset: Option<Dataset>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let page = load_page(&args, &opts)?;
    let raster = Rasterizer::new(opts.draw_labels);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Doping in Professional Bicycle Racing")
        .with_inner_size(PhysicalSize::new(page.doc.size.width, page.doc.size.height))
        .with_resizable(false)
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut hover = HoverState::new();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => {
                    if let Some(body) = page.doc.chart() {
                        let at = Point::new(position.x as f32, position.y as f32);
                        if hover.pointer_move(body, at) {
                            debug!(hovered = ?hover.hovered(), "hover changed");
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if hover.pointer_leave() {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                if let Err(e) = draw(&mut surface, &raster, &page, &hover, size) {
                    error!(error = %e, "frame failed");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

/// Single fetch at startup; a failure becomes the error page instead of an empty chart.
fn load_page(args: &Args, opts: &RenderOptions) -> Result<Page> {
    let source = match &args.input {
        Some(path) => Source::File(path.clone()),
        None => Source::Remote { url: args.url.clone(), timeout: Duration::from_secs(args.timeout_secs) },
    };
    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let container = Container::default();
    let page = match rt.block_on(source.load()) {
        Ok(dataset) => {
            info!(rides = dataset.len(), "rides ready");
            Page { doc: render_chart(&container, &dataset, opts), dataset: Some(dataset) }
        }
        Err(err) => {
            error!(source = %source.describe(), error = %err, "failed to load rides");
            Page { doc: render_error(&container, &err.to_string(), opts), dataset: None }
        }
    };
    Ok(page)
}

fn draw(
    surface: &mut softbuffer::Surface,
    raster: &Rasterizer,
    page: &Page,
    hover: &HoverState,
    size: PhysicalSize<u32>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;

    let tip = page.dataset.as_ref().and_then(|ds| tooltip(hover, ds));
    let (rgba, pw, ph, stride) = raster.render_to_rgba8(&page.doc, tip.as_ref())?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    let (fw, fh) = (w.get() as usize, h.get() as usize);
    frame.fill(0);
    // softbuffer wants 0x00RRGGBB; copy the overlapping region only
    for y in 0..fh.min(ph as usize) {
        let row = &rgba[y * stride..y * stride + pw as usize * 4];
        for (x, px) in row.chunks_exact(4).take(fw).enumerate() {
            frame[y * fw + x] = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
