// File: crates/ascent-core/src/raster.rs
// Summary: Headless rendering of a ChartDocument (plus optional tooltip) using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::hover::Tooltip;
use crate::scene::{ChartDocument, Heading, Node, Surface, TextAnchor};
use crate::text::TextShaper;
use crate::types::Color;

const TOOLTIP_FONT: f32 = 13.0;
const TOOLTIP_LINE: f32 = 18.0;
const TOOLTIP_PAD: f32 = 8.0;

/// Owns the text shaper so repeated frames (the viewer) do not rebuild font state.
pub struct Rasterizer {
    shaper: Option<TextShaper>,
}

impl Rasterizer {
    /// `draw_labels = false` skips all text, which keeps images identical across platforms.
    pub fn new(draw_labels: bool) -> Self {
        Self { shaper: draw_labels.then(TextShaper::new) }
    }

    /// Render to a PNG written at `output_png_path`.
    pub fn render_to_png(
        &self,
        doc: &ChartDocument,
        tooltip: Option<&Tooltip>,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(doc, tooltip)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, doc: &ChartDocument, tooltip: Option<&Tooltip>) -> Result<Vec<u8>> {
        let mut surface = self.paint(doc, tooltip)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, doc: &ChartDocument, tooltip: Option<&Tooltip>) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.paint(doc, tooltip)?;
        let (w, h) = (doc.size.width, doc.size.height);
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("failed to read back raster pixels");
        }
        Ok((px, w, h, stride))
    }

    fn paint(&self, doc: &ChartDocument, tooltip: Option<&Tooltip>) -> Result<skia::Surface> {
        let (w, h) = (doc.size.width as i32, doc.size.height as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(sk(doc.theme.page_background, 1.0));

        for heading in &doc.headings {
            self.draw_heading(canvas, heading, doc.theme.link);
        }
        for s in doc.surfaces() {
            self.draw_surface(canvas, s);
        }
        if let Some(t) = tooltip {
            self.draw_tooltip(canvas, t, doc.theme.tooltip_background, doc.theme.tooltip_text);
        }
        Ok(surface)
    }

    fn draw_heading(&self, canvas: &skia::Canvas, h: &Heading, link_color: Color) {
        let Some(shaper) = &self.shaper else { return };
        let bold = h.level <= 2;
        let color = sk(h.color, 1.0);
        match &h.link {
            None => {
                shaper.draw(canvas, &h.text, h.anchor.x, h.anchor.y, h.size, color, TextAnchor::Middle, bold);
            }
            Some(link) => {
                let lead = shaper.measure_width(&h.text, h.size, bold);
                let total = lead + shaper.measure_width(&link.text, h.size, bold);
                let left = h.anchor.x - total * 0.5;
                shaper.draw(canvas, &h.text, left, h.anchor.y, h.size, color, TextAnchor::Start, bold);
                shaper.draw(canvas, &link.text, left + lead, h.anchor.y, h.size, sk(link_color, 1.0), TextAnchor::Start, bold);
            }
        }
    }

    fn draw_surface(&self, canvas: &skia::Canvas, s: &Surface) {
        canvas.save();
        canvas.translate((s.origin.x, s.origin.y));
        let bounds = skia::Rect::from_xywh(0.0, 0.0, s.size.width as f32, s.size.height as f32);

        if let Some(bg) = s.background {
            canvas.draw_rect(bounds, &fill_paint(bg, 1.0));
        }
        for n in &s.nodes {
            self.draw_node(canvas, n);
        }
        // border sits outside the drawing area, like a CSS border
        if let Some(b) = s.border {
            let half = b.width * 0.5;
            canvas.draw_rect(bounds.with_outset((half, half)), &stroke_paint(b.color, b.width, 1.0));
        }
        canvas.restore();
    }

    fn draw_node(&self, canvas: &skia::Canvas, node: &Node) {
        match node {
            Node::Group(g) => {
                canvas.save();
                canvas.translate((g.translate.x, g.translate.y));
                for c in &g.children {
                    self.draw_node(canvas, c);
                }
                canvas.restore();
            }
            Node::Circle(c) => {
                let center = (c.center.x, c.center.y);
                canvas.draw_circle(center, c.radius, &fill_paint(c.fill, c.opacity));
                if let Some(s) = c.stroke {
                    canvas.draw_circle(center, c.radius, &stroke_paint(s.color, s.width, c.opacity));
                }
            }
            Node::Line(l) => {
                canvas.draw_line(
                    (l.from.x, l.from.y),
                    (l.to.x, l.to.y),
                    &stroke_paint(l.stroke.color, l.stroke.width, 1.0),
                );
            }
            Node::Text(t) => {
                if let Some(shaper) = &self.shaper {
                    let at = t.baseline();
                    shaper.draw(canvas, &t.content, at.x, at.y, t.size, sk(t.fill, 1.0), t.anchor, false);
                }
            }
        }
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, t: &Tooltip, bg: Color, fg: Color) {
        let widest = t
            .lines
            .iter()
            .map(|l| match &self.shaper {
                Some(s) => s.measure_width(l, TOOLTIP_FONT, false),
                None => l.chars().count() as f32 * TOOLTIP_FONT * 0.55,
            })
            .fold(0.0f32, f32::max);
        let rect = skia::Rect::from_xywh(
            t.anchor.x,
            t.anchor.y,
            widest + 2.0 * TOOLTIP_PAD,
            t.lines.len() as f32 * TOOLTIP_LINE + 2.0 * TOOLTIP_PAD,
        );
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(bg, t.opacity));

        if let Some(shaper) = &self.shaper {
            for (i, line) in t.lines.iter().enumerate() {
                let y = t.anchor.y + TOOLTIP_PAD + TOOLTIP_FONT + i as f32 * TOOLTIP_LINE;
                shaper.draw(canvas, line, t.anchor.x + TOOLTIP_PAD, y, TOOLTIP_FONT, sk(fg, t.opacity), TextAnchor::Start, false);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn sk(c: Color, opacity: f32) -> skia::Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn fill_paint(c: Color, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk(c, opacity));
    paint
}

fn stroke_paint(c: Color, width: f32, opacity: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(sk(c, opacity));
    paint
}
