// File: crates/ascent-core/tests/raster.rs
// Purpose: Skia raster output: PNG encoding, pixel buffer shape, and marker colours on the canvas.

mod common;

use ascent_core::geometry::Point;
use ascent_core::{render_chart, render_error, tooltip, Container, HoverState, Rasterizer, RenderOptions};

fn pixel(px: &[u8], stride: usize, x: u32, y: u32) -> [u8; 4] {
    let i = y as usize * stride + x as usize * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn png_bytes_have_signature_and_page_size() {
    let ds = common::three_rides();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions::default());
    let bytes = Rasterizer::new(false).render_to_png_bytes(&doc, None).expect("png");
    assert_eq!(&bytes[..4], &[137, 80, 78, 71]);

    let img = image::load_from_memory(&bytes).expect("decodable").to_rgba8();
    assert_eq!((img.width(), img.height()), (doc.size.width, doc.size.height));
}

#[test]
fn markers_land_at_scaled_positions() {
    let ds = common::three_rides();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions::default());
    let (px, w, h, stride) = Rasterizer::new(false).render_to_rgba8(&doc, None).expect("rgba");
    assert_eq!(px.len(), (w * h * 4) as usize);
    assert_eq!(stride, w as usize * 4);

    let body = doc.chart().unwrap();
    let at = |i: usize| {
        let c = body.markers[i].center;
        ((body.plot.origin.x + c.x) as u32, (body.plot.origin.y + c.y) as u32)
    };

    // B is the alleged ride
    let (bx, by) = at(1);
    let [r, g, _, _] = pixel(&px, stride, bx, by);
    assert!(r as i32 > g as i32 + 100, "B should be red, got r={r} g={g}");

    let (cx, cy) = at(2);
    let [r, g, _, _] = pixel(&px, stride, cx, cy);
    assert!(g > r, "C should be green, got r={r} g={g}");
}

#[test]
fn tooltip_is_painted_next_to_pointer() {
    let ds = common::three_rides();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions::default());
    let body = doc.chart().unwrap();
    let m = &body.markers[1];
    let at = Point::new(body.plot.origin.x + m.center.x, body.plot.origin.y + m.center.y);

    let mut hover = HoverState::new();
    hover.pointer_move(body, at);
    let tip = tooltip(&hover, &ds).expect("tooltip");

    let raster = Rasterizer::new(false);
    let (plain, _, _, stride) = raster.render_to_rgba8(&doc, None).unwrap();
    let (with_tip, _, _, _) = raster.render_to_rgba8(&doc, Some(&tip)).unwrap();
    let (x, y) = ((tip.anchor.x + 10.0) as u32, (tip.anchor.y + 10.0) as u32);
    assert_ne!(pixel(&plain, stride, x, y), pixel(&with_tip, stride, x, y));
}

#[test]
fn png_file_is_written_with_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("error.png");
    let doc = render_error(&Container::default(), "offline", &RenderOptions::default());
    Rasterizer::new(false).render_to_png(&doc, None, &path).expect("write");
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}
