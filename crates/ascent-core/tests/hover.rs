// File: crates/ascent-core/tests/hover.rs
// Purpose: Pointer-driven hover state and tooltip placement/content.

mod common;

use ascent_core::geometry::Point;
use ascent_core::hover::{tooltip_lines, TOOLTIP_OFFSET};
use ascent_core::{render_chart, tooltip, Container, HoverState, RenderOptions};

fn page_point_of(body: &ascent_core::scene::ChartBody, index: usize) -> Point {
    let m = &body.markers[index];
    Point::new(body.plot.origin.x + m.center.x, body.plot.origin.y + m.center.y)
}

#[test]
fn pointer_over_marker_selects_its_record() {
    let ds = common::three_rides();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions::default());
    let body = doc.chart().unwrap();

    let mut hover = HoverState::new();
    let at = page_point_of(body, 1).offset(3.0, -2.0);
    assert!(hover.pointer_move(body, at));
    assert_eq!(hover.hovered(), Some(1));

    let tip = tooltip(&hover, &ds).expect("tooltip while hovering");
    assert_eq!(tip.anchor, at.offset(TOOLTIP_OFFSET, TOOLTIP_OFFSET));
    assert!((tip.opacity - 0.8).abs() < 1e-6);
    assert_eq!(tip.data_year, 1995);
    assert_eq!(tip.data_time, "22:10");
    assert_eq!(
        tip.lines,
        ["Name: B", "Nationality: ITA", "Year: 1995", "Time: 22:10", "Note: EPO"]
    );
}

#[test]
fn moving_off_markers_and_leaving_clears_hover() {
    let ds = common::three_rides();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions::default());
    let body = doc.chart().unwrap();
    let mut hover = HoverState::new();

    hover.pointer_move(body, page_point_of(body, 0));
    assert_eq!(hover.hovered(), Some(0));

    // well outside any marker radius
    let empty = page_point_of(body, 0).offset(0.0, -100.0);
    assert!(hover.pointer_move(body, empty));
    assert_eq!(hover.hovered(), None);
    assert!(tooltip(&hover, &ds).is_none());

    hover.pointer_move(body, page_point_of(body, 2));
    assert_eq!(hover.hovered(), Some(2));
    assert!(hover.pointer_leave());
    assert_eq!(hover.hovered(), None);
    assert_eq!(hover.pointer(), None);
    assert!(!hover.pointer_leave(), "second leave changes nothing");
}

#[test]
fn move_within_empty_space_reports_no_change() {
    let ds = common::three_rides();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions::default());
    let body = doc.chart().unwrap();
    let mut hover = HoverState::new();
    assert!(!hover.pointer_move(body, Point::new(5.0, 5.0)));
    assert!(!hover.pointer_move(body, Point::new(6.0, 5.0)));
}

#[test]
fn topmost_marker_wins_on_overlap() {
    let ds = ascent_core::Dataset::new(vec![
        common::ride(2000, "38:00", "", "under"),
        common::ride(2000, "38:00", "EPO", "over"),
        common::ride(2004, "37:00", "", "other"),
    ])
    .unwrap();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions::default());
    let body = doc.chart().unwrap();
    let mut hover = HoverState::new();
    hover.pointer_move(body, page_point_of(body, 0));
    assert_eq!(hover.hovered(), Some(1));
}

#[test]
fn clean_rides_have_no_note_line() {
    let lines = tooltip_lines(&common::ride(1994, "23:20", "", "A"));
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| !l.starts_with("Note:")));
}
