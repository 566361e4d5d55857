// File: crates/ascent-core/tests/theme.rs
// Purpose: Theme presets, lookup fallback, and CSS colour strings.

use ascent_core::scene::Node;
use ascent_core::theme::{find, presets};
use ascent_core::{render_chart, Color, Container, RenderOptions, Theme};

#[test]
fn lookup_is_case_insensitive_and_falls_back_to_dark() {
    assert_eq!(presets().len(), 2);
    assert_eq!(find("LIGHT"), Theme::light());
    assert_eq!(find("solarized"), Theme::dark());
    assert_eq!(Theme::default(), Theme::dark());
}

#[test]
fn named_colours_keep_their_keyword() {
    assert_eq!(Color::RED.css(), "red");
    assert_eq!(Color::GREEN.name(), Some("green"));
    assert_eq!(Color::rgb(0x2b, 0x2d, 0x42).css(), "#2b2d42");
    assert_eq!(Color::rgb(1, 2, 3).name(), None);
}

#[test]
fn marker_colours_do_not_depend_on_theme() {
    let ds = ascent_core::Dataset::from_json_str(
        r#"[{"Time":"36:50","Year":1995,"Name":"A","Nationality":"ITA","Doping":"EPO"}]"#,
    )
    .unwrap();
    for theme in presets() {
        let opts = RenderOptions { theme, ..RenderOptions::default() };
        let doc = render_chart(&Container::default(), &ds, &opts);
        let body = doc.chart().unwrap();
        assert_eq!(body.plot.background, Some(theme.plot_background));
        assert_eq!(body.plot.circles()[0].fill, Color::RED);
    }
}

#[test]
fn axis_labels_and_lines_use_their_own_colours() {
    let theme = Theme::light();
    assert_ne!(theme.axis_label, theme.axis_line);
    let ds = ascent_core::Dataset::from_json_str(
        r#"[{"Time":"36:50","Year":1995,"Name":"A","Nationality":"ITA","Doping":""}]"#,
    )
    .unwrap();
    let doc = render_chart(&Container::default(), &ds, &RenderOptions { theme, ..RenderOptions::default() });
    let plot = &doc.chart().unwrap().plot;

    let texts = plot.texts();
    assert!(!texts.is_empty());
    assert!(texts.iter().all(|t| t.fill == theme.axis_label));

    let mut lines = 0;
    plot.walk(|n| {
        if let Node::Line(l) = n {
            assert_eq!(l.stroke.color, theme.axis_line);
            lines += 1;
        }
    });
    assert!(lines > 0);
}
