// File: crates/ascent-core/src/svg.rs
// Summary: SVG and HTML serialization of a ChartDocument. Hover text travels as SVG <title> elements.

use std::fmt::Write as _;

use crate::hover::{Tooltip, TOOLTIP_OFFSET, TOOLTIP_OPACITY};
use crate::scene::{Body, ChartDocument, Heading, Node, Surface};

// Moves each dot's <title> into `data-tip` so the page shows one tooltip, not two.
const TOOLTIP_SCRIPT: &str = r#"<script>
(function () {
  var tip = document.getElementById("tooltip");
  document.querySelectorAll("#scatterplot circle.dot").forEach(function (dot) {
    var title = dot.querySelector("title");
    if (title) {
      dot.setAttribute("data-tip", title.textContent);
      title.remove();
    }
    dot.addEventListener("mousemove", function (event) {
      tip.textContent = dot.getAttribute("data-tip") || "";
      tip.setAttribute("data-year", dot.getAttribute("data-xvalue"));
      tip.setAttribute("data-time", dot.getAttribute("data-yvalue").slice(3));
      tip.style.left = event.pageX + @OFFSET@ + "px";
      tip.style.top = event.pageY + @OFFSET@ + "px";
      tip.style.opacity = @OPACITY@;
    });
    dot.addEventListener("mouseout", function () {
      tip.style.opacity = 0;
    });
  });
})();
</script>
"#;

/// Whole page as one SVG: headings as text, surfaces as nested <svg> elements.
pub fn page_svg(doc: &ChartDocument) -> String {
    let mut out = String::with_capacity(64 * 1024);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" id="{}" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
        escape(&doc.container_id),
        doc.size.width,
        doc.size.height,
        doc.size.width,
        doc.size.height,
    );
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        doc.theme.page_background.css()
    );
    for h in &doc.headings {
        write_heading_text(&mut out, h, &doc.theme.link.css());
    }
    for s in doc.surfaces() {
        write_nested_surface(&mut out, s);
    }
    out.push_str("</svg>\n");
    out
}

/// Standalone HTML page mirroring the original DOM layout (#container, #titles, #scatterplot, #legend, #tooltip).
pub fn html_document(doc: &ChartDocument) -> String {
    html_document_with_tooltip(doc, None)
}

/// Same page with the `#tooltip` element pre-positioned for `tooltip` (hidden when `None`).
/// The inline script keeps it in step with the pointer afterwards.
pub fn html_document_with_tooltip(doc: &ChartDocument, tooltip: Option<&Tooltip>) -> String {
    let theme = &doc.theme;
    let title = doc.heading("title").map(|h| h.text.as_str()).unwrap_or("");
    let mut out = String::with_capacity(64 * 1024);
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ margin: 0; background: {bg}; font-family: sans-serif; }}
.flex-center {{ display: flex; flex-direction: column; align-items: center; justify-content: center; }}
#titles {{ text-align: center; }}
#titles h1, #titles h2, #titles h5 {{ color: {heading}; margin: 0.4em 0; }}
#titles a {{ color: {link}; }}
circle.dot:hover {{ opacity: 1; }}
#tooltip {{ pointer-events: none; white-space: pre-line; background: {tip_bg}; color: {tip_fg}; padding: 6px 10px; border-radius: 4px; font-size: 13px; }}
#error {{ color: {err}; border: 2px solid {err_border}; padding: 1em 2em; margin: 1em; }}
</style>
</head>
<body class="flex-center">
<div id="{container}" class="flex-center">
<div id="titles">
"#,
        title = escape(title),
        bg = theme.page_background.css(),
        heading = theme.heading.css(),
        link = theme.link.css(),
        err = theme.error_text.css(),
        err_border = theme.error_border.css(),
        tip_bg = theme.tooltip_background.css(),
        tip_fg = theme.tooltip_text.css(),
        container = escape(&doc.container_id),
    );
    for h in &doc.headings {
        let _ = write!(out, r#"<h{lvl} id="{id}">{text}"#, lvl = h.level, id = h.id, text = escape(&h.text));
        if let Some(link) = &h.link {
            let _ = write!(
                out,
                r#"<a href="{}" target="_blank" rel="noreferrer noopener">{}</a>"#,
                escape(&link.href),
                escape(&link.text)
            );
        }
        let _ = writeln!(out, "</h{}>", h.level);
    }
    out.push_str("</div>\n");

    match &doc.body {
        Body::Chart(c) => {
            out.push_str("<div id=\"scatterplot\">\n");
            write_inline_surface(&mut out, &c.plot);
            out.push_str("</div>\n");
            write_inline_surface(&mut out, &c.legend);
        }
        Body::Error(e) => {
            let _ = writeln!(out, r#"<div id="error" role="alert"><strong>Unable to load ride data</strong><br>{}</div>"#, escape(&e.message));
        }
    }
    out.push_str("</div>\n");
    if doc.chart().is_some() {
        out.push_str(&tooltip_div(tooltip));
        out.push_str(
            &TOOLTIP_SCRIPT
                .replace("@OFFSET@", &num(TOOLTIP_OFFSET))
                .replace("@OPACITY@", &num(TOOLTIP_OPACITY)),
        );
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn write_inline_surface(out: &mut String, s: &Surface) {
    let mut style = String::new();
    if let Some(b) = &s.border {
        let _ = write!(style, "border: {}px solid {};", num(b.width), b.color.css());
    }
    if let Some(bg) = &s.background {
        let _ = write!(style, " background-color: {};", bg.css());
    }
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" width="{}" height="{}""#,
        escape(&s.id),
        s.size.width,
        s.size.height
    );
    if !style.is_empty() {
        let _ = write!(out, r#" style="{}""#, style.trim());
    }
    out.push_str(" font-family=\"sans-serif\">\n");
    for n in &s.nodes {
        write_node(out, n);
    }
    out.push_str("</svg>\n");
}

fn write_nested_surface(out: &mut String, s: &Surface) {
    let _ = writeln!(
        out,
        r#"<svg id="{}" x="{}" y="{}" width="{}" height="{}" overflow="visible">"#,
        escape(&s.id),
        num(s.origin.x),
        num(s.origin.y),
        s.size.width,
        s.size.height
    );
    if let Some(bg) = &s.background {
        let _ = writeln!(out, r#"<rect width="{}" height="{}" fill="{}"/>"#, s.size.width, s.size.height, bg.css());
    }
    for n in &s.nodes {
        write_node(out, n);
    }
    if let Some(b) = &s.border {
        let _ = writeln!(
            out,
            r#"<rect x="{o}" y="{o}" width="{w}" height="{h}" fill="none" stroke="{c}" stroke-width="{sw}"/>"#,
            o = num(-b.width * 0.5),
            w = num(s.size.width as f32 + b.width),
            h = num(s.size.height as f32 + b.width),
            c = b.color.css(),
            sw = num(b.width),
        );
    }
    out.push_str("</svg>\n");
}

fn write_heading_text(out: &mut String, h: &Heading, link_color: &str) {
    let weight = if h.level <= 2 { "bold" } else { "normal" };
    let _ = write!(
        out,
        r#"<text id="{}" x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="{}" fill="{}">{}"#,
        h.id,
        num(h.anchor.x),
        num(h.anchor.y),
        num(h.size),
        weight,
        h.color.css(),
        escape(&h.text)
    );
    if let Some(link) = &h.link {
        let _ = write!(
            out,
            r#"<a xlink:href="{}" href="{}" target="_blank"><tspan fill="{}">{}</tspan></a>"#,
            escape(&link.href),
            escape(&link.href),
            link_color,
            escape(&link.text)
        );
    }
    out.push_str("</text>\n");
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Group(g) => {
            out.push_str("<g");
            if let Some(id) = &g.id {
                let _ = write!(out, r#" id="{}""#, escape(id));
            }
            if let Some(class) = g.class {
                let _ = write!(out, r#" class="{class}""#);
            }
            if g.translate.x != 0.0 || g.translate.y != 0.0 {
                let _ = write!(out, r#" transform="translate({},{})""#, num(g.translate.x), num(g.translate.y));
            }
            out.push_str(">\n");
            for c in &g.children {
                write_node(out, c);
            }
            out.push_str("</g>\n");
        }
        Node::Circle(c) => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                num(c.center.x),
                num(c.center.y),
                num(c.radius),
                c.fill.css()
            );
            if let Some(class) = c.class {
                let _ = write!(out, r#" class="{class}""#);
            }
            for (k, v) in &c.data {
                let _ = write!(out, r#" data-{}="{}""#, k, escape(v));
            }
            if c.opacity < 1.0 {
                let _ = write!(out, r#" opacity="{}""#, num(c.opacity));
            }
            if let Some(s) = &c.stroke {
                let _ = write!(out, r#" stroke="{}" stroke-width="{}""#, s.color.css(), num(s.width));
            }
            match &c.title {
                Some(t) => {
                    let _ = writeln!(out, "><title>{}</title></circle>", escape(t));
                }
                None => out.push_str("/>\n"),
            }
        }
        Node::Line(l) => {
            let _ = writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                num(l.from.x),
                num(l.from.y),
                num(l.to.x),
                num(l.to.y),
                l.stroke.color.css(),
                num(l.stroke.width)
            );
        }
        Node::Text(t) => {
            let _ = write!(out, r#"<text x="{}" y="{}""#, num(t.pos.x), num(t.pos.y));
            if t.dy_em != 0.0 {
                let _ = write!(out, r#" dy="{}em""#, num(t.dy_em));
            }
            if t.anchor != crate::scene::TextAnchor::Start {
                let _ = write!(out, r#" text-anchor="{}""#, t.anchor.css());
            }
            let _ = writeln!(out, r#" font-size="{}" fill="{}">{}</text>"#, num(t.size), t.fill.css(), escape(&t.content));
        }
    }
}

/// The `#tooltip` element: hidden when nothing is hovered, otherwise placed at the tooltip anchor.
pub fn tooltip_div(tooltip: Option<&Tooltip>) -> String {
    match tooltip {
        None => "<div id=\"tooltip\" style=\"position:absolute;opacity:0\"></div>\n".to_string(),
        Some(t) => format!(
            "<div id=\"tooltip\" data-year=\"{}\" data-time=\"{}\" style=\"position:absolute;left:{}px;top:{}px;opacity:{}\">{}</div>\n",
            t.data_year,
            escape(&t.data_time),
            num(t.anchor.x),
            num(t.anchor.y),
            num(t.opacity),
            escape(&t.lines.join("\n"))
        ),
    }
}

/// Compact number: integers without a fraction, otherwise up to two decimals.
fn num(v: f32) -> String {
    if (v - v.round()).abs() < 1e-4 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Escape text and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
