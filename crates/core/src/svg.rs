//! SVG writer: serializes a scene to a standalone SVG document.
//!
//! Transitions are ignored — the output is static.

use std::fmt::Write as _;

use vizjoin_scene::{Element, Group, Node, Scene, Shape};

/// Render a scene as an SVG document string.
pub fn write_svg(scene: &Scene) -> String {
    let mut svg = String::with_capacity(1024);
    let (width, height) = (scene.width, scene.height);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#,
    );
    write_group(&mut svg, &scene.root, false);
    svg.push_str("</svg>");
    svg
}

fn write_group(svg: &mut String, group: &Group, wrap: bool) {
    if wrap {
        svg.push_str("<g");
        if let Some(id) = &group.id {
            let _ = write!(svg, r#" id="{}""#, escape_xml(id));
        }
        if !group.classes.is_empty() {
            let _ = write!(svg, r#" class="{}""#, escape_xml(&group.classes.join(" ")));
        }
        if let Some((tx, ty)) = group.transform {
            let _ = write!(svg, r#" transform="translate({tx},{ty})""#);
        }
        svg.push('>');
    }
    for child in &group.children {
        match child {
            Node::Element(el) => write_element(svg, el),
            Node::Group(g) => write_group(svg, g, true),
        }
    }
    if wrap {
        svg.push_str("</g>");
    }
}

fn write_element(svg: &mut String, el: &Element) {
    let tag = match &el.shape {
        Shape::Rect { .. } => "rect",
        Shape::Circle { .. } => "circle",
        Shape::Line { .. } => "line",
        Shape::Path { .. } => "path",
        Shape::Text { .. } => "text",
    };
    let _ = write!(svg, "<{tag}");
    if let Some(id) = &el.id {
        let _ = write!(svg, r#" id="{}""#, escape_xml(id));
    }
    if !el.classes.is_empty() {
        let _ = write!(svg, r#" class="{}""#, escape_xml(&el.classes.join(" ")));
    }

    match &el.shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => {
            let _ = write!(
                svg,
                r#" x="{x}" y="{y}" width="{width}" height="{height}""#
            );
        }
        Shape::Circle { cx, cy, r } => {
            let _ = write!(svg, r#" cx="{cx}" cy="{cy}" r="{r}""#);
        }
        Shape::Line { x1, y1, x2, y2 } => {
            let _ = write!(svg, r#" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}""#);
        }
        Shape::Path { d } => {
            let _ = write!(svg, r#" d="{}""#, escape_xml(d));
        }
        Shape::Text { x, y, .. } => {
            let _ = write!(svg, r#" x="{x}" y="{y}""#);
        }
    }

    if let Some(fill) = &el.fill {
        let _ = write!(svg, r#" fill="{}""#, escape_xml(fill));
    }
    if let Some(angle) = el.rotate {
        // Rotate about the shape's anchor point.
        let (ax, ay) = anchor(&el.shape);
        let _ = write!(svg, r#" transform="rotate({angle} {ax} {ay})""#);
    }

    match &el.shape {
        Shape::Text { content, .. } => {
            let _ = write!(svg, ">{}</{tag}>", escape_xml(content));
        }
        _ => svg.push_str("/>"),
    }
}

fn anchor(shape: &Shape) -> (f64, f64) {
    match shape {
        Shape::Rect { x, y, .. } | Shape::Text { x, y, .. } => (*x, *y),
        Shape::Circle { cx, cy, .. } => (*cx, *cy),
        Shape::Line { x1, y1, .. } => (*x1, *y1),
        Shape::Path { .. } => (0.0, 0.0),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
