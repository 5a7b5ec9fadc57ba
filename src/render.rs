use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::core::{BlobField, Edge, NodeField, Theme};

/// Acquire a 2D context for a canvas. `None` means the environment cannot
/// draw and the caller degrades to a no-op renderer.
pub fn context2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, size: Vec2) {
    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
}

/// Paint every blob as a wobbled polygon filled with a radial gradient that
/// fades from a boosted center alpha to transparent, composited additively.
pub fn paint_blob_field(
    ctx: &web::CanvasRenderingContext2d,
    field: &BlobField,
    center_gain: f32,
) {
    for blob in &field.blobs {
        ctx.save();
        let _ = ctx.translate(blob.pos.x as f64, blob.pos.y as f64);

        if let Ok(gradient) = ctx.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, blob.radius as f64)
        {
            let inner = blob.color.scale_alpha(center_gain);
            let outer = blob.color.with_alpha(0.0);
            let _ = gradient.add_color_stop(0.0, &inner.to_css());
            let _ = gradient.add_color_stop(1.0, &outer.to_css());

            ctx.begin_path();
            let outline = blob.outline(field.clock);
            let mut points = outline.iter();
            if let Some(first) = points.next() {
                ctx.move_to(first.x as f64, first.y as f64);
            }
            for p in points {
                ctx.line_to(p.x as f64, p.y as f64);
            }
            ctx.close_path();

            ctx.set_fill_style_canvas_gradient(&gradient);
            let _ = ctx.set_global_composite_operation("screen");
            ctx.fill();
        }
        ctx.restore();
    }
}

/// Paint connection lines then nodes. Line alpha decays linearly with
/// distance, reaching zero at the connection threshold; each line is stroked
/// with a gradient between its endpoint colors. Dark theme adds a soft glow
/// disc behind every node.
pub fn paint_node_field(
    ctx: &web::CanvasRenderingContext2d,
    field: &NodeField,
    edges: &[Edge],
    max_dist: f32,
    theme: Theme,
) {
    let (edge_alpha, edge_width) = if theme.is_dark() {
        (EDGE_ALPHA_DARK, EDGE_WIDTH_DARK)
    } else {
        (EDGE_ALPHA_LIGHT, EDGE_WIDTH_LIGHT)
    };

    for edge in edges {
        let a = &field.nodes[edge.a];
        let b = &field.nodes[edge.b];
        let opacity = edge_alpha * (1.0 - edge.dist / max_dist);

        ctx.begin_path();
        ctx.move_to(a.pos.x as f64, a.pos.y as f64);
        ctx.line_to(b.pos.x as f64, b.pos.y as f64);

        if let Ok(gradient) = ctx.create_linear_gradient(
            a.pos.x as f64,
            a.pos.y as f64,
            b.pos.x as f64,
            b.pos.y as f64,
        ) {
            let _ = gradient.add_color_stop(0.0, &a.color.to_css());
            let _ = gradient.add_color_stop(1.0, &b.color.to_css());
            ctx.set_stroke_style_canvas_gradient(&gradient);
        }
        ctx.set_line_width(edge_width);
        ctx.set_global_alpha(opacity as f64);
        ctx.stroke();
        ctx.set_global_alpha(1.0);
    }

    for node in &field.nodes {
        ctx.begin_path();
        let _ = ctx.arc(
            node.pos.x as f64,
            node.pos.y as f64,
            node.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&node.color.to_css());
        ctx.fill();

        if theme.is_dark() {
            ctx.begin_path();
            let _ = ctx.arc(
                node.pos.x as f64,
                node.pos.y as f64,
                node.radius as f64 * GLOW_RADIUS_FACTOR,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.set_fill_style_str(&node.color.with_alpha(GLOW_ALPHA).to_css());
            ctx.fill();
        }
    }
}
