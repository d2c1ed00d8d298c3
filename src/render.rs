//! CPU painter for the particle field background
//!
//! Projected points are batched into a single egui mesh of small quads,
//! drawn on the background layer under every panel.

use eframe::egui;
use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Vec2};

use crate::field::PointBuffer;
use crate::theme::colors;

/// Vertical gradient behind the particles
pub fn paint_backdrop(painter: &Painter, rect: Rect) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), colors::BG_TOP);
    mesh.colored_vertex(rect.right_top(), colors::BG_TOP);
    mesh.colored_vertex(rect.right_bottom(), colors::BG_BOTTOM);
    mesh.colored_vertex(rect.left_bottom(), colors::BG_BOTTOM);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Draw projected points as square sprites, offset by `origin`
pub fn paint_points(painter: &Painter, origin: Pos2, points: &PointBuffer) {
    let Some(rgb) = points.color() else {
        return;
    };
    let [r, g, b] = rgb.0;
    let color = Color32::from_rgb(r, g, b);

    let mut mesh = Mesh::default();
    mesh.reserve_vertices(points.len() * 4);
    mesh.reserve_triangles(points.len() * 2);
    for p in points.points() {
        let center = origin + Vec2::new(p.x, p.y);
        mesh.add_colored_rect(Rect::from_center_size(center, Vec2::splat(p.size)), color);
    }
    painter.add(Shape::mesh(mesh));
}
