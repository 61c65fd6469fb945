// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Journal page canvas.
//!
//! This module paints the ruled journal page and every placed scrap in
//! z-order, and turns egui drag responses into canvas pointer events.

use crate::input::PointerId;
use crate::models::{
    canvas::{PointerTarget, ScrapCanvas},
    scrap::{Gradient, Scrap, ScrapContent, ScrapId},
};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

/// Side length of the square resize handle.
const HANDLE_SIZE: f32 = 20.0;
const PAGE_COLOR: Color32 = Color32::from_rgb(0xfb, 0xf7, 0xee);
const RULE_COLOR: Color32 = Color32::from_rgb(0xd8, 0xe3, 0xef);
const ACTIVE_COLOR: Color32 = Color32::from_rgb(0x3d, 0x7e, 0xd6);

/// Pointer event produced by the canvas this frame, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    PointerDown {
        scrap: ScrapId,
        target: PointerTarget,
        pointer: PointerId,
        cursor: Pos2,
    },
    PointerMove {
        scrap: ScrapId,
        pointer: PointerId,
        cursor: Pos2,
    },
    PointerUp {
        scrap: ScrapId,
        pointer: PointerId,
    },
}

/// Result of laying out and interacting with the canvas.
pub struct CanvasOutput {
    /// Measured size of the canvas area
    pub size: Vec2,
    pub events: Vec<CanvasEvent>,
}

/// Display the canvas and collect pointer events for its scraps.
pub fn show(ui: &mut egui::Ui, canvas: &ScrapCanvas) -> CanvasOutput {
    let (page, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let origin = page.min.to_vec2();
    let mut events = Vec::new();

    draw_page(ui.painter(), page);

    if canvas.is_empty() {
        ui.painter().text(
            page.center(),
            Align2::CENTER_CENTER,
            "Open the pencilcase to add scraps",
            FontId::proportional(16.0),
            Color32::from_gray(160),
        );
    }

    for scrap in canvas.scraps_by_z() {
        let rect = scrap.rect().translate(origin);
        draw_scrap(ui.painter(), scrap, rect);

        let body_id = ui.id().with(("scrap", scrap.id.0));
        let body = ui.interact(rect, body_id, Sense::drag());
        collect_events(ui, &body, scrap.id, PointerTarget::Body, origin, &mut events);

        // Registered after the body so it wins hit-testing where they overlap
        let handle_rect = handle_rect(rect);
        let handle = ui
            .interact(handle_rect, body_id.with("handle"), Sense::drag())
            .on_hover_cursor(egui::CursorIcon::ResizeNwSe);
        collect_events(ui, &handle, scrap.id, PointerTarget::Handle, origin, &mut events);
    }

    CanvasOutput {
        size: page.size(),
        events,
    }
}

/// Translate one widget's drag response into canvas events.
fn collect_events(
    ui: &egui::Ui,
    response: &egui::Response,
    scrap: ScrapId,
    target: PointerTarget,
    origin: Vec2,
    events: &mut Vec<CanvasEvent>,
) {
    let pointer = PointerId::MOUSE;

    if response.drag_started() {
        let press = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(press) = press {
            events.push(CanvasEvent::PointerDown {
                scrap,
                target,
                pointer,
                cursor: press - origin,
            });
        }
    }

    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(CanvasEvent::PointerMove {
                scrap,
                pointer,
                cursor: pos - origin,
            });
        }
    }

    if response.drag_stopped() {
        events.push(CanvasEvent::PointerUp { scrap, pointer });
    }
}

fn handle_rect(scrap_rect: Rect) -> Rect {
    Rect::from_min_max(scrap_rect.max - Vec2::splat(HANDLE_SIZE), scrap_rect.max)
}

/// Draw the ruled paper background.
fn draw_page(painter: &egui::Painter, page: Rect) {
    painter.rect_filled(page, 0.0, PAGE_COLOR);

    let mut y = page.top() + 32.0;
    while y < page.bottom() {
        painter.hline(page.x_range(), y, Stroke::new(1.0, RULE_COLOR));
        y += 28.0;
    }
    painter.vline(page.left() + 48.0, page.y_range(), Stroke::new(1.0, Color32::from_rgb(0xf0, 0xb8, 0xb8)));
}

/// Draw a scrap card with its content, border and handle.
fn draw_scrap(painter: &egui::Painter, scrap: &Scrap, rect: Rect) {
    painter.rect_filled(rect.translate(Vec2::new(3.0, 4.0)), 4.0, Color32::from_black_alpha(40));

    match &scrap.content {
        ScrapContent::Image { texture, .. } => {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        ScrapContent::Paper { gradient } => draw_gradient(painter, rect, gradient),
    }

    let active = scrap.is_dragging() || scrap.is_resizing();
    let border = if active {
        Stroke::new(2.0, ACTIVE_COLOR)
    } else {
        Stroke::new(1.0, Color32::from_gray(200))
    };
    painter.rect_stroke(rect, 4.0, border);

    let handle = handle_rect(rect);
    painter.rect_filled(handle, 4.0, Color32::from_white_alpha(220));
    painter.text(
        handle.center(),
        Align2::CENTER_CENTER,
        "+",
        FontId::monospace(14.0),
        Color32::from_gray(80),
    );
}

/// Fill `rect` with a diagonal two-stop gradient.
fn draw_gradient(painter: &egui::Painter, rect: Rect, gradient: &Gradient) {
    let middle = gradient.midpoint();
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), gradient.from);
    mesh.colored_vertex(rect.right_top(), middle);
    mesh.colored_vertex(rect.right_bottom(), gradient.to);
    mesh.colored_vertex(rect.left_bottom(), middle);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_sits_in_bottom_right_corner() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(200.0, 100.0));
        let handle = handle_rect(rect);
        assert_eq!(handle.max, rect.max);
        assert_eq!(handle.size(), Vec2::splat(HANDLE_SIZE));
    }
}
