// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Closed-notebook landing view.
//!
//! Paints the notebook cover, applying the shake offset and fade-out opacity
//! reported by the screen controller.

use crate::models::screen::ScreenController;
use egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Vec2};

const COVER_SIZE: Vec2 = Vec2::new(320.0, 420.0);
const COVER_COLOR: Color32 = Color32::from_rgb(0x7a, 0x4b, 0x2f);
const SPINE_COLOR: Color32 = Color32::from_rgb(0x5c, 0x36, 0x20);
const LABEL_COLOR: Color32 = Color32::from_rgb(0xf4, 0xe9, 0xd8);

/// Display the landing view. Returns true when the notebook was clicked.
pub fn show(ui: &mut egui::Ui, screen: &ScreenController, now: f64) -> bool {
    let area = ui.max_rect();
    ui.painter()
        .rect_filled(area, 0.0, Color32::from_rgb(0xe9, 0xe2, 0xd6));

    let offset = Vec2::new(screen.shake_offset(now), 0.0);
    let cover = Rect::from_center_size(area.center() + offset, COVER_SIZE);
    let opacity = screen.landing_opacity(now);

    let response = ui.allocate_rect(cover, Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let painter = ui.painter();
    let fade = |color: Color32| color.gamma_multiply(opacity);

    // Cover and spine
    painter.rect_filled(cover.translate(Vec2::new(6.0, 8.0)), 12.0, fade(Color32::from_black_alpha(60)));
    painter.rect_filled(cover, 12.0, fade(COVER_COLOR));
    let spine = Rect::from_min_size(cover.min, Vec2::new(28.0, cover.height()));
    painter.rect_filled(spine, 12.0, fade(SPINE_COLOR));

    // Title label
    let label = Rect::from_center_size(cover.center() - Vec2::new(0.0, 60.0), Vec2::new(200.0, 70.0));
    painter.rect_filled(label, 6.0, fade(LABEL_COLOR));
    painter.rect_stroke(label.shrink(4.0), 4.0, Stroke::new(1.0, fade(SPINE_COLOR)));
    painter.text(
        label.center(),
        Align2::CENTER_CENTER,
        "My Journal",
        FontId::proportional(26.0),
        fade(SPINE_COLOR),
    );

    painter.text(
        cover.center_bottom() - Vec2::new(0.0, 40.0),
        Align2::CENTER_CENTER,
        "click to open",
        FontId::proportional(14.0),
        fade(LABEL_COLOR),
    );

    response.clicked()
}
