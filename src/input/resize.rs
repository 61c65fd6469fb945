// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Resize gesture on a scrap's corner handle.
//!
//! The origin of the scrap never moves while resizing; the new size is
//! bounded by the space left between the origin and the canvas edge.

use super::PointerId;
use egui::{Pos2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
struct ResizeSession {
    pointer: PointerId,
    /// Cursor position at pointer-down
    start: Pos2,
    /// Scrap size at pointer-down
    start_size: Vec2,
}

/// Tracks a single resize on one scrap's handle.
#[derive(Debug, Default, Clone)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

/// Compute the size a scrap should take for a cursor `delta` since pointer-down.
///
/// Each axis is at least `min_size`. With a locked `aspect_ratio` the height
/// follows the width. Both axes are then capped by the canvas space remaining
/// to the right of and below `position`.
pub fn resized(
    start_size: Vec2,
    delta: Vec2,
    aspect_ratio: Option<f32>,
    position: Pos2,
    bounds: Vec2,
    min_size: f32,
) -> Vec2 {
    let mut width = (start_size.x + delta.x).max(min_size);
    let mut height = (start_size.y + delta.y).max(min_size);

    if let Some(ratio) = aspect_ratio.filter(|r| r.is_finite() && *r > 0.0) {
        height = (width / ratio).max(min_size);
    }

    width = width.min(bounds.x - position.x);
    height = height.min(bounds.y - position.y);

    Vec2::new(width, height)
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `pointer` on the handle. Returns false while another pointer is captured.
    pub fn pointer_down(&mut self, pointer: PointerId, cursor: Pos2, size: Vec2) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(ResizeSession {
            pointer,
            start: cursor,
            start_size: size,
        });
        true
    }

    /// New size for the scrap, or `None` if `pointer` is not the captured one.
    pub fn pointer_move(
        &self,
        pointer: PointerId,
        cursor: Pos2,
        position: Pos2,
        aspect_ratio: Option<f32>,
        bounds: Vec2,
        min_size: f32,
    ) -> Option<Vec2> {
        let session = self.session.filter(|s| s.pointer == pointer)?;
        Some(resized(
            session.start_size,
            cursor - session.start,
            aspect_ratio,
            position,
            bounds,
            min_size,
        ))
    }

    /// Release the captured pointer. Returns true if a session ended.
    pub fn pointer_up(&mut self, pointer: PointerId) -> bool {
        match self.session {
            Some(session) if session.pointer == pointer => {
                self.session = None;
                true
            }
            _ => false,
        }
    }

    pub fn pointer_cancel(&mut self, pointer: PointerId) -> bool {
        self.pointer_up(pointer)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
