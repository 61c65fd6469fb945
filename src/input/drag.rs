// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drag gesture: moves a scrap, never resizes it.

use super::PointerId;
use crate::util::geometry::clamp_position;
use egui::{Pos2, Vec2};

/// State captured when the pointer went down on the scrap body.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    pointer: PointerId,
    /// Cursor position at pointer-down
    start: Pos2,
    /// Scrap position at pointer-down
    initial: Pos2,
}

/// Tracks a single drag on one scrap.
#[derive(Debug, Default, Clone)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `pointer` and remember where the gesture started.
    ///
    /// Returns false (and changes nothing) while another pointer is captured.
    pub fn pointer_down(&mut self, pointer: PointerId, cursor: Pos2, position: Pos2) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            pointer,
            start: cursor,
            initial: position,
        });
        true
    }

    /// New position for the scrap, or `None` if `pointer` is not the captured one.
    pub fn pointer_move(
        &self,
        pointer: PointerId,
        cursor: Pos2,
        scrap_size: Vec2,
        bounds: Vec2,
    ) -> Option<Pos2> {
        let session = self.session.filter(|s| s.pointer == pointer)?;
        let delta = cursor - session.start;
        Some(clamp_position(session.initial + delta, scrap_size, bounds))
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

    /// Cancellation releases capture exactly like pointer-up.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> bool {
        self.pointer_up(pointer)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
impl DragController {
    fn captured(&self) -> Option<PointerId> {
        self.session.map(|s| s.pointer)
    }
}
