// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The journal's scrap canvas.
//!
//! The canvas owns every scrap, hands out z-order, finishes the setup of new
//! scraps once its own size is known, and routes pointer events to the
//! per-scrap drag and resize controllers.

use super::scrap::{Scrap, ScrapContent, ScrapId};
use crate::config::Settings;
use crate::input::PointerId;
use crate::util::geometry::{centered_position, clamp_position, is_unmeasured};
use egui::{Pos2, Vec2};

/// Part of a scrap a pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Anywhere on the card except the handle
    Body,
    /// The resize handle in the bottom-right corner
    Handle,
}

/// Freeform surface holding the scraps.
#[derive(Debug)]
pub struct ScrapCanvas {
    scraps: Vec<Scrap>,
    next_id: u64,
    next_z: u32,
    /// Last measured size; zero until laid out
    bounds: Vec2,
    min_scrap_size: f32,
    default_scrap_width: f32,
    fallback_scrap_size: Vec2,
}

impl ScrapCanvas {
    pub fn new(settings: &Settings) -> Self {
        Self {
            scraps: Vec::new(),
            next_id: 1,
            next_z: settings.first_z_order,
            bounds: Vec2::ZERO,
            min_scrap_size: settings.min_scrap_size,
            default_scrap_width: settings.default_scrap_width,
            fallback_scrap_size: settings.fallback_scrap_size,
        }
    }

    /// Wrap `content` in a new scrap on top of all others.
    ///
    /// The scrap stays unplaced until [`ScrapCanvas::set_bounds`] sees a
    /// measured canvas.
    pub fn add_scrap(&mut self, content: ScrapContent) -> ScrapId {
        let id = ScrapId(self.next_id);
        self.next_id += 1;
        let z_order = self.take_z_order();
        log::info!("Added scrap {} ({}) at z {}", id.0, content.label(), z_order);
        self.scraps.push(Scrap::new(id, content, z_order));
        self.finish_pending();
        id
    }

    /// Give `id` the highest z-order handed out so far.
    pub fn bring_to_front(&mut self, id: ScrapId) {
        let z_order = self.take_z_order();
        if let Some(scrap) = self.scrap_mut(id) {
            scrap.z_order = z_order;
        }
    }

    fn take_z_order(&mut self) -> u32 {
        let z_order = self.next_z;
        self.next_z += 1;
        z_order
    }

    /// Record the canvas size measured this frame.
    ///
    /// Pending scraps are placed as soon as the size is non-zero; placed
    /// scraps are pulled back inside if the canvas changed size. Returns true
    /// while scraps are still waiting for a measured canvas, meaning the
    /// caller should try again next frame.
    pub fn set_bounds(&mut self, bounds: Vec2) -> bool {
        if is_unmeasured(bounds) {
            return self.has_pending();
        }

        if bounds != self.bounds {
            self.bounds = bounds;
            for scrap in self.scraps.iter_mut().filter(|s| s.placed) {
                scrap.size = scrap.size.min(bounds);
                scrap.position = clamp_position(scrap.position, scrap.size, bounds);
            }
        }

        self.finish_pending();
        false
    }

    /// Lock size, aspect ratio and centered position of every unplaced scrap.
    fn finish_pending(&mut self) {
        if is_unmeasured(self.bounds) {
            return;
        }
        let bounds = self.bounds;
        for index in 0..self.scraps.len() {
            if self.scraps[index].placed {
                continue;
            }
            let size = self.initial_size(&self.scraps[index].content).min(bounds);
            let scrap = &mut self.scraps[index];
            scrap.aspect_ratio = scrap.content.aspect_ratio();
            scrap.size = size;
            scrap.position = centered_position(size, bounds);
            scrap.placed = true;
            debug_assert!(scrap.fits_within(bounds));
            log::debug!(
                "Placed scrap {} at ({:.0}, {:.0}) size {:.0}x{:.0}",
                scrap.id.0,
                scrap.position.x,
                scrap.position.y,
                size.x,
                size.y
            );
        }
    }

    /// Size a scrap is locked to when it is first placed.
    pub fn initial_size(&self, content: &ScrapContent) -> Vec2 {
        match content.aspect_ratio() {
            Some(ratio) => {
                let width = self.default_scrap_width;
                Vec2::new(width, (width / ratio).max(self.min_scrap_size))
            }
            None => self.fallback_scrap_size,
        }
    }

    /// Start a drag (body) or resize (handle) on `id`.
    ///
    /// A handle press never starts a drag. On success the scrap is raised.
    pub fn pointer_down(
        &mut self,
        id: ScrapId,
        target: PointerTarget,
        pointer: PointerId,
        cursor: Pos2,
    ) -> bool {
        let Some(scrap) = self.scrap_mut(id).filter(|s| s.placed) else {
            return false;
        };
        if scrap.is_dragging() || scrap.is_resizing() {
            return false;
        }

        let started = match target {
            PointerTarget::Body => scrap.drag.pointer_down(pointer, cursor, scrap.position),
            PointerTarget::Handle => scrap.resize.pointer_down(pointer, cursor, scrap.size),
        };
        if started {
            log::debug!("Scrap {} {:?} gesture started by {:?}", id.0, target, pointer);
            self.bring_to_front(id);
        }
        started
    }

    /// Apply a pointer move to whichever gesture `pointer` holds on `id`.
    pub fn pointer_move(&mut self, id: ScrapId, pointer: PointerId, cursor: Pos2) -> bool {
        let bounds = self.bounds;
        let min_size = self.min_scrap_size;
        let Some(scrap) = self.scrap_mut(id) else {
            return false;
        };

        if let Some(position) = scrap.drag.pointer_move(pointer, cursor, scrap.size, bounds) {
            scrap.position = position;
            return true;
        }
        if let Some(size) = scrap.resize.pointer_move(
            pointer,
            cursor,
            scrap.position,
            scrap.aspect_ratio,
            bounds,
            min_size,
        ) {
            scrap.size = size;
            return true;
        }
        false
    }

    /// End any gesture `pointer` holds on `id`.
    pub fn pointer_up(&mut self, id: ScrapId, pointer: PointerId) -> bool {
        let Some(scrap) = self.scrap_mut(id) else {
            return false;
        };
        let ended = scrap.drag.pointer_up(pointer) | scrap.resize.pointer_up(pointer);
        if ended {
            log::debug!("Scrap {} gesture ended by {:?}", id.0, pointer);
        }
        ended
    }

    pub fn pointer_cancel(&mut self, id: ScrapId, pointer: PointerId) -> bool {
        let Some(scrap) = self.scrap_mut(id) else {
            return false;
        };
        let ended = scrap.drag.pointer_cancel(pointer) | scrap.resize.pointer_cancel(pointer);
        if ended {
            log::debug!("Scrap {} gesture cancelled for {:?}", id.0, pointer);
        }
        ended
    }

    /// Cancel every active gesture held by `pointer`, on any scrap.
    pub fn cancel_pointer(&mut self, pointer: PointerId) {
        let ids: Vec<ScrapId> = self.scraps.iter().map(|s| s.id).collect();
        for id in ids {
            self.pointer_cancel(id, pointer);
        }
    }

    fn scrap_mut(&mut self, id: ScrapId) -> Option<&mut Scrap> {
        self.scraps.iter_mut().find(|s| s.id == id)
    }

    /// Placed scraps, bottom-most first.
    pub fn scraps_by_z(&self) -> Vec<&Scrap> {
        let mut placed: Vec<&Scrap> = self.scraps.iter().filter(|s| s.placed).collect();
        placed.sort_by_key(|s| s.z_order);
        placed
    }

    pub fn has_pending(&self) -> bool {
        self.scraps.iter().any(|s| !s.placed)
    }

    pub fn is_empty(&self) -> bool {
        self.scraps.is_empty()
    }
}

#[cfg(test)]
impl ScrapCanvas {
    fn scrap(&self, id: ScrapId) -> Option<&Scrap> {
        self.scraps.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scrap::Gradient;
    use egui::{pos2, vec2, Color32};

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn image(width: usize, height: usize) -> ScrapContent {
        let ctx = egui::Context::default();
        let texture = ctx.load_texture(
            "scrap",
            egui::ColorImage::new([width, height], Color32::WHITE),
            egui::TextureOptions::LINEAR,
        );
        ScrapContent::Image {
            name: "photo.png".to_string(),
            texture,
            natural_size: [width, height],
        }
    }

    fn paper() -> ScrapContent {
        ScrapContent::Paper {
            gradient: Gradient::random(),
        }
    }

    fn laid_out_canvas() -> ScrapCanvas {
        let mut canvas = ScrapCanvas::new(&Settings::default());
        canvas.set_bounds(BOUNDS);
        canvas
    }

    #[test]
    fn test_image_scrap_locks_ratio_size_and_center() {
        let mut canvas = laid_out_canvas();
        let id = canvas.add_scrap(image(400, 200));
        let scrap = canvas.scrap(id).expect("scrap exists");

        assert!(scrap.placed);
        assert_eq!(scrap.aspect_ratio, Some(2.0));
        assert_eq!(scrap.size, vec2(220.0, 110.0));
        assert_eq!(scrap.position, pos2(290.0, 245.0));
        assert!(scrap.fits_within(BOUNDS));
    }

    #[test]
    fn test_paper_scrap_uses_fallback_size() {
        let mut canvas = laid_out_canvas();
        let id = canvas.add_scrap(paper());
        let scrap = canvas.scrap(id).expect("scrap exists");

        assert_eq!(scrap.aspect_ratio, None);
        assert_eq!(scrap.size, vec2(220.0, 160.0));
    }

    #[test]
    fn test_placement_waits_for_measured_canvas() {
        let mut canvas = ScrapCanvas::new(&Settings::default());
        let id = canvas.add_scrap(image(400, 200));

        assert!(canvas.has_pending());
        assert!(canvas.scraps_by_z().is_empty());
        assert!(canvas.set_bounds(Vec2::ZERO), "still pending on an unmeasured canvas");

        assert!(!canvas.set_bounds(BOUNDS));
        assert!(!canvas.has_pending());
        assert_eq!(canvas.scrap(id).map(|s| s.position), Some(pos2(290.0, 245.0)));
    }

    #[test]
    fn test_oversized_content_is_fitted_to_canvas() {
        let mut canvas = ScrapCanvas::new(&Settings::default());
        canvas.set_bounds(vec2(150.0, 100.0));
        let id = canvas.add_scrap(image(100, 400));
        let scrap = canvas.scrap(id).expect("scrap exists");

        assert!(scrap.fits_within(vec2(150.0, 100.0)));
        assert_eq!(scrap.position, pos2(0.0, 0.0));
    }

    #[test]
    fn test_z_order_increases_with_creation_and_focus() {
        let mut canvas = laid_out_canvas();
        let first = canvas.add_scrap(paper());
        let second = canvas.add_scrap(paper());

        assert_eq!(canvas.scrap(first).map(|s| s.z_order), Some(10));
        assert_eq!(canvas.scrap(second).map(|s| s.z_order), Some(11));

        assert!(canvas.pointer_down(first, PointerTarget::Body, PointerId::MOUSE, pos2(400.0, 300.0)));
        let order: Vec<ScrapId> = canvas.scraps_by_z().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![second, first]);
        assert_eq!(canvas.scrap(first).map(|s| s.z_order), Some(12));
    }

    #[test]
    fn test_drag_moves_within_bounds_and_keeps_size() {
        let mut canvas = laid_out_canvas();
        let id = canvas.add_scrap(image(400, 200));

        canvas.pointer_down(id, PointerTarget::Body, PointerId::MOUSE, pos2(300.0, 250.0));
        assert!(canvas.pointer_move(id, PointerId::MOUSE, pos2(2000.0, -900.0)));
        assert!(canvas.pointer_up(id, PointerId::MOUSE));

        let scrap = canvas.scrap(id).expect("scrap exists");
        assert_eq!(scrap.position, pos2(580.0, 0.0));
        assert_eq!(scrap.size, vec2(220.0, 110.0));
        assert!(!scrap.is_dragging());
    }

    #[test]
    fn test_handle_press_resizes_without_dragging() {
        let mut canvas = laid_out_canvas();
        let id = canvas.add_scrap(image(400, 200));

        assert!(canvas.pointer_down(id, PointerTarget::Handle, PointerId::MOUSE, pos2(510.0, 355.0)));
        let scrap = canvas.scrap(id).expect("scrap exists");
        assert!(scrap.is_resizing());
        assert!(!scrap.is_dragging());

        // A body press while the handle holds the pointer starts nothing
        assert!(!canvas.pointer_down(id, PointerTarget::Body, PointerId::MOUSE, pos2(400.0, 300.0)));

        canvas.pointer_move(id, PointerId::MOUSE, pos2(590.0, 355.0));
        let scrap = canvas.scrap(id).expect("scrap exists");
        assert_eq!(scrap.position, pos2(290.0, 245.0));
        assert_eq!(scrap.size, vec2(300.0, 150.0));
    }

    #[test]
    fn test_aspect_locked_resize_sequence_keeps_ratio() {
        let mut canvas = laid_out_canvas();
        let id = canvas.add_scrap(image(400, 200));

        canvas.pointer_down(id, PointerTarget::Handle, PointerId::MOUSE, pos2(0.0, 0.0));
        for dx in [-40.0_f32, -10.0, 25.0, 90.0, 140.0] {
            canvas.pointer_move(id, PointerId::MOUSE, pos2(dx, dx * 3.0));
            let scrap = canvas.scrap(id).expect("scrap exists");
            assert!((scrap.size.y - scrap.size.x / 2.0).abs() < 0.01, "{:?}", scrap.size);
            assert!(scrap.fits_within(BOUNDS));
        }
        canvas.pointer_up(id, PointerId::MOUSE);
    }

    #[test]
    fn test_resize_is_capped_by_canvas_edge() {
        let mut canvas = laid_out_canvas();
        let id = canvas.add_scrap(paper());

        canvas.pointer_down(id, PointerTarget::Handle, PointerId::MOUSE, pos2(0.0, 0.0));
        canvas.pointer_move(id, PointerId::MOUSE, pos2(5000.0, 5000.0));
        let scrap = canvas.scrap(id).expect("scrap exists");

        assert!(scrap.fits_within(BOUNDS));
        assert_eq!(scrap.position.x + scrap.size.x, BOUNDS.x);
        assert_eq!(scrap.position.y + scrap.size.y, BOUNDS.y);
    }

    #[test]
    fn test_cancel_releases_gestures_on_every_scrap() {
        let mut canvas = laid_out_canvas();
        let first = canvas.add_scrap(paper());
        let second = canvas.add_scrap(paper());

        canvas.pointer_down(first, PointerTarget::Body, PointerId(1), pos2(0.0, 0.0));
        canvas.pointer_down(second, PointerTarget::Handle, PointerId(2), pos2(0.0, 0.0));
        canvas.cancel_pointer(PointerId(1));

        assert!(!canvas.scrap(first).expect("first").is_dragging());
        assert!(canvas.scrap(second).expect("second").is_resizing());
    }

    #[test]
    fn test_shrinking_canvas_pulls_scraps_back_inside() {
        let mut canvas = laid_out_canvas();
        let id = canvas.add_scrap(paper());
        canvas.pointer_down(id, PointerTarget::Body, PointerId::MOUSE, pos2(0.0, 0.0));
        canvas.pointer_move(id, PointerId::MOUSE, pos2(1000.0, 1000.0));
        canvas.pointer_up(id, PointerId::MOUSE);

        canvas.set_bounds(vec2(400.0, 150.0));
        let scrap = canvas.scrap(id).expect("scrap exists");
        assert!(scrap.fits_within(vec2(400.0, 150.0)));
        assert_eq!(scrap.size, vec2(220.0, 150.0));
    }

    #[test]
    fn test_events_for_unknown_scraps_are_ignored() {
        let mut canvas = laid_out_canvas();
        assert!(!canvas.pointer_down(ScrapId(99), PointerTarget::Body, PointerId::MOUSE, pos2(0.0, 0.0)));
        assert!(!canvas.pointer_move(ScrapId(99), PointerId::MOUSE, pos2(0.0, 0.0)));
        assert!(!canvas.pointer_up(ScrapId(99), PointerId::MOUSE));
        assert!(canvas.is_empty());
    }
}
