// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scrap data structures.
//!
//! A scrap is a card on the journal canvas holding an imported image or a
//! blank sheet of gradient paper. Positions are canvas-relative pixels.

use crate::input::{DragController, ResizeController};
use egui::{Color32, Pos2, Rect, Vec2};
use rand::seq::SliceRandom;

/// Stable identifier of a scrap on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScrapId(pub u64);

/// Palette pairs for paper scraps, painted at 135 degrees.
const PAPER_PALETTES: [(Color32, Color32); 4] = [
    (Color32::from_rgb(0xf6, 0xd3, 0x65), Color32::from_rgb(0xfd, 0xa0, 0x85)),
    (Color32::from_rgb(0xa1, 0xc4, 0xfd), Color32::from_rgb(0xc2, 0xe9, 0xfb)),
    (Color32::from_rgb(0x84, 0xfa, 0xb0), Color32::from_rgb(0x8f, 0xd3, 0xf4)),
    (Color32::from_rgb(0xfc, 0xcb, 0x90), Color32::from_rgb(0xd5, 0x7e, 0xeb)),
];

/// Two-stop diagonal gradient running from the top-left to the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Color32,
    pub to: Color32,
}

impl Gradient {
    /// Pick one of the paper palettes at random.
    pub fn random() -> Self {
        let (from, to) = PAPER_PALETTES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(PAPER_PALETTES[0]);
        Self { from, to }
    }

    /// Colour halfway between the two stops, used for the off-diagonal corners.
    pub fn midpoint(&self) -> Color32 {
        let mix = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Color32::from_rgb(
            mix(self.from.r(), self.to.r()),
            mix(self.from.g(), self.to.g()),
            mix(self.from.b(), self.to.b()),
        )
    }
}

/// What a scrap displays.
#[derive(Clone)]
pub enum ScrapContent {
    /// A decoded image uploaded to the GPU.
    Image {
        name: String,
        texture: egui::TextureHandle,
        /// Natural pixel size (width, height)
        natural_size: [usize; 2],
    },
    /// Blank paper painted with a gradient.
    Paper { gradient: Gradient },
}

impl ScrapContent {
    /// Natural width / natural height, for content that has one.
    pub fn aspect_ratio(&self) -> Option<f32> {
        match self {
            ScrapContent::Image { natural_size: [w, h], .. } if *w > 0 && *h > 0 => {
                Some(*w as f32 / *h as f32)
            }
            _ => None,
        }
    }

    /// Human-readable label, used as alt text and in log lines.
    pub fn label(&self) -> &str {
        match self {
            ScrapContent::Image { name, .. } => name,
            ScrapContent::Paper { .. } => "paper scrap",
        }
    }
}

impl std::fmt::Debug for ScrapContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrapContent::Image { name, natural_size, .. } => f
                .debug_struct("Image")
                .field("name", name)
                .field("natural_size", natural_size)
                .finish(),
            ScrapContent::Paper { gradient } => {
                f.debug_struct("Paper").field("gradient", gradient).finish()
            }
        }
    }
}

/// A card on the canvas.
///
/// `position` and `size` are only meaningful once `placed` is set; until then
/// the scrap is waiting for the canvas to be laid out and is not drawn.
#[derive(Debug, Clone)]
pub struct Scrap {
    pub id: ScrapId,
    pub content: ScrapContent,
    /// Top-left corner, relative to the canvas origin
    pub position: Pos2,
    /// Locked width and height
    pub size: Vec2,
    /// Paint and hit-test order; larger is on top
    pub z_order: u32,
    /// Width / height kept while resizing, if locked
    pub aspect_ratio: Option<f32>,
    pub placed: bool,
    pub drag: DragController,
    pub resize: ResizeController,
}

impl Scrap {
    /// Create an unplaced scrap for `content`.
    pub fn new(id: ScrapId, content: ScrapContent, z_order: u32) -> Self {
        Self {
            id,
            content,
            position: Pos2::ZERO,
            size: Vec2::ZERO,
            z_order,
            aspect_ratio: None,
            placed: false,
            drag: DragController::new(),
            resize: ResizeController::new(),
        }
    }

    /// Canvas-relative rectangle occupied by the scrap.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    /// True when the whole scrap lies inside `bounds`.
    pub fn fits_within(&self, bounds: Vec2) -> bool {
        const EPSILON: f32 = 0.001;
        self.position.x >= 0.0
            && self.position.y >= 0.0
            && self.position.x + self.size.x <= bounds.x + EPSILON
            && self.position.y + self.size.y <= bounds.y + EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_content(width: usize, height: usize) -> ScrapContent {
        let ctx = egui::Context::default();
        let texture = ctx.load_texture(
            "test",
            egui::ColorImage::new([width, height], Color32::WHITE),
            egui::TextureOptions::LINEAR,
        );
        ScrapContent::Image {
            name: "test.png".to_string(),
            texture,
            natural_size: [width, height],
        }
    }

    #[test]
    fn test_image_aspect_ratio_is_natural_width_over_height() {
        assert_eq!(image_content(400, 200).aspect_ratio(), Some(2.0));
        assert_eq!(image_content(300, 600).aspect_ratio(), Some(0.5));
    }

    #[test]
    fn test_paper_has_no_aspect_ratio() {
        let paper = ScrapContent::Paper {
            gradient: Gradient::random(),
        };
        assert_eq!(paper.aspect_ratio(), None);
        assert_eq!(paper.label(), "paper scrap");
    }

    #[test]
    fn test_random_gradient_comes_from_palette() {
        for _ in 0..20 {
            let gradient = Gradient::random();
            assert!(PAPER_PALETTES.contains(&(gradient.from, gradient.to)));
        }
    }

    #[test]
    fn test_gradient_midpoint_mixes_channels() {
        let gradient = Gradient {
            from: Color32::from_rgb(0, 100, 200),
            to: Color32::from_rgb(100, 200, 250),
        };
        assert_eq!(gradient.midpoint(), Color32::from_rgb(50, 150, 225));
    }

    #[test]
    fn test_new_scrap_is_unplaced_and_idle() {
        let scrap = Scrap::new(ScrapId(1), image_content(4, 2), 10);
        assert!(!scrap.placed);
        assert!(!scrap.is_dragging());
        assert!(!scrap.is_resizing());
        assert_eq!(scrap.z_order, 10);
    }
}
