// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It drives the screen transition, owns the scrap
//! canvas and importer, and routes canvas and pencilcase actions to them.

use crate::config::Settings;
use crate::input::PointerId;
use crate::io::{media::LoadedImage, ImportError, ScrapImporter};
use crate::models::{
    canvas::ScrapCanvas,
    scrap::{Gradient, ScrapContent},
    screen::ScreenController,
};
use crate::ui::{
    canvas::{self, CanvasEvent},
    landing,
    pencilcase::{self, PencilcaseAction, PencilcaseMenu},
};

/// Extensions offered by the image picker's default filter.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif"];

/// Message shown when a picked file is not an image.
const NOT_AN_IMAGE_MESSAGE: &str = "Please choose an image file.";

/// Main application state.
pub struct JournalApp {
    /// Closed notebook -> open journal sequence
    screen: ScreenController,

    /// Pencilcase tool panel state
    pencilcase: PencilcaseMenu,

    /// Scraps on the journal page
    canvas: ScrapCanvas,

    /// Picks, validates and decodes image files
    importer: ScrapImporter,
}

impl Default for JournalApp {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl JournalApp {
    /// Create a new journal application instance.
    pub fn new(settings: &Settings) -> Self {
        Self {
            screen: ScreenController::new(settings),
            pencilcase: PencilcaseMenu::new(),
            canvas: ScrapCanvas::new(settings),
            importer: ScrapImporter::new(),
        }
    }

    /// Open the native file picker and import whatever the user chooses.
    fn pick_image_scrap(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Add image scrap")
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };

        self.importer.select(path);
        if let Err(err) = self.importer.import_selection() {
            report_import_error(err);
        }
    }

    fn add_paper_scrap(&mut self) {
        self.canvas.add_scrap(ScrapContent::Paper {
            gradient: Gradient::random(),
        });
    }

    /// Turn finished decodes into image scraps.
    fn collect_imports(&mut self, ctx: &egui::Context) {
        for result in self.importer.poll() {
            match result {
                Ok(loaded) => {
                    let content = image_content(ctx, loaded);
                    self.canvas.add_scrap(content);
                }
                Err(err) => report_import_error(err),
            }
        }
    }

    fn apply_canvas_events(&mut self, events: Vec<CanvasEvent>) {
        for event in events {
            match event {
                CanvasEvent::PointerDown {
                    scrap,
                    target,
                    pointer,
                    cursor,
                } => {
                    self.canvas.pointer_down(scrap, target, pointer, cursor);
                }
                CanvasEvent::PointerMove {
                    scrap,
                    pointer,
                    cursor,
                } => {
                    self.canvas.pointer_move(scrap, pointer, cursor);
                }
                CanvasEvent::PointerUp { scrap, pointer } => {
                    self.canvas.pointer_up(scrap, pointer);
                }
            }
        }
    }
}

/// Upload decoded pixels and wrap them as scrap content.
///
/// The texture may be a downscaled copy; the aspect ratio comes from the
/// image's natural size.
fn image_content(ctx: &egui::Context, loaded: LoadedImage) -> ScrapContent {
    let texture_size = [loaded.width as usize, loaded.height as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(texture_size, &loaded.pixels);
    let texture = ctx.load_texture(
        format!("scrap-{}", loaded.name),
        color_image,
        egui::TextureOptions::LINEAR,
    );
    ScrapContent::Image {
        name: loaded.name,
        texture,
        natural_size: [loaded.natural_width as usize, loaded.natural_height as usize],
    }
}

/// Tell the user about rejected files; everything else is only logged.
fn report_import_error(err: ImportError) {
    if err.is_rejection() {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Add image scrap")
            .set_description(NOT_AN_IMAGE_MESSAGE)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    } else {
        log::error!("Failed to import scrap: {:#}", anyhow::Error::new(err));
    }
}

impl eframe::App for JournalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        if let Some(animation) = self.screen.tick(now) {
            log::debug!("{:?} animation finished", animation);
        }

        self.importer
            .set_max_texture_side(ctx.input(|i| i.max_texture_side));
        self.collect_imports(ctx);

        if self.screen.landing_visible() {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    if landing::show(ui, &self.screen, now) {
                        self.screen.click(now);
                    }
                });

            if self.screen.is_animating() {
                ctx.request_repaint();
            }
            return;
        }

        // Pencilcase area (left side)
        let pencilcase_action = egui::SidePanel::left("pencilcase_area")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                pencilcase::show(
                    ui,
                    &mut self.pencilcase,
                    self.screen.layout_visible(),
                    self.importer.is_busy(),
                )
            })
            .inner;

        match pencilcase_action {
            PencilcaseAction::AddImageScrap => self.pick_image_scrap(),
            PencilcaseAction::AddPaperScrap => self.add_paper_scrap(),
            PencilcaseAction::None => {}
        }

        // Journal page (center)
        let output = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| canvas::show(ui, &self.canvas))
            .inner;

        if self.canvas.set_bounds(output.size) {
            // Canvas not laid out yet, retry placement next frame
            ctx.request_repaint();
        }
        self.apply_canvas_events(output.events);

        // Losing focus mid-gesture cancels it
        if !ctx.input(|i| i.focused) {
            self.canvas.cancel_pointer(PointerId::MOUSE);
        }

        // Keep polling while decodes are running
        if self.importer.is_busy() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn loaded_image(width: u32, height: u32, natural: (u32, u32)) -> LoadedImage {
        LoadedImage {
            name: "wide.png".to_string(),
            width,
            height,
            natural_width: natural.0,
            natural_height: natural.1,
            pixels: vec![255; (width * height * 4) as usize],
        }
    }

    fn measured_canvas() -> ScrapCanvas {
        let mut canvas = ScrapCanvas::new(&Settings::default());
        assert!(!canvas.set_bounds(vec2(800.0, 600.0)));
        canvas
    }

    #[test]
    fn test_decoded_image_becomes_centered_scrap() {
        let ctx = egui::Context::default();
        let content = image_content(&ctx, loaded_image(400, 200, (400, 200)));
        assert_eq!(content.aspect_ratio(), Some(2.0));

        let mut canvas = measured_canvas();
        canvas.add_scrap(content);

        let scraps = canvas.scraps_by_z();
        assert_eq!(scraps.len(), 1);
        let scrap = scraps[0];
        assert_eq!(scrap.aspect_ratio, Some(2.0));
        assert_eq!(scrap.size, vec2(220.0, 110.0));
        assert_eq!(scrap.position, pos2(290.0, 245.0));
        assert_eq!(scrap.z_order, 10);
    }

    #[test]
    fn test_downscaled_texture_keeps_natural_ratio() {
        let ctx = egui::Context::default();
        // 5000x100 shrunk to fit a 2048 texture
        let content = image_content(&ctx, loaded_image(2048, 41, (5000, 100)));

        match &content {
            ScrapContent::Image { texture, natural_size, .. } => {
                assert_eq!(texture.size(), [2048, 41]);
                assert_eq!(*natural_size, [5000, 100]);
            }
            ScrapContent::Paper { .. } => panic!("expected an image scrap"),
        }
        assert_eq!(content.aspect_ratio(), Some(50.0));
    }
}
