// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pencilcase tool panel.
//!
//! The pencilcase button opens and closes a small menu of scrap tools. It
//! only responds while the journal layout is showing.

/// Open/closed state of the pencilcase and its menu.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PencilcaseMenu {
    open: bool,
}

/// Tool picked from the pencilcase menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PencilcaseAction {
    None,
    AddImageScrap,
    AddPaperScrap,
}

impl PencilcaseMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the pencilcase open or closed. Ignored while the journal is hidden.
    pub fn toggle(&mut self, layout_visible: bool) -> bool {
        if !layout_visible {
            return false;
        }
        self.open = !self.open;
        log::debug!("Pencilcase {}", if self.open { "opened" } else { "closed" });
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn menu_hidden(&self) -> bool {
        !self.open
    }
}

/// Display the pencilcase area.
pub fn show(
    ui: &mut egui::Ui,
    menu: &mut PencilcaseMenu,
    layout_visible: bool,
    decoding: bool,
) -> PencilcaseAction {
    let mut action = PencilcaseAction::None;

    ui.vertical(|ui| {
        ui.add_space(8.0);
        let label = if menu.is_open() { "✏ Pencilcase ▾" } else { "✏ Pencilcase ▸" };
        if ui.selectable_label(menu.is_open(), label).clicked() {
            menu.toggle(layout_visible);
        }

        if !menu.menu_hidden() {
            ui.separator();
            if ui.button("🖼 Add image scrap...").clicked() {
                action = PencilcaseAction::AddImageScrap;
            }
            if ui.button("📄 Add paper scrap").clicked() {
                action = PencilcaseAction::AddPaperScrap;
            }
        }

        if decoding {
            ui.separator();
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Decoding...").italics().weak());
            });
        }
    });

    action
}
