// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! All tunables are compile-time defaults; the journal keeps no settings
//! file and reads no environment besides `RUST_LOG`.

use egui::Vec2;

/// Layout and animation tunables shared by the screen controller and canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Initial window size
    pub window_size: Vec2,
    /// Smallest window the layout still works in
    pub min_window_size: Vec2,
    /// Minimum scrap width and height in pixels
    pub min_scrap_size: f32,
    /// Z-order handed to the first scrap
    pub first_z_order: u32,
    /// Width an image scrap is locked to when it is first placed
    pub default_scrap_width: f32,
    /// Locked size for content without a usable intrinsic size
    pub fallback_scrap_size: Vec2,
    /// Length of the closed-notebook shake, in seconds
    pub shake_duration: f64,
    /// Length of the landing fade-out, in seconds
    pub fade_duration: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: Vec2::new(1280.0, 720.0),
            min_window_size: Vec2::new(800.0, 600.0),
            min_scrap_size: 90.0,
            first_z_order: 10,
            default_scrap_width: 220.0,
            fallback_scrap_size: Vec2::new(220.0, 160.0),
            shake_duration: 0.5,
            fade_duration: 0.6,
        }
    }
}
