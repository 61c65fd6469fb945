// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the clamping and fitting arithmetic used when scraps
//! are placed, dragged and resized inside the canvas.

use egui::{Pos2, Vec2};

/// Clamp one axis of a position so `[value, value + extent]` stays inside
/// `[0, limit]`. When the extent is larger than the limit the result is 0.
pub fn clamp_axis(value: f32, extent: f32, limit: f32) -> f32 {
    value.min(limit - extent).max(0.0)
}

/// Clamp a top-left position so a box of `size` stays inside `bounds`.
pub fn clamp_position(position: Pos2, size: Vec2, bounds: Vec2) -> Pos2 {
    Pos2::new(
        clamp_axis(position.x, size.x, bounds.x),
        clamp_axis(position.y, size.y, bounds.y),
    )
}

/// Top-left position that centers a box of `size` inside `bounds`, never
/// negative on either axis.
pub fn centered_position(size: Vec2, bounds: Vec2) -> Pos2 {
    Pos2::new(
        ((bounds.x - size.x) / 2.0).max(0.0),
        ((bounds.y - size.y) / 2.0).max(0.0),
    )
}

/// True when the measured bounds have not been laid out yet.
pub fn is_unmeasured(bounds: Vec2) -> bool {
    bounds.x <= 0.0 || bounds.y <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis_inside_range_is_unchanged() {
        assert_eq!(clamp_axis(40.0, 100.0, 500.0), 40.0);
    }

    #[test]
    fn test_clamp_axis_limits() {
        assert_eq!(clamp_axis(-25.0, 100.0, 500.0), 0.0);
        assert_eq!(clamp_axis(450.0, 100.0, 500.0), 400.0);
        // Oversized boxes pin to the origin
        assert_eq!(clamp_axis(10.0, 600.0, 500.0), 0.0);
    }

    #[test]
    fn test_centered_position() {
        let pos = centered_position(Vec2::new(200.0, 100.0), Vec2::new(800.0, 600.0));
        assert_eq!(pos, Pos2::new(300.0, 250.0));

        let pos = centered_position(Vec2::new(900.0, 100.0), Vec2::new(800.0, 600.0));
        assert_eq!(pos.x, 0.0);
    }

    #[test]
    fn test_is_unmeasured() {
        assert!(is_unmeasured(Vec2::ZERO));
        assert!(is_unmeasured(Vec2::new(800.0, 0.0)));
        assert!(!is_unmeasured(Vec2::new(800.0, 600.0)));
    }
}
