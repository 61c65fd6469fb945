// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-scrap pointer gesture controllers.
//!
//! Each scrap owns one [`DragController`] and one [`ResizeController`]. A
//! controller holds at most one session, keyed by the pointer that started
//! it; events from any other pointer are ignored until that pointer is
//! released or cancelled.

pub mod drag;
pub mod resize;

pub use drag::DragController;
pub use resize::ResizeController;

/// Identifier of a pointing device, as reported by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The primary mouse pointer.
    pub const MOUSE: PointerId = PointerId(0);
}
