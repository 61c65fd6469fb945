// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the journal.

pub mod canvas;
pub mod landing;
pub mod pencilcase;
