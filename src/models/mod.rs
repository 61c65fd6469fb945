// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Journal state: the screen transition, the scrap canvas and its scraps.

pub mod canvas;
pub mod scrap;
pub mod screen;
