// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Importing image files as scraps.

pub mod error;
pub mod import;
pub mod media;

pub use error::ImportError;
pub use import::ScrapImporter;
