// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Errors raised while turning a picked file into a scrap.

use std::path::PathBuf;
use thiserror::Error;

/// Why a picked file did not become a scrap.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no file selected")]
    NoSelection,
    #[error("{name} has type {media_type}, which is not an image")]
    NotAnImage { name: String, media_type: String },
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {name}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("decoding {name} panicked")]
    Panicked { name: String },
}

impl ImportError {
    /// Rejections the user should be told about, as opposed to failures that are only logged.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ImportError::NotAnImage { .. })
    }
}
