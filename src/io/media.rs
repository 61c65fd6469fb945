// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! This module works out the declared media type of a picked file and decodes
//! image files into RGBA pixels suitable for an egui texture.

use super::error::ImportError;
use image::imageops::FilterType;
use image::GenericImageView;
use std::path::Path;

/// Media type reported for files whose extension is not recognised.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Name given to scraps whose file has no usable name.
pub const FALLBACK_NAME: &str = "Uploaded scrap";

/// A decoded image ready to be uploaded as a texture.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub name: String,
    /// Pixel size of `pixels`, never above the texture limit
    pub width: u32,
    pub height: u32,
    /// Size of the file's image before any downscale
    pub natural_width: u32,
    pub natural_height: u32,
    /// Unmultiplied RGBA, row-major
    pub pixels: Vec<u8>,
}

/// Media type declared by a file's extension.
pub fn declared_media_type(path: &Path) -> String {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MEDIA_TYPE.to_string())
}

/// True for any `image/*` media type.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// Display name for a picked file.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Read and decode an image file, downscaling it to fit `max_side`.
pub fn load_image(path: &Path, max_side: u32) -> Result<LoadedImage, ImportError> {
    let bytes = std::fs::read(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(display_name(path), &bytes, max_side)
}

/// Decode in-memory image bytes; the format is sniffed from the content.
///
/// Images with a side longer than `max_side` are scaled down, keeping their
/// aspect ratio, so the pixels can always be uploaded as one texture. The
/// natural size is reported unchanged.
pub fn decode_image(name: String, bytes: &[u8], max_side: u32) -> Result<LoadedImage, ImportError> {
    let mut decoded = match image::load_from_memory(bytes) {
        Ok(decoded) => decoded,
        Err(source) => return Err(ImportError::Decode { name, source }),
    };
    let (natural_width, natural_height) = decoded.dimensions();

    let max_side = max_side.max(1);
    if natural_width > max_side || natural_height > max_side {
        decoded = decoded.resize(max_side, max_side, FilterType::Triangle);
        log::debug!(
            "Downscaled {} from {}x{} to {}x{}",
            name,
            natural_width,
            natural_height,
            decoded.width(),
            decoded.height()
        );
    }

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        name,
        width,
        height,
        natural_width,
        natural_height,
        pixels: rgba.into_raw(),
    })
}
