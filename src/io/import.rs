// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scrap importer.
//!
//! Holds the file the user picked, validates its declared media type and
//! decodes accepted files on background threads. Results come back over a
//! channel and are collected once per frame with [`ScrapImporter::poll`].

use super::error::ImportError;
use super::media::{self, LoadedImage};
use std::panic::{self, UnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// A file the user picked, not yet handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub path: PathBuf,
    pub media_type: String,
}

impl Selection {
    pub fn from_path(path: PathBuf) -> Self {
        let media_type = media::declared_media_type(&path);
        Self { path, media_type }
    }
}

type DecodeResult = Result<LoadedImage, ImportError>;

/// Texture side assumed until the renderer reports its own limit.
pub const DEFAULT_MAX_TEXTURE_SIDE: usize = 2048;

/// Turns picked files into decoded images.
pub struct ScrapImporter {
    selection: Option<Selection>,
    sender: Sender<DecodeResult>,
    receiver: Receiver<DecodeResult>,
    in_flight: usize,
    max_texture_side: u32,
}

impl Default for ScrapImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrapImporter {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            selection: None,
            sender,
            receiver,
            in_flight: 0,
            max_texture_side: DEFAULT_MAX_TEXTURE_SIDE as u32,
        }
    }

    /// Largest texture side the renderer accepts; decoded images are scaled to fit.
    pub fn set_max_texture_side(&mut self, side: usize) {
        self.max_texture_side = u32::try_from(side).unwrap_or(u32::MAX).max(1);
    }

    /// Remember a picked file, replacing any earlier selection.
    pub fn select(&mut self, path: PathBuf) {
        self.selection = Some(Selection::from_path(path));
    }

    /// Validate the current selection and start decoding it.
    ///
    /// The selection is cleared whatever the outcome, so the same file can be
    /// picked again. Non-image files are rejected before any I/O happens.
    pub fn import_selection(&mut self) -> Result<(), ImportError> {
        let selection = self.selection.take().ok_or(ImportError::NoSelection)?;

        if !media::is_image_media_type(&selection.media_type) {
            log::warn!(
                "Rejected {} with media type {}",
                selection.path.display(),
                selection.media_type
            );
            return Err(ImportError::NotAnImage {
                name: media::display_name(&selection.path),
                media_type: selection.media_type,
            });
        }

        log::info!("Importing {}", selection.path.display());
        let name = media::display_name(&selection.path);
        let path = selection.path;
        let max_side = self.max_texture_side;
        self.spawn_decode(name, move || {
            let result = media::load_image(&path, max_side);
            if let Ok(ref loaded) = result {
                log::info!(
                    "Decoded {} ({}x{})",
                    path.display(),
                    loaded.natural_width,
                    loaded.natural_height
                );
            }
            result
        });

        Ok(())
    }

    /// Run `job` on its own thread. Exactly one result is sent per job, even
    /// when the job panics, so the busy count always drains.
    fn spawn_decode<F>(&mut self, name: String, job: F)
    where
        F: FnOnce() -> DecodeResult + Send + UnwindSafe + 'static,
    {
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let result = panic::catch_unwind(job).unwrap_or_else(|_| {
                log::error!("Decoding {} panicked", name);
                Err(ImportError::Panicked { name })
            });
            let _ = sender.send(result);
        });
        self.in_flight += 1;
    }

    /// Collect every decode that finished since the last call.
    pub fn poll(&mut self) -> Vec<DecodeResult> {
        let mut finished = Vec::new();
        while let Ok(result) = self.receiver.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            finished.push(result);
        }
        finished
    }

    /// True while at least one decode is running.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
impl ScrapImporter {
    fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Pick `path` and import it in one step.
    fn import_path(&mut self, path: PathBuf) -> Result<(), ImportError> {
        self.select(path);
        self.import_selection()
    }

    /// Block until the next decode finishes.
    fn wait_for_result(&mut self) -> DecodeResult {
        let result = self
            .receiver
            .recv_timeout(std::time::Duration::from_secs(10))
            .expect("decode finished in time");
        self.in_flight = self.in_flight.saturating_sub(1);
        result
    }
}
