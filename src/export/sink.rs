//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Tu.
//! The Tu project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Output Sink
//!
//! Materializes augmented images into a single flat output directory.
//!
//! Every save first attempts to create the directory. The attempt is
//! classified into a [`TuDirectoryStatus`]; each distinct status is logged
//! once per sink. A failed creation never stops the save itself: writing is
//! attempted against whatever is on disk, and only a failed write is an
//! error.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use log::Level;
use serde::{Deserialize, Serialize};

use crate::diagnostics::TuOnceLog;
use crate::errors::Result;

/// Filter used for every square resize.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Outcome of the directory creation attempt made before a save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuDirectoryStatus {
    Created,
    AlreadyExists,
    PermissionDenied,
    Failed(String),
}

impl TuDirectoryStatus {
    /// Classifies a failed `create_dir` call.
    pub fn from_io_error(err: &io::Error) -> Self {
        match err.kind() {
            ErrorKind::AlreadyExists => TuDirectoryStatus::AlreadyExists,
            ErrorKind::PermissionDenied => TuDirectoryStatus::PermissionDenied,
            _ => TuDirectoryStatus::Failed(err.to_string()),
        }
    }

    fn event(&self) -> &'static str {
        match self {
            TuDirectoryStatus::Created => "output_dir.created",
            TuDirectoryStatus::AlreadyExists => "output_dir.exists",
            TuDirectoryStatus::PermissionDenied => "output_dir.permission_denied",
            TuDirectoryStatus::Failed(_) => "output_dir.failed",
        }
    }

    fn level(&self) -> Level {
        match self {
            TuDirectoryStatus::Created | TuDirectoryStatus::AlreadyExists => Level::Info,
            TuDirectoryStatus::PermissionDenied | TuDirectoryStatus::Failed(_) => Level::Warn,
        }
    }
}

/// One persisted file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuOutputFile {
    pub name: String,
    pub path: PathBuf,
    /// BLAKE3 digest of the bytes on disk, hex encoded.
    pub hash: String,
}

/// Writes images into the configured output directory.
#[derive(Debug)]
pub struct TuOutputSink {
    directory: PathBuf,
    size: u32,
    resize_on_save: bool,
    diagnostics: TuOnceLog,
    batch_status: Option<TuDirectoryStatus>,
    batch_names: HashSet<String>,
    batch_overwrites: Vec<String>,
}

impl TuOutputSink {
    /// Creates a sink writing into `directory`.
    ///
    /// # Arguments
    /// * `directory` - Output directory; created on the first save
    /// * `size` - Edge of the square resize applied before writing
    /// * `resize_on_save` - When `false`, images are written at their own size
    pub fn new(directory: impl Into<PathBuf>, size: u32, resize_on_save: bool) -> Self {
        Self {
            directory: directory.into(),
            size,
            resize_on_save,
            diagnostics: TuOnceLog::new(),
            batch_status: None,
            batch_names: HashSet::new(),
            batch_overwrites: Vec::new(),
        }
    }

    /// Output directory, as configured.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Starts a new batch; the next creation attempt becomes its status.
    pub fn begin_batch(&mut self) {
        self.batch_status = None;
        self.batch_names.clear();
        self.batch_overwrites.clear();
    }

    /// Outcome of the first directory creation attempt of the current batch.
    pub fn batch_status(&self) -> Option<&TuDirectoryStatus> {
        self.batch_status.as_ref()
    }

    /// Names written more than once in the current batch, in order of the
    /// repeated write.
    pub fn batch_overwrites(&self) -> &[String] {
        &self.batch_overwrites
    }

    /// Attempts to create the output directory and reports the outcome.
    pub fn ensure_directory(&mut self) -> TuDirectoryStatus {
        let status = match fs::create_dir(&self.directory) {
            Ok(()) => TuDirectoryStatus::Created,
            Err(err) => TuDirectoryStatus::from_io_error(&err),
        };
        self.diagnostics
            .emit(status.event(), status.level(), &self.describe(&status));
        if self.batch_status.is_none() {
            self.batch_status = Some(status.clone());
        }
        status
    }

    /// Number of creation attempts that ended in `status`, across batches.
    /// Only the first of them was logged above `debug`.
    pub fn status_occurrences(&self, status: &TuDirectoryStatus) -> usize {
        self.diagnostics.occurrences(status.event())
    }

    /// Resizes (when configured) and writes `image` as `name`, replacing any
    /// existing file of that name.
    ///
    /// Writing the same name twice within one batch is logged at `warn`:
    /// the earlier file is gone and its recorded hash no longer matches.
    pub fn save(&mut self, name: &str, image: &DynamicImage) -> Result<TuOutputFile> {
        self.ensure_directory();
        if !self.batch_names.insert(name.to_string()) {
            log::warn!(
                target: "tux",
                "'{}' was already written in this batch and is being overwritten",
                name
            );
            self.batch_overwrites.push(name.to_string());
        }

        let path = self.directory.join(name);
        let resized;
        let image = if self.resize_on_save {
            resized = image.resize_exact(self.size, self.size, RESIZE_FILTER);
            &resized
        } else {
            image
        };

        match ImageFormat::from_path(&path) {
            Ok(ImageFormat::Jpeg) => flatten_for_jpeg(image).save(&path)?,
            _ => image.save(&path)?,
        }

        let bytes = fs::read(&path)?;
        let hash = blake3::hash(&bytes).to_hex().to_string();
        log::debug!(target: "tux", "wrote {} ({} bytes)", path.display(), bytes.len());

        Ok(TuOutputFile {
            name: name.to_string(),
            path,
            hash,
        })
    }

    fn describe(&self, status: &TuDirectoryStatus) -> String {
        let dir = self.directory.display();
        match status {
            TuDirectoryStatus::Created => format!("Directory '{}' created successfully.", dir),
            TuDirectoryStatus::AlreadyExists => format!("Directory '{}' already exists.", dir),
            TuDirectoryStatus::PermissionDenied => {
                format!("Permission denied: Unable to create '{}'.", dir)
            }
            TuDirectoryStatus::Failed(reason) => {
                format!("Unable to create '{}': {}", dir, reason)
            }
        }
    }
}

impl fmt::Display for TuDirectoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuDirectoryStatus::Created => write!(f, "created"),
            TuDirectoryStatus::AlreadyExists => write!(f, "already exists"),
            TuDirectoryStatus::PermissionDenied => write!(f, "permission denied"),
            TuDirectoryStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// JPEG stores neither alpha nor 16-bit samples.
fn flatten_for_jpeg(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => image.clone(),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLuma8(image.to_luma8()),
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}
