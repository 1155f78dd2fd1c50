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

//! # Source Listing
//!
//! The entry list is read once and never refreshed. Entries are every name
//! in the directory, subdirectories included; opening a non-image entry
//! fails when the entry is processed, not when it is listed.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::errors::{Result, TuError};

/// Snapshot of a source directory.
#[derive(Clone, Debug)]
pub struct TuSourceListing {
    root: PathBuf,
    entries: Vec<String>,
}

impl TuSourceListing {
    /// Lists `root` and sorts the entry names.
    pub fn capture(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let mut entries = Vec::new();
        for entry in fs::read_dir(&root)? {
            let entry = entry?;
            let name = entry.file_name().into_string().map_err(|raw| {
                TuError::validation(format!(
                    "entry name is not valid UTF-8: {}",
                    raw.to_string_lossy()
                ))
            })?;
            entries.push(name);
        }
        entries.sort();
        log::debug!(
            target: "tux",
            "captured {} entries from {}",
            entries.len(),
            root.display()
        );
        Ok(Self { root, entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path_of(&self, entry: &str) -> PathBuf {
        self.root.join(entry)
    }

    /// Decodes `entry`, guessing the format from its content.
    pub fn open(&self, entry: &str) -> Result<DynamicImage> {
        let path = self.path_of(entry);
        let reader = image::ImageReader::open(&path)?.with_guessed_format()?;
        Ok(reader.decode()?)
    }
}
