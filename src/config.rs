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

//! # Augmenter Configuration
//!
//! Construction parameters for [`crate::augmenter::TuAugmenter`], loadable
//! from JSON or YAML.
//!
//! ```yaml
//! size: 128
//! output_dir: augmented
//! resize_on_save: true
//! seed: 42
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TuError};

/// Default square edge, in pixels.
pub const DEFAULT_SIZE: u32 = 255;

/// Default output directory name.
pub const DEFAULT_OUTPUT_DIR: &str = "Data_A";

/// Configuration for an augmenter instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuAugmenterConfig {
    /// Target square size in pixels.
    pub size: u32,
    /// Directory receiving every written output.
    pub output_dir: PathBuf,
    /// Resize every image to `size x size` before it is written.
    pub resize_on_save: bool,
    /// Seed for reproducible random angles, crops and noise.
    pub seed: Option<u64>,
}

impl Default for TuAugmenterConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            resize_on_save: true,
            seed: None,
        }
    }
}

impl TuAugmenterConfig {
    /// Sets the square edge, in pixels, of resized outputs and tensors.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Sets the directory receiving every written file.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Chooses whether images are resized to `size x size` before writing.
    pub fn with_resize_on_save(mut self, resize_on_save: bool) -> Self {
        self.resize_on_save = resize_on_save;
        self
    }

    /// Seeds the random source for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects a zero size and an empty output directory.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(TuError::validation("size must be a positive number of pixels"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(TuError::validation("output_dir may not be empty"));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Arguments
    /// * `source` - JSON document; missing fields take their defaults
    ///
    /// # Returns
    /// The configuration, a `Serde` error for malformed input, or a
    /// `Validation` error for out-of-range values
    pub fn from_json(source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a YAML configuration. Same rules as
    /// [`TuAugmenterConfig::from_json`].
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}
