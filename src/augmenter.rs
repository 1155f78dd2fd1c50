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

//! # Augmenter
//!
//! [`TuAugmenter`] runs one operation at a time over a source directory
//! listing captured at construction. Image operations write through a
//! [`TuOutputSink`] and return a [`TuBatchReport`]; tensor exports return a
//! [`TuTensorBatch`].
//!
//! Every entry is processed independently: an entry that cannot be decoded,
//! transformed or written is logged and recorded as a failure, and the batch
//! moves on. Only whole-call problems (invalid parameters) return `Err`.
//!
//! ```rust
//! use tux::{TuAugmenter, TuAugmenterConfig, TuRotationOptions};
//!
//! let config = TuAugmenterConfig::default().with_size(128).with_output_dir("augmented");
//! let mut augmenter = TuAugmenter::with_config("images", config)?;
//! augmenter.resize_image()?;
//! let report = augmenter.image_rotation(TuRotationOptions::fixed())?;
//! println!("{} files written", report.output_count());
//! ```

use std::path::Path;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::TuAugmenterConfig;
use crate::errors::Result;
use crate::export::report::{TuBatchReport, TuFileOutcome};
use crate::export::sink::{TuOutputFile, TuOutputSink};
use crate::export::tensor::{image_to_tensor, TuTensorBatch, TuTensorLayout};
use crate::ingest::listing::TuSourceListing;
use crate::naming::TuNamingPolicy;
use crate::operator::{execute_operator, TuOperator};
use crate::operators::crop::{TuCrop, TuCropMode};
use crate::operators::noise::TuNoise;
use crate::operators::resize::TuResize;
use crate::operators::rotate::{TuRotate, TuRotationOptions};

/// Batch augmenter bound to one source directory.
#[derive(Debug)]
pub struct TuAugmenter {
    listing: TuSourceListing,
    config: TuAugmenterConfig,
    sink: TuOutputSink,
    rng: SmallRng,
}

impl TuAugmenter {
    /// Augmenter with size 255 writing into `Data_A`.
    pub fn new(source: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(source, TuAugmenterConfig::default())
    }

    /// Captures the listing of `source` and prepares the output sink.
    ///
    /// # Arguments
    /// * `source` - Directory whose entries are processed by every operation
    /// * `config` - Size, output directory, resize policy and seed
    ///
    /// # Returns
    /// The augmenter, a `Validation` error for a bad configuration, or an
    /// `Io` error when `source` cannot be listed
    pub fn with_config(source: impl AsRef<Path>, config: TuAugmenterConfig) -> Result<Self> {
        config.validate()?;
        let listing = TuSourceListing::capture(source)?;
        let sink = TuOutputSink::new(&config.output_dir, config.size, config.resize_on_save);
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        log::info!(
            target: "tux",
            "augmenter ready: {} entries from {}, size {}, output {}",
            listing.len(),
            listing.root().display(),
            config.size,
            config.output_dir.display()
        );
        Ok(Self {
            listing,
            config,
            sink,
            rng,
        })
    }

    /// Configuration the augmenter was built with.
    pub fn config(&self) -> &TuAugmenterConfig {
        &self.config
    }

    /// Entry names captured at construction, sorted.
    pub fn entries(&self) -> &[String] {
        self.listing.entries()
    }

    /// Directory receiving every written file.
    pub fn output_dir(&self) -> &Path {
        self.sink.directory()
    }

    /// Writes a `size x size` copy of every entry under its original name.
    pub fn resize_image(&mut self) -> Result<TuBatchReport> {
        let operator = TuResize::new(self.config.size)?;
        Ok(self.run(&operator))
    }

    /// Writes one rotated copy per angle, named `{base}_{angle}{ext}`.
    pub fn image_rotation(&mut self, options: TuRotationOptions) -> Result<TuBatchReport> {
        let operator = TuRotate::new(options)?;
        Ok(self.run(&operator))
    }

    /// Writes a noisy copy of every entry as `{base}_noisy.jpg`.
    pub fn image_noise(&mut self, sigma: f64) -> Result<TuBatchReport> {
        let operator = TuNoise::new(sigma)?;
        Ok(self.run(&operator))
    }

    /// Writes a cropped copy of every entry as `{base}_crop.jpg`.
    ///
    /// An invalid fixed box rejects the whole call: no entry is read and
    /// nothing is written.
    pub fn image_crop(&mut self, mode: TuCropMode) -> Result<TuBatchReport> {
        let operator = match TuCrop::new(mode) {
            Ok(operator) => operator,
            Err(err) => {
                log::warn!(target: "tux", "crop rejected: {}", err);
                return Ok(self.report("crop").reject(err.to_string()));
            }
        };
        Ok(self.run(&operator))
    }

    /// Exports every entry as a (size, size, 3) tensor.
    pub fn image_tensor_hwc(&mut self) -> Result<TuTensorBatch> {
        Ok(self.export_tensors(TuTensorLayout::Hwc))
    }

    /// Exports every entry as a (3, size, size) tensor.
    pub fn image_tensor_chw(&mut self) -> Result<TuTensorBatch> {
        Ok(self.export_tensors(TuTensorLayout::Chw))
    }

    fn report(&self, operation: &str) -> TuBatchReport {
        TuBatchReport::new(operation, self.sink.directory())
    }

    fn run(&mut self, operator: &dyn TuOperator) -> TuBatchReport {
        let mut report = self.report(operator.name());
        self.sink.begin_batch();
        for entry in self.listing.entries().to_vec() {
            let mut outputs = Vec::new();
            let outcome = match self.process(operator, &entry, &mut outputs) {
                Ok(()) => TuFileOutcome::Success {
                    source: entry,
                    outputs,
                },
                Err(err) => {
                    log::warn!(
                        target: "tux",
                        "Error in process {}: {}",
                        self.listing.path_of(&entry).display(),
                        err
                    );
                    TuFileOutcome::Failure {
                        source: entry,
                        cause: err.to_string(),
                        outputs,
                    }
                }
            };
            report.push(outcome);
        }
        report.directory_status = self.sink.batch_status().cloned();
        report.overwritten = self.sink.batch_overwrites().to_vec();
        log::info!(
            target: "tux",
            "{}: {} of {} entries processed, {} files written",
            operator.name(),
            report.succeeded().count(),
            report.outcomes.len(),
            report.output_count()
        );
        report
    }

    /// Pushes every file written for `entry` into `outputs`, so a failure
    /// part way through still accounts for what reached the disk.
    fn process(
        &mut self,
        operator: &dyn TuOperator,
        entry: &str,
        outputs: &mut Vec<TuOutputFile>,
    ) -> Result<()> {
        let image = self.listing.open(entry)?;
        let variants = execute_operator(operator, &image, &mut self.rng)?;
        for variant in variants {
            let name = TuNamingPolicy::output_name(entry, &variant.tag, None);
            outputs.push(self.sink.save(&name, &variant.image)?);
        }
        Ok(())
    }

    fn export_tensors(&mut self, layout: TuTensorLayout) -> TuTensorBatch {
        let mut batch = TuTensorBatch::new(layout);
        for entry in self.listing.entries() {
            let tensor = self
                .listing
                .open(entry)
                .and_then(|image| image_to_tensor(&image, self.config.size, layout));
            match tensor {
                Ok(tensor) => {
                    batch.tensors.push(tensor);
                    batch.sources.push(entry.clone());
                }
                Err(err) => {
                    log::warn!(
                        target: "tux",
                        "skipping {} in tensor export: {}",
                        self.listing.path_of(entry).display(),
                        err
                    );
                    batch.failures.push((entry.clone(), err.to_string()));
                }
            }
        }
        batch
    }
}
