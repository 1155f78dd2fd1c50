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

//! # Tu Core Library
//!
//! Batch image augmentation for dataset preparation. Given a directory of
//! images, Tu writes resized, rotated, noised and cropped variants into a
//! flat output directory, and exports the directory as normalized `f32`
//! tensors for model training.
//!
//! ## Module Overview
//!
//! - **augmenter**: [`TuAugmenter`], the entry point running each operation over a directory
//! - **config**: Construction parameters, loadable from JSON or YAML
//! - **operator**: The per-image transform trait
//! - **operators**: Resize, rotate, noise and crop transforms
//! - **ingest**: Cached source directory listing and decoding
//! - **export**: Output sink, batch reports and tensor conversion
//! - **naming**: Deterministic output file names
//! - **diagnostics**: Instance-scoped once-per-event logging
//!
//! ## Quick Start
//!
//! ```rust
//! use tux::{TuAugmenter, TuRotationOptions};
//!
//! let mut augmenter = TuAugmenter::new("images")?;
//! augmenter.resize_image()?;
//! augmenter.image_rotation(TuRotationOptions::default())?;
//! augmenter.image_noise(10.0)?;
//! let tensors = augmenter.image_tensor_chw()?.into_tensors();
//! ```
//!
//! ## Error Handling
//!
//! Operations return `Result<T, TuError>` for whole-call failures such as
//! invalid parameters. Failures of individual files are captured in the
//! returned report and never abort the batch.

pub mod augmenter;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod naming;
pub mod operator;
pub mod operators;

pub use augmenter::TuAugmenter;
pub use config::TuAugmenterConfig;
pub use errors::{Result, TuError};
pub use export::{
    TuBatchReport, TuDirectoryStatus, TuFileOutcome, TuOutputFile, TuOutputSink, TuTensorBatch,
    TuTensorLayout,
};
pub use ingest::TuSourceListing;
pub use naming::{TuNamingPolicy, TuOutputTag};
pub use operator::{TuOperator, TuVariant};
pub use operators::{TuCropBox, TuCropMode, TuRotationOptions};
