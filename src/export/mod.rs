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

//! # Export Module
//!
//! Everything that leaves an augmenter: images written to disk, the batch
//! report describing what was written, and in-memory tensors.
//!
//! ## Module Components
//!
//! - **Sink** ([sink.rs](sink/index.html)): Output directory management and image persistence
//! - **Report** ([report.rs](report/index.html)): Per-file outcomes of a batch operation
//! - **Tensor** ([tensor.rs](tensor/index.html)): HWC / CHW `f32` tensor conversion
//!
//! ## Usage Patterns
//!
//! ```rust
//! use tux::export::{TuOutputSink, image_to_hwc};
//!
//! let mut sink = TuOutputSink::new("Data_A", 255, true);
//! let written = sink.save("cat.png", &image)?;
//! let tensor = image_to_hwc(&image, 255)?;
//! ```

pub mod report;
pub mod sink;
pub mod tensor;

pub use report::{TuBatchReport, TuFileOutcome};
pub use sink::{TuDirectoryStatus, TuOutputFile, TuOutputSink};
pub use tensor::{hwc_to_chw, image_to_hwc, image_to_tensor, TuTensorBatch, TuTensorLayout};
