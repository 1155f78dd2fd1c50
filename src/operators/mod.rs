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

//! # Operators Module
//!
//! The image transforms available in Tu, each implementing [`TuOperator`].
//!
//! ## Operator Categories
//!
//! - **resize**: Square resize to the configured size
//! - **rotate**: Fixed or random angle rotation with canvas expansion
//! - **noise**: Additive zero-mean Gaussian noise, clamped to 8-bit
//! - **crop**: Random centered or fixed box cropping
//!
//! [`TuOperator`]: crate::operator::TuOperator

pub mod crop;
pub mod noise;
pub mod resize;
pub mod rotate;

pub use crop::{TuCrop, TuCropBox, TuCropMode};
pub use noise::TuNoise;
pub use resize::TuResize;
pub use rotate::{TuRotate, TuRotationOptions};
