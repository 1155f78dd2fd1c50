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

//! # Tu Operator Module
//!
//! An operator turns one decoded source image into zero or more named
//! variants. The augmenter owns iteration, naming context and persistence;
//! operators only transform pixels.
//!
//! ```rust
//! use image::DynamicImage;
//! use rand::rngs::SmallRng;
//! use tux::operator::{TuOperator, TuVariant};
//! use tux::naming::TuOutputTag;
//! use tux::errors::Result;
//!
//! #[derive(Debug)]
//! struct Mirror;
//!
//! impl TuOperator for Mirror {
//!     fn name(&self) -> &'static str {
//!         "mirror"
//!     }
//!
//!     fn apply(&self, image: &DynamicImage, _rng: &mut SmallRng) -> Result<Vec<TuVariant>> {
//!         Ok(vec![TuVariant::new(TuOutputTag::Original, image.fliph())])
//!     }
//! }
//! ```

use image::DynamicImage;
use rand::rngs::SmallRng;

use crate::errors::{Result, TuError};
use crate::naming::TuOutputTag;

/// One augmented image together with the tag used to name it.
#[derive(Clone, Debug)]
pub struct TuVariant {
    pub tag: TuOutputTag,
    pub image: DynamicImage,
}

impl TuVariant {
    pub fn new(tag: TuOutputTag, image: DynamicImage) -> Self {
        Self { tag, image }
    }
}

/// Contract every per-image transform fulfills.
pub trait TuOperator: std::fmt::Debug {
    /// Short name used in logs, errors and reports.
    fn name(&self) -> &'static str;

    /// Produces the variants of `image`. Randomized operators draw from
    /// `rng` so a seeded augmenter is reproducible.
    fn apply(&self, image: &DynamicImage, rng: &mut SmallRng) -> Result<Vec<TuVariant>>;
}

/// Runs `operator`, tagging any error with the operator name.
pub fn execute_operator(
    operator: &dyn TuOperator,
    image: &DynamicImage,
    rng: &mut SmallRng,
) -> Result<Vec<TuVariant>> {
    operator.apply(image, rng).map_err(|err| match err {
        TuError::Operator { .. } => err,
        other => TuError::operator(operator.name(), other.to_string()),
    })
}
