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

use image::{DynamicImage, GenericImageView};
use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TuError};
use crate::naming::TuOutputTag;
use crate::operator::{TuOperator, TuVariant};

/// Smallest edge a random crop may have.
pub const MIN_RANDOM_CROP: u32 = 30;

/// Absolute crop box; `right` and `lower` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuCropBox {
    pub left: u32,
    pub upper: u32,
    pub right: u32,
    pub lower: u32,
}

impl TuCropBox {
    /// Box from absolute edges; `right` and `lower` are exclusive.
    pub fn new(left: u32, upper: u32, right: u32, lower: u32) -> Self {
        Self {
            left,
            upper,
            right,
            lower,
        }
    }

    /// Box of `crop_width x crop_height` centered in a `width x height` image.
    ///
    /// A crop larger than the image is anchored at the origin; such a box
    /// does not [`fit`](Self::fits) and is rejected when applied.
    pub fn centered(width: u32, height: u32, crop_width: u32, crop_height: u32) -> Self {
        let left = width.saturating_sub(crop_width) / 2;
        let upper = height.saturating_sub(crop_height) / 2;
        Self::new(left, upper, left + crop_width, upper + crop_height)
    }

    /// `true` when the box has a positive width and height.
    pub fn is_valid(&self) -> bool {
        self.right > self.left && self.lower > self.upper
    }

    /// Horizontal extent, zero for an inverted box.
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent, zero for an inverted box.
    pub fn height(&self) -> u32 {
        self.lower.saturating_sub(self.upper)
    }

    /// `true` when the box lies inside a `width x height` image.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.lower <= height
    }
}

/// How the crop box of each file is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuCropMode {
    /// A centered box with random edges in `[30, width)` x `[30, height)`.
    Random,
    /// The same absolute box for every file.
    Fixed(TuCropBox),
}

/// Crop operator.
#[derive(Debug)]
pub struct TuCrop {
    mode: TuCropMode,
}

impl TuCrop {
    pub fn new(mode: TuCropMode) -> Result<Self> {
        if let TuCropMode::Fixed(bounds) = mode {
            if !bounds.is_valid() {
                return Err(TuError::validation(format!(
                    "crop box {:?} needs right > left and lower > upper",
                    bounds
                )));
            }
        }
        Ok(Self { mode })
    }

    /// Crop box for an image of the given dimensions.
    pub fn box_for(&self, width: u32, height: u32, rng: &mut SmallRng) -> Result<TuCropBox> {
        match self.mode {
            TuCropMode::Random => {
                if width <= MIN_RANDOM_CROP || height <= MIN_RANDOM_CROP {
                    return Err(TuError::operator(
                        self.name(),
                        format!(
                            "{}x{} image is too small for a random crop (edges must exceed {})",
                            width, height, MIN_RANDOM_CROP
                        ),
                    ));
                }
                let crop_width = rng.gen_range(MIN_RANDOM_CROP..width);
                let crop_height = rng.gen_range(MIN_RANDOM_CROP..height);
                Ok(TuCropBox::centered(width, height, crop_width, crop_height))
            }
            TuCropMode::Fixed(bounds) => {
                if !bounds.fits(width, height) {
                    return Err(TuError::operator(
                        self.name(),
                        format!(
                            "crop box ({}, {}, {}, {}) exceeds {}x{} image",
                            bounds.left, bounds.upper, bounds.right, bounds.lower, width, height
                        ),
                    ));
                }
                Ok(bounds)
            }
        }
    }
}

impl TuOperator for TuCrop {
    fn name(&self) -> &'static str {
        "crop"
    }

    fn apply(&self, image: &DynamicImage, rng: &mut SmallRng) -> Result<Vec<TuVariant>> {
        let (width, height) = image.dimensions();
        let bounds = self.box_for(width, height, rng)?;
        let cropped = image.crop_imm(bounds.left, bounds.upper, bounds.width(), bounds.height());
        Ok(vec![TuVariant::new(TuOutputTag::Crop, cropped)])
    }
}
