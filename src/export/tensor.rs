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

//! # Tensor Export
//!
//! Converts images into `f32` tensors in [0, 1]: RGB, square resized, each
//! sample divided by 255. Two layouts are offered:
//!
//! - **HWC**: (height, width, channel)
//! - **CHW**: (channel, height, width), the (2, 0, 1) permutation of HWC
//!
//! Tensors are always returned in standard (row-major, contiguous) layout.

use image::DynamicImage;
use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::export::sink::RESIZE_FILTER;

/// Axis order of an exported tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuTensorLayout {
    Hwc,
    Chw,
}

/// Tensors exported from a directory, in listing order.
#[derive(Clone, Debug)]
pub struct TuTensorBatch {
    pub layout: TuTensorLayout,
    /// One tensor per successfully decoded entry.
    pub tensors: Vec<Array3<f32>>,
    /// Entry names matching `tensors` index for index.
    pub sources: Vec<String>,
    /// Skipped entries with the reason they were skipped.
    pub failures: Vec<(String, String)>,
}

impl TuTensorBatch {
    pub fn new(layout: TuTensorLayout) -> Self {
        Self {
            layout,
            tensors: Vec::new(),
            sources: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }

    pub fn into_tensors(self) -> Vec<Array3<f32>> {
        self.tensors
    }
}

/// RGB, `size x size`, scaled to [0, 1], laid out as (H, W, C).
pub fn image_to_hwc(image: &DynamicImage, size: u32) -> Result<Array3<f32>> {
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8())
        .resize_exact(size, size, RESIZE_FILTER)
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())?;
    Ok(pixels.mapv(|v| v as f32 / 255.0))
}

/// Permutes an (H, W, C) tensor to (C, H, W).
pub fn hwc_to_chw(hwc: &Array3<f32>) -> Array3<f32> {
    hwc.view()
        .permuted_axes([2, 0, 1])
        .as_standard_layout()
        .into_owned()
}

/// Converts `image` to the requested layout.
pub fn image_to_tensor(
    image: &DynamicImage,
    size: u32,
    layout: TuTensorLayout,
) -> Result<Array3<f32>> {
    let hwc = image_to_hwc(image, size)?;
    Ok(match layout {
        TuTensorLayout::Hwc => hwc,
        TuTensorLayout::Chw => hwc_to_chw(&hwc),
    })
}
