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

//! # Rotation
//!
//! Rotates counter-clockwise by whole degrees on an expanded canvas large
//! enough to hold every corner. Uncovered pixels are black, or fully
//! transparent when the image has an alpha channel. Sampling is
//! nearest-neighbour.
//!
//! Angles come either from the fixed set [`FIXED_ANGLES`] or, in random
//! mode, from `quantity` uniform draws in `[min, max)`.

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};
use imageproc::geometric_transformations::{warp_into, Interpolation, Projection};
use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TuError};
use crate::naming::TuOutputTag;
use crate::operator::{TuOperator, TuVariant};

/// Angles used when random mode is off.
pub const FIXED_ANGLES: [i64; 7] = [45, 90, 135, 180, 225, 270, 315];

pub const DEFAULT_MIN_ANGLE: i64 = 10;
pub const DEFAULT_MAX_ANGLE: i64 = 340;

/// Angle selection for a rotation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuRotationOptions {
    pub random: bool,
    /// Number of angles drawn per file in random mode.
    pub quantity: usize,
    /// Inclusive lower bound, in degrees.
    pub min: i64,
    /// Exclusive upper bound, in degrees.
    pub max: i64,
}

impl Default for TuRotationOptions {
    fn default() -> Self {
        Self {
            random: false,
            quantity: 0,
            min: DEFAULT_MIN_ANGLE,
            max: DEFAULT_MAX_ANGLE,
        }
    }
}

impl TuRotationOptions {
    pub fn fixed() -> Self {
        Self::default()
    }

    pub fn random(quantity: usize) -> Self {
        Self {
            random: true,
            quantity,
            ..Self::default()
        }
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// An empty range is only an error when angles must be drawn from it.
    pub fn validate(&self) -> Result<()> {
        if self.random && self.quantity > 0 && self.min >= self.max {
            return Err(TuError::validation(format!(
                "rotation range [{}, {}) is empty",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Rotation operator.
#[derive(Debug)]
pub struct TuRotate {
    options: TuRotationOptions,
}

impl TuRotate {
    pub fn new(options: TuRotationOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Angles for one file. Random draws may repeat.
    pub fn angles(&self, rng: &mut SmallRng) -> Vec<i64> {
        if !self.options.random {
            return FIXED_ANGLES.to_vec();
        }
        (0..self.options.quantity)
            .map(|_| rng.gen_range(self.options.min..self.options.max))
            .collect()
    }
}

impl TuOperator for TuRotate {
    fn name(&self) -> &'static str {
        "rotate"
    }

    fn apply(&self, image: &DynamicImage, rng: &mut SmallRng) -> Result<Vec<TuVariant>> {
        Ok(self
            .angles(rng)
            .into_iter()
            .map(|angle| {
                TuVariant::new(TuOutputTag::Angle(angle), rotate_expand(image, angle as f64))
            })
            .collect())
    }
}

/// Canvas size that holds a `width x height` image rotated by `degrees`.
pub fn expanded_dimensions(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let theta = degrees.to_radians();
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let (w, h) = (width as f64, height as f64);
    // Tolerance keeps right angles from rounding up by one pixel.
    let fit = |v: f64| (v - 1e-6).ceil().max(1.0) as u32;
    (fit(w * cos + h * sin), fit(w * sin + h * cos))
}

/// Rotates `image` counter-clockwise by `degrees` on an expanded canvas.
pub fn rotate_expand(image: &DynamicImage, degrees: f64) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(buffer) => {
            DynamicImage::ImageLuma8(rotate_buffer(buffer, degrees, Luma([0])))
        }
        DynamicImage::ImageLumaA8(buffer) => {
            DynamicImage::ImageLumaA8(rotate_buffer(buffer, degrees, LumaA([0, 0])))
        }
        DynamicImage::ImageRgb8(buffer) => {
            DynamicImage::ImageRgb8(rotate_buffer(buffer, degrees, Rgb([0, 0, 0])))
        }
        DynamicImage::ImageRgba8(buffer) => {
            DynamicImage::ImageRgba8(rotate_buffer(buffer, degrees, Rgba([0, 0, 0, 0])))
        }
        other if other.color().has_alpha() => DynamicImage::ImageRgba8(rotate_buffer(
            &other.to_rgba8(),
            degrees,
            Rgba([0, 0, 0, 0]),
        )),
        other => DynamicImage::ImageRgb8(rotate_buffer(&other.to_rgb8(), degrees, Rgb([0, 0, 0]))),
    }
}

fn rotate_buffer<P>(
    buffer: &ImageBuffer<P, Vec<u8>>,
    degrees: f64,
    fill: P,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + Send + Sync,
{
    let (width, height) = buffer.dimensions();
    let (out_width, out_height) = expanded_dimensions(width, height, degrees);

    // imageproc rotates clockwise for positive angles in image coordinates.
    // Centers are pixel-grid centers since warping samples integer coordinates.
    let theta = -(degrees.to_radians()) as f32;
    let projection = Projection::translate(
        -(width as f32 - 1.0) / 2.0,
        -(height as f32 - 1.0) / 2.0,
    )
    .and_then(Projection::rotate(theta))
    .and_then(Projection::translate(
        (out_width as f32 - 1.0) / 2.0,
        (out_height as f32 - 1.0) / 2.0,
    ));

    let mut out = ImageBuffer::from_pixel(out_width, out_height, fill);
    warp_into(buffer, &projection, Interpolation::Nearest, fill, &mut out);
    out
}
