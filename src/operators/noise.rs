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

//! # Additive Gaussian Noise
//!
//! The image is viewed as an 8-bit (height, width, channels) array in its
//! own channel layout. One `N(0, sigma)` sample is drawn per element,
//! truncated toward zero to an integer, added, and clamped to [0, 255].
//! Images with 16-bit or float samples are reduced to 8-bit first.

use image::{DynamicImage, ImageBuffer, Pixel};
use ndarray::{Array3, Zip};
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;
use rand::rngs::SmallRng;

use crate::errors::{Result, TuError};
use crate::naming::TuOutputTag;
use crate::operator::{TuOperator, TuVariant};

/// Gaussian noise operator.
#[derive(Debug)]
pub struct TuNoise {
    sigma: f64,
    distribution: Normal<f64>,
}

impl TuNoise {
    /// `sigma` is in pixel intensity units and must be finite and `>= 0`.
    pub fn new(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(TuError::validation(format!(
                "noise sigma must be a finite value >= 0, got {}",
                sigma
            )));
        }
        let distribution = Normal::new(0.0, sigma)
            .map_err(|e| TuError::validation(format!("invalid noise distribution: {}", e)))?;
        Ok(Self {
            sigma,
            distribution,
        })
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns a noisy copy of `image` with the same channel layout.
    pub fn add_noise(&self, image: &DynamicImage, rng: &mut SmallRng) -> Result<DynamicImage> {
        Ok(match image {
            DynamicImage::ImageLuma8(buffer) => {
                DynamicImage::ImageLuma8(self.noisy_buffer(buffer, rng)?)
            }
            DynamicImage::ImageLumaA8(buffer) => {
                DynamicImage::ImageLumaA8(self.noisy_buffer(buffer, rng)?)
            }
            DynamicImage::ImageRgb8(buffer) => {
                DynamicImage::ImageRgb8(self.noisy_buffer(buffer, rng)?)
            }
            DynamicImage::ImageRgba8(buffer) => {
                DynamicImage::ImageRgba8(self.noisy_buffer(buffer, rng)?)
            }
            other if other.color().has_alpha() => {
                DynamicImage::ImageRgba8(self.noisy_buffer(&other.to_rgba8(), rng)?)
            }
            other => DynamicImage::ImageRgb8(self.noisy_buffer(&other.to_rgb8(), rng)?),
        })
    }

    fn noisy_buffer<P>(
        &self,
        buffer: &ImageBuffer<P, Vec<u8>>,
        rng: &mut SmallRng,
    ) -> Result<ImageBuffer<P, Vec<u8>>>
    where
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = buffer.dimensions();
        let channels = P::CHANNEL_COUNT as usize;
        let pixels = Array3::from_shape_vec(
            (height as usize, width as usize, channels),
            buffer.as_raw().clone(),
        )?;
        let noise = Array3::<f64>::random_using(pixels.raw_dim(), self.distribution, rng);
        let noisy = add_clamped(&pixels, &noise);
        ImageBuffer::from_raw(width, height, noisy.into_raw_vec())
            .ok_or_else(|| TuError::internal("noisy pixels do not match image dimensions"))
    }
}

/// Adds integer-truncated `noise` to `pixels`, clamping into `u8`.
pub fn add_clamped(pixels: &Array3<u8>, noise: &Array3<f64>) -> Array3<u8> {
    let mut out = pixels.clone();
    Zip::from(&mut out).and(noise).for_each(|p, &n| {
        let value = i32::from(*p) + i32::from(n as i16);
        *p = value.clamp(0, 255) as u8;
    });
    out
}

impl TuOperator for TuNoise {
    fn name(&self) -> &'static str {
        "noise"
    }

    fn apply(&self, image: &DynamicImage, rng: &mut SmallRng) -> Result<Vec<TuVariant>> {
        let noisy = self.add_noise(image, rng)?;
        Ok(vec![TuVariant::new(TuOutputTag::Noisy, noisy)])
    }
}
