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

use image::DynamicImage;
use rand::rngs::SmallRng;

use crate::errors::{Result, TuError};
use crate::export::sink::RESIZE_FILTER;
use crate::naming::TuOutputTag;
use crate::operator::{TuOperator, TuVariant};

/// Square resize; the aspect ratio is not preserved.
#[derive(Debug)]
pub struct TuResize {
    size: u32,
}

impl TuResize {
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(TuError::validation("resize size must be positive"));
        }
        Ok(Self { size })
    }
}

impl TuOperator for TuResize {
    fn name(&self) -> &'static str {
        "resize"
    }

    fn apply(&self, image: &DynamicImage, _rng: &mut SmallRng) -> Result<Vec<TuVariant>> {
        let resized = image.resize_exact(self.size, self.size, RESIZE_FILTER);
        Ok(vec![TuVariant::new(TuOutputTag::Original, resized)])
    }
}
