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

//! # Tu Error Module
//!
//! This module defines the error types used throughout Tu.
//!
//! ## Error Categories
//!
//! - **Io**: Filesystem errors (listing, reading, writing)
//! - **Image**: Decode/encode failures reported by the codec
//! - **Validation**: Invalid parameters or configuration
//! - **Operator**: Failures raised by a transform on a single image
//! - **Shape**: Pixel buffers whose length does not match their dimensions
//! - **Serde**: Configuration or report (de)serialization errors
//! - **Internal**: Unexpected internal failures
//!
//! Per-file failures are not returned as `Err` by the augmenter: they are
//! rendered to a string and captured in the batch report. `Err` is reserved
//! for problems that invalidate the whole call.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Tu.
pub type Result<T> = std::result::Result<T, TuError>;

/// Canonical error enumeration for Tu.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum TuError {
    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors reported by the image codec.
    #[error("image error: {0}")]
    Image(String),

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any failure raised by an operator on a single image.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },

    /// Pixel buffer and dimensions disagree.
    #[error("shape error: {0}")]
    Shape(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for TuError {
    fn from(err: io::Error) -> Self {
        TuError::Io(err.to_string())
    }
}

impl From<image::ImageError> for TuError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io_err) => TuError::Io(io_err.to_string()),
            other => TuError::Image(other.to_string()),
        }
    }
}

impl From<ndarray::ShapeError> for TuError {
    fn from(err: ndarray::ShapeError) -> Self {
        TuError::Shape(err.to_string())
    }
}

impl From<serde_json::Error> for TuError {
    fn from(err: serde_json::Error) -> Self {
        TuError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for TuError {
    fn from(err: serde_yaml::Error) -> Self {
        TuError::Serde(err.to_string())
    }
}

impl TuError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        TuError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        TuError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        TuError::Internal(message.into())
    }
}
