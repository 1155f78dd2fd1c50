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

//! # Output Naming
//!
//! Every written file name is derived from the source entry name and an
//! operation tag:
//!
//! | tag | output |
//! |---|---|
//! | `Original` | `{base}{ext}` |
//! | `Angle(a)` | `{base}_{a}{ext}` |
//! | `Noisy` | `{base}_noisy.jpg` |
//! | `Crop` | `{base}_crop.jpg` |
//!
//! `base` and `ext` come from splitting at the last dot; leading dots never
//! start an extension, so `.hidden` has none.

use serde::{Deserialize, Serialize};

/// Operation tag appended to an output name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuOutputTag {
    Original,
    Angle(i64),
    Noisy,
    Crop,
}

impl TuOutputTag {
    fn suffix(&self) -> Option<String> {
        match self {
            TuOutputTag::Original => None,
            TuOutputTag::Angle(angle) => Some(angle.to_string()),
            TuOutputTag::Noisy => Some("noisy".to_string()),
            TuOutputTag::Crop => Some("crop".to_string()),
        }
    }

    /// Extension forced by the tag, if any.
    fn forced_extension(&self) -> Option<&'static str> {
        match self {
            TuOutputTag::Noisy | TuOutputTag::Crop => Some(".jpg"),
            TuOutputTag::Original | TuOutputTag::Angle(_) => None,
        }
    }
}

/// Maps source names to output names.
#[derive(Clone, Debug, Default)]
pub struct TuNamingPolicy;

impl TuNamingPolicy {
    /// Splits `name` into base and extension (extension keeps its dot).
    pub fn split(name: &str) -> (&str, &str) {
        let leading = name.len() - name.trim_start_matches('.').len();
        match name[leading..].rfind('.') {
            Some(idx) => name.split_at(leading + idx),
            None => (name, ""),
        }
    }

    /// Builds the output name for `source` under `tag`.
    ///
    /// `extension` overrides both the source extension and any extension the
    /// tag forces; it must include the leading dot.
    pub fn output_name(source: &str, tag: &TuOutputTag, extension: Option<&str>) -> String {
        let (base, source_ext) = Self::split(source);
        let ext = extension
            .or_else(|| tag.forced_extension())
            .unwrap_or(source_ext);
        match tag.suffix() {
            Some(suffix) => format!("{}_{}{}", base, suffix, ext),
            None => format!("{}{}", base, ext),
        }
    }
}
