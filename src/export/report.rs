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

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TuError};
use crate::export::sink::{TuDirectoryStatus, TuOutputFile};

/// Result of processing one source entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TuFileOutcome {
    Success {
        source: String,
        outputs: Vec<TuOutputFile>,
    },
    /// `outputs` holds files written before the failure; they stay on disk.
    Failure {
        source: String,
        cause: String,
        #[serde(default)]
        outputs: Vec<TuOutputFile>,
    },
}

impl TuFileOutcome {
    /// Source entry name, relative to the listed directory.
    pub fn source(&self) -> &str {
        match self {
            TuFileOutcome::Success { source, .. } | TuFileOutcome::Failure { source, .. } => {
                source
            }
        }
    }

    /// `true` when every variant of the entry was written.
    pub fn is_success(&self) -> bool {
        matches!(self, TuFileOutcome::Success { .. })
    }

    /// Files written for this entry, including those of a partial failure.
    pub fn outputs(&self) -> &[TuOutputFile] {
        match self {
            TuFileOutcome::Success { outputs, .. } | TuFileOutcome::Failure { outputs, .. } => {
                outputs
            }
        }
    }
}

/// Summary of one augmenter operation over the cached file list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TuBatchReport {
    pub operation: String,
    pub started_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    /// First directory creation outcome of the batch; `None` when nothing
    /// was saved.
    pub directory_status: Option<TuDirectoryStatus>,
    /// Output names written more than once in this batch; only the last
    /// write survives on disk.
    #[serde(default)]
    pub overwritten: Vec<String>,
    /// Set when the call was refused before touching any file.
    pub rejected: Option<String>,
    pub outcomes: Vec<TuFileOutcome>,
}

impl TuBatchReport {
    /// Empty report stamped with the current UTC time.
    ///
    /// # Arguments
    /// * `operation` - Operator name, e.g. `"rotate"`
    /// * `output_dir` - Directory the batch writes into
    pub fn new(operation: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            operation: operation.into(),
            started_at: Utc::now(),
            output_dir: output_dir.into(),
            directory_status: None,
            rejected: None,
            overwritten: Vec::new(),
            outcomes: Vec::new(),
        }
    }

    /// Marks the whole call as refused before any entry was read.
    pub fn reject(mut self, reason: impl Into<String>) -> Self {
        self.rejected = Some(reason.into());
        self
    }

    /// Appends the outcome of the next entry.
    pub fn push(&mut self, outcome: TuFileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Entries whose variants were all written.
    pub fn succeeded(&self) -> impl Iterator<Item = &TuFileOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    /// Entries that failed, including partial writes.
    pub fn failed(&self) -> impl Iterator<Item = &TuFileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// Every written file, in processing order, partial failures included.
    pub fn outputs(&self) -> impl Iterator<Item = &TuOutputFile> {
        self.outcomes.iter().flat_map(TuFileOutcome::outputs)
    }

    /// Number of files written by the batch.
    pub fn output_count(&self) -> usize {
        self.outputs().count()
    }

    /// No rejection and no failed entry.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_none() && self.failed().next().is_none()
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Returns
    /// The JSON document, or an internal error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TuError::internal(format!("Failed to serialize report: {}", e)))
    }

    /// Parses a report written by [`TuBatchReport::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TuError::validation(format!("Invalid report JSON: {}", e)))
    }
}
