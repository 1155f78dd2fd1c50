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

//! # Diagnostics
//!
//! Instance-scoped "log once" reporting on top of the `log` facade. The first
//! record for a given event key is emitted at its requested level; repeats
//! are demoted to `debug` so they stay visible when debugging without
//! flooding a batch run.

use std::collections::HashMap;

use log::Level;

/// Once-per-event reporter owned by a single component instance.
#[derive(Debug, Default)]
pub struct TuOnceLog {
    seen: HashMap<String, usize>,
}

impl TuOnceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `message` under `event`. Returns `true` when this was the first
    /// record for the event.
    pub fn emit(&mut self, event: &str, level: Level, message: &str) -> bool {
        let count = self.seen.entry(event.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            log::log!(target: "tux", level, "{}", message);
            true
        } else {
            log::debug!(target: "tux", "{} (repeated {} times)", message, count);
            false
        }
    }

    /// Number of records seen for `event`, including suppressed repeats.
    pub fn occurrences(&self, event: &str) -> usize {
        self.seen.get(event).copied().unwrap_or(0)
    }
}
