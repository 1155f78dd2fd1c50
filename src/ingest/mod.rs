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

//! # Source Ingestion Module
//!
//! Reading side of Tu: the source directory listing captured once per
//! augmenter, and image decoding for individual entries.
//!
//! ## Module Components
//!
//! - **Listing** ([listing.rs](listing/index.html)): Cached, sorted, non-recursive listing
//!
//! ## Usage Patterns
//!
//! ```rust
//! use tux::ingest::TuSourceListing;
//!
//! let listing = TuSourceListing::capture("images")?;
//! for entry in listing.entries() {
//!     let image = listing.open(entry)?;
//! }
//! ```

pub mod listing;

pub use listing::TuSourceListing;
