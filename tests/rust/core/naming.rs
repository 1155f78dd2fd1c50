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

use proptest::prelude::*;
use tux::{TuNamingPolicy, TuOutputTag};

#[test]
fn naming_original_keeps_name() {
    assert_eq!(
        TuNamingPolicy::output_name("photo.jpeg", &TuOutputTag::Original, None),
        "photo.jpeg"
    );
}

#[test]
fn naming_noise_and_crop_force_jpg() {
    assert_eq!(
        TuNamingPolicy::output_name("leaf.png", &TuOutputTag::Noisy, None),
        "leaf_noisy.jpg"
    );
    assert_eq!(
        TuNamingPolicy::output_name("leaf.png", &TuOutputTag::Crop, None),
        "leaf_crop.jpg"
    );
}

#[test]
fn naming_override_wins_over_forced_extension() {
    assert_eq!(
        TuNamingPolicy::output_name("leaf.png", &TuOutputTag::Crop, Some(".png")),
        "leaf_crop.png"
    );
}

#[test]
fn naming_without_extension() {
    assert_eq!(
        TuNamingPolicy::output_name("README", &TuOutputTag::Angle(90), None),
        "README_90"
    );
    assert_eq!(
        TuNamingPolicy::output_name("archive.tar.gz", &TuOutputTag::Angle(-5), None),
        "archive.tar_-5.gz"
    );
}

proptest! {
    #[test]
    fn naming_angle_outputs_embed_angle_and_extension(
        base in "[a-zA-Z0-9_-]{1,16}",
        ext in "(png|jpg|bmp)",
        angle in -720i64..720,
    ) {
        let source = format!("{}.{}", base, ext);
        let name = TuNamingPolicy::output_name(&source, &TuOutputTag::Angle(angle), None);
        prop_assert_eq!(name, format!("{}_{}.{}", base, angle, ext));
    }

    #[test]
    fn naming_distinct_tags_never_collide(base in "[a-z]{1,12}") {
        let source = format!("{}.png", base);
        let names = [
            TuNamingPolicy::output_name(&source, &TuOutputTag::Original, None),
            TuNamingPolicy::output_name(&source, &TuOutputTag::Angle(45), None),
            TuNamingPolicy::output_name(&source, &TuOutputTag::Noisy, None),
            TuNamingPolicy::output_name(&source, &TuOutputTag::Crop, None),
        ];
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                prop_assert_ne!(&names[i], &names[j]);
            }
        }
    }
}
