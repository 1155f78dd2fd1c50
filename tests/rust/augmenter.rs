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

use std::fs;
use std::path::Path;

use image::{GenericImageView, Rgb, RgbImage};
use tux::{
    TuAugmenter, TuAugmenterConfig, TuBatchReport, TuCropBox, TuCropMode, TuDirectoryStatus,
    TuRotationOptions,
};

fn write_fixture(dir: &Path, name: &str, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90]))
        .save(dir.join(name))
        .expect("write fixture");
}

#[test]
fn full_session_over_one_directory() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.png", 100, 100);
    let out = target.path().join("Data_A");

    let config = TuAugmenterConfig::default().with_size(50).with_output_dir(&out).with_seed(3);
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");

    let resized = augmenter.resize_image().expect("resize");
    assert_eq!(resized.directory_status, Some(TuDirectoryStatus::Created));
    assert_eq!(image::open(out.join("a.png")).expect("open").dimensions(), (50, 50));

    let rotated = augmenter.image_rotation(TuRotationOptions::fixed()).expect("rotate");
    assert_eq!(rotated.directory_status, Some(TuDirectoryStatus::AlreadyExists));
    assert_eq!(rotated.output_count(), 7);

    augmenter.image_noise(10.0).expect("noise");
    augmenter
        .image_crop(TuCropMode::Fixed(TuCropBox::new(10, 10, 60, 60)))
        .expect("crop");
    let chw = augmenter.image_tensor_chw().expect("chw");
    assert_eq!(chw.tensors[0].shape(), &[3, 50, 50]);

    let mut written: Vec<String> = fs::read_dir(&out)
        .expect("read out")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(
        written,
        [
            "a.png", "a_135.png", "a_180.png", "a_225.png", "a_270.png", "a_315.png",
            "a_45.png", "a_90.png", "a_crop.jpg", "a_noisy.jpg",
        ]
    );
    for name in &written {
        assert_eq!(image::open(out.join(name)).expect("open").dimensions(), (50, 50));
    }
}

#[test]
fn listing_is_frozen_at_construction() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.png", 20, 20);
    let out = target.path().join("out");

    let config = TuAugmenterConfig::default().with_size(10).with_output_dir(&out);
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");
    write_fixture(source.path(), "late.png", 20, 20);

    assert_eq!(augmenter.entries(), ["a.png"]);
    let report = augmenter.resize_image().expect("resize");
    assert_eq!(report.outcomes.len(), 1);
    assert!(!out.join("late.png").exists());
}

#[test]
fn output_inside_source_is_not_reprocessed() {
    let source = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.png", 20, 20);
    let out = source.path().join("augmented");

    let config = TuAugmenterConfig::default().with_size(10).with_output_dir(&out);
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");
    augmenter.resize_image().expect("resize");

    let second = augmenter.resize_image().expect("resize");
    let sources: Vec<&str> = second.outcomes.iter().map(|o| o.source()).collect();
    assert_eq!(sources, ["a.png"]);
}

#[test]
fn config_file_drives_the_augmenter() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.jpg", 30, 40);
    let out = target.path().join("from_yaml");

    let yaml = format!("size: 24\noutput_dir: {}\nseed: 8\n", out.display());
    let config = TuAugmenterConfig::from_yaml(&yaml).expect("yaml");
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");
    assert_eq!(augmenter.config().size, 24);
    assert_eq!(augmenter.output_dir(), out.as_path());

    augmenter.resize_image().expect("resize");
    assert_eq!(image::open(out.join("a.jpg")).expect("open").dimensions(), (24, 24));
}

#[test]
fn report_survives_json_roundtrip() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.png", 20, 20);
    fs::write(source.path().join("readme.md"), "# notes").expect("write");
    let out = target.path().join("out");

    let config = TuAugmenterConfig::default().with_size(10).with_output_dir(&out);
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");
    let report = augmenter.image_noise(5.0).expect("noise");

    let restored = TuBatchReport::from_json(&report.to_json().expect("json")).expect("parse");
    assert_eq!(restored.operation, "noise");
    assert_eq!(restored.outcomes, report.outcomes);
    assert_eq!(restored.directory_status, Some(TuDirectoryStatus::Created));
    assert_eq!(restored.failed().count(), 1);
}

#[test]
fn colliding_output_names_are_reported() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.jpg", 20, 20);
    write_fixture(source.path(), "a.png", 20, 20);
    write_fixture(source.path(), "b.png", 20, 20);
    let out = target.path().join("out");

    let config = TuAugmenterConfig::default().with_size(10).with_output_dir(&out);
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");

    let noisy = augmenter.image_noise(5.0).expect("noise");
    assert!(noisy.is_clean());
    assert_eq!(noisy.overwritten, ["a_noisy.jpg"]);

    let resized = augmenter.resize_image().expect("resize");
    assert!(resized.overwritten.is_empty());
}
