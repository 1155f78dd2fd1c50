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
use tux::{TuAugmenter, TuAugmenterConfig, TuDirectoryStatus};

fn write_fixture(dir: &Path, name: &str, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
        .save(dir.join(name))
        .expect("write fixture");
}

#[test]
fn resize_writes_square_copies_under_original_names() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.png", 100, 100);
    write_fixture(source.path(), "b.jpg", 30, 60);

    let out = target.path().join("resized");
    let config = TuAugmenterConfig::default().with_size(50).with_output_dir(&out);
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");
    let report = augmenter.resize_image().expect("resize");

    assert!(report.is_clean());
    assert_eq!(report.directory_status, Some(TuDirectoryStatus::Created));
    for name in ["a.png", "b.jpg"] {
        let image = image::open(out.join(name)).expect("open output");
        assert_eq!(image.dimensions(), (50, 50));
    }
    assert!(source.path().join("a.png").exists());
    assert_eq!(
        image::open(source.path().join("a.png")).expect("open source").dimensions(),
        (100, 100)
    );
}

#[test]
fn resize_twice_is_byte_identical() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.png", 80, 45);

    let config = TuAugmenterConfig::default()
        .with_size(32)
        .with_output_dir(target.path().join("out"));
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");

    let first = augmenter.resize_image().expect("resize");
    let first_bytes = fs::read(target.path().join("out/a.png")).expect("read");
    let second = augmenter.resize_image().expect("resize");
    let second_bytes = fs::read(target.path().join("out/a.png")).expect("read");

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.directory_status, Some(TuDirectoryStatus::Created));
    assert_eq!(second.directory_status, Some(TuDirectoryStatus::AlreadyExists));
    let hashes = |r: &tux::TuBatchReport| r.outputs().map(|o| o.hash.clone()).collect::<Vec<_>>();
    assert_eq!(hashes(&first), hashes(&second));
}

#[test]
fn resize_isolates_unreadable_entries() {
    let source = tempfile::tempdir().expect("tempdir");
    let target = tempfile::tempdir().expect("tempdir");
    write_fixture(source.path(), "a.png", 20, 20);
    fs::write(source.path().join("notes.txt"), "not an image").expect("write");
    fs::create_dir(source.path().join("nested")).expect("mkdir");
    write_fixture(source.path(), "z.png", 20, 20);

    let config = TuAugmenterConfig::default()
        .with_size(8)
        .with_output_dir(target.path().join("out"));
    let mut augmenter = TuAugmenter::with_config(source.path(), config).expect("augmenter");
    let report = augmenter.resize_image().expect("resize");

    let failed: Vec<&str> = report.failed().map(|o| o.source()).collect();
    assert_eq!(failed, ["nested", "notes.txt"]);
    assert_eq!(report.succeeded().count(), 2);
    assert!(target.path().join("out/z.png").exists());
}
