// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the built-in cloud-download icon at every size a macOS icon
//! set wants and writes one PNG per size into the working directory.
//!
//! Writing files and naming them is deliberately the caller's job; the
//! renderer itself only ever produces pixel buffers.

use emblem_render::icon;
use emblem_render::pipeline::{render_scene_set, RenderOptions};

/// The macOS .iconset ladder, 1x and 2x variants deduplicated.
const SIZES: &[i32] = &[16, 32, 64, 128, 256, 512, 1024];

fn main() {
    let scene = icon::cloud_download();
    let mut failed = 0;
    for outcome in render_scene_set(&scene, SIZES, &RenderOptions::default()) {
        match outcome.result {
            Ok(pixmap) => {
                let path = format!("app_icon_{}.png", outcome.size);
                let png = pixmap.into_png().expect("PNG encoding failed");
                std::fs::write(&path, png).expect("failed to write icon");
                println!("wrote {path} ({:?})", outcome.strategy);
            }
            Err(err) => {
                eprintln!("size {} failed: {err}", outcome.size);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        std::process::exit(1);
    }
}
