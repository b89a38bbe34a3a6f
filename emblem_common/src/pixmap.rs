// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type.

use peniko::color::Rgba8;

/// A pixmap of straight (non-premultiplied) RGBA8 values.
///
/// The origin is the top-left corner, `y` grows downward and pixels are
/// stored in row-major order.
#[derive(Debug, Clone)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap in RGBA8 format.
    buf: Vec<Rgba8>,
}

impl Pixmap {
    /// Create a new pixmap with the given width and height in pixels.
    ///
    /// All pixels are initialized to transparent black.
    pub fn new(width: u16, height: u16) -> Self {
        let buf = vec![Rgba8::from_u32(0); usize::from(width) * usize::from(height)];
        Self { width, height, buf }
    }

    /// Return the width of the pixmap.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return the height of the pixmap.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Return the pixels of the pixmap.
    pub fn data(&self) -> &[Rgba8] {
        &self.buf
    }

    /// Return the pixels of the pixmap, mutably.
    pub fn data_mut(&mut self) -> &mut [Rgba8] {
        &mut self.buf
    }

    /// Returns a reference to the underlying data as a byte slice, four
    /// bytes per pixel in RGBA order.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Consume the pixmap, returning its raw RGBA bytes.
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        bytemuck::cast_vec(self.buf)
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Rgba8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) lies outside the {}x{} pixmap",
            self.width,
            self.height
        );
        self.buf[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgba8) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) lies outside the {}x{} pixmap",
            self.width,
            self.height
        );
        self.buf[usize::from(y) * usize::from(self.width) + usize::from(x)] = color;
    }

    /// Encode the pixmap into a PNG image.
    #[cfg(feature = "png")]
    pub fn into_png(self) -> Result<Vec<u8>, png::EncodingError> {
        let mut data = Vec::new();
        let mut encoder = png::Encoder::new(&mut data, u32::from(self.width), u32::from(self.height));
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.data_as_u8_slice())?;
        writer.finish()?;
        Ok(data)
    }
}
