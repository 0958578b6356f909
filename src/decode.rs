use anyhow::Context;
use image::RgbaImage;

use crate::error::ShelfResult;
use crate::model::PixelSize;

/// A decoded bitmap held as premultiplied RGBA8, ready for resize and paste.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    pub size: PixelSize,
    /// Premultiplied pixel data.
    pub pixels: RgbaImage,
}

impl PreparedImage {
    /// Wrap an already-decoded straight-alpha image, premultiplying it.
    pub fn from_rgba8(mut pixels: RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        premultiply_rgba8_in_place(&mut pixels);
        Self {
            size: PixelSize { width, height },
            pixels,
        }
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...) into a [`PreparedImage`].
pub fn decode_image(bytes: &[u8]) -> ShelfResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(PreparedImage::from_rgba8(dyn_img.to_rgba8()))
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
