use std::io::Cursor;

use anyhow::Context;
use image::RgbaImage;

use crate::error::ShelfResult;

/// Encode a premultiplied canvas as PNG with straight alpha.
///
/// PNG is lossless, so placement and blending survive the trip byte-exact.
pub fn encode_png(canvas: &RgbaImage) -> ShelfResult<Vec<u8>> {
    let mut straight = canvas.clone();
    unpremultiply_rgba8_in_place(&mut straight);

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(straight)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
