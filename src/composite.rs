//! Premultiplied-alpha compositing primitives used to paste book cells onto
//! the canvas.

use image::RgbaImage;

use crate::error::ShelfResult;

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8: `out = src + dst * (1 - src.a)`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> ShelfResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(anyhow::anyhow!("over_in_place expects equal-length rgba8 buffers").into());
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Paste `src` over `canvas` with its top-left corner at `(x, y)`, blending
/// through `src`'s own alpha. Regions outside the canvas are clipped.
///
/// Both images must hold premultiplied RGBA8.
pub fn paste_over(canvas: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) -> ShelfResult<()> {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let (src_w, src_h) = src.dimensions();

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src_w)).min(i64::from(canvas_w));
    let y1 = (y + i64::from(src_h)).min(i64::from(canvas_h));
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    let span = (x1 - x0) as usize * 4;
    let src_buf: &[u8] = src.as_raw();
    let dst_buf: &mut [u8] = canvas;

    for row in y0..y1 {
        let dst_start = ((row as usize) * (canvas_w as usize) + x0 as usize) * 4;
        let src_start = (((row - y) as usize) * (src_w as usize) + (x0 - x) as usize) * 4;
        over_in_place(
            &mut dst_buf[dst_start..dst_start + span],
            &src_buf[src_start..src_start + span],
        )?;
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, px: PremulRgba8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba(px))
    }

    #[test]
    fn over_src_alpha_0_is_noop() {
        let dst = [10, 20, 30, 40];
        let src = [0, 0, 0, 0];
        assert_eq!(over(dst, src), dst);
    }

    #[test]
    fn over_src_opaque_replaces_dst() {
        let dst = [0, 0, 0, 255];
        let src = [255, 0, 0, 255];
        assert_eq!(over(dst, src), src);
    }

    #[test]
    fn over_dst_transparent_returns_src() {
        let dst = [0, 0, 0, 0];
        let src = [100, 110, 120, 200];
        assert_eq!(over(dst, src), src);
    }

    #[test]
    fn over_half_alpha_blends() {
        // Premultiplied half-transparent red over opaque black.
        let dst = [0, 0, 0, 255];
        let src = [128, 0, 0, 128];
        let out = over(dst, src);
        assert_eq!(out[0], 128);
        assert_eq!(out[3], 255);
    }

    #[test]
    fn over_in_place_rejects_mismatched_buffers() {
        let mut dst = [0u8; 8];
        assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
        let mut odd = [0u8; 6];
        assert!(over_in_place(&mut odd, &[0u8; 6]).is_err());
    }

    #[test]
    fn paste_over_blends_only_the_covered_rect() {
        let red = [255, 0, 0, 255];
        let blue = [0, 0, 255, 255];
        let mut canvas = solid(4, 4, red);
        let src = solid(2, 2, blue);

        paste_over(&mut canvas, &src, 1, 1).unwrap();

        assert_eq!(canvas.get_pixel(0, 0).0, red);
        assert_eq!(canvas.get_pixel(1, 1).0, blue);
        assert_eq!(canvas.get_pixel(2, 2).0, blue);
        assert_eq!(canvas.get_pixel(3, 3).0, red);
    }

    #[test]
    fn paste_over_clips_at_every_edge() {
        let red = [255, 0, 0, 255];
        let blue = [0, 0, 255, 255];
        let mut canvas = solid(3, 3, red);
        let src = solid(2, 2, blue);

        paste_over(&mut canvas, &src, -1, -1).unwrap();
        paste_over(&mut canvas, &src, 2, 2).unwrap();

        assert_eq!(canvas.get_pixel(0, 0).0, blue);
        assert_eq!(canvas.get_pixel(1, 1).0, red);
        assert_eq!(canvas.get_pixel(2, 2).0, blue);
        assert_eq!(canvas.get_pixel(1, 0).0, red);
    }

    #[test]
    fn paste_over_fully_outside_is_noop() {
        let red = [255, 0, 0, 255];
        let mut canvas = solid(2, 2, red);
        let src = solid(2, 2, [0, 255, 0, 255]);

        paste_over(&mut canvas, &src, 5, 0).unwrap();
        paste_over(&mut canvas, &src, 0, -9).unwrap();

        for (_, _, px) in canvas.enumerate_pixels() {
            assert_eq!(px.0, red);
        }
    }

    #[test]
    fn paste_over_respects_transparent_source_pixels() {
        let red = [255, 0, 0, 255];
        let mut canvas = solid(2, 1, red);
        let mut src = solid(2, 1, [0, 0, 255, 255]);
        src.put_pixel(1, 0, image::Rgba([0, 0, 0, 0]));

        paste_over(&mut canvas, &src, 0, 0).unwrap();

        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(1, 0).0, red);
    }
}
