use image::{RgbaImage, imageops};

use crate::composite::paste_over;
use crate::decode::PreparedImage;
use crate::error::{ShelfError, ShelfResult};
use crate::layout::plan_placements;
use crate::model::{CELL_HEIGHT, CELL_WIDTH, MAX_BOOKS, Resolution};
use crate::validate::{check_background, check_book};

/// Bicubic-family filter; deterministic, so identical inputs produce
/// identical canvases.
const RESAMPLE: imageops::FilterType = imageops::FilterType::CatmullRom;

/// Validate, resize, and place: the one-shot pipeline from inputs to canvas.
///
/// Steps:
/// 1. validate `background` against `resolution`'s tolerance band;
/// 2. validate every book in order (non-empty, at most [`MAX_BOOKS`]),
///    failing fast with the 1-based index of the first offender;
/// 3. resize the background to exactly the canvas size and each placed book
///    to the fixed cell size;
/// 4. paste each book at its planned cell, blending through its alpha.
///
/// Any validation failure aborts before a single pixel is written. Books the
/// shelf has no room for are dropped silently (see [`plan_placements`]).
///
/// Returns the canvas as **premultiplied** RGBA8 with dimensions exactly
/// equal to the resolution's canvas size; [`crate::encode_png`] converts it
/// back to straight alpha.
#[tracing::instrument(skip_all, fields(%resolution, books = books.len()))]
pub fn compose(
    resolution: Resolution,
    background: &PreparedImage,
    books: &[PreparedImage],
) -> ShelfResult<RgbaImage> {
    check_background(resolution, background.size)?;

    if books.is_empty() {
        return Err(ShelfError::EmptyBookList);
    }
    if books.len() > MAX_BOOKS {
        return Err(ShelfError::TooManyBooks { count: books.len() });
    }
    for (i, book) in books.iter().enumerate() {
        check_book(i + 1, book.size)?;
    }

    let canvas_size = resolution.canvas();
    let mut canvas = imageops::resize(
        &background.pixels,
        canvas_size.width,
        canvas_size.height,
        RESAMPLE,
    );

    for placement in plan_placements(canvas_size, books.len()) {
        let cell = imageops::resize(
            &books[placement.index].pixels,
            CELL_WIDTH,
            CELL_HEIGHT,
            RESAMPLE,
        );
        paste_over(
            &mut canvas,
            &cell,
            i64::from(placement.x),
            i64::from(placement.y),
        )?;
    }

    Ok(canvas)
}
