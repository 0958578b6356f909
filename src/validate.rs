//! Dimension checks that gate compositing. Pure functions, no pixel access:
//! every input is checked before the canvas is touched, so a reject never
//! leaves partial output.

use crate::error::{ShelfError, ShelfResult};
use crate::model::{
    BACKGROUND_TOLERANCE_PCT, BOOK_MAX, BOOK_MIN, BOOK_RATIO, PixelSize, Resolution, SizeBand,
};

/// Accepted background band for `resolution`: the canvas edge lengths
/// plus/minus the tolerance, inclusive on both ends.
pub fn background_band(resolution: Resolution) -> SizeBand {
    let canvas = resolution.canvas();
    let lo = 100 - BACKGROUND_TOLERANCE_PCT;
    let hi = 100 + BACKGROUND_TOLERANCE_PCT;
    SizeBand {
        min: PixelSize::new(
            (canvas.width * lo).div_ceil(100),
            (canvas.height * lo).div_ceil(100),
        ),
        max: PixelSize::new(canvas.width * hi / 100, canvas.height * hi / 100),
    }
}

/// Accepted absolute book-cover sizes.
pub const fn book_size_band() -> SizeBand {
    SizeBand {
        min: BOOK_MIN,
        max: BOOK_MAX,
    }
}

pub fn check_background(resolution: Resolution, actual: PixelSize) -> ShelfResult<()> {
    let expected = background_band(resolution);
    if expected.contains(actual) {
        Ok(())
    } else {
        Err(ShelfError::BackgroundSizeInvalid {
            resolution,
            expected,
            actual,
        })
    }
}

/// `index` is 1-based, matching the `book1..book8` slot names.
pub fn check_book(index: usize, actual: PixelSize) -> ShelfResult<()> {
    // Ratio bounds [0.5, 1.0] checked in integers so the endpoints are exact.
    let ratio_ok = u64::from(actual.width) <= u64::from(actual.height)
        && 2 * u64::from(actual.width) >= u64::from(actual.height);
    if !ratio_ok {
        return Err(ShelfError::BookAspectRatioInvalid {
            index,
            expected: BOOK_RATIO,
            actual_ratio: f64::from(actual.width) / f64::from(actual.height),
        });
    }

    let expected = book_size_band();
    if !expected.contains(actual) {
        return Err(ShelfError::BookSizeInvalid {
            index,
            expected,
            actual,
        });
    }

    Ok(())
}
