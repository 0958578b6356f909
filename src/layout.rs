//! Shelf cell planning: where each book lands on the canvas.
//!
//! The cursor starts at the bottom-right cell and walks left; when a row is
//! exhausted it resets to the right edge one row up. Placement stops once
//! [`SHELF_ROWS`] rows are filled (or the cursor would leave the top edge on
//! a short canvas); remaining books are dropped, never an error.

use crate::model::{CELL_HEIGHT, CELL_WIDTH, PixelSize, SHELF_ROWS};

/// One planned paste: which book (0-based input index) goes where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub index: usize,
    pub x: u32,
    pub y: u32,
}

/// Number of book cells that fit in one row of a canvas `canvas_width` wide.
pub fn row_capacity(canvas_width: u32) -> u32 {
    canvas_width / CELL_WIDTH
}

/// Total number of books the shelf can hold on `canvas`.
pub fn shelf_capacity(canvas: PixelSize) -> usize {
    let rows_that_fit = canvas.height / CELL_HEIGHT;
    let rows = SHELF_ROWS.min(rows_that_fit);
    (rows * row_capacity(canvas.width)) as usize
}

/// Plan cell positions for `count` books in input order. Returns at most
/// [`shelf_capacity`] placements; overflow is truncated silently.
pub fn plan_placements(canvas: PixelSize, count: usize) -> Vec<Placement> {
    let cell_w = i64::from(CELL_WIDTH);
    let cell_h = i64::from(CELL_HEIGHT);

    let mut out = Vec::with_capacity(count.min(shelf_capacity(canvas)));
    let mut x = i64::from(canvas.width) - cell_w;
    let mut y = i64::from(canvas.height) - cell_h;
    let mut row = 0u32;

    for index in 0..count {
        if row >= SHELF_ROWS || x < 0 || y < 0 {
            break;
        }
        out.push(Placement {
            index,
            x: x as u32,
            y: y as u32,
        });

        x -= cell_w;
        if x < 0 {
            x = i64::from(canvas.width) - cell_w;
            y -= cell_h;
            row += 1;
        }
    }

    if out.len() < count {
        tracing::debug!(
            placed = out.len(),
            dropped = count - out.len(),
            "shelf full, dropping overflow books"
        );
    }

    out
}
