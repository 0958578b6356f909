use crate::model::{MAX_BOOKS, PixelSize, RatioBand, Resolution, SizeBand};

pub type ShelfResult<T> = Result<T, ShelfError>;

/// One variant per rule the compositor can refuse an input on, carrying the
/// offending values so the request layer can report exactly what was wrong.
#[derive(thiserror::Error, Debug)]
pub enum ShelfError {
    #[error("no background image was supplied")]
    MissingBackground,

    #[error("add at least one book cover")]
    EmptyBookList,

    #[error("{count} book covers supplied; the shelf accepts at most {MAX_BOOKS}")]
    TooManyBooks { count: usize },

    #[error("background is {actual}, outside the accepted band {expected} for {resolution}")]
    BackgroundSizeInvalid {
        resolution: Resolution,
        expected: SizeBand,
        actual: PixelSize,
    },

    #[error("book {index} is {actual}, outside the accepted size range {expected}")]
    BookSizeInvalid {
        index: usize,
        expected: SizeBand,
        actual: PixelSize,
    },

    #[error("book {index} has aspect ratio {actual_ratio:.3}, outside the accepted range {expected}")]
    BookAspectRatioInvalid {
        index: usize,
        expected: RatioBand,
        actual_ratio: f64,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShelfError {
    /// Stable machine-readable tag naming the violated rule.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingBackground => "missing_background",
            Self::EmptyBookList => "empty_book_list",
            Self::TooManyBooks { .. } => "too_many_books",
            Self::BackgroundSizeInvalid { .. } => "background_size_invalid",
            Self::BookSizeInvalid { .. } => "book_size_invalid",
            Self::BookAspectRatioInvalid { .. } => "book_aspect_ratio_invalid",
            Self::Other(_) => "other",
        }
    }
}
