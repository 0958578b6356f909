//! The boundary the surrounding request layer hands inputs across: a lenient
//! resolution parameter, the eight named book slots collapsed into one
//! bounded ordered sequence, and a one-call decode/compose/encode entry.

use crate::compose::compose;
use crate::decode::{PreparedImage, decode_image};
use crate::encode::encode_png;
use crate::error::{ShelfError, ShelfResult};
use crate::model::{MAX_BOOKS, Resolution};

impl Resolution {
    /// Lenient form-parameter parse: unrecognized values fall back to
    /// 1920x1080, matching the upload form's behavior. Callers that want a
    /// hard failure should use [`str::parse`] instead.
    pub fn from_param(value: &str) -> Resolution {
        value.parse().unwrap_or_default()
    }
}

/// Ordered book payloads, bounded at [`MAX_BOOKS`] entries. Order is
/// placement order.
#[derive(Clone, Debug, Default)]
pub struct BookSlots(Vec<Vec<u8>>);

impl BookSlots {
    /// Collapse the named upload slots (`book1..book8`) into the ordered
    /// sequence, skipping absent slots.
    pub fn from_named_slots(slots: [Option<Vec<u8>>; MAX_BOOKS]) -> BookSlots {
        BookSlots(slots.into_iter().flatten().collect())
    }

    /// Accept an already-ordered list, refusing more entries than the shelf
    /// request can carry.
    pub fn try_from_vec(books: Vec<Vec<u8>>) -> ShelfResult<BookSlots> {
        if books.len() > MAX_BOOKS {
            return Err(ShelfError::TooManyBooks { count: books.len() });
        }
        Ok(BookSlots(books))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }
}

/// One compositing request, as received from the form handler.
#[derive(Clone, Debug, Default)]
pub struct ShelfRequest {
    pub resolution: Resolution,
    pub background: Option<Vec<u8>>,
    pub books: BookSlots,
}

impl ShelfRequest {
    /// Decode every payload, compose the shelf, and encode the canvas as
    /// PNG. The first failed check aborts the whole request.
    pub fn compose_png(&self) -> ShelfResult<Vec<u8>> {
        let bytes = self
            .background
            .as_deref()
            .ok_or(ShelfError::MissingBackground)?;
        let background = decode_image(bytes)?;
        let books = self
            .books
            .iter()
            .map(decode_image)
            .collect::<ShelfResult<Vec<PreparedImage>>>()?;
        let canvas = compose(self.resolution, &background, &books)?;
        encode_png(&canvas)
    }
}
