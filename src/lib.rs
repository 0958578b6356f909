#![forbid(unsafe_code)]

pub mod compose;
pub mod composite;
pub mod decode;
pub mod encode;
pub mod error;
pub mod layout;
pub mod model;
pub mod request;
pub mod validate;

pub use compose::compose;
pub use decode::{PreparedImage, decode_image};
pub use encode::encode_png;
pub use error::{ShelfError, ShelfResult};
pub use layout::{Placement, plan_placements, row_capacity, shelf_capacity};
pub use model::{
    CELL_HEIGHT, CELL_WIDTH, MAX_BOOKS, PixelSize, RatioBand, Resolution, SHELF_ROWS, SizeBand,
};
pub use request::{BookSlots, ShelfRequest};
