use std::fmt;
use std::str::FromStr;

/// Width of one book cell on the shelf, in canvas pixels.
pub const CELL_WIDTH: u32 = 240;
/// Height of one book cell on the shelf, in canvas pixels (2:3 nominal cover ratio).
pub const CELL_HEIGHT: u32 = 360;

/// The shelf always reserves exactly this many rows from the bottom edge,
/// independent of canvas height. Taller canvases leave empty space above.
pub const SHELF_ROWS: u32 = 3;

/// Upper bound on the book sequence; mirrors the eight named upload slots.
pub const MAX_BOOKS: usize = 8;

/// Background tolerance around the canvas edge lengths, in percent.
pub const BACKGROUND_TOLERANCE_PCT: u32 = 15;

/// Smallest accepted book cover.
pub const BOOK_MIN: PixelSize = PixelSize::new(100, 150);
/// Largest accepted book cover.
pub const BOOK_MAX: PixelSize = PixelSize::new(400, 600);
/// Accepted cover aspect ratio (width / height): never wider than tall,
/// never more than twice as tall as wide.
pub const BOOK_RATIO: RatioBand = RatioBand { min: 0.5, max: 1.0 };

/// A (width, height) pair in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Inclusive size window, checked per edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SizeBand {
    pub min: PixelSize,
    pub max: PixelSize,
}

impl SizeBand {
    pub fn contains(&self, size: PixelSize) -> bool {
        size.width >= self.min.width
            && size.width <= self.max.width
            && size.height >= self.min.height
            && size.height <= self.max.height
    }
}

impl fmt::Display for SizeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Inclusive width/height ratio window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatioBand {
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RatioBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}

/// The supported canvas sizes. Chosen once per compositing operation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Resolution {
    #[serde(rename = "1280x720")]
    Hd720,
    #[serde(rename = "1600x900")]
    Hd900,
    #[default]
    #[serde(rename = "1920x1080")]
    FullHd,
    #[serde(rename = "2560x1440")]
    Qhd,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::Hd720,
        Resolution::Hd900,
        Resolution::FullHd,
        Resolution::Qhd,
    ];

    pub const fn canvas(self) -> PixelSize {
        match self {
            Resolution::Hd720 => PixelSize::new(1280, 720),
            Resolution::Hd900 => PixelSize::new(1600, 900),
            Resolution::FullHd => PixelSize::new(1920, 1080),
            Resolution::Qhd => PixelSize::new(2560, 1440),
        }
    }

    /// Number of book cells that fit in one shelf row.
    pub const fn row_capacity(self) -> u32 {
        self.canvas().width / CELL_WIDTH
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.canvas().fmt(f)
    }
}

#[derive(thiserror::Error, Debug)]
#[error("unrecognized resolution '{0}'; expected one of 1280x720, 1600x900, 1920x1080, 2560x1440")]
pub struct ParseResolutionError(String);

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1280x720" => Ok(Resolution::Hd720),
            "1600x900" => Ok(Resolution::Hd900),
            "1920x1080" => Ok(Resolution::FullHd),
            "2560x1440" => Ok(Resolution::Qhd),
            other => Err(ParseResolutionError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_roundtrip() {
        for res in Resolution::ALL {
            let s = res.to_string();
            let back: Resolution = s.parse().unwrap();
            assert_eq!(back, res);
        }
    }

    #[test]
    fn parse_rejects_unknown_strings() {
        assert!("1920X1080".parse::<Resolution>().is_err());
        assert!("999x999".parse::<Resolution>().is_err());
        assert!("".parse::<Resolution>().is_err());
    }

    #[test]
    fn serde_uses_the_wire_strings() {
        let json = serde_json::to_string(&Resolution::Qhd).unwrap();
        assert_eq!(json, "\"2560x1440\"");
        let back: Resolution = serde_json::from_str("\"1280x720\"").unwrap();
        assert_eq!(back, Resolution::Hd720);
    }

    #[test]
    fn row_capacities() {
        assert_eq!(Resolution::Hd720.row_capacity(), 5);
        assert_eq!(Resolution::Hd900.row_capacity(), 6);
        assert_eq!(Resolution::FullHd.row_capacity(), 8);
        assert_eq!(Resolution::Qhd.row_capacity(), 10);
    }

    #[test]
    fn default_is_full_hd() {
        assert_eq!(Resolution::default(), Resolution::FullHd);
    }

    #[test]
    fn size_band_is_inclusive_per_edge() {
        let band = SizeBand {
            min: PixelSize::new(100, 150),
            max: PixelSize::new(400, 600),
        };
        assert!(band.contains(PixelSize::new(100, 150)));
        assert!(band.contains(PixelSize::new(400, 600)));
        assert!(!band.contains(PixelSize::new(99, 150)));
        assert!(!band.contains(PixelSize::new(100, 601)));
    }
}
