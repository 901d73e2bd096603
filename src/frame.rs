use serde::{Deserialize, Serialize};

/// One output cell: a ramp glyph plus the source pixel's true color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub ch: char,
    pub rgb: (u8, u8, u8), // Color of the resized pixel, not ramp-derived
}

/// The complete rendered output for one image at one target width
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub width: u32,
    pub rows: Vec<Vec<Cell>>, // Top row first, each row exactly `width` cells
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }
}
