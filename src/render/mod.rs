// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! Rendering: the character canvas and the fishbone painter.
//!
//! The canvas knows nothing about bones; it is a fixed-size, bounds-checked
//! grid of single characters. Collisions are deterministic last-write-wins —
//! the fishbone glyph set never merges, later strokes simply overwrite.

use std::fmt;

pub mod fishbone;

pub use fishbone::{render_fishbone, FishboneRenderError};

pub const GLYPH_BLOCK: char = '\u{25a0}';
pub const GLYPH_DASH: char = '-';
pub const GLYPH_NW: char = '\\';
pub const GLYPH_SW: char = '/';

/// A fixed-size, bounds-checked character grid addressed as `(row, col)`.
///
/// Row 0 is the bottom of the diagram; the painter emits rows in reverse so
/// increasing rows read upward on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    height: usize,
    width: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(height: usize, width: usize) -> Result<Self, CanvasError> {
        let len = height
            .checked_mul(width)
            .ok_or(CanvasError::AreaOverflow { height, width })?;

        Ok(Self { height, width, cells: vec![' '; len] })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Rows from row 0 upward, each exactly `width` cells.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1))
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(row, col) {
            return Err(CanvasError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }

        Ok(row * self.width + col)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            for ch in row {
                f.write_char(*ch)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        height: usize,
        width: usize,
    },
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { height, width } => {
                write!(f, "canvas area overflow: {height}*{width}")
            }
            Self::OutOfBounds { row, col, height, width } => {
                write!(f, "out of bounds: ({row},{col}) for {height}x{width} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
