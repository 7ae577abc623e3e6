// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::layout::CanvasSize;
use crate::model::{Bone, BoneTree};

use super::{Canvas, CanvasError, GLYPH_BLOCK, GLYPH_DASH, GLYPH_NW, GLYPH_SW};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FishboneRenderError {
    Canvas(CanvasError),
    /// A stroke or label of `name` landed outside the grid. Geometry can
    /// legitimately compute such positions; painting them is the error.
    OutOfCanvas {
        name: String,
        row: i64,
        col: i64,
        height: usize,
        width: usize,
    },
}

impl fmt::Display for FishboneRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => err.fmt(f),
            Self::OutOfCanvas { name, row, col, height, width } => write!(
                f,
                "bone '{name}' paints outside the canvas: ({row},{col}) in a {height}x{width} grid"
            ),
        }
    }
}

impl std::error::Error for FishboneRenderError {}

impl From<CanvasError> for FishboneRenderError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    NorthWest,
    SouthWest,
}

fn orientation(bone: &Bone) -> Orientation {
    if bone.level() % 2 == 0 {
        Orientation::Horizontal
    } else if bone.level() == 1 && bone.pos() % 2 == 0 {
        Orientation::SouthWest
    } else {
        Orientation::NorthWest
    }
}

struct Painter<'a> {
    canvas: &'a mut Canvas,
}

impl Painter<'_> {
    fn put(&mut self, name: &str, row: i64, col: i64, ch: char) -> Result<(), FishboneRenderError> {
        let (height, width) = (self.canvas.height(), self.canvas.width());
        let escape = || FishboneRenderError::OutOfCanvas {
            name: name.to_owned(),
            row,
            col,
            height,
            width,
        };

        if row < 0 || col < 0 {
            return Err(escape());
        }
        self.canvas.set(row as usize, col as usize, ch).map_err(|_| escape())
    }

    /// Writes `name` reversed, one char per cell leftward, so it reads
    /// left-to-right and ends one cell before `anchor_col`.
    fn label(&mut self, name: &str, row: i64, anchor_col: i64) -> Result<(), FishboneRenderError> {
        for (idx, ch) in name.chars().rev().enumerate() {
            self.put(name, row, anchor_col - 1 - idx as i64, ch)?;
        }
        Ok(())
    }
}

/// Paints the positioned tree and returns the finished text, rows in
/// reversed order (bottom grid row printed last).
///
/// Draw order: every bone's segment and label in pre-order, then every
/// non-root head marker, then the root arrow head. Later writes win where
/// strokes cross.
pub fn render_fishbone(
    tree: &BoneTree,
    size: &CanvasSize,
) -> Result<String, FishboneRenderError> {
    let mut canvas = Canvas::new(size.height(), size.width())?;
    let mut painter = Painter { canvas: &mut canvas };

    let order = tree.pre_order();
    for id in &order {
        draw_segment(tree.bone(*id), &mut painter)?;
    }

    for id in &order {
        let bone = tree.bone(*id);
        if !bone.is_root() {
            painter.put(bone.name(), bone.row() as i64, bone.col() as i64, GLYPH_BLOCK)?;
        }
    }

    draw_arrow_head(tree.bone(tree.root()), size, &mut painter)?;

    Ok(flipped_rows(&canvas))
}

fn draw_segment(bone: &Bone, painter: &mut Painter<'_>) -> Result<(), FishboneRenderError> {
    let row = bone.row() as i64;
    let col = bone.col() as i64;
    let length = bone.length() as i64;
    let name = bone.name();

    match orientation(bone) {
        Orientation::Horizontal => {
            let glyph = if bone.is_root() { GLYPH_BLOCK } else { GLYPH_DASH };
            for i in 1..length {
                painter.put(name, row, col - i, glyph)?;
            }
            let anchor_col = if bone.is_root() { col } else { col - length };
            painter.label(name, row, anchor_col)?;
        }
        Orientation::NorthWest => {
            for i in 1..length {
                painter.put(name, row + i, col - i, GLYPH_NW)?;
            }
            // Diagonal labels end on `col - length`, flush with the tail.
            painter.label(name, row + length - 1, col - length + 1)?;
        }
        Orientation::SouthWest => {
            for i in 1..length {
                painter.put(name, row - i, col - i, GLYPH_SW)?;
            }
            painter.label(name, row - length + 1, col - length + 1)?;
        }
    }

    Ok(())
}

/// The root arrow head: a square block of side `arrow_side` mirrored above
/// and below the trunk row, left of the root label. The two cells between
/// label and arrow are blanked last so the gap survives the block.
fn draw_arrow_head(
    root: &Bone,
    size: &CanvasSize,
    painter: &mut Painter<'_>,
) -> Result<(), FishboneRenderError> {
    let row = root.row() as i64;
    let col = root.col() as i64;
    let name = root.name();
    let name_len = name.chars().count() as i64;
    let offset = name_len + 1;
    let side = size.arrow_side() as i64;

    for i in 0..side {
        for j in 0..side {
            painter.put(name, row + i, col - offset - i - j, GLYPH_BLOCK)?;
            painter.put(name, row - i, col - offset - i - j, GLYPH_BLOCK)?;
        }
    }

    painter.put(name, row, col - name_len - 1, ' ')?;
    painter.put(name, row, col - name_len - 2, ' ')?;

    Ok(())
}

fn flipped_rows(canvas: &Canvas) -> String {
    let mut lines = Vec::<String>::with_capacity(canvas.height());
    for row in canvas.rows().rev() {
        lines.push(row.iter().collect());
    }
    lines.join("\n")
}
