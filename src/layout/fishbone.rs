// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::model::{BoneTree, TreeStats};

const COMPACT_ROWS: usize = 40;
const ROOMY_ROWS: usize = 60;
const MIN_ROWS: usize = 20;
// Trees deeper or bushier than this get the roomy preset.
const COMPLEX_HEIGHT: usize = 3;
const COMPLEX_DEGREE: usize = 7;

/// Canvas dimensions and padding, all derived from the single `rows` knob.
///
/// The drawable band is `rows` tall and `3 * rows` wide; the left padding
/// holds labels and the root arrow head, the top/bottom padding keeps the
/// outermost diagonals inside the grid. The root head is a fixed reference
/// point that depends only on these dimensions, never on tree content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    rows: usize,
}

impl CanvasSize {
    pub fn compact() -> Self {
        Self { rows: COMPACT_ROWS }
    }

    pub fn roomy() -> Self {
        Self { rows: ROOMY_ROWS }
    }

    /// Adaptive sizing policy: roomy for complex trees, compact otherwise.
    pub fn for_stats(stats: TreeStats) -> Self {
        if stats.max_height > COMPLEX_HEIGHT || stats.max_degree > COMPLEX_DEGREE {
            Self::roomy()
        } else {
            Self::compact()
        }
    }

    /// A custom knob. Below `MIN_ROWS` the derived paddings and arrow head
    /// degenerate, so smaller values are rejected.
    pub fn with_rows(rows: usize) -> Result<Self, FishboneLayoutError> {
        if rows < MIN_ROWS {
            return Err(FishboneLayoutError::CanvasTooSmall { rows, min: MIN_ROWS });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.rows * 3
    }

    pub fn left_padding(&self) -> usize {
        self.cols() * 3 / 8
    }

    pub fn top_bottom_padding(&self) -> usize {
        self.rows / 10
    }

    /// Side of the square blocks forming the root arrow head.
    pub fn arrow_side(&self) -> usize {
        self.rows / 10
    }

    pub fn width(&self) -> usize {
        self.left_padding() + self.cols()
    }

    pub fn height(&self) -> usize {
        self.rows + 2 * self.top_bottom_padding()
    }

    pub fn root_row(&self) -> i32 {
        (self.top_bottom_padding() + self.rows / 2 - 1) as i32
    }

    pub fn root_col(&self) -> i32 {
        (self.left_padding() + self.cols() - 1) as i32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FishboneLayoutError {
    CanvasTooSmall {
        rows: usize,
        min: usize,
    },
    /// The base length `span >> level` reached zero: the tree is deeper than
    /// the canvas can express.
    BoneTooDeep {
        name: String,
        level: usize,
    },
    /// Rescaling against the grandparent left no positive length.
    NoRoomUnderGrandparent {
        name: String,
        level: usize,
        grandparent_spacing: i32,
    },
}

impl fmt::Display for FishboneLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasTooSmall { rows, min } => {
                write!(f, "canvas of {rows} rows is too small (minimum {min})")
            }
            Self::BoneTooDeep { name, level } => write!(
                f,
                "bone '{name}' at level {level} is too deep for the canvas (segment length would be zero)"
            ),
            Self::NoRoomUnderGrandparent { name, level, grandparent_spacing } => write!(
                f,
                "bone '{name}' at level {level} has no room: grandparent spacing {grandparent_spacing} leaves no positive length"
            ),
        }
    }
}

impl std::error::Error for FishboneLayoutError {}

/// Length assignment pass (pre-order).
///
/// Base length halves the horizontal span (even levels) or the vertical span
/// (odd levels) once per level: `span >> level`. Bones at level > 2 are then
/// clamped against the space their grandparent actually divided among its
/// children; this is a local correction, not a global non-overlap guarantee.
pub fn assign_lengths(
    tree: &mut BoneTree,
    size: &CanvasSize,
) -> Result<(), FishboneLayoutError> {
    for id in tree.pre_order() {
        let bone = tree.bone(id);
        let level = bone.level();

        let span = if level % 2 == 0 { size.cols() } else { size.rows() };
        let mut length = if level < usize::BITS as usize { (span >> level) as i32 } else { 0 };

        if !bone.is_root() && length <= 0 {
            return Err(FishboneLayoutError::BoneTooDeep { name: bone.name().to_owned(), level });
        }

        if level > 2 {
            if let Some(grandparent) = bone.parent().and_then(|p| tree.bone(p).parent()) {
                let grandparent = tree.bone(grandparent);
                let degree = grandparent.children().len() as i32;
                let grandparent_spacing = grandparent.length() / (degree + 1);
                if length >= grandparent_spacing {
                    length = if level % 2 == 0 {
                        grandparent_spacing / 2
                    } else {
                        grandparent_spacing - 1
                    };
                    if length <= 0 {
                        return Err(FishboneLayoutError::NoRoomUnderGrandparent {
                            name: tree.bone(id).name().to_owned(),
                            level,
                            grandparent_spacing,
                        });
                    }
                }
            }
        }

        tree.bone_mut(id).set_length(length);
    }

    Ok(())
}

/// Position assignment pass (pre-order).
///
/// The root head sits at the fixed reference point; every other head is
/// offset from its parent's head by a spacing derived from sibling position
/// and parent length. Level-1 bones use a wider, pair-staggered spacing so
/// the primary diagonals spread evenly along the trunk.
pub fn place_bones(tree: &mut BoneTree, size: &CanvasSize) {
    for id in tree.pre_order() {
        let bone = tree.bone(id);
        let Some(parent_id) = bone.parent() else {
            tree.bone_mut(id).set_head(size.root_row(), size.root_col());
            continue;
        };

        let parent = tree.bone(parent_id);
        let pos = bone.pos() as i64;
        let spacing = if bone.level() == 1 {
            ((pos + 1) / 2) * (parent.length() as i64 / 3) - (size.cols() as i64 / 10)
        } else {
            let siblings = parent.children().len() as i64;
            pos * parent.length() as i64 / (siblings + 1)
        };

        let col = parent.col() as i64 - spacing;
        let row = if bone.level() % 2 == 1 {
            parent.row() as i64
        } else if parent.pos() % 2 == 0 && bone.level() == 2 {
            // Level-2 branches under an even-positioned spine fan to the
            // other side of the trunk, balancing the diagram.
            parent.row() as i64 - spacing
        } else {
            parent.row() as i64 + spacing
        };

        tree.bone_mut(id).set_head(row as i32, col as i32);
    }
}

/// Runs both geometry passes in order: lengths (with rescaling), positions.
pub fn layout_fishbone(tree: &mut BoneTree, size: &CanvasSize) -> Result<(), FishboneLayoutError> {
    assign_lengths(tree, size)?;
    place_bones(tree, size);
    Ok(())
}
