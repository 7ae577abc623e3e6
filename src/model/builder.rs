// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

use crate::format::Table;

use super::bone::{BoneTree, TreeStats};

/// Result of building a bone tree from a table.
///
/// `skipped_rows` holds the 1-based data-row numbers that contained no
/// content cell (every cell from column 1 onward was a continuation marker
/// or empty). Such rows are skipped rather than rejected; the CLI surfaces
/// them as warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    tree: BoneTree,
    stats: TreeStats,
    skipped_rows: Vec<usize>,
}

impl BuildReport {
    pub fn tree(&self) -> &BoneTree {
        &self.tree
    }

    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    pub fn skipped_rows(&self) -> &[usize] {
        &self.skipped_rows
    }

    pub fn into_tree(self) -> BoneTree {
        self.tree
    }
}

/// Builds the bone tree from `table`.
///
/// The header of column 0 names the root. For each data row, columns are
/// scanned left to right starting at column 1; integer continuation markers
/// and empty cells are skipped, and the first content cell becomes a new
/// bone whose level is its column index. The parent is found by walking
/// "most recently appended child" steps down from the root, stopping early
/// at the first childless bone — this is how column indentation implicitly
/// nests each row under the most recently created branch.
pub fn build_fishbone(table: &Table) -> BuildReport {
    let mut tree = BoneTree::new(table.title());
    let mut stats = TreeStats::default();
    let mut skipped_rows = Vec::<usize>::new();

    for (row_idx, row) in table.rows().iter().enumerate() {
        let Some((idx, name)) = content_cell(row) else {
            skipped_rows.push(row_idx + 1);
            continue;
        };

        let mut parent = tree.root();
        for _ in 1..idx {
            match tree.last_child(parent) {
                Some(child) => parent = child,
                None => break,
            }
        }

        let id = tree.append_child(parent, name);
        let bone = tree.bone(id);
        stats.max_height = stats.max_height.max(bone.level());
        stats.max_degree = stats.max_degree.max(tree.bone(parent).children().len());
    }

    BuildReport { tree, stats, skipped_rows }
}

/// The first content cell of a data row: its column index and text.
///
/// Column 0 is reserved for the title and never scanned. Emptiness and
/// marker checks trim, but the name keeps the cell text as stored so quoted
/// whitespace survives into the diagram.
fn content_cell(row: &[String]) -> Option<(usize, &str)> {
    row.iter().enumerate().skip(1).find_map(|(idx, cell)| {
        let trimmed = cell.trim();
        if trimmed.is_empty() || is_continuation_marker(trimmed) {
            None
        } else {
            Some((idx, cell.as_str()))
        }
    })
}

fn is_continuation_marker(cell: &str) -> bool {
    !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit())
}
