// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

use std::fmt;

/// Index of a bone inside its [`BoneTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoneId(usize);

impl BoneId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the fishbone hierarchy.
///
/// `level` 0 is the trunk; odd levels render as diagonal spines, even levels
/// above 0 as horizontal branches. `pos` is the 1-based index among siblings
/// in insertion order. The geometry fields (`length`, `row`, `col`) are zero
/// until the layout passes assign them; `row`/`col` are signed because a
/// computed head may land outside the canvas (detected at render time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bone {
    name: String,
    level: usize,
    pos: usize,
    length: i32,
    row: i32,
    col: i32,
    parent: Option<BoneId>,
    children: Vec<BoneId>,
}

impl Bone {
    fn new(name: impl Into<String>, level: usize, pos: usize, parent: Option<BoneId>) -> Self {
        Self {
            name: name.into(),
            level,
            pos,
            length: 0,
            row: 0,
            col: 0,
            parent,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    pub fn children(&self) -> &[BoneId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn set_length(&mut self, length: i32) {
        self.length = length;
    }

    pub fn set_head(&mut self, row: i32, col: i32) {
        self.row = row;
        self.col = col;
    }
}

/// The rooted, leveled bone tree.
///
/// An index arena: the root is always at index 0 and is the only bone with no
/// parent. `append_child` maintains the `level`/`pos` invariants by
/// construction; the tree is never restructured after building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoneTree {
    bones: Vec<Bone>,
}

impl BoneTree {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self { bones: vec![Bone::new(root_name, 0, 0, None)] }
    }

    pub fn root(&self) -> BoneId {
        BoneId(0)
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        // There is always a root.
        false
    }

    pub fn bone(&self, id: BoneId) -> &Bone {
        &self.bones[id.index()]
    }

    pub fn bone_mut(&mut self, id: BoneId) -> &mut Bone {
        &mut self.bones[id.index()]
    }

    /// Appends a new bone under `parent` with `level = parent.level + 1` and
    /// `pos = len(parent.children) + 1`.
    pub fn append_child(&mut self, parent: BoneId, name: impl Into<String>) -> BoneId {
        let level = self.bones[parent.index()].level + 1;
        let pos = self.bones[parent.index()].children.len() + 1;

        let id = BoneId(self.bones.len());
        self.bones.push(Bone::new(name, level, pos, Some(parent)));
        self.bones[parent.index()].children.push(id);
        id
    }

    /// The most recently appended child of `id`, if any.
    pub fn last_child(&self, id: BoneId) -> Option<BoneId> {
        self.bone(id).children().last().copied()
    }

    /// All bone ids in pre-order (parent before children, siblings in
    /// insertion order). This is the traversal order of both geometry passes
    /// and the renderer.
    pub fn pre_order(&self) -> Vec<BoneId> {
        let mut out = Vec::<BoneId>::with_capacity(self.bones.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            out.push(id);
            for child in self.bone(id).children().iter().rev() {
                stack.push(*child);
            }
        }
        out
    }
}

/// Structural statistics gathered while building the tree, consumed by the
/// adaptive canvas sizing policy. Plain data, not shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub max_height: usize,
    pub max_degree: usize,
}

impl TreeStats {
    /// Measures `tree` directly; equivalent to the statistics accumulated by
    /// the builder.
    pub fn measure(tree: &BoneTree) -> Self {
        let mut stats = Self::default();
        for id in tree.pre_order() {
            let bone = tree.bone(id);
            stats.max_height = stats.max_height.max(bone.level());
            stats.max_degree = stats.max_degree.max(bone.children().len());
        }
        stats
    }
}
