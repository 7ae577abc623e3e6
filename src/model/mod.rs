// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! Bone tree model and the table-to-tree builder.

pub mod bone;
pub mod builder;
#[cfg(test)]
pub(crate) mod fixtures;

pub use bone::{Bone, BoneId, BoneTree, TreeStats};
pub use builder::{build_fishbone, BuildReport};
