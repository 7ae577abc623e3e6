// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! Shared tree fixtures for unit tests.

use super::bone::BoneTree;

/// A single path of bones: root -> names[0] -> names[1] -> ...
pub(crate) fn chain(names: &[&str]) -> BoneTree {
    let mut tree = BoneTree::new("root");
    let mut parent = tree.root();
    for name in names {
        parent = tree.append_child(parent, *name);
    }
    tree
}

/// The classic "Late to Work" example: four primary causes, a few details.
pub(crate) fn late_to_work() -> BoneTree {
    let mut tree = BoneTree::new("Late to Work");
    let traffic = tree.append_child(tree.root(), "Traffic");
    let weather = tree.append_child(tree.root(), "Weather");
    let alarm = tree.append_child(tree.root(), "Alarm");
    tree.append_child(tree.root(), "Transit");

    let accident = tree.append_child(traffic, "Accident");
    tree.append_child(traffic, "Rush hour");
    tree.append_child(accident, "Lane closed");
    tree.append_child(weather, "Snow");
    tree.append_child(alarm, "Power cut");

    tree
}
