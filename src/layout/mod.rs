// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! Geometry for fishbone diagrams.
//!
//! Two pre-order passes over the built tree: segment length assignment (with
//! overlap rescaling against the grandparent) and head positioning.

pub mod fishbone;

pub use fishbone::{
    assign_lengths, layout_fishbone, place_bones, CanvasSize, FishboneLayoutError,
};
