// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! Arete — fishbone (Ishikawa) diagram renderer for the terminal.
//!
//! The pipeline is a one-shot batch transformation: a tabular source
//! ([`format::Table`]) is built into a leveled bone tree ([`model`]), the
//! geometry passes assign segment lengths and head positions ([`layout`]),
//! and the renderer paints the tree onto a character grid ([`render`]).

pub mod format;
pub mod layout;
pub mod model;
pub mod render;
