// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! Tabular input formats.
//!
//! The diagram source is an ordered table: named columns plus rows of cells.
//! Column 0's header is the diagram title; every data row encodes one node
//! (see `model::builder` for the row scanning rules).

pub mod table;

pub use table::{parse_delimited, parse_json, parse_table, Table, TableParseError};
