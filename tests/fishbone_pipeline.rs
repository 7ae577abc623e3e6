// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! End-to-end pipeline tests: table text in, finished diagram text out.

use std::fs;
use std::path::{Path, PathBuf};

use arete::format::parse_table;
use arete::layout::{layout_fishbone, CanvasSize};
use arete::model::{build_fishbone, BoneTree};
use arete::render::render_fishbone;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn run_pipeline(name: &str, source: &str) -> (BoneTree, CanvasSize, String) {
    let table = parse_table(Path::new(name), source)
        .unwrap_or_else(|err| panic!("expected {name} to parse, got error: {err}"));
    let report = build_fishbone(&table);
    let size = CanvasSize::for_stats(report.stats());
    let mut tree = report.into_tree();
    layout_fishbone(&mut tree, &size)
        .unwrap_or_else(|err| panic!("expected {name} to lay out, got error: {err}"));
    let rendered = render_fishbone(&tree, &size)
        .unwrap_or_else(|err| panic!("expected {name} to render, got error: {err}"));
    (tree, size, rendered)
}

#[test]
fn full_pipeline_is_idempotent() {
    let source = read_fixture("late_to_work.csv");
    let (_, _, first) = run_pipeline("late_to_work.csv", &source);
    let (_, _, second) = run_pipeline("late_to_work.csv", &source);
    assert_eq!(first, second);
}

#[test]
fn rendered_grid_has_fixed_dimensions() {
    let source = read_fixture("late_to_work.csv");
    let (_, size, rendered) = run_pipeline("late_to_work.csv", &source);

    let lines = rendered.split('\n').collect::<Vec<_>>();
    assert_eq!(lines.len(), size.height());
    for line in lines {
        assert_eq!(line.chars().count(), size.width());
    }
}

#[test]
fn every_label_appears_in_the_output() {
    let source = read_fixture("late_to_work.csv");
    let (tree, _, rendered) = run_pipeline("late_to_work.csv", &source);

    for id in tree.pre_order() {
        let name = tree.bone(id).name();
        assert!(rendered.contains(name), "label '{name}' missing from render");
    }
}

#[test]
fn rows_are_emitted_bottom_up() {
    let source = read_fixture("late_to_work.csv");
    let (tree, size, rendered) = run_pipeline("late_to_work.csv", &source);

    // "Traffic" is a north-west spine: its label sits on a higher grid row
    // than the trunk, so with reversed row order it must be printed earlier.
    let lines = rendered.split('\n').collect::<Vec<_>>();
    let traffic_line = lines.iter().position(|line| line.contains("Traffic")).expect("Traffic");
    let trunk_line = lines.iter().position(|line| line.contains("Late to Work")).expect("title");
    assert!(traffic_line < trunk_line);

    // And the trunk line index maps back to the root's grid row.
    let root = tree.bone(tree.root());
    assert_eq!(trunk_line, size.height() - 1 - root.row() as usize);
}

#[test]
fn title_only_table_renders_trunk_label_and_arrow() {
    let source = read_fixture("title_only.csv");
    let (tree, _, rendered) = run_pipeline("title_only.csv", &source);

    assert_eq!(tree.len(), 1);
    assert!(rendered.contains("Trunk Only"));
    assert!(rendered.contains('\u{25a0}'));
    assert!(!rendered.contains('\\'));
    assert!(!rendered.contains('/'));
}

#[test]
fn marker_only_rows_are_skipped_but_reported() {
    let source = read_fixture("markers_only_row.csv");
    let table = parse_table(Path::new("markers_only_row.csv"), &source).expect("table");
    let report = build_fishbone(&table);

    assert_eq!(report.skipped_rows(), [1]);
    assert_eq!(report.tree().len(), 2);

    let size = CanvasSize::for_stats(report.stats());
    let mut tree = report.into_tree();
    layout_fishbone(&mut tree, &size).expect("layout");
    let rendered = render_fishbone(&tree, &size).expect("render");
    assert!(rendered.contains("Real cause"));
}

#[test]
fn nested_row_renders_horizontally_off_its_spine() {
    let source = "Title,Cause,Detail\n1,Cause1,\n1,2,Cause2\n";
    let (tree, _, rendered) = run_pipeline("nested.csv", source);

    let root = tree.bone(tree.root());
    let cause1 = tree.bone(root.children()[0]);
    let cause2 = tree.bone(cause1.children()[0]);

    assert_eq!(cause1.level(), 1);
    assert_eq!(cause2.level(), 2);
    // Spine with pos 1 slants north-west; its level-2 branch fans upward
    // (spacing added) and keeps a horizontal dash segment.
    let spacing = cause1.length() as i64 / 2;
    assert_eq!(cause2.row() as i64, cause1.row() as i64 + spacing);
    assert_eq!(cause2.col() as i64, cause1.col() as i64 - spacing);
    assert!(rendered.contains("Cause2"));

    let lines = rendered.split('\n').collect::<Vec<_>>();
    let cause2_line = lines.iter().find(|line| line.contains("Cause2")).expect("line");
    assert!(cause2_line.contains('-'), "level-2 bone should draw dashes on its label row");
}

#[test]
fn deep_bushy_trees_get_the_roomy_canvas() {
    let mut source = String::from("Title,A,B,C,D\n");
    source.push_str("1,a,,,\n1,2,b,,\n1,2,3,c,\n1,2,3,4,d\n");
    let (_, size, _) = run_pipeline("deep.csv", &source);
    assert_eq!(size, CanvasSize::roomy());
}
