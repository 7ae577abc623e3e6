// SPDX-FileCopyrightText: 2026 Arete Contributors
// SPDX-License-Identifier: MIT

//! Arete CLI entrypoint.
//!
//! One-shot batch run: read the tabular file, build the bone tree, pick a
//! canvas size from the tree statistics, lay out, render, print.

use std::error::Error;
use std::path::Path;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <input.{{csv,tsv,json}}>\n\nRenders the tabular cause-and-effect hierarchy in the input file as an\nASCII fishbone diagram on stdout. The header of column 0 is the diagram\ntitle; each data row adds one bone (digit cells are depth markers)."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    input: String,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut input = None::<String>;

    while let Some(arg) = args.next() {
        if arg.starts_with('-') {
            return Err(());
        }
        if input.is_some() {
            return Err(());
        }
        input = Some(arg);
    }

    let input = input.ok_or(())?;
    Ok(CliOptions { input })
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "arete".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let source = std::fs::read_to_string(&options.input)?;
        let table = arete::format::parse_table(Path::new(&options.input), &source)?;

        let report = arete::model::build_fishbone(&table);
        for row_no in report.skipped_rows() {
            eprintln!("{program}: warning: data row {row_no} has no content cell; skipped");
        }

        let size = arete::layout::CanvasSize::for_stats(report.stats());
        let mut tree = report.into_tree();
        arete::layout::layout_fishbone(&mut tree, &size)?;

        let rendered = arete::render::render_fishbone(&tree, &size)?;
        println!("{rendered}");

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("arete: {err}");
        std::process::exit(1);
    }
}
