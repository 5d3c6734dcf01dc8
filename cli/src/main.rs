use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;

use statlog_core::ParsedLog;
use statlog_parser::LogParser;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "statlog")]
#[command(about = "Extract tables and parameters from statistical console logs")]
#[command(version = PACKAGE_VERSION)]
struct Cli {
    /// Log files to parse.
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Emit JSON instead of the plain-text report.
    #[arg(long)]
    json: bool,
    /// Report per-block parse warnings on stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Result of parsing one input file, in input order.
struct FileOutcome {
    file: String,
    result: Result<(ParsedLog, Vec<String>), String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcomes: Vec<FileOutcome> = cli
        .files
        .par_iter()
        .map(|path| {
            let file = path.display().to_string();
            let result = std::fs::read_to_string(path)
                .map_err(|err| format!("Failed to read '{file}': {err}"))
                .map(|text| {
                    let mut parser = LogParser::new(&text);
                    let parsed = parser.parse();
                    (parsed, parser.warnings().to_vec())
                });
            FileOutcome { file, result }
        })
        .collect();

    let mut failed = false;
    for outcome in &outcomes {
        match &outcome.result {
            Ok((_, warnings)) if cli.verbose => {
                for warning in warnings {
                    eprintln!("{}: warning: {warning}", outcome.file);
                }
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    }

    if cli.json {
        match render_json(&outcomes) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                failed = true;
            }
        }
    } else {
        for outcome in &outcomes {
            if let Ok((parsed, _)) = &outcome.result {
                print!("{}", render_report(&outcome.file, parsed));
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn render_json(outcomes: &[FileOutcome]) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct FileJson<'a> {
        file: &'a str,
        blocks: &'a [statlog_core::BlockOutput],
    }

    let reports: Vec<FileJson<'_>> = outcomes
        .iter()
        .filter_map(|outcome| {
            outcome.result.as_ref().ok().map(|(parsed, _)| FileJson {
                file: &outcome.file,
                blocks: &parsed.blocks,
            })
        })
        .collect();

    serde_json::to_string_pretty(&reports).map_err(|err| format!("Failed to serialize: {err}"))
}

/// Plain-text per-file report: each command block with its parameters and
/// a one-line summary per table.
fn render_report(file: &str, parsed: &ParsedLog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {file}: {} block(s)", parsed.blocks.len());

    for block in &parsed.blocks {
        let _ = writeln!(out, "\n{}", block.command);
        for (index, table) in block.tables.iter().enumerate() {
            let (rows, cols) = table.shape();
            let _ = writeln!(
                out,
                "  table {}: {rows} row(s) x {cols} column(s) [{}]",
                index + 1,
                table.columns.join(", ")
            );
        }
        for (name, value) in block.parameters.iter() {
            let _ = writeln!(out, "  {name} = {value}");
        }
    }

    out
}
