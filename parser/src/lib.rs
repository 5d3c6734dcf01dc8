//! Structured table and parameter recovery from Stata-style logs.
//!
//! A log is an unstructured sequence of text lines interleaving narrative
//! text, fixed-width ASCII tables bordered by dashes, pipes, and plus
//! signs, and `key = value` parameter lines. This crate recovers, for
//! each command block in the log, the tables as rectangular
//! [`Table`](statlog_core::Table)s and the scalar parameters as a flat
//! [`ParameterSet`](statlog_core::ParameterSet).
//!
//! The pipeline, leaves first:
//!
//! - [`classify`] — per-line structural roles.
//! - [`segment`] — command-prompt block segmentation.
//! - [`region`] — contiguous table-region detection.
//! - [`columns`] — positional column segmentation.
//! - [`table`] — row reconstruction and category-label folding.
//! - [`params`] — `key = value` extraction from non-table lines.
//!
//! Everything is synchronous and pure: immutable input in, newly
//! constructed results out, no I/O below [`parse_log_file`].
//!
//! # Main entry points
//!
//! - [`parse_log`] — parse an in-memory log string.
//! - [`parse_log_file`] — read and parse a log file.
//! - [`LogParser`] — the same, with access to per-block warnings.
//!
//! # Example
//!
//! ```
//! use statlog_parser::parse_log;
//!
//! let log = "\
//! . tabstat price
//!
//! -------------------
//!     stat |   price
//! ---------+---------
//!     mean | 6165.26
//! -------------------
//! ";
//!
//! let parsed = parse_log(log);
//! let block = parsed.find_block("tabstat").unwrap();
//! assert_eq!(block.tables.len(), 1);
//! assert_eq!(block.tables[0].columns, vec!["stat", "price"]);
//! assert_eq!(block.tables[0].rows[0][0], "mean");
//! ```

pub mod classify;
pub mod columns;
pub mod error;
pub mod params;
pub mod region;
pub mod segment;
pub mod table;

use std::path::Path;

use tracing::{debug, warn};

use statlog_core::{BlockOutput, ParsedLog};

pub use error::{ParseError, Result};

/// Parser for one log, holding the normalized lines and any warnings
/// accumulated while processing.
pub struct LogParser {
    lines: Vec<String>,
    warnings: Vec<String>,
}

impl LogParser {
    /// Creates a parser over the given log text. Line endings are
    /// normalized by splitting on line breaks and stripping trailing
    /// whitespace per line.
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(|line| line.trim_end().to_string()).collect(),
            warnings: Vec::new(),
        }
    }

    /// Parses the log into per-command blocks of tables and parameters.
    ///
    /// Failures are local: a table that cannot be segmented, or a block
    /// whose lines cannot be classified, is recorded in
    /// [`warnings`](Self::warnings) and skipped without aborting sibling
    /// tables or blocks.
    pub fn parse(&mut self) -> ParsedLog {
        let blocks = segment::split_blocks(&self.lines);
        debug!(lines = self.lines.len(), blocks = blocks.len(), "Segmented log");

        let mut parsed = ParsedLog::default();
        for block in blocks {
            let (output, warnings) = parse_block(&self.lines, &block);
            self.warnings.extend(warnings);
            parsed.blocks.push(output);
        }
        parsed
    }

    /// Warnings accumulated during [`parse`](Self::parse).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn parse_block(lines: &[String], block: &segment::CommandBlock) -> (BlockOutput, Vec<String>) {
    let block_lines = &lines[block.range.clone()];
    let mut output = BlockOutput::new(&block.command);
    let mut warnings = Vec::new();

    // Lines inside located table regions are excluded from parameter
    // extraction.
    let mut in_table = vec![false; block_lines.len()];

    match region::find_tables(block_lines) {
        Ok(regions) => {
            for table_range in regions {
                in_table[table_range.clone()].fill(true);
                match columns::segment_columns(&block_lines[table_range.clone()]) {
                    Ok(cols) => output.tables.push(table::build_table(&cols)),
                    Err(err) => {
                        warn!(block = %block.command, ?table_range, %err, "Skipping table");
                        warnings.push(format!(
                            "block {:?}: table at lines {}..{} skipped: {err}",
                            block.command,
                            block.range.start + table_range.start,
                            block.range.start + table_range.end,
                        ));
                    }
                }
            }
        }
        Err(err) => {
            warn!(block = %block.command, %err, "Region detection failed");
            warnings.push(format!(
                "block {:?}: region detection failed: {err}",
                block.command
            ));
        }
    }

    let non_table: Vec<String> = block_lines
        .iter()
        .zip(&in_table)
        .filter(|(_, masked)| !**masked)
        .map(|(line, _)| line.clone())
        .collect();
    output.parameters = params::extract_parameters(&non_table);

    debug!(
        block = %output.command,
        tables = output.tables.len(),
        parameters = output.parameters.len(),
        "Parsed block"
    );
    (output, warnings)
}

/// Parses an in-memory log string.
///
/// Convenience wrapper over [`LogParser`] for callers that do not need
/// warnings.
pub fn parse_log(text: &str) -> ParsedLog {
    LogParser::new(text).parse()
}

/// Reads and parses a log file.
///
/// # Errors
///
/// [`ParseError::Io`] when the file cannot be read. Parse-level problems
/// never fail the whole file; they surface as skipped tables.
pub fn parse_log_file(path: impl AsRef<Path>) -> Result<ParsedLog> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_log(&text))
}
