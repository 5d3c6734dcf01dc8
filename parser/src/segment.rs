//! Command-block segmentation.
//!
//! A Stata-style log interleaves issued commands with their output. A
//! command marker is the interactive prompt echo: `". "` followed by
//! text, a bare `"."`, or the `"> "` continuation prompt. Each block runs
//! from one marker line (inclusive) up to the next marker or end of
//! input. Preamble lines before the first marker belong to no block.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Command/continuation prompt shapes, as echoed by the REPL.
static COMMAND_MARKERS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    // All regexes here are compile-time constants. An expect() failure
    // indicates a programmer error in the pattern, not a runtime condition.
    [
        Regex::new(r"^\. \S").expect("static regex must compile"),
        Regex::new(r"^\.\s*$").expect("static regex must compile"),
        Regex::new(r"^> ").expect("static regex must compile"),
        Regex::new(r"^>$").expect("static regex must compile"),
    ]
});

/// True when the line is a command or continuation prompt echo.
pub fn is_command_marker(line: &str) -> bool {
    COMMAND_MARKERS.iter().any(|pattern| pattern.is_match(line))
}

/// A maximal contiguous run of lines belonging to one issued command.
///
/// Owns its lines by index range into the full log, not by copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBlock {
    /// The marker line that opened the block, as written.
    pub command: String,
    /// Line-index range, marker line included.
    pub range: Range<usize>,
}

/// Splits a log into command blocks.
///
/// # Examples
///
/// ```
/// use statlog_parser::segment::split_blocks;
///
/// let lines: Vec<String> = ["preamble", ". summarize", "output", ". regress", "more"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let blocks = split_blocks(&lines);
///
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].range, 1..3);
/// assert_eq!(blocks[1].command, ". regress");
/// assert_eq!(blocks[1].range, 3..5);
/// ```
pub fn split_blocks(lines: &[String]) -> Vec<CommandBlock> {
    let mut blocks: Vec<CommandBlock> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if is_command_marker(line) {
            if let Some(open) = blocks.last_mut() {
                open.range.end = index;
            }
            blocks.push(CommandBlock {
                command: line.clone(),
                range: index..lines.len(),
            });
        }
    }

    blocks
}
