//! Table-region detection within a block of lines.
//!
//! Each line is reduced to a single role code (`h` for horizontal border
//! material, `c` for column-bearing, space for everything else); maximal
//! runs of non-blank codes are candidate table regions. Runs of two lines
//! or fewer are discarded as noise — a stray divider or an isolated
//! absolute-value expression does not make a table.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::debug;

use crate::classify::classify;
use crate::error::Result;

/// Shortest run of structural lines accepted as a table.
pub const MIN_REGION_LEN: usize = 3;

/// Maximal runs of role codes; `h` and `c` are both word characters,
/// blanks break the run.
static CODE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("static regex must compile"));

/// Locates the contiguous line ranges that constitute tables.
///
/// Ranges are half-open index ranges into `lines`, in order of
/// appearance. Running `find_tables` on the exact lines of a returned
/// region yields that whole region back as a single span.
///
/// # Examples
///
/// ```
/// use statlog_parser::region::find_tables;
///
/// let lines: Vec<String> = ["-----", "   |", "   |  ", "-----", "   |  ", "-----"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(find_tables(&lines).unwrap(), vec![0..6]);
/// ```
pub fn find_tables(lines: &[String]) -> Result<Vec<Range<usize>>> {
    let codes: String = lines
        .iter()
        .map(|line| classify(line).map(|role| role.code()))
        .collect::<Result<String>>()?;

    // Role codes are ASCII, so byte offsets are line indices.
    let regions: Vec<Range<usize>> = CODE_RUN_RE
        .find_iter(&codes)
        .filter(|m| m.len() >= MIN_REGION_LEN)
        .map(|m| m.start()..m.end())
        .collect();

    debug!(candidates = codes.len(), regions = regions.len(), "Located table regions");
    Ok(regions)
}
