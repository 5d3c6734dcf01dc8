//! Column segmentation for a located table region.
//!
//! Columns are inferred positionally: after cropping the region to the
//! table's horizontal extent and right-padding every line to a common
//! width, a character position belongs to a separator gap when *every*
//! word-bearing line holds a separator character there. The complementary
//! positions, grouped into maximal consecutive runs, are the columns.
//!
//! The pad-to-common-width step and the separator character set below are
//! load-bearing invariants of this scheme; the whole inference breaks if
//! either changes.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::debug;

use crate::classify::HORIZONTAL_PATTERN;
use crate::error::{ParseError, Result};

/// Characters that may occupy a separator position.
pub const SEPARATOR_CHARS: [char; 3] = [' ', '|', '+'];

static HORIZONTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HORIZONTAL_PATTERN).expect("static regex must compile"));

/// Splits a table region into columns of per-line cell text.
///
/// Returns one inner vector per column, left to right, each holding that
/// column's slice of every region line in line order. Interior divider
/// lines are sliced along with data lines — the row reassembler uses them
/// to find the header depth — but they contribute nothing to column
/// boundary inference.
///
/// # Errors
///
/// [`ParseError::NoTableFound`] when no line of the region matches the
/// horizontal border pattern: the caller passed a non-table range, which
/// should fail loudly rather than produce an empty table.
pub fn segment_columns(region: &[String]) -> Result<Vec<Vec<String>>> {
    let extent = horizontal_extent(region)?;

    let mut rows: Vec<Vec<char>> = region.iter().map(|line| crop(line, &extent)).collect();

    // The box's outer border lines carry no cells.
    if rows.last().is_some_and(|row| is_pure_border(row)) {
        rows.pop();
    }
    if rows.first().is_some_and(|row| is_pure_border(row)) {
        rows.remove(0);
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, ' ');
    }

    let content: Vec<&Vec<char>> = rows.iter().filter(|row| has_word_char(row)).collect();
    let useful: Vec<usize> = (0..width)
        .filter(|&pos| {
            !content
                .iter()
                .all(|row| SEPARATOR_CHARS.contains(&row[pos]))
        })
        .collect();

    let spans = group_runs(&useful);
    debug!(
        lines = region.len(),
        width,
        columns = spans.len(),
        "Segmented table region"
    );

    Ok(spans
        .iter()
        .map(|span| {
            rows.iter()
                .map(|row| row[span.clone()].iter().collect())
                .collect()
        })
        .collect())
}

/// Horizontal extent of the table: `[min(start), max(end) + 1)` over all
/// border-pattern matches in the region, in character positions.
fn horizontal_extent(region: &[String]) -> Result<Range<usize>> {
    let mut extent: Option<(usize, usize)> = None;

    for line in region {
        for m in HORIZONTAL_RE.find_iter(line) {
            let start = line[..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            extent = Some(match extent {
                None => (start, end),
                Some((lo, hi)) => (lo.min(start), hi.max(end)),
            });
        }
    }

    match extent {
        Some((lo, hi)) => Ok(lo..hi + 1),
        None => Err(ParseError::NoTableFound(
            "region has no horizontal border matches".to_string(),
        )),
    }
}

fn crop(line: &str, extent: &Range<usize>) -> Vec<char> {
    line.chars()
        .skip(extent.start)
        .take(extent.end - extent.start)
        .collect()
}

/// A line composed solely of dashes and pluses (ignoring surrounding
/// blanks) is box-edge material, not a data row.
fn is_pure_border(row: &[char]) -> bool {
    let mut seen = false;
    for &ch in row {
        match ch {
            '-' | '+' => seen = true,
            ' ' => {}
            _ => return false,
        }
    }
    seen
}

fn has_word_char(row: &[char]) -> bool {
    row.iter().any(|ch| ch.is_alphanumeric() || *ch == '_')
}

/// Groups sorted positions into maximal runs of consecutive integers.
fn group_runs(positions: &[usize]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut iter = positions.iter().copied();
    let Some(first) = iter.next() else {
        return runs;
    };

    let mut start = first;
    let mut prev = first;
    for pos in iter {
        if pos > prev + 1 {
            runs.push(start..prev + 1);
            start = pos;
        }
        prev = pos;
    }
    runs.push(start..prev + 1);
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_group_runs_matches_slice_semantics() {
        assert_eq!(group_runs(&[1, 2, 3, 8, 9]), vec![1..4, 8..10]);
        assert_eq!(group_runs(&[1, 2, 3]), vec![1..4]);
        assert_eq!(group_runs(&[3, 4, 9, 10]), vec![3..5, 9..11]);
        assert!(group_runs(&[]).is_empty());
    }

    #[test]
    fn test_non_table_region_fails_loudly() {
        let prose = lines(&["just some prose", "and more prose"]);
        let err = segment_columns(&prose).unwrap_err();
        assert!(matches!(err, ParseError::NoTableFound(_)));
    }

    #[test]
    fn test_simple_two_column_table() {
        let region = lines(&[
            "-------------------",
            "   name |    value",
            "--------+----------",
            "      a |        1",
            "      b |       22",
            "-------------------",
        ]);
        let columns = segment_columns(&region).unwrap();
        assert_eq!(columns.len(), 2);
        // Outer borders trimmed; divider line sliced along with the rest.
        assert_eq!(columns[0].len(), 4);
        assert_eq!(columns[0][2].trim(), "a");
        assert_eq!(columns[1][3].trim(), "22");
    }

    #[test]
    fn test_extent_crops_content_outside_the_box() {
        let region = lines(&[
            "--------------------",
            "    x |     y       ",
            "------+-------------",
            "    1 |     2       ",
            "--------------------",
        ]);
        let columns = segment_columns(&region).unwrap();
        assert_eq!(columns.len(), 2);
        // Header, interior divider, data — the divider is row 1.
        assert_eq!(columns[1].len(), 3);
        assert_eq!(columns[0][0].trim(), "x");
        assert_eq!(columns[1][1], "-");
        assert_eq!(columns[1][2].trim(), "2");
    }

    #[test]
    fn test_column_slices_round_trip_content_lines() {
        let region = lines(&[
            "-------------------",
            "   name |    value",
            "--------+----------",
            "      a |        1",
            "-------------------",
        ]);
        let columns = segment_columns(&region).unwrap();

        // Reassembling row 2 ("      a |        1") from its column slices
        // reproduces the cropped line with only separator-only positions
        // elided.
        let reassembled: String = columns.iter().map(|col| col[2].as_str()).collect();
        assert_eq!(reassembled, "   a    1");
    }

    #[test]
    fn test_border_only_region_yields_no_columns() {
        let region = lines(&["-----", "   |", "   |  ", "-----", "   |  ", "-----"]);
        let columns = segment_columns(&region).unwrap();
        assert!(columns.is_empty());
    }
}
