//! Row reconstruction and hierarchical label folding.
//!
//! Turns segmented columns into a [`Table`]: header lines become column
//! names, divider rows fix the header depth, and category-header rows are
//! folded into the labels of the rows beneath them.

use statlog_core::Table;

/// Header depth assumed when a region has no interior divider row.
const DEFAULT_HEADER_DEPTH: usize = 1;

/// Builds a table from per-column line slices.
///
/// The first column is the row-label column. A strict left-to-right fold
/// with one unit of state handles category labels:
///
/// - a row whose label is non-empty while every other cell is blank is a
///   pure category header; it is remembered and dropped from output;
/// - a row whose raw label ends in exactly one trailing space is a
///   sub-item of the remembered category and is emitted as
///   `"{category} = {label}"`;
/// - any other row resets the category and carries its own label.
///
/// The one-trailing-space cue is a known-fragile width heuristic; deeply
/// nested or irregularly spaced labels are not recognized.
///
/// # Examples
///
/// ```
/// use statlog_parser::table::build_table;
///
/// let columns = vec![
///     vec!["variable".into(), "    sex".into(), "  male ".into()],
///     vec!["mean".into(), "    ".into(), "60.5".into()],
/// ];
/// let table = build_table(&columns);
/// assert_eq!(table.columns, vec!["variable", "mean"]);
/// assert_eq!(table.rows, vec![vec!["sex = male".to_string(), "60.5".into()]]);
/// ```
pub fn build_table(columns: &[Vec<String>]) -> Table {
    let Some(first) = columns.first() else {
        return Table::new(Vec::new());
    };
    let line_count = first.len();

    let header_depth = (0..line_count)
        .find(|&index| is_divider_row(columns, index))
        .unwrap_or(DEFAULT_HEADER_DEPTH)
        .min(line_count);

    let names = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let joined = column[..header_depth].join(" ");
            let trimmed = joined.trim();
            if trimmed.is_empty() {
                format!("col{index}")
            } else {
                trimmed.to_string()
            }
        })
        .collect();

    let mut table = Table::new(names);
    let mut current_label = String::new();

    for index in header_depth..line_count {
        if is_divider_row(columns, index) || !row_has_word(columns, index) {
            continue;
        }

        let raw_label = columns[0][index].as_str();
        let trimmed_label = raw_label.trim();
        let others_blank = columns[1..]
            .iter()
            .all(|column| column[index].trim().is_empty());

        if columns.len() > 1 && others_blank && !trimmed_label.is_empty() {
            current_label = trimmed_label.to_string();
            continue;
        }

        let label = if has_single_trailing_space(raw_label) && !current_label.is_empty() {
            format!("{current_label} = {trimmed_label}")
        } else {
            current_label.clear();
            trimmed_label.to_string()
        };

        let mut row = Vec::with_capacity(columns.len());
        row.push(label);
        row.extend(columns[1..].iter().map(|column| column[index].clone()));
        table.push_row(row);
    }

    table
}

/// A row sliced from an interior divider line: dash/plus material plus
/// separator characters, nothing word-bearing.
fn is_divider_row(columns: &[Vec<String>], index: usize) -> bool {
    let mut seen_dash = false;
    for column in columns {
        for ch in column[index].chars() {
            match ch {
                '-' | '+' => seen_dash = true,
                ' ' | '|' => {}
                _ => return false,
            }
        }
    }
    seen_dash
}

fn row_has_word(columns: &[Vec<String>], index: usize) -> bool {
    columns.iter().any(|column| {
        column[index]
            .chars()
            .any(|ch| ch.is_alphanumeric() || ch == '_')
    })
}

/// Exactly one trailing space preceded by a non-space character — the
/// width cue that marks an indented sub-item.
fn has_single_trailing_space(raw: &str) -> bool {
    raw.ends_with(' ') && !raw.ends_with("  ") && !raw.trim_end().is_empty()
}
