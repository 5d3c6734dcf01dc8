//! Output model for parsed log content.
//!
//! These types are the read-only projections a parse produces: rectangular
//! [`Table`]s, flat [`ParameterSet`]s, and the per-command [`BlockOutput`]
//! grouping. The types are designed for serialization with [`serde`] and
//! carry strings only — numeric conversion is a downstream concern.

use serde::{Deserialize, Serialize};

/// A rectangular table recovered from a bordered text region.
///
/// Row order reflects source line order; column order reflects left-to-right
/// byte position in the source. Cell values are raw text slices — interior
/// padding is preserved so callers can still distinguish alignment cues.
///
/// # Examples
///
/// ```
/// use statlog_core::Table;
///
/// let mut table = Table::new(vec!["Variable".into(), "Obs".into()]);
/// table.push_row(vec!["price".into(), " 74".into()]);
/// table.push_row(vec!["mpg".into(), " 74".into()]);
///
/// assert_eq!(table.shape(), (2, 2));
/// assert_eq!(table.column("Obs"), Some(vec![" 74", " 74"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, left to right.
    pub columns: Vec<String>,
    /// Data rows; every row has exactly `columns.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Returns `(row_count, column_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// True when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all values of the named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|col| col == name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Iterates over rows as `(column_name, cell)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlog_core::Table;
    ///
    /// let mut table = Table::new(vec!["x".into()]);
    /// table.push_row(vec!["5".into()]);
    /// let pairs: Vec<_> = table.labeled_rows().next().unwrap();
    /// assert_eq!(pairs, vec![("x", "5")]);
    /// ```
    pub fn labeled_rows(&self) -> impl Iterator<Item = Vec<(&str, &str)>> {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect()
        })
    }
}

/// Flat `name → value` mapping of scalar parameters reported in narrative
/// text around tables.
///
/// Insertion order is preserved; re-inserting an existing name overwrites
/// the value in place (last write wins, first position kept), mirroring
/// dict-insertion semantics.
///
/// # Examples
///
/// ```
/// use statlog_core::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.insert("Number of obs", "74");
/// params.insert("Prob > F", "0.0000");
/// params.insert("Number of obs", "21");
///
/// assert_eq!(params.get("Number of obs"), Some("21"));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, overwriting any existing value for the name.
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Looks up a parameter value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no parameters were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(&name, &value);
        }
        set
    }
}

/// Everything recovered from one command block: the issuing command line,
/// the tables found inside the block, and the block's scalar parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockOutput {
    /// The command-marker line that opened the block, as written.
    pub command: String,
    /// Tables in order of appearance.
    pub tables: Vec<Table>,
    /// Scalar parameters from the block's non-table lines.
    pub parameters: ParameterSet,
}

impl BlockOutput {
    /// Creates an empty block for the given command line.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            tables: Vec::new(),
            parameters: ParameterSet::new(),
        }
    }
}

/// A fully parsed log: one [`BlockOutput`] per issued command, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLog {
    pub blocks: Vec<BlockOutput>,
}

impl ParsedLog {
    /// Iterates over every table in the log, across all blocks.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().flat_map(|block| block.tables.iter())
    }

    /// Finds the first block whose command line contains `needle`.
    ///
    /// # Examples
    ///
    /// ```
    /// use statlog_core::{BlockOutput, ParsedLog};
    ///
    /// let log = ParsedLog {
    ///     blocks: vec![BlockOutput::new(". summarize price mpg")],
    /// };
    /// assert!(log.find_block("summarize").is_some());
    /// assert!(log.find_block("regress").is_none());
    /// ```
    pub fn find_block(&self, needle: &str) -> Option<&BlockOutput> {
        self.blocks
            .iter()
            .find(|block| block.command.contains(needle))
    }
}
