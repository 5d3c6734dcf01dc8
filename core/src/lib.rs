//! Core output types for Stata-style log scraping.
//!
//! This crate defines the data model produced when a log is parsed:
//!
//! - [`Table`] — a rectangular grid of string cells with named columns.
//! - [`ParameterSet`] — an insertion-ordered `name → value` mapping of
//!   scalar parameters reported outside tables.
//! - [`BlockOutput`] — the tables and parameters recovered from one
//!   command block.
//! - [`ParsedLog`] — one [`BlockOutput`] per issued command.
//!
//! All types are derived, read-only projections of the input text: the
//! parser constructs them once and nothing mutates them afterwards. Cell
//! and parameter values stay raw strings; typed conversion (numbers,
//! locale-aware separators) is layered on top by consumers.
//!
//! # Example
//!
//! ```
//! use statlog_core::{BlockOutput, ParsedLog, Table};
//!
//! let mut table = Table::new(vec!["Variable".into(), "Obs".into()]);
//! table.push_row(vec!["price".into(), " 74".into()]);
//!
//! let mut block = BlockOutput::new(". summarize price");
//! block.tables.push(table);
//! block.parameters.insert("Number of obs", "74");
//!
//! let log = ParsedLog { blocks: vec![block] };
//! assert_eq!(log.tables().count(), 1);
//! assert_eq!(
//!     log.find_block("summarize").unwrap().parameters.get("Number of obs"),
//!     Some("74"),
//! );
//! ```

mod types;

pub use types::{BlockOutput, ParameterSet, ParsedLog, Table};
