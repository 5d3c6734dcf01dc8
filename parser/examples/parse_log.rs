//! Basic log parsing example.
//!
//! Demonstrates how to use `parse_log()` to recover tables and scalar
//! parameters from a pre-captured console log.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p statlog-parser --example parse_log
//! ```

use statlog_parser::parse_log;

fn main() {
    let log_text = "\
. summarize price mpg

    Variable |       Obs        Mean    Std. Dev.       Min        Max
-------------+---------------------------------------------------------
       price |        74    6165.257    2949.496       3291      15906
         mpg |        74     21.2973    5.785503         12         41

. regress mpg weight

Number of obs   =        74
R-squared       =    0.6515
";

    let parsed = parse_log(log_text);

    for block in &parsed.blocks {
        println!("Command: {}", block.command);

        for (index, table) in block.tables.iter().enumerate() {
            let (rows, cols) = table.shape();
            println!("\n  Table {} ({rows} rows x {cols} columns)", index + 1);
            println!("  Columns: {}", table.columns.join(", "));
            for row in &table.rows {
                let cells: Vec<&str> = row.iter().map(|cell| cell.trim()).collect();
                println!("    {}", cells.join(" | "));
            }
        }

        if !block.parameters.is_empty() {
            println!("\n  Parameters:");
            for (name, value) in block.parameters.iter() {
                println!("    {name} = {value}");
            }
        }
        println!();
    }
}
