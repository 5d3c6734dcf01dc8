use std::fs;
use std::path::PathBuf;

use statlog_parser::{LogParser, parse_log, parse_log_file};

#[test]
fn test_regress_fixture_recovers_anova_table_and_fit_statistics() {
    let log = parse_log(&fixture("regress.txt"));

    assert_eq!(log.blocks.len(), 1);
    let block = log.find_block("regress").expect("regress block");

    assert_eq!(block.tables.len(), 1);
    let anova = &block.tables[0];
    assert_eq!(anova.columns, vec!["Source", "SS", "df", "MS"]);
    assert_eq!(anova.shape(), (3, 4));

    let sources: Vec<&str> = anova.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(sources, vec!["Model", "Residual", "Total"]);
    assert_eq!(anova.rows[2][1].trim(), "2443.45946");

    assert_eq!(block.parameters.get("Number of obs"), Some("74"));
    assert_eq!(block.parameters.get("F(2, 71)"), Some("69.75"));
    assert_eq!(block.parameters.get("Prob > F"), Some("0.0000"));
    assert_eq!(block.parameters.get("R-squared"), Some("0.6627"));
    assert_eq!(block.parameters.get("Root MSE"), Some("3.4071"));
}

#[test]
fn test_margins_fixture_folds_factor_levels_and_stacks_headers() {
    let log = parse_log(&fixture("margins.txt"));
    let block = log.find_block("margins").expect("margins block");

    let table = &block.tables[0];
    // The label column has no header text above the divider; the two-line
    // statistics header is joined top to bottom.
    assert_eq!(
        table.columns,
        vec!["col0", "Margin", "Delta-method   Std. Err.", "t", "P>|t|"]
    );

    let labels: Vec<&str> = table.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(labels, vec!["sex = male", "sex = female"]);
    assert_eq!(table.rows[0][1].trim(), "60.56034");
    assert_eq!(table.rows[1][1].trim(), "78.88236");

    assert_eq!(block.parameters.get("Number of obs"), Some("74"));
}

#[test]
fn test_nbreg_fixture_full_block() {
    let log = parse_log(&fixture("nbreg.txt"));

    assert_eq!(log.blocks.len(), 1);
    let block = &log.blocks[0];
    assert_eq!(block.command, ". nbreg deaths i.cohort, exposure(exposure)");

    let table = &block.tables[0];
    assert_eq!(table.columns, vec!["deaths", "Coef.", "Std. Err.", "z", "P>|z|"]);

    let labels: Vec<&str> = table.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(
        labels,
        vec!["cohort = 1960-1967", "cohort = 1968-1976", "_cons", "/lnalpha"]
    );
    assert_eq!(table.rows[2][1].trim(), "4.435906");
    // The /lnalpha row has no z or P>|z| cells.
    assert!(table.rows[3][3].trim().is_empty());
    assert!(table.rows[3][4].trim().is_empty());

    // Iterative-fitting progress is noise, not parameters.
    assert!(block.parameters.get("log likelihood").is_none());

    let expected = [
        ("Number of obs", "21"),
        ("Dispersion", "mean"),
        ("Prob > chi2", "0.9307"),
        ("Log likelihood", "-108.48841"),
        ("Pseudo R2", "0.0007"),
        ("LR test of alpha=0: chibar2(01)", "434.62"),
        ("Prob >= chibar2", "0.000"),
    ];
    for (name, value) in expected {
        assert_eq!(block.parameters.get(name), Some(value), "{name}");
    }
}

#[test]
fn test_multi_command_log_keeps_blocks_separate() {
    let text = format!("{}\n{}", fixture("regress.txt"), fixture("margins.txt"));
    let log = parse_log(&text);

    assert_eq!(log.blocks.len(), 2);
    assert_eq!(log.tables().count(), 2);
    assert!(log.find_block("regress").is_some());
    assert!(log.find_block("margins").is_some());
    // Parameters stay with their own block.
    let margins = log.find_block("margins").expect("margins block");
    assert!(margins.parameters.get("R-squared").is_none());
}

#[test]
fn test_degenerate_input_yields_empty_results_without_panicking() {
    assert!(parse_log("").blocks.is_empty());
    assert!(parse_log("no commands here\njust text\n").blocks.is_empty());

    let log = parse_log(". describe\nnothing tabular follows\n");
    assert_eq!(log.blocks.len(), 1);
    assert!(log.blocks[0].tables.is_empty());
    assert!(log.blocks[0].parameters.is_empty());
}

#[test]
fn test_parser_reports_no_warnings_for_clean_fixtures() {
    for name in ["regress.txt", "margins.txt", "nbreg.txt"] {
        let mut parser = LogParser::new(&fixture(name));
        parser.parse();
        assert!(parser.warnings().is_empty(), "{name}: {:?}", parser.warnings());
    }
}

#[test]
fn test_parse_log_file_reads_from_disk() {
    let path = fixture_path("regress.txt");
    let log = parse_log_file(&path).expect("fixture should load");
    assert_eq!(log.blocks.len(), 1);

    let missing = fixture_path("no_such_fixture.txt");
    assert!(parse_log_file(&missing).is_err());
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture file must be readable")
}
