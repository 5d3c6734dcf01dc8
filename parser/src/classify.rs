//! Per-line structural role classification.
//!
//! Every line gets exactly one coarse [`LineRole`], derived purely from
//! regex matches against the line text. The roles feed table-region
//! detection ([`crate::region`]); they are not a full token taxonomy.
//!
//! Roles are defined in a fixed, priority-ordered registry. Lower numeric
//! priority wins; two matches at the same priority are a hard
//! [`StructuralAmbiguity`](crate::ParseError::StructuralAmbiguity) error
//! because they indicate a defect in the patterns themselves.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ParseError, Result};

/// A dashed/plus run followed by a non-word boundary: table border
/// material. Shared with the column segmenter, which uses the same
/// pattern to find a table's horizontal extent.
pub(crate) const HORIZONTAL_PATTERN: &str = r"[-+]+\B";

/// Coarse structural role of one log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Contains a dashed/plus divider segment.
    Horizontal,
    /// Contains a column separator: `|` or `+` followed by whitespace or
    /// end of line.
    ColumnBearing,
    /// Anything else — narrative, blanks, command echoes.
    Unused,
}

impl LineRole {
    /// Single-character code used to assemble per-block role strings.
    pub fn code(self) -> char {
        match self {
            LineRole::Horizontal => 'h',
            LineRole::ColumnBearing => 'c',
            LineRole::Unused => ' ',
        }
    }
}

/// One entry of the closed role registry.
struct RoleDef {
    role: LineRole,
    name: &'static str,
    priority: u8,
    include: Regex,
    exclude: Option<Regex>,
}

impl RoleDef {
    fn matches(&self, prepared: &str) -> bool {
        self.include.is_match(prepared)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(prepared))
    }
}

static ROLE_DEFS: LazyLock<[RoleDef; 2]> = LazyLock::new(|| {
    // All regexes here are compile-time constants. An expect() failure
    // indicates a programmer error in the pattern, not a runtime condition.
    [
        RoleDef {
            role: LineRole::Horizontal,
            name: "horizontal",
            priority: 0,
            include: Regex::new(HORIZONTAL_PATTERN).expect("static regex must compile"),
            exclude: None,
        },
        RoleDef {
            role: LineRole::ColumnBearing,
            name: "column-bearing",
            priority: 1,
            include: Regex::new(r"[|+](?:\s|$)").expect("static regex must compile"),
            exclude: Some(Regex::new(r"Pr\(\|\w\|").expect("static regex must compile")),
        },
    ]
});

/// `|x|` with a single word character denotes "absolute value of x"
/// (e.g. `P>|t|`, `Pr(|T| > |t|)`), not a table border. Those pipes are
/// masked out before any role pattern runs.
static ABSOLUTE_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\w\|").expect("static regex must compile"));

/// Assigns the line its structural role.
///
/// # Examples
///
/// ```
/// use statlog_parser::classify::{LineRole, classify};
///
/// assert_eq!(classify("-----+--------").unwrap(), LineRole::Horizontal);
/// assert_eq!(classify("    Variable |        Obs").unwrap(), LineRole::ColumnBearing);
/// assert_eq!(classify(" -3 ").unwrap(), LineRole::Unused);
/// ```
pub fn classify(line: &str) -> Result<LineRole> {
    let prepared = ABSOLUTE_VALUE_RE.replace_all(line, "XXX");

    let mut best: Option<&RoleDef> = None;
    for def in ROLE_DEFS.iter() {
        if !def.matches(&prepared) {
            continue;
        }
        match best {
            None => best = Some(def),
            Some(current) if def.priority < current.priority => best = Some(def),
            Some(current) if def.priority == current.priority => {
                return Err(ParseError::StructuralAmbiguity {
                    line: line.to_string(),
                    first: current.name,
                    second: def.name,
                    priority: def.priority,
                });
            }
            Some(_) => {}
        }
    }

    Ok(best.map_or(LineRole::Unused, |def| def.role))
}
