// src/parser.rs
use crate::models::LabItem;
use once_cell::sync::Lazy;
use regex::Regex;

/// `[index] CODE[.] VALUE ...`, e.g. `001 Hb.    10.1`.
///
/// ASCII-only (`(?-u)`): full-width or other non-ASCII digits and spaces do
/// not count as part of a row.
static ROW_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)^\s*(?:\d+\s+)?([A-Za-z]+)\.?\s+([\d.]+)").unwrap());

/// Extracts lab items from a report, one candidate per line.
///
/// Lines that don't look like a result row are skipped. A value that matches
/// the row pattern but isn't a valid number (`1.2.3`) is reported as `0.0`.
/// Grades are left empty; see [`crate::grader`].
pub fn parse(text: &str) -> Vec<LabItem> {
    text.split('\n').filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<LabItem> {
    let caps = ROW_PATTERN.captures(line.trim())?;
    let code = caps[1].to_uppercase();
    let value = caps[2].parse::<f64>().unwrap_or(0.0);

    Some(LabItem {
        code,
        value,
        grade: String::new(),
    })
}
