// src/grader.rs
use crate::models::LabItem;
use crate::parser;

/// Ordered `(exclusive upper bound, grade)` rows. The first row whose bound is
/// above the value applies; the last row should use `f64::INFINITY`.
pub type GradeTable = &'static [(f64, &'static str)];

/// Hemoglobin (g/dL), anemia grading.
pub const HEMOGLOBIN: GradeTable = &[
    (8.0, "G3-4"),
    (10.0, "G2"),
    (11.0, "G1"),
    (f64::INFINITY, "G0"),
];

/// Codes with a grading table. Anything else is left ungraded.
const TABLES: &[(&str, GradeTable)] = &[("HB", HEMOGLOBIN)];

pub fn table_for(code: &str) -> Option<GradeTable> {
    TABLES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, table)| *table)
}

fn lookup(table: GradeTable, value: f64) -> &'static str {
    table
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, grade)| *grade)
        .unwrap_or("")
}

/// Returns the grade for `value` of lab `code`, or an empty string when the
/// code has no table.
pub fn grade(code: &str, value: f64) -> String {
    table_for(code)
        .map(|table| lookup(table, value))
        .unwrap_or("")
        .to_string()
}

/// Fills in the grade of every item in place.
pub fn grade_all(items: &mut [LabItem]) {
    for item in items.iter_mut() {
        item.grade = grade(&item.code, item.value);
    }
}

/// Parses `text` and grades what it finds.
pub fn evaluate(text: &str) -> Vec<LabItem> {
    let mut items = parser::parse(text);
    grade_all(&mut items);
    items
}
