use std::fmt::Write;

use serde::Serialize;

use crate::domain::{TestCase, Validity};

#[derive(Serialize)]
struct Entry<'a> {
    index: usize,
    address: &'a str,
    description: &'a str,
    validity: Validity,
    expected_valid: bool,
}

/// Numbered listing, one entry per paragraph:
///
/// ```text
/// 1. a@a.ru
///    Positive: minimal length (short valid address) (Valid)
///
/// ```
pub fn render_text(cases: &[TestCase]) -> String {
    let mut out = String::new();
    for (i, case) in cases.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{}. {}\n   {} ({})\n",
            i + 1,
            case.address,
            case.description,
            case.validity
        );
    }
    out
}

/// JSON array of the cases, indexed from 1 like the text listing.
pub fn render_json(cases: &[TestCase]) -> Result<String, serde_json::Error> {
    let entries: Vec<Entry<'_>> = cases
        .iter()
        .enumerate()
        .map(|(i, case)| Entry {
            index: i + 1,
            address: &case.address,
            description: &case.description,
            validity: case.validity,
            expected_valid: case.expected_valid(),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}
