//! Builds the reference text handed to the advisory generator.

use std::fmt::Write;

use roadsafe_core::constants::CONTEXT_RULE_WIDTH;
use roadsafe_core::InterventionRecord;

pub const CONTEXT_HEADER: &str = "RELEVANT ROAD SAFETY INTERVENTIONS:\n\n";

/// Render `records` as blocks separated by a horizontal rule.
pub fn format_context(records: &[&InterventionRecord]) -> String {
    let rule = "─".repeat(CONTEXT_RULE_WIDTH);
    let mut out = String::from(CONTEXT_HEADER);

    for record in records {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "{}\n   Problem Type: {}\n   Category: {}\n   Standard: {}\n   Description: {}\n{}\n",
            record.name,
            record.problem_type,
            record.category,
            record.standard_reference(),
            record.description,
            rule,
        );
    }
    out
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
