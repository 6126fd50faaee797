//! Quick-reference list appended after a generated answer.

use std::fmt::Write;

use roadsafe_core::InterventionRecord;

const QUICK_REFERENCE_HEADER: &str = "\n\n**Quick Reference Matches:**\n";

/// Render the citation list, or `None` when there is nothing to cite.
pub fn format_quick_reference(citations: &[&InterventionRecord]) -> Option<String> {
    if citations.is_empty() {
        return None;
    }

    let mut out = String::from(QUICK_REFERENCE_HEADER);
    for (i, record) in citations.iter().enumerate() {
        let _ = write!(
            out,
            "\n{}. **{}** ({})\n   - Problem: {}\n   - Standard: {} {}\n",
            i + 1,
            record.name,
            record.category,
            record.problem_type,
            record.standard_code,
            record.clause,
        );
    }
    Some(out)
}
