//! Target selection for the update and delete forms.
//!
//! # Design
//! Options display as `"#<id> - <name>"`. The id is carried on the entry
//! itself (`SelectorEntry::id`) so selection never depends on re-parsing the
//! display string; `parse_id` is kept for label round-trip compatibility and
//! for callers that type the label directly. A selection that does not match
//! any id in the current snapshot means "no customer selected" — never an
//! error, since the snapshot may be stale.

use crate::types::Customer;

/// One option in the update/delete selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub id: u64,
    pub label: String,
}

/// Display label for a customer, `"#<id> - <name>"`.
pub fn label(customer: &Customer) -> String {
    format!("#{} - {}", customer.id, customer.name)
}

/// Recover the id from a selector label.
///
/// Strips the leading `#` and splits on `" - "`. Returns `None` on anything
/// that does not parse back to an id. Note the label format is ambiguous if
/// a name itself contains `" - "`, which is why selection goes through
/// `SelectorEntry::id` instead.
pub fn parse_id(label: &str) -> Option<u64> {
    let head = label.split(" - ").next()?;
    head.trim().trim_start_matches('#').trim().parse().ok()
}

/// Build selector entries from the current snapshot.
pub fn entries(customers: &[Customer]) -> Vec<SelectorEntry> {
    customers
        .iter()
        .map(|c| SelectorEntry {
            id: c.id,
            label: label(c),
        })
        .collect()
}
