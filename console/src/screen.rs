//! Pure text rendering for the console interface.
//!
//! Customers render as cards laid out in a three-column grid. All functions
//! here build strings and perform no I/O, so the layout is unit-testable.

use crm_core::{Customer, SelectorEntry};

const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: usize = 28;
const CARD_GAP: &str = "  ";

/// Shown when the snapshot is empty.
pub fn empty_state() -> &'static str {
    "No customers yet. Create your first customer below."
}

pub fn menu() -> &'static str {
    "\
1) Refresh customer list
2) Create customer
3) Update customer
4) Delete customer
q) Quit"
}

fn field(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}

fn optional_field(value: &Option<String>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "\u{2014}",
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('\u{2026}');
    clipped
}

fn card_lines(customer: &Customer) -> Vec<String> {
    let name = if customer.name.is_empty() {
        "Unnamed"
    } else {
        &customer.name
    };
    vec![
        name.to_string(),
        format!("ID #{}", customer.id),
        format!("Email: {}", field(&customer.email)),
        format!("Phone: {}", optional_field(&customer.phone)),
        format!("Address: {}", optional_field(&customer.address)),
    ]
}

/// Render the customer cards as a three-column grid.
///
/// Returns an empty string for an empty list; the caller shows the
/// empty-state message instead.
pub fn card_grid(customers: &[Customer]) -> String {
    let mut out = String::new();
    for (row_index, row) in customers.chunks(GRID_COLUMNS).enumerate() {
        if row_index > 0 {
            out.push('\n');
        }
        let cards: Vec<Vec<String>> = row.iter().map(card_lines).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        for line_index in 0..height {
            let mut line = String::new();
            for (card_index, card) in cards.iter().enumerate() {
                if card_index > 0 {
                    line.push_str(CARD_GAP);
                }
                let cell = card.get(line_index).map_or("", String::as_str);
                line.push_str(&format!("{:<width$}", clip(cell, CARD_WIDTH), width = CARD_WIDTH));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

/// Render the numbered target selector.
pub fn selector_list(entries: &[SelectorEntry]) -> String {
    let mut out = String::new();
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!("  {}) {}\n", index + 1, entry.label));
    }
    out
}
