//! Output formatting module
//!
//! Renders listed resources as a plain-text report: one header block per
//! item with indented `key: value` lines for the fields that are set.

use crate::cribl::CriblResource;

/// Label used in headers when an item has no identifier
const UNKNOWN_ID: &str = "Unknown";

/// Render a full report for a list of resources
pub fn render_report<T: CriblResource>(items: &[T]) -> String {
    if items.is_empty() {
        return format!("No {} found\n", T::PLURAL);
    }

    let mut out = format!(
        "\nFound {} {}(s):\n\n",
        items.len(),
        T::KIND.to_lowercase()
    );
    for item in items {
        out.push_str(&render_item(item));
    }
    out
}

/// Render a single resource block
fn render_item<T: CriblResource>(item: &T) -> String {
    let id = if item.id().is_empty() {
        UNKNOWN_ID
    } else {
        item.id()
    };

    let mut out = format!("{}: {}\n", T::KIND, id);
    out.push_str(&"-".repeat(id.chars().count() + T::RULE_PADDING));
    out.push('\n');

    for (label, value) in item.fields() {
        if !value.is_empty() {
            out.push_str(&format!("   {}: {}\n", label, value));
        }
    }
    out.push('\n');
    out
}

/// Title line followed by a dashed rule
pub fn render_title(title: &str, width: usize) -> String {
    format!("{}\n{}\n", title, "-".repeat(width))
}
