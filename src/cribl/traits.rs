//! Common traits for Cribl resources

use serde::Deserialize;

/// Common trait for resources listed by this tool (worker groups, workspaces)
pub trait CriblResource {
    /// Human-readable resource kind used in report headers (e.g. "Worker Group")
    const KIND: &'static str;

    /// Plural form used in summaries (e.g. "worker groups")
    const PLURAL: &'static str;

    /// Extra dashes added to the identifier length for the header rule
    const RULE_PADDING: usize;

    /// Get the resource identifier
    fn id(&self) -> &str;

    /// Optional descriptive fields as `(label, value)` pairs, in display order.
    ///
    /// Unset fields may be returned as empty strings; the report skips them.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Generic list envelope returned by Cribl list endpoints
///
/// `items` may be missing or null; both read as an empty list.
#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub items: Option<Vec<T>>,
}

impl<T> ListResponse<T> {
    /// Consume self and return the items
    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }
}
