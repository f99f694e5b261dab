use serde::{Deserialize, Serialize};

/// One page section flattened for searching: heading (or identifier
/// fallback), space-joined leaf text, and the `#id` anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRecord {
    pub title: String,
    pub text: String,
    pub locator: String,
}

/// A section that matched the query. `title` and `snippets` carry
/// `<mark>` highlighting; `snippets` is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    pub title: String,
    pub locator: String,
    pub snippets: Vec<String>,
}
