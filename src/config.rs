use serde::{Deserialize, Serialize};

/// Tunables for snippet extraction and result layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Characters kept on each side of a match inside a snippet window.
    pub snippet_half_width: usize,
    /// Snippets shown per result before the rest goes behind a toggle.
    pub max_visible_snippets: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { snippet_half_width: 50, max_visible_snippets: 3 }
    }
}

impl SearchConfig {
    /// Parse a host-supplied JSON config, falling back to defaults when
    /// the input is missing fields or unreadable.
    pub fn from_json(bytes: &[u8]) -> SearchConfig {
        serde_json::from_slice(bytes).unwrap_or_default()
    }
}
