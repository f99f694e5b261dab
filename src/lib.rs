//! In-page section search: read the search term from the page address,
//! scan the page's sections for matches, and render a results listing
//! with bounded highlighted snippets and show-more overflow groups.
//!
//! The whole pipeline runs synchronously once per call; content is
//! rescanned on every search and nothing is persisted.

pub mod collect;
pub mod config;
pub mod dom;
pub mod error;
pub mod models;
pub mod query;
pub mod render;
pub mod search;
pub mod util;

pub use config::SearchConfig;
pub use dom::{HtmlNode, HtmlPage, PageNode};
pub use error::SearchError;
pub use models::{ResultEntry, SectionRecord};
pub use render::{
    toggle, HtmlBuffer, RenderTarget, ToggleBinding, ToggleState, NO_TERM_MESSAGE,
};
pub use search::{run_search, run_search_html};
