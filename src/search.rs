use std::time::Instant;

use crate::collect::collect_sections;
use crate::config::SearchConfig;
use crate::dom::{HtmlPage, PageNode};
use crate::error::SearchError;
use crate::models::ResultEntry;
use crate::query::term_from_address;
use crate::render::{render_no_term, render_results, RenderTarget, ToggleBinding};
use crate::util::highlight::highlight;
use crate::util::snippet::build_snippets;

/// Run one search over the page and render into `target`: extract the
/// term from `address`, flatten the page's sections, build highlighted
/// snippets, and write the results listing. Returns one binding per
/// rendered overflow toggle.
///
/// Without a term the no-term message is rendered and the page content
/// is never collected.
pub fn run_search<N: PageNode>(
    address: &str,
    page: &N,
    config: &SearchConfig,
    target: &mut dyn RenderTarget,
) -> Result<Vec<ToggleBinding>, SearchError> {
    let t0 = Instant::now();
    let query = match term_from_address(address) {
        Some(q) => q,
        None => {
            render_no_term(target);
            return Ok(Vec::new());
        }
    };

    let mut entries: Vec<ResultEntry> = Vec::new();
    for section in collect_sections(page) {
        let snippets = build_snippets(&section.text, &query, config.snippet_half_width)?;
        if snippets.is_empty() { continue; }
        entries.push(ResultEntry {
            title: highlight(&section.title, &query)?,
            locator: section.locator,
            snippets,
        });
    }

    let bindings = render_results(&query, &entries, config, target);
    log::debug!(
        "pagesearch: search q=\"{}\" n={} elapsed={}ms",
        query,
        entries.len(),
        t0.elapsed().as_millis()
    );
    Ok(bindings)
}

/// Parse `html` and run the search over the whole document.
pub fn run_search_html(
    address: &str,
    html: &str,
    config: &SearchConfig,
    target: &mut dyn RenderTarget,
) -> Result<Vec<ToggleBinding>, SearchError> {
    let page = HtmlPage::parse(html);
    run_search(address, &page.root(), config, target)
}
