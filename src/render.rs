use std::fmt::Write;

use crate::config::SearchConfig;
use crate::models::ResultEntry;

/// Message rendered when the address carries no search term.
pub const NO_TERM_MESSAGE: &str = "<p>No search term entered.</p>";

/// Output sink for rendered results. Replacing the content discards
/// whatever was rendered before, toggle wiring included.
pub trait RenderTarget {
    fn replace_content(&mut self, html: &str);
}

/// In-memory render target.
#[derive(Debug, Default)]
pub struct HtmlBuffer {
    content: String,
}

impl HtmlBuffer {
    pub fn new() -> HtmlBuffer {
        HtmlBuffer::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl RenderTarget for HtmlBuffer {
    fn replace_content(&mut self, html: &str) {
        self.content.clear();
        self.content.push_str(html);
    }
}

/// Visibility of one overflow-snippet group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Collapsed,
    Expanded,
}

impl ToggleState {
    /// Label shown on the control while in this state.
    pub fn label(self) -> &'static str {
        match self {
            ToggleState::Collapsed => "Show More",
            ToggleState::Expanded => "Show Less",
        }
    }

    /// Whether the overflow group is display-hidden in this state.
    pub fn group_hidden(self) -> bool {
        matches!(self, ToggleState::Collapsed)
    }
}

/// The one transition: each activation flips the state.
pub fn toggle(state: ToggleState) -> ToggleState {
    match state {
        ToggleState::Collapsed => ToggleState::Expanded,
        ToggleState::Expanded => ToggleState::Collapsed,
    }
}

/// Links a rendered toggle control to its overflow group. The host's
/// event dispatch calls `activate` on each click-equivalent event and
/// applies `label`/`group_hidden` back to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleBinding {
    pub control_id: String,
    pub group_id: String,
    pub state: ToggleState,
}

impl ToggleBinding {
    pub fn activate(&mut self) {
        self.state = toggle(self.state);
    }

    pub fn label(&self) -> &'static str {
        self.state.label()
    }
}

/// Render the no-term message.
pub fn render_no_term(target: &mut dyn RenderTarget) {
    target.replace_content(NO_TERM_MESSAGE);
}

/// Render the results listing (or the no-results message) into the
/// target, returning one binding per overflow group. The query is
/// interpolated verbatim into the no-results message, and entry titles
/// and snippets are written as-is.
pub fn render_results(
    query: &str,
    entries: &[ResultEntry],
    config: &SearchConfig,
    target: &mut dyn RenderTarget,
) -> Vec<ToggleBinding> {
    if entries.is_empty() {
        target.replace_content(&format!(
            "<p>No results found for \"<strong>{}</strong>\".</p>",
            query
        ));
        return Vec::new();
    }

    let mut html = String::new();
    let mut bindings = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = write!(
            html,
            "<p><a href=\"{}\"><strong>{}</strong></a></p>",
            entry.locator, entry.title
        );

        let visible_count = entry.snippets.len().min(config.max_visible_snippets);
        for snippet in &entry.snippets[..visible_count] {
            let _ = write!(html, "<p>{}</p>", snippet);
        }

        let hidden = &entry.snippets[visible_count..];
        if !hidden.is_empty() {
            let state = ToggleState::Collapsed;
            // Position-derived ids keep repeated renders byte-identical.
            let group_id = format!("more-snippets-{}", i);
            let control_id = format!("toggle-snippets-{}", i);
            let _ = write!(
                html,
                "<div class=\"more-snippets\" id=\"{}\" style=\"display:none;\">",
                group_id
            );
            for snippet in hidden {
                let _ = write!(html, "<p>{}</p>", snippet);
            }
            html.push_str("</div>");
            let _ = write!(
                html,
                "<button class=\"toggle-snippets\" id=\"{}\">{}</button>",
                control_id,
                state.label()
            );
            bindings.push(ToggleBinding { control_id, group_id, state });
        }
    }

    target.replace_content(&html);
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(snippets: &[&str]) -> ResultEntry {
        ResultEntry {
            title: "Animals".to_string(),
            locator: "#animals".to_string(),
            snippets: snippets.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_term_message_exact() {
        let mut buf = HtmlBuffer::new();
        render_no_term(&mut buf);
        assert_eq!(buf.content(), "<p>No search term entered.</p>");
    }

    #[test]
    fn test_no_results_message_verbatim_query() {
        let mut buf = HtmlBuffer::new();
        let bindings = render_results("caT <x>", &[], &SearchConfig::default(), &mut buf);
        assert!(bindings.is_empty());
        assert_eq!(
            buf.content(),
            "<p>No results found for \"<strong>caT <x></strong>\".</p>"
        );
    }

    #[test]
    fn test_all_snippets_visible_when_under_limit() {
        let mut buf = HtmlBuffer::new();
        let bindings =
            render_results("cat", &[entry(&["s1", "s2"])], &SearchConfig::default(), &mut buf);
        assert!(bindings.is_empty());
        assert!(!buf.content().contains("more-snippets"));
        assert!(!buf.content().contains("button"));
        assert!(buf.content().contains("<p><a href=\"#animals\"><strong>Animals</strong></a></p>"));
        assert!(buf.content().contains("<p>s1</p><p>s2</p>"));
    }

    #[test]
    fn test_overflow_goes_behind_toggle() {
        let mut buf = HtmlBuffer::new();
        let bindings = render_results(
            "cat",
            &[entry(&["s1", "s2", "s3", "s4", "s5"])],
            &SearchConfig::default(),
            &mut buf,
        );
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].control_id, "toggle-snippets-0");
        assert_eq!(bindings[0].group_id, "more-snippets-0");
        assert_eq!(bindings[0].state, ToggleState::Collapsed);
        let html = buf.content();
        assert!(html.contains(
            "<div class=\"more-snippets\" id=\"more-snippets-0\" style=\"display:none;\"><p>s4</p><p>s5</p></div>"
        ));
        assert!(html.contains(
            "<button class=\"toggle-snippets\" id=\"toggle-snippets-0\">Show More</button>"
        ));
        // Visible snippets stay out of the hidden group.
        assert!(html.contains("<p>s3</p><div"));
    }

    #[test]
    fn test_toggle_alternates() {
        let mut binding = ToggleBinding {
            control_id: "toggle-snippets-0".to_string(),
            group_id: "more-snippets-0".to_string(),
            state: ToggleState::Collapsed,
        };
        assert_eq!(binding.label(), "Show More");
        assert!(binding.state.group_hidden());
        binding.activate();
        assert_eq!(binding.label(), "Show Less");
        assert!(!binding.state.group_hidden());
        binding.activate();
        assert_eq!(binding.label(), "Show More");
        assert!(binding.state.group_hidden());
    }

    #[test]
    fn test_rerender_is_byte_identical() {
        let entries = [entry(&["s1", "s2", "s3", "s4"])];
        let cfg = SearchConfig::default();
        let mut first = HtmlBuffer::new();
        let mut second = HtmlBuffer::new();
        render_results("cat", &entries, &cfg, &mut first);
        render_results("cat", &entries, &cfg, &mut second);
        assert_eq!(first.content(), second.content());
    }

    #[test]
    fn test_replace_content_discards_previous() {
        let mut buf = HtmlBuffer::new();
        render_results("cat", &[entry(&["s1"])], &SearchConfig::default(), &mut buf);
        render_no_term(&mut buf);
        assert_eq!(buf.content(), NO_TERM_MESSAGE);
    }
}
