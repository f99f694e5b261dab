use scraper::{ElementRef, Html};

/// Minimal view of a page element, just enough for the collector:
/// tag name, attribute lookup, directly-owned text, and element
/// children. Text nodes are not modeled as nodes — a parent exposes
/// them through `own_text`.
pub trait PageNode: Sized {
    fn tag(&self) -> &str;
    fn attr(&self, name: &str) -> Option<&str>;
    /// Text owned directly by this element, excluding descendants.
    fn own_text(&self) -> String;
    /// Element children only, in document order.
    fn children(&self) -> Vec<Self>;

    fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

/// A parsed HTML page. Owns the tree; hand `root()` to the collector.
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn parse(html: &str) -> HtmlPage {
        HtmlPage { document: Html::parse_document(html) }
    }

    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.document.root_element())
    }
}

/// `PageNode` over a `scraper` element.
#[derive(Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> PageNode for HtmlNode<'a> {
    fn tag(&self) -> &str {
        self.0.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn own_text(&self) -> String {
        let mut out = String::new();
        for child in self.0.children() {
            if let Some(text) = child.value().as_text() {
                out.push_str(text);
            }
        }
        out
    }

    fn children(&self) -> Vec<HtmlNode<'a>> {
        self.0.children().filter_map(ElementRef::wrap).map(HtmlNode).collect()
    }
}
