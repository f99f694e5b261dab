use crate::dom::PageNode;
use crate::models::SectionRecord;

/// Flatten every `section` element under `root` (nested ones included)
/// into a record, in document order.
pub fn collect_sections<N: PageNode>(root: &N) -> Vec<SectionRecord> {
    let mut records = Vec::new();
    visit_descendants(root, &mut |node| {
        if node.tag() == "section" {
            records.push(section_record(node));
        }
    });
    records
}

fn section_record<N: PageNode>(section: &N) -> SectionRecord {
    let id = section.attr("id").unwrap_or("");
    let title = match find_first(section, "h2") {
        Some(heading) => full_text(&heading),
        None => id.to_string(),
    };

    // Only true leaves contribute text; anything directly owned by an
    // element that still has element children is skipped.
    let mut parts: Vec<String> = Vec::new();
    visit_descendants(section, &mut |node| {
        if !node.has_children() {
            let text = normalize_ws(&node.own_text());
            if !text.is_empty() {
                parts.push(text);
            }
        }
    });

    SectionRecord { title, text: parts.join(" "), locator: format!("#{}", id) }
}

fn visit_descendants<N: PageNode, F: FnMut(&N)>(node: &N, f: &mut F) {
    for child in node.children() {
        f(&child);
        visit_descendants(&child, f);
    }
}

fn find_first<N: PageNode>(node: &N, tag: &str) -> Option<N> {
    for child in node.children() {
        if child.tag() == tag {
            return Some(child);
        }
        if let Some(found) = find_first(&child, tag) {
            return Some(found);
        }
    }
    None
}

fn full_text<N: PageNode>(node: &N) -> String {
    let mut out = node.own_text();
    for child in node.children() {
        out.push_str(&full_text(&child));
    }
    normalize_ws(&out)
}

fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for ch in s.chars() {
        let is_space = ch.is_whitespace();
        if is_space {
            if !last_space { out.push(' '); }
        } else {
            out.push(ch);
        }
        last_space = is_space;
    }
    out.trim().to_string()
}
