use regex::RegexBuilder;

use crate::error::SearchError;
use crate::util::highlight::highlight;

/// Build one highlighted snippet per non-overlapping case-insensitive
/// match of `term` in `text`, each keeping up to `half_width` characters
/// of context on either side and trimmed of surrounding whitespace.
///
/// The term is a literal pattern (metacharacters are not escaped). An
/// empty term passes the whole text through as a single snippet; the
/// extractor never lets one reach here in the normal flow. No matches
/// means an empty vec, which drops the section from the results.
pub fn build_snippets(text: &str, term: &str, half_width: usize) -> Result<Vec<String>, SearchError> {
    if term.is_empty() {
        return Ok(vec![text.to_string()]);
    }
    let matcher = RegexBuilder::new(term)
        .case_insensitive(true)
        .build()
        .map_err(|e| SearchError::invalid_pattern(term, e))?;

    let mut snippets = Vec::new();
    for m in matcher.find_iter(text) {
        let start = back_chars(text, m.start(), half_width);
        let end = forward_chars(text, m.end(), half_width);
        snippets.push(highlight(text[start..end].trim(), term)?);
    }
    Ok(snippets)
}

fn back_chars(s: &str, mut idx: usize, n: usize) -> usize {
    for _ in 0..n {
        match s[..idx].chars().next_back() {
            Some(ch) => idx -= ch.len_utf8(),
            None => break,
        }
    }
    idx
}

fn forward_chars(s: &str, mut idx: usize, n: usize) -> usize {
    for _ in 0..n {
        match s[idx..].chars().next() {
            Some(ch) => idx += ch.len_utf8(),
            None => break,
        }
    }
    idx
}
