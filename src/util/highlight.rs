use regex::RegexBuilder;

use crate::error::SearchError;

/// Wrap every case-insensitive occurrence of `term` in `<mark>` tags,
/// keeping the matched text's original casing. An empty term returns
/// the text unchanged.
///
/// The term is used as a literal pattern, not escaped; pre-existing
/// markup in `text` is not escaped either.
pub fn highlight(text: &str, term: &str) -> Result<String, SearchError> {
    if term.is_empty() {
        return Ok(text.to_string());
    }
    let re = RegexBuilder::new(&format!("({})", term))
        .case_insensitive(true)
        .build()
        .map_err(|e| SearchError::invalid_pattern(term, e))?;
    Ok(re.replace_all(text, "<mark>${1}</mark>").into_owned())
}
