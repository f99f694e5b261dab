use url::Url;

/// Read the search term from the page address: the first `q` query
/// parameter, percent-decoded, lower-cased and trimmed. An absent
/// parameter, a blank value, or an unparseable address all mean "no
/// term" — none of these are failures.
pub fn term_from_address(address: &str) -> Option<String> {
    let url = Url::parse(address).ok()?;
    let raw = url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned())?;
    let term = raw.to_lowercase().trim().to_string();
    if term.is_empty() { None } else { Some(term) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_normalized() {
        let t = term_from_address("https://example.com/search?q=%20Rust%20Book%20");
        assert_eq!(t.as_deref(), Some("rust book"));
    }

    #[test]
    fn test_first_q_wins() {
        let t = term_from_address("https://example.com/?q=first&q=second");
        assert_eq!(t.as_deref(), Some("first"));
    }

    #[test]
    fn test_no_term_cases() {
        let cases = [
            "https://example.com/",
            "https://example.com/?page=2",
            "https://example.com/?q=",
            "https://example.com/?q=%20%20",
            "not a url at all",
        ];
        for address in cases {
            assert_eq!(term_from_address(address), None, "{}", address);
        }
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let t = term_from_address("https://example.com/?q=cat+food");
        assert_eq!(t.as_deref(), Some("cat food"));
    }
}
