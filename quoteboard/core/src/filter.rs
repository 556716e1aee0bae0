//! Filter Derivation
//!
//! The filtered list is derived state: it is recomputed from the quote
//! list and the search term after every mutation of either input, rather
//! than tracked through any reactive machinery. The function here is pure
//! and has no failure mode - an empty result is a valid result.

/// Filter quotes by case-insensitive substring containment.
///
/// Order-preserving: matching quotes appear in their original order.
/// An empty `term` matches everything, so the result equals the input.
pub fn filter_quotes(quotes: &[String], term: &str) -> Vec<String> {
    if term.is_empty() {
        return quotes.to_vec();
    }

    let needle = term.to_lowercase();
    quotes
        .iter()
        .filter(|quote| quote.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_term_returns_everything() {
        let quotes = list(&["one", "two"]);
        assert_eq!(filter_quotes(&quotes, ""), quotes);
    }

    #[test]
    fn match_is_case_insensitive() {
        let quotes = list(&["A", "BB", "CCC"]);
        assert_eq!(filter_quotes(&quotes, "b"), list(&["BB"]));
    }

    #[test]
    fn order_is_preserved() {
        let quotes = list(&["water", "fire", "waterfall"]);
        assert_eq!(filter_quotes(&quotes, "water"), list(&["water", "waterfall"]));
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let quotes = list(&["alpha", "beta"]);
        assert!(filter_quotes(&quotes, "zzz").is_empty());
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(filter_quotes(&[], "anything").is_empty());
    }
}
