// ABOUTME: Minimal query-string splitter used by the classifier.
// ABOUTME: Values are returned raw (no percent-decoding) and the first binding of a key wins.

/// Key/value pairs of a URL query component, in input order.
///
/// The query is split on `&`, then each pair on its first `=`. A pair with
/// no `=` is kept as a key with an empty value. Nothing is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> QueryParams<'a> {
    /// Parses a query string given without its leading `?`.
    pub fn parse(query: &'a str) -> Self {
        let pairs = query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .collect();
        Self { pairs }
    }

    /// Returns the first value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Returns the first value bound to `key` in `query`.
pub fn extract_query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    QueryParams::parse(query).get(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic() {
        assert_eq!(extract_query_param("v=abc&list=PL1", "v"), Some("abc"));
        assert_eq!(extract_query_param("v=abc&list=PL1", "list"), Some("PL1"));
        assert_eq!(extract_query_param("v=abc&list=PL1", "t"), None);
    }

    #[test]
    fn test_first_binding_wins() {
        assert_eq!(extract_query_param("v=first&v=second", "v"), Some("first"));
    }

    #[test]
    fn test_pair_without_equals_has_empty_value() {
        let params = QueryParams::parse("flag&v=abc");
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("v"), Some("abc"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_splits_on_first_equals_only() {
        assert_eq!(extract_query_param("next=a=b", "next"), Some("a=b"));
    }

    #[test]
    fn test_values_are_not_decoded() {
        assert_eq!(extract_query_param("q=a%20b+c", "q"), Some("a%20b+c"));
    }

    #[test]
    fn test_empty_query() {
        let params = QueryParams::parse("");
        assert_eq!(params.get(""), Some(""));
        assert_eq!(params.get("v"), None);
    }
}
