//! Keyword filter over the description column.

use crate::row::Row;

/// A tokenized search query.
///
/// Tokens are the whitespace-separated words of the input, lowercased.
/// A row matches when every token occurs somewhere in its search column;
/// tokens are plain substrings, not whole words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    tokens: Vec<String>,
}

impl KeywordQuery {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self { tokens: input.split_whitespace().map(str::to_lowercase).collect() }
    }

    /// No tokens: blank or whitespace-only input. Callers show the idle
    /// state instead of filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when every token is a substring of `haystack`, which must
    /// already be lowercase.
    #[must_use]
    pub fn matches_text(&self, haystack: &str) -> bool {
        self.tokens.iter().all(|token| haystack.contains(token.as_str()))
    }

    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        self.matches_text(row.search_text())
    }

    /// Matching rows in sheet order.
    pub fn filter<'a>(&'a self, rows: &'a [Row]) -> impl Iterator<Item = &'a Row> + 'a {
        rows.iter().filter(move |row| self.matches(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(description: &str) -> Row {
        Row::new("1".to_owned(), description.to_owned(), String::new(), String::new(), None)
    }

    #[test]
    fn tokenizes_and_lowercases() {
        let query = KeywordQuery::parse("  Motor\tPARTIDA \n");
        assert_eq!(query.tokens(), &["motor".to_owned(), "partida".to_owned()]);
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        assert!(KeywordQuery::parse("").is_empty());
        assert!(KeywordQuery::parse("   \t ").is_empty());
        assert!(!KeywordQuery::parse("a").is_empty());
    }

    #[test]
    fn requires_all_tokens() {
        let query = KeywordQuery::parse("motor partida");
        assert!(query.matches(&row("motor de partida 12v")));
        assert!(!query.matches(&row("motor de arranque")));
    }

    #[test]
    fn matches_substrings_not_words() {
        let query = KeywordQuery::parse("part 12");
        assert!(query.matches(&row("Motor de PARTIDA 12V")));
    }

    #[test]
    fn matching_is_case_insensitive_for_non_ascii() {
        let query = KeywordQuery::parse("ÉMBOLO");
        assert!(query.matches(&row("émbolo de freno")));
    }

    #[test]
    fn filter_preserves_sheet_order() {
        let rows =
            vec![row("filtro aire"), row("bomba agua"), row("filtro aceite"), row("FILTRO")];
        let query = KeywordQuery::parse("filtro");
        let found: Vec<_> = query.filter(&rows).map(|r| r.description.as_str()).collect();
        assert_eq!(found, vec!["filtro aire", "filtro aceite", "FILTRO"]);
    }

    #[test]
    fn every_result_contains_every_token() {
        let rows = vec![
            row("motor de partida 12v"),
            row("motor de arranque"),
            row("partidor motor"),
            row(""),
        ];
        for input in ["motor", "motor partida", "de", "12v motor", "zzz"] {
            let query = KeywordQuery::parse(input);
            for found in query.filter(&rows) {
                for token in query.tokens() {
                    assert!(found.search_text().contains(token.as_str()));
                }
            }
        }
    }
}
