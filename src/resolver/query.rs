//! Per-request search query

use std::collections::HashSet;

use super::normalize::normalize;

/// A free-text app name to resolve, with the derived forms every signal needs
///
/// Built once per request so scoring a large catalog does not re-normalize the
/// query for every entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    raw_text: String,
    lowercase: String,
    dashed: String,
    normalized: String,
    compact: String,
}

impl SearchQuery {
    /// Create a query from raw user input (surrounding whitespace is ignored)
    pub fn new(raw_text: &str) -> Self {
        let raw_text = raw_text.trim().to_string();
        let lowercase = raw_text.to_lowercase();
        let dashed = lowercase.replace(' ', "-");
        let normalized = normalize(&raw_text);
        let compact = normalized.replace(' ', "");

        Self {
            raw_text,
            lowercase,
            dashed,
            normalized,
            compact,
        }
    }

    /// The text as the user wrote it
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Lower-cased raw text
    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }

    /// Lower-cased raw text with spaces turned into hyphens
    pub fn dashed(&self) -> &str {
        &self.dashed
    }

    /// [`normalize`]d text
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Normalized text without spaces
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Distinct words of the normalized text
    pub fn words(&self) -> HashSet<&str> {
        self.normalized.split_whitespace().collect()
    }

    /// True when nothing comparable is left after normalization
    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_forms() {
        let query = SearchQuery::new("  Visual Studio Code App ");
        assert_eq!(query.raw_text(), "Visual Studio Code App");
        assert_eq!(query.lowercase(), "visual studio code app");
        assert_eq!(query.dashed(), "visual-studio-code-app");
        assert_eq!(query.normalized(), "visual studio code");
        assert_eq!(query.compact(), "visualstudiocode");
        assert_eq!(query.words().len(), 3);
        assert!(!query.is_blank());
    }

    #[test]
    fn test_blank_query() {
        assert!(SearchQuery::new("").is_blank());
        assert!(SearchQuery::new("   ").is_blank());
        assert!(SearchQuery::new("App").is_blank());
        assert!(SearchQuery::new("").words().is_empty());
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let query = SearchQuery::new("foo foo bar");
        assert_eq!(query.words().len(), 2);
    }
}
