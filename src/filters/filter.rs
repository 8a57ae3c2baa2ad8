//! Compiled event filters (`Filter`) and their source specifiers
//! (`FilterSpec`).
//!
//! The original specifier is kept alongside the compiled regex: listener
//! dedup compares specifiers structurally, never the compiled text, so two
//! semantically different inputs can never collide through a shared canonical
//! form.

use regex::Regex;

use crate::error::EventError;

/// Source form of a filter, as given at subscribe/open time.
///
/// ## Example
/// ```
/// use hubcast::FilterSpec;
///
/// let lit: FilterSpec = "update insert".into();
/// assert_eq!(lit, FilterSpec::Literals("update insert".into()));
/// ```
#[derive(Debug, Clone)]
pub enum FilterSpec {
    /// Space-separated literal alternatives. Tokens are regex-escaped, so
    /// characters with special meaning are matched literally.
    Literals(String),
    /// A raw regular expression, used verbatim (anchoring is the caller's
    /// business). Compilation may fail with [`EventError::BadFilter`].
    Pattern(String),
}

impl PartialEq for FilterSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FilterSpec::Literals(a), FilterSpec::Literals(b)) => a == b,
            (FilterSpec::Pattern(a), FilterSpec::Pattern(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for FilterSpec {}

impl From<&str> for FilterSpec {
    fn from(s: &str) -> Self {
        FilterSpec::Literals(s.to_string())
    }
}

impl From<String> for FilterSpec {
    fn from(s: String) -> Self {
        FilterSpec::Literals(s)
    }
}

/// A compiled filter: the original [`FilterSpec`] plus its regex form.
#[derive(Debug, Clone)]
pub struct Filter {
    spec: FilterSpec,
    re: Regex,
}

impl Filter {
    /// Compiles a prefix filter for action names.
    ///
    /// Literal tokens match themselves and their dotted children:
    /// `update` matches `update` and `update.doc`, but not `updated` and not
    /// `insert`.
    ///
    /// ## Example
    /// ```
    /// use hubcast::Filter;
    ///
    /// let f = Filter::prefix("update insert".into()).unwrap();
    /// assert!(f.matches("update"));
    /// assert!(f.matches("update.doc"));
    /// assert!(f.matches("insert"));
    /// assert!(!f.matches("updated"));
    /// ```
    pub fn prefix(spec: FilterSpec) -> Result<Self, EventError> {
        Self::compile(spec, |alts| format!("^({alts})(?:\\.|$)"))
    }

    /// Compiles an exact filter for path names.
    ///
    /// Literal tokens match only their complete identity: `doc` matches
    /// `doc`, never `doc.child`.
    pub fn exact(spec: FilterSpec) -> Result<Self, EventError> {
        Self::compile(spec, |alts| format!("^({alts})$"))
    }

    fn compile(spec: FilterSpec, wrap: impl FnOnce(&str) -> String) -> Result<Self, EventError> {
        let re = match &spec {
            FilterSpec::Literals(tokens) => {
                let alts = tokens
                    .split(' ')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = wrap(&alts);
                Regex::new(&pattern).map_err(|source| EventError::BadFilter {
                    spec: tokens.clone(),
                    source,
                })?
            }
            FilterSpec::Pattern(raw) => {
                Regex::new(raw).map_err(|source| EventError::BadFilter {
                    spec: raw.clone(),
                    source,
                })?
            }
        };
        Ok(Self { spec, re })
    }

    /// Tests a candidate string against the compiled pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.re.is_match(candidate)
    }

    /// Tests an optional field. An absent field never satisfies a present
    /// filter.
    pub(crate) fn matches_opt(&self, candidate: Option<&str>) -> bool {
        candidate.is_some_and(|c| self.matches(c))
    }

    /// The original specifier this filter was compiled from.
    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches_literal_and_children() {
        let f = Filter::prefix("update".into()).unwrap();
        assert!(f.matches("update"));
        assert!(f.matches("update.doc"));
        assert!(f.matches("update.doc.title"));
    }

    #[test]
    fn test_prefix_rejects_sibling_spellings() {
        let f = Filter::prefix("update".into()).unwrap();
        assert!(!f.matches("updated"));
        assert!(!f.matches("up"));
        assert!(!f.matches("insert"));
    }

    #[test]
    fn test_prefix_multiple_tokens() {
        let f = Filter::prefix("update insert".into()).unwrap();
        assert!(f.matches("update.doc"));
        assert!(f.matches("insert"));
        assert!(!f.matches("delete"));
    }

    #[test]
    fn test_prefix_dotted_token() {
        let f = Filter::prefix("update.doc".into()).unwrap();
        assert!(f.matches("update.doc"));
        assert!(f.matches("update.doc.title"));
        assert!(!f.matches("update"));
    }

    #[test]
    fn test_exact_whole_string_only() {
        let f = Filter::exact("doc".into()).unwrap();
        assert!(f.matches("doc"));
        assert!(!f.matches("doc.child"));
        assert!(!f.matches("mydoc"));
    }

    #[test]
    fn test_exact_multiple_tokens() {
        let f = Filter::exact("doc doc.a".into()).unwrap();
        assert!(f.matches("doc"));
        assert!(f.matches("doc.a"));
        assert!(!f.matches("doc.b"));
    }

    #[test]
    fn test_literals_are_escaped() {
        let f = Filter::exact("a+b".into()).unwrap();
        assert!(f.matches("a+b"));
        assert!(!f.matches("aab"));
    }

    #[test]
    fn test_raw_pattern_used_verbatim() {
        let f = Filter::prefix(FilterSpec::Pattern("^up".into())).unwrap();
        assert!(f.matches("update"));
        assert!(f.matches("upstream"));
    }

    #[test]
    fn test_bad_pattern_fails_fast() {
        let err = Filter::prefix(FilterSpec::Pattern("(unclosed".into())).unwrap_err();
        assert_eq!(err.as_label(), "bad_filter");
    }

    #[test]
    fn test_spec_equality_is_structural() {
        let a = Filter::prefix("update".into()).unwrap();
        let b = Filter::prefix("update".into()).unwrap();
        assert_eq!(a.spec(), b.spec());
        assert_ne!(
            a.spec(),
            &FilterSpec::Pattern("update".into()),
            "literals and raw patterns never compare equal"
        );
    }

    #[test]
    fn test_absent_field_fails_present_filter() {
        let f = Filter::exact("doc".into()).unwrap();
        assert!(!f.matches_opt(None));
        assert!(f.matches_opt(Some("doc")));
    }
}
