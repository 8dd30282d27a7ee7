use crate::core::collection::{Collection, Element, Elements};
use crate::core::query::{literal, select};
use crate::domain::error::{IntrospectError, IntrospectResult};
use tracing::debug;

/// Builds the search XPath for a key and a pattern
pub type SearchPredicate<'a> = fn(&Collection<'a>, &str, &str) -> String;

impl<'a> Collection<'a> {
    fn key_or_primary<'k>(&self, key: &'k str) -> &'k str {
        if key.is_empty() {
            self.desc().primary_field
        } else {
            key
        }
    }

    /// Elements whose `key` field contains `pattern`. An empty key means the
    /// primary field.
    pub fn search_xpath_fuzzy(&self, key: &str, pattern: &str) -> String {
        format!(
            "{}/*/{}[contains(text(),{})]/..",
            self.desc().base_xpath,
            self.key_or_primary(key),
            literal(pattern)
        )
    }

    /// Elements whose `key` field equals `pattern`. An empty key means the
    /// primary field.
    pub fn search_xpath_strict(&self, key: &str, pattern: &str) -> String {
        format!(
            "{}/*/{}[text()={}]/..",
            self.desc().base_xpath,
            self.key_or_primary(key),
            literal(pattern)
        )
    }

    pub fn search(
        &self,
        predicate: SearchPredicate<'a>,
        key: &str,
        pattern: &str,
    ) -> IntrospectResult<Elements<'a>> {
        let expression = predicate(self, key, pattern);
        debug!(%expression, "searching collection");
        let desc_elt = &self.desc().desc_elt;
        Ok(select(self.root(), &expression)?
            .into_iter()
            .map(|node| Element::new(node, desc_elt))
            .collect())
    }

    pub fn search_fuzzy(&self, pattern: &str) -> IntrospectResult<Elements<'a>> {
        self.search(Self::search_xpath_fuzzy, "", pattern)
    }

    pub fn search_strict(&self, pattern: &str) -> IntrospectResult<Elements<'a>> {
        self.search(Self::search_xpath_strict, "", pattern)
    }

    pub fn search_strict_unique_by_key(
        &self,
        key: &str,
        pattern: &str,
    ) -> IntrospectResult<Element<'a>> {
        unique(self.search(Self::search_xpath_strict, key, pattern)?, pattern)
    }

    pub fn search_fuzzy_unique(&self, pattern: &str) -> IntrospectResult<Element<'a>> {
        unique(self.search_fuzzy(pattern)?, pattern)
    }

    pub fn search_strict_unique(&self, pattern: &str) -> IntrospectResult<Element<'a>> {
        unique(self.search_strict(pattern)?, pattern)
    }
}

fn unique<'a>(elements: Elements<'a>, pattern: &str) -> IntrospectResult<Element<'a>> {
    match elements.as_slice() {
        [element] => Ok(*element),
        _ => Err(IntrospectError::NotUnique {
            pattern: pattern.to_string(),
            count: elements.len(),
        }),
    }
}
