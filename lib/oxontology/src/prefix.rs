//! Prefix to namespace mappings.

use crate::error::OntologyError;
use crate::iri::Iri;
use std::collections::BTreeMap;

/// Prefix declarations of an ontology.
///
/// The mapping is kept one-to-one: binding a prefix drops any previous binding of the
/// same prefix and any other prefix bound to the same namespace.
/// ```
/// use oxontology::PrefixMap;
///
/// let mut prefixes = PrefixMap::default();
/// prefixes.insert("ex", "http://example.org/");
/// prefixes.insert("ex2", "http://example.org/");
/// assert_eq!(prefixes.namespace("ex"), None);
/// assert_eq!(prefixes.prefix("http://example.org/"), Some("ex2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMap {
    namespaces: BTreeMap<String, String>,
    prefixes: BTreeMap<String, String>,
}

impl PrefixMap {
    /// Binds `prefix` to `namespace` and returns the namespace previously bound to `prefix`.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Option<String> {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if let Some(old_prefix) = self.prefixes.remove(&namespace) {
            self.namespaces.remove(&old_prefix);
        }
        let old_namespace = self.namespaces.insert(prefix.clone(), namespace.clone());
        if let Some(old_namespace) = &old_namespace {
            self.prefixes.remove(old_namespace);
        }
        self.prefixes.insert(namespace, prefix);
        old_namespace
    }

    /// Removes the binding of `prefix` and returns its namespace.
    pub fn remove(&mut self, prefix: &str) -> Option<String> {
        let namespace = self.namespaces.remove(prefix)?;
        self.prefixes.remove(&namespace);
        Some(namespace)
    }

    /// The namespace bound to `prefix`.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.namespaces.get(prefix).map(String::as_str)
    }

    /// The prefix bound to `namespace`.
    pub fn prefix(&self, namespace: &str) -> Option<&str> {
        self.prefixes.get(namespace).map(String::as_str)
    }

    /// The `(prefix, namespace)` pairs, ordered by prefix.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.namespaces
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Writes `iri` as `prefix:local` if its namespace is bound.
    pub fn abbreviate(&self, iri: &Iri) -> Option<String> {
        Some(format!(
            "{}:{}",
            self.prefix(iri.namespace())?,
            iri.local_name()?
        ))
    }

    /// Returns `iri` carrying the prefix bound to its namespace, if any.
    pub fn attach_prefix(&self, iri: Iri) -> Iri {
        match self.prefix(iri.namespace()) {
            Some(prefix) => iri.with_prefix(prefix),
            None => iri,
        }
    }

    /// Resolves a `prefix:local` name.
    pub fn expand(&self, prefixed_name: &str) -> Result<Iri, OntologyError> {
        let (prefix, local) = prefixed_name.split_once(':').unwrap_or(("", prefixed_name));
        let namespace = self
            .namespace(prefix)
            .ok_or_else(|| OntologyError::UnknownPrefix {
                prefix: prefix.to_owned(),
            })?;
        Ok(Iri::new(format!("{namespace}{local}"))?.with_prefix(prefix))
    }
}

impl<P: Into<String>, N: Into<String>> Extend<(P, N)> for PrefixMap {
    fn extend<I: IntoIterator<Item = (P, N)>>(&mut self, iter: I) {
        for (prefix, namespace) in iter {
            self.insert(prefix, namespace);
        }
    }
}

impl<P: Into<String>, N: Into<String>> FromIterator<(P, N)> for PrefixMap {
    fn from_iter<I: IntoIterator<Item = (P, N)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_a_prefix_drops_the_old_namespace() {
        let mut map = PrefixMap::default();
        assert_eq!(map.insert("ex", "http://example.org/a#"), None);
        assert_eq!(
            map.insert("ex", "http://example.org/b#").as_deref(),
            Some("http://example.org/a#")
        );
        assert_eq!(map.prefix("http://example.org/a#"), None);
        assert_eq!(map.prefix("http://example.org/b#"), Some("ex"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn rebinding_a_namespace_drops_the_old_prefix() {
        let mut map: PrefixMap = [("a", "http://example.org/")].into_iter().collect();
        map.insert("b", "http://example.org/");
        assert_eq!(map.namespace("a"), None);
        assert_eq!(map.namespace("b"), Some("http://example.org/"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn abbreviate_and_expand() -> Result<(), OntologyError> {
        let map: PrefixMap = [("ex", "http://example.org/onto#")].into_iter().collect();
        let iri = map.expand("ex:Patient")?;
        assert_eq!(iri.as_str(), "http://example.org/onto#Patient");
        assert_eq!(iri.prefix(), Some("ex"));
        assert_eq!(map.abbreviate(&iri).as_deref(), Some("ex:Patient"));
        assert!(matches!(
            map.expand("foo:Bar"),
            Err(OntologyError::UnknownPrefix { .. })
        ));
        Ok(())
    }

    #[test]
    fn remove() {
        let mut map: PrefixMap = [("ex", "http://example.org/")].into_iter().collect();
        assert_eq!(map.remove("ex").as_deref(), Some("http://example.org/"));
        assert!(map.is_empty());
        assert_eq!(map.prefix("http://example.org/"), None);
    }
}
