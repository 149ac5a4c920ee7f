//! IRIs split into namespace and local name.

use oxrdf::{IriParseError, NamedNode, NamedNodeRef};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An IRI naming an ontology element.
///
/// The IRI is split on its last `#` or `/` into a namespace (which keeps the separator)
/// and a local name. Equality, ordering and hashing only look at the full IRI:
/// the split and the optional display prefix are derived data.
/// ```
/// use oxontology::Iri;
///
/// let iri = Iri::new("http://example.org/onto#Patient")?;
/// assert_eq!(iri.namespace(), "http://example.org/onto#");
/// assert_eq!(iri.local_name(), Some("Patient"));
/// # Result::<_, oxrdf::IriParseError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Iri {
    node: NamedNode,
    split: usize,
    prefix: Option<String>,
}

impl Iri {
    /// Builds and validates an IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self, IriParseError> {
        Ok(Self::from_named_node(NamedNode::new(iri)?))
    }

    /// Builds an IRI without validating it.
    ///
    /// It is the caller's responsibility to ensure that `iri` is a valid IRI.
    #[inline]
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        Self::from_named_node(NamedNode::new_unchecked(iri))
    }

    fn from_named_node(node: NamedNode) -> Self {
        let split = node.as_str().rfind(['#', '/']).map_or(0, |i| i + 1);
        Self {
            node,
            split,
            prefix: None,
        }
    }

    /// Returns a copy of this IRI that carries the given display prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The full IRI.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.node.as_str()
    }

    /// The namespace part, up to and including the last `#` or `/`.
    ///
    /// Empty if the IRI has no separator.
    #[inline]
    pub fn namespace(&self) -> &str {
        &self.node.as_str()[..self.split]
    }

    /// The local name after the namespace, if any.
    #[inline]
    pub fn local_name(&self) -> Option<&str> {
        let local = &self.node.as_str()[self.split..];
        (!local.is_empty()).then_some(local)
    }

    /// The display prefix bound to this IRI, if one was attached.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns `prefix:local` if a prefix and a local name are both known.
    pub fn abbreviated(&self) -> Option<String> {
        Some(format!("{}:{}", self.prefix()?, self.local_name()?))
    }

    #[inline]
    pub fn as_named_node(&self) -> NamedNodeRef<'_> {
        self.node.as_ref()
    }

    #[inline]
    pub fn into_named_node(self) -> NamedNode {
        self.node
    }
}

impl PartialEq for Iri {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for Iri {}

impl Hash for Iri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl PartialOrd for Iri {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iri {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.node.cmp(&other.node)
    }
}

impl PartialEq<str> for Iri {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Iri {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl FromStr for Iri {
    type Err = IriParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<NamedNode> for Iri {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::from_named_node(node)
    }
}

impl From<NamedNodeRef<'_>> for Iri {
    #[inline]
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self::from_named_node(node.into_owned())
    }
}

impl From<Iri> for NamedNode {
    #[inline]
    fn from(iri: Iri) -> Self {
        iri.node
    }
}

impl AsRef<str> for Iri {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Iri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Iri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let iri = String::deserialize(deserializer)?;
        Self::new(iri).map_err(serde::de::Error::custom)
    }
}
