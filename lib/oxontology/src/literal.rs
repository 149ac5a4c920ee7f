//! Literal values used by data property assertions and annotations.

use crate::iri::Iri;
use oxrdf::vocab::{rdf, xsd};
use std::fmt;

/// A literal: a lexical form with either a datatype, a language tag or neither.
///
/// Both components are optional and compared by presence and by value:
/// `"42"` and `"42"^^xsd:integer` are different literals.
/// The constructors never set both a datatype and a language tag.
/// ```
/// use oxontology::{Iri, Literal};
///
/// let age = Literal::new_typed("42", Iri::new_unchecked("http://www.w3.org/2001/XMLSchema#integer"));
/// assert_eq!(age.lexical_form(), "42");
/// assert_ne!(age, Literal::new_plain("42"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    lexical_form: String,
    datatype: Option<Iri>,
    language_tag: Option<String>,
}

impl Literal {
    /// Builds a literal with neither datatype nor language tag.
    #[inline]
    pub fn new_plain(lexical_form: impl Into<String>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: None,
            language_tag: None,
        }
    }

    /// Builds a literal with an explicit datatype.
    #[inline]
    pub fn new_typed(lexical_form: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: Some(datatype.into()),
            language_tag: None,
        }
    }

    /// Builds a language-tagged literal.
    #[inline]
    pub fn new_language_tagged(
        lexical_form: impl Into<String>,
        language_tag: impl Into<String>,
    ) -> Self {
        Self {
            lexical_form: lexical_form.into(),
            datatype: None,
            language_tag: Some(language_tag.into()),
        }
    }

    #[inline]
    pub fn lexical_form(&self) -> &str {
        &self.lexical_form
    }

    #[inline]
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    #[inline]
    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    /// Checks that the literal has neither a datatype nor a language tag.
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.datatype.is_none() && self.language_tag.is_none()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical_form.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")?;
        if let Some(language_tag) = &self.language_tag {
            write!(f, "@{language_tag}")
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^{datatype}")
        } else {
            Ok(())
        }
    }
}

impl From<&str> for Literal {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new_plain(value)
    }
}

impl From<String> for Literal {
    #[inline]
    fn from(value: String) -> Self {
        Self::new_plain(value)
    }
}

impl From<bool> for Literal {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new_typed(value.to_string(), xsd::BOOLEAN)
    }
}

impl From<i64> for Literal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::new_typed(value.to_string(), xsd::INTEGER)
    }
}

impl From<i32> for Literal {
    #[inline]
    fn from(value: i32) -> Self {
        Self::new_typed(value.to_string(), xsd::INTEGER)
    }
}

impl From<f64> for Literal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new_typed(value.to_string(), xsd::DOUBLE)
    }
}

/// RDF literals always carry a datatype. `xsd:string` and `rdf:langString` are
/// the implicit ones and are dropped on conversion.
impl From<oxrdf::Literal> for Literal {
    fn from(literal: oxrdf::Literal) -> Self {
        if let Some(language) = literal.language() {
            return Self::new_language_tagged(literal.value(), language);
        }
        let datatype = literal.datatype();
        if datatype == xsd::STRING || datatype == rdf::LANG_STRING {
            Self::new_plain(literal.value())
        } else {
            Self::new_typed(literal.value(), datatype)
        }
    }
}

impl From<Literal> for oxrdf::Literal {
    fn from(literal: Literal) -> Self {
        match (literal.datatype, literal.language_tag) {
            (_, Some(language)) => {
                Self::new_language_tagged_literal_unchecked(literal.lexical_form, language)
            }
            (Some(datatype), None) => {
                Self::new_typed_literal(literal.lexical_form, datatype.into_named_node())
            }
            (None, None) => Self::new_simple_literal(literal.lexical_form),
        }
    }
}
