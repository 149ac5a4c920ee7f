//! OWL 2 entities (classes, datatypes, properties, individuals).

use crate::iri::Iri;
use oxrdf::{BlankNode, BlankNodeIdParseError, NamedNode};
use std::cmp::Ordering;
use std::fmt;

macro_rules! entity {
    ($(#[$attr:meta])* $name:ident, $entity_type:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(Iri);

        impl $name {
            #[inline]
            pub fn new(iri: impl Into<Iri>) -> Self {
                Self(iri.into())
            }

            /// Builds the entity from an IRI string, validating it.
            #[inline]
            pub fn from_iri(iri: impl Into<String>) -> Result<Self, oxrdf::IriParseError> {
                Ok(Self(Iri::new(iri)?))
            }

            #[inline]
            pub fn iri(&self) -> &Iri {
                &self.0
            }

            #[inline]
            pub fn into_iri(self) -> Iri {
                self.0
            }

            #[inline]
            pub fn entity_type(&self) -> EntityType {
                EntityType::$entity_type
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Iri> for $name {
            #[inline]
            fn from(iri: Iri) -> Self {
                Self(iri)
            }
        }

        impl From<NamedNode> for $name {
            #[inline]
            fn from(node: NamedNode) -> Self {
                Self(node.into())
            }
        }

        impl From<$name> for Iri {
            #[inline]
            fn from(entity: $name) -> Self {
                entity.0
            }
        }

        impl From<$name> for Entity {
            #[inline]
            fn from(entity: $name) -> Self {
                Self::$entity_type(entity)
            }
        }

        impl AsRef<Iri> for $name {
            #[inline]
            fn as_ref(&self) -> &Iri {
                &self.0
            }
        }
    };
}

entity!(
    /// An OWL class (`owl:Class`): a set of individuals.
    Class,
    Class
);
entity!(
    /// A datatype such as `xsd:integer`.
    Datatype,
    Datatype
);
entity!(
    /// An object property (`owl:ObjectProperty`) relating individuals to individuals.
    ObjectProperty,
    ObjectProperty
);
entity!(
    /// A data property (`owl:DatatypeProperty`) relating individuals to literals.
    DataProperty,
    DataProperty
);
entity!(
    /// An annotation property (`owl:AnnotationProperty`). Carries metadata only.
    AnnotationProperty,
    AnnotationProperty
);
entity!(
    /// A named individual (`owl:NamedIndividual`).
    NamedIndividual,
    NamedIndividual
);

/// The kind of an [`Entity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityType {
    Class,
    Datatype,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl EntityType {
    /// The functional-syntax keyword of this entity kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Datatype => "Datatype",
            Self::ObjectProperty => "ObjectProperty",
            Self::DataProperty => "DataProperty",
            Self::AnnotationProperty => "AnnotationProperty",
            Self::NamedIndividual => "NamedIndividual",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any of the six IRI-named entity kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Class(Class),
    Datatype(Datatype),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    NamedIndividual(NamedIndividual),
}

impl Entity {
    /// Builds an entity of the given kind.
    pub fn new(entity_type: EntityType, iri: impl Into<Iri>) -> Self {
        let iri = iri.into();
        match entity_type {
            EntityType::Class => Self::Class(Class(iri)),
            EntityType::Datatype => Self::Datatype(Datatype(iri)),
            EntityType::ObjectProperty => Self::ObjectProperty(ObjectProperty(iri)),
            EntityType::DataProperty => Self::DataProperty(DataProperty(iri)),
            EntityType::AnnotationProperty => Self::AnnotationProperty(AnnotationProperty(iri)),
            EntityType::NamedIndividual => Self::NamedIndividual(NamedIndividual(iri)),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Class(_) => EntityType::Class,
            Self::Datatype(_) => EntityType::Datatype,
            Self::ObjectProperty(_) => EntityType::ObjectProperty,
            Self::DataProperty(_) => EntityType::DataProperty,
            Self::AnnotationProperty(_) => EntityType::AnnotationProperty,
            Self::NamedIndividual(_) => EntityType::NamedIndividual,
        }
    }

    pub fn iri(&self) -> &Iri {
        match self {
            Self::Class(e) => e.iri(),
            Self::Datatype(e) => e.iri(),
            Self::ObjectProperty(e) => e.iri(),
            Self::DataProperty(e) => e.iri(),
            Self::AnnotationProperty(e) => e.iri(),
            Self::NamedIndividual(e) => e.iri(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.entity_type(), self.iri())
    }
}

/// An anonymous individual, identified by a blank node id.
///
/// Two anonymous individuals are the same only if their node ids are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnonymousIndividual(BlankNode);

impl AnonymousIndividual {
    /// Builds an anonymous individual from a node id, validating it.
    pub fn new(id: impl Into<String>) -> Result<Self, BlankNodeIdParseError> {
        Ok(Self(BlankNode::new(id)?))
    }

    /// Builds an anonymous individual with a freshly generated node id.
    pub fn fresh() -> Self {
        Self(BlankNode::default())
    }

    #[inline]
    pub fn node_id(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn as_blank_node(&self) -> &BlankNode {
        &self.0
    }
}

impl PartialOrd for AnonymousIndividual {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnonymousIndividual {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.node_id().cmp(other.node_id())
    }
}

impl fmt::Display for AnonymousIndividual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<BlankNode> for AnonymousIndividual {
    #[inline]
    fn from(node: BlankNode) -> Self {
        Self(node)
    }
}

impl From<AnonymousIndividual> for BlankNode {
    #[inline]
    fn from(individual: AnonymousIndividual) -> Self {
        individual.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AnonymousIndividual {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.node_id())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AnonymousIndividual {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Self::new(id).map_err(serde::de::Error::custom)
    }
}

/// An OWL individual, named or anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Individual {
    Named(NamedIndividual),
    Anonymous(AnonymousIndividual),
}

impl Individual {
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }

    #[inline]
    pub fn as_named(&self) -> Option<&NamedIndividual> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }

    #[inline]
    pub fn as_anonymous(&self) -> Option<&AnonymousIndividual> {
        match self {
            Self::Named(_) => None,
            Self::Anonymous(a) => Some(a),
        }
    }

    /// The IRI of a named individual.
    #[inline]
    pub fn iri(&self) -> Option<&Iri> {
        self.as_named().map(NamedIndividual::iri)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => n.fmt(f),
            Self::Anonymous(a) => a.fmt(f),
        }
    }
}

impl From<NamedIndividual> for Individual {
    #[inline]
    fn from(individual: NamedIndividual) -> Self {
        Self::Named(individual)
    }
}

impl From<AnonymousIndividual> for Individual {
    #[inline]
    fn from(individual: AnonymousIndividual) -> Self {
        Self::Anonymous(individual)
    }
}

impl From<Iri> for Individual {
    #[inline]
    fn from(iri: Iri) -> Self {
        Self::Named(NamedIndividual(iri))
    }
}
