//! OWL 2 class expressions, object property expressions and data ranges.
//!
//! Interior nodes hold their children behind [`Arc`] so that a sub-expression can be
//! referenced from several axioms without being copied.

use crate::entity::{Class, DataProperty, Datatype, Individual, ObjectProperty};
use crate::iri::Iri;
use crate::literal::Literal;
use std::fmt;
use std::sync::Arc;

/// An OWL 2 object property expression: a property or its inverse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectPropertyExpression {
    /// A named object property.
    ObjectProperty(ObjectProperty),
    /// `ObjectInverseOf(P)`.
    InverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    #[inline]
    pub fn inverse(property: ObjectProperty) -> Self {
        Self::InverseOf(property)
    }

    #[inline]
    pub fn is_inverse(&self) -> bool {
        matches!(self, Self::InverseOf(_))
    }

    /// The property, with the inverse stripped.
    #[inline]
    pub fn base_property(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(p) | Self::InverseOf(p) => p,
        }
    }

    /// The property if this is not an inverse.
    #[inline]
    pub fn as_plain(&self) -> Option<&ObjectProperty> {
        match self {
            Self::ObjectProperty(p) => Some(p),
            Self::InverseOf(_) => None,
        }
    }
}

impl fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectProperty(p) => p.fmt(f),
            Self::InverseOf(p) => write!(f, "ObjectInverseOf({p})"),
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    #[inline]
    fn from(property: ObjectProperty) -> Self {
        Self::ObjectProperty(property)
    }
}

/// An OWL 2 class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassExpression {
    /// A named class.
    Class(Class),
    ObjectIntersectionOf(Vec<Arc<ClassExpression>>),
    ObjectUnionOf(Vec<Arc<ClassExpression>>),
    ObjectComplementOf(Arc<ClassExpression>),
    ObjectOneOf(Vec<Individual>),
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Arc<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Arc<ClassExpression>,
    },
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },
    ObjectHasSelf(ObjectPropertyExpression),
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Arc<ClassExpression>>,
    },
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Arc<ClassExpression>>,
    },
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Arc<ClassExpression>>,
    },
    DataSomeValuesFrom {
        property: DataProperty,
        filler: Arc<DataRange>,
    },
    DataAllValuesFrom {
        property: DataProperty,
        filler: Arc<DataRange>,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataMinCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<Arc<DataRange>>,
    },
    DataMaxCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<Arc<DataRange>>,
    },
    DataExactCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<Arc<DataRange>>,
    },
}

impl ClassExpression {
    #[inline]
    pub fn class(class: impl Into<Class>) -> Self {
        Self::Class(class.into())
    }

    pub fn intersection(operands: impl IntoIterator<Item = impl Into<Arc<Self>>>) -> Self {
        Self::ObjectIntersectionOf(operands.into_iter().map(Into::into).collect())
    }

    pub fn union(operands: impl IntoIterator<Item = impl Into<Arc<Self>>>) -> Self {
        Self::ObjectUnionOf(operands.into_iter().map(Into::into).collect())
    }

    pub fn complement(operand: impl Into<Arc<Self>>) -> Self {
        Self::ObjectComplementOf(operand.into())
    }

    pub fn some_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<Arc<Self>>,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: filler.into(),
        }
    }

    pub fn all_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: impl Into<Arc<Self>>,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: filler.into(),
        }
    }

    pub fn has_value(
        property: impl Into<ObjectPropertyExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ObjectHasValue {
            property: property.into(),
            individual: individual.into(),
        }
    }

    /// Returns `true` if this is a named class.
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    #[inline]
    pub fn as_class(&self) -> Option<&Class> {
        if let Self::Class(c) = self {
            Some(c)
        } else {
            None
        }
    }
}

impl From<Class> for ClassExpression {
    #[inline]
    fn from(class: Class) -> Self {
        Self::Class(class)
    }
}

impl From<Class> for Arc<ClassExpression> {
    #[inline]
    fn from(class: Class) -> Self {
        Arc::new(ClassExpression::Class(class))
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(c) => c.fmt(f),
            Self::ObjectIntersectionOf(operands) => write_list(f, "ObjectIntersectionOf", operands),
            Self::ObjectUnionOf(operands) => write_list(f, "ObjectUnionOf", operands),
            Self::ObjectComplementOf(operand) => write!(f, "ObjectComplementOf({operand})"),
            Self::ObjectOneOf(individuals) => write_list(f, "ObjectOneOf", individuals),
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => write!(f, "ObjectHasValue({property} {individual})"),
            Self::ObjectHasSelf(property) => write!(f, "ObjectHasSelf({property})"),
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "ObjectMinCardinality", *cardinality, property, filler.as_deref()),
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "ObjectMaxCardinality", *cardinality, property, filler.as_deref()),
            Self::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "ObjectExactCardinality", *cardinality, property, filler.as_deref()),
            Self::DataSomeValuesFrom { property, filler } => {
                write!(f, "DataSomeValuesFrom({property} {filler})")
            }
            Self::DataAllValuesFrom { property, filler } => {
                write!(f, "DataAllValuesFrom({property} {filler})")
            }
            Self::DataHasValue { property, value } => write!(f, "DataHasValue({property} {value})"),
            Self::DataMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "DataMinCardinality", *cardinality, property, filler.as_deref()),
            Self::DataMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "DataMaxCardinality", *cardinality, property, filler.as_deref()),
            Self::DataExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "DataExactCardinality", *cardinality, property, filler.as_deref()),
        }
    }
}

/// An OWL 2 data range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataRange {
    /// A named datatype such as `xsd:string`.
    Datatype(Datatype),
    DataIntersectionOf(Vec<Arc<DataRange>>),
    DataUnionOf(Vec<Arc<DataRange>>),
    DataComplementOf(Arc<DataRange>),
    DataOneOf(Vec<Literal>),
    /// `DatatypeRestriction(D f1 v1 ... fn vn)`, facets given as (facet IRI, value) pairs.
    DatatypeRestriction {
        datatype: Datatype,
        facets: Vec<(Iri, Literal)>,
    },
}

impl DataRange {
    #[inline]
    pub fn datatype(datatype: impl Into<Datatype>) -> Self {
        Self::Datatype(datatype.into())
    }

    #[inline]
    pub fn as_datatype(&self) -> Option<&Datatype> {
        if let Self::Datatype(d) = self {
            Some(d)
        } else {
            None
        }
    }
}

impl From<Datatype> for DataRange {
    #[inline]
    fn from(datatype: Datatype) -> Self {
        Self::Datatype(datatype)
    }
}

impl From<Datatype> for Arc<DataRange> {
    #[inline]
    fn from(datatype: Datatype) -> Self {
        Arc::new(DataRange::Datatype(datatype))
    }
}

impl fmt::Display for DataRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Datatype(d) => d.fmt(f),
            Self::DataIntersectionOf(operands) => write_list(f, "DataIntersectionOf", operands),
            Self::DataUnionOf(operands) => write_list(f, "DataUnionOf", operands),
            Self::DataComplementOf(operand) => write!(f, "DataComplementOf({operand})"),
            Self::DataOneOf(values) => write_list(f, "DataOneOf", values),
            Self::DatatypeRestriction { datatype, facets } => {
                write!(f, "DatatypeRestriction({datatype}")?;
                for (facet, value) in facets {
                    write!(f, " {facet} {value}")?;
                }
                f.write_str(")")
            }
        }
    }
}

pub(crate) fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    items: &[T],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        item.fmt(f)?;
    }
    f.write_str(")")
}

fn write_cardinality<P: fmt::Display, F: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    cardinality: u32,
    property: &P,
    filler: Option<&F>,
) -> fmt::Result {
    write!(f, "{name}({cardinality} {property}")?;
    if let Some(filler) = filler {
        write!(f, " {filler}")?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> Class {
        Class::new(Iri::new_unchecked(format!("http://example.org/{name}")))
    }

    #[test]
    fn shared_operands_are_not_copied() {
        let person = Arc::new(ClassExpression::class(class("Person")));
        let a = ClassExpression::intersection([Arc::clone(&person), class("Adult").into()]);
        let b = ClassExpression::union([Arc::clone(&person), class("Child").into()]);
        assert_eq!(Arc::strong_count(&person), 3);
        assert_ne!(a, b);
    }

    #[test]
    fn named_class() {
        let c = ClassExpression::class(class("Person"));
        assert!(c.is_named());
        assert_eq!(c.as_class(), Some(&class("Person")));
        let restriction = ClassExpression::some_values_from(
            ObjectProperty::new(Iri::new_unchecked("http://example.org/hasPet")),
            class("Animal"),
        );
        assert!(!restriction.is_named());
        assert_eq!(restriction.as_class(), None);
    }

    #[test]
    fn inverse_property() {
        let knows = ObjectProperty::new(Iri::new_unchecked("http://example.org/knows"));
        let inverse = ObjectPropertyExpression::inverse(knows.clone());
        assert!(inverse.is_inverse());
        assert_eq!(inverse.base_property(), &knows);
        assert_eq!(inverse.as_plain(), None);
        assert_eq!(
            ObjectPropertyExpression::from(knows.clone()).as_plain(),
            Some(&knows)
        );
    }

    #[test]
    fn display_functional_syntax() {
        let expression = ClassExpression::intersection([class("A"), class("B")]);
        assert_eq!(
            expression.to_string(),
            "ObjectIntersectionOf(<http://example.org/A> <http://example.org/B>)"
        );
        let range = DataRange::DatatypeRestriction {
            datatype: Datatype::new(oxrdf::vocab::xsd::INTEGER),
            facets: vec![(
                Iri::new_unchecked("http://www.w3.org/2001/XMLSchema#minInclusive"),
                Literal::from(0_i64),
            )],
        };
        assert!(range.to_string().starts_with("DatatypeRestriction(<http://www.w3.org/2001/XMLSchema#integer> <http://www.w3.org/2001/XMLSchema#minInclusive> \"0\""));
    }
}
