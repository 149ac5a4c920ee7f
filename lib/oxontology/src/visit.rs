//! Walking the terms referenced by axioms and expressions.

use crate::axiom::{AnnotatedAxiom, Annotation, AnnotationSubject, AnnotationValue, Axiom};
use crate::entity::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, Individual,
    NamedIndividual, ObjectProperty,
};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::iri::Iri;
use crate::literal::Literal;
use std::collections::BTreeSet;

/// Receives every term referenced by an axiom or an expression.
///
/// All methods default to doing nothing, so an implementation only overrides what it needs.
/// Terms are reported once per occurrence, in operand order.
///
/// `visit_iri` receives IRIs that do not name a typed entity: annotation subjects and values,
/// datatype restriction facets and annotation property domains and ranges.
pub trait Visitor {
    fn visit_class(&mut self, _class: &Class) {}

    fn visit_datatype(&mut self, _datatype: &Datatype) {}

    fn visit_object_property(&mut self, _property: &ObjectProperty) {}

    fn visit_data_property(&mut self, _property: &DataProperty) {}

    fn visit_annotation_property(&mut self, _property: &AnnotationProperty) {}

    fn visit_named_individual(&mut self, _individual: &NamedIndividual) {}

    fn visit_anonymous_individual(&mut self, _individual: &AnonymousIndividual) {}

    fn visit_literal(&mut self, _literal: &Literal) {}

    fn visit_iri(&mut self, _iri: &Iri) {}
}

impl Entity {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        match self {
            Self::Class(class) => visitor.visit_class(class),
            Self::Datatype(datatype) => visitor.visit_datatype(datatype),
            Self::ObjectProperty(property) => visitor.visit_object_property(property),
            Self::DataProperty(property) => visitor.visit_data_property(property),
            Self::AnnotationProperty(property) => visitor.visit_annotation_property(property),
            Self::NamedIndividual(individual) => visitor.visit_named_individual(individual),
        }
    }
}

impl Individual {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        match self {
            Self::Named(individual) => visitor.visit_named_individual(individual),
            Self::Anonymous(individual) => visitor.visit_anonymous_individual(individual),
        }
    }
}

impl ObjectPropertyExpression {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        visitor.visit_object_property(self.base_property());
    }
}

impl ClassExpression {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        match self {
            Self::Class(class) => visitor.visit_class(class),
            Self::ObjectIntersectionOf(operands) | Self::ObjectUnionOf(operands) => {
                for operand in operands {
                    operand.accept(visitor);
                }
            }
            Self::ObjectComplementOf(operand) => operand.accept(visitor),
            Self::ObjectOneOf(individuals) => {
                for individual in individuals {
                    individual.accept(visitor);
                }
            }
            Self::ObjectSomeValuesFrom { property, filler }
            | Self::ObjectAllValuesFrom { property, filler } => {
                property.accept(visitor);
                filler.accept(visitor);
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => {
                property.accept(visitor);
                individual.accept(visitor);
            }
            Self::ObjectHasSelf(property) => property.accept(visitor),
            Self::ObjectMinCardinality {
                property, filler, ..
            }
            | Self::ObjectMaxCardinality {
                property, filler, ..
            }
            | Self::ObjectExactCardinality {
                property, filler, ..
            } => {
                property.accept(visitor);
                if let Some(filler) = filler {
                    filler.accept(visitor);
                }
            }
            Self::DataSomeValuesFrom { property, filler }
            | Self::DataAllValuesFrom { property, filler } => {
                visitor.visit_data_property(property);
                filler.accept(visitor);
            }
            Self::DataHasValue { property, value } => {
                visitor.visit_data_property(property);
                visitor.visit_literal(value);
            }
            Self::DataMinCardinality {
                property, filler, ..
            }
            | Self::DataMaxCardinality {
                property, filler, ..
            }
            | Self::DataExactCardinality {
                property, filler, ..
            } => {
                visitor.visit_data_property(property);
                if let Some(filler) = filler {
                    filler.accept(visitor);
                }
            }
        }
    }
}

impl DataRange {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        match self {
            Self::Datatype(datatype) => visitor.visit_datatype(datatype),
            Self::DataIntersectionOf(operands) | Self::DataUnionOf(operands) => {
                for operand in operands {
                    operand.accept(visitor);
                }
            }
            Self::DataComplementOf(operand) => operand.accept(visitor),
            Self::DataOneOf(values) => {
                for value in values {
                    visitor.visit_literal(value);
                }
            }
            Self::DatatypeRestriction { datatype, facets } => {
                visitor.visit_datatype(datatype);
                for (facet, value) in facets {
                    visitor.visit_iri(facet);
                    visitor.visit_literal(value);
                }
            }
        }
    }
}

impl AnnotationSubject {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        match self {
            Self::Iri(iri) => visitor.visit_iri(iri),
            Self::Anonymous(individual) => visitor.visit_anonymous_individual(individual),
        }
    }
}

impl AnnotationValue {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        match self {
            Self::Iri(iri) => visitor.visit_iri(iri),
            Self::Literal(literal) => visitor.visit_literal(literal),
            Self::Anonymous(individual) => visitor.visit_anonymous_individual(individual),
        }
    }
}

impl Annotation {
    pub fn accept(&self, visitor: &mut impl Visitor) {
        visitor.visit_annotation_property(self.property());
        self.value().accept(visitor);
    }
}

impl Axiom {
    /// Reports every term referenced by this axiom to `visitor`.
    pub fn accept(&self, visitor: &mut impl Visitor) {
        match self {
            Self::Declaration(entity) => entity.accept(visitor),
            Self::SubClassOf {
                sub_class,
                super_class,
            } => {
                sub_class.accept(visitor);
                super_class.accept(visitor);
            }
            Self::EquivalentClasses(operands) | Self::DisjointClasses(operands) => {
                for operand in operands {
                    operand.accept(visitor);
                }
            }
            Self::DisjointUnion {
                class,
                disjoint_classes,
            } => {
                visitor.visit_class(class);
                for operand in disjoint_classes {
                    operand.accept(visitor);
                }
            }
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => {
                sub_property.accept(visitor);
                super_property.accept(visitor);
            }
            Self::SubPropertyChainOf {
                property_chain,
                super_property,
            } => {
                for property in property_chain {
                    property.accept(visitor);
                }
                super_property.accept(visitor);
            }
            Self::EquivalentObjectProperties(operands) | Self::DisjointObjectProperties(operands) => {
                for operand in operands {
                    operand.accept(visitor);
                }
            }
            Self::InverseObjectProperties(first, second) => {
                first.accept(visitor);
                second.accept(visitor);
            }
            Self::ObjectPropertyDomain {
                property,
                domain: class,
            }
            | Self::ObjectPropertyRange {
                property,
                range: class,
            } => {
                property.accept(visitor);
                class.accept(visitor);
            }
            Self::FunctionalObjectProperty(property)
            | Self::InverseFunctionalObjectProperty(property)
            | Self::ReflexiveObjectProperty(property)
            | Self::IrreflexiveObjectProperty(property)
            | Self::SymmetricObjectProperty(property)
            | Self::AsymmetricObjectProperty(property)
            | Self::TransitiveObjectProperty(property) => property.accept(visitor),
            Self::SubDataPropertyOf {
                sub_property,
                super_property,
            } => {
                visitor.visit_data_property(sub_property);
                visitor.visit_data_property(super_property);
            }
            Self::EquivalentDataProperties(operands) | Self::DisjointDataProperties(operands) => {
                for operand in operands {
                    visitor.visit_data_property(operand);
                }
            }
            Self::DataPropertyDomain { property, domain } => {
                visitor.visit_data_property(property);
                domain.accept(visitor);
            }
            Self::DataPropertyRange { property, range } => {
                visitor.visit_data_property(property);
                range.accept(visitor);
            }
            Self::FunctionalDataProperty(property) => visitor.visit_data_property(property),
            Self::SameIndividual(operands) | Self::DifferentIndividuals(operands) => {
                for operand in operands {
                    operand.accept(visitor);
                }
            }
            Self::ClassAssertion { class, individual } => {
                class.accept(visitor);
                individual.accept(visitor);
            }
            Self::ObjectPropertyAssertion {
                property,
                source,
                target,
            }
            | Self::NegativeObjectPropertyAssertion {
                property,
                source,
                target,
            } => {
                property.accept(visitor);
                source.accept(visitor);
                target.accept(visitor);
            }
            Self::DataPropertyAssertion {
                property,
                source,
                target,
            }
            | Self::NegativeDataPropertyAssertion {
                property,
                source,
                target,
            } => {
                visitor.visit_data_property(property);
                source.accept(visitor);
                visitor.visit_literal(target);
            }
            Self::AnnotationAssertion {
                property,
                subject,
                value,
            } => {
                visitor.visit_annotation_property(property);
                subject.accept(visitor);
                value.accept(visitor);
            }
            Self::SubAnnotationPropertyOf {
                sub_property,
                super_property,
            } => {
                visitor.visit_annotation_property(sub_property);
                visitor.visit_annotation_property(super_property);
            }
            Self::AnnotationPropertyDomain {
                property,
                domain: iri,
            }
            | Self::AnnotationPropertyRange {
                property,
                range: iri,
            } => {
                visitor.visit_annotation_property(property);
                visitor.visit_iri(iri);
            }
            Self::DatatypeDefinition { datatype, range } => {
                visitor.visit_datatype(datatype);
                range.accept(visitor);
            }
            Self::HasKey {
                class,
                object_properties,
                data_properties,
            } => {
                class.accept(visitor);
                for property in object_properties {
                    property.accept(visitor);
                }
                for property in data_properties {
                    visitor.visit_data_property(property);
                }
            }
        }
    }

    /// The terms referenced by this axiom.
    ///
    /// ```
    /// use oxontology::{Axiom, Class, NamedIndividual};
    ///
    /// let axiom = Axiom::class_assertion(
    ///     Class::from_iri("http://example.org/Patient")?,
    ///     NamedIndividual::from_iri("http://example.org/alice")?,
    /// );
    /// let signature = axiom.signature();
    /// assert_eq!(signature.classes.len(), 1);
    /// assert!(signature.mentions_individual(&"http://example.org/alice".parse()?));
    /// # Result::<_, Box<dyn std::error::Error>>::Ok(())
    /// ```
    pub fn signature(&self) -> Signature {
        let mut signature = Signature::default();
        self.accept(&mut signature);
        signature
    }
}

impl AnnotatedAxiom {
    /// Reports the terms of the axiom then the ones of its annotations.
    pub fn accept(&self, visitor: &mut impl Visitor) {
        self.axiom().accept(visitor);
        for annotation in self.annotations() {
            annotation.accept(visitor);
        }
    }

    /// The terms referenced by the axiom and its annotations.
    pub fn signature(&self) -> Signature {
        let mut signature = Signature::default();
        self.accept(&mut signature);
        signature
    }
}

/// The set of terms referenced by some axioms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub classes: BTreeSet<Class>,
    pub datatypes: BTreeSet<Datatype>,
    pub object_properties: BTreeSet<ObjectProperty>,
    pub data_properties: BTreeSet<DataProperty>,
    pub annotation_properties: BTreeSet<AnnotationProperty>,
    pub named_individuals: BTreeSet<NamedIndividual>,
    pub anonymous_individuals: BTreeSet<AnonymousIndividual>,
    pub literals: BTreeSet<Literal>,
    pub iris: BTreeSet<Iri>,
}

impl Signature {
    /// Checks if the named individual with this IRI is referenced.
    pub fn mentions_individual(&self, iri: &Iri) -> bool {
        self.named_individuals
            .iter()
            .any(|individual| individual.iri() == iri)
    }

    /// The entities of the signature, grouped by kind.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.classes
            .iter()
            .cloned()
            .map(Entity::from)
            .chain(self.datatypes.iter().cloned().map(Entity::from))
            .chain(self.object_properties.iter().cloned().map(Entity::from))
            .chain(self.data_properties.iter().cloned().map(Entity::from))
            .chain(self.annotation_properties.iter().cloned().map(Entity::from))
            .chain(self.named_individuals.iter().cloned().map(Entity::from))
    }

    /// Adds all terms of `other` to this signature.
    pub fn extend(&mut self, other: &Self) {
        self.classes.extend(other.classes.iter().cloned());
        self.datatypes.extend(other.datatypes.iter().cloned());
        self.object_properties
            .extend(other.object_properties.iter().cloned());
        self.data_properties
            .extend(other.data_properties.iter().cloned());
        self.annotation_properties
            .extend(other.annotation_properties.iter().cloned());
        self.named_individuals
            .extend(other.named_individuals.iter().cloned());
        self.anonymous_individuals
            .extend(other.anonymous_individuals.iter().cloned());
        self.literals.extend(other.literals.iter().cloned());
        self.iris.extend(other.iris.iter().cloned());
    }
}

impl Visitor for Signature {
    fn visit_class(&mut self, class: &Class) {
        self.classes.insert(class.clone());
    }

    fn visit_datatype(&mut self, datatype: &Datatype) {
        self.datatypes.insert(datatype.clone());
    }

    fn visit_object_property(&mut self, property: &ObjectProperty) {
        self.object_properties.insert(property.clone());
    }

    fn visit_data_property(&mut self, property: &DataProperty) {
        self.data_properties.insert(property.clone());
    }

    fn visit_annotation_property(&mut self, property: &AnnotationProperty) {
        self.annotation_properties.insert(property.clone());
    }

    fn visit_named_individual(&mut self, individual: &NamedIndividual) {
        self.named_individuals.insert(individual.clone());
    }

    fn visit_anonymous_individual(&mut self, individual: &AnonymousIndividual) {
        self.anonymous_individuals.insert(individual.clone());
    }

    fn visit_literal(&mut self, literal: &Literal) {
        self.literals.insert(literal.clone());
    }

    fn visit_iri(&mut self, iri: &Iri) {
        self.iris.insert(iri.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn iri(name: &str) -> Iri {
        Iri::new_unchecked(format!("http://example.org/{name}"))
    }

    #[derive(Default)]
    struct Counter {
        classes: usize,
        individuals: usize,
    }

    impl Visitor for Counter {
        fn visit_class(&mut self, _class: &Class) {
            self.classes += 1;
        }

        fn visit_named_individual(&mut self, _individual: &NamedIndividual) {
            self.individuals += 1;
        }
    }

    #[test]
    fn nested_expressions_are_walked() {
        let restriction = ClassExpression::some_values_from(
            ObjectProperty::new(iri("hasPart")),
            ClassExpression::intersection([Class::new(iri("Wheel")), Class::new(iri("Round"))]),
        );
        let axiom = Axiom::subclass_of(Class::new(iri("Car")), restriction);
        let signature = axiom.signature();
        assert_eq!(signature.classes.len(), 3);
        assert_eq!(signature.object_properties.len(), 1);
    }

    #[test]
    fn visitor_counts_occurrences() {
        let axiom = Axiom::ClassAssertion {
            class: Arc::new(ClassExpression::ObjectOneOf(vec![
                NamedIndividual::new(iri("a")).into(),
                NamedIndividual::new(iri("b")).into(),
            ])),
            individual: NamedIndividual::new(iri("a")).into(),
        };
        let mut counter = Counter::default();
        axiom.accept(&mut counter);
        assert_eq!(counter.classes, 0);
        assert_eq!(counter.individuals, 3);
        assert_eq!(axiom.signature().named_individuals.len(), 2);
    }

    #[test]
    fn annotation_terms_are_included() {
        let axiom = AnnotatedAxiom::from(Axiom::declaration(Class::new(iri("A"))))
            .with_annotation(Annotation::new(
                AnnotationProperty::new(iri("seeAlso")),
                iri("B"),
            ));
        let signature = axiom.signature();
        assert_eq!(signature.annotation_properties.len(), 1);
        assert!(signature.iris.contains(&iri("B")));
        assert_eq!(axiom.axiom().signature().annotation_properties.len(), 0);
    }

    #[test]
    fn annotation_assertion_subject_is_an_iri() {
        let axiom = Axiom::annotation_assertion(
            AnnotationProperty::new(iri("label")),
            iri("alice"),
            Literal::new_plain("Alice"),
        );
        let signature = axiom.signature();
        assert!(signature.named_individuals.is_empty());
        assert!(signature.iris.contains(&iri("alice")));
        assert_eq!(signature.literals.len(), 1);
    }
}
