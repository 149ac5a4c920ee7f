//! OWL 2 axiom types.
//!
//! Axioms are the statements of an ontology. [`Axiom`] is a closed enum: every consumer
//! matches it exhaustively, so adding a kind forces all of them to be revisited.

use crate::entity::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, Individual,
};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::iri::Iri;
use crate::literal::Literal;
use std::fmt;
use std::sync::Arc;

/// The value of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(AnonymousIndividual),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
            Self::Anonymous(individual) => individual.fmt(f),
        }
    }
}

impl From<Iri> for AnnotationValue {
    #[inline]
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<Literal> for AnnotationValue {
    #[inline]
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<AnonymousIndividual> for AnnotationValue {
    #[inline]
    fn from(individual: AnonymousIndividual) -> Self {
        Self::Anonymous(individual)
    }
}

/// The subject of an annotation assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationSubject {
    Iri(Iri),
    Anonymous(AnonymousIndividual),
}

impl fmt::Display for AnnotationSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Anonymous(individual) => individual.fmt(f),
        }
    }
}

impl From<Iri> for AnnotationSubject {
    #[inline]
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<AnonymousIndividual> for AnnotationSubject {
    #[inline]
    fn from(individual: AnonymousIndividual) -> Self {
        Self::Anonymous(individual)
    }
}

/// An annotation: a property/value pair attached to an axiom or to the ontology.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    property: AnnotationProperty,
    value: AnnotationValue,
}

impl Annotation {
    #[inline]
    pub fn new(property: AnnotationProperty, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }

    #[inline]
    pub fn property(&self) -> &AnnotationProperty {
        &self.property
    }

    #[inline]
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annotation({} {})", self.property, self.value)
    }
}

/// An OWL 2 axiom.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axiom {
    /// `Declaration(Entity)`: the entity exists with the given kind.
    Declaration(Entity),

    // Class axioms
    SubClassOf {
        sub_class: Arc<ClassExpression>,
        super_class: Arc<ClassExpression>,
    },
    EquivalentClasses(Vec<Arc<ClassExpression>>),
    DisjointClasses(Vec<Arc<ClassExpression>>),
    /// `DisjointUnion(C C1 ... Cn)`: C is the disjoint union of C1 ... Cn.
    DisjointUnion {
        class: Class,
        disjoint_classes: Vec<Arc<ClassExpression>>,
    },

    // Object property axioms
    SubObjectPropertyOf {
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
    },
    /// `SubObjectPropertyOf(ObjectPropertyChain(P1 ... Pn) P)`.
    SubPropertyChainOf {
        property_chain: Vec<ObjectPropertyExpression>,
        super_property: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(Vec<ObjectPropertyExpression>),
    DisjointObjectProperties(Vec<ObjectPropertyExpression>),
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: Arc<ClassExpression>,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: Arc<ClassExpression>,
    },
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),

    // Data property axioms
    SubDataPropertyOf {
        sub_property: DataProperty,
        super_property: DataProperty,
    },
    EquivalentDataProperties(Vec<DataProperty>),
    DisjointDataProperties(Vec<DataProperty>),
    DataPropertyDomain {
        property: DataProperty,
        domain: Arc<ClassExpression>,
    },
    DataPropertyRange {
        property: DataProperty,
        range: Arc<DataRange>,
    },
    FunctionalDataProperty(DataProperty),

    // Assertions
    SameIndividual(Vec<Individual>),
    DifferentIndividuals(Vec<Individual>),
    ClassAssertion {
        class: Arc<ClassExpression>,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
    },
    DataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
    },

    // Annotation axioms
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
    },
    SubAnnotationPropertyOf {
        sub_property: AnnotationProperty,
        super_property: AnnotationProperty,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: Iri,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: Iri,
    },

    // Other
    DatatypeDefinition {
        datatype: Datatype,
        range: Arc<DataRange>,
    },
    /// `HasKey(C (P1 ... Pm) (D1 ... Dn))`.
    HasKey {
        class: Arc<ClassExpression>,
        object_properties: Vec<ObjectPropertyExpression>,
        data_properties: Vec<DataProperty>,
    },
}

impl Axiom {
    #[inline]
    pub fn declaration(entity: impl Into<Entity>) -> Self {
        Self::Declaration(entity.into())
    }

    pub fn subclass_of(
        sub_class: impl Into<Arc<ClassExpression>>,
        super_class: impl Into<Arc<ClassExpression>>,
    ) -> Self {
        Self::SubClassOf {
            sub_class: sub_class.into(),
            super_class: super_class.into(),
        }
    }

    pub fn equivalent_classes(
        classes: impl IntoIterator<Item = impl Into<Arc<ClassExpression>>>,
    ) -> Self {
        Self::EquivalentClasses(classes.into_iter().map(Into::into).collect())
    }

    pub fn disjoint_classes(
        classes: impl IntoIterator<Item = impl Into<Arc<ClassExpression>>>,
    ) -> Self {
        Self::DisjointClasses(classes.into_iter().map(Into::into).collect())
    }

    pub fn class_assertion(
        class: impl Into<Arc<ClassExpression>>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        }
    }

    pub fn object_property_assertion(
        property: impl Into<ObjectPropertyExpression>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Self::ObjectPropertyAssertion {
            property: property.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn data_property_assertion(
        property: DataProperty,
        source: impl Into<Individual>,
        target: impl Into<Literal>,
    ) -> Self {
        Self::DataPropertyAssertion {
            property,
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn annotation_assertion(
        property: AnnotationProperty,
        subject: impl Into<AnnotationSubject>,
        value: impl Into<AnnotationValue>,
    ) -> Self {
        Self::AnnotationAssertion {
            property,
            subject: subject.into(),
            value: value.into(),
        }
    }

    /// The type tag of this axiom.
    pub fn kind(&self) -> AxiomKind {
        match self {
            Self::Declaration(_) => AxiomKind::Declaration,
            Self::SubClassOf { .. } => AxiomKind::SubClassOf,
            Self::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            Self::DisjointClasses(_) => AxiomKind::DisjointClasses,
            Self::DisjointUnion { .. } => AxiomKind::DisjointUnion,
            Self::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            Self::SubPropertyChainOf { .. } => AxiomKind::SubPropertyChainOf,
            Self::EquivalentObjectProperties(_) => AxiomKind::EquivalentObjectProperties,
            Self::DisjointObjectProperties(_) => AxiomKind::DisjointObjectProperties,
            Self::InverseObjectProperties(..) => AxiomKind::InverseObjectProperties,
            Self::ObjectPropertyDomain { .. } => AxiomKind::ObjectPropertyDomain,
            Self::ObjectPropertyRange { .. } => AxiomKind::ObjectPropertyRange,
            Self::FunctionalObjectProperty(_) => AxiomKind::FunctionalObjectProperty,
            Self::InverseFunctionalObjectProperty(_) => AxiomKind::InverseFunctionalObjectProperty,
            Self::ReflexiveObjectProperty(_) => AxiomKind::ReflexiveObjectProperty,
            Self::IrreflexiveObjectProperty(_) => AxiomKind::IrreflexiveObjectProperty,
            Self::SymmetricObjectProperty(_) => AxiomKind::SymmetricObjectProperty,
            Self::AsymmetricObjectProperty(_) => AxiomKind::AsymmetricObjectProperty,
            Self::TransitiveObjectProperty(_) => AxiomKind::TransitiveObjectProperty,
            Self::SubDataPropertyOf { .. } => AxiomKind::SubDataPropertyOf,
            Self::EquivalentDataProperties(_) => AxiomKind::EquivalentDataProperties,
            Self::DisjointDataProperties(_) => AxiomKind::DisjointDataProperties,
            Self::DataPropertyDomain { .. } => AxiomKind::DataPropertyDomain,
            Self::DataPropertyRange { .. } => AxiomKind::DataPropertyRange,
            Self::FunctionalDataProperty(_) => AxiomKind::FunctionalDataProperty,
            Self::SameIndividual(_) => AxiomKind::SameIndividual,
            Self::DifferentIndividuals(_) => AxiomKind::DifferentIndividuals,
            Self::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            Self::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            Self::NegativeObjectPropertyAssertion { .. } => {
                AxiomKind::NegativeObjectPropertyAssertion
            }
            Self::DataPropertyAssertion { .. } => AxiomKind::DataPropertyAssertion,
            Self::NegativeDataPropertyAssertion { .. } => AxiomKind::NegativeDataPropertyAssertion,
            Self::AnnotationAssertion { .. } => AxiomKind::AnnotationAssertion,
            Self::SubAnnotationPropertyOf { .. } => AxiomKind::SubAnnotationPropertyOf,
            Self::AnnotationPropertyDomain { .. } => AxiomKind::AnnotationPropertyDomain,
            Self::AnnotationPropertyRange { .. } => AxiomKind::AnnotationPropertyRange,
            Self::DatatypeDefinition { .. } => AxiomKind::DatatypeDefinition,
            Self::HasKey { .. } => AxiomKind::HasKey,
        }
    }

    /// Checks if the axiom has no operands where at least one is required.
    ///
    /// Such axioms carry no statement and are refused by [`Ontology::add_axiom`](crate::Ontology::add_axiom).
    pub fn is_empty(&self) -> bool {
        match self {
            Self::EquivalentClasses(operands) | Self::DisjointClasses(operands) => {
                operands.is_empty()
            }
            Self::DisjointUnion {
                disjoint_classes, ..
            } => disjoint_classes.is_empty(),
            Self::SubPropertyChainOf { property_chain, .. } => property_chain.is_empty(),
            Self::EquivalentObjectProperties(operands) | Self::DisjointObjectProperties(operands) => {
                operands.is_empty()
            }
            Self::EquivalentDataProperties(operands) | Self::DisjointDataProperties(operands) => {
                operands.is_empty()
            }
            Self::SameIndividual(operands) | Self::DifferentIndividuals(operands) => {
                operands.is_empty()
            }
            Self::HasKey {
                object_properties,
                data_properties,
                ..
            } => object_properties.is_empty() && data_properties.is_empty(),
            Self::Declaration(_)
            | Self::SubClassOf { .. }
            | Self::SubObjectPropertyOf { .. }
            | Self::InverseObjectProperties(..)
            | Self::ObjectPropertyDomain { .. }
            | Self::ObjectPropertyRange { .. }
            | Self::FunctionalObjectProperty(_)
            | Self::InverseFunctionalObjectProperty(_)
            | Self::ReflexiveObjectProperty(_)
            | Self::IrreflexiveObjectProperty(_)
            | Self::SymmetricObjectProperty(_)
            | Self::AsymmetricObjectProperty(_)
            | Self::TransitiveObjectProperty(_)
            | Self::SubDataPropertyOf { .. }
            | Self::DataPropertyDomain { .. }
            | Self::DataPropertyRange { .. }
            | Self::FunctionalDataProperty(_)
            | Self::ClassAssertion { .. }
            | Self::ObjectPropertyAssertion { .. }
            | Self::NegativeObjectPropertyAssertion { .. }
            | Self::DataPropertyAssertion { .. }
            | Self::NegativeDataPropertyAssertion { .. }
            | Self::AnnotationAssertion { .. }
            | Self::SubAnnotationPropertyOf { .. }
            | Self::AnnotationPropertyDomain { .. }
            | Self::AnnotationPropertyRange { .. }
            | Self::DatatypeDefinition { .. } => false,
        }
    }

    fn write_operands(&self, w: &mut OperandWriter<'_, '_>) -> fmt::Result {
        match self {
            Self::Declaration(entity) => w.item(entity),
            Self::SubClassOf {
                sub_class,
                super_class,
            } => {
                w.item(sub_class)?;
                w.item(super_class)
            }
            Self::EquivalentClasses(operands) | Self::DisjointClasses(operands) => {
                w.items(operands)
            }
            Self::DisjointUnion {
                class,
                disjoint_classes,
            } => {
                w.item(class)?;
                w.items(disjoint_classes)
            }
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => {
                w.item(sub_property)?;
                w.item(super_property)
            }
            Self::SubPropertyChainOf {
                property_chain,
                super_property,
            } => {
                w.item(&Chain(property_chain))?;
                w.item(super_property)
            }
            Self::EquivalentObjectProperties(operands) | Self::DisjointObjectProperties(operands) => {
                w.items(operands)
            }
            Self::InverseObjectProperties(first, second) => {
                w.item(first)?;
                w.item(second)
            }
            Self::ObjectPropertyDomain {
                property,
                domain: class,
            }
            | Self::ObjectPropertyRange {
                property,
                range: class,
            } => {
                w.item(property)?;
                w.item(class)
            }
            Self::FunctionalObjectProperty(property)
            | Self::InverseFunctionalObjectProperty(property)
            | Self::ReflexiveObjectProperty(property)
            | Self::IrreflexiveObjectProperty(property)
            | Self::SymmetricObjectProperty(property)
            | Self::AsymmetricObjectProperty(property)
            | Self::TransitiveObjectProperty(property) => w.item(property),
            Self::SubDataPropertyOf {
                sub_property,
                super_property,
            } => {
                w.item(sub_property)?;
                w.item(super_property)
            }
            Self::EquivalentDataProperties(operands) | Self::DisjointDataProperties(operands) => {
                w.items(operands)
            }
            Self::DataPropertyDomain { property, domain } => {
                w.item(property)?;
                w.item(domain)
            }
            Self::DataPropertyRange { property, range } => {
                w.item(property)?;
                w.item(range)
            }
            Self::FunctionalDataProperty(property) => w.item(property),
            Self::SameIndividual(operands) | Self::DifferentIndividuals(operands) => {
                w.items(operands)
            }
            Self::ClassAssertion { class, individual } => {
                w.item(class)?;
                w.item(individual)
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
                w.item(property)?;
                w.item(source)?;
                w.item(target)
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
                w.item(property)?;
                w.item(source)?;
                w.item(target)
            }
            Self::AnnotationAssertion {
                property,
                subject,
                value,
            } => {
                w.item(property)?;
                w.item(subject)?;
                w.item(value)
            }
            Self::SubAnnotationPropertyOf {
                sub_property,
                super_property,
            } => {
                w.item(sub_property)?;
                w.item(super_property)
            }
            Self::AnnotationPropertyDomain {
                property,
                domain: iri,
            }
            | Self::AnnotationPropertyRange {
                property,
                range: iri,
            } => {
                w.item(property)?;
                w.item(iri)
            }
            Self::DatatypeDefinition { datatype, range } => {
                w.item(datatype)?;
                w.item(range)
            }
            Self::HasKey {
                class,
                object_properties,
                data_properties,
            } => {
                w.item(class)?;
                w.item(&Group(object_properties))?;
                w.item(&Group(data_properties))
            }
        }
    }

    fn fmt_with_annotations(
        &self,
        f: &mut fmt::Formatter<'_>,
        annotations: &[Annotation],
    ) -> fmt::Result {
        write!(f, "{}(", self.kind().name())?;
        let mut writer = OperandWriter { f, first: true };
        writer.items(annotations)?;
        self.write_operands(&mut writer)?;
        writer.f.write_str(")")
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_annotations(f, &[])
    }
}

struct OperandWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl OperandWriter<'_, '_> {
    fn item(&mut self, item: &dyn fmt::Display) -> fmt::Result {
        if !self.first {
            self.f.write_str(" ")?;
        }
        self.first = false;
        item.fmt(self.f)
    }

    fn items<T: fmt::Display>(&mut self, items: &[T]) -> fmt::Result {
        for item in items {
            self.item(item)?;
        }
        Ok(())
    }
}

struct Chain<'a>(&'a [ObjectPropertyExpression]);

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::expression::write_list(f, "ObjectPropertyChain", self.0)
    }
}

struct Group<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Group<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::expression::write_list(f, "", self.0)
    }
}

/// The type tag of an [`Axiom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxiomKind {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    SameIndividual,
    DifferentIndividuals,
    ClassAssertion,
    ObjectPropertyAssertion,
    NegativeObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeDataPropertyAssertion,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
    DatatypeDefinition,
    HasKey,
}

impl AxiomKind {
    /// The group the axiom kind belongs to.
    pub const fn category(self) -> AxiomCategory {
        match self {
            Self::Declaration => AxiomCategory::Declaration,
            Self::SubClassOf | Self::EquivalentClasses | Self::DisjointClasses | Self::DisjointUnion => {
                AxiomCategory::Class
            }
            Self::SubObjectPropertyOf
            | Self::SubPropertyChainOf
            | Self::EquivalentObjectProperties
            | Self::DisjointObjectProperties
            | Self::InverseObjectProperties
            | Self::ObjectPropertyDomain
            | Self::ObjectPropertyRange
            | Self::FunctionalObjectProperty
            | Self::InverseFunctionalObjectProperty
            | Self::ReflexiveObjectProperty
            | Self::IrreflexiveObjectProperty
            | Self::SymmetricObjectProperty
            | Self::AsymmetricObjectProperty
            | Self::TransitiveObjectProperty => AxiomCategory::ObjectProperty,
            Self::SubDataPropertyOf
            | Self::EquivalentDataProperties
            | Self::DisjointDataProperties
            | Self::DataPropertyDomain
            | Self::DataPropertyRange
            | Self::FunctionalDataProperty => AxiomCategory::DataProperty,
            Self::SameIndividual
            | Self::DifferentIndividuals
            | Self::ClassAssertion
            | Self::ObjectPropertyAssertion
            | Self::NegativeObjectPropertyAssertion
            | Self::DataPropertyAssertion
            | Self::NegativeDataPropertyAssertion => AxiomCategory::Assertion,
            Self::AnnotationAssertion
            | Self::SubAnnotationPropertyOf
            | Self::AnnotationPropertyDomain
            | Self::AnnotationPropertyRange => AxiomCategory::Annotation,
            Self::DatatypeDefinition | Self::HasKey => AxiomCategory::Other,
        }
    }

    /// The functional-syntax keyword of the axiom kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Declaration => "Declaration",
            Self::SubClassOf => "SubClassOf",
            Self::EquivalentClasses => "EquivalentClasses",
            Self::DisjointClasses => "DisjointClasses",
            Self::DisjointUnion => "DisjointUnion",
            Self::SubObjectPropertyOf | Self::SubPropertyChainOf => "SubObjectPropertyOf",
            Self::EquivalentObjectProperties => "EquivalentObjectProperties",
            Self::DisjointObjectProperties => "DisjointObjectProperties",
            Self::InverseObjectProperties => "InverseObjectProperties",
            Self::ObjectPropertyDomain => "ObjectPropertyDomain",
            Self::ObjectPropertyRange => "ObjectPropertyRange",
            Self::FunctionalObjectProperty => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty => "InverseFunctionalObjectProperty",
            Self::ReflexiveObjectProperty => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty => "IrreflexiveObjectProperty",
            Self::SymmetricObjectProperty => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty => "AsymmetricObjectProperty",
            Self::TransitiveObjectProperty => "TransitiveObjectProperty",
            Self::SubDataPropertyOf => "SubDataPropertyOf",
            Self::EquivalentDataProperties => "EquivalentDataProperties",
            Self::DisjointDataProperties => "DisjointDataProperties",
            Self::DataPropertyDomain => "DataPropertyDomain",
            Self::DataPropertyRange => "DataPropertyRange",
            Self::FunctionalDataProperty => "FunctionalDataProperty",
            Self::SameIndividual => "SameIndividual",
            Self::DifferentIndividuals => "DifferentIndividuals",
            Self::ClassAssertion => "ClassAssertion",
            Self::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            Self::NegativeObjectPropertyAssertion => "NegativeObjectPropertyAssertion",
            Self::DataPropertyAssertion => "DataPropertyAssertion",
            Self::NegativeDataPropertyAssertion => "NegativeDataPropertyAssertion",
            Self::AnnotationAssertion => "AnnotationAssertion",
            Self::SubAnnotationPropertyOf => "SubAnnotationPropertyOf",
            Self::AnnotationPropertyDomain => "AnnotationPropertyDomain",
            Self::AnnotationPropertyRange => "AnnotationPropertyRange",
            Self::DatatypeDefinition => "DatatypeDefinition",
            Self::HasKey => "HasKey",
        }
    }
}

impl fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Groups of axiom kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxiomCategory {
    Declaration,
    Class,
    ObjectProperty,
    DataProperty,
    Assertion,
    Annotation,
    Other,
}

/// An axiom together with the annotations attached to it.
///
/// This is the unit an [`Ontology`](crate::Ontology) stores, behind an [`Arc`]
/// (see [`SharedAxiom`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotatedAxiom {
    axiom: Axiom,
    annotations: Vec<Annotation>,
}

impl AnnotatedAxiom {
    #[inline]
    pub fn new(axiom: Axiom, annotations: Vec<Annotation>) -> Self {
        Self { axiom, annotations }
    }

    #[inline]
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    #[inline]
    pub fn kind(&self) -> AxiomKind {
        self.axiom.kind()
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[inline]
    pub fn into_parts(self) -> (Axiom, Vec<Annotation>) {
        (self.axiom, self.annotations)
    }
}

impl From<Axiom> for AnnotatedAxiom {
    #[inline]
    fn from(axiom: Axiom) -> Self {
        Self::new(axiom, Vec::new())
    }
}

impl From<Axiom> for SharedAxiom {
    #[inline]
    fn from(axiom: Axiom) -> Self {
        Arc::new(axiom.into())
    }
}

impl fmt::Display for AnnotatedAxiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.axiom.fmt_with_annotations(f, &self.annotations)
    }
}

/// An axiom shared between an ontology and the subsets derived from it.
pub type SharedAxiom = Arc<AnnotatedAxiom>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{NamedIndividual, ObjectProperty};

    fn iri(name: &str) -> Iri {
        Iri::new_unchecked(format!("http://example.org/{name}"))
    }

    #[test]
    fn kind_and_category() {
        let axiom = Axiom::subclass_of(Class::new(iri("Dog")), Class::new(iri("Animal")));
        assert_eq!(axiom.kind(), AxiomKind::SubClassOf);
        assert_eq!(axiom.kind().category(), AxiomCategory::Class);

        let axiom = Axiom::object_property_assertion(
            ObjectProperty::new(iri("owns")),
            NamedIndividual::new(iri("alice")),
            NamedIndividual::new(iri("fido")),
        );
        assert_eq!(axiom.kind().category(), AxiomCategory::Assertion);
        assert_eq!(
            Axiom::TransitiveObjectProperty(ObjectProperty::new(iri("p")).into())
                .kind()
                .category(),
            AxiomCategory::ObjectProperty
        );
    }

    #[test]
    fn empty_axioms() {
        assert!(Axiom::EquivalentClasses(Vec::new()).is_empty());
        assert!(Axiom::SameIndividual(Vec::new()).is_empty());
        assert!(!Axiom::declaration(Class::new(iri("A"))).is_empty());
        assert!(!Axiom::disjoint_classes([Class::new(iri("A")), Class::new(iri("B"))]).is_empty());
    }

    #[test]
    fn display_functional_syntax() {
        let axiom = Axiom::subclass_of(Class::new(iri("Dog")), Class::new(iri("Animal")));
        assert_eq!(
            axiom.to_string(),
            "SubClassOf(<http://example.org/Dog> <http://example.org/Animal>)"
        );
        let annotated = AnnotatedAxiom::from(axiom).with_annotation(Annotation::new(
            AnnotationProperty::new(iri("comment")),
            Literal::new_plain("dogs"),
        ));
        assert_eq!(
            annotated.to_string(),
            "SubClassOf(Annotation(<http://example.org/comment> \"dogs\") <http://example.org/Dog> <http://example.org/Animal>)"
        );
    }

    #[test]
    fn display_chain() {
        let axiom = Axiom::SubPropertyChainOf {
            property_chain: vec![
                ObjectProperty::new(iri("hasParent")).into(),
                ObjectProperty::new(iri("hasParent")).into(),
            ],
            super_property: ObjectProperty::new(iri("hasGrandparent")).into(),
        };
        assert_eq!(
            axiom.to_string(),
            "SubObjectPropertyOf(ObjectPropertyChain(<http://example.org/hasParent> <http://example.org/hasParent>) <http://example.org/hasGrandparent>)"
        );
    }
}
