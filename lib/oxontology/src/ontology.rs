//! The ontology container.

use crate::axiom::{AnnotatedAxiom, Annotation, Axiom, AxiomCategory, AxiomKind, SharedAxiom};
use crate::entity::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, Individual, NamedIndividual,
    ObjectProperty,
};
use crate::error::OntologyError;
use crate::expression::{ClassExpression, ObjectPropertyExpression};
use crate::iri::Iri;
use crate::literal::Literal;
use crate::prefix::PrefixMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// An OWL 2 ontology: metadata and an ordered list of axioms.
///
/// Axioms are kept in insertion order and shared through [`Arc`], so subsets of an
/// ontology can be built without copying them.
/// Entities are not stored on their own: [`classes`](Self::classes) and the other entity
/// getters scan the declaration axioms on each call.
/// Queries are linear scans over the axiom list.
///
/// ```
/// use oxontology::{Class, Iri, Ontology};
///
/// let mut ontology = Ontology::with_iri("http://example.org/hospital")?;
/// let patient = Class::from_iri("http://example.org/Patient")?;
/// ontology.create_individual(&patient, Iri::new("http://example.org/patient001")?);
/// assert_eq!(ontology.individuals().len(), 1);
/// assert_eq!(ontology.axiom_count(), 2);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ontology {
    ontology_iri: Option<Iri>,
    version_iri: Option<Iri>,
    imports: BTreeSet<Iri>,
    annotations: Vec<Annotation>,
    prefixes: PrefixMap,
    axioms: Vec<SharedAxiom>,
}

impl Ontology {
    /// Creates an empty ontology.
    pub fn new(ontology_iri: Option<Iri>) -> Self {
        Self {
            ontology_iri,
            ..Self::default()
        }
    }

    /// Creates an empty ontology identified by an ontology IRI and a version IRI.
    pub fn with_version(ontology_iri: Iri, version_iri: Iri) -> Self {
        Self {
            ontology_iri: Some(ontology_iri),
            version_iri: Some(version_iri),
            ..Self::default()
        }
    }

    /// Creates an empty ontology with the given IRI string.
    pub fn with_iri(iri: impl Into<String>) -> Result<Self, OntologyError> {
        Ok(Self::new(Some(Iri::new(iri)?)))
    }

    /// Creates an empty ontology holding the same IRIs, imports, annotations and prefixes as this one.
    pub fn metadata_copy(&self) -> Self {
        Self {
            ontology_iri: self.ontology_iri.clone(),
            version_iri: self.version_iri.clone(),
            imports: self.imports.clone(),
            annotations: self.annotations.clone(),
            prefixes: self.prefixes.clone(),
            axioms: Vec::new(),
        }
    }

    pub fn ontology_iri(&self) -> Option<&Iri> {
        self.ontology_iri.as_ref()
    }

    pub fn set_ontology_iri(&mut self, iri: Option<Iri>) {
        self.ontology_iri = iri;
    }

    pub fn version_iri(&self) -> Option<&Iri> {
        self.version_iri.as_ref()
    }

    pub fn set_version_iri(&mut self, iri: Option<Iri>) {
        self.version_iri = iri;
    }

    /// The IRIs of the imported ontologies.
    pub fn imports(&self) -> &BTreeSet<Iri> {
        &self.imports
    }

    /// Adds an import. Returns `false` if it was already there.
    pub fn add_import(&mut self, iri: Iri) -> bool {
        self.imports.insert(iri)
    }

    pub fn remove_import(&mut self, iri: &Iri) -> bool {
        self.imports.remove(iri)
    }

    /// The annotations of the ontology itself.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    pub fn prefixes_mut(&mut self) -> &mut PrefixMap {
        &mut self.prefixes
    }

    /// Binds `prefix` to `namespace`, dropping the bindings it conflicts with.
    pub fn set_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix, namespace);
    }

    /// Appends an axiom.
    ///
    /// Returns `false` and leaves the ontology untouched if the axiom [is empty](Axiom::is_empty).
    pub fn add_axiom(&mut self, axiom: impl Into<SharedAxiom>) -> bool {
        self.try_add_axiom(axiom).is_ok()
    }

    /// Appends an axiom or fails with [`OntologyError::InvalidAxiom`] if it [is empty](Axiom::is_empty).
    pub fn try_add_axiom(&mut self, axiom: impl Into<SharedAxiom>) -> Result<(), OntologyError> {
        let axiom = axiom.into();
        if axiom.axiom().is_empty() {
            debug!(kind = %axiom.kind(), "rejected axiom without operands");
            return Err(OntologyError::InvalidAxiom { kind: axiom.kind() });
        }
        self.axioms.push(axiom);
        Ok(())
    }

    /// Removes the given axiom handle.
    ///
    /// Removal is by identity: an equal axiom held by another [`Arc`] is not removed.
    pub fn remove_axiom(&mut self, axiom: &SharedAxiom) -> bool {
        if let Some(position) = self.axioms.iter().position(|a| Arc::ptr_eq(a, axiom)) {
            self.axioms.remove(position);
            true
        } else {
            false
        }
    }

    /// Checks if an axiom equal to `axiom` (ignoring annotations) is in the ontology.
    pub fn contains_axiom(&self, axiom: &Axiom) -> bool {
        self.axioms.iter().any(|a| a.axiom() == axiom)
    }

    /// The axioms, in insertion order.
    pub fn axioms(&self) -> &[SharedAxiom] {
        &self.axioms
    }

    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    fn declared<T: Ord + Clone>(&self, select: impl Fn(&Entity) -> Option<&T>) -> BTreeSet<T> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.axiom() {
                Axiom::Declaration(entity) => select(entity).cloned(),
                _ => None,
            })
            .collect()
    }

    /// All declared entities.
    pub fn entities(&self) -> BTreeSet<Entity> {
        self.declared(|entity| Some(entity))
    }

    pub fn classes(&self) -> BTreeSet<Class> {
        self.declared(|entity| match entity {
            Entity::Class(class) => Some(class),
            _ => None,
        })
    }

    pub fn datatypes(&self) -> BTreeSet<Datatype> {
        self.declared(|entity| match entity {
            Entity::Datatype(datatype) => Some(datatype),
            _ => None,
        })
    }

    pub fn object_properties(&self) -> BTreeSet<ObjectProperty> {
        self.declared(|entity| match entity {
            Entity::ObjectProperty(property) => Some(property),
            _ => None,
        })
    }

    pub fn data_properties(&self) -> BTreeSet<DataProperty> {
        self.declared(|entity| match entity {
            Entity::DataProperty(property) => Some(property),
            _ => None,
        })
    }

    pub fn annotation_properties(&self) -> BTreeSet<AnnotationProperty> {
        self.declared(|entity| match entity {
            Entity::AnnotationProperty(property) => Some(property),
            _ => None,
        })
    }

    /// The declared named individuals.
    pub fn individuals(&self) -> BTreeSet<NamedIndividual> {
        self.declared(|entity| match entity {
            Entity::NamedIndividual(individual) => Some(individual),
            _ => None,
        })
    }

    /// The axioms with the given tag.
    pub fn axioms_of_kind(&self, kind: AxiomKind) -> Vec<SharedAxiom> {
        self.axioms
            .iter()
            .filter(|axiom| axiom.kind() == kind)
            .cloned()
            .collect()
    }

    fn axioms_in_category(&self, category: AxiomCategory) -> Vec<SharedAxiom> {
        self.axioms
            .iter()
            .filter(|axiom| axiom.kind().category() == category)
            .cloned()
            .collect()
    }

    pub fn declaration_axioms(&self) -> Vec<SharedAxiom> {
        self.axioms_in_category(AxiomCategory::Declaration)
    }

    pub fn class_axioms(&self) -> Vec<SharedAxiom> {
        self.axioms_in_category(AxiomCategory::Class)
    }

    pub fn object_property_axioms(&self) -> Vec<SharedAxiom> {
        self.axioms_in_category(AxiomCategory::ObjectProperty)
    }

    pub fn data_property_axioms(&self) -> Vec<SharedAxiom> {
        self.axioms_in_category(AxiomCategory::DataProperty)
    }

    pub fn assertion_axioms(&self) -> Vec<SharedAxiom> {
        self.axioms_in_category(AxiomCategory::Assertion)
    }

    pub fn annotation_axioms(&self) -> Vec<SharedAxiom> {
        self.axioms_in_category(AxiomCategory::Annotation)
    }

    /// Declares a new named individual and asserts it is a member of `class`.
    ///
    /// The declaration and the class assertion are appended in that order.
    pub fn create_individual(&mut self, class: &Class, iri: impl Into<Iri>) -> NamedIndividual {
        let individual = NamedIndividual::new(iri);
        self.axioms
            .push(Axiom::declaration(individual.clone()).into());
        self.axioms
            .push(Axiom::class_assertion(class.clone(), individual.clone()).into());
        individual
    }

    pub fn add_class_assertion(
        &mut self,
        class: impl Into<Arc<ClassExpression>>,
        individual: impl Into<Individual>,
    ) {
        self.axioms
            .push(Axiom::class_assertion(class, individual).into());
    }

    pub fn add_object_property_assertion(
        &mut self,
        property: impl Into<ObjectPropertyExpression>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) {
        self.axioms
            .push(Axiom::object_property_assertion(property, source, target).into());
    }

    pub fn add_data_property_assertion(
        &mut self,
        property: DataProperty,
        source: impl Into<Individual>,
        target: impl Into<Literal>,
    ) {
        self.axioms
            .push(Axiom::data_property_assertion(property, source, target).into());
    }

    /// The individuals asserted to have `value` for `property`, in axiom order.
    pub fn search_by_data_property(
        &self,
        property: &DataProperty,
        value: &Literal,
    ) -> Vec<Individual> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.axiom() {
                Axiom::DataPropertyAssertion {
                    property: p,
                    source,
                    target,
                } if p == property && target == value => Some(source.clone()),
                _ => None,
            })
            .collect()
    }

    /// The individuals asserted to be related to `target` by `property`, in axiom order.
    ///
    /// Only assertions using `property` itself match, not the ones using its inverse.
    pub fn search_by_object_property(
        &self,
        property: &ObjectProperty,
        target: &Individual,
    ) -> Vec<Individual> {
        self.object_property_assertions()
            .filter_map(|(p, source, t)| {
                (p.as_plain() == Some(property) && t == target).then(|| source.clone())
            })
            .collect()
    }

    /// The `(property, source, target)` triples of the object property assertions.
    pub fn object_property_assertions(
        &self,
    ) -> impl Iterator<Item = (&ObjectPropertyExpression, &Individual, &Individual)> {
        self.axioms.iter().filter_map(|axiom| match axiom.axiom() {
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => Some((property, source, target)),
            _ => None,
        })
    }

    /// The class expressions `individual` is asserted to belong to, in axiom order.
    pub fn classes_for_individual(&self, individual: &Individual) -> Vec<Arc<ClassExpression>> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.axiom() {
                Axiom::ClassAssertion {
                    class,
                    individual: i,
                } if i == individual => Some(Arc::clone(class)),
                _ => None,
            })
            .collect()
    }

    /// The individuals asserted to belong to the named class `class`.
    pub fn individuals_of_class(&self, class: &Class) -> BTreeSet<Individual> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.axiom() {
                Axiom::ClassAssertion {
                    class: c,
                    individual,
                } if c.as_class() == Some(class) => Some(individual.clone()),
                _ => None,
            })
            .collect()
    }

    /// The values asserted for `property` on `individual`, in axiom order.
    pub fn data_property_values(
        &self,
        individual: &Individual,
        property: &DataProperty,
    ) -> Vec<Literal> {
        self.axioms
            .iter()
            .filter_map(|axiom| match axiom.axiom() {
                Axiom::DataPropertyAssertion {
                    property: p,
                    source,
                    target,
                } if p == property && source == individual => Some(target.clone()),
                _ => None,
            })
            .collect()
    }

    /// The targets of the assertions of `property` from `individual`, in axiom order.
    pub fn object_property_values(
        &self,
        individual: &Individual,
        property: &ObjectProperty,
    ) -> Vec<Individual> {
        self.object_property_assertions()
            .filter_map(|(p, source, target)| {
                (p.as_plain() == Some(property) && source == individual).then(|| target.clone())
            })
            .collect()
    }

    /// Object property assertions seen as undirected edges between individuals.
    fn individual_adjacency(&self) -> FxHashMap<&Individual, Vec<&Individual>> {
        let mut adjacency = FxHashMap::<_, Vec<_>>::default();
        for (_, source, target) in self.object_property_assertions() {
            adjacency.entry(source).or_default().push(target);
            adjacency.entry(target).or_default().push(source);
        }
        adjacency
    }

    /// The individuals reachable from `individual` in at most `depth` object property assertions.
    ///
    /// Assertions are followed in both directions. `individual` itself is never part of the result.
    pub fn neighbors(&self, individual: &Individual, depth: usize) -> BTreeSet<Individual> {
        let adjacency = self.individual_adjacency();
        let mut visited = FxHashSet::default();
        visited.insert(individual);
        let mut queue = VecDeque::from([(individual, 0)]);
        let mut neighbors = BTreeSet::new();
        while let Some((current, distance)) = queue.pop_front() {
            if distance == depth {
                continue;
            }
            for &next in adjacency.get(current).into_iter().flatten() {
                if visited.insert(next) {
                    neighbors.insert(next.clone());
                    queue.push_back((next, distance + 1));
                }
            }
        }
        neighbors
    }

    /// Checks if `to` is reachable from `from` through object property assertions followed in both directions.
    pub fn has_path(&self, from: &Individual, to: &Individual) -> bool {
        if from == to {
            return true;
        }
        let adjacency = self.individual_adjacency();
        let mut visited = FxHashSet::default();
        visited.insert(from);
        let mut queue = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            for &next in adjacency.get(current).into_iter().flatten() {
                if next == to {
                    return true;
                }
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    pub fn statistics(&self) -> OntologyStatistics {
        let mut statistics = OntologyStatistics {
            ontology_iri: self.ontology_iri.clone(),
            axiom_count: self.axioms.len(),
            import_count: self.imports.len(),
            ..OntologyStatistics::default()
        };
        for entity in self.entities() {
            match entity {
                Entity::Class(_) => statistics.class_count += 1,
                Entity::Datatype(_) => statistics.datatype_count += 1,
                Entity::ObjectProperty(_) => statistics.object_property_count += 1,
                Entity::DataProperty(_) => statistics.data_property_count += 1,
                Entity::AnnotationProperty(_) => statistics.annotation_property_count += 1,
                Entity::NamedIndividual(_) => statistics.individual_count += 1,
            }
        }
        statistics
    }

    /// Adds the content of `other` to this ontology.
    ///
    /// Imports and ontology annotations are merged, prefixes of `other` are only added when
    /// neither their prefix nor their namespace is already bound, axioms are appended.
    pub fn merge(&mut self, other: &Self) {
        self.imports.extend(other.imports.iter().cloned());
        for annotation in &other.annotations {
            if !self.annotations.contains(annotation) {
                self.annotations.push(annotation.clone());
            }
        }
        for (prefix, namespace) in other.prefixes.iter() {
            if self.prefixes.namespace(prefix).is_none() && self.prefixes.prefix(namespace).is_none()
            {
                self.prefixes.insert(prefix, namespace);
            }
        }
        self.axioms.extend(other.axioms.iter().cloned());
        debug!(
            merged = other.axioms.len(),
            total = self.axioms.len(),
            "merged ontology"
        );
    }
}

impl fmt::Display for Ontology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(iri) = &self.ontology_iri {
            write!(f, "Ontology({iri})")?;
        } else {
            f.write_str("Ontology(anonymous)")?;
        }
        write!(f, " [{} axioms]", self.axioms.len())
    }
}

impl Extend<SharedAxiom> for Ontology {
    fn extend<I: IntoIterator<Item = SharedAxiom>>(&mut self, iter: I) {
        for axiom in iter {
            self.add_axiom(axiom);
        }
    }
}

impl Extend<Axiom> for Ontology {
    fn extend<I: IntoIterator<Item = Axiom>>(&mut self, iter: I) {
        for axiom in iter {
            self.add_axiom(axiom);
        }
    }
}

impl Extend<AnnotatedAxiom> for Ontology {
    fn extend<I: IntoIterator<Item = AnnotatedAxiom>>(&mut self, iter: I) {
        for axiom in iter {
            self.add_axiom(axiom);
        }
    }
}

/// Counts describing an [`Ontology`], see [`Ontology::statistics`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OntologyStatistics {
    pub ontology_iri: Option<Iri>,
    pub axiom_count: usize,
    pub class_count: usize,
    pub object_property_count: usize,
    pub data_property_count: usize,
    pub annotation_property_count: usize,
    pub individual_count: usize,
    pub datatype_count: usize,
    pub import_count: usize,
}

impl fmt::Display for OntologyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ontology_iri {
            Some(iri) => writeln!(f, "Ontology: {iri}")?,
            None => writeln!(f, "Ontology: anonymous")?,
        }
        writeln!(f, "Axioms: {}", self.axiom_count)?;
        writeln!(f, "Classes: {}", self.class_count)?;
        writeln!(f, "Object properties: {}", self.object_property_count)?;
        writeln!(f, "Data properties: {}", self.data_property_count)?;
        writeln!(f, "Annotation properties: {}", self.annotation_property_count)?;
        writeln!(f, "Individuals: {}", self.individual_count)?;
        writeln!(f, "Datatypes: {}", self.datatype_count)?;
        write!(f, "Imports: {}", self.import_count)
    }
}
