use crate::criteria::{FilterCriteria, Traversal};
use crate::error::FilterError;
use crate::graph::IndividualGraph;
use crate::result::FilterResult;
use crate::sample::sample;
use oxontology::{
    AnnotatedAxiom, AnnotationSubject, Axiom, AxiomCategory, Entity, Individual, Iri,
    NamedIndividual, Ontology, OntologyError, SharedAxiom, Signature,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::debug;

/// Namespaces whose entities are never declared in an extracted ontology.
const BUILT_IN_NAMESPACES: [&str; 4] = [
    "http://www.w3.org/2001/XMLSchema#",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    "http://www.w3.org/2000/01/rdf-schema#",
    "http://www.w3.org/2002/07/owl#",
];

/// Extracts sub-ontologies around some individuals of an [`Ontology`].
///
/// Every extraction first resolves a set of named individuals, then copies the axioms using
/// them into a fresh ontology holding the source metadata:
/// 1. the axioms referencing one of the individuals, and the class assertions of the other
///    individuals those axioms reference;
/// 2. the class axioms mentioning a class used so far, if `include_class_hierarchy` is set;
/// 3. the object and data property axioms mentioning a property used so far, if
///    `include_property_hierarchy` is set;
/// 4. the declarations of the used entities, if `include_declarations` is set.
///    Missing declarations are created and appended.
///
/// Axioms mentioning an excluded individual are skipped by every step, so excluded individuals
/// never show up in the result, even as a boundary individual.
/// The custom predicate of the criteria, if any, then drops the axioms it rejects.
/// Copied axioms keep their source order and are shared with the source ontology.
///
/// The source ontology is never modified.
///
/// ```
/// use oxontology::{Class, Iri, NamedIndividual, ObjectProperty, Ontology};
/// use oxsubgraph::OntologyFilter;
///
/// let ex = |name: &str| Iri::new_unchecked(format!("http://example.org/{name}"));
/// let mut ontology = Ontology::default();
/// let patient = Class::new(ex("Patient"));
/// let alice = ontology.create_individual(&patient, ex("alice"));
/// let bob = ontology.create_individual(&patient, ex("bob"));
/// ontology.add_object_property_assertion(ObjectProperty::new(ex("knows")), alice, bob);
/// ontology.create_individual(&patient, ex("carol"));
///
/// let result = OntologyFilter::new(&ontology)
///     .with_individuals([ex("alice")])
///     .with_max_depth(1)
///     .execute();
/// assert_eq!(result.filtered_individual_count, 2);
/// assert!(!result.ontology.individuals().contains(&NamedIndividual::new(ex("carol"))));
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct OntologyFilter<'a> {
    ontology: &'a Ontology,
    criteria: FilterCriteria,
}

impl<'a> OntologyFilter<'a> {
    /// Creates a filter over `ontology` with the default criteria.
    pub fn new(ontology: &'a Ontology) -> Self {
        Self::with_criteria(ontology, FilterCriteria::default())
    }

    pub fn with_criteria(ontology: &'a Ontology, criteria: FilterCriteria) -> Self {
        Self { ontology, criteria }
    }

    /// The source ontology.
    pub fn ontology(&self) -> &'a Ontology {
        self.ontology
    }

    /// The criteria accumulated by the builder methods.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn with_individuals(mut self, individuals: impl IntoIterator<Item = Iri>) -> Self {
        self.criteria.include_individuals.extend(individuals);
        self
    }

    /// Selects the individuals asserted to be members of these classes.
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = Iri>) -> Self {
        self.criteria.include_classes.extend(classes);
        self
    }

    pub fn exclude_individuals(mut self, individuals: impl IntoIterator<Item = Iri>) -> Self {
        self.criteria.exclude_individuals.extend(individuals);
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.criteria.max_depth = Some(depth);
        self
    }

    /// Only keeps the individuals having one of `values` for `property`.
    ///
    /// Calling it with no value only requires `property` to be used by the individual.
    pub fn with_property_values(
        mut self,
        property: Iri,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.criteria
            .property_filters
            .entry(property)
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_custom_filter(
        mut self,
        predicate: impl Fn(&AnnotatedAxiom) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.criteria.custom_filter = Some(Arc::new(predicate));
        self
    }

    pub fn include_class_hierarchy(mut self, include: bool) -> Self {
        self.criteria.include_class_hierarchy = include;
        self
    }

    pub fn include_property_hierarchy(mut self, include: bool) -> Self {
        self.criteria.include_property_hierarchy = include;
        self
    }

    /// Whether to copy and create the declarations of the used entities, individuals included.
    pub fn include_declarations(mut self, include: bool) -> Self {
        self.criteria.include_declarations = include;
        self
    }

    /// Only follows object property assertions from their source to their target.
    pub fn directed(mut self, directed: bool) -> Self {
        self.criteria.traversal = if directed {
            Traversal::Directed
        } else {
            Traversal::Undirected
        };
        self
    }

    /// Runs the accumulated criteria, like [`apply_filter`](Self::apply_filter) does.
    pub fn execute(&self) -> FilterResult {
        self.apply_filter(&self.criteria)
    }

    /// Extracts the sub-ontology of the given individuals.
    pub fn filter_by_individuals(&self, individuals: &BTreeSet<Iri>) -> FilterResult {
        self.create_filtered_ontology(individuals.clone(), &self.criteria)
    }

    /// Extracts the sub-ontology of the asserted members of the given classes.
    pub fn filter_by_classes(&self, classes: &BTreeSet<Iri>) -> FilterResult {
        self.create_filtered_ontology(self.individuals_of_classes(classes), &self.criteria)
    }

    /// Extracts the sub-ontology of the individuals having one of `values` for `property`.
    ///
    /// Values are matched against literal lexical forms and target individual IRIs.
    /// With no value, every individual using `property` is selected.
    pub fn filter_by_property_value(
        &self,
        property: &Iri,
        values: &BTreeSet<String>,
    ) -> FilterResult {
        let filters = BTreeMap::from([(property.clone(), values.clone())]);
        let property_values = self.property_values();
        let individuals = self
            .individual_iris()
            .into_iter()
            .filter(|individual| matches_property_filters(&property_values, individual, &filters))
            .collect();
        self.create_filtered_ontology(individuals, &self.criteria)
    }

    /// Extracts the sub-ontology of the individuals at most `depth` assertions away from `seeds`.
    pub fn extract_neighborhood(&self, seeds: &BTreeSet<Iri>, depth: usize) -> FilterResult {
        self.create_filtered_ontology(self.neighborhood(seeds, depth), &self.criteria)
    }

    /// Extracts the sub-ontology of the named individuals on a shortest path from `start` to `end`.
    ///
    /// If there is no such path, the result holds no individual and only the source metadata.
    pub fn extract_path(&self, start: &Iri, end: &Iri) -> FilterResult {
        let individuals = self
            .find_path(start, end)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|individual| individual.iri().cloned())
            .collect();
        self.create_filtered_ontology(individuals, &self.criteria)
    }

    /// Extracts the sub-ontology of `n` individuals picked at random.
    ///
    /// The picks only depend on the ontology, `n` and `seed`.
    /// If the ontology has at most `n` individuals, all of them are picked.
    pub fn random_sample(&self, n: usize, seed: u64) -> FilterResult {
        let individuals = sample(self.individual_iris().into_iter().collect(), n, seed);
        self.create_filtered_ontology(individuals.into_iter().collect(), &self.criteria)
    }

    /// Extracts the sub-ontology selected by `criteria`.
    ///
    /// The selection is made in this order: the included individuals and the members of the
    /// included classes, expanded to their neighborhood if `max_depth` is set, minus the
    /// excluded individuals, restricted to the individuals matching the property filters.
    pub fn apply_filter(&self, criteria: &FilterCriteria) -> FilterResult {
        let mut individuals = criteria.include_individuals.clone();
        individuals.extend(self.individuals_of_classes(&criteria.include_classes));
        debug!(selected = individuals.len(), "selected individuals");
        if let Some(depth) = criteria.max_depth {
            individuals = IndividualGraph::new(self.ontology, criteria.traversal)
                .neighborhood(&individuals, depth);
            debug!(selected = individuals.len(), depth, "expanded selection");
        }
        individuals.retain(|individual| !criteria.exclude_individuals.contains(individual));
        if !criteria.property_filters.is_empty() {
            let property_values = self.property_values();
            individuals.retain(|individual| {
                matches_property_filters(&property_values, individual, &criteria.property_filters)
            });
            debug!(selected = individuals.len(), "applied property filters");
        }
        self.create_filtered_ontology(individuals, criteria)
    }

    /// The named individuals of the ontology: the declared ones and the ones used by assertions.
    pub fn individual_iris(&self) -> BTreeSet<Iri> {
        let mut individuals = self
            .ontology
            .individuals()
            .into_iter()
            .map(NamedIndividual::into_iri)
            .collect::<BTreeSet<_>>();
        for axiom in self.ontology.axioms() {
            if axiom.kind().category() == AxiomCategory::Assertion {
                individuals.extend(
                    axiom
                        .axiom()
                        .signature()
                        .named_individuals
                        .into_iter()
                        .map(NamedIndividual::into_iri),
                );
            }
        }
        individuals
    }

    /// The named individuals asserted to be members of one of `classes`.
    pub fn individuals_of_classes(&self, classes: &BTreeSet<Iri>) -> BTreeSet<Iri> {
        if classes.is_empty() {
            return BTreeSet::new();
        }
        self.ontology
            .axioms()
            .iter()
            .filter_map(|axiom| match axiom.axiom() {
                Axiom::ClassAssertion { class, individual } => class
                    .as_class()
                    .filter(|class| classes.contains(class.iri()))
                    .and(individual.iri())
                    .cloned(),
                _ => None,
            })
            .collect()
    }

    /// The `seeds` and the named individuals at most `depth` assertions away from them.
    pub fn neighborhood(&self, seeds: &BTreeSet<Iri>, depth: usize) -> BTreeSet<Iri> {
        IndividualGraph::new(self.ontology, self.criteria.traversal).neighborhood(seeds, depth)
    }

    /// A shortest path of individuals from `start` to `end`, both included.
    ///
    /// Anonymous individuals may be part of the path.
    pub fn find_path(&self, start: &Iri, end: &Iri) -> Option<Vec<Individual>> {
        IndividualGraph::new(self.ontology, self.criteria.traversal)
            .shortest_path(&start.clone().into(), &end.clone().into())
    }

    /// Turns user provided names into IRIs.
    ///
    /// A `prefix:local` name whose prefix is declared by the ontology is expanded, any other
    /// name must be a full IRI.
    pub fn resolve_names(
        &self,
        names: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<BTreeSet<Iri>, FilterError> {
        let prefixes = self.ontology.prefixes();
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                match name.split_once(':') {
                    Some((prefix, _)) if prefixes.namespace(prefix).is_some() => {
                        Ok(prefixes.expand(name)?)
                    }
                    _ => Ok(Iri::new(name).map_err(OntologyError::from)?),
                }
            })
            .collect()
    }

    /// The values of the assertions of each named individual, by property IRI.
    ///
    /// Data values are lexical forms, object values are target IRIs.
    fn property_values(&self) -> FxHashMap<&'a Iri, Vec<(&'a Iri, &'a str)>> {
        let mut values = FxHashMap::<_, Vec<_>>::default();
        for axiom in self.ontology.axioms() {
            match axiom.axiom() {
                Axiom::DataPropertyAssertion {
                    property,
                    source,
                    target,
                } => {
                    if let Some(source) = source.iri() {
                        values
                            .entry(source)
                            .or_default()
                            .push((property.iri(), target.lexical_form()));
                    }
                }
                Axiom::ObjectPropertyAssertion {
                    property,
                    source,
                    target,
                } => {
                    if let (Some(property), Some(source), Some(target)) =
                        (property.as_plain(), source.iri(), target.iri())
                    {
                        values
                            .entry(source)
                            .or_default()
                            .push((property.iri(), target.as_str()));
                    }
                }
                _ => (),
            }
        }
        values
    }

    fn create_filtered_ontology(
        &self,
        mut individuals: BTreeSet<Iri>,
        criteria: &FilterCriteria,
    ) -> FilterResult {
        let excluded = &criteria.exclude_individuals;
        individuals.retain(|individual| !excluded.contains(individual));
        let source = self.ontology.axioms();
        let signatures = source
            .iter()
            .map(|axiom| axiom.signature())
            .collect::<Vec<_>>();
        // Axioms mentioning an excluded individual are never copied
        let blocked = source
            .iter()
            .zip(&signatures)
            .map(|(axiom, signature)| mentions_individuals(axiom, signature, excluded))
            .collect::<Vec<_>>();
        let mut selected = vec![false; source.len()];
        let mut referenced = Signature::default();

        let mut boundary = BTreeSet::new();
        for (i, (axiom, signature)) in source.iter().zip(&signatures).enumerate() {
            if !blocked[i] && references_individuals(axiom, signature, &individuals) {
                selected[i] = true;
                referenced.extend(signature);
                boundary.extend(
                    signature
                        .named_individuals
                        .iter()
                        .map(NamedIndividual::iri)
                        .filter(|iri| !individuals.contains(*iri)),
                );
            }
        }
        if !boundary.is_empty() {
            for (i, axiom) in source.iter().enumerate() {
                if let Axiom::ClassAssertion { individual, .. } = axiom.axiom() {
                    if !selected[i]
                        && !blocked[i]
                        && individual.iri().is_some_and(|iri| boundary.contains(iri))
                    {
                        selected[i] = true;
                        referenced.extend(&signatures[i]);
                    }
                }
            }
        }
        debug!(
            individuals = individuals.len(),
            boundary = boundary.len(),
            axioms = count(&selected),
            "selected individual axioms"
        );

        if criteria.include_class_hierarchy {
            let classes = referenced.classes.clone();
            for (i, axiom) in source.iter().enumerate() {
                if !selected[i]
                    && !blocked[i]
                    && axiom.kind().category() == AxiomCategory::Class
                    && !signatures[i].classes.is_disjoint(&classes)
                {
                    selected[i] = true;
                    referenced.extend(&signatures[i]);
                }
            }
            debug!(axioms = count(&selected), "added class hierarchy");
        }

        if criteria.include_property_hierarchy {
            let object_properties = referenced.object_properties.clone();
            let data_properties = referenced.data_properties.clone();
            for (i, axiom) in source.iter().enumerate() {
                let mentions_property = match axiom.kind().category() {
                    AxiomCategory::ObjectProperty => {
                        !signatures[i].object_properties.is_disjoint(&object_properties)
                    }
                    AxiomCategory::DataProperty => {
                        !signatures[i].data_properties.is_disjoint(&data_properties)
                    }
                    _ => false,
                };
                if !selected[i] && !blocked[i] && mentions_property {
                    selected[i] = true;
                    referenced.extend(&signatures[i]);
                }
            }
            debug!(axioms = count(&selected), "added property hierarchy");
        }

        let mut created = Vec::new();
        if criteria.include_declarations {
            let entities = referenced.entities().collect::<BTreeSet<_>>();
            let mut declared = FxHashSet::default();
            for (i, axiom) in source.iter().enumerate() {
                let Axiom::Declaration(entity) = axiom.axiom() else {
                    continue;
                };
                if blocked[i] {
                    continue;
                }
                let included = match entity {
                    Entity::NamedIndividual(individual) => individuals.contains(individual.iri()),
                    _ => false,
                };
                if included || entities.contains(entity) {
                    selected[i] = true;
                    declared.insert(entity);
                }
            }
            created.extend(
                entities
                    .iter()
                    .filter(|entity| !declared.contains(entity) && !is_built_in(entity.iri()))
                    .map(|entity| SharedAxiom::from(Axiom::Declaration(entity.clone()))),
            );
            debug!(
                axioms = count(&selected),
                created = created.len(),
                "added declarations"
            );
        }

        let mut ontology = self.ontology.metadata_copy();
        let axioms = source
            .iter()
            .zip(selected)
            .filter_map(|(axiom, selected)| selected.then(|| Arc::clone(axiom)))
            .chain(created);
        match &criteria.custom_filter {
            Some(predicate) => ontology.extend(axioms.filter(|axiom| predicate(axiom))),
            None => ontology.extend(axioms),
        }
        debug!(
            individuals = individuals.len(),
            axioms = ontology.axiom_count(),
            "extracted ontology"
        );

        FilterResult {
            original_axiom_count: self.ontology.axiom_count(),
            filtered_axiom_count: ontology.axiom_count(),
            original_individual_count: self.individual_iris().len(),
            filtered_individual_count: individuals.len(),
            included_individuals: individuals,
            ontology,
        }
    }
}

/// Whether `axiom` is about one of `individuals`.
///
/// Declarations are left to the declaration pass.
fn references_individuals(
    axiom: &AnnotatedAxiom,
    signature: &Signature,
    individuals: &BTreeSet<Iri>,
) -> bool {
    !matches!(axiom.axiom(), Axiom::Declaration(_))
        && mentions_individuals(axiom, signature, individuals)
}

fn mentions_individuals(
    axiom: &AnnotatedAxiom,
    signature: &Signature,
    individuals: &BTreeSet<Iri>,
) -> bool {
    if individuals.is_empty() {
        return false;
    }
    signature
        .named_individuals
        .iter()
        .any(|individual| individuals.contains(individual.iri()))
        || matches!(
            axiom.axiom(),
            Axiom::AnnotationAssertion {
                subject: AnnotationSubject::Iri(subject),
                ..
            } if individuals.contains(subject)
        )
}

fn matches_property_filters(
    property_values: &FxHashMap<&Iri, Vec<(&Iri, &str)>>,
    individual: &Iri,
    filters: &BTreeMap<Iri, BTreeSet<String>>,
) -> bool {
    let values = property_values
        .get(individual)
        .map_or(&[][..], Vec::as_slice);
    filters.iter().all(|(property, allowed)| {
        values
            .iter()
            .any(|(p, value)| *p == property && (allowed.is_empty() || allowed.contains(*value)))
    })
}

fn is_built_in(iri: &Iri) -> bool {
    BUILT_IN_NAMESPACES
        .iter()
        .any(|namespace| iri.as_str().starts_with(namespace))
}

fn count(selected: &[bool]) -> usize {
    selected.iter().filter(|selected| **selected).count()
}
