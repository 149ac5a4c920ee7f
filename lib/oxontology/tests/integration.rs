//! Integration tests for oxontology crate.

use oxontology::{
    AnnotatedAxiom, Annotation, AnnotationProperty, AnonymousIndividual, Axiom, AxiomCategory,
    AxiomKind, Class, ClassExpression, DataProperty, DataRange, Datatype, Entity, Individual, Iri,
    Literal, NamedIndividual, ObjectProperty, ObjectPropertyExpression, Ontology, OntologyError,
    SharedAxiom,
};
use oxrdf::vocab::xsd;
use std::collections::BTreeSet;
use std::sync::Arc;

fn ex(name: &str) -> Iri {
    Iri::new(format!("http://example.org/{name}")).unwrap()
}

fn individual(name: &str) -> Individual {
    NamedIndividual::new(ex(name)).into()
}

fn hospital() -> Ontology {
    let mut ontology = Ontology::with_iri("http://example.org/hospital").unwrap();
    let patient = Class::new(ex("Patient"));
    let disease = Class::new(ex("Disease"));
    let has_diagnosis = ObjectProperty::new(ex("hasDiagnosis"));
    let age = DataProperty::new(ex("age"));
    ontology.add_axiom(Axiom::declaration(patient.clone()));
    ontology.add_axiom(Axiom::declaration(disease.clone()));
    ontology.add_axiom(Axiom::declaration(has_diagnosis.clone()));
    ontology.add_axiom(Axiom::declaration(age.clone()));
    ontology.create_individual(&patient, ex("patient001"));
    ontology.create_individual(&patient, ex("patient002"));
    ontology.create_individual(&disease, ex("diabetes"));
    ontology.add_object_property_assertion(
        has_diagnosis,
        individual("patient001"),
        individual("diabetes"),
    );
    ontology.add_data_property_assertion(age.clone(), individual("patient001"), 54);
    ontology.add_data_property_assertion(age, individual("patient002"), 31);
    ontology
}

// =============================================================================
// Construction and metadata
// =============================================================================

#[test]
fn test_create_empty_ontology() {
    let ontology = Ontology::default();
    assert!(ontology.ontology_iri().is_none());
    assert!(ontology.version_iri().is_none());
    assert_eq!(ontology.axiom_count(), 0);
    assert!(ontology.classes().is_empty());
}

#[test]
fn test_ontology_with_invalid_iri() {
    assert!(matches!(
        Ontology::with_iri("not an iri"),
        Err(OntologyError::InvalidIri(_))
    ));
}

#[test]
fn test_metadata() {
    let mut ontology = Ontology::new(Some(ex("onto")));
    ontology.set_version_iri(Some(ex("onto/1.0")));
    assert!(ontology.add_import(ex("base")));
    assert!(!ontology.add_import(ex("base")));
    ontology.add_annotation(Annotation::new(
        AnnotationProperty::new(ex("comment")),
        Literal::new_language_tagged("Hospital data", "en"),
    ));
    ontology.set_prefix("ex", "http://example.org/");

    let copy = ontology.metadata_copy();
    assert_eq!(copy.ontology_iri(), Some(&ex("onto")));
    assert_eq!(copy.version_iri(), Some(&ex("onto/1.0")));
    assert_eq!(copy.imports().len(), 1);
    assert_eq!(copy.annotations().len(), 1);
    assert_eq!(copy.prefixes().namespace("ex"), Some("http://example.org/"));
    assert!(copy.is_empty());

    assert!(ontology.remove_import(&ex("base")));
    assert!(ontology.imports().is_empty());
}

#[test]
fn test_prefix_expansion() {
    let mut ontology = Ontology::default();
    ontology.set_prefix("ex", "http://example.org/");
    let iri = ontology.prefixes().expand("ex:Patient").unwrap();
    assert_eq!(iri, ex("Patient"));
    assert_eq!(ontology.prefixes().abbreviate(&ex("Patient")).as_deref(), Some("ex:Patient"));
    assert!(matches!(
        ontology.prefixes().expand("unknown:Patient"),
        Err(OntologyError::UnknownPrefix { .. })
    ));
}

// =============================================================================
// Axiom storage
// =============================================================================

#[test]
fn test_insertion_order_is_preserved() {
    let ontology = hospital();
    let kinds = ontology
        .axioms()
        .iter()
        .map(|axiom| axiom.kind())
        .collect::<Vec<_>>();
    assert_eq!(kinds[..4], [AxiomKind::Declaration; 4]);
    assert_eq!(kinds[4], AxiomKind::Declaration);
    assert_eq!(kinds[5], AxiomKind::ClassAssertion);
    assert_eq!(kinds.last(), Some(&AxiomKind::DataPropertyAssertion));
}

#[test]
fn test_empty_axiom_is_rejected_without_mutation() {
    let mut ontology = hospital();
    let count = ontology.axiom_count();
    assert!(!ontology.add_axiom(Axiom::DisjointClasses(Vec::new())));
    assert!(!ontology.add_axiom(Axiom::SubPropertyChainOf {
        property_chain: Vec::new(),
        super_property: ObjectProperty::new(ex("p")).into(),
    }));
    assert_eq!(ontology.axiom_count(), count);
}

#[test]
fn test_annotated_axiom_is_stored() {
    let mut ontology = Ontology::default();
    let axiom = AnnotatedAxiom::new(
        Axiom::subclass_of(Class::new(ex("Dog")), Class::new(ex("Animal"))),
        vec![Annotation::new(
            AnnotationProperty::new(ex("source")),
            ex("zoology"),
        )],
    );
    assert!(ontology.add_axiom(axiom));
    assert_eq!(ontology.axioms()[0].annotations().len(), 1);
    assert!(ontology.contains_axiom(&Axiom::subclass_of(
        Class::new(ex("Dog")),
        Class::new(ex("Animal"))
    )));
}

#[test]
fn test_remove_axiom_by_handle() {
    let mut ontology = hospital();
    let count = ontology.axiom_count();
    let first = Arc::clone(&ontology.axioms()[0]);
    let equal_copy = SharedAxiom::new(first.as_ref().clone());
    assert!(!ontology.remove_axiom(&equal_copy));
    assert!(ontology.remove_axiom(&first));
    assert_eq!(ontology.axiom_count(), count - 1);
    assert!(!ontology.remove_axiom(&first));
}

#[test]
fn test_extend() {
    let mut ontology = Ontology::default();
    ontology.extend([
        Axiom::declaration(Class::new(ex("A"))),
        Axiom::EquivalentClasses(Vec::new()),
        Axiom::declaration(Class::new(ex("B"))),
    ]);
    assert_eq!(ontology.axiom_count(), 2);
}

// =============================================================================
// Entity and axiom getters
// =============================================================================

#[test]
fn test_entity_getters() {
    let ontology = hospital();
    assert_eq!(
        ontology.classes(),
        BTreeSet::from([Class::new(ex("Disease")), Class::new(ex("Patient"))])
    );
    assert_eq!(ontology.object_properties().len(), 1);
    assert_eq!(ontology.data_properties().len(), 1);
    assert_eq!(ontology.individuals().len(), 3);
    assert!(ontology.annotation_properties().is_empty());
    assert!(ontology.datatypes().is_empty());
    assert_eq!(ontology.entities().len(), 7);
}

#[test]
fn test_undeclared_entities_are_not_listed() {
    let mut ontology = Ontology::default();
    ontology.add_class_assertion(Class::new(ex("Patient")), individual("p"));
    assert!(ontology.classes().is_empty());
    assert!(ontology.individuals().is_empty());
}

#[test]
fn test_axiom_getters_by_category() {
    let mut ontology = hospital();
    ontology.add_axiom(Axiom::subclass_of(Class::new(ex("Patient")), Class::new(ex("Person"))));
    ontology.add_axiom(Axiom::TransitiveObjectProperty(
        ObjectProperty::new(ex("partOf")).into(),
    ));
    ontology.add_axiom(Axiom::DataPropertyRange {
        property: DataProperty::new(ex("age")),
        range: Datatype::new(xsd::INTEGER).into(),
    });
    ontology.add_axiom(Axiom::annotation_assertion(
        AnnotationProperty::new(ex("label")),
        ex("patient001"),
        Literal::new_plain("Patient 1"),
    ));

    assert_eq!(ontology.declaration_axioms().len(), 7);
    assert_eq!(ontology.class_axioms().len(), 1);
    assert_eq!(ontology.object_property_axioms().len(), 1);
    assert_eq!(ontology.data_property_axioms().len(), 1);
    assert_eq!(ontology.assertion_axioms().len(), 6);
    assert_eq!(ontology.annotation_axioms().len(), 1);
    assert_eq!(ontology.axioms_of_kind(AxiomKind::ClassAssertion).len(), 3);
    for axiom in ontology.assertion_axioms() {
        assert_eq!(axiom.kind().category(), AxiomCategory::Assertion);
    }
}

// =============================================================================
// Assertion queries
// =============================================================================

#[test]
fn test_search_by_data_property() {
    let ontology = hospital();
    let age = DataProperty::new(ex("age"));
    assert_eq!(
        ontology.search_by_data_property(&age, &Literal::from(54)),
        vec![individual("patient001")]
    );
    assert!(
        ontology
            .search_by_data_property(&age, &Literal::new_plain("54"))
            .is_empty()
    );
}

#[test]
fn test_search_by_object_property() {
    let ontology = hospital();
    let has_diagnosis = ObjectProperty::new(ex("hasDiagnosis"));
    assert_eq!(
        ontology.search_by_object_property(&has_diagnosis, &individual("diabetes")),
        vec![individual("patient001")]
    );
    assert!(
        ontology
            .search_by_object_property(&has_diagnosis, &individual("patient001"))
            .is_empty()
    );
}

#[test]
fn test_class_membership_queries() {
    let ontology = hospital();
    assert_eq!(
        ontology.individuals_of_class(&Class::new(ex("Patient"))),
        BTreeSet::from([individual("patient001"), individual("patient002")])
    );
    let classes = ontology.classes_for_individual(&individual("diabetes"));
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0].as_class(), Some(&Class::new(ex("Disease"))));
}

#[test]
fn test_object_property_assertions_listing() {
    let ontology = hospital();
    let assertions = ontology.object_property_assertions().collect::<Vec<_>>();
    assert_eq!(assertions.len(), 1);
    let (property, source, target) = assertions[0];
    assert_eq!(property.base_property(), &ObjectProperty::new(ex("hasDiagnosis")));
    assert_eq!(source, &individual("patient001"));
    assert_eq!(target, &individual("diabetes"));
}

#[test]
fn test_anonymous_individuals_in_assertions() {
    let mut ontology = Ontology::default();
    let blank = AnonymousIndividual::new("b0").unwrap();
    let knows = ObjectProperty::new(ex("knows"));
    ontology.add_object_property_assertion(knows.clone(), individual("a"), blank.clone());
    ontology.add_object_property_assertion(
        ObjectPropertyExpression::inverse(knows),
        blank.clone(),
        individual("c"),
    );
    assert!(ontology.has_path(&individual("a"), &individual("c")));
    assert_eq!(
        ontology.neighbors(&individual("a"), 1),
        BTreeSet::from([Individual::from(blank)])
    );
}

// =============================================================================
// Statistics and merge
// =============================================================================

#[test]
fn test_statistics() {
    let ontology = hospital();
    let statistics = ontology.statistics();
    assert_eq!(statistics.axiom_count, ontology.axiom_count());
    assert_eq!(statistics.class_count, 2);
    assert_eq!(statistics.individual_count, 3);
    let text = statistics.to_string();
    assert!(text.starts_with("Ontology: <http://example.org/hospital>\n"));
    assert!(text.contains("Individuals: 3"));
    assert_eq!(text.lines().count(), 9);
}

#[test]
fn test_merge_shares_axioms() {
    let source = hospital();
    let mut target = Ontology::default();
    target.merge(&source);
    assert_eq!(target.axiom_count(), source.axiom_count());
    assert!(
        target
            .axioms()
            .iter()
            .zip(source.axioms())
            .all(|(a, b)| Arc::ptr_eq(a, b))
    );
}

// =============================================================================
// Expressions and display
// =============================================================================

#[test]
fn test_complex_class_expression_signature() {
    let expression = ClassExpression::intersection([
        Arc::new(ClassExpression::class(Class::new(ex("Patient")))),
        Arc::new(ClassExpression::DataSomeValuesFrom {
            property: DataProperty::new(ex("age")),
            filler: Arc::new(DataRange::DatatypeRestriction {
                datatype: Datatype::new(xsd::INTEGER),
                facets: vec![(
                    Iri::new_unchecked("http://www.w3.org/2001/XMLSchema#minInclusive"),
                    Literal::from(65),
                )],
            }),
        }),
    ]);
    let axiom = Axiom::equivalent_classes([
        Arc::new(ClassExpression::class(Class::new(ex("ElderlyPatient")))),
        Arc::new(expression),
    ]);
    let signature = axiom.signature();
    assert_eq!(signature.classes.len(), 2);
    assert_eq!(signature.data_properties.len(), 1);
    assert_eq!(signature.datatypes.len(), 1);
    assert_eq!(
        signature.entities().collect::<Vec<_>>()[0],
        Entity::Class(Class::new(ex("ElderlyPatient")))
    );
}

#[test]
fn test_shared_sub_expressions() {
    let shared = Arc::new(ClassExpression::some_values_from(
        ObjectProperty::new(ex("hasDiagnosis")),
        Class::new(ex("Disease")),
    ));
    let mut ontology = Ontology::default();
    ontology.add_axiom(Axiom::subclass_of(Class::new(ex("Sick")), Arc::clone(&shared)));
    ontology.add_axiom(Axiom::subclass_of(Class::new(ex("Patient")), Arc::clone(&shared)));
    assert_eq!(Arc::strong_count(&shared), 3);
}

#[test]
fn test_axiom_display() {
    let axiom = Axiom::class_assertion(Class::new(ex("Patient")), individual("patient001"));
    assert_eq!(
        axiom.to_string(),
        "ClassAssertion(<http://example.org/Patient> <http://example.org/patient001>)"
    );
    let axiom = Axiom::HasKey {
        class: Class::new(ex("Patient")).into(),
        object_properties: Vec::new(),
        data_properties: vec![DataProperty::new(ex("ssn"))],
    };
    assert_eq!(
        axiom.to_string(),
        "HasKey(<http://example.org/Patient> () (<http://example.org/ssn>))"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_axiom_serde() {
    let axiom = AnnotatedAxiom::from(Axiom::object_property_assertion(
        ObjectPropertyExpression::inverse(ObjectProperty::new(ex("hasDiagnosis"))),
        individual("diabetes"),
        AnonymousIndividual::new("visit").unwrap(),
    ))
    .with_annotation(Annotation::new(
        AnnotationProperty::new(ex("source")),
        Literal::new_language_tagged("dossier", "fr"),
    ));
    let json = serde_json::to_string(&axiom).unwrap();
    assert_eq!(serde_json::from_str::<AnnotatedAxiom>(&json).unwrap(), axiom);
}
