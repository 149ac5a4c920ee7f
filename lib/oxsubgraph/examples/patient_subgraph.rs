//! Patient Subgraph Example
//!
//! Builds a small hospital ontology and extracts sub-ontologies from it:
//! the data of one patient, the neighborhood of a disease, a path between
//! two individuals and a selection read from JSON.
//!
//! Run with: cargo run -p oxsubgraph --example patient_subgraph

use oxontology::{Axiom, Class, DataProperty, Iri, ObjectProperty, Ontology};
use oxsubgraph::{FilterCriteria, FilterResult, OntologyFilter};
use std::collections::BTreeSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Patient Subgraph Example ===\n");

    let ontology = hospital()?;
    println!("{}\n", ontology.statistics());

    let filter = OntologyFilter::new(&ontology);

    // Example 1: everything about one patient
    let names = filter.resolve_names(["ex:patient001"])?;
    print_result("Patient 001", &filter.filter_by_individuals(&names));

    // Example 2: who is close to diabetes?
    let seeds = filter.resolve_names(["ex:diabetes"])?;
    print_result(
        "Two steps around diabetes",
        &filter.extract_neighborhood(&seeds, 2),
    );

    // Example 3: how is Dr. Smith related to the flu?
    let path = filter.extract_path(
        &Iri::new("http://example.org/drSmith")?,
        &Iri::new("http://example.org/flu")?,
    );
    print_result("From Dr. Smith to the flu", &path);

    // Example 4: a selection stored as JSON, without schema axioms
    let criteria = FilterCriteria::from_json(
        r#"{
            "include_classes": ["http://example.org/Patient"],
            "exclude_individuals": ["http://example.org/patient003"],
            "property_filters": {"http://example.org/age": ["54"]},
            "include_class_hierarchy": false,
            "include_property_hierarchy": false
        }"#,
    )?;
    print_result("Patients aged 54", &filter.apply_filter(&criteria));

    // Example 5: the same kind of selection with the builder
    let result = OntologyFilter::new(&ontology)
        .with_classes([Iri::new("http://example.org/Patient")?])
        .with_custom_filter(|axiom| !matches!(axiom.axiom(), Axiom::Declaration(_)))
        .execute();
    print_result("Patients without declarations", &result);

    println!("=== All examples completed successfully! ===");
    Ok(())
}

fn hospital() -> Result<Ontology, Box<dyn std::error::Error>> {
    let mut ontology = Ontology::with_iri("http://example.org/hospital")?;
    ontology.set_prefix("ex", "http://example.org/");
    let ex = |name: &str| ontology.prefixes().expand(&format!("ex:{name}"));

    let person = Class::new(ex("Person")?);
    let patient = Class::new(ex("Patient")?);
    let doctor = Class::new(ex("Doctor")?);
    let disease = Class::new(ex("Disease")?);
    let has_diagnosis = ObjectProperty::new(ex("hasDiagnosis")?);
    let treats = ObjectProperty::new(ex("treats")?);
    let age = DataProperty::new(ex("age")?);
    let individuals = [
        (&patient, ex("patient001")?),
        (&patient, ex("patient002")?),
        (&patient, ex("patient003")?),
        (&doctor, ex("drSmith")?),
        (&disease, ex("diabetes")?),
        (&disease, ex("flu")?),
    ];

    for class in [&person, &patient, &doctor, &disease] {
        ontology.add_axiom(Axiom::declaration(class.clone()));
    }
    ontology.add_axiom(Axiom::declaration(has_diagnosis.clone()));
    ontology.add_axiom(Axiom::declaration(treats.clone()));
    ontology.add_axiom(Axiom::declaration(age.clone()));
    ontology.add_axiom(Axiom::subclass_of(patient.clone(), person.clone()));
    ontology.add_axiom(Axiom::subclass_of(doctor.clone(), person));

    let mut named = Vec::new();
    for (class, iri) in individuals {
        named.push(ontology.create_individual(class, iri));
    }
    let [patient001, patient002, patient003, dr_smith, diabetes, flu] = named
        .try_into()
        .map_err(|_| "unexpected number of individuals")?;

    ontology.add_object_property_assertion(has_diagnosis.clone(), patient001.clone(), diabetes);
    ontology.add_object_property_assertion(has_diagnosis.clone(), patient002.clone(), flu.clone());
    ontology.add_object_property_assertion(has_diagnosis, patient003.clone(), flu);
    ontology.add_object_property_assertion(treats.clone(), dr_smith.clone(), patient001.clone());
    ontology.add_object_property_assertion(treats, dr_smith, patient003.clone());
    ontology.add_data_property_assertion(age.clone(), patient001, 54);
    ontology.add_data_property_assertion(age.clone(), patient002, 31);
    ontology.add_data_property_assertion(age, patient003, 54);
    Ok(ontology)
}

fn print_result(title: &str, result: &FilterResult) {
    println!("--- {title} ---");
    println!("{result} ({:.0}% of the axioms)", result.axiom_ratio() * 100.);
    let names = result
        .included_individuals
        .iter()
        .map(|iri| {
            result
                .ontology
                .prefixes()
                .abbreviate(iri)
                .unwrap_or_else(|| iri.to_string())
        })
        .collect::<BTreeSet<_>>();
    println!("Individuals: {}", names.into_iter().collect::<Vec<_>>().join(", "));
    for axiom in result.ontology.axioms() {
        println!("  {axiom}");
    }
    println!();
}
