//! Checks of extraction properties over randomly generated ontologies.

use oxontology::{
    Axiom, Class, DataProperty, Individual, Iri, NamedIndividual, ObjectProperty, Ontology,
};
use oxsubgraph::OntologyFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

const SEEDS: [u64; 8] = [0, 1, 2, 3, 5, 8, 13, 21];

fn ex(name: &str) -> Iri {
    Iri::new(format!("http://example.org/{name}")).unwrap()
}

fn person(i: usize) -> Iri {
    ex(&format!("person{i}"))
}

/// A random social graph of `size` persons with a few isolated ones.
fn random_ontology(seed: u64, size: usize) -> Ontology {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ontology = Ontology::default();
    let class = Class::new(ex("Person"));
    let knows = ObjectProperty::new(ex("knows"));
    let age = DataProperty::new(ex("age"));
    ontology.add_axiom(Axiom::declaration(class.clone()));
    ontology.add_axiom(Axiom::declaration(knows.clone()));
    for i in 0..size {
        let individual = ontology.create_individual(&class, person(i));
        ontology.add_data_property_assertion(age.clone(), individual, rng.gen_range(18..90_i32));
    }
    for _ in 0..size {
        let source = rng.gen_range(0..size - 2);
        let target = rng.gen_range(0..size - 2);
        ontology.add_object_property_assertion(
            knows.clone(),
            NamedIndividual::new(person(source)),
            NamedIndividual::new(person(target)),
        );
    }
    ontology
}

fn random_individuals(seed: u64, size: usize, count: usize) -> BTreeSet<Iri> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1000));
    (0..count).map(|_| person(rng.gen_range(0..size))).collect()
}

#[test]
fn test_depth_zero_neighborhood_is_the_seeds() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 30);
        let seeds = random_individuals(seed, 30, 3);
        let result = OntologyFilter::new(&ontology).extract_neighborhood(&seeds, 0);
        assert_eq!(result.included_individuals, seeds);
    }
}

#[test]
fn test_neighborhood_grows_with_depth() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 30);
        let seeds = random_individuals(seed, 30, 2);
        let filter = OntologyFilter::new(&ontology);
        let mut previous = seeds.clone();
        for depth in 1..6 {
            let current = filter.extract_neighborhood(&seeds, depth).included_individuals;
            assert!(previous.is_subset(&current), "depth {depth} lost individuals");
            previous = current;
        }
    }
}

#[test]
fn test_neighborhood_agrees_with_ontology_neighbors() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 30);
        let filter = OntologyFilter::new(&ontology);
        for depth in 1..4 {
            let start = person(0);
            let mut expected = ontology
                .neighbors(&Individual::from(start.clone()), depth)
                .into_iter()
                .filter_map(|individual| individual.iri().cloned())
                .collect::<BTreeSet<_>>();
            expected.insert(start.clone());
            assert_eq!(
                filter.neighborhood(&BTreeSet::from([start]), depth),
                expected
            );
        }
    }
}

#[test]
fn test_path_exists_iff_ontology_has_path() {
    for seed in SEEDS {
        let size = 20;
        let ontology = random_ontology(seed, size);
        let filter = OntologyFilter::new(&ontology);
        for (start, end) in [(0, 1), (2, 7), (3, size - 1), (size - 2, size - 1), (4, 4)] {
            let result = filter.extract_path(&person(start), &person(end));
            let has_path = ontology.has_path(&person(start).into(), &person(end).into());
            assert_eq!(!result.is_empty(), has_path, "path from {start} to {end}");
            if has_path {
                assert!(result.included_individuals.contains(&person(start)));
                assert!(result.included_individuals.contains(&person(end)));
            } else {
                assert!(result.ontology.is_empty());
            }
        }
    }
}

#[test]
fn test_path_steps_are_assertions() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 20);
        let filter = OntologyFilter::new(&ontology);
        let Some(path) = filter.find_path(&person(0), &person(1)) else {
            continue;
        };
        for step in path.windows(2) {
            assert!(
                ontology.object_property_assertions().any(|(_, source, target)| {
                    (source, target) == (&step[0], &step[1])
                        || (source, target) == (&step[1], &step[0])
                }),
                "{} and {} are not related",
                step[0],
                step[1]
            );
        }
    }
}

#[test]
fn test_sampling_is_deterministic() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 40);
        let filter = OntologyFilter::new(&ontology);
        let first = filter.random_sample(10, seed);
        assert_eq!(first.included_individuals.len(), 10);
        assert_eq!(first, filter.random_sample(10, seed));
    }
}

#[test]
fn test_large_samples_select_everything() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 15);
        let filter = OntologyFilter::new(&ontology);
        for n in [15, 16, 1000] {
            let result = filter.random_sample(n, seed);
            assert_eq!(result.included_individuals, filter.individual_iris());
            assert_eq!(result.filtered_individual_count, 15);
        }
    }
}

#[test]
fn test_no_axiom_references_outside_individuals() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 25);
        let selection = random_individuals(seed, 25, 4);
        let result = OntologyFilter::new(&ontology).filter_by_individuals(&selection);

        // Individuals related to the selection are only present through their types
        let mut related = selection.clone();
        for axiom in result.ontology.axioms() {
            let signature = axiom.signature();
            if signature
                .named_individuals
                .iter()
                .any(|individual| selection.contains(individual.iri()))
            {
                related.extend(
                    signature
                        .named_individuals
                        .iter()
                        .map(|individual| individual.iri().clone()),
                );
            }
        }
        for axiom in result.ontology.axioms() {
            for individual in &axiom.signature().named_individuals {
                assert!(related.contains(individual.iri()), "{axiom} is outside the selection");
                if !selection.contains(individual.iri()) {
                    assert!(
                        matches!(
                            axiom.axiom(),
                            Axiom::ClassAssertion { .. }
                                | Axiom::Declaration(_)
                                | Axiom::ObjectPropertyAssertion { .. }
                        ),
                        "{axiom} should not be copied"
                    );
                }
            }
        }
    }
}

#[test]
fn test_builder_and_criteria_agree() {
    for seed in SEEDS {
        let ontology = random_ontology(seed, 30);
        let include = random_individuals(seed, 30, 3);
        let exclude = random_individuals(seed.wrapping_mul(7), 30, 5);
        let builder = OntologyFilter::new(&ontology)
            .with_individuals(include.iter().cloned())
            .exclude_individuals(exclude.iter().cloned())
            .with_max_depth(2)
            .include_class_hierarchy(false);
        let result = builder.execute();
        assert_eq!(result, OntologyFilter::new(&ontology).apply_filter(builder.criteria()));
        assert!(result.included_individuals.is_disjoint(&exclude));
    }
}
