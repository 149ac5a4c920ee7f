use crate::criteria::Traversal;
use oxontology::{Axiom, Individual, Iri, Ontology};
use rustc_hash::FxHashMap;
use std::collections::{BTreeSet, VecDeque};
use tracing::trace;

/// Individuals linked by the object property assertions of an ontology.
pub struct IndividualGraph<'a> {
    adjacency: FxHashMap<&'a Individual, Vec<&'a Individual>>,
}

impl<'a> IndividualGraph<'a> {
    pub fn new(ontology: &'a Ontology, traversal: Traversal) -> Self {
        let mut adjacency = FxHashMap::<_, Vec<_>>::default();
        for axiom in ontology.axioms() {
            if let Axiom::ObjectPropertyAssertion { source, target, .. } = axiom.axiom() {
                adjacency.entry(source).or_default().push(target);
                if traversal == Traversal::Undirected {
                    adjacency.entry(target).or_default().push(source);
                }
            }
        }
        Self { adjacency }
    }

    fn successors(&self, individual: &Individual) -> &[&'a Individual] {
        self.adjacency.get(individual).map_or(&[], Vec::as_slice)
    }

    /// The seeds and the named individuals reachable from them in at most `depth` steps.
    ///
    /// Anonymous individuals are walked through but are not part of the result.
    pub fn neighborhood(&self, seeds: &BTreeSet<Iri>, depth: usize) -> BTreeSet<Iri> {
        let seeds = seeds
            .iter()
            .map(|iri| Individual::from(iri.clone()))
            .collect::<Vec<_>>();
        let mut visited = seeds.iter().collect::<BTreeSet<_>>();
        let mut queue = seeds.iter().map(|seed| (seed, 0)).collect::<VecDeque<_>>();
        while let Some((current, distance)) = queue.pop_front() {
            if distance == depth {
                continue;
            }
            for &next in self.successors(current) {
                if visited.insert(next) {
                    trace!(individual = %next, distance = distance + 1, "reached individual");
                    queue.push_back((next, distance + 1));
                }
            }
        }
        visited
            .into_iter()
            .filter_map(|individual| individual.iri().cloned())
            .collect()
    }

    /// A shortest path from `start` to `end`, both included.
    pub fn shortest_path(&self, start: &Individual, end: &Individual) -> Option<Vec<Individual>> {
        if start == end {
            return Some(vec![start.clone()]);
        }
        let mut parents = FxHashMap::<&Individual, &Individual>::default();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for &next in self.successors(current) {
                if next == start || parents.contains_key(next) {
                    continue;
                }
                parents.insert(next, current);
                trace!(individual = %next, parent = %current, "reached individual");
                if next == end {
                    let mut path = vec![next.clone()];
                    let mut node = next;
                    while let Some(&parent) = parents.get(node) {
                        path.push(parent.clone());
                        node = parent;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(next);
            }
        }
        None
    }
}
