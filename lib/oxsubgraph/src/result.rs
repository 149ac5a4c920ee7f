use oxontology::{Iri, Ontology};
use std::collections::BTreeSet;
use std::fmt;

/// The ontology extracted by a filter, with counts relating it to its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
    /// A new ontology holding the source metadata and the selected axioms.
    ///
    /// Its axioms are shared with the source ontology.
    pub ontology: Ontology,
    pub original_axiom_count: usize,
    pub filtered_axiom_count: usize,
    pub original_individual_count: usize,
    pub filtered_individual_count: usize,
    /// The individuals the extraction was made for.
    pub included_individuals: BTreeSet<Iri>,
}

impl FilterResult {
    /// Checks if no individual was selected.
    pub fn is_empty(&self) -> bool {
        self.included_individuals.is_empty()
    }

    /// The share of the source axioms kept, between 0 and 1.
    #[expect(clippy::cast_precision_loss)]
    pub fn axiom_ratio(&self) -> f64 {
        if self.original_axiom_count == 0 {
            return 0.;
        }
        self.filtered_axiom_count as f64 / self.original_axiom_count as f64
    }
}

impl fmt::Display for FilterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} individuals, {} of {} axioms",
            self.filtered_individual_count,
            self.original_individual_count,
            self.filtered_axiom_count,
            self.original_axiom_count
        )
    }
}
