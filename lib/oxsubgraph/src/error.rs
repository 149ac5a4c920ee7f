use oxontology::OntologyError;

/// Error returned when a filter cannot be set up.
///
/// Running a filter never fails: selections without any match produce an empty result.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FilterError {
    /// The serialized filter criteria are malformed, for example a negative maximal depth.
    #[error("Invalid filter criteria: {0}")]
    InvalidCriteria(#[from] serde_json::Error),

    /// An individual or class name could not be resolved against the ontology.
    #[error(transparent)]
    Ontology(#[from] OntologyError),
}
