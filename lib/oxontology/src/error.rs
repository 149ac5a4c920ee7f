//! Error types of the ontology model.

use crate::axiom::AxiomKind;
use oxrdf::{BlankNodeIdParseError, IriParseError};

/// Error returned by fallible ontology operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OntologyError {
    /// The axiom carries no statement, like an `EquivalentClasses` without operands.
    #[error("{kind} axiom without operands cannot be added to an ontology")]
    InvalidAxiom { kind: AxiomKind },

    /// A string is not a valid IRI.
    #[error(transparent)]
    InvalidIri(#[from] IriParseError),

    /// A string is not a valid blank node id.
    #[error(transparent)]
    InvalidBlankNode(#[from] BlankNodeIdParseError),

    /// A prefixed name uses a prefix that is not declared.
    #[error("The prefix {prefix}: is not declared")]
    UnknownPrefix { prefix: String },
}
