#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod axiom;
mod entity;
mod error;
mod expression;
mod iri;
mod literal;
mod ontology;
mod prefix;
mod visit;

pub use axiom::{
    AnnotatedAxiom, Annotation, AnnotationSubject, AnnotationValue, Axiom, AxiomCategory,
    AxiomKind, SharedAxiom,
};
pub use entity::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, EntityType,
    Individual, NamedIndividual, ObjectProperty,
};
pub use error::OntologyError;
pub use expression::{ClassExpression, DataRange, ObjectPropertyExpression};
pub use iri::Iri;
pub use literal::Literal;
pub use ontology::{Ontology, OntologyStatistics};
pub use oxrdf::{BlankNodeIdParseError, IriParseError};
pub use prefix::PrefixMap;
pub use visit::{Signature, Visitor};
