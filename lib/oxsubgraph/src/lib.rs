#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod criteria;
mod error;
mod filter;
mod graph;
mod result;
mod sample;

pub use criteria::{AxiomPredicate, FilterCriteria, Traversal};
pub use error::FilterError;
pub use filter::OntologyFilter;
pub use result::FilterResult;
