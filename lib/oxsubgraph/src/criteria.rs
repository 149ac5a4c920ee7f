use crate::error::FilterError;
use oxontology::{AnnotatedAxiom, Iri};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

/// A predicate run on every axiom of a filter result. Axioms it rejects are dropped.
pub type AxiomPredicate = Arc<dyn Fn(&AnnotatedAxiom) -> bool + Send + Sync>;

/// How object property assertions are followed when walking from individual to individual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// An assertion links its source and its target both ways.
    #[default]
    Undirected,
    /// An assertion only leads from its source to its target.
    Directed,
}

/// The selection and completion settings of a filter.
///
/// Criteria can be written in JSON, every field being optional:
/// ```
/// use oxsubgraph::{FilterCriteria, Traversal};
///
/// let criteria = FilterCriteria::from_json(
///     r#"{
///         "include_classes": ["http://example.org/Patient"],
///         "exclude_individuals": ["http://example.org/patient002"],
///         "max_depth": 1,
///         "traversal": "directed",
///         "include_class_hierarchy": false
///     }"#,
/// )?;
/// assert_eq!(criteria.max_depth, Some(1));
/// assert_eq!(criteria.traversal, Traversal::Directed);
/// assert!(!criteria.include_class_hierarchy);
/// assert!(criteria.include_declarations);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterCriteria {
    /// Individuals to select.
    pub include_individuals: BTreeSet<Iri>,
    /// Individuals never part of the result, even if selected another way.
    pub exclude_individuals: BTreeSet<Iri>,
    /// Classes whose asserted members are selected.
    pub include_classes: BTreeSet<Iri>,
    /// Required property values: a selected individual is kept only if, for each listed
    /// property, it has a value among the listed ones.
    ///
    /// Values are literal lexical forms or target individual IRIs.
    /// An empty value set only requires the property to be present.
    pub property_filters: BTreeMap<Iri, BTreeSet<String>>,
    /// If set, the selection is expanded to the individuals at most this many assertions away.
    pub max_depth: Option<usize>,
    /// Adds the class axioms mentioning the classes used by the selected axioms.
    pub include_class_hierarchy: bool,
    /// Adds the property axioms mentioning the properties used by the selected axioms.
    pub include_property_hierarchy: bool,
    /// Adds the declarations of the entities used by the selected axioms.
    pub include_declarations: bool,
    pub traversal: Traversal,
    /// Run last, on the complete result.
    #[serde(skip)]
    pub custom_filter: Option<AxiomPredicate>,
}

impl FilterCriteria {
    /// Reads criteria from JSON. Missing fields keep their default value.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the criteria as JSON. The custom predicate is not written.
    pub fn to_json(&self) -> Result<String, FilterError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            include_individuals: BTreeSet::new(),
            exclude_individuals: BTreeSet::new(),
            include_classes: BTreeSet::new(),
            property_filters: BTreeMap::new(),
            max_depth: None,
            include_class_hierarchy: true,
            include_property_hierarchy: true,
            include_declarations: true,
            traversal: Traversal::Undirected,
            custom_filter: None,
        }
    }
}

impl fmt::Debug for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCriteria")
            .field("include_individuals", &self.include_individuals)
            .field("exclude_individuals", &self.exclude_individuals)
            .field("include_classes", &self.include_classes)
            .field("property_filters", &self.property_filters)
            .field("max_depth", &self.max_depth)
            .field("include_class_hierarchy", &self.include_class_hierarchy)
            .field("include_property_hierarchy", &self.include_property_hierarchy)
            .field("include_declarations", &self.include_declarations)
            .field("traversal", &self.traversal)
            .field(
                "custom_filter",
                &self.custom_filter.as_ref().map(|_| "<predicate>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let criteria = FilterCriteria::default();
        assert!(criteria.include_class_hierarchy);
        assert!(criteria.include_property_hierarchy);
        assert!(criteria.include_declarations);
        assert_eq!(criteria.traversal, Traversal::Undirected);
        assert!(criteria.custom_filter.is_none());
    }

    #[test]
    fn empty_json_is_default() {
        let criteria = FilterCriteria::from_json("{}").unwrap();
        assert!(criteria.include_declarations);
        assert_eq!(criteria.max_depth, None);
    }

    #[test]
    fn negative_depth_is_rejected() {
        assert!(matches!(
            FilterCriteria::from_json(r#"{"max_depth": -1}"#),
            Err(FilterError::InvalidCriteria(_))
        ));
    }

    #[test]
    fn invalid_iri_is_rejected() {
        assert!(matches!(
            FilterCriteria::from_json(r#"{"include_individuals": ["not an iri"]}"#),
            Err(FilterError::InvalidCriteria(_))
        ));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(matches!(
            FilterCriteria::from_json(r#"{"depth": 2}"#),
            Err(FilterError::InvalidCriteria(_))
        ));
    }

    #[test]
    fn json_round_trip_keeps_selection() {
        let mut criteria = FilterCriteria::default();
        criteria
            .include_individuals
            .insert(Iri::new_unchecked("http://example.org/a"));
        criteria.property_filters.insert(
            Iri::new_unchecked("http://example.org/age"),
            BTreeSet::from(["42".to_owned()]),
        );
        criteria.max_depth = Some(2);
        criteria.custom_filter = Some(Arc::new(|_: &AnnotatedAxiom| true));
        let json = criteria.to_json().unwrap();
        let parsed = FilterCriteria::from_json(&json).unwrap();
        assert_eq!(parsed.include_individuals, criteria.include_individuals);
        assert_eq!(parsed.property_filters, criteria.property_filters);
        assert_eq!(parsed.max_depth, Some(2));
        assert!(parsed.custom_filter.is_none());
    }

    #[test]
    fn debug_hides_predicate() {
        let criteria = FilterCriteria {
            custom_filter: Some(Arc::new(|_: &AnnotatedAxiom| false)),
            ..FilterCriteria::default()
        };
        assert!(format!("{criteria:?}").contains("custom_filter: Some(\"<predicate>\")"));
    }
}
