//! Flattening of (possibly nested) value sets into permissible values.

use brics_model::PermissibleValues;
use tracing::{debug, warn};

use crate::client::ValueSetSource;
use crate::valueset::ValueSet;

/// Maximum number of nested `compose.include.valueSet` levels followed below
/// the value set being resolved.
pub const MAX_NESTING_DEPTH: usize = 8;

/// Resolves binding URIs to flat code/description lists.
#[derive(Debug, Clone)]
pub struct ValueSetResolver<S> {
    source: S,
    max_depth: usize,
}

impl<S: ValueSetSource> ValueSetResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_depth: MAX_NESTING_DEPTH,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `uri` and flatten it.
    ///
    /// Returns `None` when the value set cannot be fetched or contributes no
    /// non-empty code at all.
    pub fn resolve(&self, uri: &str) -> Option<PermissibleValues> {
        let mut trail = Vec::new();
        self.resolve_nested(uri, &mut trail, 0)
    }

    /// Flatten an already fetched value set, resolving nested references.
    pub fn flatten(&self, valueset: &ValueSet) -> Option<PermissibleValues> {
        let mut trail: Vec<String> = valueset.url.iter().cloned().collect();
        self.flatten_nested(valueset, &mut trail, 0)
    }

    fn resolve_nested(
        &self,
        uri: &str,
        trail: &mut Vec<String>,
        depth: usize,
    ) -> Option<PermissibleValues> {
        let valueset = self.source.fetch_valueset(uri)?;
        trail.push(uri.to_string());
        let values = self.flatten_nested(&valueset, trail, depth);
        trail.pop();
        values
    }

    fn flatten_nested(
        &self,
        valueset: &ValueSet,
        trail: &mut Vec<String>,
        depth: usize,
    ) -> Option<PermissibleValues> {
        let mut values = PermissibleValues::new();

        for include in valueset.includes() {
            if let Some(concepts) = &include.concept {
                for concept in concepts {
                    values.push(
                        concept.code.clone().unwrap_or_default(),
                        concept.display.clone().unwrap_or_default(),
                    );
                }
            } else if let Some(nested) = &include.value_set {
                for nested_uri in nested {
                    if trail.iter().any(|seen| seen == nested_uri) {
                        warn!(uri = %nested_uri, "skipping cyclic value set reference");
                        continue;
                    }
                    if depth >= self.max_depth {
                        warn!(
                            uri = %nested_uri,
                            max_depth = self.max_depth,
                            "value set nesting too deep"
                        );
                        continue;
                    }
                    let nested_values = self.resolve_nested(nested_uri, trail, depth + 1);
                    if let Some(nested_values) = nested_values {
                        debug!(
                            uri = %nested_uri,
                            codes = nested_values.len(),
                            "spliced nested value set"
                        );
                        values.extend(nested_values);
                    }
                }
            }
        }

        // Concepts without a code keep their slot, but alone they are no result.
        if values.codes().iter().all(String::is_empty) {
            None
        } else {
            Some(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct MapSource(BTreeMap<String, ValueSet>);

    impl MapSource {
        fn with(mut self, uri: &str, json: &str) -> Self {
            self.0
                .insert(uri.to_string(), ValueSet::from_json(json).expect("fixture"));
            self
        }
    }

    impl ValueSetSource for MapSource {
        fn fetch_valueset(&self, uri: &str) -> Option<ValueSet> {
            self.0.get(uri).cloned()
        }
    }

    #[test]
    fn concept_without_display_keeps_cardinality() {
        let source = MapSource::default().with(
            "a",
            r#"{"compose":{"include":[{"concept":[{"code":"1"},{"display":"Two"}]}]}}"#,
        );
        let values = ValueSetResolver::new(source).resolve("a").expect("values");
        assert_eq!(values.codes(), &["1".to_string(), String::new()]);
        assert_eq!(values.descriptions(), &[String::new(), "Two".to_string()]);
    }

    #[test]
    fn concept_takes_precedence_over_value_set() {
        let source = MapSource::default()
            .with(
                "a",
                r#"{"compose":{"include":[{"concept":[{"code":"x","display":"X"}],"valueSet":["b"]}]}}"#,
            )
            .with(
                "b",
                r#"{"compose":{"include":[{"concept":[{"code":"y","display":"Y"}]}]}}"#,
            );
        let values = ValueSetResolver::new(source).resolve("a").expect("values");
        assert_eq!(values.joined_codes(), "x");
    }

    #[test]
    fn cycle_is_skipped() {
        let source = MapSource::default()
            .with(
                "a",
                r#"{"compose":{"include":[{"concept":[{"code":"a1","display":"A1"}]},{"valueSet":["b"]}]}}"#,
            )
            .with(
                "b",
                r#"{"compose":{"include":[{"concept":[{"code":"b1","display":"B1"}]},{"valueSet":["a"]}]}}"#,
            );
        let values = ValueSetResolver::new(source).resolve("a").expect("values");
        assert_eq!(values.joined_codes(), "a1|b1");
    }

    fn chain() -> MapSource {
        MapSource::default()
            .with("a", r#"{"compose":{"include":[{"valueSet":["b"]}]}}"#)
            .with(
                "b",
                r#"{"compose":{"include":[{"concept":[{"code":"b1","display":"B1"}]},{"valueSet":["c"]}]}}"#,
            )
            .with(
                "c",
                r#"{"compose":{"include":[{"concept":[{"code":"c1","display":"C1"}]}]}}"#,
            )
    }

    #[test]
    fn depth_limit_counts_levels_below_root() {
        let resolver = ValueSetResolver::new(chain()).with_max_depth(1);
        assert_eq!(resolver.resolve("a").expect("values").joined_codes(), "b1");

        let resolver = ValueSetResolver::new(chain()).with_max_depth(2);
        assert_eq!(resolver.resolve("a").expect("values").joined_codes(), "b1|c1");

        let resolver = ValueSetResolver::new(chain()).with_max_depth(0);
        assert_eq!(resolver.resolve("a"), None);
    }

    #[test]
    fn default_depth_follows_eight_levels() {
        let mut source = MapSource::default();
        for level in 0..8 {
            let json = format!(
                r#"{{"compose":{{"include":[{{"valueSet":["level-{}"]}}]}}}}"#,
                level + 1
            );
            source = source.with(&format!("level-{level}"), &json);
        }
        source = source.with(
            "level-8",
            r#"{"compose":{"include":[{"concept":[{"code":"deep","display":"Deep"}]}]}}"#,
        );
        let values = ValueSetResolver::new(source).resolve("level-0").expect("values");
        assert_eq!(values.joined_codes(), "deep");
    }

    #[test]
    fn concepts_without_code_are_not_found() {
        let source = MapSource::default()
            .with("empty", r#"{"compose":{"include":[{"concept":[{}]}]}}"#)
            .with(
                "display-only",
                r#"{"compose":{"include":[{"concept":[{"display":"X"}]}]}}"#,
            );
        let resolver = ValueSetResolver::new(source);
        assert_eq!(resolver.resolve("empty"), None);
        assert_eq!(resolver.resolve("display-only"), None);
    }

    #[test]
    fn codeless_concepts_keep_slots_beside_coded_ones() {
        let source = MapSource::default().with(
            "mixed",
            r#"{"compose":{"include":[{"concept":[{"display":"X"},{"code":"y","display":"Y"}]}]}}"#,
        );
        let values = ValueSetResolver::new(source).resolve("mixed").expect("values");
        assert_eq!(values.joined_codes(), "|y");
        assert_eq!(values.joined_descriptions(), "X|Y");
    }

    #[test]
    fn empty_value_set_is_not_found() {
        let source = MapSource::default().with(
            "a",
            r#"{"compose":{"include":[{"system":"http://loinc.org"}]}}"#,
        );
        assert_eq!(ValueSetResolver::new(source).resolve("a"), None);
    }

    #[test]
    fn unknown_uri_is_not_found() {
        assert_eq!(ValueSetResolver::new(MapSource::default()).resolve("missing"), None);
    }
}
