//! Flattening of nested token trees.
//!
//! Token configs nest arbitrarily (`sizes.large.mobile`); CSS custom
//! properties do not. [`Flattener`] walks a [`TokenTree`], kebab-cases
//! every key, and joins paths with dashes, handing each leaf to a
//! caller-supplied transform together with its flattened key.
//!
//! The flattener owns the memo of paths it has already warned about,
//! so a long-lived instance warns once per unique over-deep path while
//! separate instances (as in tests) stay fully isolated.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// An arbitrarily nested mapping whose terminal values are `T`.
///
/// Deserialization treats JSON objects as branches and anything else
/// as a leaf, so leaf shape errors surface during transformation where
/// the offending path is known.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenTree<T> {
    Branch(IndexMap<String, TokenTree<T>>),
    Leaf(T),
}

/// Options for one flattening pass.
#[derive(Debug, Default, Clone)]
pub struct FlattenOptions {
    /// Spliced immediately before the final path segment of each leaf,
    /// producing keys like `large-spacing-mobile` for a `spacing`
    /// prefix over `large.mobile`.
    pub prefix: Option<String>,
    /// Paths deeper than this are skipped with a one-time warning.
    pub max_depth: Option<usize>,
}

/// Flattens token trees into flat kebab-cased key maps.
#[derive(Debug, Default)]
pub struct Flattener {
    warned: HashSet<String>,
    warnings: Vec<String>,
}

impl Flattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens `tree`, applying `transform` to each leaf along with
    /// its flattened key. A transform returning `None` drops the leaf
    /// from the output (it is expected to have recorded why).
    pub fn flatten<T, V, F>(
        &mut self,
        tree: &IndexMap<String, TokenTree<T>>,
        options: &FlattenOptions,
        mut transform: F,
    ) -> IndexMap<String, V>
    where
        F: FnMut(&str, &T) -> Option<V>,
    {
        let mut out = IndexMap::new();
        self.walk(tree, &[], options, &mut transform, &mut out);
        out
    }

    /// Warnings recorded so far, draining them from the flattener.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    fn walk<T, V, F>(
        &mut self,
        tree: &IndexMap<String, TokenTree<T>>,
        path: &[String],
        options: &FlattenOptions,
        transform: &mut F,
        out: &mut IndexMap<String, V>,
    ) where
        F: FnMut(&str, &T) -> Option<V>,
    {
        for (key, value) in tree {
            let mut segments = path.to_vec();
            segments.push(to_kebab_case(key));

            if let Some(max_depth) = options.max_depth {
                if segments.len() > max_depth {
                    let dotted = segments.join(".");
                    if self.warned.insert(dotted.clone()) {
                        self.warnings.push(format!(
                            "skipping property at \"{}\" - exceeded max depth ({})",
                            dotted, max_depth
                        ));
                    }
                    continue;
                }
            }

            match value {
                TokenTree::Leaf(leaf) => {
                    if let Some(prefix) = &options.prefix {
                        segments.insert(segments.len() - 1, prefix.clone());
                    }
                    let flat_key = segments.join("-");
                    if let Some(transformed) = transform(&flat_key, leaf) {
                        out.insert(flat_key, transformed);
                    }
                }
                TokenTree::Branch(children) => {
                    self.walk(children, &segments, options, transform, out);
                }
            }
        }
    }
}

/// Converts a string to kebab-case: trimmed, lowercased, runs of
/// whitespace or underscores collapsed to a dash each, and any other
/// character outside `a-z0-9-` dropped.
pub fn to_kebab_case(s: &str) -> String {
    #[derive(PartialEq, Clone, Copy)]
    enum Run {
        Space,
        Underscore,
        Other,
    }

    let mut out = String::with_capacity(s.len());
    let mut run = Run::Other;
    for c in s.trim().chars() {
        let class = if c.is_whitespace() {
            Run::Space
        } else if c == '_' {
            Run::Underscore
        } else {
            Run::Other
        };
        match class {
            Run::Other => {
                run = Run::Other;
                let c = c.to_ascii_lowercase();
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                    out.push(c);
                }
            }
            separator => {
                if run != separator {
                    out.push('-');
                    run = separator;
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn tree(json: &str) -> IndexMap<String, TokenTree<Value>> {
        serde_json::from_str(json).unwrap()
    }

    fn flatten_values(
        flattener: &mut Flattener,
        json: &str,
        options: &FlattenOptions,
    ) -> IndexMap<String, Value> {
        flattener.flatten(&tree(json), options, |_, v| Some(v.clone()))
    }

    #[test]
    fn test_nested_keys_are_dash_joined() {
        let mut flattener = Flattener::new();
        let flat = flatten_values(
            &mut flattener,
            r#"{ "large": { "mobile": [16, 24] } }"#,
            &FlattenOptions::default(),
        );
        assert_eq!(flat.len(), 1);
        assert!(flat.contains_key("large-mobile"));
    }

    #[test]
    fn test_keys_are_kebab_cased() {
        let mut flattener = Flattener::new();
        let flat = flatten_values(
            &mut flattener,
            r#"{ "Extra Large": { "line_height": [24] } }"#,
            &FlattenOptions::default(),
        );
        assert!(flat.contains_key("extra-large-line-height"));
    }

    #[test]
    fn test_prefix_splices_before_final_segment() {
        let mut flattener = Flattener::new();
        let options = FlattenOptions {
            prefix: Some("spacing".to_string()),
            max_depth: None,
        };
        let flat = flatten_values(
            &mut flattener,
            r#"{ "large": { "mobile": [16, 24] } }"#,
            &options,
        );
        assert!(flat.contains_key("large-spacing-mobile"));
    }

    #[test]
    fn test_max_depth_skips_and_warns_once() {
        let mut flattener = Flattener::new();
        let options = FlattenOptions {
            prefix: None,
            max_depth: Some(2),
        };
        let json = r#"{ "a": { "b": { "c": [1] } }, "top": [2] }"#;

        let flat = flatten_values(&mut flattener, json, &options);
        assert!(flat.contains_key("top"));
        assert!(!flat.keys().any(|k| k.contains("c")));

        let warnings = flattener.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("a.b.c"));

        // Same offending path again: no new warning.
        flatten_values(&mut flattener, json, &options);
        assert!(flattener.take_warnings().is_empty());
    }

    #[test]
    fn test_warn_memo_does_not_affect_output() {
        let mut flattener = Flattener::new();
        let options = FlattenOptions {
            prefix: None,
            max_depth: Some(1),
        };
        let json = r#"{ "a": { "deep": [1] }, "b": [2] }"#;
        let first = flatten_values(&mut flattener, json, &options);
        let second = flatten_values(&mut flattener, json, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_transform_can_drop_leaves() {
        let mut flattener = Flattener::new();
        let flat = flattener.flatten(
            &tree(r#"{ "keep": [1], "drop": "nope" }"#),
            &FlattenOptions::default(),
            |_, v: &Value| if v.is_array() { Some(v.clone()) } else { None },
        );
        assert!(flat.contains_key("keep"));
        assert!(!flat.contains_key("drop"));
    }

    #[test]
    fn test_transform_sees_flattened_key() {
        let mut flattener = Flattener::new();
        let mut seen = Vec::new();
        flattener.flatten(
            &tree(r#"{ "a": { "b": [1] } }"#),
            &FlattenOptions::default(),
            |key, _: &Value| {
                seen.push(key.to_string());
                Some(())
            },
        );
        assert_eq!(seen, vec!["a-b".to_string()]);
    }

    #[test]
    fn test_kebab_output_alphabet() {
        use proptest::prelude::*;
        proptest!(|(s in "\\PC{0,40}")| {
            let kebab = to_kebab_case(&s);
            prop_assert!(kebab
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        });
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Extra Large"), "extra-large");
        assert_eq!(to_kebab_case("line_height"), "line-height");
        assert_eq!(to_kebab_case("  padded  "), "padded");
        assert_eq!(to_kebab_case("with.dots"), "withdots");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
    }
}
