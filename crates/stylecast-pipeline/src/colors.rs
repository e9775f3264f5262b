//! Color scheme resolution.
//!
//! Turns a color config (semantic keys, per-property mode arrays, an
//! optional reference adapter and a toggle strategy) into an ordered
//! sequence of CSS blocks: the `@theme` token map, a base layer with
//! second-mode overrides, an optional `@custom-variant` at-rule,
//! per-key utility classes and the accent pairing block. Output order
//! is fixed; it determines cascade precedence among the generated
//! rules.
//!
//! A value is either a literal color or a `--` reference. With the
//! `reference` adapter active, every concrete value is registered
//! under an internal namespace (`--sc-color-*`) and public tokens
//! (`--color-*`) point into it, so consumers can override the
//! internals without touching the public surface.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::css::{CssNode, Decl, Declarations};
use crate::error::CompileError;
use crate::report::ErrorReport;

/// Public custom-property namespace.
const PUBLIC_PREFIX: &str = "--color";

/// Internal namespace used by the reference adapter.
const REFERENCE_PREFIX: &str = "--sc-color";

/// A named visual mode selecting index 0 or 1 of each value array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Light => f.write_str("light"),
            Mode::Dark => f.write_str("dark"),
        }
    }
}

/// Selector mechanism activating the second mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Class,
    Attr,
    Auto,
}

/// Indirection layer for public tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adapter {
    Reference,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Schemes {
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub toggle: Option<Toggle>,
}

/// Semantic key -> property -> per-mode value array.
pub type ColorMap = IndexMap<String, IndexMap<String, Vec<String>>>;

#[derive(Debug, Clone, Deserialize)]
pub struct ColorSpec {
    /// The property whose value becomes each key's primary token.
    pub base: String,
    pub map: ColorMap,
}

/// Sanitized colors module config.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorsData {
    #[serde(default)]
    pub schemes: Option<Schemes>,
    pub colors: ColorSpec,
    #[serde(rename = "default")]
    pub default_key: String,
    #[serde(default)]
    pub adapter: Option<Adapter>,
}

/// True for literal colors and `--` variable references.
fn is_valid_color(value: &str) -> bool {
    value.starts_with("--") || csscolorparser::parse(value).is_ok()
}

fn first(values: &[String]) -> Option<&str> {
    values.first().map(String::as_str).filter(|v| !v.is_empty())
}

fn second(values: &[String]) -> Option<&str> {
    values.get(1).map(String::as_str).filter(|v| !v.is_empty())
}

/// Validates the raw colors config and returns the sanitized form.
pub fn validate(data: &Value) -> Result<ColorsData, CompileError> {
    let mut report = ErrorReport::new();

    let Some(object) = data.as_object() else {
        report.push("colors: config 'data' must be an object");
        return Err(CompileError::Validation(report));
    };

    for key in object.keys() {
        if !matches!(key.as_str(), "schemes" | "colors" | "default" | "adapter") {
            report.push(format!("colors: unknown field \"{}\"", key));
        }
    }

    if let Some(schemes) = object.get("schemes") {
        validate_schemes(schemes, &mut report);
    }

    let mut map_keys: Vec<String> = Vec::new();
    match object.get("colors") {
        None => report.push("colors: missing 'colors' section"),
        Some(colors) => map_keys = validate_color_spec(colors, &mut report),
    }

    match object.get("default") {
        None => report.push("colors: missing 'default' semantic key"),
        Some(Value::String(key)) => {
            if !map_keys.is_empty() && !map_keys.iter().any(|k| k == key) {
                report.push(format!(
                    "colors: 'default' key \"{}\" is not defined in the color map",
                    key
                ));
            }
        }
        Some(_) => report.push("colors: 'default' must be a string"),
    }

    if let Some(adapter) = object.get("adapter") {
        if adapter.as_str() != Some("reference") {
            report.push("colors: 'adapter' must be \"reference\" when present");
        }
    }

    report.into_result(())?;
    let sanitized: ColorsData = serde_json::from_value(data.clone())?;
    Ok(sanitized)
}

fn validate_schemes(schemes: &Value, report: &mut ErrorReport) {
    let Some(object) = schemes.as_object() else {
        report.push("colors: 'schemes' must be an object");
        return;
    };

    match object.get("modes") {
        None => report.push("colors: 'schemes.modes' is required"),
        Some(Value::Array(modes)) => {
            if modes.is_empty() || modes.len() > 2 {
                report.push("colors: 'schemes.modes' takes one or two modes");
            }
            for mode in modes {
                if !matches!(mode.as_str(), Some("light") | Some("dark")) {
                    report.push(format!(
                        "colors: unknown mode {} (expected \"light\" or \"dark\")",
                        mode
                    ));
                }
            }
        }
        Some(_) => report.push("colors: 'schemes.modes' must be an array"),
    }

    if let Some(toggle) = object.get("toggle") {
        if !matches!(toggle.as_str(), Some("class") | Some("attr") | Some("auto")) {
            report.push("colors: 'schemes.toggle' must be \"class\", \"attr\" or \"auto\"");
        }
    }
}

fn validate_color_spec(colors: &Value, report: &mut ErrorReport) -> Vec<String> {
    let Some(object) = colors.as_object() else {
        report.push("colors: 'colors' must be an object");
        return Vec::new();
    };

    match object.get("base") {
        None => report.push("colors: 'colors.base' is required"),
        Some(Value::String(base)) if !base.is_empty() => {}
        Some(_) => report.push("colors: 'colors.base' must be a non-empty string"),
    }

    let Some(map) = object.get("map") else {
        report.push("colors: 'colors.map' is required");
        return Vec::new();
    };
    let Some(map) = map.as_object() else {
        report.push("colors: 'colors.map' must be an object");
        return Vec::new();
    };

    for (key, props) in map {
        let Some(props) = props.as_object() else {
            report.push(format!(
                "colors: map entry \"{}\" must be an object of properties",
                key
            ));
            continue;
        };
        for (prop, values) in props {
            match values.as_array() {
                Some(values) if (1..=2).contains(&values.len()) => {
                    if values.iter().any(|v| !v.is_string()) {
                        report.push(format!(
                            "colors: values for \"{}.{}\" must be strings",
                            key, prop
                        ));
                    }
                }
                _ => report.push(format!(
                    "colors: \"{}.{}\" must be an array of one or two values",
                    key, prop
                )),
            }
        }
    }

    map.keys().cloned().collect()
}

/// Resolves a sanitized colors config into an ordered CSS node sequence.
pub fn resolve(data: &ColorsData) -> Result<Vec<CssNode>, CompileError> {
    let modes = data
        .schemes
        .as_ref()
        .map(|s| s.modes.clone())
        .unwrap_or_else(|| vec![Mode::Light]);
    let toggle = data
        .schemes
        .as_ref()
        .and_then(|s| s.toggle)
        .unwrap_or(Toggle::Auto);
    let default_mode = modes.first().copied().unwrap_or(Mode::Light);
    let second_mode = modes.get(1).copied();

    let base = &data.colors.base;
    let map = &data.colors.map;
    let default_key = &data.default_key;
    let indirect = data.adapter == Some(Adapter::Reference);
    let prefix = if indirect {
        REFERENCE_PREFIX
    } else {
        PUBLIC_PREFIX
    };

    // References resolve against the active namespace; root-resolved
    // values always point at the public one.
    let to_css_var = |v: &str| match v.strip_prefix("--") {
        Some(rest) => format!("var({}-{})", prefix, rest),
        None => v.to_string(),
    };
    let to_root_var = |v: &str| match v.strip_prefix("--") {
        Some(rest) => format!("var({}-{})", PUBLIC_PREFIX, rest),
        None => v.to_string(),
    };

    let mut report = ErrorReport::new();
    let mut theme: IndexMap<String, String> = IndexMap::new();
    let mut first_adapted: IndexMap<String, String> = IndexMap::new();
    let mut second_adapted: IndexMap<String, String> = IndexMap::new();

    let empty = IndexMap::new();
    let default_props = map.get(default_key).unwrap_or(&empty);

    // Step 1 - indirection layer: register every concrete value under
    // the internal namespace and expose the default key's properties
    // publicly as references into it.
    if indirect {
        for (key, props) in map {
            for (prop, values) in props {
                if let Some(v) = first(values).filter(|v| is_valid_color(v)) {
                    first_adapted.insert(
                        format!("{}-{}-{}", REFERENCE_PREFIX, key, prop),
                        to_root_var(v),
                    );
                }
            }
        }
        for (prop, values) in default_props {
            if let Some(v) = first(values).filter(|v| is_valid_color(v)) {
                theme.insert(
                    format!("{}-{}", PUBLIC_PREFIX, prop),
                    format!("var({}-{})", REFERENCE_PREFIX, prop),
                );
                first_adapted.insert(format!("{}-{}", REFERENCE_PREFIX, prop), to_root_var(v));
            }
        }
    }

    // Step 2 - base semantic resolution: each key's base property
    // becomes its primary token plus a mode-invariant "-fixed" twin.
    for (key, props) in map {
        let Some(v) = props.get(base).and_then(|values| first(values)) else {
            continue;
        };
        if !is_valid_color(v) {
            report.push(format!("colors: invalid base color for \"{}\": {}", key, v));
            continue;
        }
        let primary = if indirect {
            format!("var({}-{}-{})", REFERENCE_PREFIX, key, base)
        } else {
            to_css_var(v)
        };
        theme.insert(format!("{}-{}", PUBLIC_PREFIX, key), primary);
        theme.insert(format!("{}-{}-fixed", PUBLIC_PREFIX, key), to_root_var(v));
    }

    // Step 3 - semantic defaults: fill in default-key properties that
    // have no public token yet.
    for (prop, values) in default_props {
        let Some(v) = first(values) else { continue };
        if !is_valid_color(v) {
            report.push(format!(
                "colors: invalid default color for \"{}\": {}",
                prop, v
            ));
            continue;
        }
        let name = format!("{}-{}", PUBLIC_PREFIX, prop);
        if !theme.contains_key(&name) {
            let value = if indirect {
                format!("var({}-{})", REFERENCE_PREFIX, prop)
            } else {
                to_css_var(&format!("--{}-{}", default_key, prop))
            };
            theme.insert(name, value);
        }
    }

    // Step 4 - full key x property expansion at mode index 0.
    for (key, props) in map {
        for (prop, values) in props {
            let Some(v) = first(values) else { continue };
            if !is_valid_color(v) {
                report.push(format!(
                    "colors: invalid color at \"{}.{}\": {}",
                    key, prop, v
                ));
                continue;
            }
            let value = if indirect {
                format!("var({}-{}-{})", REFERENCE_PREFIX, key, prop)
            } else {
                to_css_var(v)
            };
            theme.insert(format!("{}-{}-{}", PUBLIC_PREFIX, key, prop), value);
        }
    }

    // Step 5 - second-mode overrides, collected separately so they can
    // be nested under the toggle selector.
    if let Some(second_mode) = second_mode {
        for (key, props) in map {
            if let Some(v) = props
                .get(base)
                .and_then(|values| second(values))
                .filter(|v| is_valid_color(v))
            {
                second_adapted.insert(format!("{}-{}", prefix, key), to_root_var(v));
            }
            for (prop, values) in props {
                if let Some(v) = second(values).filter(|v| is_valid_color(v)) {
                    second_adapted.insert(format!("{}-{}-{}", prefix, key, prop), to_root_var(v));
                }
            }
        }
        for (prop, values) in default_props {
            if let Some(v) = second(values).filter(|v| is_valid_color(v)) {
                second_adapted.insert(format!("{}-{}", prefix, prop), to_root_var(v));
            }
        }
        second_adapted.insert("color-scheme".to_string(), second_mode.to_string());
    }

    report.into_result(())?;

    // Step 6 - custom variant for class/attr toggles.
    let custom_variant = second_mode.and_then(|mode| match toggle {
        Toggle::Class => Some(format!(
            "@custom-variant {m} (&:where(.{m}, .{m} *));",
            m = mode
        )),
        Toggle::Attr => Some(format!(
            "@custom-variant {m} (&:where([data-theme={m}], [data-theme={m}] *));",
            m = mode
        )),
        Toggle::Auto => None,
    });

    // Step 7 - per-key utility classes and accent pairings.
    let mut utility: IndexMap<String, Declarations> = IndexMap::new();
    let mut dynamic: Declarations = IndexMap::new();

    for (key, props) in map {
        let mut util_theme = Declarations::new();
        let mut util_fixed = Declarations::new();

        for (prop, values) in props {
            let value = if indirect {
                format!("var({}-{}-{})", REFERENCE_PREFIX, key, prop)
            } else {
                format!("var({}-{}-{})", PUBLIC_PREFIX, key, prop)
            };
            util_theme.insert(format!("--color-{}", prop), Decl::Value(value));
            if let Some(v) = first(values) {
                util_fixed.insert(format!("--color-{}", prop), Decl::Value(to_root_var(v)));
            }
        }

        utility.insert(format!("@utility theme-{}", key), util_theme);
        utility.insert(format!("@utility theme-{}-fixed", key), util_fixed);

        // Accent pairing is only synthesized when both sides exist;
        // an unpaired accent or on-accent is skipped silently.
        let accent = props.get("accent").and_then(|values| first(values));
        let on_accent = props.get("on-accent").and_then(|values| first(values));
        if let (Some(accent), Some(on_accent)) = (accent, on_accent) {
            let reactive_prefix = if indirect {
                REFERENCE_PREFIX
            } else {
                PUBLIC_PREFIX
            };
            dynamic.insert(
                format!(":is(.theme-{}) .theme-accent", key),
                Decl::Block(IndexMap::from([
                    (
                        "--color-color".to_string(),
                        Decl::Value(format!("var({}-{}-accent)", reactive_prefix, key)),
                    ),
                    (
                        "--color-on-color".to_string(),
                        Decl::Value(format!("var({}-{}-on-accent)", reactive_prefix, key)),
                    ),
                ])),
            );
            dynamic.insert(
                format!(":is(.theme-{}-fixed) .theme-accent", key),
                Decl::Block(IndexMap::from([
                    (
                        "--color-color".to_string(),
                        Decl::Value(to_root_var(accent)),
                    ),
                    (
                        "--color-on-color".to_string(),
                        Decl::Value(to_root_var(on_accent)),
                    ),
                ])),
            );
        }
    }

    // Step 8 - base layer: :root declarations plus the nested
    // second-mode override under the toggle selector.
    let mut root = Declarations::new();
    if indirect {
        for (name, value) in &first_adapted {
            root.insert(name.clone(), Decl::Value(value.clone()));
        }
    }
    root.insert(
        "color-scheme".to_string(),
        Decl::Value(default_mode.to_string()),
    );

    if let Some(second_mode) = second_mode {
        if !second_adapted.is_empty() {
            let selector = match toggle {
                Toggle::Class => format!("&.{}", second_mode),
                Toggle::Attr => format!("&[data-theme=\"{}\"]", second_mode),
                Toggle::Auto => "@media (prefers-color-scheme: dark)".to_string(),
            };
            let overrides = second_adapted
                .iter()
                .map(|(name, value)| (name.clone(), Decl::Value(value.clone())))
                .collect();
            root.insert(selector, Decl::Block(overrides));
        }
    }

    let base_layer = CssNode::rule(
        "@layer base",
        IndexMap::from([(":root".to_string(), Decl::Block(root))]),
    );

    // Fixed emission order: tokens, base layer, variant, utilities,
    // accent block. It matters for cascade precedence.
    let mut nodes = vec![
        CssNode::rule(
            "@theme",
            theme
                .into_iter()
                .map(|(name, value)| (name, Decl::Value(value)))
                .collect(),
        ),
        base_layer,
    ];
    if let Some(at_rule) = custom_variant {
        nodes.push(CssNode::Literal(at_rule));
    }
    nodes.push(CssNode::Rules(utility));
    if !dynamic.is_empty() {
        nodes.push(CssNode::rule(
            "@layer utilities",
            IndexMap::from([("[class*=\"theme-\"]".to_string(), Decl::Block(dynamic))]),
        ));
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::render;

    fn config(json: &str) -> ColorsData {
        validate(&serde_json::from_str(json).unwrap()).unwrap()
    }

    fn two_mode_json(adapter: bool) -> String {
        format!(
            r##"{{
                "schemes": {{ "modes": ["light", "dark"], "toggle": "class" }},
                "colors": {{
                    "base": "surface",
                    "map": {{
                        "primary": {{
                            "surface": ["#ffffff", "#111111"],
                            "on-surface": ["#222222", "#eeeeee"],
                            "accent": ["#3f51b5", "#9fa8da"],
                            "on-accent": ["#ffffff", "#11131f"]
                        }},
                        "muted": {{
                            "surface": ["--primary-surface"]
                        }}
                    }}
                }},
                "default": "primary"{}
            }}"##,
            if adapter { r#", "adapter": "reference""# } else { "" }
        )
    }

    #[test]
    fn test_two_mode_class_toggle_output() {
        let nodes = resolve(&config(&two_mode_json(false))).unwrap();
        let text = render(&nodes);

        assert!(text.contains(":root {"));
        assert!(text.contains("&.dark {"));
        assert!(text.contains("color-scheme: dark;"));
        assert!(text.contains("color-scheme: light;"));
        assert!(text.contains("@custom-variant dark (&:where(.dark, .dark *));"));
        // Second-mode literals live inside the override block.
        assert!(text.contains("--color-primary: #111111;"));
    }

    #[test]
    fn test_direct_resolution_without_adapter() {
        let nodes = resolve(&config(&two_mode_json(false))).unwrap();
        let text = render(&nodes);

        assert!(text.contains("--color-primary: #ffffff;"));
        assert!(text.contains("--color-primary-fixed: #ffffff;"));
        assert!(text.contains("--color-muted: var(--color-primary-surface);"));
        assert!(text.contains("--color-surface: var(--color-primary-surface);"));
        assert!(!text.contains("--sc-color"));
    }

    #[test]
    fn test_reference_adapter_indirection() {
        let nodes = resolve(&config(&two_mode_json(true))).unwrap();
        let text = render(&nodes);

        // Public tokens point into the internal namespace.
        assert!(text.contains("--color-primary: var(--sc-color-primary-surface);"));
        assert!(text.contains("--color-surface: var(--sc-color-surface);"));
        // The internal namespace carries the concrete values in :root.
        assert!(text.contains("--sc-color-primary-surface: #ffffff;"));
        assert!(text.contains("--sc-color-surface: #ffffff;"));
        // Fixed tokens stay root-resolved.
        assert!(text.contains("--color-primary-fixed: #ffffff;"));
    }

    #[test]
    fn test_utility_classes_per_key() {
        let nodes = resolve(&config(&two_mode_json(false))).unwrap();
        let text = render(&nodes);

        assert!(text.contains("@utility theme-primary {"));
        assert!(text.contains("@utility theme-primary-fixed {"));
        assert!(text.contains("@utility theme-muted {"));
        assert!(text.contains("--color-surface: var(--color-primary-surface);"));
    }

    #[test]
    fn test_accent_pairing_emits_dynamic_block() {
        let nodes = resolve(&config(&two_mode_json(false))).unwrap();
        let text = render(&nodes);

        assert!(text.contains("@layer utilities {"));
        assert!(text.contains("[class*=\"theme-\"] {"));
        assert!(text.contains(":is(.theme-primary) .theme-accent {"));
        assert!(text.contains(":is(.theme-primary-fixed) .theme-accent {"));
        // "muted" has no accent pair and contributes nothing there.
        assert!(!text.contains(":is(.theme-muted) .theme-accent"));
    }

    #[test]
    fn test_unpaired_accent_is_silently_skipped() {
        let data = config(
            r##"{
                "colors": {
                    "base": "surface",
                    "map": { "plain": { "surface": ["#123456"], "accent": ["#654321"] } }
                },
                "default": "plain"
            }"##,
        );
        let nodes = resolve(&data).unwrap();
        let text = render(&nodes);
        assert!(!text.contains("@layer utilities"));
        assert!(!text.contains(".theme-accent"));
    }

    #[test]
    fn test_single_mode_has_no_variant_or_overrides() {
        let data = config(
            r##"{
                "schemes": { "modes": ["light"], "toggle": "class" },
                "colors": {
                    "base": "surface",
                    "map": { "plain": { "surface": ["#123456"] } }
                },
                "default": "plain"
            }"##,
        );
        let text = render(&resolve(&data).unwrap());
        assert!(!text.contains("@custom-variant"));
        assert!(!text.contains("&.dark"));
        assert!(text.contains("color-scheme: light;"));
    }

    #[test]
    fn test_auto_toggle_uses_media_query() {
        let data = config(
            r##"{
                "schemes": { "modes": ["light", "dark"] },
                "colors": {
                    "base": "surface",
                    "map": { "plain": { "surface": ["#123456", "#654321"] } }
                },
                "default": "plain"
            }"##,
        );
        let text = render(&resolve(&data).unwrap());
        assert!(text.contains("@media (prefers-color-scheme: dark) {"));
        assert!(!text.contains("@custom-variant"));
    }

    #[test]
    fn test_attr_toggle_selector_and_variant() {
        let data = config(
            r##"{
                "schemes": { "modes": ["light", "dark"], "toggle": "attr" },
                "colors": {
                    "base": "surface",
                    "map": { "plain": { "surface": ["#123456", "#654321"] } }
                },
                "default": "plain"
            }"##,
        );
        let text = render(&resolve(&data).unwrap());
        assert!(text.contains("&[data-theme=\"dark\"] {"));
        assert!(text.contains("@custom-variant dark (&:where([data-theme=dark], [data-theme=dark] *));"));
    }

    #[test]
    fn test_invalid_base_color_aborts_resolution() {
        let data = config(
            r#"{
                "colors": {
                    "base": "surface",
                    "map": { "plain": { "surface": ["not-a-color"] } }
                },
                "default": "plain"
            }"#,
        );
        let err = resolve(&data).unwrap_err();
        assert!(err
            .messages()
            .iter()
            .any(|m| m.contains("invalid base color for \"plain\"")));
    }

    #[test]
    fn test_validate_missing_sections() {
        let err = validate(&serde_json::from_str(r#"{ "schemes": 4 }"#).unwrap()).unwrap_err();
        let messages = err.messages();
        assert!(messages.iter().any(|m| m.contains("'schemes' must be an object")));
        assert!(messages.iter().any(|m| m.contains("missing 'colors' section")));
        assert!(messages.iter().any(|m| m.contains("missing 'default'")));
    }

    #[test]
    fn test_validate_default_key_must_exist() {
        let err = validate(
            &serde_json::from_str(
                r##"{
                    "colors": { "base": "surface", "map": { "a": { "surface": ["#fff"] } } },
                    "default": "missing"
                }"##,
            )
            .unwrap(),
        )
        .unwrap_err();
        assert!(err
            .messages()
            .iter()
            .any(|m| m.contains("\"missing\" is not defined")));
    }

    #[test]
    fn test_validate_rejects_long_value_arrays() {
        let err = validate(
            &serde_json::from_str(
                r##"{
                    "colors": {
                        "base": "surface",
                        "map": { "a": { "surface": ["#fff", "#000", "#111"] } }
                    },
                    "default": "a"
                }"##,
            )
            .unwrap(),
        )
        .unwrap_err();
        assert!(err
            .messages()
            .iter()
            .any(|m| m.contains("\"a.surface\" must be an array of one or two values")));
    }

    #[test]
    fn test_validate_unknown_field() {
        let err = validate(
            &serde_json::from_str(
                r##"{
                    "colors": { "base": "surface", "map": { "a": { "surface": ["#fff"] } } },
                    "default": "a",
                    "pallette": {}
                }"##,
            )
            .unwrap(),
        )
        .unwrap_err();
        assert!(err
            .messages()
            .iter()
            .any(|m| m.contains("unknown field \"pallette\"")));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let data = config(&two_mode_json(true));
        let first = render(&resolve(&data).unwrap());
        let second = render(&resolve(&data).unwrap());
        assert_eq!(first, second);
    }
}
