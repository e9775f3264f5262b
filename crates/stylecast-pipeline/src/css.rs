//! CSS tree model and serializer.
//!
//! Resolvers produce an ordered sequence of [`CssNode`]s; the
//! serializer walks it and emits text. Serialization is purely
//! structural: no minification, no deduplication, no selector syntax
//! checks. Identical input yields byte-identical output.

use indexmap::IndexMap;

/// The body of a rule: declaration names mapped to values or nested blocks.
pub type Declarations = IndexMap<String, Decl>;

/// One entry inside a rule body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// A `name: value;` declaration line.
    Value(String),
    /// A nested block (`&.dark { ... }`, `@media ... { ... }`).
    Block(Declarations),
}

/// A top-level element of the serializer's input.
#[derive(Debug, Clone, PartialEq)]
pub enum CssNode {
    /// Raw at-rule or rule text, emitted verbatim plus a newline.
    Literal(String),
    /// One or more selector/at-rule blocks with nested bodies.
    Rules(IndexMap<String, Declarations>),
}

impl CssNode {
    /// Convenience constructor for a node holding a single block.
    pub fn rule(selector: impl Into<String>, body: Declarations) -> Self {
        CssNode::Rules(IndexMap::from([(selector.into(), body)]))
    }
}

/// Renders a node sequence to CSS text, two-space indented.
pub fn render(nodes: &[CssNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            CssNode::Literal(text) => {
                out.push_str(text);
                out.push('\n');
            }
            CssNode::Rules(rules) => {
                for (selector, body) in rules {
                    out.push_str(selector);
                    out.push_str(" {\n");
                    render_declarations(body, 2, &mut out);
                    out.push_str("}\n");
                }
            }
        }
    }
    out
}

fn render_declarations(declarations: &Declarations, indent: usize, out: &mut String) {
    let pad = " ".repeat(indent);
    for (name, decl) in declarations {
        match decl {
            Decl::Value(value) => {
                out.push_str(&pad);
                out.push_str(name);
                out.push_str(": ");
                out.push_str(value);
                out.push_str(";\n");
            }
            Decl::Block(inner) => {
                out.push_str(&pad);
                out.push_str(name);
                out.push_str(" {\n");
                render_declarations(inner, indent + 2, out);
                out.push_str(&pad);
                out.push_str("}\n");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(pairs: &[(&str, &str)]) -> Declarations {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Decl::Value(v.to_string())))
            .collect()
    }

    #[test]
    fn test_literal_is_verbatim() {
        let nodes = vec![CssNode::Literal("@import \"./base.css\";".to_string())];
        assert_eq!(render(&nodes), "@import \"./base.css\";\n");
    }

    #[test]
    fn test_flat_block() {
        let nodes = vec![CssNode::rule(
            "@theme",
            decls(&[("--text-body", "1rem"), ("--text-lead", "1.25rem")]),
        )];
        assert_eq!(
            render(&nodes),
            "@theme {\n  --text-body: 1rem;\n  --text-lead: 1.25rem;\n}\n"
        );
    }

    #[test]
    fn test_nested_blocks_indent_two_spaces_per_level() {
        let mut root = Declarations::new();
        root.insert("color-scheme".to_string(), Decl::Value("light".to_string()));
        root.insert(
            "&.dark".to_string(),
            Decl::Block(decls(&[("color-scheme", "dark")])),
        );
        let mut layer = Declarations::new();
        layer.insert(":root".to_string(), Decl::Block(root));
        let nodes = vec![CssNode::rule("@layer base", layer)];

        assert_eq!(
            render(&nodes),
            "@layer base {\n  :root {\n    color-scheme: light;\n    &.dark {\n      color-scheme: dark;\n    }\n  }\n}\n"
        );
    }

    #[test]
    fn test_multiple_blocks_in_one_node() {
        let nodes = vec![CssNode::Rules(IndexMap::from([
            ("@utility theme-a".to_string(), decls(&[("--color-x", "red")])),
            ("@utility theme-b".to_string(), decls(&[("--color-x", "blue")])),
        ]))];
        let text = render(&nodes);
        assert!(text.contains("@utility theme-a {\n  --color-x: red;\n}\n"));
        assert!(text.contains("@utility theme-b {\n  --color-x: blue;\n}\n"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut body = Declarations::new();
        body.insert(
            "@media (min-width: 48rem)".to_string(),
            Decl::Block(decls(&[("--layout-columns-count", "6")])),
        );
        body.insert("--layout-gap".to_string(), Decl::Value("1rem".to_string()));
        let nodes = vec![
            CssNode::Literal("/* header */".to_string()),
            CssNode::rule("[data-layout]", body),
        ];
        assert_eq!(render(&nodes), render(&nodes));
    }
}
