//! ES2015 features: arrows, block scoping, classes, modules, destructuring,
//! spread/rest, templates, generators, `for..of`.

use std::sync::Arc;

use crate::define_feature;
use crate::features::traits::{EsEdition, FeatureDetector, Finding, NodeContext};
use crate::parsers::types::Span;

/// Parents under which a pattern is part of a larger destructuring pattern.
const NESTED_PATTERN_PARENTS: &[&str] = &[
    "object_pattern",
    "array_pattern",
    "pair_pattern",
    "rest_pattern",
    "object_assignment_pattern",
];

define_feature!(
    /// `(a, b) => a + b`
    ArrowFunction, "arrow-function", EsEdition::Es2015, ["arrow_function"],
    "Arrow function expressions",
    |ctx| Some(Finding::at(&ctx.node).with("async", ctx.has_token("async")))
);

define_feature!(
    LetDeclaration, "let-declaration", EsEdition::Es2015,
    ["lexical_declaration", "for_in_statement"],
    "Block-scoped `let` bindings",
    |ctx| declaration_with_keyword(ctx, "let")
);

define_feature!(
    ConstDeclaration, "const-declaration", EsEdition::Es2015,
    ["lexical_declaration", "for_in_statement"],
    "Block-scoped `const` bindings",
    |ctx| declaration_with_keyword(ctx, "const")
);

define_feature!(
    /// Plain and tagged template strings.
    TemplateLiteral, "template-literal", EsEdition::Es2015, ["template_string"],
    "Template literals",
    |ctx| {
        let tagged = ctx.parent.is_some_and(|p| {
            p.kind() == "call_expression" && p.child_by_field_name("arguments") == Some(ctx.node)
        });
        let mut cursor = ctx.node.walk();
        let substitutions = ctx
            .node
            .named_children(&mut cursor)
            .filter(|c| c.kind() == "template_substitution")
            .count();
        Some(
            Finding::at(&ctx.node)
                .with("tagged", tagged)
                .with("substitutions", substitutions),
        )
    }
);

define_feature!(
    Class, "class", EsEdition::Es2015, ["class_declaration", "class"],
    "Class declarations and expressions",
    |ctx| {
        let mut finding = Finding::at(&ctx.node)
            .with("declaration", ctx.node.kind() == "class_declaration");
        if let Some(name) = ctx.field_text("name") {
            finding = finding.with("name", name);
        }
        let mut cursor = ctx.node.walk();
        let extends = ctx
            .node
            .named_children(&mut cursor)
            .any(|c| c.kind() == "class_heritage");
        Some(finding.with("extends", extends))
    }
);

define_feature!(
    /// `[...xs]`, `f(...args)`. Object spread is ES2018.
    SpreadElement, "spread-element", EsEdition::Es2015, ["spread_element"],
    "Spread in array literals and argument lists",
    |ctx| match ctx.parent_kind() {
        Some(context @ ("array" | "arguments")) => {
            Some(Finding::at(&ctx.node).with("context", context))
        }
        _ => None,
    }
);

define_feature!(
    RestParameter, "rest-parameter", EsEdition::Es2015, ["rest_pattern"],
    "Rest parameters",
    |ctx| (ctx.parent_kind() == Some("formal_parameters")).then(|| Finding::at(&ctx.node))
);

define_feature!(
    DefaultParameter, "default-parameter", EsEdition::Es2015, ["assignment_pattern"],
    "Default parameter values",
    |ctx| {
        if ctx.parent_kind() != Some("formal_parameters") {
            return None;
        }
        let mut finding = Finding::at(&ctx.node);
        if let Some(name) = ctx.field_text("left") {
            finding = finding.with("name", name);
        }
        Some(finding)
    }
);

define_feature!(
    /// Reported once per outermost pattern.
    Destructuring, "destructuring", EsEdition::Es2015, ["object_pattern", "array_pattern"],
    "Destructuring binding and assignment patterns",
    |ctx| {
        let parent = ctx.parent?;
        let outermost = match parent.kind() {
            kind if NESTED_PATTERN_PARENTS.contains(&kind) => false,
            // `function f({ a } = {})`
            "assignment_pattern" => parent
                .parent()
                .is_some_and(|gp| gp.kind() == "formal_parameters"),
            _ => true,
        };
        let pattern = if ctx.node.kind() == "object_pattern" { "object" } else { "array" };
        outermost.then(|| Finding::at(&ctx.node).with("pattern", pattern))
    }
);

define_feature!(
    ForOf, "for-of", EsEdition::Es2015, ["for_in_statement"],
    "`for..of` loops",
    |ctx| ctx
        .has_token("of")
        .then(|| Finding::at(&ctx.node).with("await", ctx.has_token("await")))
);

define_feature!(
    Generator, "generator", EsEdition::Es2015,
    ["generator_function_declaration", "generator_function", "method_definition"],
    "Generator functions and methods",
    |ctx| {
        if ctx.node.kind() == "method_definition" && !ctx.has_token("*") {
            return None;
        }
        let mut finding = Finding::at(&ctx.node);
        if let Some(name) = ctx.field_text("name") {
            finding = finding.with("name", name);
        }
        Some(finding)
    }
);

define_feature!(
    /// `{ a, b }` in object literals.
    ShorthandProperty, "shorthand-property", EsEdition::Es2015, ["shorthand_property_identifier"],
    "Shorthand property names",
    |ctx| Some(Finding::at(&ctx.node).with("name", ctx.text()))
);

define_feature!(
    ComputedProperty, "computed-property", EsEdition::Es2015, ["computed_property_name"],
    "Computed property names",
    |ctx| Some(Finding::at(&ctx.node))
);

define_feature!(
    ModuleImport, "module-import", EsEdition::Es2015, ["import_statement"],
    "Static `import` declarations",
    |ctx| {
        let mut finding = Finding::at(&ctx.node);
        if let Some(source) = ctx.field_text("source") {
            finding = finding.with("source", unquote(source));
        }
        Some(finding)
    }
);

define_feature!(
    ModuleExport, "module-export", EsEdition::Es2015, ["export_statement"],
    "`export` declarations",
    |ctx| Some(Finding::at(&ctx.node).with("default", ctx.has_token("default")))
);

define_feature!(
    NewTarget, "new-target", EsEdition::Es2015, ["meta_property"],
    "`new.target` meta property",
    |ctx| ctx.text().starts_with("new").then(|| Finding::at(&ctx.node))
);

/// `let`/`const` in a declaration or in a `for..in`/`for..of` header.
fn declaration_with_keyword(ctx: &NodeContext<'_, '_>, keyword: &str) -> Option<Finding> {
    let mut cursor = ctx.node.walk();
    let keyword_node = ctx
        .node
        .children(&mut cursor)
        .find(|c| !c.is_named() && c.kind() == keyword)?;
    if ctx.node.kind() == "lexical_declaration" {
        return Some(Finding::at(&ctx.node));
    }
    let left = ctx.node.child_by_field_name("left").unwrap_or(keyword_node);
    Some(Finding::spanning(Span::covering(&keyword_node, &left)))
}

fn unquote(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '\'')
}

pub fn detectors() -> Vec<Arc<dyn FeatureDetector>> {
    vec![
        Arc::new(ArrowFunction),
        Arc::new(LetDeclaration),
        Arc::new(ConstDeclaration),
        Arc::new(TemplateLiteral),
        Arc::new(Class),
        Arc::new(SpreadElement),
        Arc::new(RestParameter),
        Arc::new(DefaultParameter),
        Arc::new(Destructuring),
        Arc::new(ForOf),
        Arc::new(Generator),
        Arc::new(ShorthandProperty),
        Arc::new(ComputedProperty),
        Arc::new(ModuleImport),
        Arc::new(ModuleExport),
        Arc::new(NewTarget),
    ]
}
