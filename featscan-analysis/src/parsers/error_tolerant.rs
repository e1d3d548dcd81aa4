//! Syntax diagnostics: turn ERROR and MISSING nodes into positioned messages.

use featscan_core::errors::SyntaxDiagnostic;
use tree_sitter::Node;

use super::types::Position;

/// Longest token excerpt quoted in a diagnostic.
const MAX_EXCERPT_CHARS: usize = 32;

/// Count ERROR and MISSING nodes in a tree.
pub fn count_errors(root: Node) -> u32 {
    if !root.has_error() {
        return 0;
    }
    let own = u32::from(root.is_error() || root.is_missing());
    let mut cursor = root.walk();
    let nested: u32 = root.children(&mut cursor).map(count_errors).sum();
    own + nested
}

/// Collect up to `limit` diagnostics in document order.
///
/// ERROR subtrees are reported once at their outermost node.
pub fn collect_diagnostics(root: Node, source: &[u8], limit: usize) -> Vec<SyntaxDiagnostic> {
    let mut out = Vec::new();
    collect(root, source, limit, &mut out);
    out
}

fn collect(node: Node, source: &[u8], limit: usize, out: &mut Vec<SyntaxDiagnostic>) {
    if out.len() >= limit {
        return;
    }
    if node.is_missing() {
        out.push(diagnostic(&node, format!("Missing {}", node.kind())));
        return;
    }
    if node.is_error() {
        out.push(diagnostic(&node, describe_error(&node, source)));
        return;
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, limit, out);
    }
}

fn diagnostic(node: &Node, description: String) -> SyntaxDiagnostic {
    let start = Position::from_ts_point(node.start_position());
    SyntaxDiagnostic {
        index: node.start_byte(),
        line: start.line as usize,
        column: start.column as usize,
        description,
    }
}

fn describe_error(node: &Node, source: &[u8]) -> String {
    if node.start_byte() >= source.len() {
        return "Unexpected end of input".to_string();
    }
    let mut leaf = *node;
    while let Some(child) = leaf.child(0) {
        leaf = child;
    }
    match leaf.utf8_text(source) {
        Ok(text) if !text.trim().is_empty() => {
            let excerpt: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
            format!("Unexpected token {excerpt}")
        }
        _ => "Unexpected token".to_string(),
    }
}
