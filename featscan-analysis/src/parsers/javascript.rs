//! JavaScript parser.
//!
//! tree-sitter always recovers and hands back a tree; a tree that still holds
//! ERROR or MISSING nodes is reported as [`ParseError::Syntax`] and never
//! reaches the detectors.

use std::cell::RefCell;
use std::time::Instant;

use featscan_core::config::parser_config::{
    ParserConfig, DEFAULT_MAX_DIAGNOSTICS, DEFAULT_MAX_SOURCE_BYTES,
};
use featscan_core::errors::{ParseError, SyntaxDiagnostic};
use tree_sitter::{Language, Parser, Tree};

use super::error_tolerant;

thread_local! {
    static JS_PARSER: RefCell<Option<Parser>> = const { RefCell::new(None) };
}

/// Options passed to every parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collect every syntax diagnostic (up to `max_diagnostics`) instead of
    /// only the first.
    pub tolerant: bool,
    pub max_source_bytes: usize,
    pub max_diagnostics: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tolerant: true,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES as usize,
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}

impl From<&ParserConfig> for ParseOptions {
    fn from(config: &ParserConfig) -> Self {
        Self {
            tolerant: config.effective_tolerant(),
            max_source_bytes: usize::try_from(config.effective_max_source_bytes())
                .unwrap_or(usize::MAX),
            max_diagnostics: config.effective_max_diagnostics(),
        }
    }
}

/// Parses JavaScript source into a tree-sitter tree.
#[derive(Debug, Clone, Default)]
pub struct JavaScriptParser {
    options: ParseOptions,
}

impl JavaScriptParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `source`, failing on any syntax error.
    pub fn parse(&self, source: &str) -> Result<Tree, ParseError> {
        if source.len() > self.options.max_source_bytes {
            return Err(ParseError::SourceTooLarge {
                size: source.len(),
                limit: self.options.max_source_bytes,
            });
        }

        let start = Instant::now();
        let tree = with_parser(|parser| parser.parse(source, None))?.ok_or(ParseError::NoTree)?;
        let parse_time_us = start.elapsed().as_micros() as u64;

        let root = tree.root_node();
        if root.has_error() {
            let limit = if self.options.tolerant {
                self.options.max_diagnostics.max(1)
            } else {
                1
            };
            let mut errors = error_tolerant::collect_diagnostics(root, source.as_bytes(), limit);
            if errors.is_empty() {
                errors.push(SyntaxDiagnostic {
                    index: 0,
                    line: 1,
                    column: 0,
                    description: "Unexpected token".to_string(),
                });
            }
            let first = errors[0].clone();
            tracing::warn!(
                error_count = error_tolerant::count_errors(root),
                first = %first,
                "syntax error in source"
            );
            return Err(ParseError::Syntax { first, errors });
        }

        tracing::debug!(bytes = source.len(), parse_time_us, "parsed source");
        Ok(tree)
    }
}

/// Run `f` with this thread's parser, creating it on first use.
fn with_parser<R>(f: impl FnOnce(&mut Parser) -> R) -> Result<R, ParseError> {
    JS_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(new_parser()?);
        }
        let parser = slot.as_mut().ok_or(ParseError::NoTree)?;
        Ok(f(parser))
    })
}

fn new_parser() -> Result<Parser, ParseError> {
    let language: Language = tree_sitter_javascript::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| ParseError::GrammarUnavailable {
            message: e.to_string(),
        })?;
    Ok(parser)
}
