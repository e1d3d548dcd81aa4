//! FeatureDetector trait, the per-node context it receives, and its output.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tree_sitter::Node;

use crate::engine::types::Occurrence;
use crate::parsers::types::Span;

/// Trait that every feature detector implements.
///
/// The driver calls `detect` at every node of the tree, anonymous tokens
/// (`async`, `=>`, `;`) included, regardless of kind. Implementations reject
/// nodes whose kind is not in `node_kinds` first and must not keep state
/// between calls.
pub trait FeatureDetector: Send + Sync {
    /// Stable identifier, unique within a catalog.
    fn id(&self) -> &str;

    /// The ECMAScript edition that introduced the feature.
    fn edition(&self) -> EsEdition;

    fn description(&self) -> &str {
        ""
    }

    /// tree-sitter node kinds this detector can match. Declarative: the
    /// driver does not filter on it, `detect` must do its own rejection.
    fn node_kinds(&self) -> &[&str];

    /// Inspect one node. `None` means no match.
    fn detect(&self, ctx: &NodeContext<'_, '_>) -> Option<Finding>;
}

/// What a detector sees at one node.
#[derive(Clone, Copy)]
pub struct NodeContext<'tree, 'src> {
    pub node: Node<'tree>,
    /// Immediate parent, `None` at the root.
    pub parent: Option<Node<'tree>>,
    pub source: &'src [u8],
}

impl<'tree, 'src> NodeContext<'tree, 'src> {
    pub fn new(node: Node<'tree>, parent: Option<Node<'tree>>, source: &'src [u8]) -> Self {
        Self { node, parent, source }
    }

    pub fn text(&self) -> &'src str {
        node_text(&self.node, self.source)
    }

    pub fn parent_kind(&self) -> Option<&'static str> {
        self.parent.map(|p| p.kind())
    }

    /// Whether the node has an anonymous child token of this kind, e.g. `async`.
    pub fn has_token(&self, token: &str) -> bool {
        has_token(&self.node, token)
    }

    /// Kind of the token in the `operator` field, if any.
    pub fn operator(&self) -> Option<&'static str> {
        self.node.child_by_field_name("operator").map(|op| op.kind())
    }

    pub fn field_text(&self, field: &str) -> Option<&'src str> {
        self.node
            .child_by_field_name(field)
            .map(|n| node_text(&n, self.source))
    }
}

pub fn node_text<'src>(node: &Node, source: &'src [u8]) -> &'src str {
    node.utf8_text(source).unwrap_or("")
}

pub fn has_token(node: &Node, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

/// Occurrence keys owned by the driver; details never override them.
pub const RESERVED_DETAIL_KEYS: &[&str] = &["type", "loc", "range"];

/// A detector's report for one node: where, plus optional extra fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub span: Span,
    pub details: Map<String, Value>,
}

impl Finding {
    /// A finding covering exactly `node`.
    pub fn at(node: &Node) -> Self {
        Self::spanning(Span::from_ts_node(node))
    }

    pub fn spanning(span: Span) -> Self {
        Self {
            span,
            details: Map::new(),
        }
    }

    /// Attach a detector-specific field. Reserved keys are ignored.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        if RESERVED_DETAIL_KEYS.contains(&key) {
            tracing::warn!(key, "ignoring reserved occurrence detail");
            return self;
        }
        self.details.insert(key.to_string(), value.into());
        self
    }

    /// Stamp the finding with the id of the detector that produced it.
    ///
    /// Reserved keys inserted into `details` directly are dropped here.
    pub fn into_occurrence(self, feature: &str) -> Occurrence {
        let mut details = self.details;
        for key in RESERVED_DETAIL_KEYS {
            details.remove(*key);
        }
        Occurrence {
            feature: feature.to_string(),
            span: self.span,
            details,
        }
    }
}

/// ECMAScript editions that introduced the catalogued features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsEdition {
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
}

impl EsEdition {
    pub fn all() -> &'static [EsEdition] {
        &[
            Self::Es2015, Self::Es2016, Self::Es2017, Self::Es2018,
            Self::Es2019, Self::Es2020, Self::Es2021, Self::Es2022,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Es2015 => "es2015",
            Self::Es2016 => "es2016",
            Self::Es2017 => "es2017",
            Self::Es2018 => "es2018",
            Self::Es2019 => "es2019",
            Self::Es2020 => "es2020",
            Self::Es2021 => "es2021",
            Self::Es2022 => "es2022",
        }
    }

    /// Accepts `es2015` style names and the `es6`..`es13` aliases.
    pub fn parse_str(s: &str) -> Option<EsEdition> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es2015" | "es6" => Some(Self::Es2015),
            "es2016" | "es7" => Some(Self::Es2016),
            "es2017" | "es8" => Some(Self::Es2017),
            "es2018" | "es9" => Some(Self::Es2018),
            "es2019" | "es10" => Some(Self::Es2019),
            "es2020" | "es11" => Some(Self::Es2020),
            "es2021" | "es12" => Some(Self::Es2021),
            "es2022" | "es13" => Some(Self::Es2022),
            _ => None,
        }
    }
}

impl fmt::Display for EsEdition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
