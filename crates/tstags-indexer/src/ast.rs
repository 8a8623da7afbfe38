//! Capability-trait view of a parsed syntax tree.
//!
//! The extraction core never touches a concrete parser. It sees nodes through
//! [`AstNode`] and source text through [`Tokenizer`], so any front-end that
//! can answer these questions (kind, declared name, modifiers, span, children;
//! seek/scan/line-lookup) can drive tag generation. The bundled tree-sitter
//! front-end lives in [`crate::frontend`].

use serde::{Deserialize, Serialize};

/// Declaration-relevant node kinds, as a closed set.
///
/// Anything a front-end cannot map onto one of these is reported as `Other`
/// and is only traversed for children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    SourceFile,
    Module,
    Class,
    Interface,
    Enum,
    Function,
    Method,
    Constructor,
    GetAccessor,
    SetAccessor,
    Property,
    Variable,
    TypeAlias,
    Import,
    Other,
}

/// Modifiers the extractor inspects on a declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Declared `public` accessibility
    Public,
    /// Declared `private` accessibility
    Private,
    /// Constant variable binding
    Const,
}

/// A parsed syntax-tree node, as seen by the extractor.
pub trait AstNode: Sized {
    /// Classified kind of this node.
    fn kind(&self) -> NodeKind;

    /// Declared identifier text, if the node binds a single name.
    fn identifier(&self) -> Option<String>;

    /// Whether the given modifier is attached directly to this node.
    fn has_modifier(&self, modifier: Modifier) -> bool;

    /// Whether the declared type of this node is a structural type literal.
    fn has_type_literal_annotation(&self) -> bool;

    /// Raw start offset of this node in the source text.
    fn start_offset(&self) -> usize;

    /// Child nodes, in source order.
    fn children(&self) -> Vec<Self>;
}

/// A token scanner over the original source text.
///
/// Supports re-positioning to an arbitrary offset, scanning forward past
/// trivia to the next significant token, and mapping offsets to line numbers.
pub trait Tokenizer {
    /// Re-position the scanner at the given offset.
    fn seek(&mut self, offset: usize);

    /// Scan forward to the next significant token.
    fn scan(&mut self);

    /// Start offset of the token found by the last [`scan`](Self::scan).
    fn token_start(&self) -> usize;

    /// Map an offset to its 1-based line number.
    fn line_number(&self, offset: usize) -> usize;
}
