//! tstags Indexer
//!
//! This crate provides the tag-generation core for tstags, including:
//! - A capability-trait view of a parsed syntax tree (node kinds, modifiers,
//!   spans, children) and its token scanner
//! - Kind classification of declaration nodes into ctags kind codes
//! - Recursive declaration extraction with scope-qualified, visibility-marked
//!   names
//! - Line-anchored search pattern resolution
//! - The tags collection and its extended-format serialization
//! - A tree-sitter based TypeScript front-end implementing the traits

mod error;
pub mod anchor;
pub mod ast;
pub mod config;
pub mod extract;
pub mod frontend;
pub mod kinds;
pub mod tags;

pub use anchor::{escape_pattern, AnchorResolver, LineAnchor};
pub use ast::{AstNode, Modifier, NodeKind, Tokenizer};
pub use config::{ExtractOptions, ScriptTarget};
pub use error::TagsError;
pub use extract::extract;
pub use frontend::{SourceTree, TriviaScanner};
pub use kinds::{classify, supported_kinds};
pub use tags::{TagEntry, TagFile};
