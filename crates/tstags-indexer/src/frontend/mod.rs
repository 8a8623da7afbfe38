//! Tree-sitter TypeScript front-end.
//!
//! Implements the [`crate::ast`] capability traits over the
//! tree-sitter-typescript grammar: parsed trees are exposed as [`TsNode`]s
//! and source text is scanned with [`TriviaScanner`]. Any other front-end
//! answering the same traits can be substituted for this one.

mod node;
mod scanner;

pub use node::TsNode;
pub use scanner::TriviaScanner;

use crate::config::ScriptTarget;
use crate::error::TagsError;
use std::path::Path;
use tracing::debug;

/// A parsed TypeScript source file.
pub struct SourceTree {
    tree: tree_sitter::Tree,
}

impl SourceTree {
    /// Parse source text into a syntax tree.
    ///
    /// The target version is accepted as an opaque passthrough; tree-sitter
    /// parses all versions with one grammar.
    pub fn parse(source: &str, path: &Path, target: ScriptTarget) -> Result<Self, TagsError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT;
        parser
            .set_language(&language.into())
            .map_err(|e| TagsError::Parse {
                path: path.to_path_buf(),
                message: format!("failed to set language: {e}"),
            })?;

        debug!(path = ?path, target = target.name(), "parsing source");

        let tree = parser.parse(source, None).ok_or_else(|| TagsError::Parse {
            path: path.to_path_buf(),
            message: "failed to parse source".to_string(),
        })?;

        Ok(Self { tree })
    }

    /// The root node, viewed through the extraction traits.
    pub fn root<'a>(&'a self, source: &'a str) -> TsNode<'a> {
        TsNode::new(self.tree.root_node(), source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_source() {
        let tree = SourceTree::parse("function f() {}", Path::new("a.ts"), ScriptTarget::Es6);
        assert!(tree.is_ok());
    }

    #[test]
    fn test_root_is_source_file() {
        use crate::ast::{AstNode, NodeKind};

        let source = "class A {}";
        let tree = SourceTree::parse(source, Path::new("a.ts"), ScriptTarget::Es6).unwrap();
        assert_eq!(tree.root(source).kind(), NodeKind::SourceFile);
    }
}
