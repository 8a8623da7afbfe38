//! Declaration extraction.
//!
//! Recursive pre-order walk over a parsed syntax tree. Each node is
//! classified against the kind table; taggable nodes produce one entry with a
//! scope-qualified, visibility-marked name and a line anchor, then every
//! child is visited with the (possibly updated) enclosing scope.

use crate::anchor::AnchorResolver;
use crate::ast::{AstNode, Modifier, NodeKind, Tokenizer};
use crate::config::ExtractOptions;
use crate::error::TagsError;
use crate::kinds;
use crate::tags::{TagEntry, TagFile};
use tracing::debug;

/// The nearest enclosing module/class/interface/type-literal-variable scope,
/// threaded through the traversal. Never stored in an entry.
struct Scope {
    name: String,
    is_module: bool,
}

struct Traversal<'a, T: Tokenizer> {
    resolver: AnchorResolver<'a>,
    tokenizer: &'a mut T,
    options: &'a ExtractOptions,
    file: String,
    tags: &'a mut TagFile,
}

/// Extract tag entries for every taggable declaration under `root`, appending
/// them to the shared collection in traversal order.
///
/// `file_name` is the path of the originating file as supplied by the caller;
/// it is resolved to an absolute path unless the options request paths as
/// given.
pub fn extract<N: AstNode, T: Tokenizer>(
    root: &N,
    source: &str,
    file_name: &str,
    tokenizer: &mut T,
    options: &ExtractOptions,
    tags: &mut TagFile,
) -> Result<(), TagsError> {
    let file = if options.tag_relative {
        file_name.to_string()
    } else {
        std::path::absolute(file_name)?.to_string_lossy().into_owned()
    };

    debug!(file = %file, "extracting declarations");
    let before = tags.len();

    let mut traversal = Traversal {
        resolver: AnchorResolver::new(source),
        tokenizer,
        options,
        file,
        tags,
    };
    traversal.visit(root, None)?;

    debug!(count = traversal.tags.len() - before, "extraction complete");
    Ok(())
}

impl<T: Tokenizer> Traversal<'_, T> {
    fn visit<N: AstNode>(&mut self, node: &N, scope: Option<&Scope>) -> Result<(), TagsError> {
        let node_kind = node.kind();

        let mut name_override = None;
        let mut code_override = None;
        let installs_scope = match node_kind {
            NodeKind::Constructor => {
                name_override = Some("constructor".to_string());
                false
            }
            NodeKind::Module | NodeKind::Class | NodeKind::Interface => true,
            NodeKind::Variable => {
                if node.has_modifier(Modifier::Const) {
                    code_override = Some('c');
                }
                node.has_type_literal_annotation()
            }
            _ => false,
        };

        if let Some((code, _)) = kinds::classify(node_kind) {
            let code = code_override.unwrap_or(code);
            // Filter on the effective code before any name computation
            if self.options.kind_allowed(code) {
                let base = match name_override {
                    Some(name) => name,
                    None => node
                        .identifier()
                        .ok_or_else(|| self.missing_identifier(node))?,
                };

                // Prepend the module name to all first-level declarations,
                // and the class/interface name only to members that are not
                // plain variables.
                let name = match scope {
                    Some(s) if s.is_module || node_kind != NodeKind::Variable => {
                        let marker = if node.has_modifier(Modifier::Public) {
                            "+"
                        } else if node.has_modifier(Modifier::Private) {
                            "-"
                        } else {
                            ""
                        };
                        format!("{marker} {}#{base}", s.name)
                    }
                    _ => base,
                };

                let anchor = self.resolver.resolve(node.start_offset(), &mut *self.tokenizer);
                self.tags.add(TagEntry {
                    name,
                    file: self.file.clone(),
                    pattern: anchor.text,
                    kind_code: code,
                    line: anchor.line,
                });
            }
        }

        let installed;
        let child_scope = if installs_scope {
            installed = Scope {
                name: node
                    .identifier()
                    .ok_or_else(|| self.missing_identifier(node))?,
                is_module: node_kind == NodeKind::Module,
            };
            Some(&installed)
        } else {
            scope
        };

        for child in node.children() {
            self.visit(&child, child_scope)?;
        }
        Ok(())
    }

    fn missing_identifier<N: AstNode>(&self, node: &N) -> TagsError {
        TagsError::MissingIdentifier {
            kind: node.kind(),
            line: self.tokenizer.line_number(node.start_offset()),
        }
    }
}
