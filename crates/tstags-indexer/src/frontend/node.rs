//! [`AstNode`] implementation over tree-sitter TypeScript nodes.

use crate::ast::{AstNode, Modifier, NodeKind};
use tree_sitter::Node;

/// A tree-sitter node paired with its source text, viewed through the
/// extraction traits.
#[derive(Clone, Copy)]
pub struct TsNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> TsNode<'a> {
    pub(crate) fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    fn text_of(&self, node: Node<'a>) -> Option<String> {
        node.utf8_text(self.source.as_bytes())
            .ok()
            .map(|s| s.to_string())
    }

    /// The node that declares this node's name: the `name` field when
    /// present, else the first direct `identifier`/`type_identifier` child.
    fn name_node(&self) -> Option<Node<'a>> {
        if let Some(name) = self.node.child_by_field_name("name") {
            return Some(name);
        }
        let mut cursor = self.node.walk();
        let found = self
            .node
            .children(&mut cursor)
            .find(|c| c.kind() == "identifier" || c.kind() == "type_identifier");
        found
    }

    /// The single identifier bound by an import statement, if any: a default
    /// import, a namespace import, or a require-style binding. Named-imports
    /// statements bind no single name and return `None`.
    fn import_binding(&self) -> Option<Node<'a>> {
        let mut cursor = self.node.walk();
        for child in self.node.named_children(&mut cursor) {
            match child.kind() {
                "import_clause" => {
                    let mut inner = child.walk();
                    for c in child.named_children(&mut inner) {
                        match c.kind() {
                            "identifier" => return Some(c),
                            "namespace_import" => return named_child_of_kind(c, "identifier"),
                            _ => {}
                        }
                    }
                }
                "import_require_clause" => return named_child_of_kind(child, "identifier"),
                _ => {}
            }
        }
        None
    }
}

fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == kind);
    found
}

fn named_child_of_kind<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

impl AstNode for TsNode<'_> {
    fn kind(&self) -> NodeKind {
        match self.node.kind() {
            "program" => NodeKind::SourceFile,
            "class_declaration" | "abstract_class_declaration" => NodeKind::Class,
            "interface_declaration" => NodeKind::Interface,
            "enum_declaration" => NodeKind::Enum,
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                NodeKind::Function
            }
            "type_alias_declaration" => NodeKind::TypeAlias,
            // `module M {}` and `namespace N {}` respectively
            "module" | "internal_module" => NodeKind::Module,
            "variable_declarator" => {
                // Destructuring patterns bind no single name
                match self.node.child_by_field_name("name") {
                    Some(n) if n.kind() == "identifier" => NodeKind::Variable,
                    _ => NodeKind::Other,
                }
            }
            "public_field_definition" | "property_signature" => NodeKind::Property,
            "method_definition" | "method_signature" | "abstract_method_signature" => {
                if has_child_kind(self.node, "get") {
                    NodeKind::GetAccessor
                } else if has_child_kind(self.node, "set") {
                    NodeKind::SetAccessor
                } else if self.node.kind() == "method_definition"
                    && self.identifier().as_deref() == Some("constructor")
                {
                    NodeKind::Constructor
                } else {
                    NodeKind::Method
                }
            }
            "import_statement" => {
                if self.import_binding().is_some() {
                    NodeKind::Import
                } else {
                    NodeKind::Other
                }
            }
            _ => NodeKind::Other,
        }
    }

    fn identifier(&self) -> Option<String> {
        let name = if self.node.kind() == "import_statement" {
            self.import_binding()?
        } else {
            self.name_node()?
        };
        let text = self.text_of(name)?;
        if name.kind() == "string" {
            // `declare module "express"` carries a string name
            Some(text.trim_matches(|c| c == '"' || c == '\'').to_string())
        } else {
            Some(text)
        }
    }

    fn has_modifier(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Public | Modifier::Private => {
                let want = if modifier == Modifier::Public {
                    "public"
                } else {
                    "private"
                };
                let mut cursor = self.node.walk();
                let found = self.node.children(&mut cursor).any(|c| {
                    c.kind() == "accessibility_modifier"
                        && c.utf8_text(self.source.as_bytes()) == Ok(want)
                });
                found
            }
            Modifier::Const => {
                self.node.kind() == "variable_declarator"
                    && self
                        .node
                        .parent()
                        .map_or(false, |p| {
                            p.kind() == "lexical_declaration" && has_child_kind(p, "const")
                        })
            }
        }
    }

    fn has_type_literal_annotation(&self) -> bool {
        self.node
            .child_by_field_name("type")
            .map_or(false, |annotation| {
                let mut cursor = annotation.walk();
                let found = annotation
                    .named_children(&mut cursor)
                    .any(|c| c.kind() == "object_type");
                found
            })
    }

    fn start_offset(&self) -> usize {
        self.node.start_byte()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        let children = self
            .node
            .named_children(&mut cursor)
            .map(|n| TsNode::new(n, self.source))
            .collect();
        children
    }
}
