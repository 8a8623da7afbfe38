//! Kind classification table.
//!
//! Maps declaration node kinds to the single-character ctags kind codes and
//! their labels. The codes are a stable external contract (the tags file
//! format) and must not be renamed.

use crate::ast::NodeKind;

/// Ordered classification table. Order matters for the deduplicated
/// supported-kinds listing.
const KIND_TABLE: &[(NodeKind, char, &str)] = &[
    (NodeKind::Property, 'p', "property"),
    (NodeKind::Method, 'm', "method"),
    (NodeKind::Constructor, 'm', "method"),
    (NodeKind::GetAccessor, 'm', "method"),
    (NodeKind::SetAccessor, 'm', "method"),
    (NodeKind::Variable, 'v', "variable"),
    (NodeKind::Function, 'f', "function"),
    (NodeKind::Class, 'C', "class"),
    (NodeKind::Interface, 'i', "interface"),
    (NodeKind::TypeAlias, 't', "typealias"),
    (NodeKind::Enum, 'e', "enum"),
    (NodeKind::Module, 'M', "module"),
    (NodeKind::Import, 'I', "import"),
];

/// Look up the kind code and label for a node kind.
///
/// Absent kinds produce no match; the node's subtree is still traversed.
pub fn classify(kind: NodeKind) -> Option<(char, &'static str)> {
    KIND_TABLE
        .iter()
        .find(|(k, _, _)| *k == kind)
        .map(|&(_, code, label)| (code, label))
}

/// List the supported kinds as `<code>  <label>` lines.
///
/// Deduplicates the classification table in order and appends the synthetic
/// `c  const` entry for constant bindings, which are detected structurally
/// rather than via a distinct node kind.
pub fn supported_kinds() -> Vec<String> {
    let mut seen = Vec::new();
    for &(_, code, label) in KIND_TABLE {
        let line = format!("{code}  {label}");
        if !seen.contains(&line) {
            seen.push(line);
        }
    }
    seen.push("c  const".to_string());
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_class() {
        assert_eq!(classify(NodeKind::Class), Some(('C', "class")));
    }

    #[test]
    fn test_classify_method_family() {
        // Constructor and accessors all share the method code
        for kind in [
            NodeKind::Method,
            NodeKind::Constructor,
            NodeKind::GetAccessor,
            NodeKind::SetAccessor,
        ] {
            assert_eq!(classify(kind), Some(('m', "method")), "kind: {:?}", kind);
        }
    }

    #[test]
    fn test_classify_unsupported() {
        assert_eq!(classify(NodeKind::Other), None);
        assert_eq!(classify(NodeKind::SourceFile), None);
    }

    #[test]
    fn test_supported_kinds_deduplicates_method() {
        let kinds = supported_kinds();
        let method_lines = kinds.iter().filter(|l| l.as_str() == "m  method").count();
        assert_eq!(method_lines, 1, "kinds: {:?}", kinds);
    }

    #[test]
    fn test_supported_kinds_ends_with_const() {
        let kinds = supported_kinds();
        assert_eq!(kinds.last().map(String::as_str), Some("c  const"));
    }

    #[test]
    fn test_supported_kinds_listing() {
        let kinds = supported_kinds();
        assert_eq!(
            kinds,
            vec![
                "p  property",
                "m  method",
                "v  variable",
                "f  function",
                "C  class",
                "i  interface",
                "t  typealias",
                "e  enum",
                "M  module",
                "I  import",
                "c  const",
            ]
        );
    }
}
