//! Line anchor resolution.
//!
//! Given a node's raw start offset, locates the first significant token after
//! it (skipping leading trivia), maps that token to a 1-based line number, and
//! produces an escaped copy of the full source line for use inside a
//! `/^...$/` search pattern.

use crate::ast::Tokenizer;

/// A resolved line anchor for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnchor {
    /// 1-based line number of the declaration's first token
    pub line: usize,
    /// Escaped text of that full source line
    pub text: String,
}

/// Resolves line anchors against one source file.
pub struct AnchorResolver<'a> {
    lines: Vec<&'a str>,
}

impl<'a> AnchorResolver<'a> {
    /// Create a resolver over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
        }
    }

    /// Resolve the anchor for a node starting at the given raw offset.
    ///
    /// The offset may point into leading trivia; the tokenizer scans forward
    /// to the node's first significant token before the line is taken.
    pub fn resolve<T: Tokenizer>(&self, start_offset: usize, tokenizer: &mut T) -> LineAnchor {
        tokenizer.seek(start_offset);
        tokenizer.scan();
        let line = tokenizer.line_number(tokenizer.token_start());
        let text = self.lines.get(line - 1).copied().unwrap_or("");
        LineAnchor {
            line,
            text: escape_pattern(text),
        }
    }
}

/// Escape `/`, `^`, and `$` with a leading backslash so the line can be
/// embedded verbatim inside a `/^...$/` anchor pattern.
pub fn escape_pattern(line: &str) -> String {
    let mut escaped = String::with_capacity(line.len());
    for c in line.chars() {
        if matches!(c, '/' | '^' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::TriviaScanner;

    #[test]
    fn test_escape_plain_line() {
        assert_eq!(escape_pattern("function foo() {"), "function foo() {");
    }

    #[test]
    fn test_escape_slashes() {
        // Regex literals and URLs carry slashes
        assert_eq!(
            escape_pattern("const url = \"https://example.com\";"),
            "const url = \"https:\\/\\/example.com\";"
        );
    }

    #[test]
    fn test_escape_anchors() {
        assert_eq!(escape_pattern("^start and $end"), "\\^start and \\$end");
        assert_eq!(escape_pattern("let re = /^a$/;"), "let re = \\/\\^a\\$\\/;");
    }

    #[test]
    fn test_escape_round_trip() {
        // Stripping the added backslashes reconstructs the original line
        let original = "const m = text.match(/^\\d+$/);";
        let escaped = escape_pattern(original);
        let restored = escaped.replace("\\/", "/").replace("\\^", "^").replace("\\$", "$");
        assert_eq!(restored, original);
    }

    #[test]
    fn test_resolve_skips_leading_trivia() {
        let source = "let a = 1;\n// comment\nfunction foo() {}\n";
        let resolver = AnchorResolver::new(source);
        let mut scanner = TriviaScanner::new(source);

        // Offset at the start of the comment line; the first significant
        // token after it is on line 3.
        let anchor = resolver.resolve(11, &mut scanner);
        assert_eq!(anchor.line, 3);
        assert_eq!(anchor.text, "function foo() {}");
    }

    #[test]
    fn test_resolve_first_line() {
        let source = "class A {}\n";
        let resolver = AnchorResolver::new(source);
        let mut scanner = TriviaScanner::new(source);

        let anchor = resolver.resolve(0, &mut scanner);
        assert_eq!(anchor.line, 1);
        assert_eq!(anchor.text, "class A {}");
    }
}
