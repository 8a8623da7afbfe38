//! Extraction options.

use crate::error::TagsError;
use std::str::FromStr;

/// Options for a tag-extraction run, assembled by the CLI layer.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Allow-list of kind codes to include (None means all)
    pub kinds: Option<Vec<char>>,
    /// Emit file paths as given instead of resolved absolute paths
    pub tag_relative: bool,
    /// Language version passed through to the front-end parser
    pub target: ScriptTarget,
}

impl ExtractOptions {
    /// Whether entries with the given kind code should be produced.
    pub fn kind_allowed(&self, code: char) -> bool {
        self.kinds.as_ref().map_or(true, |k| k.contains(&code))
    }
}

/// Targeted language version.
///
/// Validated here, but otherwise passed through opaquely to the front-end
/// parser and not interpreted by the extraction core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptTarget {
    Es3,
    Es5,
    #[default]
    Es6,
    Latest,
}

impl ScriptTarget {
    /// Display name for this target.
    pub fn name(&self) -> &'static str {
        match self {
            ScriptTarget::Es3 => "ES3",
            ScriptTarget::Es5 => "ES5",
            ScriptTarget::Es6 => "ES6",
            ScriptTarget::Latest => "Latest",
        }
    }
}

impl FromStr for ScriptTarget {
    type Err = TagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es3" => Ok(ScriptTarget::Es3),
            "es5" => Ok(ScriptTarget::Es5),
            "es6" | "es2015" => Ok(ScriptTarget::Es6),
            "latest" | "esnext" => Ok(ScriptTarget::Latest),
            _ => Err(TagsError::UnsupportedTarget(s.to_string())),
        }
    }
}
