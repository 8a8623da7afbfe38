//! Tag entries and the tags-file collection.
//!
//! A [`TagFile`] is created once per run, populated by repeated extraction
//! calls (one per input file, in file-list order), then serialized exactly
//! once to the extended ctags format.

use serde::{Deserialize, Serialize};

const PROGRAM_NAME: &str = "tstags";
const PROGRAM_URL: &str = "https://github.com/user/tstags";
const PROGRAM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One tag entry: a declaration name mapped to its location and kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Display name, possibly visibility-marked and scope-qualified
    pub name: String,
    /// Source file path, absolute or as given per configuration
    pub file: String,
    /// Escaped source line, wrapped as `/^...$/` on serialization
    pub pattern: String,
    /// Single-character kind code
    pub kind_code: char,
    /// 1-based line number
    pub line: usize,
}

/// Ordered collection of tag entries plus the fixed header block.
#[derive(Debug, Clone)]
pub struct TagFile {
    sort: bool,
    entries: Vec<TagEntry>,
}

impl TagFile {
    /// Create an empty collection with the given sort flag.
    pub fn new(sort: bool) -> Self {
        Self {
            sort,
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn add(&mut self, entry: TagEntry) {
        self.entries.push(entry);
    }

    /// Whether no entries were produced. An empty collection is a legitimate
    /// nothing-to-write condition, not an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consume the collection, yielding its entries in insertion order.
    pub fn into_entries(self) -> Vec<TagEntry> {
        self.entries
    }

    /// The fixed metadata header lines as `(name, value, help)` triples.
    ///
    /// The sortedness value reflects the configured sort flag. `2` (foldcase)
    /// is reserved and never produced.
    pub fn header_block(&self) -> Vec<(&'static str, String, &'static str)> {
        let sorted = if self.sort { "1" } else { "0" };
        vec![
            (
                "_TAG_FILE_FORMAT",
                "2".to_string(),
                "extended format; --format=1 will not append ;\" to lines",
            ),
            (
                "_TAG_FILE_SORTED",
                sorted.to_string(),
                "0=unsorted, 1=sorted, 2=foldcase",
            ),
            ("_TAG_PROGRAM_NAME", PROGRAM_NAME.to_string(), ""),
            ("_TAG_PROGRAM_URL", PROGRAM_URL.to_string(), ""),
            ("_TAG_PROGRAM_VERSION", PROGRAM_VERSION.to_string(), ""),
        ]
    }

    /// Serialize the header block and all entries, newline-joined with no
    /// trailing newline.
    ///
    /// With the sort flag set, entries are ordered by a stable,
    /// locale-independent ordinal comparison of their names; otherwise they
    /// appear in insertion order.
    pub fn serialize(&self) -> String {
        let mut lines: Vec<String> = self
            .header_block()
            .into_iter()
            .map(|(name, value, help)| format!("!{name}\t{value}\t{help}"))
            .collect();

        let mut entries: Vec<&TagEntry> = self.entries.iter().collect();
        if self.sort {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }

        for entry in entries {
            lines.push(format!(
                "{}\t{}\t/^{}$/;\"\t{}\tline:{}",
                entry.name, entry.file, entry.pattern, entry.kind_code, entry.line
            ));
        }

        lines.join("\n")
    }
}
