//! Uniform declaration snippets.
//!
//! Reads a plain listing of shader uniforms, one per line:
//!
//! ```text
//! uniform <float> frameTimeCounter;
//! uniform <vec2> resolution; 2
//! ```
//!
//! and produces one completion record per distinct uniform name. Lines that
//! do not start with `uniform` are ignored; later declarations of an
//! already-seen name are dropped.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

const KEYWORD: &str = "uniform";

/// Errors from reading or parsing a uniform listing.
#[derive(Error, Debug)]
pub enum SnippetError {
    /// The listing could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A `uniform` line without both a type and a name.
    #[error("Malformed uniform declaration on line {line}: {content:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
    },
}

/// One uniform declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformRecord {
    /// Uniform name; unique within one formatting pass.
    pub label: String,
    /// Type tag without its angle brackets, e.g. `vec2`.
    pub kind: String,
    /// Trailing text after the name, empty when absent.
    pub detail: String,
}

/// Serialized form of a record, matching the snippet block fields.
#[derive(Debug, Serialize)]
pub struct Snippet<'a> {
    /// Uniform name.
    pub label: &'a str,
    /// `<type>` followed by the detail, if any.
    pub detail: String,
}

impl UniformRecord {
    /// Parse a `uniform` line. Returns `None` if it has fewer than three
    /// whitespace-separated fields.
    ///
    /// The caller is responsible for checking the `uniform` keyword.
    pub fn parse(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return None;
        }

        let kind = fields[1];
        let kind = kind.strip_prefix('<').unwrap_or(kind);
        let kind = kind.strip_suffix('>').unwrap_or(kind);

        let label = fields[2];
        let label = label.strip_suffix(';').unwrap_or(label);

        Some(Self {
            label: label.to_string(),
            kind: kind.to_string(),
            detail: fields[3..].join(" "),
        })
    }

    /// The `detail` text shown in the editor: `<type>` plus ` detail` when
    /// a detail is present.
    pub fn snippet_detail(&self) -> String {
        if self.detail.is_empty() {
            format!("<{}>", self.kind)
        } else {
            format!("<{}> {}", self.kind, self.detail)
        }
    }

    /// Borrowed view for serialization.
    pub fn to_snippet(&self) -> Snippet<'_> {
        Snippet {
            label: &self.label,
            detail: self.snippet_detail(),
        }
    }
}

impl fmt::Display for UniformRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\n\tlabel: '{}',\n\tdetail: '{}'\n}},",
            self.label,
            self.snippet_detail()
        )
    }
}

/// Whether `line` is a uniform declaration candidate.
pub fn is_uniform_line(line: &str) -> bool {
    line.trim().starts_with(KEYWORD)
}

/// Single-pass iterator over the distinct uniforms of a listing.
///
/// Yields records in source order. Stops after the first malformed line.
#[derive(Debug)]
pub struct Uniforms {
    lines: std::iter::Enumerate<std::vec::IntoIter<String>>,
    seen: HashSet<String>,
    failed: bool,
}

impl Uniforms {
    fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter().enumerate(),
            seen: HashSet::new(),
            failed: false,
        }
    }
}

impl Iterator for Uniforms {
    type Item = Result<UniformRecord, SnippetError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for (idx, line) in self.lines.by_ref() {
            if !is_uniform_line(&line) {
                continue;
            }

            let Some(record) = UniformRecord::parse(&line) else {
                self.failed = true;
                return Some(Err(SnippetError::MalformedLine {
                    line: idx + 1,
                    content: line,
                }));
            };

            if !self.seen.insert(record.label.clone()) {
                trace!(label = %record.label, line = idx + 1, "skipping duplicate uniform");
                continue;
            }

            return Some(Ok(record));
        }

        None
    }
}

/// Iterate the distinct uniforms declared in `source`.
pub fn parse_source(source: &str) -> Uniforms {
    Uniforms::new(source.lines().map(str::to_owned).collect())
}

/// Read `path` fully and iterate the distinct uniforms it declares.
pub fn format_uniforms(path: &Path) -> Result<Uniforms, SnippetError> {
    let source = std::fs::read_to_string(path).map_err(|source| SnippetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_source(&source))
}
