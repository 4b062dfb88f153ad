//! Snippet merging.
//!
//! A fragment named `<host>.<label>.snippet` is spliced into the sibling file `<host>`
//! at the sentinel `${$SNIPPET:<label>$}$` and then deleted. Sentinels stay in place
//! until every fragment is merged; the remaining ones are then stripped from all
//! installed files, so templates can declare insertion points that stay unused.

use log::debug;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    constants::SNIPPET_EXTENSION,
    error::{Error, Result},
    installer::InstalledFile,
};

const LABEL_PATTERN: &str = "[A-Za-z0-9_-]+";

/// Renders the insertion sentinel for a label.
pub fn sentinel(label: &str) -> String {
    format!("${{$SNIPPET:{label}$}}$")
}

/// Strips a single trailing `\n`, then a single trailing `\r`.
pub fn strip_ending_newline(content: &str) -> &str {
    let content = content.strip_suffix('\n').unwrap_or(content);
    content.strip_suffix('\r').unwrap_or(content)
}

/// Where a fragment goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTarget {
    pub host: PathBuf,
    pub label: String,
}

/// Splices fragments into their hosts.
pub struct SnippetMerger {
    label: Regex,
    sentinel_line: Regex,
    sentinel_inline: Regex,
}

impl SnippetMerger {
    pub fn new() -> Result<Self> {
        let sentinel = format!(r"\$\{{\$SNIPPET:{LABEL_PATTERN}\$\}}\$");
        Ok(Self {
            label: Regex::new(&format!("^{LABEL_PATTERN}$"))?,
            sentinel_line: Regex::new(&format!(
                r"(?m)^[ \t]*{sentinel}[ \t]*(?:\r?\n|\z)"
            ))?,
            sentinel_inline: Regex::new(&sentinel)?,
        })
    }

    /// Works out the host file and label from a fragment's file name.
    ///
    /// # Errors
    /// * `Error::InvalidInput` if the name does not follow `<host>.<label>.snippet`
    pub fn target_of(&self, snippet: &Path) -> Result<SnippetTarget> {
        let invalid = || {
            Error::InvalidInput(format!(
                "snippet '{}' must be named '<host>.<label>.{SNIPPET_EXTENSION}'",
                snippet.display()
            ))
        };

        let stem = snippet
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(SNIPPET_EXTENSION))
            .and_then(|name| name.strip_suffix('.'))
            .ok_or_else(invalid)?;
        let (host, label) = stem.rsplit_once('.').ok_or_else(invalid)?;
        if host.is_empty() || !self.label.is_match(label) {
            return Err(invalid());
        }

        Ok(SnippetTarget {
            host: snippet.with_file_name(host),
            label: label.to_string(),
        })
    }

    /// Merges one fragment into its host and deletes the fragment.
    ///
    /// # Errors
    /// * `Error::MergeTargetNotFound` if the host is missing or lacks the sentinel
    pub fn merge_one(&self, snippet: &Path) -> Result<PathBuf> {
        let SnippetTarget { host, label } = self.target_of(snippet)?;
        let marker = sentinel(&label);
        let not_found = || Error::MergeTargetNotFound {
            snippet: snippet.to_path_buf(),
            host: host.clone(),
            marker: marker.clone(),
        };

        if !host.is_file() {
            return Err(not_found());
        }
        let host_text = fs::read_to_string(&host).map_err(Error::read(&host))?;
        let position = host_text.find(&marker).ok_or_else(not_found)?;

        let fragment = fs::read_to_string(snippet).map_err(Error::read(snippet))?;
        let merged = splice(&host_text, position, &marker, strip_ending_newline(&fragment));

        fs::write(&host, merged).map_err(Error::write(&host))?;
        fs::remove_file(snippet).map_err(Error::write(snippet))?;
        debug!("Merged snippet '{}' into '{}'", snippet.display(), host.display());
        Ok(host)
    }

    /// Removes every sentinel left in `path`. Returns whether the file changed.
    pub fn strip_sentinels(&self, path: &Path) -> Result<bool> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => return Ok(false),
            Err(e) => return Err(Error::ReadError { path: path.to_path_buf(), source: e }),
        };
        if !self.sentinel_inline.is_match(&text) {
            return Ok(false);
        }

        let without_lines = self.sentinel_line.replace_all(&text, "");
        let stripped = self.sentinel_inline.replace_all(&without_lines, "");
        fs::write(path, stripped.as_bytes()).map_err(Error::write(path))?;
        debug!("Removed unused snippet sentinels from '{}'", path.display());
        Ok(true)
    }

    /// Merges every fragment in `installed`, then strips leftover sentinels from the
    /// regular files.
    ///
    /// Stops at the first failure; fragments not yet merged stay on disk.
    pub fn merge(&self, installed: &[InstalledFile]) -> Result<()> {
        let snippets: BTreeSet<&Path> = installed
            .iter()
            .filter(|file| file.is_snippet)
            .map(|file| file.path.as_path())
            .collect();

        for snippet in &snippets {
            self.merge_one(snippet)?;
        }

        for file in installed.iter().filter(|file| !file.is_snippet) {
            self.strip_sentinels(&file.path)?;
        }
        Ok(())
    }
}

/// Inserts `content` for the sentinel found at `position`.
///
/// A sentinel alone on its line gets the content as whole lines above it; an inline
/// sentinel gets the content directly in front of it.
fn splice(host: &str, position: usize, marker: &str, content: &str) -> String {
    let line_start = host[..position].rfind('\n').map_or(0, |i| i + 1);
    let line_end = host[position..].find('\n').map_or(host.len(), |i| position + i);
    let before = &host[line_start..position];
    let after = &host[position + marker.len()..line_end];
    let standalone = before.trim().is_empty() && after.trim().is_empty();

    let mut merged = String::with_capacity(host.len() + content.len() + 2);
    if standalone {
        let newline = if host.contains("\r\n") { "\r\n" } else { "\n" };
        merged.push_str(&host[..line_start]);
        merged.push_str(content);
        merged.push_str(newline);
        merged.push_str(&host[line_start..]);
    } else {
        merged.push_str(&host[..position]);
        merged.push_str(content);
        merged.push_str(&host[position..]);
    }
    merged
}

/// Merges all fragments among the installed files.
///
/// # Arguments
/// * `installed` - Files written by the installer
///
/// # Errors
/// * `Error::MergeTargetNotFound` for the first fragment whose host lacks its sentinel
pub fn merge(installed: &[InstalledFile]) -> Result<()> {
    SnippetMerger::new()?.merge(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_standalone_sentinel() {
        let host = "a\n  ${$SNIPPET:x$}$\nb\n";
        let position = host.find("${$").unwrap();
        assert_eq!(
            splice(host, position, &sentinel("x"), "frag"),
            "a\nfrag\n  ${$SNIPPET:x$}$\nb\n"
        );
    }

    #[test]
    fn test_splice_inline_sentinel() {
        let host = "list(${$SNIPPET:x$}$)";
        let position = host.find("${$").unwrap();
        assert_eq!(
            splice(host, position, &sentinel("x"), "frag "),
            "list(frag ${$SNIPPET:x$}$)"
        );
    }

    #[test]
    fn test_strip_ending_newline() {
        assert_eq!(strip_ending_newline("abc\r\n"), "abc");
        assert_eq!(strip_ending_newline("abc\n\n"), "abc\n");
        assert_eq!(strip_ending_newline(""), "");
    }
}
