//! Placeholder tokens and their matching rules.
//!
//! Templates mark substitution points with `${$NAME$}$`. The registry is built once at
//! start-up, checked for conflicting patterns, and then shared by reference with the
//! resolver and the installer.

use std::borrow::Cow;

use indexmap::IndexMap;
use log::debug;
use regex::{NoExpand, Regex};

use crate::error::{Error, Result};

/// Token names understood by the bundled templates.
pub const STANDARD_PLACEHOLDERS: [&str; 7] = [
    "PROJECT_NAME",
    "TARGET_NAME",
    "CMAKE_TARGET_LINK_NAME",
    "INCLUDE_DIR_NAME",
    "CMAKE_NAMESPACE",
    "CPP_NAMESPACE",
    "ACRONYM",
];

/// Renders the marker text for a token name.
pub fn marker(name: &str) -> String {
    format!("${{${name}$}}$")
}

fn marker_pattern(name: &str) -> Result<Regex> {
    Ok(Regex::new(&regex::escape(&marker(name)))?)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// A single named token with the patterns used to find it.
#[derive(Debug, Clone)]
pub struct Placeholder {
    name: &'static str,
    content_pattern: Regex,
    file_name_pattern: Regex,
}

impl Placeholder {
    /// Compiles the content and file-name patterns for `name`.
    ///
    /// # Errors
    /// * `Error::PlaceholderConflict` if the name is not of the form `[A-Z][A-Z0-9_]*`
    pub fn new(name: &'static str) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(Error::PlaceholderConflict(format!(
                "'{name}' is not a valid placeholder name"
            )));
        }
        Ok(Self {
            name,
            content_pattern: marker_pattern(name)?,
            file_name_pattern: marker_pattern(name)?,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Marker text as it appears in templates.
    pub fn marker(&self) -> String {
        marker(self.name)
    }

    pub fn content_pattern(&self) -> &Regex {
        &self.content_pattern
    }

    pub fn file_name_pattern(&self) -> &Regex {
        &self.file_name_pattern
    }
}

/// Immutable table of placeholders keyed by name.
#[derive(Debug, Clone)]
pub struct PlaceholderRegistry {
    placeholders: IndexMap<&'static str, Placeholder>,
}

impl PlaceholderRegistry {
    /// Builds a registry from token names.
    ///
    /// # Arguments
    /// * `names` - Token names, in the order substitutions are applied
    ///
    /// # Returns
    /// * `Result<Self>` - The registry
    ///
    /// # Errors
    /// * `Error::PlaceholderConflict` if a name is malformed, duplicated, or its
    ///   pattern matches another token's marker
    pub fn new(names: &[&'static str]) -> Result<Self> {
        let mut placeholders = IndexMap::with_capacity(names.len());
        for &name in names {
            if placeholders.contains_key(name) {
                return Err(Error::PlaceholderConflict(format!(
                    "'{name}' is registered twice"
                )));
            }
            placeholders.insert(name, Placeholder::new(name)?);
        }

        for (name, placeholder) in &placeholders {
            for (other_name, other) in &placeholders {
                if name != other_name && placeholder.content_pattern.is_match(&other.marker()) {
                    return Err(Error::PlaceholderConflict(format!(
                        "pattern of '{name}' overlaps marker of '{other_name}'"
                    )));
                }
            }
        }

        debug!("Registered {} placeholders", placeholders.len());
        Ok(Self { placeholders })
    }

    /// The registry holding [`STANDARD_PLACEHOLDERS`].
    pub fn standard() -> Result<Self> {
        Self::new(&STANDARD_PLACEHOLDERS)
    }

    pub fn get(&self, name: &str) -> Option<&Placeholder> {
        self.placeholders.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.placeholders.values()
    }

    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Pairs every placeholder with its replacement value.
    ///
    /// # Errors
    /// * `Error::PlaceholderConflict` if `value_of` has no value for a registered token
    pub fn bind<'a, 'v: 'a, F>(&'a self, value_of: F) -> Result<Substitutions<'a>>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let bindings = self
            .iter()
            .map(|placeholder| {
                value_of(placeholder.name)
                    .map(|value| (placeholder, value))
                    .ok_or_else(|| {
                        Error::PlaceholderConflict(format!(
                            "no value bound to '{}'",
                            placeholder.name
                        ))
                    })
            })
            .collect::<Result<Vec<(&'a Placeholder, &'a str)>>>()?;
        Ok(Substitutions { bindings })
    }
}

/// Placeholders paired with their resolved values.
#[derive(Debug, Clone)]
pub struct Substitutions<'a> {
    bindings: Vec<(&'a Placeholder, &'a str)>,
}

impl Substitutions<'_> {
    /// Rewrites every marker in a single path segment.
    pub fn render_name<'t>(&self, segment: &'t str) -> Cow<'t, str> {
        apply(segment, self.bindings.iter().map(|&(p, v)| (&p.file_name_pattern, v)))
    }

    /// Rewrites every marker in a file's text.
    pub fn render_content<'t>(&self, text: &'t str) -> Cow<'t, str> {
        apply(text, self.bindings.iter().map(|&(p, v)| (&p.content_pattern, v)))
    }
}

fn apply<'t, 'p>(
    text: &'t str,
    patterns: impl Iterator<Item = (&'p Regex, &'p str)>,
) -> Cow<'t, str> {
    let mut rendered = Cow::Borrowed(text);
    for (pattern, value) in patterns {
        let replaced = match pattern.replace_all(&rendered, NoExpand(value)) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            rendered = Cow::Owned(s);
        }
    }
    rendered
}
