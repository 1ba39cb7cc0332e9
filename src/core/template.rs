//! URL templates for external documentation links.
//!
//! A template is parsed once when the configuration is loaded:
//!
//! - `%s` is replaced by the (possibly renamed) type name
//! - `{runtime_version}` / `{dependency_version}` are replaced from the [`VersionSet`]
//! - `%%`, `{{` and `}}` are literal `%`, `{` and `}`
//!
//! Any other `%` is kept as-is so percent-encoded URLs survive.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::version_set::{VersionField, VersionSet};

/// Error parsing a link template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("link template `{template}` has no `%s` placeholder for the type name")]
    MissingTypeSlot { template: String },

    #[error(
        "link template `{template}` uses unknown placeholder `{{{name}}}` \
         (expected `{{runtime_version}}` or `{{dependency_version}}`)"
    )]
    UnknownPlaceholder { template: String, name: String },

    #[error("link template `{template}` has an unclosed `{{`")]
    UnclosedPlaceholder { template: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    TypeName,
    Version(VersionField),
}

/// A parsed URL template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl LinkTemplate {
    /// Parse a template string.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '%' => match chars.peek() {
                    Some('s') => {
                        chars.next();
                        flush_literal(&mut literal, &mut segments);
                        segments.push(Segment::TypeName);
                    }
                    Some('%') => {
                        chars.next();
                        literal.push('%');
                    }
                    _ => literal.push('%'),
                },
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) => name.push(ch),
                            None => {
                                return Err(TemplateError::UnclosedPlaceholder {
                                    template: source.to_string(),
                                })
                            }
                        }
                    }

                    let field = VersionField::from_placeholder(name.trim()).ok_or_else(|| {
                        TemplateError::UnknownPlaceholder {
                            template: source.to_string(),
                            name: name.clone(),
                        }
                    })?;
                    flush_literal(&mut literal, &mut segments);
                    segments.push(Segment::Version(field));
                }
                '}' => {
                    if chars.peek() == Some(&'}') {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(c),
            }
        }
        flush_literal(&mut literal, &mut segments);

        if !segments.contains(&Segment::TypeName) {
            return Err(TemplateError::MissingTypeSlot {
                template: source.to_string(),
            });
        }

        Ok(LinkTemplate {
            source: source.to_string(),
            segments,
        })
    }

    /// The template as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Version fields this template cannot expand without.
    pub fn required_versions(&self) -> BTreeSet<VersionField> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Version(field) => Some(*field),
                _ => None,
            })
            .collect()
    }

    /// Whether every version this template needs is present.
    pub fn is_satisfied_by(&self, versions: &VersionSet) -> bool {
        self.required_versions()
            .into_iter()
            .all(|f| versions.get(f).is_some())
    }

    /// Expand the template. Returns `None` if a required version is absent.
    pub fn expand(&self, type_name: &str, versions: &VersionSet) -> Option<String> {
        let mut url = String::with_capacity(self.source.len() + type_name.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::TypeName => url.push_str(type_name),
                Segment::Version(field) => url.push_str(versions.get(*field)?),
            }
        }

        Some(url)
    }
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

impl FromStr for LinkTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LinkTemplate::parse(s)
    }
}

impl TryFrom<String> for LinkTemplate {
    type Error = TemplateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        LinkTemplate::parse(&s)
    }
}

impl From<LinkTemplate> for String {
    fn from(t: LinkTemplate) -> Self {
        t.source
    }
}

impl fmt::Display for LinkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
