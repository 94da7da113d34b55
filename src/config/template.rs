//! Path templates with named placeholders
//!
//! A template such as `data/new_checkpoints/{config}/{config}.{epoch}.pth`
//! is split once into literal and placeholder segments, so rendering is a
//! plain concatenation with no re-parsing.

use crate::error::TemplateError;
use crate::types::Placeholder;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed path template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

/// Values substituted into a template
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateVars<'a> {
    pub config: &'a str,
    pub epoch: Option<&'a str>,
    pub suffix: Option<&'a str>,
}

impl<'a> TemplateVars<'a> {
    fn get(&self, placeholder: Placeholder) -> &'a str {
        match placeholder {
            Placeholder::Config => self.config,
            Placeholder::Epoch => self.epoch.unwrap_or_default(),
            Placeholder::Suffix => self.suffix.unwrap_or_default(),
        }
    }
}

impl PathTemplate {
    /// Parse a template string
    ///
    /// Fails on unknown placeholder names and on stray `{` or `}`.
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in PLACEHOLDER_RE.captures_iter(&source) {
            let Some(whole) = caps.get(0) else { continue };
            push_literal(&source, &source[last..whole.start()], &mut segments)?;

            let name = &caps[1];
            let placeholder =
                Placeholder::from_name(name).ok_or_else(|| TemplateError::UnknownPlaceholder {
                    template: source.clone(),
                    name: name.to_string(),
                })?;
            segments.push(Segment::Placeholder(placeholder));
            last = whole.end();
        }
        push_literal(&source, &source[last..], &mut segments)?;

        Ok(Self { source, segments })
    }

    /// The template as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholders used by this template, in order of appearance
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }

    /// Check that only `allowed` placeholders appear
    ///
    /// `field` names the config key in the error message.
    pub fn restrict_to(&self, field: &str, allowed: &[Placeholder]) -> Result<(), TemplateError> {
        match self.placeholders().find(|p| !allowed.contains(p)) {
            Some(p) => Err(TemplateError::NotAllowed {
                field: field.to_string(),
                name: p.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Substitute every placeholder
    ///
    /// Placeholders without a value render as empty; `restrict_to` is what
    /// keeps that from happening for validated configs.
    pub fn render(&self, vars: &TemplateVars<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + vars.config.len() * 2);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(p) => out.push_str(vars.get(*p)),
            }
        }
        out
    }
}

fn push_literal(
    source: &str,
    text: &str,
    segments: &mut Vec<Segment>,
) -> Result<(), TemplateError> {
    if text.contains(['{', '}']) {
        return Err(TemplateError::UnbalancedBrace(source.to_string()));
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
    Ok(())
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PathTemplate::parse(value)
    }
}

impl From<PathTemplate> for String {
    fn from(template: PathTemplate) -> Self {
        template.source
    }
}
