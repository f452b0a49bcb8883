use std::fmt;

use crate::{NoteKind, Params};

/// Errors that can happen while looking up or rendering a note.
///
/// Both variants indicate a programmer error: kinds are only emitted by
/// internal code, and every emitter is expected to bind all the placeholders
/// of the kind it emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No note kind is known under the given name.
    UnknownKind(String),
    /// A template references a placeholder that was not bound.
    MissingParameter {
        /// The kind whose template was being rendered.
        kind: NoteKind,
        /// The name of the unbound placeholder.
        name: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(name) => write!(f, "unknown note kind: {name}"),
            Self::MissingParameter { kind, name } => {
                write!(f, "note {kind}: missing parameter '{name}'")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// A lexical piece of a `%(name)s`-style template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    /// `%%`, rendered as a single `%`.
    Percent,
    Placeholder(&'a str),
}

/// Splits a template into literal text and placeholders.
///
/// A `%` which does not start a `%%` escape or a complete `%(name)s`
/// placeholder is kept as literal text.
pub(crate) fn segments(template: &str) -> Segments<'_> {
    Segments { rest: template }
}

#[derive(Debug)]
pub(crate) struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let rest = self.rest;
        if let Some(after) = rest.strip_prefix("%%") {
            self.rest = after;
            return Some(Segment::Percent);
        }
        if let Some(after) = rest.strip_prefix("%(")
            && let Some(end) = after.find(")s")
        {
            self.rest = &after[end + 2..];
            return Some(Segment::Placeholder(&after[..end]));
        }

        // literal up to the next '%' (a lone leading '%' is literal too)
        let first = rest.chars().next().map_or(1, char::len_utf8);
        let end = rest[first..]
            .find('%')
            .map_or(rest.len(), |idx| idx + first);
        self.rest = &rest[end..];
        Some(Segment::Literal(&rest[..end]))
    }
}

/// Substitutes every placeholder of `template` with its value from `params`.
pub(crate) fn interpolate(
    kind: NoteKind,
    template: &str,
    params: &Params,
) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len() + 32);
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Percent => out.push('%'),
            Segment::Placeholder(name) => {
                let value = params
                    .get(name)
                    .ok_or_else(|| RenderError::MissingParameter {
                        kind,
                        name: name.to_owned(),
                    })?;
                out.push_str(value);
            }
        }
    }
    Ok(out)
}
