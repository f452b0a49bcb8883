use serde::Serialize;

use crate::{Category, Level, NoteCatalog, NoteKind, Params, RenderError};

/// A note emitted while checking a single message.
///
/// The `subject` names the part of the message the note is about,
/// e.g. `header-content-type`, so a report layer can attach it
/// to the right line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    subject: String,
    kind: NoteKind,
    params: Params,
}

impl Note {
    /// Create a new [`Note`].
    pub fn new(subject: impl Into<String>, kind: NoteKind, params: Params) -> Self {
        Self {
            subject: subject.into(),
            kind,
            params,
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn kind(&self) -> NoteKind {
        self.kind
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.kind.level()
    }

    /// Render this note's templates against its params.
    pub fn render(&self) -> Result<RenderedNote, RenderError> {
        let (summary, detail) = NoteCatalog::render(self.kind, &self.params)?;
        Ok(RenderedNote {
            subject: self.subject.clone(),
            kind: self.kind,
            category: self.category(),
            level: self.level(),
            summary,
            detail,
            params: self.params.clone(),
        })
    }
}

/// A [`Note`] with its templates rendered, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNote {
    pub subject: String,
    pub kind: NoteKind,
    pub category: Category,
    pub level: Level,
    /// Rendered one-line markdown summary.
    pub summary: String,
    /// Rendered markdown detail text.
    pub detail: String,
    pub params: Params,
}
