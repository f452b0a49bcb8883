//! # Diagnostic notes
//!
//! Every problem hdrlint finds in a message is reported as a [`Note`]:
//! an occurrence of one of a closed set of [`NoteKind`]s, together with the
//! [`Params`] bound at the moment it was emitted.
//!
//! The static part of a note (its [`Category`], [`Level`] and markdown templates)
//! lives in its [`NoteDefinition`], looked up through the [`NoteCatalog`].
//! Rendering substitutes the `%(name)s` placeholders of both templates:
//!
//! ```
//! use hdrlint_notes::{Level, Note, NoteKind, Params};
//!
//! let note = Note::new(
//!     "header-x-frame-options",
//!     NoteKind::SingleHeaderRepeat,
//!     Params::new().with("field_name", "X-Frame-Options"),
//! );
//! assert_eq!(note.level(), Level::Bad);
//!
//! let rendered = note.render().unwrap();
//! assert_eq!(
//!     rendered.summary,
//!     "Only one X-Frame-Options header is allowed in a message.",
//! );
//! ```
//!
//! Rendering fails with [`RenderError::MissingParameter`] when a placeholder is
//! left unbound, which always indicates a defect in the code emitting the note.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod level;
pub use level::{Category, Level};

mod kind;
pub use kind::{NoteDefinition, NoteKind};

mod catalog;
pub use catalog::NoteCatalog;

mod params;
pub use params::Params;

mod render;
pub use render::RenderError;

mod note;
pub use note::{Note, RenderedNote};
