//! hdrlint checks the HTTP header fields of a single message (request or response)
//! against what the HTTP specifications allow, and reports every problem as a
//! renderable diagnostic note.
//!
//! | crate | what |
//! |-|-|
//! | [`notes`] | the closed catalog of note kinds and their `%(name)s` message templates |
//! | [`headers`] | header descriptors, the registry of known headers, grammars and the check pipeline |
//! | [`error`] | error utilities shared by hdrlint crates and the `hdrlint` binary |
//! | [`utils`] | small string and formatting helpers |
//!
//! Most users only need [`check_headers`] or [`check_and_render`]:
//!
//! ```
//! use hdrlint::headers::{Direction, HeaderField};
//! use hdrlint::notes::{Level, NoteKind};
//!
//! let fields = [
//!     HeaderField::new("Host", "example.com"),
//!     HeaderField::new("Content-Length", "42"),
//! ];
//!
//! let notes = hdrlint::check_headers(Direction::Response, &fields);
//! assert_eq!(notes.len(), 1);
//! assert_eq!(notes[0].kind(), NoteKind::RequestHdrInResponse);
//! assert_eq!(notes[0].level(), Level::Bad);
//!
//! let rendered = hdrlint::check_and_render(Direction::Response, &fields).unwrap();
//! assert_eq!(rendered[0].summary, "\"Host\" is a request header.");
//! ```
//!
//! For more control (custom registry, grammar validator or size limit) use
//! [`HeaderChecker`](headers::HeaderChecker) directly.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::hdrlint_error as error;

#[doc(inline)]
pub use ::hdrlint_utils as utils;

#[doc(inline)]
pub use ::hdrlint_notes as notes;

#[doc(inline)]
pub use ::hdrlint_headers as headers;

use headers::{Direction, HeaderChecker, HeaderField};
use notes::{Note, RenderError, RenderedNote};

/// Check the header fields of a single message with the default settings.
///
/// Notes are returned in pipeline order: grouped by header name, in order of
/// first appearance of each name.
#[must_use]
pub fn check_headers(direction: Direction, fields: &[HeaderField]) -> Vec<Note> {
    HeaderChecker::new().check(direction, fields)
}

/// Same as [`check_headers`], with every note rendered.
///
/// # Errors
///
/// Fails only when a note misses a template parameter,
/// which indicates a bug in hdrlint itself.
pub fn check_and_render(
    direction: Direction,
    fields: &[HeaderField],
) -> Result<Vec<RenderedNote>, RenderError> {
    check_headers(direction, fields)
        .iter()
        .map(Note::render)
        .collect()
}
