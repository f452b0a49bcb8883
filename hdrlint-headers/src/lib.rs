//! # Header descriptors and checks
//!
//! This crate knows about HTTP header kinds ([`HeaderDescriptor`], looked up
//! through the [`HeaderRegistry`]) and walks the header fields of a single
//! message against that knowledge, emitting [`Note`](hdrlint_notes::Note)s
//! for every problem found.
//!
//! ```
//! use hdrlint_headers::{Direction, HeaderChecker, HeaderField};
//! use hdrlint_notes::NoteKind;
//!
//! let fields = [
//!     HeaderField::new("Content-Type", "text/html; charset=utf-8"),
//!     HeaderField::new("Content-Type", "text/plain"),
//!     HeaderField::new("Date", "1 May 2024 10:00:00 GMT"),
//! ];
//!
//! let notes = HeaderChecker::new().check(Direction::Response, &fields);
//! let kinds: Vec<_> = notes.iter().map(|note| note.kind()).collect();
//! assert_eq!(kinds, [NoteKind::SingleHeaderRepeat, NoteKind::BadDateSyntax]);
//! ```
//!
//! Value syntax is validated through the [`GrammarValidator`] capability;
//! [`BuiltinGrammar`] covers every [`Grammar`] used by the compiled-in registry.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod descriptor;
pub use descriptor::{Direction, HeaderDescriptor};

mod registry;
pub use registry::HeaderRegistry;

pub mod grammar;
#[doc(inline)]
pub use grammar::{BuiltinGrammar, Grammar, GrammarValidator};

pub mod params;

mod check;
pub use check::{CheckConfig, HeaderChecker, HeaderField};
