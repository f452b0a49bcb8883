//! Error types and utilities for hdrlint.
//!
//! Library crates of hdrlint return concrete error types (e.g. the render error of
//! `hdrlint-notes`). Application code, such as the `hdrlint` binary, does not care
//! much about the specific type, only that something failed and where. It glues
//! errors together as a [`BoxError`] and describes the failing step using
//! [`ErrorContext`], which turns any error into an [`OpaqueError`]:
//!
//! ```
//! use hdrlint_error::{BoxError, ErrorContext};
//!
//! fn parse_limit(s: &str) -> Result<usize, BoxError> {
//!     let n = s.parse::<usize>().context("parse header size limit")?;
//!     Ok(n)
//! }
//!
//! let err = parse_limit("four").unwrap_err();
//! assert_eq!("parse header size limit: invalid digit found in string", err.to_string());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::error::Error as StdError;
use std::fmt;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

mod opaque;
pub use opaque::OpaqueError;

/// Describe the step that failed, turning the error into an [`OpaqueError`].
///
/// Implemented for `Result`s of any error convertible into a [`BoxError`]
/// and for `Option`s, where `None` is the failure.
///
/// ```
/// use hdrlint_error::ErrorContext;
///
/// let header: Option<&str> = None;
/// let err = header.context("find Content-Type header").unwrap_err();
/// assert_eq!("find Content-Type header: value is missing", err.to_string());
/// ```
pub trait ErrorContext: private::Sealed {
    /// The value carried on success.
    type Ok;

    /// Add a context to the contained error.
    fn context<C>(self, context: C) -> Result<Self::Ok, OpaqueError>
    where
        C: fmt::Display;

    /// Lazily add a context to the contained error, only computed on failure.
    fn with_context<C, F>(self, context: F) -> Result<Self::Ok, OpaqueError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: Into<BoxError>,
{
    type Ok = T;

    fn context<C>(self, context: C) -> Result<T, OpaqueError>
    where
        C: fmt::Display,
    {
        self.map_err(|err| OpaqueError::from_boxed(err.into()).context(context))
    }

    fn with_context<C, F>(self, context: F) -> Result<T, OpaqueError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|err| OpaqueError::from_boxed(err.into()).context(context()))
    }
}

impl<T> ErrorContext for Option<T> {
    type Ok = T;

    fn context<C>(self, context: C) -> Result<T, OpaqueError>
    where
        C: fmt::Display,
    {
        self.ok_or_else(|| OpaqueError::from_display("value is missing").context(context))
    }

    fn with_context<C, F>(self, context: F) -> Result<T, OpaqueError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| OpaqueError::from_display("value is missing").context(context()))
    }
}

mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> where E: Into<super::BoxError> {}
    impl<T> Sealed for Option<T> {}
}
