use crate::BoxError;
use std::error::Error as StdError;
use std::fmt;

/// A type-erased error, optionally wrapped in the context it occurred in.
///
/// Its [`Display`](fmt::Display) renders the full context chain (`outer: inner: root`),
/// while [`StdError::source`] walks into the wrapped error.
pub struct OpaqueError(Repr);

enum Repr {
    Message(String),
    Wrapped(BoxError),
    Context { context: String, source: BoxError },
}

impl OpaqueError {
    /// create an [`OpaqueError`] from an std error
    pub fn from_std(error: impl StdError + Send + Sync + 'static) -> Self {
        Self(Repr::Wrapped(Box::new(error)))
    }

    /// create an [`OpaqueError`] from a display object
    pub fn from_display(msg: impl fmt::Display) -> Self {
        Self(Repr::Message(msg.to_string()))
    }

    /// create an [`OpaqueError`] from a boxed error
    #[must_use]
    pub fn from_boxed(inner: BoxError) -> Self {
        match inner.downcast::<Self>() {
            Ok(opaque) => *opaque,
            Err(inner) => Self(Repr::Wrapped(inner)),
        }
    }

    /// Wrap this error in a context describing the step that failed.
    #[must_use]
    pub fn context(self, context: impl fmt::Display) -> Self {
        Self(Repr::Context {
            context: context.to_string(),
            source: self.into_boxed(),
        })
    }

    /// Consumes the [`OpaqueError`] and returns it as a [`BoxError`].
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        match self.0 {
            Repr::Wrapped(inner) => inner,
            repr => Box::new(Self(repr)),
        }
    }

    /// Iterate over this error and all its sources, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(Some(self as &(dyn StdError + 'static)), |err| {
            (*err).source()
        })
    }

    /// The innermost error of the chain.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut cause: &(dyn StdError + 'static) = self;
        while let Some(next) = cause.source() {
            cause = next;
        }
        cause
    }
}

impl fmt::Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Message(msg) => f.debug_tuple("OpaqueError").field(msg).finish(),
            Repr::Wrapped(inner) => fmt::Debug::fmt(inner, f),
            Repr::Context { context, source } => f
                .debug_struct("OpaqueError")
                .field("context", context)
                .field("source", source)
                .finish(),
        }
    }
}

impl fmt::Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Message(msg) => f.write_str(msg),
            Repr::Wrapped(inner) => fmt::Display::fmt(inner, f),
            Repr::Context { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl StdError for OpaqueError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0 {
            Repr::Message(_) => None,
            Repr::Wrapped(inner) => inner.source(),
            Repr::Context { source, .. } => Some(source.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_from_display() {
        let error = OpaqueError::from_display("no header block found");
        assert_eq!(error.to_string(), "no header block found");
        assert!(error.source().is_none());
        assert_eq!(error.chain().count(), 1);
    }

    #[test]
    fn boxed_opaque_is_not_wrapped_twice() {
        let boxed: BoxError = OpaqueError::from_display("boom").context("outer").into_boxed();
        let error = OpaqueError::from_boxed(boxed);
        assert_eq!(error.to_string(), "outer: boom");
        assert_eq!(error.chain().count(), 2);
    }

    #[test]
    fn wrapped_std_error_is_transparent() {
        let io = std::io::Error::other("disk on fire");
        let error = OpaqueError::from_std(io);
        assert_eq!(error.to_string(), "disk on fire");
        assert!(error.into_boxed().is::<std::io::Error>());
    }
}
