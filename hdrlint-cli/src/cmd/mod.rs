pub(crate) mod check;
pub(crate) mod headers;
pub(crate) mod notes;
