//! hidden hdrlint macros 🤫

#[doc(hidden)]
#[macro_use]
pub mod enums;
