#[doc(hidden)]
pub use ::serde::{Serialize as __SerdeSerialize, Serializer as __SerdeSerializer};

#[doc(hidden)]
#[macro_export]
/// A macro which defines a closed, string-backed enum type.
///
/// Each variant maps to exactly one string, which is what the generated
/// `as_str`, [`Display`](std::fmt::Display) and serde `Serialize` implementations produce.
/// Parsing (`strict_parse`) is ASCII case-insensitive and returns `None`
/// for anything outside of the declared set.
///
/// Variants are ordered by declaration, so tiers can be declared
/// from lowest to highest and compared with `<` / `>`.
macro_rules! __str_enum {
    (
        $(#[$m:meta])*
        $enum_vis:vis enum $enum_name:ident
        { $( $(#[$enum_meta:meta])* $enum_var:ident => $enum_val:literal ),+ $(,)? }
    ) => {
        $(#[$m])*
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
        $enum_vis enum $enum_name {
            $(
                $(#[$enum_meta])*
                $enum_var
            ),+
        }

        impl $enum_name {
            /// All variants, in declaration order.
            $enum_vis const ALL: &'static [Self] = &[$(Self::$enum_var),+];

            /// The string representation of this variant.
            #[must_use]
            $enum_vis const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$enum_var => $enum_val ),+
                }
            }

            /// Parse a variant from its string representation (ASCII case-insensitive),
            /// returning `None` for unknown values.
            #[must_use]
            $enum_vis fn strict_parse(s: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl $crate::macros::enums::__SerdeSerialize for $enum_name {
            #[inline]
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::macros::enums::__SerdeSerializer,
            {
                $crate::macros::enums::__SerdeSerializer::serialize_str(serializer, self.as_str())
            }
        }
    };
}
#[doc(inline)]
pub use crate::__str_enum as str_enum;
