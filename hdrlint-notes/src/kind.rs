use crate::render::{self, Segment};
use crate::{Category, Level};

/// The static definition of a [`NoteKind`].
///
/// Category, level and templates are fixed per kind;
/// only the [`Params`](crate::Params) vary per emitted note.
#[derive(Debug)]
pub struct NoteDefinition {
    kind: NoteKind,
    category: Category,
    level: Level,
    summary: &'static str,
    detail: &'static str,
}

impl NoteDefinition {
    /// The kind this definition belongs to.
    #[must_use]
    pub fn kind(&self) -> NoteKind {
        self.kind
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// One-line markdown summary template.
    #[must_use]
    pub fn summary_template(&self) -> &'static str {
        self.summary
    }

    /// Multi-paragraph markdown detail template.
    #[must_use]
    pub fn detail_template(&self) -> &'static str {
        self.detail
    }

    /// Names of all placeholders referenced by the summary and detail templates,
    /// deduplicated, in order of first appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        for segment in render::segments(self.summary).chain(render::segments(self.detail)) {
            if let Segment::Placeholder(name) = segment
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }
}

macro_rules! define_notes {
    (
        $(
            $(#[$m:meta])*
            $variant:ident => $name:literal {
                category: $category:ident,
                level: $level:ident,
                summary: $summary:expr,
                detail: $detail:expr $(,)?
            }
        ),+ $(,)?
    ) => {
        hdrlint_utils::macros::enums::str_enum! {
            /// The closed set of diagnostics hdrlint can emit.
            pub enum NoteKind {
                $( $(#[$m])* $variant => $name ),+
            }
        }

        static DEFINITIONS: &[NoteDefinition] = &[
            $(
                NoteDefinition {
                    kind: NoteKind::$variant,
                    category: Category::$category,
                    level: Level::$level,
                    summary: $summary,
                    detail: $detail,
                }
            ),+
        ];

        impl NoteKind {
            /// The static definition of this kind.
            #[must_use]
            pub fn definition(self) -> &'static NoteDefinition {
                &DEFINITIONS[self as usize]
            }

            #[must_use]
            pub fn category(self) -> Category {
                self.definition().category
            }

            #[must_use]
            pub fn level(self) -> Level {
                self.definition().level
            }
        }

        pub(crate) fn definitions() -> &'static [NoteDefinition] {
            DEFINITIONS
        }
    };
}

define_notes! {
    /// A header which may only occur once was sent multiple times.
    SingleHeaderRepeat => "SINGLE_HEADER_REPEAT" {
        category: General,
        level: Bad,
        summary: "Only one %(field_name)s header is allowed in a message.",
        detail: "This header is designed to only occur once in a message. When it occurs more \
than once, a receiver needs to choose the one to use, which can lead to interoperability \
problems, since different implementations may make different choices.\n\n\
For the purposes of its tests, hdrlint uses the last instance of the header that is present; \
other implementations may behave differently.",
    },

    FieldNameBadSyntax => "FIELD_NAME_BAD_SYNTAX" {
        category: General,
        level: Bad,
        summary: "\"%(field_name)s\" is not a valid header field-name.",
        detail: "Header names are limited to the TOKEN production in HTTP; i.e., they can't \
contain parenthesis, angle brackets (<>), at-signs (@), commas, semicolons, colons, \
backslashes (\\), forward slashes (/), quotes, square brackets ([]), question marks, \
equals signs (=), curly brackets ({}), spaces or tabs.",
    },

    BadSyntax => "BAD_SYNTAX" {
        category: General,
        level: Bad,
        summary: "The %(field_name)s header's syntax isn't valid.",
        detail: "The value for this header doesn't conform to its specified syntax; see \
[its definition](%(ref_uri)s) for more information.",
    },

    ParamStarQuoted => "PARAM_STAR_QUOTED" {
        category: General,
        level: Bad,
        summary: "The '%(param)s' parameter's value cannot be quoted.",
        detail: "Parameter values that end in '*' have a specific format, defined in \
[RFC5987](https://www.rfc-editor.org/rfc/rfc5987), to allow non-ASCII text.\n\n\
The `%(param)s` parameter on the `%(field_name)s` header has double-quotes around it, \
which is not valid.",
    },

    ParamStarError => "PARAM_STAR_ERROR" {
        category: General,
        level: Bad,
        summary: "The %(param)s parameter's value is invalid.",
        detail: "Parameter values that end in '*' have a specific format, defined in \
[RFC5987](https://www.rfc-editor.org/rfc/rfc5987), to allow non-ASCII text.\n\n\
The `%(param)s` parameter on the `%(field_name)s` header is not valid; it needs to have \
three parts, separated by single quotes (').",
    },

    ParamStarBad => "PARAM_STAR_BAD" {
        category: General,
        level: Bad,
        summary: "The %(param)s* parameter isn't allowed on the %(field_name)s header.",
        detail: "Parameter values that end in '*' are reserved for non-ASCII text, as \
explained in [RFC5987](https://www.rfc-editor.org/rfc/rfc5987).\n\n\
The `%(param)s` parameter on the `%(field_name)s` header does not allow this; you should \
use `%(param)s` without the \"*\" on the end (and without the associated encoding).\n\n\
hdrlint ignores the content of this parameter.",
    },

    ParamStarNoCharset => "PARAM_STAR_NOCHARSET" {
        category: General,
        level: Warn,
        summary: "The %(param)s parameter's value doesn't define an encoding.",
        detail: "Parameter values that end in '*' have a specific format, defined in \
[RFC5987](https://www.rfc-editor.org/rfc/rfc5987), to allow non-ASCII text.\n\n\
The `%(param)s` parameter on the `%(field_name)s` header doesn't declare its character \
encoding, which means that recipients can't understand it. It should be `UTF-8`.",
    },

    ParamStarCharset => "PARAM_STAR_CHARSET" {
        category: General,
        level: Warn,
        summary: "The %(param)s parameter's value uses an encoding other than UTF-8.",
        detail: "Parameter values that end in '*' have a specific format, defined in \
[RFC5987](https://www.rfc-editor.org/rfc/rfc5987), to allow non-ASCII text.\n\n\
The `%(param)s` parameter on the `%(field_name)s` header uses the `%(enc)s` encoding, \
which has interoperability issues on some browsers. It should be `UTF-8`.",
    },

    ParamRepeats => "PARAM_REPEATS" {
        category: General,
        level: Warn,
        summary: "The '%(param)s' parameter repeats in the %(field_name)s header.",
        detail: "Parameters on the %(field_name)s header should not repeat; implementations \
may handle them differently.",
    },

    ParamSingleQuoted => "PARAM_SINGLE_QUOTED" {
        category: General,
        level: Warn,
        summary: "The '%(param)s' parameter on the %(field_name)s header is single-quoted.",
        detail: "The `%(param)s`'s value on the %(field_name)s header starts and ends with a \
single quote ('). However, single quotes don't mean anything there.\n\n\
This means that the value will be interpreted as `%(param_val)s`, **not** \
`%(param_val_unquoted)s`. If you intend the latter, drop the single quotes.",
    },

    BadDateSyntax => "BAD_DATE_SYNTAX" {
        category: General,
        level: Bad,
        summary: "The %(field_name)s header's value isn't a valid date.",
        detail: "HTTP dates have very specific syntax, and sending an invalid date can cause \
a number of problems, especially around caching. Common problems include sending \"1 May\" \
instead of \"01 May\" (the day is a fixed-width field), and sending a date in a timezone \
other than GMT. See [the HTTP specification](https://www.rfc-editor.org/rfc/rfc9110#section-5.6.7) \
for more information.",
    },

    HeaderTooLarge => "HEADER_TOO_LARGE" {
        category: General,
        level: Warn,
        summary: "The %(header_name)s header is very large (%(header_size)s).",
        detail: "Some implementations limit the size of any single header line.",
    },

    HeaderNameEncoding => "HEADER_NAME_ENCODING" {
        category: General,
        level: Bad,
        summary: "The %(header_name)s header's name contains non-ASCII characters.",
        detail: "HTTP header field-names can only contain ASCII characters. hdrlint has \
detected non-ASCII characters in this header name, and interpreted them as ISO-8859-1.",
    },

    HeaderValueEncoding => "HEADER_VALUE_ENCODING" {
        category: General,
        level: Warn,
        summary: "The %(header_name)s header's value contains non-ASCII characters.",
        detail: "HTTP headers use the ISO-8859-1 character set, but in most cases are pure \
ASCII (a subset of this encoding).\n\n\
This header has non-ASCII characters, which hdrlint has interpreted as being encoded in \
ISO-8859-1. If another encoding is used (e.g., UTF-8), the results may be unpredictable.",
    },

    RequestHdrInResponse => "REQUEST_HDR_IN_RESPONSE" {
        category: General,
        level: Bad,
        summary: "\"%(field_name)s\" is a request header.",
        detail: "%(field_name)s isn't defined to have any meaning in responses, so hdrlint \
has ignored it.",
    },

    ResponseHdrInRequest => "RESPONSE_HDR_IN_REQUEST" {
        category: General,
        level: Bad,
        summary: "\"%(field_name)s\" is a response header.",
        detail: "%(field_name)s isn't defined to have any meaning in requests, so hdrlint \
has ignored it.",
    },

    HeaderDeprecated => "HEADER_DEPRECATED" {
        category: General,
        level: Warn,
        summary: "The %(header_name)s header is deprecated.",
        detail: "This header field is no longer recommended for use, because of \
interoperability problems and/or lack of use. See \
[the deprecation notice](%(deprecation_ref)s) for more information.",
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_are_indexed_by_kind() {
        assert_eq!(definitions().len(), NoteKind::ALL.len());
        for kind in NoteKind::ALL {
            assert_eq!(kind.definition().kind(), *kind);
        }
    }

    #[test]
    fn placeholders_are_deduplicated_in_order() {
        assert_eq!(
            NoteKind::ParamSingleQuoted.definition().placeholders(),
            vec!["param", "field_name", "param_val", "param_val_unquoted"],
        );
        assert_eq!(
            NoteKind::HeaderDeprecated.definition().placeholders(),
            vec!["header_name", "deprecation_ref"],
        );
    }

    #[test]
    fn star_charset_binds_encoding() {
        assert!(
            NoteKind::ParamStarCharset
                .definition()
                .placeholders()
                .contains(&"enc")
        );
    }
}
