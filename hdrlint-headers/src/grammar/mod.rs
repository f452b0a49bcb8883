//! Field value grammars and their validation.
//!
//! Every [`HeaderDescriptor`](crate::HeaderDescriptor) refers to a [`Grammar`].
//! Whether a value matches that grammar is decided by a [`GrammarValidator`],
//! of which [`BuiltinGrammar`] is the implementation used by default.

use hdrlint_utils::str::trim_ows;

pub mod syntax;
use syntax::{
    is_field_content, is_parameter, is_token, is_token_or_quoted_string,
    list_members, split_unquoted,
};

hdrlint_utils::macros::enums::str_enum! {
    /// Identifies the syntax a header field value has to match.
    pub enum Grammar {
        /// Any sequence of field-content characters.
        FieldValue => "field-value",
        Token => "token",
        /// `#token`
        TokenList => "token-list",
        /// `1*DIGIT`
        Digits => "digits",
        HttpDate => "HTTP-date",
        /// `[ "W/" ] opaque-tag`
        EntityTag => "entity-tag",
        /// `#( token [ "=" ( token / quoted-string ) ] )`, e.g. `Cache-Control`.
        DirectiveList => "directive-list",
        /// `type "/" subtype *( OWS ";" OWS parameter )`
        MediaType => "media-type",
        /// A list of media ranges or tokens, each with optional parameters, e.g. `Accept`.
        MediaRangeList => "media-range-list",
        /// `disposition-type *( OWS ";" OWS disposition-parm )`
        Disposition => "disposition",
        /// `#( "<" URI-Reference ">" *( OWS ";" OWS link-param ) )`
        LinkList => "link-list",
    }
}

/// How parameters appear in values of a [`Grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLayout {
    /// The value is a single item followed by `;`-separated parameters.
    Single,
    /// The value is a `,`-separated list of items, each with parameters.
    List,
}

impl Grammar {
    /// Whether the grammar is an HTTP-date.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::HttpDate)
    }

    /// The parameter layout of the grammar, `None` if it has no parameters.
    #[must_use]
    pub const fn param_layout(self) -> Option<ParamLayout> {
        match self {
            Self::MediaType | Self::Disposition => Some(ParamLayout::Single),
            Self::MediaRangeList | Self::LinkList => Some(ParamLayout::List),
            Self::FieldValue
            | Self::Token
            | Self::TokenList
            | Self::Digits
            | Self::HttpDate
            | Self::EntityTag
            | Self::DirectiveList => None,
        }
    }
}

/// Capability to decide whether a field value matches a [`Grammar`].
pub trait GrammarValidator {
    /// Whether `value` matches the given grammar.
    fn validate(&self, grammar: Grammar, value: &str) -> bool;

    /// Whether `value` is a valid HTTP-date.
    fn validate_date(&self, value: &str) -> bool;
}

impl<V: GrammarValidator + ?Sized> GrammarValidator for &V {
    fn validate(&self, grammar: Grammar, value: &str) -> bool {
        (**self).validate(grammar, value)
    }

    fn validate_date(&self, value: &str) -> bool {
        (**self).validate_date(value)
    }
}

/// [`GrammarValidator`] for all [`Grammar`]s, following RFC 9110 and friends.
///
/// Dates are validated with [`httpdate`], which accepts the IMF-fixdate
/// format as well as the obsolete RFC 850 and asctime formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGrammar;

impl BuiltinGrammar {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GrammarValidator for BuiltinGrammar {
    fn validate(&self, grammar: Grammar, value: &str) -> bool {
        let value = trim_ows(value);
        match grammar {
            Grammar::FieldValue => is_field_content(value),
            Grammar::Token => is_token(value),
            Grammar::TokenList => is_list(value, is_token),
            Grammar::Digits => !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
            Grammar::HttpDate => self.validate_date(value),
            Grammar::EntityTag => is_entity_tag(value),
            Grammar::DirectiveList => is_list(value, is_directive),
            Grammar::MediaType => is_parameterized(value, is_media_type, false),
            Grammar::MediaRangeList => is_list(value, |member| {
                is_parameterized(member, |item| is_token(item) || is_media_type(item), false)
            }),
            Grammar::Disposition => is_parameterized(value, is_token, false),
            Grammar::LinkList => {
                is_list(value, |member| is_parameterized(member, is_uri_reference, true))
            }
        }
    }

    fn validate_date(&self, value: &str) -> bool {
        httpdate::parse_http_date(trim_ows(value)).is_ok()
    }
}

fn is_list(value: &str, member: impl Fn(&str) -> bool) -> bool {
    let mut any = false;
    for item in list_members(value) {
        if !member(item) {
            return false;
        }
        any = true;
    }
    any
}

fn is_parameterized(value: &str, head: impl Fn(&str) -> bool, allow_bare: bool) -> bool {
    let mut pieces = split_unquoted(value, ';');
    pieces.next().is_some_and(&head)
        && pieces.all(|param| param.is_empty() || is_parameter(param, allow_bare))
}

fn is_directive(s: &str) -> bool {
    match s.split_once('=') {
        Some((name, value)) => is_token(trim_ows(name)) && is_token_or_quoted_string(trim_ows(value)),
        None => is_token(s),
    }
}

fn is_media_type(s: &str) -> bool {
    s.split_once('/')
        .is_some_and(|(kind, subtype)| is_token(kind) && is_token(subtype))
}

fn is_entity_tag(s: &str) -> bool {
    let opaque = s.strip_prefix("W/").unwrap_or(s);
    opaque.len() >= 2
        && opaque.starts_with('"')
        && opaque.ends_with('"')
        && opaque[1..opaque.len() - 1]
            .chars()
            .all(|c| c == '!' || matches!(c, '#'..='~' | '\u{80}'..='\u{ff}'))
}

fn is_uri_reference(s: &str) -> bool {
    s.strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .is_some_and(|uri| {
            uri.chars()
                .all(|c| matches!(c, '!'..='~') && c != '<' && c != '>')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(grammar: Grammar, value: &str) -> bool {
        BuiltinGrammar.validate(grammar, value)
    }

    #[test]
    fn field_value() {
        assert!(valid(Grammar::FieldValue, "anything goes\there"));
        assert!(valid(Grammar::FieldValue, "caf\u{e9}"));
        assert!(!valid(Grammar::FieldValue, "nul\0byte"));
    }

    #[test]
    fn digits() {
        assert!(valid(Grammar::Digits, "0"));
        assert!(valid(Grammar::Digits, " 1234 "));
        assert!(!valid(Grammar::Digits, ""));
        assert!(!valid(Grammar::Digits, "-1"));
        assert!(!valid(Grammar::Digits, "12 34"));
    }

    #[test]
    fn dates() {
        assert!(valid(Grammar::HttpDate, "Sun, 06 Nov 1994 08:49:37 GMT"));
        assert!(BuiltinGrammar.validate_date("Sunday, 06-Nov-94 08:49:37 GMT"));
        assert!(BuiltinGrammar.validate_date("Sun Nov  6 08:49:37 1994"));
        assert!(!BuiltinGrammar.validate_date("1 May 2024 10:00:00 GMT"));
        assert!(!BuiltinGrammar.validate_date("tomorrow"));
    }

    #[test]
    fn token_lists() {
        assert!(valid(Grammar::TokenList, "gzip, br"));
        assert!(valid(Grammar::TokenList, "Accept-Encoding,,Origin"));
        assert!(!valid(Grammar::TokenList, "gzip br"));
        assert!(!valid(Grammar::TokenList, " , "));
    }

    #[test]
    fn entity_tags() {
        assert!(valid(Grammar::EntityTag, r#""xyzzy""#));
        assert!(valid(Grammar::EntityTag, r#"W/"xyzzy""#));
        assert!(valid(Grammar::EntityTag, r#""""#));
        assert!(!valid(Grammar::EntityTag, "xyzzy"));
        assert!(!valid(Grammar::EntityTag, r#""a"b""#));
    }

    #[test]
    fn directive_lists() {
        assert!(valid(Grammar::DirectiveList, "no-cache, max-age=60"));
        assert!(valid(Grammar::DirectiveList, r#"private="Set-Cookie, Foo""#));
        assert!(!valid(Grammar::DirectiveList, "max-age=6 0"));
    }

    #[test]
    fn media_types() {
        assert!(valid(Grammar::MediaType, "text/html"));
        assert!(valid(Grammar::MediaType, r#"text/html; charset="utf-8""#));
        assert!(valid(Grammar::MediaType, "text/html;"));
        assert!(!valid(Grammar::MediaType, "text"));
        assert!(!valid(Grammar::MediaType, "text/html; charset"));
    }

    #[test]
    fn media_range_lists() {
        assert!(valid(Grammar::MediaRangeList, "text/*;q=0.8, */*;q=0.1"));
        assert!(valid(Grammar::MediaRangeList, "en-US, fr;q=0.5"));
        assert!(!valid(Grammar::MediaRangeList, "text/html; q"));
    }

    #[test]
    fn dispositions() {
        assert!(valid(Grammar::Disposition, "inline"));
        assert!(valid(
            Grammar::Disposition,
            r#"attachment; filename="a; b.txt"; filename*=UTF-8''a%20b.txt"#
        ));
        assert!(!valid(Grammar::Disposition, "attachment filename=x"));
    }

    #[test]
    fn link_lists() {
        assert!(valid(
            Grammar::LinkList,
            r#"<http://example.com/a,b>; rel="next", </c>; rel=prev; crossorigin"#
        ));
        assert!(!valid(Grammar::LinkList, "http://example.com/; rel=next"));
        assert!(!valid(Grammar::LinkList, "<http://example.com/ a>"));
    }

    #[test]
    fn param_layouts() {
        assert_eq!(Grammar::MediaType.param_layout(), Some(ParamLayout::Single));
        assert_eq!(Grammar::LinkList.param_layout(), Some(ParamLayout::List));
        assert_eq!(Grammar::TokenList.param_layout(), None);
        assert!(Grammar::HttpDate.is_date());
        assert!(!Grammar::Digits.is_date());
    }
}
