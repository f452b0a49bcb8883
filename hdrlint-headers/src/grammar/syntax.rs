//! Lexical building blocks of HTTP field values (RFC 9110, section 5.6).

use hdrlint_utils::str::trim_ows;
use std::borrow::Cow;

/// `tchar`: any VCHAR except delimiters.
#[must_use]
pub fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// `token = 1*tchar`
#[must_use]
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_tchar)
}

fn is_obs_text(c: char) -> bool {
    matches!(c, '\u{80}'..='\u{ff}')
}

fn is_vchar_or_obs(c: char) -> bool {
    matches!(c, '!'..='~') || is_obs_text(c)
}

/// Characters allowed inside a field value: VCHAR, SP, HTAB and obs-text.
#[must_use]
pub fn is_field_content(s: &str) -> bool {
    s.chars()
        .all(|c| c == ' ' || c == '\t' || is_vchar_or_obs(c))
}

fn is_qdtext(c: char) -> bool {
    matches!(c, '\t' | ' ' | '!' | '#'..='[' | ']'..='~') || is_obs_text(c)
}

/// `quoted-string = DQUOTE *( qdtext / quoted-pair ) DQUOTE`
#[must_use]
pub fn is_quoted_string(s: &str) -> bool {
    let Some(inner) = s.strip_prefix('"') else {
        return false;
    };
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return chars.as_str().is_empty(),
            '\\' => match chars.next() {
                Some(escaped) if escaped == '\t' || escaped == ' ' || is_vchar_or_obs(escaped) => {}
                _ => return false,
            },
            c if is_qdtext(c) => {}
            _ => return false,
        }
    }
    false
}

/// Strip the quotes and quoted-pairs of a quoted-string.
///
/// Anything that is not a valid quoted-string is returned as is.
#[must_use]
pub fn unquote(s: &str) -> Cow<'_, str> {
    if !is_quoted_string(s) {
        return Cow::Borrowed(s);
    }
    let inner = &s[1..s.len() - 1];
    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// `token / quoted-string`
#[must_use]
pub fn is_token_or_quoted_string(s: &str) -> bool {
    is_token(s) || is_quoted_string(s)
}

/// Split `s` on `sep`, ignoring separators inside quoted-strings and `<...>` references.
///
/// Every piece is trimmed of optional whitespace; empty pieces are kept.
pub fn split_unquoted(s: &str, sep: char) -> impl Iterator<Item = &str> {
    let mut in_quotes = false;
    let mut escaped = false;
    let mut in_angles = false;
    s.split(move |c: char| {
        if in_quotes {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_quotes = false;
            }
            false
        } else if in_angles {
            if c == '>' {
                in_angles = false;
            }
            false
        } else if c == sep {
            true
        } else {
            match c {
                '"' => in_quotes = true,
                '<' => in_angles = true,
                _ => (),
            }
            false
        }
    })
    .map(trim_ows)
}

/// Members of a `#rule` list, skipping empty elements.
pub fn list_members(s: &str) -> impl Iterator<Item = &str> {
    split_unquoted(s, ',').filter(|member| !member.is_empty())
}

/// `parameter = token "=" ( token / quoted-string )`, with optional
/// whitespace around the `=`. A bare `token` is accepted when `allow_bare` is set.
#[must_use]
pub fn is_parameter(s: &str, allow_bare: bool) -> bool {
    match s.split_once('=') {
        Some((name, value)) => {
            is_token(trim_ows(name)) && is_token_or_quoted_string(trim_ows(value))
        }
        None => allow_bare && is_token(s),
    }
}
