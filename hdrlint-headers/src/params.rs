//! Parameter parsing for structured header values.
//!
//! A structured value is a leading item followed by `;`-separated
//! parameters, e.g. `attachment; filename="report.pdf"`. Besides decoding
//! the parameters, [`parse_params`] reports the problems it comes across
//! as `(NoteKind, Params)` pairs.

use hdrlint_notes::{NoteKind, Params};
use hdrlint_utils::str::{decode_latin1, trim_ows};
use percent_encoding::percent_decode_str;

use crate::grammar::syntax::{split_unquoted, unquote};

/// A single decoded parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Lowercased name, including the trailing `*` of extended parameters.
    pub name: String,
    /// Decoded value, `None` for a bare parameter without `=`.
    pub value: Option<String>,
}

/// A leading value with its decoded parameters, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredValue {
    value: String,
    params: Vec<Param>,
}

impl StructuredValue {
    /// The leading item, before the first `;`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Value of the parameter with the given (case-insensitive) name.
    ///
    /// The last one wins when a parameter is repeated.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|param| param.name.eq_ignore_ascii_case(name))
            .and_then(|param| param.value.as_deref())
    }
}

/// Split a structured value into its leading item and parameters.
///
/// `field_name` is only used to bind the notes passed to `add_note`.
/// Extended parameters (`name*=charset'lang'value`) whose base name is listed
/// in `no_star` are reported and dropped; other extended parameters are
/// decoded from their charset, which should be `UTF-8`.
///
/// ```
/// use hdrlint_headers::params::parse_params;
///
/// let mut notes = Vec::new();
/// let parsed = parse_params(
///     "attachment; filename=\"a.txt\"; filename*=UTF-8''%e2%82%ac.txt",
///     "Content-Disposition",
///     &[],
///     |kind, params| notes.push((kind, params)),
/// );
///
/// assert_eq!(parsed.value(), "attachment");
/// assert_eq!(parsed.get("filename"), Some("a.txt"));
/// assert_eq!(parsed.get("filename*"), Some("\u{20ac}.txt"));
/// assert!(notes.is_empty());
/// ```
pub fn parse_params(
    member: &str,
    field_name: &str,
    no_star: &[&str],
    mut add_note: impl FnMut(NoteKind, Params),
) -> StructuredValue {
    let mut pieces = split_unquoted(member, ';');
    let value = pieces.next().unwrap_or_default().to_owned();

    let mut params: Vec<Param> = Vec::new();
    let mut repeated: Vec<String> = Vec::new();

    for piece in pieces.filter(|piece| !piece.is_empty()) {
        let (raw_name, raw_value) = match piece.split_once('=') {
            Some((name, value)) => (trim_ows(name), Some(trim_ows(value))),
            None => (piece, None),
        };
        let name = raw_name.to_ascii_lowercase();

        if params.iter().any(|param| param.name == name) && !repeated.contains(&name) {
            add_note(
                NoteKind::ParamRepeats,
                Params::new()
                    .with("param", name.as_str())
                    .with("field_name", field_name),
            );
            repeated.push(name.clone());
        }

        let Some(raw_value) = raw_value else {
            params.push(Param { name, value: None });
            continue;
        };

        if let Some(base) = name.strip_suffix('*') {
            if no_star.iter().any(|param| param.eq_ignore_ascii_case(base)) {
                add_note(
                    NoteKind::ParamStarBad,
                    Params::new()
                        .with("param", base)
                        .with("field_name", field_name),
                );
                // still tracked for repeat detection
                params.push(Param { name, value: None });
                continue;
            }
            let value = decode_ext_value(&name, raw_value, field_name, &mut add_note);
            params.push(Param { name, value });
            continue;
        }

        if raw_value.len() >= 2 && raw_value.starts_with('\'') && raw_value.ends_with('\'') {
            add_note(
                NoteKind::ParamSingleQuoted,
                Params::new()
                    .with("param", name.as_str())
                    .with("field_name", field_name)
                    .with("param_val", raw_value)
                    .with("param_val_unquoted", &raw_value[1..raw_value.len() - 1]),
            );
        }
        let value = unquote(raw_value).into_owned();
        params.push(Param {
            name,
            value: Some(value),
        });
    }

    StructuredValue { value, params }
}

/// Decode an RFC 5987 `ext-value`, returning `None` when it can't be decoded.
fn decode_ext_value(
    name: &str,
    raw_value: &str,
    field_name: &str,
    add_note: &mut impl FnMut(NoteKind, Params),
) -> Option<String> {
    let note_params = || {
        Params::new()
            .with("param", name)
            .with("field_name", field_name)
    };

    let mut value = raw_value;
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        add_note(NoteKind::ParamStarQuoted, note_params());
        value = &value[1..value.len() - 1];
    }

    let parts: Vec<&str> = value.split('\'').collect();
    let [charset, _language, encoded] = parts.as_slice() else {
        add_note(NoteKind::ParamStarError, note_params());
        return None;
    };

    if charset.is_empty() {
        add_note(NoteKind::ParamStarNoCharset, note_params());
        return None;
    }

    let decoded = percent_decode_str(encoded);
    if charset.eq_ignore_ascii_case("utf-8") {
        return Some(decoded.decode_utf8_lossy().into_owned());
    }

    add_note(
        NoteKind::ParamStarCharset,
        note_params().with("enc", *charset),
    );
    if charset.eq_ignore_ascii_case("iso-8859-1") {
        let bytes: Vec<u8> = decoded.collect();
        return Some(decode_latin1(&bytes));
    }
    tracing::debug!(param = name, charset, "unsupported charset for extended parameter");
    None
}
