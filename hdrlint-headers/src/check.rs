use ahash::HashMap;
use hdrlint_notes::{Note, NoteKind, Params};
use hdrlint_utils::octets::fmt_bytes;
use hdrlint_utils::str::{decode_latin1, trim_ows};

use crate::grammar::{ParamLayout, syntax};
use crate::params::parse_params;
use crate::{BuiltinGrammar, Direction, GrammarValidator, HeaderDescriptor, HeaderRegistry};

/// A single header line as it was received: raw name and value bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderField {
    name: Vec<u8>,
    value: Vec<u8>,
}

impl HeaderField {
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Size in bytes of the line `name: value`, excluding the line ending.
    #[must_use]
    pub fn line_len(&self) -> usize {
        self.name.len() + 2 + self.value.len()
    }
}

impl<N, V> From<(N, V)> for HeaderField
where
    N: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// Tunables of a [`HeaderChecker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    max_header_size: usize,
}

impl CheckConfig {
    /// Header lines larger than this many bytes are reported by default.
    pub const DEFAULT_MAX_HEADER_SIZE: usize = 4096;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_header_size: Self::DEFAULT_MAX_HEADER_SIZE,
        }
    }

    /// Set the size (in bytes) above which a `name: value` line is considered too large.
    #[must_use]
    pub const fn with_max_header_size(mut self, size: usize) -> Self {
        self.max_header_size = size;
        self
    }

    /// Set the size (in bytes) above which a `name: value` line is considered too large.
    pub fn set_max_header_size(&mut self, size: usize) -> &mut Self {
        self.max_header_size = size;
        self
    }

    #[must_use]
    pub const fn max_header_size(&self) -> usize {
        self.max_header_size
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks the header fields of a message and reports the problems as [`Note`]s.
///
/// Fields are grouped by (case-insensitive) name, in order of first appearance,
/// and every group goes through the same stages:
///
/// 1. the name has to be a token;
/// 2. names have to be ASCII, non-ASCII values are reported once per group;
/// 3. every line has to stay within [`CheckConfig::max_header_size`];
/// 4. the header has to be defined for the message [`Direction`],
///    otherwise the remaining stages are skipped;
/// 5. non-list headers may only occur once, the last occurrence is the one checked;
/// 6. deprecated headers are reported;
/// 7. values have to match the [`Grammar`](crate::Grammar) of the header;
/// 8. parameters of structured values are checked (see [`parse_params`]).
///
/// Checking never fails: every problem is a note.
#[derive(Debug, Clone)]
pub struct HeaderChecker<'r, V = BuiltinGrammar> {
    registry: &'r HeaderRegistry,
    validator: V,
    config: CheckConfig,
}

impl HeaderChecker<'static, BuiltinGrammar> {
    /// A checker using the global registry, the builtin grammars and the default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: HeaderRegistry::global(),
            validator: BuiltinGrammar,
            config: CheckConfig::new(),
        }
    }
}

impl Default for HeaderChecker<'static, BuiltinGrammar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, V> HeaderChecker<'r, V> {
    /// Use a different [`HeaderRegistry`].
    #[must_use]
    pub fn with_registry<'n>(self, registry: &'n HeaderRegistry) -> HeaderChecker<'n, V> {
        HeaderChecker {
            registry,
            validator: self.validator,
            config: self.config,
        }
    }

    /// Use a different [`GrammarValidator`].
    #[must_use]
    pub fn with_validator<W>(self, validator: W) -> HeaderChecker<'r, W> {
        HeaderChecker {
            registry: self.registry,
            validator,
            config: self.config,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &'r HeaderRegistry {
        self.registry
    }
}

impl<V: GrammarValidator> HeaderChecker<'_, V> {
    /// Check all header fields of a single message.
    pub fn check(&self, direction: Direction, fields: &[HeaderField]) -> Vec<Note> {
        let span = tracing::debug_span!("check_headers", %direction, fields = fields.len());
        let _enter = span.enter();

        let mut notes = Vec::new();
        for group in group_fields(fields) {
            self.check_group(direction, &group, &mut notes);
        }

        tracing::debug!(notes = notes.len(), "header check done");
        notes
    }

    fn check_group(&self, direction: Direction, group: &FieldGroup<'_>, notes: &mut Vec<Note>) {
        let known = self.registry.lookup(&group.name);
        let descriptor = known.unwrap_or(&HeaderDescriptor::DEFAULT);
        let field_name = known.map_or(group.name.as_str(), |known| known.canonical_name());

        tracing::trace!(
            header = %group.name,
            known = known.is_some(),
            occurrences = group.fields.len(),
            "check header group",
        );

        let mut out = Emitter {
            subject: format!("header-{}", group.key),
            notes,
        };

        // 1. name syntax
        if !syntax::is_token(&group.name) {
            out.emit(
                NoteKind::FieldNameBadSyntax,
                Params::new().with("field_name", group.name.as_str()),
            );
        }

        // 2. encoding
        if !group.raw_name.is_ascii() {
            out.emit(
                NoteKind::HeaderNameEncoding,
                Params::new().with("header_name", group.name.as_str()),
            );
        }
        if group.fields.iter().any(|field| !field.value.is_ascii()) {
            out.emit(
                NoteKind::HeaderValueEncoding,
                Params::new().with("header_name", group.name.as_str()),
            );
        }

        // 3. size
        for field in &group.fields {
            let size = field.line_len();
            if size > self.config.max_header_size {
                out.emit(
                    NoteKind::HeaderTooLarge,
                    Params::new()
                        .with("header_name", group.name.as_str())
                        .with("header_size", fmt_bytes(size)),
                );
            }
        }

        // 4. direction
        if !descriptor.valid_in(direction) {
            let kind = match direction {
                Direction::Request => NoteKind::ResponseHdrInRequest,
                Direction::Response => NoteKind::RequestHdrInResponse,
            };
            out.emit(kind, Params::new().with("field_name", field_name));
            tracing::debug!(header = field_name, %direction, "header not valid in this direction, skipping value checks");
            return;
        }

        // 5. repetition
        let values: Vec<String> = group
            .fields
            .iter()
            .map(|field| decode_latin1(&field.value))
            .collect();
        let checked: &[String] = if descriptor.is_list_header() {
            &values
        } else {
            if values.len() > 1 {
                out.emit(
                    NoteKind::SingleHeaderRepeat,
                    Params::new().with("field_name", field_name),
                );
            }
            &values[values.len().saturating_sub(1)..]
        };

        // 6. deprecation
        if let Some(reference) = descriptor.deprecation_ref() {
            out.emit(
                NoteKind::HeaderDeprecated,
                Params::new()
                    .with("header_name", group.name.as_str())
                    .with("deprecation_ref", reference),
            );
        }

        // 7. value grammar
        let grammar = descriptor.grammar();
        for value in checked {
            let value = trim_ows(value);
            if grammar.is_date() {
                if !self.validator.validate_date(value) {
                    out.emit(
                        NoteKind::BadDateSyntax,
                        Params::new().with("field_name", field_name),
                    );
                    break;
                }
            } else if !self.validator.validate(grammar, value) {
                out.emit(
                    NoteKind::BadSyntax,
                    Params::new()
                        .with("field_name", field_name)
                        .with("ref_uri", descriptor.spec_ref()),
                );
                break;
            }
        }

        // 8. parameters
        let Some(layout) = grammar.param_layout() else {
            return;
        };
        for value in checked {
            let value = trim_ows(value);
            let members: Vec<&str> = match layout {
                ParamLayout::Single => vec![value],
                ParamLayout::List => syntax::list_members(value).collect(),
            };
            for member in members {
                parse_params(
                    member,
                    field_name,
                    descriptor.no_star_params(),
                    |kind, params| out.emit(kind, params),
                );
            }
        }
    }
}

/// All occurrences of one header name, in order of appearance.
#[derive(Debug)]
struct FieldGroup<'a> {
    /// Lowercased name.
    key: String,
    /// Name as first seen, decoded as ISO-8859-1.
    name: String,
    raw_name: &'a [u8],
    fields: Vec<&'a HeaderField>,
}

fn group_fields(fields: &[HeaderField]) -> Vec<FieldGroup<'_>> {
    let mut groups: Vec<FieldGroup<'_>> = Vec::new();
    let mut index: HashMap<Vec<u8>, usize> = HashMap::default();

    for field in fields {
        let key = field.name.to_ascii_lowercase();
        if let Some(&idx) = index.get(&key) {
            groups[idx].fields.push(field);
            continue;
        }
        index.insert(key.clone(), groups.len());
        groups.push(FieldGroup {
            key: decode_latin1(&key),
            name: decode_latin1(&field.name),
            raw_name: &field.name,
            fields: vec![field],
        });
    }

    groups
}

struct Emitter<'n> {
    subject: String,
    notes: &'n mut Vec<Note>,
}

impl Emitter<'_> {
    fn emit(&mut self, kind: NoteKind, params: Params) {
        tracing::trace!(%kind, subject = %self.subject, "note");
        self.notes.push(Note::new(self.subject.clone(), kind, params));
    }
}
