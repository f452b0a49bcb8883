//! Parsing of a raw HTTP/1.x header block.

use hdrlint::error::{ErrorContext as _, OpaqueError};
use hdrlint::headers::{Direction, HeaderField};
use hdrlint::utils::str::decode_latin1;
use regex::Regex;

/// The header fields of a message, plus the direction implied by its start line.
#[derive(Debug, Default)]
pub(super) struct RawMessage {
    pub(super) direction: Option<Direction>,
    pub(super) fields: Vec<HeaderField>,
}

#[derive(Debug)]
pub(super) struct MessageParser {
    request_line: Regex,
    status_line: Regex,
}

impl MessageParser {
    pub(super) fn new() -> Result<Self, OpaqueError> {
        let request_line = Regex::new(r"^[!#$%&'*+.^_`|~0-9A-Za-z-]+ \S+ HTTP/\d(?:\.\d)?$")
            .context("compile request-line regex")?;
        let status_line =
            Regex::new(r"^HTTP/\d(?:\.\d)? \d{3}(?: .*)?$").context("compile status-line regex")?;
        Ok(Self {
            request_line,
            status_line,
        })
    }

    fn start_line(&self, line: &str) -> Option<Direction> {
        if self.request_line.is_match(line) {
            Some(Direction::Request)
        } else if self.status_line.is_match(line) {
            Some(Direction::Response)
        } else {
            None
        }
    }

    /// Parse a header block, optionally preceded by a request or status line.
    ///
    /// Parsing stops at the first empty line, so a full message can be given.
    /// Continuation lines (obs-fold) are joined to the previous field with a space.
    pub(super) fn parse(&self, input: &[u8]) -> Result<RawMessage, OpaqueError> {
        let mut message = RawMessage::default();
        let mut lines = input
            .split(|b| *b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .enumerate()
            .skip_while(|(_, line)| line.is_empty())
            .peekable();

        if let Some((_, first)) = lines.peek()
            && let Some(direction) = self.start_line(&decode_latin1(first))
        {
            tracing::debug!(%direction, "detected start line");
            message.direction = Some(direction);
            lines.next();
        }

        for (idx, line) in lines {
            if line.is_empty() {
                break;
            }

            if matches!(line.first(), Some(b' ' | b'\t')) {
                let Some(previous) = message.fields.pop() else {
                    return Err(OpaqueError::from_display(format!(
                        "line {}: continuation line without a header field",
                        idx + 1
                    )));
                };
                let mut value = previous.value().to_vec();
                value.push(b' ');
                value.extend_from_slice(trim_ows(line));
                message.fields.push(HeaderField::new(previous.name(), value));
                continue;
            }

            let Some(colon) = line.iter().position(|b| *b == b':') else {
                return Err(OpaqueError::from_display(format!(
                    "line {}: header field without ':' separator",
                    idx + 1
                )));
            };
            let (name, value) = line.split_at(colon);
            message
                .fields
                .push(HeaderField::new(name, trim_ows(&value[1..])));
        }

        tracing::debug!(fields = message.fields.len(), "parsed header block");
        Ok(message)
    }
}

fn trim_ows(mut bytes: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = bytes {
        bytes = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = bytes {
        bytes = rest;
    }
    bytes
}
