use hdrlint::headers::Direction;
use hdrlint::notes::{Level, RenderedNote};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct Report<'a> {
    direction: Direction,
    notes: &'a [RenderedNote],
}

pub(super) fn write_json(
    w: &mut impl Write,
    direction: Direction,
    notes: &[RenderedNote],
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, &Report { direction, notes })?;
    writeln!(w)
}

pub(super) fn write_text(
    w: &mut impl Write,
    direction: Direction,
    notes: &[RenderedNote],
    detail: bool,
) -> io::Result<()> {
    if notes.is_empty() {
        return writeln!(w, "{direction}: no issues found");
    }

    for note in notes {
        writeln!(
            w,
            "{:>7}  {}  {}",
            note.level.as_str().to_uppercase(),
            note.subject,
            note.summary
        )?;
        if detail {
            for line in note.detail.lines() {
                if line.is_empty() {
                    writeln!(w)?;
                } else {
                    writeln!(w, "         {line}")?;
                }
            }
            writeln!(w)?;
        }
    }

    let count = |level: Level| notes.iter().filter(|note| note.level == level).count();
    writeln!(
        w,
        "{direction}: {} note(s), {} bad, {} warning, {} info",
        notes.len(),
        count(Level::Bad),
        count(Level::Warn),
        count(Level::Info),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrlint::headers::HeaderField;

    fn rendered(direction: Direction, fields: &[(&str, &str)]) -> Vec<RenderedNote> {
        let fields: Vec<HeaderField> = fields.iter().copied().map(HeaderField::from).collect();
        hdrlint::check_and_render(direction, &fields).unwrap()
    }

    #[test]
    fn text_without_notes() {
        let mut out = Vec::new();
        write_text(&mut out, Direction::Request, &[], false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "request: no issues found\n");
    }

    #[test]
    fn text_with_notes() {
        let notes = rendered(Direction::Response, &[("Age", "old"), ("Pragma", "no-cache")]);
        let mut out = Vec::new();
        write_text(&mut out, Direction::Response, &notes, true).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("    BAD  header-age  The Age header's syntax isn't valid."));
        assert!(out.contains("WARNING  header-pragma  The Pragma header is deprecated."));
        assert!(out.contains("         This header field is no longer recommended"));
        assert!(out.ends_with("response: 2 note(s), 1 bad, 1 warning, 0 info\n"));
    }

    #[test]
    fn json_report() {
        let notes = rendered(Direction::Request, &[("Server", "x")]);
        let mut out = Vec::new();
        write_json(&mut out, Direction::Request, &notes).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["direction"], "request");
        assert_eq!(value["notes"][0]["kind"], "RESPONSE_HDR_IN_REQUEST");
        assert_eq!(value["notes"][0]["level"], "bad");
        assert_eq!(value["notes"][0]["subject"], "header-server");
        assert_eq!(value["notes"][0]["params"]["field_name"], "Server");
    }
}
