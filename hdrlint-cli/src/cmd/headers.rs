//! hdrlint headers command

use clap::Args;
use hdrlint::error::{BoxError, ErrorContext as _, OpaqueError};
use hdrlint::headers::{Direction, HeaderDescriptor, HeaderRegistry};
use std::io::{self, Write};

#[derive(Debug, Args)]
/// list the headers hdrlint knows about
pub(crate) struct CliCommandHeaders {
    /// only describe this header
    name: Option<String>,
}

/// run the hdrlint headers command
pub(crate) fn run(cfg: CliCommandHeaders) -> Result<(), BoxError> {
    let registry = HeaderRegistry::global();
    let descriptors = match cfg.name.as_deref() {
        Some(name) => vec![registry.lookup(name).ok_or_else(|| {
            OpaqueError::from_display(format!("unknown header: {name}"))
        })?],
        None => {
            let mut all: Vec<_> = registry.iter().collect();
            all.sort_by_key(|descriptor| descriptor.canonical_name());
            all
        }
    };

    let mut stdout = io::stdout().lock();
    write_headers(&mut stdout, &descriptors).context("write headers to stdout")?;
    Ok(())
}

fn flags(descriptor: &HeaderDescriptor) -> String {
    let mut flags = vec![if descriptor.is_list_header() { "list" } else { "single" }];
    match (
        descriptor.valid_in(Direction::Request),
        descriptor.valid_in(Direction::Response),
    ) {
        (true, false) => flags.push("request-only"),
        (false, true) => flags.push("response-only"),
        _ => (),
    }
    if descriptor.deprecation_ref().is_some() {
        flags.push("deprecated");
    }
    flags.join(",")
}

fn write_headers(w: &mut impl Write, descriptors: &[&HeaderDescriptor]) -> io::Result<()> {
    for descriptor in descriptors {
        writeln!(
            w,
            "{:<26} {:<17} {:<30} {}",
            descriptor.canonical_name(),
            descriptor.grammar(),
            flags(descriptor),
            descriptor.description(),
        )?;
    }
    w.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_flags() {
        let registry = HeaderRegistry::global();
        assert_eq!(flags(registry.describe("host")), "single,request-only");
        assert_eq!(flags(registry.describe("pragma")), "list,deprecated");
        assert_eq!(flags(registry.describe("x-unknown")), "single");
    }

    #[test]
    fn writes_one_line_per_header() {
        let registry = HeaderRegistry::global();
        let descriptors: Vec<_> = registry.iter().collect();
        let mut out = Vec::new();
        write_headers(&mut out, &descriptors).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), registry.len());
        assert!(out.contains("Content-Type"));
        assert!(out.contains("media-type"));
    }
}
