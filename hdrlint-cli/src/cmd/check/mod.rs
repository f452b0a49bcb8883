//! hdrlint check command

use clap::{Args, ValueEnum};
use hdrlint::error::{BoxError, ErrorContext as _, OpaqueError};
use hdrlint::headers::{CheckConfig, Direction, HeaderChecker};
use hdrlint::notes::{Level, Note, RenderedNote};
use std::io::{self, Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod input;
mod writer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
/// check the header block of a single HTTP message
///
/// The input is a raw HTTP/1.x header block, optionally preceded by a request
/// or status line (which also decides the direction) and followed by an empty line.
pub(crate) struct CliCommandCheck {
    /// file to read the headers from (stdin if omitted or '-')
    input: Option<PathBuf>,

    #[arg(long, short = 'd', value_parser = parse_direction)]
    /// direction of the message: request or response
    ///
    /// (overrides the direction implied by the start line, defaults to response)
    direction: Option<Direction>,

    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    /// output format
    format: OutputFormat,

    #[arg(long)]
    /// print the detail text of every note (text format only)
    detail: bool,

    #[arg(long, short = 'l', value_parser = parse_level)]
    /// only report notes of at least this level: good, info, warning or bad
    min_level: Option<Level>,

    #[arg(long, default_value_t = CheckConfig::DEFAULT_MAX_HEADER_SIZE)]
    /// header lines larger than this amount of bytes are reported
    max_header_size: usize,

    #[arg(long)]
    /// exit with code 2 when at least one bad note is reported
    strict: bool,
}

fn parse_direction(s: &str) -> Result<Direction, OpaqueError> {
    Direction::strict_parse(s.trim())
        .ok_or_else(|| OpaqueError::from_display(format!("unknown direction: {s}")))
}

fn parse_level(s: &str) -> Result<Level, OpaqueError> {
    Level::strict_parse(s.trim())
        .ok_or_else(|| OpaqueError::from_display(format!("unknown level: {s}")))
}

/// run the hdrlint check command
pub(crate) fn run(cfg: CliCommandCheck) -> Result<ExitCode, BoxError> {
    let raw = read_input(cfg.input.as_deref())?;

    let message = input::MessageParser::new()?
        .parse(&raw)
        .context("parse header block")?;
    let direction = cfg
        .direction
        .or(message.direction)
        .unwrap_or(Direction::Response);
    tracing::debug!(%direction, fields = message.fields.len(), "checking message");

    let checker = HeaderChecker::new()
        .with_config(CheckConfig::new().with_max_header_size(cfg.max_header_size));
    let notes = checker
        .check(direction, &message.fields)
        .iter()
        .filter(|note| cfg.min_level.is_none_or(|level| note.level() >= level))
        .map(Note::render)
        .collect::<Result<Vec<RenderedNote>, _>>()
        .context("render notes")?;

    let mut stdout = io::stdout().lock();
    let written = match cfg.format {
        OutputFormat::Text => writer::write_text(&mut stdout, direction, &notes, cfg.detail),
        OutputFormat::Json => writer::write_json(&mut stdout, direction, &notes),
    };
    written.context("write report to stdout")?;
    stdout.flush().context("flush stdout")?;

    if cfg.strict && notes.iter().any(|note| note.level == Level::Bad) {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, BoxError> {
    let mut raw = Vec::new();
    match path {
        Some(path) if path.as_os_str() != "-" => {
            raw = std::fs::read(path)
                .with_context(|| format!("read headers from {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .lock()
                .read_to_end(&mut raw)
                .context("read headers from stdin")?;
        }
    }
    Ok(raw)
}
