//! hdrlint notes command

use clap::Args;
use hdrlint::error::{BoxError, ErrorContext as _};
use hdrlint::notes::{NoteCatalog, NoteDefinition};
use std::io::{self, Write};

#[derive(Debug, Args)]
/// list every kind of note hdrlint can report
pub(crate) struct CliCommandNotes {
    #[arg(long)]
    /// also print the detail template of every note kind
    detail: bool,
}

/// run the hdrlint notes command
pub(crate) fn run(cfg: CliCommandNotes) -> Result<(), BoxError> {
    let mut stdout = io::stdout().lock();
    write_notes(&mut stdout, NoteCatalog::definitions(), cfg.detail)
        .context("write note catalog to stdout")?;
    Ok(())
}

fn write_notes(w: &mut impl Write, definitions: &[NoteDefinition], detail: bool) -> io::Result<()> {
    for definition in definitions {
        writeln!(
            w,
            "{:<24} {:<8} {:<20} {}",
            definition.kind(),
            definition.level(),
            definition.category(),
            definition.summary_template(),
        )?;
        if detail {
            writeln!(w, "{}\n", definition.detail_template())?;
        }
    }
    w.flush()
}
