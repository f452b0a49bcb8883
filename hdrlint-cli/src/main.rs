//! entrypoint for hdrlint-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

mod cmd;
use self::cmd::{check, headers, notes};

mod trace;

#[derive(Debug, Parser)]
#[command(name = "hdrlint")]
#[command(bin_name = "hdrlint")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,

    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    /// print more diagnostics on stderr (-v for debug, -vv for trace)
    verbose: u8,

    #[arg(long, global = true)]
    /// write diagnostics on stderr as json lines
    log_json: bool,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Check(check::CliCommandCheck),
    Notes(notes::CliCommandNotes),
    Headers(headers::CliCommandHeaders),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let directive = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if let Err(err) = trace::init_tracing(directive, cli.log_json) {
        eprintln!("failed to init tracing: {err}");
    }

    let result = match cli.cmds {
        CliCommands::Check(cfg) => check::run(cfg),
        CliCommands::Notes(cfg) => notes::run(cfg).map(|()| ExitCode::SUCCESS),
        CliCommands::Headers(cfg) => headers::run(cfg).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("exit with error: {err}");
            ExitCode::FAILURE
        }
    }
}
