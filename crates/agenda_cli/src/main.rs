//! Terminal driver for the agenda list.
//!
//! # Responsibility
//! - Wire config, logging and one `AgendaSession` together.
//! - Read line commands from stdin and print the list after each change.
//! - Keep a `--smoke` probe to validate core crate linkage.

mod command;

use agenda_core::{
    init_logging_from_config, AgendaConfig, AgendaSession, IdStrategy, LIMIT_REACHED_MESSAGE,
    MAX_ENTRIES,
};
use clap::Parser;
use command::Command;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "agenda", about = "Prioritized agenda list, capped at ten entries")]
struct Args {
    /// Log level (trace|debug|info|warn|error); overrides AGENDA_LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; overrides AGENDA_LOG_DIR
    #[arg(long)]
    log_dir: Option<std::path::PathBuf>,

    /// Id strategy (counter|uuid); overrides AGENDA_ID_STRATEGY
    #[arg(long)]
    ids: Option<IdStrategy>,

    /// Print linkage probe and exit
    #[arg(long)]
    smoke: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.smoke {
        println!("agenda_core ping={}", agenda_core::ping());
        println!("agenda_core version={}", agenda_core::core_version());
        return ExitCode::SUCCESS;
    }

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("agenda: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("agenda: {err}");
        return ExitCode::FAILURE;
    }

    let mut session = AgendaSession::with_id_source(config.id_strategy.build());
    match run(&mut session, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("agenda: {err}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(args: &Args) -> Result<AgendaConfig, String> {
    let mut config = AgendaConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(level) = args.log_level.as_deref() {
        config.set_log_level(level).map_err(|err| err.to_string())?;
    }
    if let Some(dir) = args.log_dir.clone() {
        config.log_dir = Some(dir);
    }
    if let Some(strategy) = args.ids {
        config.id_strategy = strategy;
    }
    Ok(config)
}

fn run(session: &mut AgendaSession, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    writeln!(
        out,
        "agenda: add <text> | edit <id> <text> | delete <id> | move <from> <to> | list | quit"
    )?;
    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        apply(session, command, &mut out)?;
    }
    Ok(())
}

fn apply(session: &mut AgendaSession, command: Command, out: &mut impl Write) -> io::Result<()> {
    match command {
        Command::Add(text) => {
            if session.add(text.trim()).limit_reached {
                writeln!(out, "{LIMIT_REACHED_MESSAGE}")?;
            }
        }
        Command::Edit { id, text } => {
            session.update(&id, text.trim());
        }
        Command::Delete(id) => {
            session.delete(&id);
        }
        Command::Move { from, to } => {
            if let Err(err) = session.reorder(from, to) {
                writeln!(out, "error: {err}")?;
            }
        }
        Command::List | Command::Quit => {}
    }
    print_entries(session, out)
}

fn print_entries(session: &AgendaSession, out: &mut impl Write) -> io::Result<()> {
    if session.is_empty() {
        return writeln!(out, "No entries yet. Add tasks above");
    }
    for (index, entry) in session.entries().iter().enumerate() {
        writeln!(out, "{index:>2}. [{}] {}", entry.id, entry.text)?;
    }
    writeln!(out, "({}/{MAX_ENTRIES})", session.len())
}
