use crate::cli::args::Args;
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::dispatch::{BuildCommand, DemoCommand, Dispatcher};
use crate::domain::error::{ChromactlError, ChromactlResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging::init_logging;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Execute CLI command
///
/// Every failure is rendered through the output layer in the selected
/// format before it propagates.
pub fn execute_command(args: Args) -> ChromactlResult<()> {
    let writer = ConsoleWriter::new(args.output.clone());

    match dispatch_from_args(args, &writer) {
        Err(e @ ChromactlError::UnknownCommand { .. }) => Err(e),
        Err(e) => {
            writer.write_error(&e.to_string())?;
            Err(e)
        }
        ok => ok,
    }
}

fn dispatch_from_args(args: Args, writer: &ConsoleWriter) -> ChromactlResult<()> {
    // Load configuration using ConfigManager
    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(Path::new(config_path))?
    } else {
        config_manager.load_config()?
    };

    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose)?;
    }

    let dispatcher = default_dispatcher()?;

    let (cmd, cmd_args) = match args.command_line.split_first() {
        Some((cmd, rest)) => (cmd.clone(), rest.to_vec()),
        None => read_interactive_line(&config.global.prompt)?,
    };

    match dispatcher.dispatch(&cmd, &cmd_args) {
        Err(ChromactlError::UnknownCommand { name, available }) => {
            writer.write_unknown_command(&name, &dispatcher.command_summaries())?;
            Err(ChromactlError::UnknownCommand { name, available })
        }
        other => other,
    }
}

/// Registry shipped with the chromactl binary
pub fn default_dispatcher() -> ChromactlResult<Dispatcher> {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(BuildCommand)?;
    dispatcher.register(DemoCommand)?;
    Ok(dispatcher)
}

/// Prompt once on stdout and read a single command line from stdin.
///
/// EOF is treated like a blank line: the empty command falls through to
/// the unknown-command path.
fn read_interactive_line(prompt: &str) -> ChromactlResult<(String, Vec<String>)> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(split_command_line(&line))
}

/// Split a raw input line on runs of whitespace.
///
/// The first token is the command, the rest are its arguments. A blank or
/// whitespace-only line yields an empty command, which can never match a
/// registered name.
pub fn split_command_line(line: &str) -> (String, Vec<String>) {
    let mut tokens = line.split_whitespace().map(str::to_string);
    let cmd = tokens.next().unwrap_or_default();
    (cmd, tokens.collect())
}
