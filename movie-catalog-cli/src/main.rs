//! movie-catalog CLI
//!
//! Command-line front end for the movie catalog: plays the role of the
//! add/edit/delete forms and the lookup-table management window.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::io::{BufRead, Write};

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, RefsAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db = cli.database;

    match cli.command {
        Commands::Init => commands::init::run_init(db),
        Commands::List { search, json } => commands::movies::run_list(db, search, json),
        Commands::Show { id } => commands::movies::run_show(db, id),
        Commands::Add { movie } => commands::movies::run_add(db, movie),
        Commands::Edit { id, movie } => commands::movies::run_edit(db, id, movie),
        Commands::Delete { id, yes } => commands::movies::run_delete(db, id, yes),
        Commands::Refs { action } => match action {
            RefsAction::List { kind } => commands::refs::run_refs_list(db, kind),
            RefsAction::Add { kind, name } => commands::refs::run_refs_add(db, kind, &name),
            RefsAction::Delete { kind, name, yes } => {
                commands::refs::run_refs_delete(db, kind, &name, yes)
            }
        },
        Commands::Stats => commands::stats::run_stats(db),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(db),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetDatabase { path } => commands::config::run_config_set_database(path),
            ConfigAction::ClearDatabase => commands::config::run_config_clear_database(),
        },
    }
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Ask a yes/no question on stdin. Anything but "y"/"yes" is a no.
pub(crate) fn confirm(prompt: &str) -> Result<bool, CliError> {
    let stdin = std::io::stdin();
    confirm_with(prompt, &mut stdin.lock(), &mut std::io::stdout())
}

fn confirm_with(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<bool, CliError> {
    write!(output, "{} [y/N] ", prompt)?;
    output.flush()?;

    // EOF reads zero bytes and leaves the answer empty.
    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(input: &str) -> bool {
        let mut output = Vec::new();
        confirm_with("Delete 'Heat' (id 1)?", &mut input.as_bytes(), &mut output).unwrap()
    }

    #[test]
    fn confirm_accepts_y_and_yes() {
        assert!(answer("y\n"));
        assert!(answer("Y\n"));
        assert!(answer("yes\n"));
        assert!(answer("  YES  \n"));
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(!answer("\n"));
        assert!(!answer("n\n"));
        assert!(!answer("yep\n"));
        assert!(!answer(""));
    }

    #[test]
    fn confirm_prints_prompt() {
        let mut output = Vec::new();
        confirm_with("Delete genre 'Drama'?", &mut "n\n".as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Delete genre 'Drama'? [y/N] ");
    }
}
