//! Console logging setup.
//!
//! Info messages are printed as-is so commands can use `log::info!` for their
//! normal output. Warnings and errors get a colored prefix. `--verbose` adds
//! timestamps and debug messages; `--logfile` tees everything to a file with
//! ANSI codes stripped.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level);

    builder.format(move |buf, record| {
        let prefix = match record.level() {
            Level::Error => Some(format!(
                "{}",
                "error:".if_supports_color(Stdout, |t| t.red())
            )),
            Level::Warn => Some(format!(
                "{}",
                "warning:".if_supports_color(Stdout, |t| t.yellow())
            )),
            Level::Info => None,
            Level::Debug | Level::Trace => Some(format!(
                "{}",
                "debug:".if_supports_color(Stdout, |t| t.dimmed())
            )),
        };

        if verbose {
            let ts = buf.timestamp_seconds();
            write!(buf, "[{}] ", ts)?;
        }
        match prefix {
            Some(prefix) => writeln!(buf, "{} {}", prefix, record.args()),
            None => writeln!(buf, "{}", record.args()),
        }
    });

    match logfile {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::other(format!("Failed to create log file {}: {}", path.display(), e))
            })?;
            builder.target(Target::Pipe(Box::new(TeeWriter {
                file: strip_ansi_escapes::Writer::new(file),
            })));
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::other(format!("Failed to initialize logging: {}", e)))
}

/// Writes to stdout and to a log file with escape codes removed.
struct TeeWriter {
    file: strip_ansi_escapes::Writer<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}
