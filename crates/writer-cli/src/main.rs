//! Command-line entry point for the `writer` utility.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use writer_core::{write_file, SyslogSession};

/// Write a string to a file, journaling the action to syslog.
#[derive(Parser, Debug)]
#[command(name = "writer", version, about, long_about = None)]
struct Cli {
    /// Target file; its parent directory must already exist.
    #[arg(value_name = "WRITEFILE", allow_hyphen_values = true)]
    writefile: PathBuf,

    /// String written verbatim to WRITEFILE.
    #[arg(value_name = "WRITESTR", allow_hyphen_values = true)]
    writestr: String,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            let program = std::env::args().next().unwrap_or_else(|| "writer".into());
            eprintln!("Usage: {program} <writefile> <writestr>");
            return ExitCode::FAILURE;
        }
    };

    // The session opens only once the arguments are known to be valid, and
    // closes when this scope ends, on either exit path. Returning an
    // ExitCode rather than calling process::exit keeps that guarantee.
    let mut journal = SyslogSession::open();
    match write_file(&mut journal, &cli.writefile, &cli.writestr) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
