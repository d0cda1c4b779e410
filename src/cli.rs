// cli.rs - Command-line interface configuration
use std::ffi::OsString;
use std::path::Path;

use clap::Parser;

const FALLBACK_NAME: &str = "colorbars";

#[derive(Parser, Debug, Clone)]
#[command(name = "colorbars")]
#[command(about = "Full-screen color bar fill-rate test", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Print usage and exit
    #[arg(long = "help")]
    pub help: bool,

    /// Accepted and ignored
    #[arg(hide = true)]
    pub operands: Vec<OsString>,
}

/// What the command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Render,
    /// Print this line and exit successfully
    Usage(String),
}

impl Cli {
    /// Interpret `args` (including the program path); anything clap rejects
    /// is treated as a request for usage
    pub fn invocation<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program = program_name(args.first());

        match Cli::try_parse_from(args.iter()) {
            Ok(cli) if !cli.help => Invocation::Render,
            _ => Invocation::Usage(usage_line(&program)),
        }
    }
}

pub fn usage_line(program: &str) -> String {
    format!("usage: {program}")
}

fn program_name(arg0: Option<&OsString>) -> String {
    arg0.and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}
