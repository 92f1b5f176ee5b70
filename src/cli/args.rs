use crate::constants::verbosity;
use crate::loader::FetchOptions;
use clap::Parser;
use log::LevelFilter;

/// CLI arguments for h3c.
///
/// Flags are independent: `--list` and `--init` may be combined in one call.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "h3c", author, about, long_about = None, disable_version_flag = true)]
pub struct Args {
    /// Initialize a new project from a template.
    #[arg(short, long)]
    pub init: bool,

    /// Print the version number.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// List available templates.
    #[arg(short, long)]
    pub list: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Fetch only the latest commit of the template.
    #[arg(long)]
    pub shallow: bool,

    /// Keep the template's `.git` directory in the new project.
    #[arg(long = "keep-git")]
    pub keep_git: bool,
}

impl Args {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions { full_history: !self.shallow, keep_git_dir: self.keep_git }
    }
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
