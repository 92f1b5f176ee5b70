//! Constants used throughout h3c

/// Manifest file rewritten after a template is downloaded
pub const MANIFEST_FILENAME: &str = "package.json";

/// Directory dropped from a fresh clone unless `--keep-git` is given
pub const GIT_DIR: &str = ".git";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Checkout used when a download reference names no branch
pub const DEFAULT_CHECKOUT: &str = "master";

pub const BANNER: &[&str] = &[
    "_    _   ____     _____ ",
    "| |  | | |___    / ____|",
    "| |__| |   __) | | |     ",
    "|  __  |  |__ <  | |     ",
    "| |  | |  ___) | | |____ ",
    "|_|  |_| |____/   _____|",
    "               ",
];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
