//! Download transport for remote templates.

pub mod git;
pub mod interface;
pub mod reference;

pub use git::GitDownloader;
pub use interface::{Downloader, FetchOptions};
pub use reference::{DownloadRef, HostKind};
