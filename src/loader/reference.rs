use crate::{
    constants::DEFAULT_CHECKOUT,
    error::{Error, Result},
};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

const DIRECT_PREFIX: &str = "direct:";

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(github|gitlab|bitbucket):)?(?:(.+):)?([^/]+)/([^#]+)(?:#(.+))?$")
        .expect("reference pattern is valid")
});

/// Hosting service a shorthand reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    GitHub,
    GitLab,
    Bitbucket,
}

impl HostKind {
    fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "gitlab" => HostKind::GitLab,
            "bitbucket" => HostKind::Bitbucket,
            _ => HostKind::GitHub,
        }
    }

    pub fn default_origin(self) -> &'static str {
        match self {
            HostKind::GitHub => "github.com",
            HostKind::GitLab => "gitlab.com",
            HostKind::Bitbucket => "bitbucket.org",
        }
    }
}

/// A parsed download reference.
///
/// Accepted forms:
/// - `direct:<url>[#<checkout>]`
/// - `[github|gitlab|bitbucket:][<origin>:]<owner>/<name>[#<checkout>]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadRef {
    Direct { url: String, checkout: String },
    Repository {
        host: HostKind,
        origin: Option<String>,
        owner: String,
        name: String,
        checkout: String,
    },
}

impl DownloadRef {
    pub fn parse(reference: &str) -> Result<Self> {
        let invalid = || Error::InvalidReferenceError { reference: reference.to_string() };

        if let Some(rest) = reference.strip_prefix(DIRECT_PREFIX) {
            let (url, checkout) = match rest.split_once('#') {
                Some((url, checkout)) => (url, checkout),
                None => (rest, DEFAULT_CHECKOUT),
            };
            if url.is_empty() || checkout.is_empty() {
                return Err(invalid());
            }
            return Ok(DownloadRef::Direct {
                url: url.to_string(),
                checkout: checkout.to_string(),
            });
        }

        let captures = REFERENCE_RE.captures(reference).ok_or_else(invalid)?;
        let host = captures
            .get(1)
            .map_or(HostKind::GitHub, |m| HostKind::from_prefix(m.as_str()));

        Ok(DownloadRef::Repository {
            host,
            origin: captures.get(2).map(|m| m.as_str().to_string()),
            owner: captures[3].to_string(),
            name: captures[4].to_string(),
            checkout: captures
                .get(5)
                .map_or(DEFAULT_CHECKOUT, |m| m.as_str())
                .to_string(),
        })
    }

    /// Branch or tag checked out after cloning.
    pub fn checkout(&self) -> &str {
        match self {
            DownloadRef::Direct { checkout, .. } | DownloadRef::Repository { checkout, .. } => {
                checkout
            }
        }
    }

    /// URL handed to git.
    ///
    /// Origins that carry their own scheme are used over that scheme; bare
    /// hosts are reached over ssh.
    pub fn clone_url(&self) -> String {
        match self {
            DownloadRef::Direct { url, .. } => url.clone(),
            DownloadRef::Repository { host, origin, owner, name, .. } => {
                let origin = origin.as_deref().unwrap_or(host.default_origin());
                if has_scheme(origin) {
                    format!("{}/{owner}/{name}.git", origin.trim_end_matches('/'))
                } else if origin.starts_with("git@") {
                    format!("{origin}:{owner}/{name}.git")
                } else {
                    format!("git@{origin}:{owner}/{name}.git")
                }
            }
        }
    }
}

fn has_scheme(origin: &str) -> bool {
    Url::parse(origin)
        .map(|url| matches!(url.scheme(), "http" | "https" | "git" | "ssh" | "file"))
        .unwrap_or(false)
}
