use crate::{
    constants::GIT_DIR,
    error::{Error, Result},
    loader::{interface::Downloader, reference::DownloadRef, FetchOptions},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Downloads templates by cloning git repositories.
#[derive(Debug, Default)]
pub struct GitDownloader;

impl GitDownloader {
    pub fn new() -> Self {
        Self
    }

    fn remote_callbacks<'a>() -> git2::RemoteCallbacks<'a> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let key = std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_default()
                    .join(".ssh")
                    .join("id_rsa");
                git2::Cred::ssh_key(username_from_url.unwrap_or("git"), None, &key, None)
            } else {
                git2::Cred::default()
            }
        });
        callbacks
    }

    /// Checks out `name` as a remote branch, or as a tag or commit when no
    /// such branch exists.
    fn checkout(repo: &git2::Repository, name: &str) -> std::result::Result<(), git2::Error> {
        let (object, is_branch) = match repo.revparse_single(&format!("origin/{name}")) {
            Ok(object) => (object, true),
            Err(_) => (repo.revparse_single(name)?, false),
        };
        let commit = object.peel_to_commit()?;
        repo.checkout_tree(
            commit.as_object(),
            Some(git2::build::CheckoutBuilder::new().force()),
        )?;

        if !is_branch {
            log::debug!("Detaching HEAD at '{name}' ({})", commit.id());
            return repo.set_head_detached(commit.id());
        }
        if repo.find_branch(name, git2::BranchType::Local).is_err() {
            repo.branch(name, &commit, false)?;
        }
        repo.set_head(&format!("refs/heads/{name}"))
    }

    /// Removes the clone's `.git` directory so the project starts without the
    /// template's history.
    fn strip_git_dir(reference: &str, destination: &Path) -> Result<()> {
        let git_dir = destination.join(GIT_DIR);
        log::debug!("Removing '{}'", git_dir.display());
        fs::remove_dir_all(&git_dir).map_err(|source| Error::DownloadCleanupError {
            reference: reference.to_string(),
            path: git_dir.display().to_string(),
            source,
        })
    }
}

impl Downloader for GitDownloader {
    fn fetch(&self, reference: &str, destination: &Path, options: &FetchOptions) -> Result<()> {
        let parsed = DownloadRef::parse(reference)?;
        let url = parsed.clone_url();

        log::debug!(
            "Cloning '{url}' at '{}' into '{}'",
            parsed.checkout(),
            destination.display()
        );

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(Self::remote_callbacks());
        if !options.full_history {
            fetch_opts.depth(1);
        }

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);

        builder
            .clone(&url, destination)
            .and_then(|repo| Self::checkout(&repo, parsed.checkout()))
            .map_err(|source| Error::DownloadError {
                reference: reference.to_string(),
                source,
            })?;

        if !options.keep_git_dir {
            Self::strip_git_dir(reference, destination)?;
        }

        Ok(())
    }
}
