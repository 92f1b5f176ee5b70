//! The project-initialization workflow.
//!
//! Steps run strictly in order and the first failure stops the pipeline:
//! name check, template download, manifest rewrite. Nothing is rolled back,
//! so a failed download or rewrite can leave a half-populated project
//! directory that the next run's name check will reject.

use crate::{
    error::{Error, Result},
    loader::{Downloader, FetchOptions},
    manifest::ManifestRewriter,
    registry::{self, TemplateDescriptor},
    types::ProjectAnswers,
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Creates projects inside a working directory.
pub struct ProjectInitializer<D: Downloader> {
    cwd: PathBuf,
    downloader: D,
    fetch_options: FetchOptions,
}

impl<D: Downloader> ProjectInitializer<D> {
    pub fn new<P: AsRef<Path>>(cwd: P, downloader: D) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            downloader,
            fetch_options: FetchOptions::default(),
        }
    }

    pub fn with_fetch_options(mut self, fetch_options: FetchOptions) -> Self {
        self.fetch_options = fetch_options;
        self
    }

    /// Runs the workflow and returns the new project directory.
    ///
    /// Progress and outcome lines go to `out`; the download spinner draws on
    /// stderr and hides itself when stderr is not a terminal.
    pub fn initialize<W: Write>(&self, answers: &ProjectAnswers, out: &mut W) -> Result<PathBuf> {
        writeln!(out, "{}", "Creating project".bold().cyan())?;

        self.check_name(&answers.project_name)?;

        let template = registry::resolve(&answers.template_key)?;
        let project_dir = self.cwd.join(&answers.project_name);
        self.download(template, &project_dir, out)?;

        ManifestRewriter::new(&project_dir).apply(&answers.manifest_fields())?;
        log::info!("Manifest updated for '{}'", answers.project_name);

        writeln!(out, "{}", "Template downloaded".green())?;
        writeln!(out, "{} Project created in {}", "h3c:".bold().cyan(), project_dir.display())?;
        Ok(project_dir)
    }

    /// Fails if an entry named `name` already exists in the working directory.
    fn check_name(&self, name: &str) -> Result<()> {
        let list_error = |source| Error::DirectoryListError {
            dir: self.cwd.display().to_string(),
            source,
        };

        for entry in fs::read_dir(&self.cwd).map_err(list_error)? {
            if entry.map_err(list_error)?.file_name() == name {
                return Err(Error::NameCollisionError { name: name.to_string() });
            }
        }
        Ok(())
    }

    fn download<W: Write>(
        &self,
        template: &TemplateDescriptor,
        project_dir: &Path,
        out: &mut W,
    ) -> Result<()> {
        log::debug!("Fetch options: {:?}", self.fetch_options);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Downloading template '{}'...", template.key));

        let fetched = self.downloader.fetch(template.download_ref, project_dir, &self.fetch_options);
        spinner.finish_and_clear();

        match fetched {
            Ok(()) => {
                writeln!(out, "{} Download complete: {}", "✔".green(), template.download_ref)?;
                Ok(())
            }
            Err(e) => {
                writeln!(out, "{} Download failed: {}", "✖".red(), template.download_ref)?;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Records fetches and writes a fixed manifest into the destination.
    struct FakeDownloader {
        manifest: Option<&'static str>,
        fail: bool,
        calls: RefCell<Vec<(String, PathBuf)>>,
    }

    impl FakeDownloader {
        fn writing(manifest: Option<&'static str>) -> Self {
            Self { manifest, fail: false, calls: RefCell::new(Vec::new()) }
        }

        fn failing() -> Self {
            Self { manifest: None, fail: true, calls: RefCell::new(Vec::new()) }
        }
    }

    impl Downloader for FakeDownloader {
        fn fetch(&self, reference: &str, destination: &Path, _: &FetchOptions) -> Result<()> {
            self.calls.borrow_mut().push((reference.to_string(), destination.to_path_buf()));
            if self.fail {
                return Err(Error::InvalidReferenceError { reference: reference.to_string() });
            }
            fs::create_dir_all(destination)?;
            if let Some(manifest) = self.manifest {
                fs::write(destination.join("package.json"), manifest)?;
            }
            Ok(())
        }
    }

    fn answers(name: &str) -> ProjectAnswers {
        ProjectAnswers {
            project_name: name.to_string(),
            author: "Jane".to_string(),
            description: "test app".to_string(),
            template_key: "webpack-loader".to_string(),
        }
    }

    #[test]
    fn existing_entry_blocks_download() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("foo")).unwrap();
        let initializer =
            ProjectInitializer::new(temp.path(), FakeDownloader::writing(Some("{}")));

        let result = initializer.initialize(&answers("foo"), &mut Vec::new());

        assert!(matches!(result, Err(Error::NameCollisionError { ref name }) if name == "foo"));
        assert!(initializer.downloader.calls.borrow().is_empty());
    }

    #[test]
    fn existing_file_also_collides() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("foo"), "").unwrap();
        let initializer = ProjectInitializer::new(temp.path(), FakeDownloader::writing(None));

        assert!(matches!(
            initializer.initialize(&answers("foo"), &mut Vec::new()),
            Err(Error::NameCollisionError { .. })
        ));
    }

    #[test]
    fn downloads_registry_reference_into_project_dir() {
        let temp = TempDir::new().unwrap();
        let initializer = ProjectInitializer::new(
            temp.path(),
            FakeDownloader::writing(Some(r#"{"name":"old","version":"1.0.0"}"#)),
        );

        let mut out = Vec::new();
        let project_dir = initializer.initialize(&answers("demo"), &mut out).unwrap();

        assert_eq!(project_dir, temp.path().join("demo"));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Download complete"));
        assert!(printed.contains("Template downloaded"));
        assert!(printed.contains("Project created in"));
        let calls = initializer.downloader.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "https://gitee.com:sohucw/webpack-loader#master");
        assert_eq!(calls[0].1, temp.path().join("demo"));
    }

    #[test]
    fn missing_manifest_after_download_fails_without_cleanup() {
        let temp = TempDir::new().unwrap();
        let initializer = ProjectInitializer::new(temp.path(), FakeDownloader::writing(None));

        let result = initializer.initialize(&answers("demo"), &mut Vec::new());

        assert!(matches!(result, Err(Error::ManifestNotFoundError { .. })));
        assert!(temp.path().join("demo").is_dir());
    }

    #[test]
    fn missing_working_directory_is_a_list_error() {
        let temp = TempDir::new().unwrap();
        let initializer =
            ProjectInitializer::new(temp.path().join("gone"), FakeDownloader::writing(None));

        assert!(matches!(
            initializer.initialize(&answers("demo"), &mut Vec::new()),
            Err(Error::DirectoryListError { .. })
        ));
    }

    #[test]
    fn failed_download_reports_failure_and_stops() {
        let temp = TempDir::new().unwrap();
        let initializer = ProjectInitializer::new(temp.path(), FakeDownloader::failing());

        let mut out = Vec::new();
        let result = initializer.initialize(&answers("demo"), &mut out);

        assert!(matches!(result, Err(Error::InvalidReferenceError { .. })));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Download failed"));
        assert!(!printed.contains("Download complete"));
        assert!(!printed.contains("Template downloaded"));
        assert!(!temp.path().join("demo").exists());
    }
}
