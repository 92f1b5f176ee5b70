use crate::{
    cli::{answers::read_prefilled, AnswerCollector, Args},
    constants::BANNER,
    error::Result,
    initializer::ProjectInitializer,
    loader::{Downloader, GitDownloader},
    prompt::{DialoguerPrompter, PromptProvider},
    registry,
};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

/// Main CLI runner that dispatches on the parsed flags
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Runs against the terminal, the process working directory and git.
    pub fn run(self) -> Result<()> {
        let cwd = std::env::current_dir()?;
        let mut stdout = std::io::stdout().lock();
        self.run_with(&mut stdout, &DialoguerPrompter::new(), GitDownloader::new(), cwd)
    }

    /// `--version` wins and stops; otherwise the banner prints, then the
    /// template list, then the init workflow, each when its flag is set.
    pub fn run_with<W, P, D>(
        self,
        out: &mut W,
        prompter: &P,
        downloader: D,
        cwd: PathBuf,
    ) -> Result<()>
    where
        W: Write,
        P: PromptProvider,
        D: Downloader,
    {
        if self.args.version {
            writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
            return Ok(());
        }

        writeln!(out, "{}", BANNER.join("\n").red())?;

        if self.args.list {
            write_template_list(out)?;
        }
        out.flush()?;

        if self.args.init {
            let prefilled = read_prefilled(self.args.answers.clone())?;
            let answers = AnswerCollector::new(prompter).collect(prefilled)?;
            log::debug!("Selected template '{}'", answers.template_key);

            ProjectInitializer::new(cwd, downloader)
                .with_fetch_options(self.args.fetch_options())
                .initialize(&answers, out)?;
        }
        Ok(())
    }
}

/// Prints one `"<key> : <description>"` line per registered template.
pub fn write_template_list<W: Write>(out: &mut W) -> Result<()> {
    for line in registry::list_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_list_has_one_line_per_template() {
        let mut out = Vec::new();
        write_template_list(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "webpack-plugins : 自定义webpack plugins");
        assert!(lines.iter().all(|line| line.contains(" : ")));
    }
}
