//! Generate command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use chronicle_changelog::builder::build_changelog;
use chronicle_changelog::{traverse, ChangelogFormatter, MarkdownFormatter, TraverseOptions};
use chronicle_core::config::{load_config_or_default, Config};
use chronicle_git::GitRepo;

use crate::cli::{Cli, OutputFormat};

/// Generate the changelog
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Changelog title (defaults to the configured title)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Project description rendered under the title
    #[arg(short, long)]
    pub description: Option<String>,

    /// Revision to start the commit walk from (see git rev-parse)
    #[arg(short, long)]
    pub rev: Option<String>,

    /// Glob pattern selecting release tags
    #[arg(short = 'T', long = "tag-filter", value_name = "PATTERN")]
    pub tag_filter: Option<String>,

    /// Comma separated globs for branches to include
    #[arg(long, value_name = "PATTERNS", value_delimiter = ',')]
    pub include_branches: Option<Vec<String>>,

    /// Comma separated globs for branches to exclude
    #[arg(long, value_name = "PATTERNS", value_delimiter = ',')]
    pub exclude_branches: Option<Vec<String>>,

    /// Don't keep commits newer than the latest release
    #[arg(long)]
    pub no_unreleased: bool,

    /// Where to save the generated changelog (defaults to the configured file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Repository URL used for commit links
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,
}

impl GenerateCommand {
    /// Execute the generate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(rev = ?self.rev, tag_filter = ?self.tag_filter, "executing generate command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let options = self.traverse_options(&config);

        let repo = GitRepo::discover(&cwd)?;
        let (releases, unreleased) = traverse(&repo, &options)?;

        let title = self
            .title
            .clone()
            .unwrap_or_else(|| config.project.title.clone());
        let description = self
            .description
            .clone()
            .or_else(|| config.project.description.clone());

        let changelog = build_changelog(title, description, releases, unreleased);

        if cli.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&changelog)?);
            return Ok(());
        }

        let mut formatter = MarkdownFormatter::new();
        if let Some(url) = &self.repo_url {
            formatter = formatter.with_repo_url(url);
        }
        let rendered = formatter.format(&changelog, &config.changelog);

        if self.stdout {
            println!("{rendered}");
            return Ok(());
        }

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(&config.changelog.file));
        std::fs::write(&output_path, &rendered)?;

        if !cli.quiet {
            println!(
                "{} Changelog written to {}",
                style("✓").green().bold(),
                style(output_path.display()).cyan()
            );
        }

        Ok(())
    }

    /// Merge CLI flags over the configured traversal settings (flags win)
    fn traverse_options(&self, config: &Config) -> TraverseOptions {
        let traversal = &config.traversal;

        TraverseOptions {
            rev: self.rev.clone().unwrap_or_else(|| traversal.rev.clone()),
            tag_pattern: self
                .tag_filter
                .clone()
                .unwrap_or_else(|| traversal.tag_pattern.clone()),
            include_branches: self
                .include_branches
                .clone()
                .unwrap_or_else(|| traversal.include_branches.clone()),
            exclude_branches: self
                .exclude_branches
                .clone()
                .unwrap_or_else(|| traversal.exclude_branches.clone()),
            keep_unreleased: if self.no_unreleased {
                false
            } else {
                traversal.keep_unreleased
            },
        }
    }
}
