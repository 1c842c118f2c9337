use crate::config::{ConfigError, ParserStrategy};
use crate::settings::Settings;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by both tools
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Start the environment file search in this directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Name of the environment file to look for
    #[arg(long, value_name = "NAME")]
    pub env_file: Option<String>,
    /// Parser used to load the environment file
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub parser: Option<ParserStrategy>,
    /// Read tool settings from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    /// Build settings: command line over settings file over defaults
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if let Some(root) = &self.root {
            settings.root = Some(root.clone());
        }
        if let Some(env_file) = &self.env_file {
            settings.env_file.clone_from(env_file);
        }
        if let Some(parser) = self.parser {
            settings.parser = parser;
        }
        Ok(settings)
    }
}

/// Compare `.env` declarations with the process environment
#[derive(Parser, Debug)]
#[command(name = "check-env")]
#[command(version = crate::VERSION)]
#[command(about = "Show .env keys whose values differ from the process environment")]
pub struct CheckEnvCli {
    /// Shared options
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckEnvCli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Print tables, row counts and sample rows of the configured database
#[derive(Parser, Debug)]
#[command(name = "db-inspect")]
#[command(version = crate::VERSION)]
#[command(about = "List database tables with row counts and sample rows")]
pub struct DbInspectCli {
    /// Sample rows per table
    #[arg(short = 'n', long, value_name = "N")]
    pub sample: Option<u32>,
    /// Let .env values replace variables already set in the environment
    #[arg(long = "override")]
    pub override_existing: bool,
    /// Shared options
    #[command(flatten)]
    pub common: CommonArgs,
}

impl DbInspectCli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Settings with the `--sample` and `--override` flags applied
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = self.common.settings()?;
        if let Some(sample) = self.sample {
            settings.sample = sample;
        }
        settings.override_existing |= self.override_existing;
        Ok(settings)
    }
}
