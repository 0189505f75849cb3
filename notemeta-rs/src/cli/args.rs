//! CLI argument definitions using clap.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notemeta")]
#[command(author, version, about = "Extract title, body and lead from Markdown notes", long_about = None)]
pub struct Cli {
    /// Path to a config file (overrides NOTEMETA_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format from the flags, or `fallback` (the configured format)
    /// when none is given.
    pub fn output_format(&self, fallback: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            fallback
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract title, body and lead from notes
    Parse(ParseArgs),

    /// Show the decoded frontmatter of a note
    Frontmatter(FrontmatterArgs),
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Note files to parse (reads stdin when no path or glob is given)
    pub paths: Vec<PathBuf>,

    /// Also parse files matching this glob pattern
    #[arg(long)]
    pub glob: Option<String>,

    /// Print only this field, as raw text
    #[arg(long, value_enum)]
    pub field: Option<Field>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Title,
    Body,
    Lead,
}

#[derive(Parser, Debug)]
pub struct FrontmatterArgs {
    /// Path to the note (reads stdin when omitted)
    pub path: Option<PathBuf>,
}
