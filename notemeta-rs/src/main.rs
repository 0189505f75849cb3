//! notemeta CLI entry point.

use clap::Parser;
use notemeta::cli::args::{Cli, Commands};
use notemeta::cli::output::Output;
use notemeta::cli::{frontmatter, parse};
use notemeta::config::Config;
use notemeta::error::NoteError;
use notemeta::parser::MarkdownParser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<i32, NoteError> {
    let config = Config::load(cli.config.as_deref())?;
    let parser = MarkdownParser::with_config(&config.markdown);
    let output = Output::new(cli.output_format(config.output.format), cli.quiet);

    match &cli.command {
        Commands::Parse(args) => parse::run(args, &parser, &output),
        Commands::Frontmatter(args) => frontmatter::run(args, &parser, &output),
    }
}
