//! quill - render and check quillmark blog posts from the terminal
//!
//! Usage:
//!   quill [OPTIONS] <COMMAND> [FILE]
//!
//! Commands:
//!   render    Render a post as preview HTML, article HTML or plain text
//!   check     Report lines that silently degraded
//!   stats     Show block and size statistics
//!
//! FILE defaults to stdin; `-` also reads stdin.

mod config;
mod json;
mod stats;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use quillmark_core::surface::{ArticleRenderer, PreviewRenderer, Renderer, TextRenderer};
use quillmark_core::Diagnostics;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, FenceSetting, DEFAULT_CONFIG_FILE};
use crate::stats::DocumentStats;

#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Render and check quillmark blog posts")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (defaults to ./quill.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Code fence handling
    #[arg(long, global = true, value_enum)]
    fence: Option<FenceSetting>,

    /// Escape HTML in authored text and URLs
    #[arg(long, global = true)]
    escape_html: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a post
    Render {
        #[arg(long, value_enum, default_value_t = Surface::Preview)]
        surface: Surface,

        /// Print the parsed document as JSON instead of rendering it
        #[arg(short, long)]
        json: bool,

        file: Option<PathBuf>,
    },
    /// Report lines that degraded to plain text or were renumbered
    Check {
        #[arg(short, long)]
        json: bool,

        file: Option<PathBuf>,
    },
    /// Show document statistics
    Stats { file: Option<PathBuf> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Surface {
    Preview,
    Article,
    Text,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?.with_overrides(cli.fence, cli.escape_html);
    debug!(?config, "effective configuration");

    match cli.command {
        Command::Render {
            surface,
            json,
            file,
        } => {
            let input = read_input(file.as_deref())?;
            cmd_render(&config, &input, surface, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { json, file } => {
            let input = read_input(file.as_deref())?;
            cmd_check(&config, &input, json)
        }
        Command::Stats { file } => {
            let input = read_input(file.as_deref())?;
            cmd_stats(&config, &input);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file '{}' does not exist", path.display())),
        None => Ok(Config::load_from_path(DEFAULT_CONFIG_FILE)?.unwrap_or_default()),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "reading post");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))
        }
        _ => {
            info!("reading post from stdin");
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(config: &Config, input: &str, surface: Surface, json: bool) -> Result<()> {
    let doc = config.parser().parse(input);

    if json {
        let out = serde_json::to_string_pretty(&crate::json::convert_document(&doc))
            .context("failed to serialize document")?;
        println!("{out}");
        return Ok(());
    }

    let output = match surface {
        Surface::Preview => PreviewRenderer::new(config.html_options()).render(&doc),
        Surface::Article => ArticleRenderer::new(config.html_options()).render(&doc),
        Surface::Text => TextRenderer.render(&doc),
    };
    print!("{output}");
    Ok(())
}

// =============================================================================
// Check Command
// =============================================================================

fn cmd_check(config: &Config, input: &str, json: bool) -> Result<ExitCode> {
    let diagnostics = config.parser().parse_with_diagnostics(input).diagnostics;

    if json {
        let out = serde_json::to_string_pretty(&crate::json::convert_diagnostics(&diagnostics))
            .context("failed to serialize diagnostics")?;
        println!("{out}");
    } else {
        print_diagnostics(&diagnostics);
    }

    Ok(if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_empty() {
        println!("Clean: no issues found");
        return;
    }

    println!("{} issue(s) found", diagnostics.len());
    for d in diagnostics.iter() {
        println!("  {}: [{}] {}", d.line, d.kind.code(), d.message);
    }
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(config: &Config, input: &str) {
    let doc = config.parser().parse(input);
    print!("{}", DocumentStats::from_document(&doc, input));
}
