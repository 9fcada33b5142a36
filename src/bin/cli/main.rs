mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wiki2anki", about = "Build Anki vocabulary decks from web articles", version)]
struct Cli {
    /// Config file (default: ./wiki2anki.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Per-run overrides for values from the config file
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Dictionary language
    #[arg(long)]
    language: Option<String>,
    /// Treat this many top-ranked words as common
    #[arg(long)]
    top: Option<usize>,
    /// Consider at most this many distinct words
    #[arg(long)]
    max_words: Option<usize>,
    /// Frequency list CSV
    #[arg(long)]
    frequency_list: Option<PathBuf>,
    /// Dictionary lookups in flight at once
    #[arg(long)]
    concurrency: Option<usize>,
    /// Stop looking words up after this many seconds
    #[arg(long)]
    timeout: Option<u64>,
    /// Id of the page element holding the article text
    #[arg(long)]
    region: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Build a deck from the article at URL
    Build {
        url: String,
        /// Write the deck here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// List the words that would be looked up for the article at URL
    Words {
        url: String,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Look up a single word
    Define {
        word: String,
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Download the frequency list and save it as CSV
    Frequency {
        /// Frequency-list page (default: from config)
        #[arg(long)]
        url: Option<String>,
        /// Destination CSV (default: from config)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Build { url, output, overrides } => {
            let app = app::App::new(config_path, &overrides)?;
            commands::build::run(&app, &url, output.as_deref(), &cli.format, use_color).await?;
        }
        Command::Words { url, overrides } => {
            let app = app::App::new(config_path, &overrides)?;
            commands::words::run(&app, &url, &cli.format).await?;
        }
        Command::Define { word, overrides } => {
            let app = app::App::new(config_path, &overrides)?;
            commands::define::run(&app, &word, &cli.format, use_color).await?;
        }
        Command::Frequency { url, out } => {
            let app = app::App::new(config_path, &Overrides::default())?;
            commands::frequency::run(&app, url.as_deref(), out.as_deref(), &cli.format).await?;
        }
    }

    Ok(())
}
