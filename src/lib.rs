pub mod config;
pub mod html_export;
pub mod model;
pub mod report;
pub mod transcript;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use config::Config;
use model::types::RawMessage;
use transcript::Transcript;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "safehike",
    version,
    about = "Render Safehike assistant messages and hiking reports to HTML"
)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a transcript JSON file to a standalone HTML page
    Render {
        /// Transcript file (array of messages or {"title", "messages"})
        transcript: PathBuf,

        /// Write the page here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Show thinking bubbles expanded
        #[arg(long)]
        expand_thinking: bool,

        /// Override the page title
        #[arg(long)]
        title: Option<String>,
    },
    /// Route a single message JSON ("-" for stdin) and print its HTML fragment
    Message {
        input: PathBuf,

        /// Treat the message as still streaming
        #[arg(long)]
        generating: bool,

        /// Treat the chat as loading
        #[arg(long)]
        loading: bool,

        /// Show a thinking bubble expanded
        #[arg(long)]
        expand_thinking: bool,
    },
    /// Extract a hiking report from raw assistant text ("-" for stdin) and print it as JSON
    Extract { input: PathBuf },
    /// Generate shell completions to stdout
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate man page to stdout
    Man,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            transcript,
            output,
            expand_thinking,
            title,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            run_render(&config, &transcript, output.as_deref(), expand_thinking, title)
        }
        Commands::Message {
            input,
            generating,
            loading,
            expand_thinking,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let text = read_input(&input)?;
            let message: RawMessage =
                serde_json::from_str(&text).context("message is not valid JSON")?;
            let mut options = config.render_options();
            options.expand_thinking = expand_thinking;
            let html = html_export::render_message(&message, generating, loading, &options);
            write_stdout(&html)
        }
        Commands::Extract { input } => {
            let text = read_input(&input)?;
            match report::extract(&text) {
                Some(found) => write_stdout(&serde_json::to_string_pretty(&found)?),
                None => bail!("no hiking report found"),
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "safehike", &mut std::io::stdout());
            Ok(())
        }
        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut out = std::io::stdout();
            man.render(&mut out)?;
            Ok(())
        }
    }
}

fn run_render(
    config: &Config,
    transcript_path: &Path,
    output: Option<&Path>,
    expand_thinking: bool,
    title: Option<String>,
) -> Result<()> {
    let transcript = Transcript::load(transcript_path)?;

    let mut options = config.render_options();
    options.expand_thinking = expand_thinking;
    if let Some(chat_title) = transcript.title {
        options.chat_title = chat_title;
    }
    if let Some(page_title) = title {
        options.page_title = page_title;
    }

    let page = html_export::render_page(&transcript.messages, &options);

    match output {
        Some(path) => std::fs::write(path, page)
            .with_context(|| format!("failed to write {}", path.display())),
        None => write_stdout(&page),
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}
