//! CLI Adapter.

mod play;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api::{self, ServeOptions, StoryOptions};
use crate::domain::{AppError, StorySegment};

#[derive(Parser)]
#[command(name = "chuzapath")]
#[command(version)]
#[command(about = "Branching interactive fiction written by a language model", long_about = None)]
struct Cli {
    /// Config file (defaults to ./chuzapath.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Serve canned demo content instead of calling the API
    #[arg(long, global = true)]
    demo: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the opening segment as JSON
    #[clap(visible_alias = "s")]
    Start {
        /// Theme for the story
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Print the segment that follows a choice as JSON
    #[clap(visible_alias = "c")]
    Continue {
        /// JSON file holding the current segment
        #[arg(short, long)]
        story: PathBuf,
        /// The option the player picked
        #[arg(long)]
        choice: String,
    },
    /// Play interactively in the terminal
    #[clap(visible_alias = "p")]
    Play {
        /// Theme for the story
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Run the key-injecting proxy server
    Serve {
        /// Listen address (overrides [proxy] bind)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let options = StoryOptions { config_path: cli.config.clone(), force_demo: cli.demo };

    let result: Result<(), AppError> = match cli.command {
        Commands::Start { theme } => run_start(&options, theme.as_deref()),
        Commands::Continue { story, choice } => run_continue(&options, &story, &choice),
        Commands::Play { theme } => play::run_play(&options, theme.as_deref()),
        Commands::Serve { bind } => {
            api::serve_proxy(&ServeOptions { config_path: cli.config, bind })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_start(options: &StoryOptions, theme: Option<&str>) -> Result<(), AppError> {
    print_segment(&api::start_story(options, theme)?)
}

fn run_continue(
    options: &StoryOptions,
    story: &std::path::Path,
    choice: &str,
) -> Result<(), AppError> {
    let segment = api::read_story(story)?;
    print_segment(&api::continue_story(options, &segment, choice)?)
}

fn print_segment(segment: &StorySegment) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(segment)?);
    Ok(())
}
