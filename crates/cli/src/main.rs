//! DSA Mentor CLI: the main entry point.
//!
//! Commands:
//! - `serve`    Start the HTTP API and web UI
//! - `ask`      Ask one question and print the formatted reply
//! - `chat`     Interactive tutoring session in the terminal
//! - `format`   Run the content formatter over a file or stdin
//! - `topics`   List topics, levels, and prepared explanations
//! - `onboard`  Write a default config file
//! - `doctor`   Diagnose configuration and provider health

use clap::{Parser, Subcommand};
use dsamentor_core::Level;
use std::path::PathBuf;

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "dsamentor",
    about = "DSA Mentor: your data structures & algorithms tutor",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API and web UI
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Ask a single question
    Ask {
        /// The question
        message: String,

        /// Topic to focus on (e.g. "Stack", "binary search")
        #[arg(short, long)]
        topic: Option<String>,

        /// Explanation level: beginner, intermediate, advanced
        #[arg(short, long)]
        level: Option<Level>,

        /// Print the reply as JSON segments
        #[arg(long)]
        json: bool,
    },

    /// Interactive tutoring session
    Chat {
        /// Starting topic
        #[arg(short, long)]
        topic: Option<String>,

        /// Starting level
        #[arg(short, long)]
        level: Option<Level>,
    },

    /// Format text (from a file, or stdin when omitted)
    Format {
        file: Option<PathBuf>,

        /// Print segments as JSON
        #[arg(long)]
        json: bool,
    },

    /// List topics and levels
    Topics,

    /// Write a default configuration file
    Onboard,

    /// Diagnose configuration and provider health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Ask {
            message,
            topic,
            level,
            json,
        } => commands::ask::run(message, topic, level, json).await?,
        Commands::Chat { topic, level } => commands::chat::run(topic, level).await?,
        Commands::Format { file, json } => commands::format::run(file, json)?,
        Commands::Topics => commands::topics::run()?,
        Commands::Onboard => commands::onboard::run()?,
        Commands::Doctor => commands::doctor::run().await?,
    }

    Ok(())
}
