//! Command-line interface for the blog API.
//!
//! - author: create, list, get, update and delete authors, or list their posts
//! - post: create, list, get, update and delete posts
//!
//! Configuration via environment:
//! - BLOG_URL: Base URL of the blog server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{authors::AuthorCommand, posts::PostCommand};

/// Blog API CLI
///
/// Prints JSON by default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "blog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Blog server URL
    #[arg(
        long,
        env = "BLOG_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage authors
    Author {
        #[command(subcommand)]
        command: AuthorCommand,
    },

    /// Manage posts
    Post {
        #[command(subcommand)]
        command: PostCommand,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let base_url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Author { command } => {
            commands::authors::execute(&client, base_url, cli.human, command).await
        }
        Commands::Post { command } => {
            commands::posts::execute(&client, base_url, cli.human, command).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
