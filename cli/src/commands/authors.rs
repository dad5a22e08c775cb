//! AUTHOR commands.

use anyhow::Result;
use blog_core::{Author, AuthorInput, Post};
use clap::Subcommand;
use reqwest::Client;

use super::{Deleted, PageArgs, confirm, make_empty_request, make_request, output};

#[derive(Subcommand)]
pub enum AuthorCommand {
    /// Register a new author
    Create {
        #[arg(long)]
        name: String,
        /// Must not already be registered
        #[arg(long)]
        email: String,
    },

    /// List authors
    List {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one author
    Get { id: i64 },

    /// Replace an author's name and email
    Update {
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },

    /// Delete an author and all of their posts
    Delete {
        id: i64,
        /// Skip confirmation prompt (for non-interactive use)
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List one author's posts
    Posts {
        id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
}

/// Execute an author command.
pub async fn execute(
    client: &Client,
    base_url: &str,
    human: bool,
    command: AuthorCommand,
) -> Result<()> {
    match command {
        AuthorCommand::Create { name, email } => {
            let body = AuthorInput::new(name, email);
            let author: Author =
                make_request(client.post(format!("{}/authors", base_url)).json(&body)).await?;
            output(&author, human)
        }
        AuthorCommand::List { page } => {
            let authors: Vec<Author> = make_request(
                client
                    .get(format!("{}/authors", base_url))
                    .query(&page.query()),
            )
            .await?;
            output(&authors, human)
        }
        AuthorCommand::Get { id } => {
            let author: Author =
                make_request(client.get(format!("{}/authors/{}", base_url, id))).await?;
            output(&author, human)
        }
        AuthorCommand::Update { id, name, email } => {
            let body = AuthorInput::new(name, email);
            let author: Author = make_request(
                client
                    .put(format!("{}/authors/{}", base_url, id))
                    .json(&body),
            )
            .await?;
            output(&author, human)
        }
        AuthorCommand::Delete { id, yes } => {
            if human
                && !yes
                && !confirm(&format!("Delete author {} and all of their posts?", id))?
            {
                eprintln!("Aborted.");
                return Ok(());
            }
            make_empty_request(client.delete(format!("{}/authors/{}", base_url, id))).await?;
            output(&Deleted { kind: "Author", id }, human)
        }
        AuthorCommand::Posts { id, page } => {
            let posts: Vec<Post> = make_request(
                client
                    .get(format!("{}/authors/{}/posts", base_url, id))
                    .query(&page.query()),
            )
            .await?;
            output(&posts, human)
        }
    }
}
