//! POST commands.

use std::io::Read;

use anyhow::{Context, Result};
use blog_core::{AuthorId, NewPost, Post, PostInput};
use clap::Subcommand;
use reqwest::Client;

use super::{Deleted, PageArgs, confirm, make_empty_request, make_request, output};

#[derive(Subcommand)]
pub enum PostCommand {
    /// Create a post for an existing author
    Create {
        #[arg(long)]
        title: String,
        /// Post body; "-" reads it from stdin
        #[arg(long)]
        content: String,
        #[arg(long)]
        author_id: i64,
    },

    /// List posts
    List {
        #[command(flatten)]
        page: PageArgs,
        /// Only list posts by this author
        #[arg(long)]
        author_id: Option<i64>,
    },

    /// Show one post with its author
    Get { id: i64 },

    /// Replace a post's title and content
    Update {
        id: i64,
        #[arg(long)]
        title: String,
        /// Post body; "-" reads it from stdin
        #[arg(long)]
        content: String,
    },

    /// Delete a post
    Delete {
        id: i64,
        /// Skip confirmation prompt (for non-interactive use)
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

fn read_content(arg: String) -> Result<String> {
    if arg != "-" {
        return Ok(arg);
    }
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read content from stdin")?;
    Ok(content)
}

/// Execute a post command.
pub async fn execute(
    client: &Client,
    base_url: &str,
    human: bool,
    command: PostCommand,
) -> Result<()> {
    match command {
        PostCommand::Create {
            title,
            content,
            author_id,
        } => {
            let body = NewPost::new(title, read_content(content)?, AuthorId(author_id));
            let post: Post =
                make_request(client.post(format!("{}/posts", base_url)).json(&body)).await?;
            output(&post, human)
        }
        PostCommand::List { page, author_id } => {
            let mut request = client
                .get(format!("{}/posts", base_url))
                .query(&page.query());
            if let Some(author_id) = author_id {
                request = request.query(&[("author_id", author_id)]);
            }
            let posts: Vec<Post> = make_request(request).await?;
            output(&posts, human)
        }
        PostCommand::Get { id } => {
            let post: Post = make_request(client.get(format!("{}/posts/{}", base_url, id))).await?;
            output(&post, human)
        }
        PostCommand::Update { id, title, content } => {
            let body = PostInput::new(title, read_content(content)?);
            let post: Post =
                make_request(client.put(format!("{}/posts/{}", base_url, id)).json(&body)).await?;
            output(&post, human)
        }
        PostCommand::Delete { id, yes } => {
            if human && !yes && !confirm(&format!("Delete post {}?", id))? {
                eprintln!("Aborted.");
                return Ok(());
            }
            make_empty_request(client.delete(format!("{}/posts/{}", base_url, id))).await?;
            output(&Deleted { kind: "Post", id }, human)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_content_passthrough() {
        assert_eq!(read_content("hello".to_string()).unwrap(), "hello");
    }
}
