//! Command implementations and shared HTTP/output helpers.

pub mod authors;
pub mod posts;

use std::io::Write;

use anyhow::Result;
use blog_core::{Author, Post};
use clap::Args;
use colored::Colorize;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Errors from talking to the blog server.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Server { status: StatusCode, message: String },

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Build the HTTP client shared by all commands.
pub fn build_client() -> Result<Client, CliError> {
    Ok(Client::builder()
        .user_agent(concat!("blog-cli/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// `skip` / `limit` options shared by list commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Number of records to skip
    #[arg(long, default_value_t = 0)]
    pub skip: i64,

    /// Maximum number of records to return
    #[arg(long, default_value_t = blog_core::DEFAULT_LIMIT)]
    pub limit: i64,
}

impl PageArgs {
    pub fn query(&self) -> [(&'static str, i64); 2] {
        [("skip", self.skip), ("limit", self.limit)]
    }
}

/// Send a request and decode the JSON response body.
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CliError> {
    let body = send(request).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Send a request that answers with no body (204).
pub async fn make_empty_request(request: RequestBuilder) -> Result<(), CliError> {
    send(request).await.map(|_| ())
}

async fn send(request: RequestBuilder) -> Result<String, CliError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(CliError::Server {
            status,
            message: error_message(status, &body),
        });
    }

    Ok(body)
}

/// Error body returned by the server.
#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetails,
}

#[derive(Deserialize)]
struct ErrorDetails {
    message: String,
}

/// Pull the message out of an error body, falling back to the raw text.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error.message;
    }
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    body.trim().to_string()
}

/// Types that have a formatted terminal rendering.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Print a value as pretty JSON, or formatted when `human` is set.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Ask for confirmation on stderr. Returns true when the user typed "y".
pub fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{} {} [y/N] ", "Warning:".yellow().bold(), prompt);
    std::io::stderr().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Truncate to at most `max` characters, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Result of a delete, printed in place of the empty 204 body.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub kind: &'static str,
    pub id: i64,
}

impl HumanReadable for Deleted {
    fn print_human(&self) {
        println!("{}", format!("{} deleted.", self.kind).green().bold());
        println!("  {} {}", "ID:".cyan(), self.id);
    }
}

impl HumanReadable for Author {
    fn print_human(&self) {
        println!("{}", self.name.bold());
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Email:".cyan(), self.email);
    }
}

impl HumanReadable for Vec<Author> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("  {}", "(No authors)".dimmed());
            return;
        }
        for author in self {
            println!(
                "  {:>6}  {}  {}",
                author.id.get(),
                author.name.bold(),
                author.email.dimmed()
            );
        }
        println!();
        println!("  {} {}", "Total:".cyan(), self.len());
    }
}

impl HumanReadable for Post {
    fn print_human(&self) {
        println!("{}", self.title.bold());
        println!("  {} {}", "ID:".cyan(), self.id);
        println!(
            "  {} {} <{}> (id {})",
            "Author:".cyan(),
            self.author.name,
            self.author.email,
            self.author.id
        );
        println!();
        println!("{}", self.content);
    }
}

impl HumanReadable for Vec<Post> {
    fn print_human(&self) {
        if self.is_empty() {
            println!("  {}", "(No posts)".dimmed());
            return;
        }
        for post in self {
            println!(
                "  {:>6}  {}  {}",
                post.id.get(),
                truncate(&post.title, 50).bold(),
                format!("by {}", post.author.name).dimmed()
            );
        }
        println!();
        println!("  {} {}", "Total:".cyan(), self.len());
    }
}
