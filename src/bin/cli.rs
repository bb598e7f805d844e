//! Anime Catalog CLI Client
//!
//! Command-line interface for the catalog HTTP API.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use reqwest::{Client, Method};
use serde_json::Value;

/// Anime Catalog CLI
#[derive(Parser, Debug)]
#[command(name = "anime-catalog-cli")]
#[command(about = "CLI for the anime catalog HTTP API")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the whole collection
    List,

    /// Get an entry by id
    Get {
        /// The entry id
        id: String,
    },

    /// Find an entry by name (case-insensitive)
    Find {
        /// The name to look for
        name: String,
    },

    /// Add one entry (JSON object) or several (JSON array)
    Add {
        /// Entry JSON, e.g. '{"nombre":"..","genero":"..","año":"..","autor":".."}'
        json: String,
    },

    /// Overwrite fields of an entry
    Update {
        /// The entry id
        id: String,

        /// Fields to overwrite as a JSON object
        json: String,
    },

    /// Delete an entry (remaining ids are renumbered)
    Del {
        /// The entry id
        id: String,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let base = format!("{}/api/animes", args.server.trim_end_matches('/'));

    let (method, url, body) = match args.command {
        Commands::List => (Method::GET, base, None),
        Commands::Get { id } => (Method::GET, format!("{}/{}", base, id), None),
        Commands::Find { name } => (Method::GET, format!("{}/nombre/{}", base, name), None),
        Commands::Add { json } => (Method::POST, base, Some(parse_json(&json)?)),
        Commands::Update { id, json } => {
            (Method::PUT, format!("{}/{}", base, id), Some(parse_json(&json)?))
        }
        Commands::Del { id } => (Method::DELETE, format!("{}/{}", base, id), None),
    };

    let mut request = Client::new().request(method, &url);
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .context("server returned a non-JSON body")?;

    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        bail!("server responded with {}", status);
    }
    Ok(())
}

fn parse_json(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).context("argument is not valid JSON")
}
