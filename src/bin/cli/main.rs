use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reqwest::{Client, Response};
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(name = "family-api-cli")]
#[command(about = "CLI for interacting with the family API server", long_about = None)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "FAMILY_API_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all members
    List,

    /// Show one member
    Get {
        /// Member id
        id: u64,
    },

    /// Add a member
    Add {
        /// First name
        #[arg(long)]
        first_name: String,
        /// Age in years
        #[arg(long)]
        age: u32,
        /// Comma separated lucky numbers
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        lucky_numbers: Vec<i64>,
    },

    /// Delete a member
    Delete {
        /// Member id
        id: u64,
    },

    /// Show the family name with its members
    Family,
}

impl Cli {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

async fn print_response(response: Response) -> Result<()> {
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .context("Server returned a non-JSON body")?;

    if !status.is_success() {
        let message = body["error"].as_str().unwrap_or("request failed");
        bail!("{} ({})", message, status);
    }

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let client = Client::new();

    let request = match &cli.command {
        Commands::List => client.get(cli.endpoint("/members")),
        Commands::Get { id } => client.get(cli.endpoint(&format!("/member/{}", id))),
        Commands::Add {
            first_name,
            age,
            lucky_numbers,
        } => client.post(cli.endpoint("/member")).json(&json!({
            "first_name": first_name,
            "age": age,
            "lucky_numbers": lucky_numbers,
        })),
        Commands::Delete { id } => client.delete(cli.endpoint(&format!("/member/{}", id))),
        Commands::Family => client.get(cli.endpoint("/family")),
    };

    let response = request
        .send()
        .await
        .with_context(|| format!("Could not reach {}", cli.url))?;

    print_response(response).await
}
