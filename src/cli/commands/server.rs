use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::config;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health status from the /health endpoint")]
    Health {
        #[arg(long, help = "Server base URL (defaults to the configured local port)")]
        url: Option<String>,
    },

    #[command(about = "Show server information from the root endpoint")]
    Info {
        #[arg(long, help = "Server base URL (defaults to the configured local port)")]
        url: Option<String>,
    },
}

pub async fn handle(cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health { url } => probe(url, "/health", output_format).await,
        ServerCommands::Info { url } => probe(url, "/", output_format).await,
    }
}

fn base_url(url: Option<String>) -> String {
    url.unwrap_or_else(|| format!("http://localhost:{}", config::config().server.port))
        .trim_end_matches('/')
        .to_string()
}

async fn probe(url: Option<String>, path: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let target = format!("{}{}", base_url(url), path);
    let response = reqwest::get(&target).await?;
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "url": target,
                    "status": status.as_u16(),
                    "body": body
                }))?
            );
        }
        OutputFormat::Text => {
            if status.is_success() {
                println!("✓ {} responded {}", target, status);
            } else {
                println!("✗ {} responded {}", target, status);
            }
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
