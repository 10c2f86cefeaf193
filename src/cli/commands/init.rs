use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::database::manager::DatabaseManager;

#[derive(Subcommand)]
pub enum InitCommands {
    #[command(about = "Apply pending database migrations")]
    Migrate,
}

pub async fn handle(cmd: InitCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        InitCommands::Migrate => {
            DatabaseManager::migrate().await?;

            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "success": true,
                            "message": "Migrations applied"
                        }))?
                    );
                }
                OutputFormat::Text => {
                    println!("✓ Migrations applied");
                }
            }
            Ok(())
        }
    }
}
