use crate::{commands::Commands, error::CliError};
use catalog::{
    builtin,
    statement::{StatementKind, StatementSet},
};
use clap::Parser;
use pipeline::{etl, schema, vars};
use std::str::FromStr;
use tracing::{Level, info};
use warehouse::{config::WarehouseConfig, executor::PgClient};

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "starload", version = "0.1.0", about = "Star-schema warehouse loader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateTables { config } => {
            let (config, statements) = load_config_and_statements(&config)?;
            let client = PgClient::connect(&config.cluster.connection_string()).await?;
            schema::recreate_schema(&client, &statements).await?;
        }
        Commands::Etl { config, strict } => {
            let (config, statements) = load_config_and_statements(&config)?;
            let mode = if strict {
                etl::ValidationMode::Strict
            } else {
                etl::ValidationMode::Standard
            };

            let client = PgClient::connect(&config.cluster.connection_string()).await?;
            etl::run_etl(&client, &statements, mode).await?;
        }
        Commands::Ping { config } => {
            let config = WarehouseConfig::from_file(&config)?;
            info!("Pinging warehouse at '{}'", config.cluster.host);

            let client = PgClient::connect(&config.cluster.connection_string()).await?;
            client.ping().await?;
            info!("Warehouse ping succeeded");
        }
        Commands::Render {
            config,
            group,
            output,
        } => {
            let (_, statements) = load_config_and_statements(&config)?;

            let json = match group {
                Some(group) => {
                    let kind = StatementKind::from_str(&group)
                        .map_err(|_| CliError::InvalidStatementGroup(group))?;
                    serde_json::to_string_pretty(statements.group(kind))
                        .map_err(CliError::JsonSerialize)?
                }
                None => {
                    serde_json::to_string_pretty(&statements).map_err(CliError::JsonSerialize)?
                }
            };

            if let Some(output_file) = output {
                std::fs::write(output_file, json)?;
            } else {
                println!("{json}");
            }
        }
    }

    Ok(())
}

fn load_config_and_statements(path: &str) -> Result<(WarehouseConfig, StatementSet), CliError> {
    let config = WarehouseConfig::from_file(path)?;
    let statements = builtin::statement_set(&vars::render_vars(&config))?;
    Ok((config, statements))
}
