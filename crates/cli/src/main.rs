mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use datacheck_core::{config, Config, RuntimeContext, StaticConfigProvider};
use datacheck_snowflake::SnowflakeDatasource;
use datacheck_store::{FileStore, ValidationConfig, ValidationFactory};
use datacheck_telemetry::TracingEventSink;

use crate::cli::{Cli, Command, DatasourceCommand, ValidationCommand};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    config::load_dotenv();
    let config = Config::from_env();
    let args = Cli::parse();

    match args.command {
        Command::Datasource(DatasourceCommand::Check {
            file,
            name,
            secrets,
        }) => check_datasource(&config, &file, name, &secrets),
        Command::Validation(command) => run_validation(&config, command),
    }
}

// ── datasource check ─────────────────────────────────────────────

fn check_datasource(
    config: &Config,
    file: &Path,
    name: Option<String>,
    secrets: &[String],
) -> Result<()> {
    let name = name.unwrap_or_else(|| {
        file.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "datasource".to_string())
    });

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let mut datasource = match SnowflakeDatasource::from_config(name.as_str(), value) {
        Ok(datasource) => datasource,
        Err(errors) => {
            eprintln!("datasource '{name}' is invalid:");
            for issue in errors.issues() {
                eprintln!("  - {issue}");
            }
            bail!("{} validation issue(s) found", errors.len());
        }
    };

    let provider = parse_secrets(secrets)?;
    datasource
        .attach_context(RuntimeContext::new(config.edition).with_secrets(Arc::new(provider)));

    println!("datasource '{name}' is valid");
    if let Some(database) = datasource.database() {
        println!("  database: {database}");
    }
    if let Some(schema) = datasource.schema_name() {
        println!("  schema:   {schema}");
    }
    Ok(())
}

fn parse_secrets(secrets: &[String]) -> Result<StaticConfigProvider> {
    let mut provider = StaticConfigProvider::new();
    for pair in secrets {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid --secret '{pair}', expected KEY=VALUE");
        };
        provider.set(key, value);
    }
    Ok(provider)
}

// ── validation configs ───────────────────────────────────────────

fn run_validation(config: &Config, command: ValidationCommand) -> Result<()> {
    let store: FileStore<ValidationConfig> =
        FileStore::new(config.data_dir.join("validation_configs"))
            .context("failed to open validation config store")?;
    let factory = ValidationFactory::new(store, Arc::new(TracingEventSink));

    match command {
        ValidationCommand::Add {
            name,
            suite_id,
            batch_id,
            id,
        } => {
            let mut record = ValidationConfig::new(name, suite_id, batch_id);
            if let Some(id) = id {
                record = record.with_id(id);
            }
            let added = factory.add(record)?;
            info!(name = %added.name, "validation config added");
            println!("added validation config '{}'", added.name);
        }
        ValidationCommand::Get { name } => {
            let record = factory.get(&name)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        ValidationCommand::Delete { name } => {
            let record = factory.get(&name)?;
            factory.delete(record)?;
            println!("deleted validation config '{name}'");
        }
        ValidationCommand::List => {
            let records = factory.store().list()?;
            if records.is_empty() {
                println!("no validation configs stored");
            }
            for record in records {
                match record.id {
                    Some(id) => println!("{}  ({id})", record.name),
                    None => println!("{}", record.name),
                }
            }
        }
    }
    Ok(())
}
