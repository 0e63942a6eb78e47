use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "datacheck", version, about = "Data validation configuration tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect and validate datasource configurations.
    #[command(subcommand)]
    Datasource(DatasourceCommand),

    /// Manage validation configs in the file store.
    #[command(subcommand)]
    Validation(ValidationCommand),
}

#[derive(Debug, Subcommand)]
pub enum DatasourceCommand {
    /// Validate a JSON datasource config file and print derived fields.
    Check {
        /// Path to the JSON config file.
        file: PathBuf,

        /// Datasource name (defaults to the file stem).
        #[arg(long)]
        name: Option<String>,

        /// Secret values for template substitution, e.g. --secret MY_PASSWORD=hunter2.
        /// Unlisted names fall back to environment variables.
        #[arg(long = "secret", value_name = "KEY=VALUE")]
        secrets: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ValidationCommand {
    /// Add a validation config.
    Add {
        #[arg(long)]
        name: String,

        /// Expectation suite the config runs.
        #[arg(long)]
        suite_id: Uuid,

        /// Batch definition the config runs against.
        #[arg(long)]
        batch_id: Uuid,

        /// Optional identity for the new config.
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Print a validation config by name.
    Get { name: String },

    /// Delete a validation config by name.
    Delete { name: String },

    /// List all stored validation configs.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args_are_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_datasource_check_with_secrets() {
        let cli = Cli::parse_from([
            "datacheck",
            "datasource",
            "check",
            "ds.json",
            "--secret",
            "MY_PASSWORD=hunter2",
            "--secret",
            "MY_USER=u",
        ]);
        match cli.command {
            Command::Datasource(DatasourceCommand::Check { file, secrets, .. }) => {
                assert_eq!(file, PathBuf::from("ds.json"));
                assert_eq!(secrets.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
