//! CLI entry point for crudgen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crudgen::config::GenConfig;
use crudgen::introspect::SchemaIntrospector;
use crudgen::TableInfo;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(about = "Generate a layered Java CRUD stack from a live MySQL schema")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database URL (overrides config)
    #[arg(short, long)]
    database_url: Option<String>,

    /// Output root directory (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate everything (base files and the per-table stack)
    Generate,
    /// Generate only the shared base files (no database connection)
    Base,
    /// Inspect the schema (show introspected tables for debugging)
    Tables,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (before logging, so we can use config.log_level)
    let mut config = if let Some(config_path) = &cli.config {
        GenConfig::from_file(config_path)?
    } else {
        GenConfig::load(None)?
    };

    // Initialize logging
    // Priority: RUST_LOG env var > config.log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = config.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    apply_overrides(&cli, &mut config);

    config.validate()?;

    if let Some(Commands::Base) = &cli.command {
        crudgen::codegen::base::generate(&config);
        return Ok(());
    }

    // The single schema connection for the run. Failing to open it is the
    // only non-zero exit; per-table failures are logged and absorbed.
    let mut introspector = SchemaIntrospector::connect(&config.database_url).await?;
    let result = run(&cli, &mut introspector, &config).await;
    introspector.disconnect().await?;
    result
}

/// Command-line flags win over file and environment configuration; `cli`
/// is only borrowed so it stays usable for the subcommand dispatch.
fn apply_overrides(cli: &Cli, config: &mut GenConfig) {
    if let Some(url) = &cli.database_url {
        config.database_url = url.clone();
    }
    if let Some(output) = &cli.output {
        config.output_root = output.clone();
    }
}

async fn run(
    cli: &Cli,
    introspector: &mut SchemaIntrospector,
    config: &GenConfig,
) -> Result<()> {
    let tables = introspector.table_models(config).await?;

    match cli.command {
        Some(Commands::Tables) => print_tables(&tables),
        _ => {
            info!("generating into {:?}", config.output_root);
            crudgen::generate(&tables, config);
        }
    }
    Ok(())
}

fn print_tables(tables: &[TableInfo]) {
    println!("Introspected {} tables:\n", tables.len());
    for table in tables {
        println!("Table: {} -> {}", table.table_name, table.bean_name);
        println!("  Columns:");
        for field in &table.fields {
            let auto_inc = if field.is_auto_increment {
                " AUTO_INCREMENT"
            } else {
                ""
            };
            println!(
                "    - {} {} -> {} {}{}",
                field.field_name,
                field.sql_type,
                field.field_type.java_type(),
                field.property_name,
                auto_inc
            );
        }
        if !table.key_groups.is_empty() {
            println!("  Key groups:");
            for group in &table.key_groups {
                let columns: Vec<&str> =
                    group.fields.iter().map(|f| f.field_name.as_str()).collect();
                println!("    - {} ({:?})", group.name, columns);
            }
        }
        println!();
    }
}
