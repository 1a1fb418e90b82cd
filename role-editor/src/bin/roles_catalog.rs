use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use role_editor::{CapabilityCatalog, EditorConfig, logger};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roles-catalog")]
#[command(about = "Inspect the capability catalog used by the role editor")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a catalog file (defaults to ROLE_CATALOG_PATH, then the builtin catalog)
    Check {
        path: Option<PathBuf>,
    },
    /// Print the effective catalog as JSON
    Dump,
}

fn main() -> Result<()> {
    let config = EditorConfig::load();
    logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    let args = Args::parse();

    match args.command {
        Command::Check { path } => {
            let config = EditorConfig {
                catalog_path: path.or(config.catalog_path),
                ..config
            };
            let source = config
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "builtin".to_string());
            let catalog = config
                .catalog()
                .with_context(|| format!("catalog {source} is invalid"))?;
            print_summary(&source, &catalog);
        }
        Command::Dump => {
            let catalog = config.catalog().context("failed to load catalog")?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }
    Ok(())
}

fn print_summary(source: &str, catalog: &CapabilityCatalog) {
    let subsections: usize = catalog.modules.iter().map(|m| m.subsections.len()).sum();
    println!("catalog: {source}");
    println!("  modules:           {}", catalog.modules.len());
    println!("  subsections:       {subsections}");
    println!("  dashboard widgets: {}", catalog.dashboard_widgets.len());
    println!("  client groups:     {}", catalog.client_groups.len());
    println!("  clients:           {}", catalog.clients.len());
    for group in &catalog.client_groups {
        println!("    {:<12} {} members", group.id, catalog.group_size(&group.id));
    }
}
