use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use property_records::config::StoreConfig;
use property_records::notify::{MemoryNotifier, NotificationLevel};
use property_records::{HttpRecordStore, Property, PropertyInput, PropertyService};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Manage property listings in the record store
#[derive(Parser, Debug)]
#[command(name = "property-records")]
#[command(about = "List, read and edit property records in the remote record store")]
struct Cli {
    /// Print results as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all properties, newest listing first
    List,
    /// Show one property
    Get { id: String },
    /// Create a property from a JSON file
    Create { file: PathBuf },
    /// Replace a property's fields from a JSON file
    Update { id: String, file: PathBuf },
    /// Delete a property
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = StoreConfig::from_env()?;
    info!("Using record store at {}", config.base_url);

    let store = HttpRecordStore::with_config(config)?;
    let service = PropertyService::new(store, MemoryNotifier::new());

    match cli.command {
        Command::List => {
            let properties = service.list().await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&properties)?);
            } else {
                for (i, property) in properties.iter().enumerate() {
                    print!("{}. ", i + 1);
                    print_property(property);
                }
            }
        }
        Command::Get { id } => {
            let property = service.get_by_id(id.as_str()).await;
            print_optional(property.as_ref(), cli.json)?;
        }
        Command::Create { file } => {
            let input = read_input(&file).await?;
            let property = service.create(&input).await;
            print_optional(property.as_ref(), cli.json)?;
        }
        Command::Update { id, file } => {
            let input = read_input(&file).await?;
            let property = service.update(id.as_str(), &input).await;
            print_optional(property.as_ref(), cli.json)?;
        }
        Command::Delete { id } => {
            let deleted = service.delete(id.as_str()).await;
            if cli.json {
                println!("{}", serde_json::json!({ "deleted": deleted }));
            } else {
                println!("Deleted: {}", deleted);
            }
        }
    }

    for notification in service.notifier().drain() {
        let marker = match notification.level {
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        eprintln!("[{}] {}", marker, notification.message);
    }

    Ok(())
}

async fn read_input(path: &Path) -> Result<PropertyInput> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid property", path.display()))
}

fn print_optional(property: Option<&Property>, json: bool) -> Result<()> {
    match (property, json) {
        (Some(property), true) => println!("{}", serde_json::to_string_pretty(property)?),
        (Some(property), false) => print_property(property),
        (None, true) => println!("null"),
        (None, false) => println!("No property"),
    }
    Ok(())
}

fn print_property(property: &Property) {
    println!("{} ({})", property.title, property.price);
    println!(
        "   {} bd, {} ba, {} sqft, built {}",
        property.bedrooms, property.bathrooms, property.square_feet, property.year_built
    );
    println!(
        "   {}, {}, {} {}",
        property.address.street,
        property.address.city,
        property.address.state,
        property.address.zip_code
    );
    println!("   ID: {}", property.id);
    println!("   Listed: {}", property.listing_date.to_rfc3339());
    println!("   Features: {}", property.features.join(", "));
    println!();
}
