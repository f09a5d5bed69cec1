//! mix: colormix CLI client
//!
//! Browse the paint catalog and request mixing recipes from a running
//! colormixd.

use clap::{Parser, Subcommand};
use colormix::client::service_client::DEFAULT_SERVER_URL;
use colormix::client::{PaletteSelection, ServiceClient};
use colormix::{Paint, PaintGateway};

/// colormix CLI client
#[derive(Parser)]
#[command(name = "mix")]
#[command(version = colormix::PKG_VERSION)]
#[command(about = "Colormix paint catalog and recipe client")]
struct Args {
    /// Server address
    #[arg(short, long, env = "COLORMIX_SERVER", default_value = DEFAULT_SERVER_URL)]
    address: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check service health
    Health,

    /// List paints in the catalog
    Catalog {
        /// Only show paints from this brand (case-insensitive)
        #[arg(short, long)]
        brand: Option<String>,
    },

    /// Generate mixing recipes for a target color
    Recipe {
        /// Target color as hex, e.g. "#87CEEB"
        #[arg(short, long)]
        target: String,
        /// Product id of a paint to mix with (repeatable)
        #[arg(short, long = "paint", required = true)]
        paints: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = ServiceClient::new(&args.address)?;

    match args.command {
        Command::Health => {
            let health = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
        }

        Command::Catalog { brand } => {
            let paints = client.paints().await?;
            let matching: Vec<&Paint> = paints
                .iter()
                .filter(|p| match (&brand, &p.brand) {
                    (Some(wanted), Some(have)) => wanted.eq_ignore_ascii_case(have),
                    (Some(_), None) => false,
                    (None, _) => true,
                })
                .collect();

            if matching.is_empty() {
                println!("no paints found");
            }
            for paint in matching {
                println!(
                    "{:<12} {:<8} {} ({})",
                    paint.id(),
                    paint.hex_code.as_deref().unwrap_or("-"),
                    paint.name.as_deref().unwrap_or("unnamed"),
                    paint.brand.as_deref().unwrap_or("unknown brand"),
                );
            }
        }

        Command::Recipe { target, paints } => {
            let catalog = client.paints().await?;

            let mut palette = PaletteSelection::new();
            for id in &paints {
                match catalog.iter().find(|p| p.id() == id) {
                    Some(paint) => {
                        palette.toggle(paint.clone());
                    }
                    None => eprintln!("warning: paint {id} not in catalog, skipping"),
                }
            }

            let recipes = client
                .generate_recipes(&palette.recipe_request(&target))
                .await?;

            if recipes.is_empty() {
                println!("no recipes found for {target}");
            }
            for recipe in recipes {
                let parts: Vec<String> = recipe
                    .recipe
                    .iter()
                    .map(|(id, n)| format!("{n}x {id}"))
                    .collect();
                println!(
                    "{} -> {} (accuracy {:.2})",
                    parts.join(" + "),
                    recipe.mixed_hex,
                    recipe.accuracy
                );
            }
        }
    }

    Ok(())
}
