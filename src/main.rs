use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ivoire_geo::config::Config;
use ivoire_geo::location::{
    all_cities, city_list, communes_for_city, find_city, quartiers_for_commune, resolve_location,
    City,
};

/// ivoire-geo — Côte d'Ivoire city / commune / quartier lookups
///
/// Human-readable output goes to stderr, JSON to stdout.
///
/// Examples:
///   ivoire-geo cities
///   ivoire-geo communes Abidjan
///   ivoire-geo quartiers Abidjan Cocody
///   ivoire-geo check Abidjan Cocody "Cocody Angré"
///   ivoire-geo serve --port 8080
#[derive(Parser)]
#[command(name = "ivoire-geo", version, about, long_about = None)]
struct Cli {
    /// Log filter (e.g. debug, ivoire_geo=trace). Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all cities.
    Cities,

    /// List the communes of a city.
    Communes { city: String },

    /// List the quartiers of a commune.
    Quartiers { city: String, commune: String },

    /// Print the whole hierarchy as a tree.
    Tree,

    /// Check that a location exists (commune and quartier optional).
    Check {
        city: String,
        commune: Option<String>,
        quartier: Option<String>,
    },

    /// Serve the lookups over HTTP.
    Serve {
        /// Bind address. Defaults to IVOIRE_GEO_HOST or 127.0.0.1.
        #[arg(long)]
        host: Option<String>,

        /// Port. Defaults to IVOIRE_GEO_PORT or 8080.
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("ivoire_geo={}", config.rust_log))),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Cities => {
            for city in all_cities() {
                eprintln!("  {}", city.name);
            }
            print_json(&city_list(all_cities()))?;
        }
        Command::Communes { city } => {
            let communes = communes_for_city(&city);
            if find_city(all_cities(), &city).is_none() {
                warn!("Unknown city '{}'", city);
            }
            for commune in communes {
                eprintln!("  {}", commune.name);
            }
            print_json(&communes)?;
        }
        Command::Quartiers { city, commune } => {
            let quartiers = quartiers_for_commune(&city, &commune);
            if quartiers.is_empty() {
                warn!("No quartiers for '{}' in '{}'", commune, city);
            }
            for quartier in quartiers {
                eprintln!("  {}", quartier.name);
            }
            print_json(&quartiers)?;
        }
        Command::Tree => {
            eprint!("{}", render_tree(all_cities()));
        }
        Command::Check { city, commune, quartier } => {
            let record = resolve_location(
                all_cities(),
                &city,
                commune.as_deref().unwrap_or(""),
                quartier.as_deref().unwrap_or(""),
            );
            match record {
                Ok(record) => {
                    eprintln!("  \u{2713} {}", record.display_line());
                    print_json(&record)?;
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Serve { host, port } => {
            let host = host.unwrap_or(config.host);
            let port = port.unwrap_or(config.port);
            info!("Starting ivoire-geo v{}", env!("CARGO_PKG_VERSION"));
            ivoire_geo::server::start(&host, port).await?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// ASCII tree of cities, communes and quartiers.
fn render_tree(cities: &[City]) -> String {
    let mut out = String::new();
    for city in cities {
        out.push_str(&format!("{}\n", city.name));
        for (i, commune) in city.communes.iter().enumerate() {
            let last_commune = i + 1 == city.communes.len();
            let (branch, indent) = if last_commune {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            out.push_str(&format!("{}{}\n", branch, commune.name));
            for (j, quartier) in commune.quartiers.iter().enumerate() {
                let leaf = if j + 1 == commune.quartiers.len() {
                    "└── "
                } else {
                    "├── "
                };
                out.push_str(&format!("{}{}{}\n", indent, leaf, quartier.name));
            }
        }
    }
    out
}
