//! Skycast CLI
//!
//! Weather lookups from the terminal, with a persistent cache, visit
//! history and favorites under one data directory.

#![allow(clippy::print_stdout)]

mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use application::{FetchError, Settings, WeatherService};
use clap::{Parser, Subcommand};
use domain::value_objects::UnitSystem;
use infrastructure::{FileCache, OpenWeatherAdapter, PlaceRegistry, SettingsStore};
use integration_openweather::OwmConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Place used when no place is given and IP detection fails
const FALLBACK_PLACE: &str = "Tehran";

/// Skycast CLI
#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Weather lookups from the terminal", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory for cache, history and settings
    #[arg(long, env = "SKYCAST_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the weather for a place
    ///
    /// Example: skycast lookup "Paris" --units imperial
    Lookup {
        /// Place to look up; detected from your IP address when omitted
        place: Option<String>,

        /// Unit system for this lookup (metric or imperial)
        #[arg(short, long)]
        units: Option<UnitSystem>,

        /// Fetch a fresh forecast even when the cache is still fresh
        #[arg(short, long)]
        force_refresh: bool,

        /// Skip the air quality lookup
        #[arg(long)]
        no_aqi: bool,

        /// Days to include in the outlook
        #[arg(long, default_value_t = 5)]
        days: usize,

        /// OpenWeatherMap API key
        #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Show or clear the visit history
    History {
        #[command(subcommand)]
        command: Option<HistoryCommands>,
    },

    /// Manage favorite places
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },

    /// Manage the snapshot cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// Clear the visit history
    Clear,
}

#[derive(Subcommand)]
enum FavCommands {
    /// List favorite places
    List,
    /// Star a place
    Add {
        /// Place to star, stored verbatim
        place: String,
    },
    /// Unstar a place (exact match)
    Remove {
        /// Place to unstar
        place: String,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Drop all cached snapshots
    Clear,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    let home = dirs::home_dir().context("Could not determine the home directory")?;
    Ok(home.join(".skycast"))
}

fn open_registry(data_dir: &Path) -> PlaceRegistry {
    PlaceRegistry::open(
        data_dir.join("history.json"),
        SettingsStore::new(data_dir.join("settings.json")),
    )
}

async fn lookup(
    data_dir: &Path,
    place: Option<String>,
    units: Option<UnitSystem>,
    force_refresh: bool,
    no_aqi: bool,
    days: usize,
    api_key: Option<String>,
) -> anyhow::Result<()> {
    let api_key = api_key.unwrap_or_default();
    if api_key.is_empty() {
        bail!("No API key. Set OPENWEATHER_API_KEY or pass --api-key.");
    }

    let settings_store = SettingsStore::new(data_dir.join("settings.json"));
    let mut settings = settings_store.load();
    if let Some(units) = units {
        settings.unit_system = units;
    }
    if no_aqi {
        settings.show_air_quality = false;
    }

    let adapter = OpenWeatherAdapter::new(OwmConfig {
        api_key,
        ..OwmConfig::default()
    })?;
    let cache = FileCache::open(data_dir.join("cache.json"));
    let registry = open_registry(data_dir);
    let service = WeatherService::new(Arc::new(adapter), Arc::new(cache), Arc::new(registry));

    let place = match place {
        Some(place) => place,
        None => match service.detect_city().await {
            Ok(Some(city)) => {
                println!("📡 Detected city: {city}");
                city
            },
            Ok(None) | Err(_) => {
                println!("📡 Could not detect your city, using {FALLBACK_PLACE}.");
                FALLBACK_PLACE.to_string()
            },
        },
    };

    match service.resolve(&place, &settings, force_refresh).await {
        Ok(Some(snapshot)) => {
            print!("{}", render::snapshot(&snapshot, &settings, days));
            Ok(())
        },
        Ok(None) => bail!("No place given."),
        Err(FetchError::PlaceNotFound) => bail!("Place not found: {place}"),
        Err(err) => bail!("Weather lookup failed: {err}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Commands::Lookup {
            place,
            units,
            force_refresh,
            no_aqi,
            days,
            api_key,
        } => {
            lookup(&data_dir, place, units, force_refresh, no_aqi, days, api_key).await?;
        },

        Commands::History { command } => {
            let registry = open_registry(&data_dir);
            match command {
                Some(HistoryCommands::Clear) => {
                    registry.clear_history()?;
                    println!("🗑️  History cleared.");
                },
                None => print!("{}", render::place_list("History", &registry.history())),
            }
        },

        Commands::Fav { command } => {
            let registry = open_registry(&data_dir);
            match command {
                FavCommands::List => {
                    print!("{}", render::place_list("Favorites", &registry.favorites()));
                },
                FavCommands::Add { place } => {
                    registry.add_favorite(&place)?;
                    println!("⭐ Added favorite: {place}");
                },
                FavCommands::Remove { place } => {
                    registry.remove_favorite(&place)?;
                    println!("💫 Removed favorite: {place}");
                },
            }
        },

        Commands::Cache { command } => match command {
            CacheCommands::Clear => {
                FileCache::open(data_dir.join("cache.json")).clear()?;
                println!("🗑️  Cache cleared.");
            },
        },
    }

    Ok(())
}
