//! Command-line front-end for browsing hospital bed availability.
//!
//! Settings come from built-in defaults, then `--config` (TOML), then the
//! `BEDWATCH_MAP_TOKEN` environment variable, then flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bedwatch_core::{
    filter_dataset, find_record, load_dataset, markers, request_bed, BedwatchConfig, Category,
    Charges, FilterCriteria, GeoPoint, HospitalRecord, MapSurface, MapViewport, ResourceFlags,
};
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "bedwatch",
    version,
    about = "Browse, filter and inspect hospital bed availability."
)]
pub struct Cli {
    /// JSON feed of hospital records. Uses the built-in reference dataset when absent.
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Map-tile credential.
    #[arg(long, env = "BEDWATCH_MAP_TOKEN", global = true, hide_env_values = true)]
    pub map_token: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List hospitals matching a search and filters.
    List(ListArgs),
    /// Show the availability breakdown of one hospital.
    Show {
        /// Hospital id.
        id: String,
    },
    /// Simulate a bed request. No server is contacted.
    Request {
        /// Hospital id.
        id: String,
        /// Seed for the simulated queue position.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the map viewport and markers for the filtered hospitals.
    Map(MapArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, district and address.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Restrict to a category (repeatable).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Restrict to a charge type (repeatable).
    #[arg(long = "charges", value_name = "CHARGES")]
    pub charges: Vec<Charges>,

    /// Require vacant isolation beds without oxygen.
    #[arg(long)]
    pub isolation: bool,

    /// Require vacant isolation beds with oxygen.
    #[arg(long)]
    pub oxygen: bool,

    /// Require vacant ICU beds without ventilator.
    #[arg(long)]
    pub icu: bool,

    /// Require vacant ICU beds with ventilator.
    #[arg(long)]
    pub ventilator: bool,
}

impl ListArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            categories: self.categories.iter().copied().collect(),
            charges: self.charges.iter().copied().collect(),
            resources: ResourceFlags {
                isolation: self.isolation,
                oxygen: self.oxygen,
                icu: self.icu,
                ventilator: self.ventilator,
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub filters: ListArgs,

    /// User longitude used to centre the map.
    #[arg(long, requires = "latitude", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// User latitude used to centre the map.
    #[arg(long, requires = "longitude", allow_negative_numbers = true)]
    pub latitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Effective configuration after layering file and flags over defaults.
    pub fn config(&self) -> anyhow::Result<BedwatchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read config file {}", path.display()))?;
                BedwatchConfig::from_toml_str(&text)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            None => BedwatchConfig::default(),
        };

        if let Some(token) = &self.map_token {
            config.map.access_token = Some(token.clone());
        }
        Ok(config)
    }

    pub fn records(&self) -> anyhow::Result<Vec<HospitalRecord>> {
        match &self.input {
            Some(path) => read_feed(path),
            None => Ok(load_dataset()),
        }
    }
}

fn read_feed(path: &Path) -> anyhow::Result<Vec<HospitalRecord>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read feed {}", path.display()))?;
    let records = bedwatch_feed::parse_feed_str(&data)
        .with_context(|| format!("Invalid feed {}", path.display()))?;
    tracing::info!(path = %path.display(), count = records.len(), "loaded hospital feed");
    Ok(records)
}

#[derive(Serialize)]
struct MapReport {
    surface: MapSurface,
    viewport: MapViewport,
    markers: Vec<bedwatch_core::Marker>,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    let records = cli.records()?;
    let mut out = std::io::stdout().lock();

    match &cli.command {
        Commands::List(args) => {
            let filtered = filter_dataset(&records, &args.criteria(), &args.search);
            match cli.format {
                OutputFormat::Text => render::list(&mut out, &filtered)?,
                OutputFormat::Json => render::json(&mut out, &filtered)?,
            }
        }
        Commands::Show { id } => {
            let record = find_record(&records, id)?;
            match cli.format {
                OutputFormat::Text => render::detail(&mut out, record)?,
                OutputFormat::Json => render::json(&mut out, record)?,
            }
        }
        Commands::Request { id, seed } => {
            let record = find_record(&records, id)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_os_rng(),
            };
            let ack = request_bed(record, &config.queue, &mut rng, Utc::now())?;
            match cli.format {
                OutputFormat::Text => render::toast(&mut out, &ack.toast())?,
                OutputFormat::Json => render::json(&mut out, &ack)?,
            }
        }
        Commands::Map(args) => {
            let filtered = filter_dataset(&records, &args.filters.criteria(), &args.filters.search);
            let location = match (args.longitude, args.latitude) {
                (Some(longitude), Some(latitude)) => Some(GeoPoint::new(longitude, latitude)),
                _ => None,
            };
            let report = MapReport {
                surface: MapSurface::resolve(&config.map),
                viewport: MapViewport::for_location(&config.map, location),
                markers: markers(&filtered),
            };
            match cli.format {
                OutputFormat::Text => {
                    render::map(&mut out, &report.surface, &report.viewport, &report.markers)?
                }
                OutputFormat::Json => render::json(&mut out, &report)?,
            }
        }
    }

    Ok(())
}
