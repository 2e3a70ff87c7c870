use clap::Parser;
use cloudmatch::{
    valid_coordinates, Granularity, Grid, Matcher, Pattern, Placement, SearchConfig,
    SearchOutcome, SearchReport, DEFAULT_MATCH_CAP,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "CloudMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ModeConfig {
    /// Locate a pattern in the reference grid.
    #[default]
    Search,
    /// Resolve the facing of a placement cluster.
    Facing,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum GranularityConfig {
    #[default]
    Fine,
    Coarse,
}

impl From<GranularityConfig> for Granularity {
    fn from(value: GranularityConfig) -> Self {
        match value {
            GranularityConfig::Fine => Granularity::Fine,
            GranularityConfig::Coarse => Granularity::Coarse,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    mode: ModeConfig,
    grid_path: String,
    pattern_path: String,
    placements_path: String,
    spawn_radius: i64,
    granularity: GranularityConfig,
    match_cap: usize,
    parallel: bool,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ModeConfig::Search,
            grid_path: String::new(),
            pattern_path: String::new(),
            placements_path: String::new(),
            spawn_radius: 10000,
            granularity: GranularityConfig::Fine,
            match_cap: DEFAULT_MATCH_CAP,
            parallel: false,
            output_path: None,
        }
    }
}

/// Placement record as it appears in the placements file.
#[derive(Debug, Deserialize, Serialize)]
struct PlacementRecord {
    x: i64,
    y: i64,
    z: i64,
    class_label: i32,
    rotation: u8,
    wall_oriented: bool,
}

impl From<PlacementRecord> for Placement {
    fn from(value: PlacementRecord) -> Self {
        Placement {
            x: value.x,
            y: value.y,
            z: value.z,
            class_label: value.class_label,
            rotation: value.rotation,
            wall_oriented: value.wall_oriented,
        }
    }
}

impl From<Placement> for PlacementRecord {
    fn from(value: Placement) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
            class_label: value.class_label,
            rotation: value.rotation,
            wall_oriented: value.wall_oriented,
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchOutput {
    rotation: usize,
    orientation: Option<&'static str>,
    x: usize,
    y: usize,
    pattern: String,
    coordinates: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct SearchOutput {
    outcome: &'static str,
    total: usize,
    matches: Vec<MatchOutput>,
}

#[derive(Debug, Serialize)]
struct FacingOutput {
    outcome: &'static str,
    facing: Option<&'static str>,
    placements: Vec<PlacementRecord>,
}

fn search_matches(report: &SearchReport, spawn_radius: i64, granularity: Granularity) -> Vec<MatchOutput> {
    let mut out = Vec::with_capacity(report.total_matches());
    for rotation in &report.rotations {
        for anchor in &rotation.anchors {
            out.push(MatchOutput {
                rotation: rotation.rotation,
                orientation: rotation.orientation.map(|o| o.label()),
                x: anchor.x,
                y: anchor.y,
                pattern: rotation.pattern.to_string(),
                coordinates: valid_coordinates(spawn_radius, anchor.y as i64, granularity),
            });
        }
    }
    out
}

fn run_search(config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    if config.grid_path.is_empty() || config.pattern_path.is_empty() {
        return Err("grid_path and pattern_path must be set for search mode".into());
    }

    let grid_text = fs::read_to_string(&config.grid_path)?;
    let grid = Grid::parse(&grid_text)?;
    let pattern_text = fs::read_to_string(&config.pattern_path)?;
    let pattern = Pattern::parse(&pattern_text)?;

    let matcher = Matcher::new(grid).with_config(SearchConfig {
        match_cap: config.match_cap,
        parallel: config.parallel,
    });
    let granularity: Granularity = config.granularity.into();

    let output = match matcher.search(&pattern) {
        SearchOutcome::Found(report) => SearchOutput {
            outcome: "found",
            total: report.total_matches(),
            matches: search_matches(&report, config.spawn_radius, granularity),
        },
        SearchOutcome::NoMatch => SearchOutput {
            outcome: "no_match",
            total: 0,
            matches: Vec::new(),
        },
        SearchOutcome::TooManyMatches(report) => SearchOutput {
            outcome: "too_many_matches",
            total: report.total_matches(),
            matches: Vec::new(),
        },
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn run_facing(config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    if config.placements_path.is_empty() {
        return Err("placements_path must be set for facing mode".into());
    }

    let placements_text = fs::read_to_string(&config.placements_path)?;
    let records: Vec<PlacementRecord> = serde_json::from_str(&placements_text)?;
    let placements: Vec<Placement> = records.into_iter().map(Into::into).collect();

    let output = match cloudmatch::resolve_facing(&placements) {
        Some(facing) => FacingOutput {
            outcome: "resolved",
            facing: Some(facing.label()),
            placements: cloudmatch::normalize(&placements, facing)
                .into_iter()
                .map(Into::into)
                .collect(),
        },
        None => FacingOutput {
            outcome: "facing_undetermined",
            facing: None,
            placements: Vec::new(),
        },
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("cloudmatch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;

    let json = match config.mode {
        ModeConfig::Search => run_search(&config)?,
        ModeConfig::Facing => run_facing(&config)?,
    };

    match config.output_path {
        Some(ref path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
