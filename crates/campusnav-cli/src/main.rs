use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use campusnav_cli::logging::{init_logging, LogFormat};
use campusnav_cli::output::OutputFormat;
use campusnav_lib::{CostStrategy, SpotId, TravelMode};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus navigation queries")]
struct Cli {
    /// Campus map JSON file or a directory containing `campus_map.json`.
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log output format (logs are written to stderr).
    #[arg(long, value_enum, env = "LOG_FORMAT", default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two spots.
    Route(RouteArgs),
    /// Plan a tour from a start spot through a set of waypoints.
    Tour(TourArgs),
    /// List the spots on the map.
    Spots(SpotsArgs),
    /// Dump every spot and segment of the map.
    Map,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting spot id.
    #[arg(long = "from")]
    pub from: SpotId,
    /// Destination spot id.
    #[arg(long = "to")]
    pub to: SpotId,
    #[command(flatten)]
    pub cost: CostArgs,
}

#[derive(Args, Debug, Clone)]
pub struct TourArgs {
    /// Starting spot id.
    #[arg(long = "from")]
    pub from: SpotId,
    /// Waypoint spot id; repeat for every stop. Order does not matter.
    #[arg(long = "via", required = true, num_args = 1..)]
    pub via: Vec<SpotId>,
    #[command(flatten)]
    pub cost: CostArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SpotsArgs {
    /// Include routing junctions as well as destinations.
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct CostArgs {
    /// What the route minimises.
    #[arg(long, value_enum, default_value_t = StrategyArg::Distance)]
    pub strategy: StrategyArg,
    /// How the traveller moves.
    #[arg(long, value_enum, default_value_t = ModeArg::Walk)]
    pub mode: ModeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    #[value(alias = "dist")]
    Distance,
    Time,
}

impl From<StrategyArg> for CostStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Distance => CostStrategy::Distance,
            StrategyArg::Time => CostStrategy::Time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Walk,
    Bike,
}

impl From<ModeArg> for TravelMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Walk => TravelMode::Walk,
            ModeArg::Bike => TravelMode::Bike,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let map = cli.map.as_deref();
    match &cli.command {
        Command::Route(args) => commands::route::handle_route_command(map, cli.format, args),
        Command::Tour(args) => commands::route::handle_tour_command(map, cli.format, args),
        Command::Spots(args) => commands::spots::handle_spots_command(map, cli.format, args),
        Command::Map => commands::map::handle_map_command(map, cli.format),
    }
}
