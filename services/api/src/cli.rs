use crate::report::{
    run_browse, run_compare, run_recommend, run_stats, run_system, BrowseArgs, CompareArgs,
    RecommendArgs, StatsArgs, SystemArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use design_catalog::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "design-catalog",
    about = "Browse, compare and get recommendations from the design system catalog",
    version
)]
struct Cli {
    /// Directory holding systems.json and components/ (overrides APP_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List systems with optional filters and sorting
    Browse(BrowseArgs),
    /// Show a side-by-side diff of two systems
    Compare(CompareArgs),
    /// Answer the wizard questions and print the top matches
    Recommend(RecommendArgs),
    /// Show the detail page for one system
    System(SystemArgs),
    /// Print catalog-wide statistics and insights
    Stats(StatsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, data_dir).await,
        Command::Browse(args) => run_browse(args, data_dir),
        Command::Compare(args) => run_compare(args, data_dir),
        Command::Recommend(args) => run_recommend(args, data_dir),
        Command::System(args) => run_system(args, data_dir),
        Command::Stats(args) => run_stats(args, data_dir),
    }
}
