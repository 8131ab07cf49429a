use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use expense_tracker::cli::{
    handle_categories_command, handle_config_command, handle_summary_command, parse_budget,
    SummaryArgs,
};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::logging::{init_tracing, LogTarget};
use expense_tracker::models::Money;
use expense_tracker::reports::total_spent;
use expense_tracker::session::Session;
use expense_tracker::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses against a total budget and see where the money \
                  went. Runs an interactive dashboard by default; data lives only \
                  for the length of the session."
)]
struct Cli {
    /// Options for the TUI launched when no subcommand is given
    #[command(flatten)]
    tui: TuiArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Default)]
struct TuiArgs {
    /// Starting budget; defaults to the configured budget
    #[arg(short, long, env = "EXPENSE_TRACKER_BUDGET", value_parser = parse_budget)]
    budget: Option<Money>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui(TuiArgs),

    /// Print a dashboard for expenses given on the command line
    Summary(SummaryArgs),

    /// List the expense categories
    Categories,

    /// Show configuration and paths
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let top_level = cli.tui;
    match cli.command.unwrap_or(Commands::Tui(TuiArgs::default())) {
        Commands::Tui(args) => {
            let budget = args.budget.or(top_level.budget);
            // The terminal belongs to the UI, so logs go to a file
            paths.ensure_directories()?;
            init_tracing(LogTarget::File(paths.log_file()), &settings.log_level)?;

            let session = Session::with_budget(budget.unwrap_or(settings.default_budget))?;
            let session = run_tui(&settings, session)?;

            let total = total_spent(session.expenses());
            println!(
                "Session ended: {} expense(s), {} spent.",
                session.len(),
                total.format_with_symbol(&settings.currency_symbol)
            );
        }
        Commands::Summary(args) => {
            init_tracing(LogTarget::Stderr, &settings.log_level)?;
            handle_summary_command(&settings, &args)?;
        }
        Commands::Categories => handle_categories_command(),
        Commands::Config { init } => {
            init_tracing(LogTarget::Stderr, &settings.log_level)?;
            handle_config_command(&paths, &settings, init)?;
        }
    }

    Ok(())
}
