use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_budget_command, handle_goal_command, handle_summary_command,
    handle_transaction_command, BudgetCommands, GoalCommands, TransactionCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::models::TransactionKind;
use budget_tracker::storage::{initialize_storage, Storage};
use budget_tracker::BudgetResult;

#[derive(Parser)]
#[command(
    name = "btrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance record keeper",
    long_about = "btrack records expenses, income, per-category budgets and savings \
                  goals in a local SQLite database, and tells you how your spending \
                  compares to your plan."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(TransactionCommands),

    /// Income commands
    #[command(subcommand, alias = "inc")]
    Income(TransactionCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show the full financial summary
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the data directory and database
    Init {
        /// Seed the database with example rows
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings, cli.verbose);

    match cli.command {
        Some(Commands::Init { sample }) => {
            println!("Initializing budget-tracker at: {}", paths.base_dir().display());
            let with_samples = sample || settings.sample_data_on_init;
            let init = initialize_storage(&paths, with_samples)
                .with_context(|| open_failure(&paths))?;
            settings.save(&paths)?;

            if let Some(location) = init.storage.location() {
                println!("Database: {}", location.display());
            }
            if with_samples {
                if init.seeded {
                    println!("Sample expenses, income, budgets and goals have been added.");
                } else {
                    println!("Database already has data; sample rows were not added.");
                }
            }

            println!("Initialization complete!");
            println!();
            println!("Run 'btrack expense add <category> <amount> <date>' to record spending.");
        }
        Some(Commands::Config) => {
            println!("budget-tracker Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Database file:  {}", paths.database_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
            println!("  Sample data on init: {}", settings.sample_data_on_init);
            println!();
            if paths.is_initialized() {
                let storage = open_storage(&paths)?;
                println!("Schema version: {}", storage.schema_version()?);
            } else {
                println!("Database not created yet. Run 'btrack init'.");
            }
        }
        Some(command) => {
            let storage = open_storage(&paths)?;
            match dispatch(&storage, &settings, command) {
                Ok(()) => {}
                Err(err) if err.is_not_found() => println!("{}", err),
                Err(err) if err.is_validation() => {
                    eprintln!("Error: {}", err);
                    std::process::exit(2);
                }
                Err(err) => return Err(err.into()),
            }
        }
        None => {
            println!("btrack - Personal finance record keeper");
            println!();
            println!("Run 'btrack --help' for usage information.");
        }
    }

    Ok(())
}

fn dispatch(storage: &Storage, settings: &Settings, command: Commands) -> BudgetResult<()> {
    match command {
        Commands::Expense(cmd) => {
            handle_transaction_command(storage, settings, TransactionKind::Expense, cmd)
        }
        Commands::Income(cmd) => {
            handle_transaction_command(storage, settings, TransactionKind::Income, cmd)
        }
        Commands::Budget(cmd) => handle_budget_command(storage, settings, cmd),
        Commands::Goal(cmd) => handle_goal_command(storage, settings, cmd),
        Commands::Summary { json } => handle_summary_command(storage, settings, json),
        Commands::Init { .. } | Commands::Config => Ok(()),
    }
}

fn open_storage(paths: &BudgetPaths) -> Result<Storage> {
    Storage::open(paths).with_context(|| open_failure(paths))
}

fn open_failure(paths: &BudgetPaths) -> String {
    format!(
        "failed to open database at {}",
        paths.database_file().display()
    )
}

fn init_tracing(settings: &Settings, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
