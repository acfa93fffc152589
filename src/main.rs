use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_pace::cli::{
    handle_budget_command, handle_categories_command, handle_edit_command, handle_progress_command,
    handle_review_command, handle_spend_command, BudgetCommands, EditArgs, PeriodArgs, ReviewArgs,
    SpendCommands,
};
use budget_pace::config::{paths::PacePaths, settings::Settings};
use budget_pace::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pace",
    author = "Kaylee Beyene",
    version,
    about = "Monthly budget allocation and spending pace tracker",
    long_about = "pace splits a monthly budget across spending categories, keeps \
                  the split balanced while you edit it, and tells you whether your \
                  spending is keeping pace with the month."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Edit category allocations, keeping them balanced
    Edit(EditArgs),

    /// Spend tracking commands
    #[command(subcommand)]
    Spend(SpendCommands),

    /// Show spending pace for a period
    Progress(PeriodArgs),

    /// Review categories in a chosen order
    Review(ReviewArgs),

    /// List the category registry
    #[command(alias = "cats")]
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    budget_pace::init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = PacePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("pace - Monthly budget allocation and spending pace tracker");
        println!();
        println!("Run 'pace --help' for usage information.");
        println!("Run 'pace init' to get started.");
        return Ok(());
    };

    if let Commands::Init = command {
        println!("Initializing budget-pace at: {}", paths.base_dir().display());
        budget_pace::storage::init::initialize_storage(&paths)?;
        settings.save(&paths)?;
        println!("Initialization complete!");
        println!();
        println!("Run 'pace categories' to see the default categories.");
        println!("Run 'pace budget set <amount>' to set a monthly budget.");
        return Ok(());
    }

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match command {
        Commands::Init => {} // handled above
        Commands::Config => {
            println!("budget-pace Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!(
                "Initialized:     {}",
                if storage.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Auto-renew budgets: {}", settings.default_auto_renew);
            println!(
                "  Alert thresholds:   {:?}",
                settings.default_alert_thresholds
            );
        }
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, cmd)?,
        Commands::Edit(args) => handle_edit_command(&storage, &settings, args)?,
        Commands::Spend(cmd) => handle_spend_command(&storage, &settings, cmd)?,
        Commands::Progress(args) => handle_progress_command(&storage, &settings, args)?,
        Commands::Review(args) => handle_review_command(&storage, &settings, args)?,
        Commands::Categories => handle_categories_command(&storage)?,
    }

    Ok(())
}
