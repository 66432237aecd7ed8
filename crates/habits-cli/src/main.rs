use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habits", version, about = "Habit Horizon CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management and check-ins
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Reference date controls (simulation)
    Date {
        #[command(subcommand)]
        action: commands::date::DateAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Date { action } => commands::date::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
