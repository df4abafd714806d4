use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "collegepal", version, about = "College Pal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pomodoro timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Tasks
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Day planner blocks
    Planner {
        #[command(subcommand)]
        action: commands::planner::PlannerAction,
    },
    /// Study database rows
    Db {
        #[command(subcommand)]
        action: commands::db::DbAction,
    },
    /// Profile display and editing
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Planner { action } => commands::planner::run(action),
        Commands::Db { action } => commands::db::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
