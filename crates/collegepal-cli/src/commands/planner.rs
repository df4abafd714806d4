use chrono::{Local, NaiveDate};
use clap::Subcommand;
use collegepal_core::App;

#[derive(Subcommand)]
pub enum PlannerAction {
    /// Create a planner block (awards progress)
    Add {
        title: String,
        /// Block date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Start time, HH:MM (optional)
        #[arg(long, default_value = "")]
        time: String,
        /// Details (optional)
        #[arg(long, default_value = "")]
        note: String,
    },
    /// List blocks for a day, earliest first
    List {
        /// Day to list, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlannerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;
    let today = Local::now().date_naive();

    match action {
        PlannerAction::Add {
            title,
            date,
            time,
            note,
        } => {
            let block = app.add_planner_block(date.unwrap_or(today), &title, &time, &note);
            println!("Block created: {} on {} ({})", block.title, block.date, block.id);
        }
        PlannerAction::List { date, json } => {
            let day = date.unwrap_or(today);
            let mut blocks: Vec<_> = app
                .planner_blocks()
                .iter()
                .filter(|b| b.date == day)
                .collect();
            blocks.sort_by(|a, b| a.time.cmp(&b.time));
            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else {
                for block in blocks {
                    let time = if block.time.is_empty() {
                        "Anytime"
                    } else {
                        &block.time
                    };
                    println!("{time:>8}  {}", block.title);
                }
            }
        }
    }

    Ok(())
}
