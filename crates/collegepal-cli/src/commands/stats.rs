use clap::Subcommand;
use collegepal_core::{App, SKILL_NAMES};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Show current progression stats
    Show {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open()?;

    match action {
        StatsAction::Show { json } => {
            let stats = app.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(stats)?);
                return Ok(());
            }
            println!(
                "LV {} \u{2022} {}  ({} / 100 XP into level, {} total)",
                stats.level(),
                stats.badge_title(),
                stats.xp_into_level(),
                stats.xp()
            );
            for (name, score) in SKILL_NAMES.iter().zip(stats.skills()) {
                println!("  {name:<12} {score:>3} / 100");
            }
            println!("  sessions     {:>3}", stats.sessions());
            let days = stats.streak_days();
            println!(
                "  streak       {:>3} day{}",
                days,
                if days == 1 { "" } else { "s" }
            );
            println!(
                "  focus done   {:>3}",
                stats.focus_sessions_completed()
            );
        }
    }

    Ok(())
}
