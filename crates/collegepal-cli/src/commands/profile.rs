use clap::Subcommand;
use collegepal_core::App;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Edit profile fields; only the provided flags change
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        tagline: Option<String>,
        #[arg(long)]
        major: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        goal: Option<String>,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        ProfileAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.profile())?);
            } else {
                let p = app.profile();
                println!("{}  {}", p.initials(), p.name);
                println!("  {}", p.tagline);
                println!("  Major: {}  Year: {}", p.major, p.year);
                println!("  Goal: {}", p.goal);
            }
        }
        ProfileAction::Edit {
            name,
            tagline,
            major,
            year,
            goal,
        } => {
            let p = app.update_profile(name, tagline, major, year, goal);
            println!("Profile updated: {}", p.name);
        }
    }

    Ok(())
}
