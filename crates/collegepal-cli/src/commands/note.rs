use clap::Subcommand;
use collegepal_core::App;

#[derive(Subcommand)]
pub enum NoteAction {
    /// Create a note (awards progress)
    Add {
        title: String,
        /// Note body text
        #[arg(long, default_value = "")]
        body: String,
    },
    /// List notes, newest first
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        NoteAction::Add { title, body } => {
            let note = app.add_note(&title, &body);
            println!("Note created: {} ({})", note.title, note.id);
        }
        NoteAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.notes())?);
            } else {
                let mut notes: Vec<_> = app.notes().iter().collect();
                notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
                for note in notes {
                    println!("{}  {}", note.id, note.title);
                }
            }
        }
    }

    Ok(())
}
