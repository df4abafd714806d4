use chrono::NaiveDate;
use clap::Subcommand;
use collegepal_core::App;

#[derive(Subcommand)]
pub enum DbAction {
    /// Create a study-database row (awards progress)
    Add {
        title: String,
        /// Course the row belongs to
        #[arg(long, default_value = "")]
        course: String,
        /// Row category: Assignment, Exam, etc.
        #[arg(long = "type", default_value = "Assignment")]
        row_type: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Status: Planned, In progress, Done, Urgent
        #[arg(long, default_value = "Planned")]
        status: String,
    },
    /// List rows
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DbAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        DbAction::Add {
            title,
            course,
            row_type,
            due,
            status,
        } => {
            let row = app.add_database_row(&course, &row_type, &title, due, &status);
            println!("Row created: {} ({})", row.title, row.id);
        }
        DbAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.database_rows())?);
            } else {
                for row in app.database_rows() {
                    let due = row
                        .due_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{}  {}  {}  {}  [{}]",
                        row.course, row.row_type, row.title, due, row.status
                    );
                }
            }
        }
    }

    Ok(())
}
