use chrono::NaiveDate;
use clap::Subcommand;
use collegepal_core::App;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task (awards progress)
    Add {
        title: String,
        /// Course or context
        #[arg(long, default_value = "")]
        course: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Mark a task done (an edit: no progress awarded)
    Done { id: Uuid },
    /// List tasks
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        TaskAction::Add { title, course, due } => {
            let task = app.add_task(&title, &course, due);
            println!("Task created: {} ({})", task.title, task.id);
        }
        TaskAction::Done { id } => match app.complete_task(id) {
            Some(task) => println!("Task done: {}", task.title),
            None => return Err(format!("no task with id {id}").into()),
        },
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.tasks())?);
            } else {
                for task in app.tasks() {
                    let mark = if task.done { "x" } else { " " };
                    let due = task
                        .due_date
                        .map(|d| format!("  due {d}"))
                        .unwrap_or_default();
                    println!("[{mark}] {}  {}{due}", task.id, task.title);
                }
            }
        }
    }

    Ok(())
}
