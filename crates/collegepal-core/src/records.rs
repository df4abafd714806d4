//! Record types for the CRUD views (notes, tasks, planner, study database).
//!
//! These are plain persisted rows; the views that edit them carry no logic of
//! their own. Creating one of these through the [`crate::App`] is what
//! triggers a progress reward -- edits never do.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        let title = title.into();
        Self {
            id: Uuid::new_v4(),
            title: if title.is_empty() {
                "Untitled".to_string()
            } else {
                title
            },
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// Course or context this task belongs to.
    pub course: String,
    pub due_date: Option<NaiveDate>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        course: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            course: course.into(),
            due_date,
            done: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One block on the day planner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerBlock {
    pub id: Uuid,
    pub date: NaiveDate,
    pub title: String,
    /// Optional "HH:MM" start time; empty means "Anytime".
    pub time: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlannerBlock {
    pub fn new(
        date: NaiveDate,
        title: impl Into<String>,
        time: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            date,
            title: title.into(),
            time: time.into(),
            note: note.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// One row in the free-form study database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseRow {
    pub id: Uuid,
    pub course: String,
    /// Free-form category: Assignment, Exam, etc.
    pub row_type: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DatabaseRow {
    pub fn new(
        course: impl Into<String>,
        row_type: impl Into<String>,
        title: impl Into<String>,
        due_date: Option<NaiveDate>,
        status: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            course: course.into(),
            row_type: row_type.into(),
            title: title.into(),
            due_date,
            status: status.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
