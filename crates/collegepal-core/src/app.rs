//! Application service: the single owner of all mutable state.
//!
//! Every CLI command (and any future GUI shell) goes through an [`App`].
//! It wires timer focus-completions into the progress store, stamps "today"
//! for streak bookkeeping, and persists the whole state synchronously after
//! each mutation. A failed write is logged and execution continues; the
//! in-memory state stays correct either way.

use chrono::{Local, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::CoreError;
use crate::events::Event;
use crate::profile::Profile;
use crate::progress::{ActivityKind, ProgressState};
use crate::records::{DatabaseRow, Note, PlannerBlock, Task};
use crate::storage::{AppState, Config, StateStore};
use crate::timer::{Mode, TimerEngine};

pub struct App {
    state: AppState,
    store: StateStore,
    config: Config,
}

impl App {
    /// Open the app against the default data directory.
    pub fn open() -> Result<Self, CoreError> {
        let config = Config::load_or_default();
        let store = StateStore::open()?;
        Ok(Self::from_parts(store, config))
    }

    /// Open against an explicit store (tests, alternate profiles).
    pub fn from_parts(store: StateStore, config: Config) -> Self {
        let fresh = !store.path().exists();
        let mut state = store.load();
        if fresh {
            state
                .timer
                .configure_lengths(config.timer.focus_length, config.timer.break_length);
            state.timer.set_auto_switch(config.timer.auto_switch);
        }
        state.timer.normalize();
        Self {
            state,
            store,
            config,
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            eprintln!("warning: failed to persist state: {e}");
        }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Apply a reward without persisting; callers persist once per command.
    fn apply_reward(&mut self, kind: ActivityKind) -> Event {
        let outcome = self.state.stats.record_activity(kind, Self::today());
        Event::ActivityRecorded {
            kind,
            xp_gained: outcome.xp_gained,
            xp: self.state.stats.xp(),
            level: outcome.level,
            sessions: self.state.stats.sessions(),
            streak_days: self.state.stats.streak_days(),
            at: Utc::now(),
        }
    }

    /// The progression entry point collaborators call once per successful
    /// record creation.
    pub fn record_activity(&mut self, kind: ActivityKind) -> Event {
        let event = self.apply_reward(kind);
        self.persist();
        event
    }

    // ── Records ──────────────────────────────────────────────────────

    pub fn add_note(&mut self, title: &str, body: &str) -> Note {
        let note = Note::new(title, body);
        self.state.notes.push(note.clone());
        self.apply_reward(ActivityKind::Note);
        self.persist();
        note
    }

    pub fn add_task(&mut self, title: &str, course: &str, due_date: Option<NaiveDate>) -> Task {
        let task = Task::new(title, course, due_date);
        self.state.tasks.push(task.clone());
        self.apply_reward(ActivityKind::Task);
        self.persist();
        task
    }

    /// Mark a task done. An edit, not a creation: no reward.
    pub fn complete_task(&mut self, id: Uuid) -> Option<Task> {
        let task = self.state.tasks.iter_mut().find(|t| t.id == id)?;
        task.done = true;
        task.updated_at = Utc::now();
        let task = task.clone();
        self.persist();
        Some(task)
    }

    pub fn add_planner_block(
        &mut self,
        date: NaiveDate,
        title: &str,
        time: &str,
        note: &str,
    ) -> PlannerBlock {
        let block = PlannerBlock::new(date, title, time, note);
        self.state.planner_blocks.push(block.clone());
        self.apply_reward(ActivityKind::Planner);
        self.persist();
        block
    }

    pub fn add_database_row(
        &mut self,
        course: &str,
        row_type: &str,
        title: &str,
        due_date: Option<NaiveDate>,
        status: &str,
    ) -> DatabaseRow {
        let row = DatabaseRow::new(course, row_type, title, due_date, status);
        self.state.database_rows.push(row.clone());
        self.apply_reward(ActivityKind::Database);
        self.persist();
        row
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn timer_start(&mut self) -> Option<Event> {
        let event = self.state.timer.start();
        self.persist();
        event
    }

    pub fn timer_pause(&mut self) -> Option<Event> {
        let event = self.state.timer.pause();
        self.persist();
        event
    }

    pub fn timer_reset(&mut self) -> Option<Event> {
        let event = self.state.timer.reset();
        self.persist();
        event
    }

    pub fn timer_toggle_mode(&mut self) -> Option<Event> {
        let event = self.state.timer.toggle_mode();
        self.persist();
        event
    }

    pub fn timer_configure_lengths(
        &mut self,
        focus_minutes: u32,
        break_minutes: u32,
    ) -> Option<Event> {
        let event = self.state.timer.configure_lengths(focus_minutes, break_minutes);
        self.persist();
        event
    }

    pub fn timer_set_auto_switch(&mut self, enabled: bool) {
        self.state.timer.set_auto_switch(enabled);
        self.persist();
    }

    /// Deliver one tick. A completed focus phase is rewarded as a
    /// `FocusSession` activity, so the returned events are the completion
    /// followed by the reward.
    pub fn timer_tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(event) = self.state.timer.tick() {
            let finished_focus = matches!(
                event,
                Event::TimerCompleted {
                    finished: Mode::Focus,
                    ..
                }
            );
            events.push(event);
            if finished_focus {
                events.push(self.apply_reward(ActivityKind::FocusSession));
            }
        }
        self.persist();
        events
    }

    // ── Profile ──────────────────────────────────────────────────────

    pub fn update_profile(
        &mut self,
        name: Option<String>,
        tagline: Option<String>,
        major: Option<String>,
        year: Option<String>,
        goal: Option<String>,
    ) -> &Profile {
        let p = &mut self.state.profile;
        if let Some(name) = name {
            p.name = name;
        }
        if let Some(tagline) = tagline {
            p.tagline = tagline;
        }
        if let Some(major) = major {
            p.major = major;
        }
        if let Some(year) = year {
            p.year = year;
        }
        if let Some(goal) = goal {
            p.goal = goal;
        }
        self.persist();
        &self.state.profile
    }

    // ── Read-only views ──────────────────────────────────────────────

    pub fn notes(&self) -> &[Note] {
        &self.state.notes
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn planner_blocks(&self) -> &[PlannerBlock] {
        &self.state.planner_blocks
    }

    pub fn database_rows(&self) -> &[DatabaseRow] {
        &self.state.database_rows
    }

    pub fn profile(&self) -> &Profile {
        &self.state.profile
    }

    pub fn stats(&self) -> &ProgressState {
        &self.state.stats
    }

    pub fn timer(&self) -> &TimerEngine {
        &self.state.timer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
