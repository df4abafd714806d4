use std::thread;
use std::time::Duration;

use clap::Subcommand;
use collegepal_core::{App, Event};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the countdown
    Start,
    /// Pause the countdown, retaining remaining time
    Pause,
    /// Stop and refill the current phase's countdown
    Reset,
    /// Manually flip focus/break (discards the current countdown)
    Toggle,
    /// Set phase lengths in minutes (clamped to 1-90 focus, 1-60 break)
    SetLengths {
        /// Focus phase length, minutes
        #[arg(long)]
        focus: u32,
        /// Break phase length, minutes
        #[arg(long = "break")]
        break_minutes: u32,
    },
    /// Enable or disable automatic phase switching on completion
    AutoSwitch {
        enabled: bool,
    },
    /// Deliver one-second ticks (for scripting; the timer must be running)
    Tick {
        /// Number of ticks to deliver
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Drive the timer with a live one-second tick loop until it pauses
    Watch,
    /// Print current timer state as JSON
    Status,
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

fn print_events(events: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(event) = events {
        print_event(&event)?;
    }
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        TimerAction::Start => print_events(app.timer_start())?,
        TimerAction::Pause => print_events(app.timer_pause())?,
        TimerAction::Reset => print_events(app.timer_reset())?,
        TimerAction::Toggle => print_events(app.timer_toggle_mode())?,
        TimerAction::SetLengths {
            focus,
            break_minutes,
        } => print_events(app.timer_configure_lengths(focus, break_minutes))?,
        TimerAction::AutoSwitch { enabled } => {
            app.timer_set_auto_switch(enabled);
            print_event(&app.timer().snapshot())?;
        }
        TimerAction::Tick { count } => {
            for _ in 0..count {
                for event in app.timer_tick() {
                    print_event(&event)?;
                }
            }
            print_event(&app.timer().snapshot())?;
        }
        TimerAction::Watch => {
            if !app.timer().running() {
                eprintln!("timer is not running; use `collegepal timer start` first");
                return Ok(());
            }
            while app.timer().running() {
                thread::sleep(Duration::from_secs(1));
                for event in app.timer_tick() {
                    print_event(&event)?;
                }
            }
        }
        TimerAction::Status => print_event(&app.timer().snapshot())?,
    }

    Ok(())
}
