use std::io::{self, BufRead, Write};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};

use crate::plan::engine::{compute_bed_times, compute_wake_times};
use crate::plan::model::{CycleCount, PlanMode, SleepOption};
use crate::ticker::Ticker;
use crate::timetext::{TimeEdit, apply_time_edit};
use crate::ui::render::render_plan;

pub struct WatchOptions {
    pub mode: PlanMode,
    pub wake_target: Option<NaiveDateTime>,
    pub selected: CycleCount,
    pub refresh: Duration,
    /// Number of frames to draw before returning; 0 runs until interrupted.
    pub max_ticks: u64,
}

pub fn run_watch(options: WatchOptions) -> Result<()> {
    let ticker = Ticker::start(options.refresh);
    let input = spawn_input_reader();
    let mut input_open = true;
    let mut selected = options.selected;
    let mut wake_target = options.wake_target;
    let mut frames = 0_u64;
    let mut now = Local::now().naive_local();

    loop {
        let reference = match options.mode {
            PlanMode::SleepNow => now,
            PlanMode::WakeAt => wake_target.unwrap_or(now),
        };
        let plan = match options.mode {
            PlanMode::SleepNow => compute_wake_times(now),
            PlanMode::WakeAt => compute_bed_times(reference),
        };
        draw_frame(options.mode, reference, &plan, selected)?;

        frames += 1;
        if options.max_ticks > 0 && frames >= options.max_ticks {
            return Ok(());
        }

        now = match ticker.ticks().recv() {
            Ok(sample) => sample.naive_local(),
            Err(_) => return Ok(()),
        };

        if input_open {
            loop {
                match input.try_recv() {
                    Ok(line) => {
                        handle_input_line(&line, options.mode, now, &mut selected, &mut wake_target);
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        input_open = false;
                        break;
                    }
                }
            }
        }
    }
}

/// An empty line cycles the selection; in wake-at mode any other line is
/// treated as a time edit, and unparsable text leaves the target alone.
fn handle_input_line(
    line: &str,
    mode: PlanMode,
    now: NaiveDateTime,
    selected: &mut CycleCount,
    wake_target: &mut Option<NaiveDateTime>,
) {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        *selected = selected.next();
        return;
    }
    if mode == PlanMode::WakeAt {
        if let TimeEdit::Accepted(target) = apply_time_edit(trimmed, now) {
            *wake_target = Some(target);
        }
    }
}

fn draw_frame(
    mode: PlanMode,
    reference: NaiveDateTime,
    plan: &[SleepOption; 4],
    selected: CycleCount,
) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\x1b[2J\x1b[H")?;
    write!(stdout, "{}", render_plan(mode, reference, plan, selected))?;
    writeln!(stdout)?;
    match mode {
        PlanMode::SleepNow => {
            writeln!(stdout, "Enter: next cycle option | Ctrl-C: quit")?;
        }
        PlanMode::WakeAt => {
            writeln!(
                stdout,
                "Enter: next cycle option | type a time (h:mm AM/PM): move wake target | Ctrl-C: quit"
            )?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn spawn_input_reader() -> Receiver<String> {
    let (sender, receiver) = channel();
    // The reader parks on stdin and exits with the process (or at EOF).
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if sender.send(line).is_err() {
                break;
            }
        }
    });
    receiver
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .expect("valid date")
            .and_hms_opt(hour, minute, 0)
            .expect("valid time")
    }

    #[test]
    fn empty_line_advances_the_selection() {
        let mut selected = CycleCount::Five;
        let mut target = None;
        handle_input_line("", PlanMode::SleepNow, at(22, 0), &mut selected, &mut target);
        assert_eq!(selected, CycleCount::Six);
        handle_input_line("  ", PlanMode::SleepNow, at(22, 0), &mut selected, &mut target);
        assert_eq!(selected, CycleCount::Three);
    }

    #[test]
    fn valid_time_edit_moves_the_wake_target() {
        let mut selected = CycleCount::Five;
        let mut target = Some(at(7, 0));
        handle_input_line("8:30 AM", PlanMode::WakeAt, at(3, 0), &mut selected, &mut target);
        assert_eq!(target, Some(at(8, 30)));
        assert_eq!(selected, CycleCount::Five);
    }

    #[test]
    fn invalid_time_edit_keeps_the_previous_target() {
        let mut selected = CycleCount::Five;
        let mut target = Some(at(7, 0));
        handle_input_line("not a time", PlanMode::WakeAt, at(3, 0), &mut selected, &mut target);
        assert_eq!(target, Some(at(7, 0)));
    }

    #[test]
    fn time_edits_are_ignored_in_sleep_now_mode() {
        let mut selected = CycleCount::Five;
        let mut target = None;
        handle_input_line("8:30 AM", PlanMode::SleepNow, at(22, 0), &mut selected, &mut target);
        assert_eq!(target, None);
    }
}
