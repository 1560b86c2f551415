use chrono::{NaiveDateTime, Timelike};

use crate::plan::engine::{select_option, wake_window};
use crate::plan::model::{CycleCount, PlanMode, SleepOption};

pub fn format_clock_12h(instant: NaiveDateTime) -> String {
    let (is_pm, hour12) = instant.hour12();
    format!(
        "{}:{:02} {}",
        hour12,
        instant.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

pub fn format_window(target: NaiveDateTime) -> String {
    let (start, end) = wake_window(target);
    format!("{} - {}", format_clock_12h(start), format_clock_12h(end))
}

pub fn format_hours_between(from: NaiveDateTime, to: NaiveDateTime) -> String {
    let minutes = (to - from).num_minutes();
    let hours = minutes.abs() as f64 / 60.0;
    if minutes < 0 {
        format!("{hours:.1} h ago")
    } else {
        format!("in {hours:.1} h")
    }
}

pub fn render_plan(
    mode: PlanMode,
    reference: NaiveDateTime,
    options: &[SleepOption; 4],
    selected: CycleCount,
) -> String {
    let chosen = select_option(options, selected);
    let mut out = String::new();

    match mode {
        PlanMode::SleepNow => {
            out.push_str(&format!(
                "Current time      {}\n\n",
                format_clock_12h(reference)
            ));
        }
        PlanMode::WakeAt => {
            out.push_str(&format!(
                "Wake target       {} ({})\n\n",
                format_clock_12h(reference),
                reference.format("%a %b %d")
            ));
        }
    }

    let action = match mode {
        PlanMode::SleepNow => "wake at",
        PlanMode::WakeAt => "bedtime",
    };
    for option in options {
        let marker = if option.count == chosen.count { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {} cycles  {:<8}  {:>4.1} h  {} {}\n",
            marker,
            option.count.cycles(),
            option.quality().label(),
            option.duration_hours(),
            action,
            format_clock_12h(option.target),
        ));
    }

    match mode {
        PlanMode::SleepNow => {
            out.push_str(&format!(
                "\nEasy wake window  {}  ({} cycles, {:.1} hours, wake {})\n",
                format_window(chosen.target),
                chosen.count.cycles(),
                chosen.duration_hours(),
                format_hours_between(reference, chosen.target),
            ));
        }
        PlanMode::WakeAt => {
            out.push_str(&format!(
                "\nBedtime window    {}  ({} cycles, {:.1} hours of sleep)\n",
                format_window(chosen.target),
                chosen.count.cycles(),
                chosen.duration_hours(),
            ));
        }
    }

    out
}
