mod plan;
mod report;
mod ticker;
mod timetext;
mod ui;

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;

use crate::plan::engine::{compute_bed_times, compute_wake_times};
use crate::plan::model::{CycleCount, PlanMode};
use crate::report::{build_report, to_json};
use crate::timetext::{parse_clock_text, resolve_against};
use crate::ui::app::{WatchOptions, run_watch};
use crate::ui::render::render_plan;

#[derive(Parser, Debug)]
#[command(
    name = "sleepcycle",
    version,
    about = "Sleep cycle planner: wake times for sleeping now, or bedtimes for a wake target"
)]
struct Cli {
    /// Target wake time, e.g. "7:00 AM" or "19:30". Absent plans from now.
    #[arg(long)]
    wake_at: Option<String>,

    /// Selected cycle count (3-6).
    #[arg(long, default_value_t = 5)]
    cycles: u8,

    /// Print the plan as JSON instead of text.
    #[arg(long, conflicts_with = "watch")]
    json: bool,

    /// Redraw the plan live on a recurring clock tick.
    #[arg(long)]
    watch: bool,

    /// Watch frames to draw before exiting; 0 runs until interrupted.
    #[arg(long, default_value_t = 0)]
    ticks: u64,

    /// Watch refresh interval in milliseconds.
    #[arg(long, default_value_t = 1_000)]
    refresh_ms: u64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.refresh_ms == 0 {
        bail!("--refresh-ms must be greater than zero");
    }
    let Some(selected) = CycleCount::from_cycles(u32::from(cli.cycles)) else {
        bail!("unsupported cycle count {}; choose 3, 4, 5, or 6", cli.cycles);
    };

    let now = Local::now().naive_local();
    let (mode, wake_target) = match cli.wake_at.as_deref() {
        Some(text) => {
            let parsed = parse_clock_text(text).context("invalid --wake-at value")?;
            (PlanMode::WakeAt, Some(resolve_against(parsed, now)))
        }
        None => (PlanMode::SleepNow, None),
    };

    if cli.watch {
        return run_watch(WatchOptions {
            mode,
            wake_target,
            selected,
            refresh: Duration::from_millis(cli.refresh_ms),
            max_ticks: cli.ticks,
        });
    }

    let reference = wake_target.unwrap_or(now);
    let options = match mode {
        PlanMode::SleepNow => compute_wake_times(now),
        PlanMode::WakeAt => compute_bed_times(reference),
    };

    if cli.json {
        let report = build_report(mode, reference, &options, selected);
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", render_plan(mode, reference, &options, selected));
    }
    Ok(())
}
