use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::plan::engine::{select_option, wake_window};
use crate::plan::model::{CycleCount, PlanMode, SleepOption, quality_label_for};
use crate::ui::render::format_clock_12h;

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub mode: &'static str,
    pub reference_local: String,
    pub selected_cycles: u32,
    pub options: Vec<OptionReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionReport {
    pub cycles: u32,
    pub quality: &'static str,
    pub duration_hours: f64,
    pub target_local: String,
    pub target_clock: String,
    pub window_start_clock: String,
    pub window_end_clock: String,
    pub selected: bool,
}

pub fn build_report(
    mode: PlanMode,
    reference: NaiveDateTime,
    options: &[SleepOption; 4],
    selected: CycleCount,
) -> PlanReport {
    let chosen = select_option(options, selected);
    let option_reports = options
        .iter()
        .map(|option| {
            let (window_start, window_end) = wake_window(option.target);
            OptionReport {
                cycles: option.count.cycles(),
                quality: quality_label_for(option.count.cycles()),
                duration_hours: option.duration_hours(),
                target_local: option.target.format("%Y-%m-%dT%H:%M:%S").to_string(),
                target_clock: format_clock_12h(option.target),
                window_start_clock: format_clock_12h(window_start),
                window_end_clock: format_clock_12h(window_end),
                selected: option.count == chosen.count,
            }
        })
        .collect();

    PlanReport {
        mode: mode.label(),
        reference_local: reference.format("%Y-%m-%dT%H:%M:%S").to_string(),
        selected_cycles: chosen.count.cycles(),
        options: option_reports,
    }
}

pub fn to_json(report: &PlanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
