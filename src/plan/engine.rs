use chrono::{Duration, NaiveDateTime};

use crate::plan::model::{
    CycleCount, FALL_ASLEEP_MINUTES, SleepOption, WAKE_WINDOW_MINUTES,
};

/// Wake candidates for sleeping now: each target is `now` plus the
/// fall-asleep latency plus the full cycle span. Pure local wall-clock
/// arithmetic, no timezone conversion.
pub fn compute_wake_times(now: NaiveDateTime) -> [SleepOption; 4] {
    CycleCount::ALL.map(|count| SleepOption {
        count,
        target: now + Duration::minutes(FALL_ASLEEP_MINUTES + count.sleep_minutes()),
    })
}

/// Bedtime candidates for a wake target: the latency is subtracted along
/// with the cycle span. Targets earlier than the present are legitimate
/// output; interpreting them is the caller's concern.
pub fn compute_bed_times(wake_target: NaiveDateTime) -> [SleepOption; 4] {
    CycleCount::ALL.map(|count| SleepOption {
        count,
        target: wake_target - Duration::minutes(count.sleep_minutes() + FALL_ASLEEP_MINUTES),
    })
}

/// The easy-wake band: a symmetric 30-minute window around the target.
pub fn wake_window(target: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    (
        target - Duration::minutes(WAKE_WINDOW_MINUTES),
        target + Duration::minutes(WAKE_WINDOW_MINUTES),
    )
}

/// Look up the selected entry by cycle count. A missing count falls back to
/// the third entry (5 cycles); callers rely on this never failing.
pub fn select_option(options: &[SleepOption; 4], selected: CycleCount) -> SleepOption {
    options
        .iter()
        .copied()
        .find(|option| option.count == selected)
        .unwrap_or(options[2])
}
