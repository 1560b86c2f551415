use chrono::NaiveDateTime;

pub const CYCLE_MINUTES: i64 = 90;
pub const FALL_ASLEEP_MINUTES: i64 = 14;
pub const WAKE_WINDOW_MINUTES: i64 = 15;

/// The planner deliberately offers exactly four choices; the closed set is
/// an invariant, not a tuning knob.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CycleCount {
    Three,
    Four,
    Five,
    Six,
}

impl CycleCount {
    pub const ALL: [CycleCount; 4] = [
        CycleCount::Three,
        CycleCount::Four,
        CycleCount::Five,
        CycleCount::Six,
    ];

    pub fn cycles(self) -> u32 {
        match self {
            CycleCount::Three => 3,
            CycleCount::Four => 4,
            CycleCount::Five => 5,
            CycleCount::Six => 6,
        }
    }

    pub fn from_cycles(cycles: u32) -> Option<Self> {
        match cycles {
            3 => Some(CycleCount::Three),
            4 => Some(CycleCount::Four),
            5 => Some(CycleCount::Five),
            6 => Some(CycleCount::Six),
            _ => None,
        }
    }

    /// Ascending rotation, wrapping 6 back around to 3.
    pub fn next(self) -> Self {
        match self {
            CycleCount::Three => CycleCount::Four,
            CycleCount::Four => CycleCount::Five,
            CycleCount::Five => CycleCount::Six,
            CycleCount::Six => CycleCount::Three,
        }
    }

    pub fn sleep_minutes(self) -> i64 {
        i64::from(self.cycles()) * CYCLE_MINUTES
    }

    pub fn duration_hours(self) -> f64 {
        f64::from(self.cycles()) * 1.5
    }

    pub fn quality(self) -> SleepQuality {
        match self {
            CycleCount::Three => SleepQuality::Minimum,
            CycleCount::Four => SleepQuality::Adequate,
            CycleCount::Five => SleepQuality::Optimal,
            CycleCount::Six => SleepQuality::Extended,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SleepQuality {
    Minimum,
    Adequate,
    Optimal,
    Extended,
}

impl SleepQuality {
    pub fn label(self) -> &'static str {
        match self {
            SleepQuality::Minimum => "Minimum",
            SleepQuality::Adequate => "Adequate",
            SleepQuality::Optimal => "Optimal",
            SleepQuality::Extended => "Extended",
        }
    }
}

/// Label for a raw cycle count. Counts outside the fixed set map to an
/// empty label rather than an error.
pub fn quality_label_for(cycles: u32) -> &'static str {
    CycleCount::from_cycles(cycles)
        .map(|count| count.quality().label())
        .unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepOption {
    pub count: CycleCount,
    pub target: NaiveDateTime,
}

impl SleepOption {
    pub fn duration_hours(&self) -> f64 {
        self.count.duration_hours()
    }

    pub fn quality(&self) -> SleepQuality {
        self.count.quality()
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlanMode {
    SleepNow,
    WakeAt,
}

impl PlanMode {
    pub fn label(self) -> &'static str {
        match self {
            PlanMode::SleepNow => "sleep",
            PlanMode::WakeAt => "wake",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_set_is_ascending_and_complete() {
        let cycles: Vec<u32> = CycleCount::ALL.iter().map(|c| c.cycles()).collect();
        assert_eq!(cycles, vec![3, 4, 5, 6]);
    }

    #[test]
    fn rotation_wraps_and_returns_after_four_steps() {
        for start in CycleCount::ALL {
            let mut current = start;
            for _ in 0..4 {
                current = current.next();
            }
            assert_eq!(current, start);
        }
        assert_eq!(CycleCount::Six.next(), CycleCount::Three);
    }

    #[test]
    fn duration_hours_is_one_point_five_per_cycle() {
        assert_eq!(CycleCount::Three.duration_hours(), 4.5);
        assert_eq!(CycleCount::Four.duration_hours(), 6.0);
        assert_eq!(CycleCount::Five.duration_hours(), 7.5);
        assert_eq!(CycleCount::Six.duration_hours(), 9.0);
    }

    #[test]
    fn quality_mapping_is_total_over_the_fixed_set() {
        assert_eq!(quality_label_for(3), "Minimum");
        assert_eq!(quality_label_for(4), "Adequate");
        assert_eq!(quality_label_for(5), "Optimal");
        assert_eq!(quality_label_for(6), "Extended");
    }

    #[test]
    fn quality_label_is_empty_outside_the_fixed_set() {
        assert_eq!(quality_label_for(0), "");
        assert_eq!(quality_label_for(2), "");
        assert_eq!(quality_label_for(7), "");
    }

    #[test]
    fn from_cycles_rejects_counts_outside_the_set() {
        assert!(CycleCount::from_cycles(2).is_none());
        assert!(CycleCount::from_cycles(7).is_none());
        assert_eq!(CycleCount::from_cycles(5), Some(CycleCount::Five));
    }
}
