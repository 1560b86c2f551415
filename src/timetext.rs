use chrono::{Days, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unrecognized clock time '{text}', expected h:mm AM/PM or HH:MM")]
pub struct ParseTimeError {
    text: String,
}

/// A validated hour/minute pair. Construction is the only validation point;
/// a value of this type is always in range.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ParsedTime {
    hour: u32,
    minute: u32,
}

impl ParsedTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    fn as_naive_time(self) -> NaiveTime {
        // Fields are range-checked in new(); MIN is unreachable.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

pub fn parse_clock_text(text: &str) -> Result<ParsedTime, ParseTimeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseTimeError {
            text: text.to_string(),
        });
    }

    let upper = trimmed.to_ascii_uppercase();
    let time = NaiveTime::parse_from_str(&upper, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| ParseTimeError {
            text: trimmed.to_string(),
        })?;

    ParsedTime::new(time.hour(), time.minute()).ok_or_else(|| ParseTimeError {
        text: trimmed.to_string(),
    })
}

/// Combine the reference date with the parsed clock time, seconds zeroed.
/// A time that has already passed today means the next occurrence, so the
/// date advances by one calendar day.
pub fn resolve_against(parsed: ParsedTime, reference_now: NaiveDateTime) -> NaiveDateTime {
    let candidate = reference_now.date().and_time(parsed.as_naive_time());
    if candidate < reference_now {
        candidate
            .checked_add_days(Days::new(1))
            .unwrap_or(candidate)
    } else {
        candidate
    }
}

/// Outcome of feeding one live text edit through the parser. Invalid text
/// is a no-op by contract: the previously accepted target stays in force.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TimeEdit {
    Accepted(NaiveDateTime),
    Unchanged,
}

pub fn apply_time_edit(text: &str, reference_now: NaiveDateTime) -> TimeEdit {
    match parse_clock_text(text) {
        Ok(parsed) => TimeEdit::Accepted(resolve_against(parsed, reference_now)),
        Err(_) => TimeEdit::Unchanged,
    }
}
