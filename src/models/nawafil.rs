use serde::{Deserialize, Serialize};

use crate::models::time::MINUTES_PER_DAY;
use crate::nawafil::calculator::minutes_to_time_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NawafilKind {
    Tahajjud,
    Ishraq,
    Duha,
    Awwabin,
    TahiyyatAlMasjid,
    Tawbah,
}

impl NawafilKind {
    /// Display order of the nawafil table.
    pub fn all() -> [NawafilKind; 6] {
        [
            NawafilKind::Tahajjud,
            NawafilKind::Ishraq,
            NawafilKind::Duha,
            NawafilKind::Awwabin,
            NawafilKind::TahiyyatAlMasjid,
            NawafilKind::Tawbah,
        ]
    }
}

/// A floored minute offset from the start of the anchor day.
///
/// Unlike [`crate::models::TimeOfDay`] this may fall outside `[0, 1440)`:
/// `fajr - 10` just after midnight is negative, `sunrise + 45` late in the
/// day runs past 24:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockMinutes(pub i32);

impl ClockMinutes {
    pub fn from_fractional(minutes: f64) -> Self {
        ClockMinutes(minutes.floor() as i32)
    }

    pub fn is_within_day(&self) -> bool {
        (0..MINUTES_PER_DAY).contains(&self.0)
    }

    pub fn wrapped(&self) -> Self {
        ClockMinutes(self.0.rem_euclid(MINUTES_PER_DAY))
    }
}

impl std::fmt::Display for ClockMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&minutes_to_time_string(self.0))
    }
}

impl Serialize for ClockMinutes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NawafilWindow {
    /// Derived from the day's anchors.
    Timed { start: ClockMinutes, end: ClockMinutes },
    /// Not tied to the clock.
    Label {
        start: &'static str,
        end: &'static str,
    },
}

impl NawafilWindow {
    pub fn start_display(&self) -> String {
        match self {
            NawafilWindow::Timed { start, .. } => start.to_string(),
            NawafilWindow::Label { start, .. } => start.to_string(),
        }
    }

    pub fn end_display(&self) -> String {
        match self {
            NawafilWindow::Timed { end, .. } => end.to_string(),
            NawafilWindow::Label { end, .. } => end.to_string(),
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, NawafilWindow::Timed { .. })
    }

    /// True when a computed bound lies before 00:00 or at/after 24:00 and
    /// would render as a negative or over-range clock string.
    pub fn is_out_of_day(&self) -> bool {
        match self {
            NawafilWindow::Timed { start, end } => !start.is_within_day() || !end.is_within_day(),
            NawafilWindow::Label { .. } => false,
        }
    }

    /// Whether `minute` (minutes since midnight) falls in `[start, end)`,
    /// treating a window whose end precedes its start as running over midnight.
    pub fn contains(&self, minute: i32) -> bool {
        let NawafilWindow::Timed { start, end } = self else {
            return false;
        };
        let (start, end) = (start.wrapped().0, end.wrapped().0);
        let minute = minute.rem_euclid(MINUTES_PER_DAY);
        if start <= end {
            (start..end).contains(&minute)
        } else {
            minute >= start || minute < end
        }
    }
}

/// One row of the nawafil table. Built fresh per calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NawafilRecord {
    pub kind: NawafilKind,
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub window: NawafilWindow,
    pub description: &'static str,
    pub rakats: &'static str,
    pub benefits: &'static str,
}
