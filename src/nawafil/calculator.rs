use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{NawafilError, Result};
use crate::models::{
    ClockMinutes, DailyPrayerTimes, NawafilKind, NawafilRecord, NawafilWindow, TimeOfDay,
    MINUTES_PER_DAY,
};
use crate::nawafil::catalog;

/// `"HH:MM"` or `"HH:MM ZONE"` to minutes since midnight. The zone is discarded.
pub fn parse_time_to_minutes(s: &str) -> Result<i32> {
    Ok(s.parse::<TimeOfDay>()?.minutes())
}

/// Minutes to `"HH:MM"` without reducing modulo a day.
///
/// Hours are `floor(minutes / 60)` and minutes keep the sign of the input, so
/// 1445 gives `"24:05"` and -10 gives `"-1:-10"`. Callers normalize first when
/// they need a wall-clock value.
pub fn minutes_to_time_string(minutes: i32) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes % 60;
    format!("{:02}:{:02}", hours, mins)
}

fn normalize(minutes: f64) -> f64 {
    let day = f64::from(MINUTES_PER_DAY);
    if minutes >= day { minutes - day } else { minutes }
}

/// Midpoint between Isha and the following day's Fajr.
pub fn islamic_midnight(isha: i32, fajr: i32) -> f64 {
    let night = f64::from(MINUTES_PER_DAY - isha + fajr);
    normalize(f64::from(isha) + night / 2.0)
}

/// Start of the final third of the span from Islamic midnight to the next Fajr.
///
/// Midnight itself may already lie past 00:00, in which case Fajr is on the
/// same calendar day and no extra day is added to the span.
pub fn last_third_start(midnight: f64, fajr: i32) -> f64 {
    let fajr = f64::from(fajr);
    let remaining = if fajr > midnight {
        fajr - midnight
    } else {
        fajr + f64::from(MINUTES_PER_DAY) - midnight
    };
    normalize(midnight + remaining / 3.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NightBoundaries {
    pub midnight: f64,
    pub last_third: f64,
}

impl NightBoundaries {
    pub fn for_times(times: &DailyPrayerTimes) -> Self {
        let fajr = times.fajr.minutes();
        let midnight = islamic_midnight(times.isha.minutes(), fajr);
        Self {
            midnight,
            last_third: last_third_start(midnight, fajr),
        }
    }
}

/// What to do with computed bounds that land outside `[00:00, 24:00)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// Keep the raw value; the window reports `is_out_of_day()`.
    #[default]
    Raw,
    /// Reduce modulo 24h.
    Wrap,
}

/// Minute offsets from the anchors. The defaults are the customary ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NawafilOffsets {
    pub tahajjud_end_before_fajr: i32,
    pub ishraq_start_after_sunrise: i32,
    pub ishraq_end_after_sunrise: i32,
    pub duha_start_after_sunrise: i32,
    pub duha_end_before_dhuhr: i32,
    pub awwabin_start_after_maghrib: i32,
    pub awwabin_end_before_isha: i32,
}

impl Default for NawafilOffsets {
    fn default() -> Self {
        Self {
            tahajjud_end_before_fajr: 10,
            ishraq_start_after_sunrise: 15,
            ishraq_end_after_sunrise: 45,
            duha_start_after_sunrise: 45,
            duha_end_before_dhuhr: 10,
            awwabin_start_after_maghrib: 10,
            awwabin_end_before_isha: 10,
        }
    }
}

impl NawafilOffsets {
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("tahajjud_end_before_fajr", self.tahajjud_end_before_fajr),
            ("ishraq_start_after_sunrise", self.ishraq_start_after_sunrise),
            ("ishraq_end_after_sunrise", self.ishraq_end_after_sunrise),
            ("duha_start_after_sunrise", self.duha_start_after_sunrise),
            ("duha_end_before_dhuhr", self.duha_end_before_dhuhr),
            ("awwabin_start_after_maghrib", self.awwabin_start_after_maghrib),
            ("awwabin_end_before_isha", self.awwabin_end_before_isha),
        ];
        for (name, value) in all {
            if !(0..MINUTES_PER_DAY).contains(&value) {
                return Err(NawafilError::Config(format!(
                    "Offset {} must be between 0 and {} minutes, got {}",
                    name,
                    MINUTES_PER_DAY - 1,
                    value
                )));
            }
        }
        if self.ishraq_start_after_sunrise >= self.ishraq_end_after_sunrise {
            return Err(NawafilError::Config(
                "Ishraq must start before it ends".to_string(),
            ));
        }
        Ok(())
    }
}

/// Offsets are validated on construction, so every anchor plus or minus an
/// offset stays well inside `i32`.
#[derive(Debug, Clone, Default)]
pub struct NawafilCalculator {
    offsets: NawafilOffsets,
    boundary: DayBoundary,
}

impl NawafilCalculator {
    pub fn new(offsets: NawafilOffsets, boundary: DayBoundary) -> Result<Self> {
        offsets.validate()?;
        Ok(Self { offsets, boundary })
    }

    pub fn with_boundary(mut self, boundary: DayBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn offsets(&self) -> &NawafilOffsets {
        &self.offsets
    }

    pub fn boundary(&self) -> DayBoundary {
        self.boundary
    }

    fn timed(&self, kind: NawafilKind, start: ClockMinutes, end: ClockMinutes) -> NawafilWindow {
        let window = match self.boundary {
            DayBoundary::Raw => NawafilWindow::Timed { start, end },
            DayBoundary::Wrap => NawafilWindow::Timed {
                start: start.wrapped(),
                end: end.wrapped(),
            },
        };
        if window.is_out_of_day() {
            warn!(
                "{:?} window {}-{} crosses the day boundary and is shown unwrapped",
                kind,
                window.start_display(),
                window.end_display()
            );
        }
        window
    }

    fn window(&self, kind: NawafilKind, times: &DailyPrayerTimes, night: &NightBoundaries) -> NawafilWindow {
        let o = &self.offsets;
        let at = |t: &TimeOfDay, delta: i32| ClockMinutes(t.minutes() + delta);

        match kind {
            NawafilKind::Tahajjud => self.timed(
                kind,
                ClockMinutes::from_fractional(night.last_third),
                at(&times.fajr, -o.tahajjud_end_before_fajr),
            ),
            NawafilKind::Ishraq => self.timed(
                kind,
                at(&times.sunrise, o.ishraq_start_after_sunrise),
                at(&times.sunrise, o.ishraq_end_after_sunrise),
            ),
            NawafilKind::Duha => self.timed(
                kind,
                at(&times.sunrise, o.duha_start_after_sunrise),
                at(&times.dhuhr, -o.duha_end_before_dhuhr),
            ),
            NawafilKind::Awwabin => self.timed(
                kind,
                at(&times.maghrib, o.awwabin_start_after_maghrib),
                at(&times.isha, -o.awwabin_end_before_isha),
            ),
            NawafilKind::TahiyyatAlMasjid => NawafilWindow::Label {
                start: catalog::TAHIYYAT_START,
                end: catalog::TAHIYYAT_END,
            },
            NawafilKind::Tawbah => NawafilWindow::Label {
                start: catalog::TAWBAH_START,
                end: catalog::TAWBAH_END,
            },
        }
    }

    /// The six nawafil records for one day, in display order.
    pub fn calculate(&self, times: &DailyPrayerTimes) -> Vec<NawafilRecord> {
        let night = NightBoundaries::for_times(times);
        debug!(
            "Islamic midnight at {:.1} min, last third from {:.1} min",
            night.midnight, night.last_third
        );

        NawafilKind::all()
            .into_iter()
            .map(|kind| {
                let entry = catalog::entry(kind);
                NawafilRecord {
                    kind,
                    name: entry.name,
                    arabic_name: entry.arabic_name,
                    window: self.window(kind, times, &night),
                    description: entry.description,
                    rakats: entry.rakats,
                    benefits: entry.benefits,
                }
            })
            .collect()
    }
}

/// Records with the customary offsets and no day wrapping.
pub fn calculate_nawafil_times(times: &DailyPrayerTimes) -> Vec<NawafilRecord> {
    NawafilCalculator::default().calculate(times)
}
