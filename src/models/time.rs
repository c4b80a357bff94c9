use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{NawafilError, Result};
use crate::models::PrayerType;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// A wall-clock time kept as minutes since midnight.
///
/// A zone label such as `PKT` or `(+05)` may trail the clock value. It never
/// takes part in arithmetic; `Display` and JSON give the bare clock, and
/// [`TimeOfDay::labelled`] appends the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    minutes: u16,
    zone: Option<String>,
}

impl TimeOfDay {
    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        let t = NaiveTime::from_hms_opt(hours, minutes, 0)?;
        Some(Self::from(t))
    }

    /// Minutes since midnight, always in `[0, 1440)`.
    pub fn minutes(&self) -> i32 {
        i32::from(self.minutes)
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// `"HH:MM ZONE"`, or just `"HH:MM"` without a label.
    pub fn labelled(&self) -> String {
        match &self.zone {
            Some(zone) => format!("{} {}", self, zone),
            None => self.to_string(),
        }
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            minutes: (t.hour() * 60 + t.minute()) as u16,
            zone: None,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = NawafilError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (clock, zone) = match trimmed.split_once(' ') {
            Some((clock, zone)) => (clock, Some(zone.trim())),
            None => (trimmed, None),
        };

        let t = NaiveTime::parse_from_str(clock, "%H:%M").map_err(|e| NawafilError::InvalidTime {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            zone: zone.filter(|z| !z.is_empty()).map(str::to_string),
            ..Self::from(t)
        })
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Raw clock strings as delivered by a timings provider, keyed the way
/// public prayer-time APIs key them (`"Fajr"`, `"Sunrise"`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Timings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl Timings {
    pub fn get(&self, prayer: PrayerType) -> &str {
        match prayer {
            PrayerType::Fajr => &self.fajr,
            PrayerType::Sunrise => &self.sunrise,
            PrayerType::Dhuhr => &self.dhuhr,
            PrayerType::Asr => &self.asr,
            PrayerType::Maghrib => &self.maghrib,
            PrayerType::Isha => &self.isha,
        }
    }
}

/// The six anchors for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPrayerTimes {
    pub fajr: TimeOfDay,
    pub sunrise: TimeOfDay,
    pub dhuhr: TimeOfDay,
    pub asr: TimeOfDay,
    pub maghrib: TimeOfDay,
    pub isha: TimeOfDay,
}

impl DailyPrayerTimes {
    /// Builds the set without checking chronological order.
    pub fn new(
        fajr: TimeOfDay,
        sunrise: TimeOfDay,
        dhuhr: TimeOfDay,
        asr: TimeOfDay,
        maghrib: TimeOfDay,
        isha: TimeOfDay,
    ) -> Self {
        Self {
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
        }
    }

    /// Parses and validates provider strings.
    ///
    /// Every value must be a well-formed `HH:MM[ ZONE]` and the six anchors must
    /// be strictly increasing within the same day. The first failure is
    /// reported against the anchor it concerns.
    pub fn from_timings(timings: &Timings) -> Result<Self> {
        let parse = |prayer: PrayerType| -> Result<TimeOfDay> {
            timings
                .get(prayer)
                .parse::<TimeOfDay>()
                .map_err(|e| NawafilError::invalid_input(prayer, e.to_string()))
        };

        let times = Self::new(
            parse(PrayerType::Fajr)?,
            parse(PrayerType::Sunrise)?,
            parse(PrayerType::Dhuhr)?,
            parse(PrayerType::Asr)?,
            parse(PrayerType::Maghrib)?,
            parse(PrayerType::Isha)?,
        );
        times.validate_order()?;
        Ok(times)
    }

    pub fn get(&self, prayer: PrayerType) -> &TimeOfDay {
        match prayer {
            PrayerType::Fajr => &self.fajr,
            PrayerType::Sunrise => &self.sunrise,
            PrayerType::Dhuhr => &self.dhuhr,
            PrayerType::Asr => &self.asr,
            PrayerType::Maghrib => &self.maghrib,
            PrayerType::Isha => &self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerType, &TimeOfDay)> {
        PrayerType::all().into_iter().map(move |p| (p, self.get(p)))
    }

    /// Fails on the first anchor that is not later than the one before it.
    pub fn validate_order(&self) -> Result<()> {
        let all = PrayerType::all();
        for pair in all.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if self.get(next).minutes() <= self.get(prev).minutes() {
                return Err(NawafilError::invalid_input(
                    next,
                    format!(
                        "{} must come after {} ({})",
                        self.get(next),
                        prev.display_name(),
                        self.get(prev)
                    ),
                ));
            }
        }
        Ok(())
    }
}
