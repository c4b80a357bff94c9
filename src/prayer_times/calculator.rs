use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc};
use log::debug;
use salah::prelude::*;

use crate::error::{NawafilError, Result};
use crate::models::{DailyPrayerTimes, PrayerType, TimeOfDay};

/// Computes the six anchors offline for a fixed location.
pub struct PrayerCalculator {
    pub lat: f64,
    pub lng: f64,
    pub method_str: String,
    pub madhab_str: String,
    pub tz_offset_minutes: i32,
}

impl PrayerCalculator {
    pub fn new(
        lat: f64,
        lng: f64,
        method: &str,
        madhab: &str,
        tz_offset_minutes: i32,
    ) -> Result<Self> {
        // Validate method + madhab early
        parse_method(method)?;
        parse_madhab(madhab)?;
        offset(tz_offset_minutes)?;
        Ok(Self {
            lat,
            lng,
            method_str: method.to_string(),
            madhab_str: madhab.to_string(),
            tz_offset_minutes,
        })
    }

    pub fn times_for_date(&self, date: NaiveDate) -> Result<DailyPrayerTimes> {
        let coords = Coordinates::new(self.lat, self.lng);
        let method = parse_method(&self.method_str)?;
        let madhab = parse_madhab(&self.madhab_str)?;
        let params = Configuration::with(method, madhab);

        let times = PrayerSchedule::new()
            .on(date)
            .for_location(coords)
            .with_configuration(params)
            .calculate()
            .map_err(|e| NawafilError::Calculation(e.to_string()))?;

        let offset = offset(self.tz_offset_minutes)?;
        let zone = offset.to_string();
        let to_local = |utc: DateTime<Utc>| -> TimeOfDay {
            TimeOfDay::from(utc.with_timezone(&offset).time()).with_zone(zone.clone())
        };

        let local = DailyPrayerTimes::new(
            to_local(times.time(Prayer::Fajr)),
            to_local(times.time(Prayer::Sunrise)),
            to_local(times.time(Prayer::Dhuhr)),
            to_local(times.time(Prayer::Asr)),
            to_local(times.time(Prayer::Maghrib)),
            to_local(times.time(Prayer::Isha)),
        );
        debug!(
            "Computed anchors for {} at ({}, {}): fajr {} isha {}",
            date, self.lat, self.lng, local.fajr, local.isha
        );
        Ok(local)
    }

    /// Current wall-clock time at the configured offset, which may differ
    /// from the host's own timezone.
    pub fn local_now(&self) -> Result<DateTime<FixedOffset>> {
        Ok(Utc::now().with_timezone(&offset(self.tz_offset_minutes)?))
    }

    /// Returns (next obligatory prayer, seconds until it).
    /// `now_time` is the current local time.
    pub fn get_next_prayer(
        &self,
        now_date: NaiveDate,
        now_time: NaiveTime,
    ) -> Result<(PrayerType, i64)> {
        let today = self.times_for_date(now_date)?;
        if let Some(next) = next_prayer_today(&today, now_time) {
            return Ok(next);
        }

        // All prayers passed — next is Fajr tomorrow
        let tomorrow = now_date.succ_opt().unwrap_or(now_date);
        let tomorrow_times = self.times_for_date(tomorrow)?;
        Ok((
            PrayerType::Fajr,
            seconds_until_tomorrow(now_time, &tomorrow_times.fajr),
        ))
    }
}

/// The first obligatory prayer later than `now_time` on the same day.
pub fn next_prayer_today(times: &DailyPrayerTimes, now_time: NaiveTime) -> Option<(PrayerType, i64)> {
    let now_secs = i64::from(now_time.num_seconds_from_midnight());
    times
        .iter()
        .filter(|(prayer, _)| prayer.is_obligatory())
        .map(|(prayer, time)| (prayer, i64::from(time.minutes()) * 60 - now_secs))
        .find(|(_, secs)| *secs > 0)
}

fn seconds_until_tomorrow(now_time: NaiveTime, fajr: &TimeOfDay) -> i64 {
    let remaining_today = 24 * 3600 - i64::from(now_time.num_seconds_from_midnight());
    remaining_today + i64::from(fajr.minutes()) * 60
}

fn offset(tz_offset_minutes: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(tz_offset_minutes * 60).ok_or_else(|| {
        NawafilError::Config(format!("Invalid timezone offset: {}", tz_offset_minutes))
    })
}

fn parse_method(s: &str) -> Result<Method> {
    match s {
        "MuslimWorldLeague" => Ok(Method::MuslimWorldLeague),
        "Egyptian" => Ok(Method::Egyptian),
        "Karachi" => Ok(Method::Karachi),
        "UmmAlQura" => Ok(Method::UmmAlQura),
        "Dubai" => Ok(Method::Dubai),
        "MoonsightingCommittee" => Ok(Method::MoonsightingCommittee),
        "NorthAmerica" => Ok(Method::NorthAmerica),
        "Kuwait" => Ok(Method::Kuwait),
        "Qatar" => Ok(Method::Qatar),
        "Singapore" => Ok(Method::Singapore),
        "Tehran" => Ok(Method::Tehran),
        "Turkey" => Ok(Method::Turkey),
        "Other" => Ok(Method::Other),
        _ => Err(NawafilError::Config(format!(
            "Unknown calculation method: '{}' (expected one of {})",
            s,
            CALC_METHODS.join(", ")
        ))),
    }
}

fn parse_madhab(s: &str) -> Result<Madhab> {
    match s {
        "Hanafi" => Ok(Madhab::Hanafi),
        "Shafi" | "Shafi'i" => Ok(Madhab::Shafi),
        _ => Err(NawafilError::Config(format!("Unknown madhab: '{}'", s))),
    }
}

pub const CALC_METHODS: &[&str] = &[
    "MuslimWorldLeague",
    "Egyptian",
    "Karachi",
    "UmmAlQura",
    "Dubai",
    "MoonsightingCommittee",
    "NorthAmerica",
    "Kuwait",
    "Qatar",
    "Singapore",
    "Tehran",
    "Turkey",
    "Other",
];
