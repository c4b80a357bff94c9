use anyhow::{Context, Result};
use chrono::{NaiveDate, Timelike};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::config::AppConfig;
use crate::models::{DailyPrayerTimes, NawafilRecord, PrayerType, Timings};
use crate::nawafil::{catalog, DayBoundary};
use crate::utils::format::{format_duration_secs, pad_cells};
use crate::utils::hijri::to_hijri;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

#[derive(Debug, Serialize)]
struct NextPrayer {
    prayer: PrayerType,
    in_seconds: i64,
}

/// Everything shown for one day, also the `--json` shape.
#[derive(Debug, Serialize)]
struct DayReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hijri_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_prayer: Option<NextPrayer>,
    timings: &'a DailyPrayerTimes,
    nawafil: &'a [NawafilRecord],
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today(config: &AppConfig, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let calc = config.prayer_calculator()?;
    // Prayer times are computed at the configured offset, so "now" must be too.
    let now = calc.local_now()?;
    let today = now.date_naive();
    let date = date.unwrap_or(today);

    let times = calc
        .times_for_date(date)
        .with_context(|| format!("Computing prayer times for {}", date))?;
    if let Err(e) = times.validate_order() {
        log::warn!("Computed prayer times are out of order: {}", e);
    }

    let nawafil = config.nawafil_calculator()?.calculate(&times);

    let hijri_date = match to_hijri(date, config.salah.hijri_offset) {
        Ok(info) => Some(info.formatted()),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };

    let next_prayer = if date == today {
        let (prayer, in_seconds) = calc.get_next_prayer(today, now.time())?;
        Some(NextPrayer { prayer, in_seconds })
    } else {
        None
    };

    let report = DayReport {
        location: Some(config.salah.location_name.as_str()),
        date: Some(date),
        hijri_date,
        next_prayer,
        timings: &times,
        nawafil: &nawafil,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let now_minute = (date == today).then(|| (now.hour() * 60 + now.minute()) as i32);
    print_report(&report, now_minute);
    Ok(())
}

// ─── Calc ────────────────────────────────────────────────────────────────────

pub fn handle_calc(
    config: &AppConfig,
    timings: Timings,
    wrap: bool,
    json: bool,
) -> Result<()> {
    let times = DailyPrayerTimes::from_timings(&timings)?;

    let mut calc = config.nawafil_calculator()?;
    if wrap {
        calc = calc.with_boundary(DayBoundary::Wrap);
    }
    let nawafil = calc.calculate(&times);

    let report = DayReport {
        location: None,
        date: None,
        hijri_date: None,
        next_prayer: None,
        timings: &times,
        nawafil: &nawafil,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, None);
    }
    Ok(())
}

/// Reads provider-style timings JSON from `path`, or stdin for `-`.
pub fn read_timings(path: &Path) -> Result<Timings> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Reading timings from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?
    };
    serde_json::from_str(&content).context("Parsing timings JSON")
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path()?;
    if init {
        if path.exists() {
            println_colored!(AMBER, "  Config already exists at {}", path.display());
        } else {
            let written = config.save()?;
            println_colored!(GREEN, "  ✓ Wrote default config to {}", written.display());
        }
    } else {
        println_colored!(DIM, "  # {}", path.display());
    }
    println!();
    print!("{}", toml::to_string_pretty(config).context("Serializing config")?);
    Ok(())
}

// ─── Output ──────────────────────────────────────────────────────────────────

fn print_report(report: &DayReport<'_>, now_minute: Option<i32>) {
    println!();
    println_colored!(GOLD, "  {}  {}", catalog::TITLE, catalog::TITLE_ARABIC);

    let mut subtitle = Vec::new();
    if let Some(location) = report.location {
        subtitle.push(location.to_string());
    }
    if let Some(date) = report.date {
        subtitle.push(date.format("%Y-%m-%d").to_string());
    }
    if let Some(hijri) = &report.hijri_date {
        subtitle.push(hijri.clone());
    }
    if !subtitle.is_empty() {
        println_colored!(DIM, "  {}", subtitle.join(" • "));
    }
    println!();

    for (prayer, time) in report.timings.iter() {
        println_colored!(DIM, "  {:<10}  {}", prayer.display_name(), time.labelled());
    }

    if let Some(next) = &report.next_prayer {
        println!();
        println_colored!(
            AMBER,
            "  Next: {} in {}",
            next.prayer.display_name(),
            format_duration_secs(next.in_seconds)
        );
    }
    println!();

    for record in report.nawafil {
        print_record(record, now_minute);
    }

    println_colored!(BOLD, "  Important Notes:");
    for note in catalog::NOTES {
        println_colored!(DIM, "  • {}", note);
    }
    println!();
}

fn print_record(record: &NawafilRecord, now_minute: Option<i32>) {
    let window = &record.window;
    let when = if window.is_timed() {
        format!("{} - {}", window.start_display(), window.end_display())
    } else {
        window.start_display()
    };

    let active = now_minute.is_some_and(|m| window.contains(m));
    let marker = if active { "  ◀ now" } else { "" };
    let heading = format!(
        "  {}{}{}{}",
        pad_cells(record.name, 20),
        pad_cells(record.arabic_name, 16),
        when,
        marker
    );

    if active {
        println_colored!(GREEN, "{}", heading);
    } else {
        println_colored!(BOLD, "{}", heading);
    }
    if window.is_out_of_day() {
        println_colored!(RED, "    ! window crosses midnight; times are not wrapped");
    }
    println_colored!(DIM, "    Rakats: {}", record.rakats);
    println!("    {}", record.description);
    println_colored!(DIM, "    Benefits: {}", record.benefits);
    println!();
}
