use chrono::NaiveTime;
use proptest::prelude::*;

use nawafil::models::{DailyPrayerTimes, NawafilKind, NawafilWindow, PrayerType, TimeOfDay, Timings};
use nawafil::nawafil::calculator::{
    islamic_midnight, last_third_start, minutes_to_time_string, parse_time_to_minutes,
};
use nawafil::nawafil::{calculate_nawafil_times, NightBoundaries};
use nawafil::prayer_times::next_prayer_today;

const DAY: i32 = 1440;

fn clock(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn day_from(mins: [i32; 6]) -> DailyPrayerTimes {
    let t = |m: i32| TimeOfDay::from_hm((m / 60) as u32, (m % 60) as u32).unwrap();
    DailyPrayerTimes::new(t(mins[0]), t(mins[1]), t(mins[2]), t(mins[3]), t(mins[4]), t(mins[5]))
}

/// Realistic same-day anchors, strictly increasing and ending before 24:00.
fn ordered_day() -> impl Strategy<Value = [i32; 6]> {
    (180..=420i32, 60..=120i32, 240..=360i32, 120..=200i32, 60..=180i32, 60..=120i32).prop_map(
        |(fajr, a, b, c, d, e)| {
            let sunrise = fajr + a;
            let dhuhr = sunrise + b;
            let asr = dhuhr + c;
            let maghrib = asr + d;
            let isha = maghrib + e;
            [fajr, sunrise, dhuhr, asr, maghrib, isha]
        },
    )
}

fn wrap_gap(from: f64, to: f64) -> f64 {
    (to - from).rem_euclid(f64::from(DAY))
}

proptest! {
    #[test]
    fn format_inverts_parse(h in 0..24i32, m in 0..60i32, zone in proptest::option::of("[A-Z]{3}")) {
        let bare = format!("{:02}:{:02}", h, m);
        let input = match &zone {
            Some(z) => format!("{} {}", bare, z),
            None => bare.clone(),
        };
        let minutes = parse_time_to_minutes(&input).unwrap();
        prop_assert_eq!(minutes_to_time_string(minutes), bare);
    }

    #[test]
    fn computed_windows_start_before_they_end(mins in ordered_day()) {
        let records = calculate_nawafil_times(&day_from(mins));
        for record in &records {
            if let NawafilWindow::Timed { start, end } = record.window {
                let length = (end.0 - start.0).rem_euclid(DAY);
                prop_assert!(length > 0 && length < DAY / 2, "{} {:?}", record.name, record.window);
            }
        }
    }

    #[test]
    fn midnight_lies_inside_the_night(mins in ordered_day()) {
        let (fajr, isha) = (mins[0], mins[5]);
        let midnight = islamic_midnight(isha, fajr);
        let night = wrap_gap(f64::from(isha), f64::from(fajr));
        let into = wrap_gap(f64::from(isha), midnight);
        prop_assert!(into > 0.0 && into < night);
    }

    #[test]
    fn last_third_lies_between_midnight_and_fajr(mins in ordered_day()) {
        let (fajr, isha) = (mins[0], mins[5]);
        let midnight = islamic_midnight(isha, fajr);
        let last_third = last_third_start(midnight, fajr);
        let remaining = wrap_gap(midnight, f64::from(fajr));
        let into = wrap_gap(midnight, last_third);
        prop_assert!(into > 0.0 && into < remaining);
        prop_assert!((0.0..f64::from(DAY)).contains(&last_third));
    }

    #[test]
    fn fixed_windows_ignore_input(mins in ordered_day()) {
        let records = calculate_nawafil_times(&day_from(mins));
        prop_assert_eq!(records.len(), 6);
        prop_assert_eq!(
            records[4].window,
            NawafilWindow::Label { start: "Upon entering mosque", end: "Before sitting" }
        );
        prop_assert_eq!(
            records[5].window,
            NawafilWindow::Label { start: "Anytime (except forbidden times)", end: "No specific end time" }
        );
    }

    #[test]
    fn garbage_fajr_is_reported_not_panicked(fajr in "\\PC*") {
        let timings = Timings {
            fajr: fajr.clone(),
            sunrise: "06:30".into(),
            dhuhr: "12:15".into(),
            asr: "15:45".into(),
            maghrib: "18:20".into(),
            isha: "19:45".into(),
        };
        match DailyPrayerTimes::from_timings(&timings) {
            Ok(times) => prop_assert!(times.fajr.minutes() < 6 * 60 + 30),
            // A parseable Fajr at or after sunrise is reported against Sunrise.
            Err(e) => prop_assert!(matches!(
                e.field(),
                Some(PrayerType::Fajr) | Some(PrayerType::Sunrise)
            )),
        }
    }

    #[test]
    fn wrapped_windows_stay_within_the_day(mins in ordered_day(), shift in 0..DAY) {
        use nawafil::nawafil::{DayBoundary, NawafilCalculator, NawafilOffsets};
        // Rotating the whole day can push anchors past midnight; order is not checked here.
        let rotated = mins.map(|m| (m + shift).rem_euclid(DAY));
        let calc = NawafilCalculator::new(NawafilOffsets::default(), DayBoundary::Wrap).unwrap();
        for record in calc.calculate(&day_from(rotated)) {
            prop_assert!(!record.window.is_out_of_day());
        }
    }
}

#[test]
fn reference_day_matches_published_windows() {
    let timings = Timings {
        fajr: "05:00".into(),
        sunrise: "06:30".into(),
        dhuhr: "12:15".into(),
        asr: "15:45".into(),
        maghrib: "18:20".into(),
        isha: "19:45".into(),
    };
    let records = calculate_nawafil_times(&DailyPrayerTimes::from_timings(&timings).unwrap());
    let window = |kind: NawafilKind| {
        let r = records.iter().find(|r| r.kind == kind).unwrap();
        format!("{}-{}", r.window.start_display(), r.window.end_display())
    };
    assert_eq!(window(NawafilKind::Ishraq), "06:45-07:15");
    assert_eq!(window(NawafilKind::Duha), "07:15-12:05");
    assert_eq!(window(NawafilKind::Awwabin), "18:30-19:35");
    assert_eq!(window(NawafilKind::Tahajjud), "01:55-04:50");
}

#[test]
fn malformed_fajr_surfaces_as_invalid_input() {
    let timings = Timings {
        fajr: "abc".into(),
        sunrise: "06:30".into(),
        dhuhr: "12:15".into(),
        asr: "15:45".into(),
        maghrib: "18:20".into(),
        isha: "19:45".into(),
    };
    let err = DailyPrayerTimes::from_timings(&timings).unwrap_err();
    assert_eq!(err.field(), Some(PrayerType::Fajr));
    assert!(err.to_string().starts_with("invalid Fajr time"));
}

#[test]
fn night_boundaries_before_clock_midnight() {
    // Summer-like evening: Isha 21:30, Fajr 03:30, night of 360 minutes.
    let times = day_from([210, 300, 740, 1000, 1200, 1290]);
    let night = NightBoundaries::for_times(&times);
    assert_eq!(clock(night.midnight as i32), "00:30");
    assert_eq!(night.last_third, 30.0 + 180.0 / 3.0);
}

#[test]
fn next_prayer_comes_from_the_obligatory_five() {
    let times = day_from([300, 390, 735, 945, 1100, 1185]);
    let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    assert_eq!(next_prayer_today(&times, at(4, 0)), Some((PrayerType::Fajr, 3600)));
    assert_eq!(next_prayer_today(&times, at(6, 0)).map(|n| n.0), Some(PrayerType::Dhuhr));
    assert_eq!(next_prayer_today(&times, at(19, 45)), None);
}
