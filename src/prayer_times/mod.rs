pub mod calculator;

pub use calculator::{next_prayer_today, PrayerCalculator, CALC_METHODS};
