//! Supplementary (nawafil) prayer windows derived from the six daily anchors.
//!
//! ```
//! use nawafil::models::{DailyPrayerTimes, Timings};
//! use nawafil::nawafil::calculate_nawafil_times;
//!
//! let timings = Timings {
//!     fajr: "05:00".into(),
//!     sunrise: "06:30".into(),
//!     dhuhr: "12:15".into(),
//!     asr: "15:45".into(),
//!     maghrib: "18:20".into(),
//!     isha: "19:45 (PKT)".into(),
//! };
//! let times = DailyPrayerTimes::from_timings(&timings).unwrap();
//! let records = calculate_nawafil_times(&times);
//! assert_eq!(records[1].window.start_display(), "06:45");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod nawafil;
pub mod prayer_times;
pub mod utils;

pub use error::{NawafilError, Result};
