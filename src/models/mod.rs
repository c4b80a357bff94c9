pub mod nawafil;
pub mod prayer;
pub mod time;

pub use nawafil::{ClockMinutes, NawafilKind, NawafilRecord, NawafilWindow};
pub use prayer::PrayerType;
pub use time::{DailyPrayerTimes, TimeOfDay, Timings, MINUTES_PER_DAY};
