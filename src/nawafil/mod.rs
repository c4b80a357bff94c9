pub mod calculator;
pub mod catalog;

pub use calculator::{
    calculate_nawafil_times, DayBoundary, NawafilCalculator, NawafilOffsets, NightBoundaries,
};
