use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nawafil", version, author, about = "Supplementary prayer windows derived from the daily prayer times")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Nawafil windows for the configured location (default command)
    Today {
        /// Day to show instead of today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Nawafil windows from explicit prayer times ("HH:MM", optional zone suffix)
    Calc {
        #[arg(long, required_unless_present = "timings")]
        fajr: Option<String>,
        #[arg(long, required_unless_present = "timings")]
        sunrise: Option<String>,
        #[arg(long, required_unless_present = "timings")]
        dhuhr: Option<String>,
        #[arg(long, required_unless_present = "timings")]
        asr: Option<String>,
        #[arg(long, required_unless_present = "timings")]
        maghrib: Option<String>,
        #[arg(long, required_unless_present = "timings")]
        isha: Option<String>,
        /// JSON file with {"Fajr": "..", "Sunrise": "..", ...} ("-" for stdin)
        #[arg(long, conflicts_with_all = ["fajr", "sunrise", "dhuhr", "asr", "maghrib", "isha"])]
        timings: Option<PathBuf>,
        /// Fold windows that cross midnight back into 00:00-23:59
        #[arg(long)]
        wrap: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the configuration file location and effective settings
    Config {
        /// Write the default configuration if none exists
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_requires_all_anchors_or_a_file() {
        assert!(Cli::try_parse_from(["nawafil", "calc", "--fajr", "05:00"]).is_err());
        assert!(Cli::try_parse_from(["nawafil", "calc", "--timings", "day.json"]).is_ok());
        assert!(Cli::try_parse_from([
            "nawafil", "calc", "--timings", "day.json", "--fajr", "05:00"
        ])
        .is_err());
    }

    #[test]
    fn today_parses_date() {
        let cli = Cli::try_parse_from(["nawafil", "today", "--date", "2025-03-21"]).unwrap();
        match cli.command {
            Some(Commands::Today { date, json }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 21));
                assert!(!json);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        assert!(Cli::try_parse_from(["nawafil"]).unwrap().command.is_none());
    }
}
