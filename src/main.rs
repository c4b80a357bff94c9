use anyhow::{Context, Result};
use clap::Parser;

use nawafil::cli::args::{Cli, Commands};
use nawafil::cli::handlers;
use nawafil::config::AppConfig;
use nawafil::models::Timings;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    match cli.command {
        None => handlers::handle_today(&config, None, false)?,
        Some(Commands::Today { date, json }) => {
            handlers::handle_today(&config, date, json)?;
        }
        Some(Commands::Calc {
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
            timings,
            wrap,
            json,
        }) => {
            let timings = match timings {
                Some(path) => handlers::read_timings(&path)?,
                // clap guarantees every anchor flag when no file is given
                None => Timings {
                    fajr: fajr.unwrap_or_default(),
                    sunrise: sunrise.unwrap_or_default(),
                    dhuhr: dhuhr.unwrap_or_default(),
                    asr: asr.unwrap_or_default(),
                    maghrib: maghrib.unwrap_or_default(),
                    isha: isha.unwrap_or_default(),
                },
            };
            handlers::handle_calc(&config, timings, wrap, json)?;
        }
        Some(Commands::Config { init }) => {
            handlers::handle_config(&config, init)?;
        }
    }

    Ok(())
}
