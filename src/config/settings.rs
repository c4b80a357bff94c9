use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::nawafil::{DayBoundary, NawafilCalculator, NawafilOffsets};
use crate::prayer_times::PrayerCalculator;

fn default_latitude() -> f64 {
    33.6938
}
fn default_longitude() -> f64 {
    73.0651
}
fn default_location_name() -> String {
    "Islamabad".to_string()
}
fn default_calc_method() -> String {
    "MuslimWorldLeague".to_string()
}
fn default_madhab() -> String {
    "Hanafi".to_string()
}
fn default_timezone_offset() -> i32 {
    300
}
fn default_hijri_offset() -> i32 {
    0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalahConfig {
    #[serde(default = "default_location_name")]
    pub location_name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_calc_method")]
    pub calc_method: String,
    #[serde(default = "default_madhab")]
    pub madhab: String,
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset: i32, // minutes from UTC
    /// Days to add/subtract from Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind (e.g. some Indian regions), +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for SalahConfig {
    fn default() -> Self {
        Self {
            location_name: default_location_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            calc_method: default_calc_method(),
            madhab: default_madhab(),
            timezone_offset: default_timezone_offset(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NawafilConfig {
    /// `raw` keeps windows that cross midnight as-is (and flags them),
    /// `wrap` folds them back into 00:00-23:59.
    #[serde(default)]
    pub day_boundary: DayBoundary,
    #[serde(default)]
    pub offsets: NawafilOffsets,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub salah: SalahConfig,
    #[serde(default)]
    pub nawafil: NawafilConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "nawafil")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn prayer_calculator(&self) -> Result<PrayerCalculator> {
        Ok(PrayerCalculator::new(
            self.salah.latitude,
            self.salah.longitude,
            &self.salah.calc_method,
            &self.salah.madhab,
            self.salah.timezone_offset,
        )?)
    }

    pub fn nawafil_calculator(&self) -> Result<NawafilCalculator> {
        NawafilCalculator::new(self.nawafil.offsets, self.nawafil.day_boundary)
            .context("Invalid [nawafil] settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.salah.location_name, "Islamabad");
        assert_eq!(config.nawafil.day_boundary, DayBoundary::Raw);
        assert_eq!(config.nawafil.offsets, NawafilOffsets::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[salah]\nlocation_name = \"Lahore\"\n\n[nawafil]\nday_boundary = \"wrap\"\n\n[nawafil.offsets]\nishraq_start_after_sunrise = 20\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.salah.location_name, "Lahore");
        assert_eq!(config.salah.timezone_offset, 300);
        assert_eq!(config.nawafil.day_boundary, DayBoundary::Wrap);
        assert_eq!(config.nawafil.offsets.ishraq_start_after_sunrise, 20);
        assert_eq!(config.nawafil.offsets.ishraq_end_after_sunrise, 45);
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.salah.madhab = "Shafi".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.salah.madhab, "Shafi");
        assert!(loaded.prayer_calculator().is_ok());
    }

    #[test]
    fn bad_offsets_are_reported() {
        let mut config = AppConfig::default();
        config.nawafil.offsets.duha_end_before_dhuhr = -5;
        assert!(config.nawafil_calculator().is_err());
    }

    #[test]
    fn unknown_boundary_policy_fails_to_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[nawafil]\nday_boundary = \"clamp\"\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
