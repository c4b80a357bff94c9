use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

pub struct HijriInfo {
    pub day: usize,
    pub month: usize,
    pub year: usize,
    pub month_name: String,
}

impl HijriInfo {
    pub fn formatted(&self) -> String {
        format!("{} {} {}", self.day, self.month_name, self.year)
    }
}

/// Hijri date for `date`, shifted by `offset_days` for local moon sighting
/// (e.g. -1 if your country is one day behind Saudi Arabia).
pub fn to_hijri(date: NaiveDate, offset_days: i32) -> Result<HijriInfo> {
    let adjusted = date + Duration::days(offset_days as i64);
    let hd = HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .map_err(|e| anyhow::anyhow!("Hijri conversion error: {}", e))?;

    let month = hd.month();
    Ok(HijriInfo {
        day: hd.day(),
        month,
        year: hd.year(),
        month_name: hijri_month_name(month).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_ramadan_1446() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let info = to_hijri(date, 0).unwrap();
        assert_eq!(info.year, 1446);
        assert_eq!(info.month_name, "Ramadan");
        assert_eq!(info.formatted(), format!("{} Ramadan 1446", info.day));
    }

    #[test]
    fn offset_moves_the_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let base = to_hijri(date, 0).unwrap();
        let behind = to_hijri(date, -1).unwrap();
        assert_eq!(behind.day + 1, base.day);
    }

    #[test]
    fn month_name_bounds() {
        assert_eq!(hijri_month_name(1), "Muharram");
        assert_eq!(hijri_month_name(12), "Dhu al-Hijjah");
        assert_eq!(hijri_month_name(13), "Unknown");
    }
}
