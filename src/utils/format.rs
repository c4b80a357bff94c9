use unicode_width::UnicodeWidthStr;

/// Format a duration in seconds to "Xh Ym" or "Ym" string
pub fn format_duration_secs(secs: i64) -> String {
    if secs <= 0 {
        return "now".to_string();
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Left-align `s` in a column of `width` terminal cells.
///
/// `format!("{:<w$}")` counts chars, which misaligns Arabic names.
pub fn pad_cells(s: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration_secs(0), "now");
        assert_eq!(format_duration_secs(59 * 60), "59m");
        assert_eq!(format_duration_secs(3 * 3600 + 5 * 60 + 30), "3h 5m");
    }

    #[test]
    fn pads_by_cells() {
        assert_eq!(pad_cells("Ishraq", 8), "Ishraq  ");
        assert_eq!(pad_cells("too long", 3), "too long");
    }
}
