//! Formatting utilities used for CLI and export outputs.

/// Two-decimal (or `decimals`) rendering of a metric. Display only:
/// values are never rounded before this point.
pub fn fmt_decimal(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Unit suffix for ratios: `Hh/m³`, `m³/Hh`. Falls back to `unit`.
pub fn rup_unit(unit: &str) -> String {
    if unit.is_empty() {
        "Hh/unit".to_string()
    } else {
        format!("Hh/{unit}")
    }
}

pub fn rate_unit(unit: &str) -> String {
    if unit.is_empty() {
        "unit/Hh".to_string()
    } else {
        format!("{unit}/Hh")
    }
}

/// Wraps long messages to `width` columns (0 disables wrapping).
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    textwrap::wrap(text, width).join("\n")
}
