//! Severity color helpers for terminal output.

use crate::core::calculator::flow::Severity;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

/// Colour used to paint a flow block of the given severity.
pub fn color_for_severity(severity: Severity) -> Colour {
    match severity {
        Severity::Bad => Colour::Red,
        Severity::Warn => Colour::Yellow,
        Severity::Neutral => Colour::Blue,
    }
}

/// Paints `text` with the severity colour, or leaves it as-is when colour
/// output is disabled.
pub fn paint_severity(text: &str, severity: Severity, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    color_for_severity(severity).bold().paint(text).to_string()
}

/// Grey-out placeholders such as `0.00` or `--`.
pub fn colorize_optional(value: &str, enabled: bool) -> String {
    let v = value.trim();
    if enabled && (v.is_empty() || v == "--" || v == "0.00") {
        Colour::Fixed(244).paint(value).to_string()
    } else {
        value.to_string()
    }
}

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}
