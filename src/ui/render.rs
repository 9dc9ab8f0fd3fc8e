//! Plain-text rendering of metrics and flow blocks for the terminal.

use crate::config::Config;
use crate::core::calculator::{ActivityMetrics, FlowBlock};
use crate::utils::colors::{colorize_optional, paint_severity};
use crate::utils::formatting::{fmt_decimal, rate_unit, rup_unit, wrap};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn render_metrics(metrics: &ActivityMetrics, unit: &str, cfg: &Config) -> String {
    let d = cfg.decimals;
    let num = |v: f64| colorize_optional(&fmt_decimal(v, d), cfg.color);

    let mut out = String::new();
    out.push_str(&format!("Productive man-hours   : {} Hh\n", num(metrics.productive_man_hours)));
    out.push_str(&format!("Unproductive man-hours : {} Hh\n", num(metrics.unproductive_man_hours)));
    out.push_str(&format!(
        "Total man-hours        : {} Hh ({:.0}% productive)\n",
        num(metrics.total_man_hours()),
        metrics.productive_share() * 100.0
    ));
    out.push_str(&format!("Machine hours          : {} h\n", num(metrics.total_machine_hours)));
    out.push_str(&format!("RUP                    : {} {}\n", num(metrics.rup), rup_unit(unit)));
    out.push_str(&format!(
        "Productivity rate      : {} {}\n",
        num(metrics.productivity_rate),
        rate_unit(unit)
    ));

    if metrics.resource_summary.is_empty() {
        out.push_str("\nNo crew assigned.\n");
        return out;
    }

    let mut table = Table::new(vec![Column::left("Role"), Column::right("Man-hours")])
        .with_separator(&cfg.separator_char);
    for (role, hours) in &metrics.resource_summary {
        let name = if role.is_empty() { "(unnamed)" } else { role.as_str() };
        table.add_row(vec![name.to_string(), fmt_decimal(*hours, d)]);
    }

    out.push('\n');
    out.push_str(&table.render());
    out
}

pub fn render_flow(blocks: &[FlowBlock], cfg: &Config) -> String {
    if blocks.is_empty() {
        return "No flow anomalies.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::left("Start"),
        Column::left("End"),
        Column::right("Duration"),
        Column::left("Status"),
        Column::left("Message"),
    ])
    .with_separator(&cfg.separator_char);

    for b in blocks {
        table.add_row(vec![
            b.start_time.to_string(),
            b.end_time.to_string(),
            mins2readable(b.duration_minutes(), false, false),
            paint_severity(b.status.as_str(), b.severity, cfg.color),
            wrap(&b.message, cfg.wrap_width),
        ]);
    }

    table.render()
}
