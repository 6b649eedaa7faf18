//! CSV output formatting for query results.

use super::terminal::format_field;
use super::{subnet_rows, Report};
use crate::models::{ClassReport, PlanReport};
use itertools::Itertools;

/// Render a report as CSV; the banner and plan summary become `#` comment lines.
pub fn render(report: &Report, banner: Option<&str>) -> String {
    let mut lines = Vec::new();
    if let Some(banner) = banner {
        lines.push(banner.to_string());
    }
    match report {
        Report::Class(class) => class_lines(&mut lines, class),
        Report::Plan(plan) => plan_lines(&mut lines, plan),
    }
    lines.iter().map(|l| format!("{l}\n")).collect()
}

fn class_lines(lines: &mut Vec<String>, report: &ClassReport) {
    lines.push(
        [
            format_field("class", 8),
            format_field("default_mask", 16),
            format_field("max_hosts_per_subnet", 22),
            format_field("max_subnets", 13),
        ]
        .iter()
        .join(","),
    );
    lines.push(
        [
            format_field(report.class, 8),
            format_field(report.details.default_mask, 16),
            format_field(report.details.max_hosts, 22),
            format_field(report.details.max_subnets, 13),
        ]
        .iter()
        .join(","),
    );
}

fn plan_lines(lines: &mut Vec<String>, report: &PlanReport) {
    let plan = &report.plan;
    lines.push(format!(
        "# borrowed_bits={bits} subnet_count={count} mask_length={len} subnet_mask={mask}",
        bits = plan.borrowed_bits,
        count = plan.subnet_count,
        len = plan.mask_length,
        mask = plan
            .subnet_mask()
            .map(|m| m.to_string())
            .unwrap_or_default(),
    ));
    lines.push(
        [
            format_field("index", 8),
            format_field("cidr", 20),
            format_field("network_address", 18),
            format_field("usable_range", 34),
            format_field("broadcast_address", 19),
        ]
        .iter()
        .join(","),
    );
    for row in subnet_rows(report) {
        lines.push(
            [
                format_field(row.index, 8),
                format_field(&row.cidr, 20),
                format_field(&row.network_address, 18),
                format_field(&row.usable_range, 34),
                format_field(&row.broadcast_address, 19),
            ]
            .iter()
            .join(","),
        );
    }
}
