//! Terminal output.
//!
//! Renders reports as a labelled summary followed by an aligned subnet
//! table, plus the quoted-field helper shared with the CSV renderer.

use super::{subnet_rows, Report};
use crate::models::{ClassReport, PlanReport};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a report for the terminal, with an optional banner first.
pub fn render(report: &Report, banner: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(banner) = banner {
        out.push_str(&format!("{}\n", banner.dimmed()));
    }
    match report {
        Report::Class(class) => render_class(&mut out, class),
        Report::Plan(plan) => render_plan(&mut out, plan),
    }
    out
}

fn render_class(out: &mut String, report: &ClassReport) {
    let details = &report.details;
    let lines = [
        ("Class:", report.class.to_string()),
        ("Default Subnet Mask:", details.default_mask.to_string()),
        ("Maximum Hosts per Subnet:", details.max_hosts.to_string()),
        ("Maximum Subnets:", details.max_subnets.to_string()),
    ];
    for (label, value) in lines {
        out.push_str(&format!("{} {value}\n", label.bold()));
    }
}

fn render_plan(out: &mut String, report: &PlanReport) {
    let plan = &report.plan;
    let mask = plan
        .subnet_mask()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default();
    out.push_str(&format!(
        "{} {}   {} {}   {} /{}{mask}\n\n",
        "No. of Borrowed Bits:".bold(),
        plan.borrowed_bits,
        "No. of Subnets:".bold(),
        plan.subnet_count,
        "Subnet Mask:".bold(),
        plan.mask_length,
    ));

    let header = format!(
        "{:<10} {:<18} {:<34} {}",
        "Subnet #", "Network Address", "Range of Useable Host Addresses", "Broadcast Address"
    );
    out.push_str(&format!("{}\n", header.underline()));
    for row in subnet_rows(report) {
        out.push_str(&format!(
            "{:<10} {:<18} {:<34} {}\n",
            row.index, row.network_address, row.usable_range, row.broadcast_address
        ));
    }
}
