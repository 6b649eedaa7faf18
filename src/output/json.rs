//! JSON output.

use super::{subnet_rows, Report, SubnetRow};
use crate::models::{ClassReport, PlanReport};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassView {
    address: String,
    class: String,
    default_mask: String,
    default_mask_length: u8,
    max_hosts_per_subnet: u64,
    max_subnets: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanView {
    address: String,
    requirement: RequirementView,
    borrowed_bits: u8,
    subnet_count: u64,
    mask_length: u8,
    subnet_mask: Option<String>,
    subnets: Vec<SubnetRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequirementView {
    kind: &'static str,
    count: u64,
}

impl From<&ClassReport> for ClassView {
    fn from(report: &ClassReport) -> Self {
        ClassView {
            address: report.address.to_string(),
            class: report.class.to_string(),
            default_mask: report.details.default_mask.to_string(),
            default_mask_length: report.details.default_mask_length,
            max_hosts_per_subnet: report.details.max_hosts,
            max_subnets: report.details.max_subnets,
        }
    }
}

impl From<&PlanReport> for PlanView {
    fn from(report: &PlanReport) -> Self {
        PlanView {
            address: report.address.to_string(),
            requirement: RequirementView {
                kind: report.requirement.what(),
                count: report.requirement.count(),
            },
            borrowed_bits: report.plan.borrowed_bits,
            subnet_count: report.plan.subnet_count,
            mask_length: report.plan.mask_length,
            subnet_mask: report.plan.subnet_mask().map(|m| m.to_string()),
            subnets: subnet_rows(report),
        }
    }
}

/// Render a report as pretty-printed JSON.
pub fn render(report: &Report) -> Result<String, Box<dyn Error>> {
    let json = match report {
        Report::Class(class) => serde_json::to_string_pretty(&ClassView::from(class)),
        Report::Plan(plan) => serde_json::to_string_pretty(&PlanView::from(plan)),
    }
    .map_err(|e| format!("Error serializing JSON: {e}"))?;
    Ok(json)
}
