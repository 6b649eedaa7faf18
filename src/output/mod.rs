//! Output formatting for query results.
//!
//! This module turns a [`Report`] into text:
//! - [`terminal`] - Table output with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON documents with camelCase keys
//! - [`banner`] - Report header line with generation time
//!
//! Renderers return a `String`; printing is left to the caller.

pub mod banner;
pub mod csv;
pub mod json;
pub mod terminal;

use crate::models::{to_integer, to_text, ClassReport, Ipv4, PlanReport, SubnetDescriptor};
use serde::Serialize;
use std::net::Ipv4Addr;

pub use banner::banner;
pub use terminal::format_field;

/// Result of any query, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Class(ClassReport),
    Plan(PlanReport),
}

/// One subnet as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRow {
    pub index: u64,
    pub cidr: Ipv4,
    pub network_address: String,
    /// "first - last", or "none" for /31 and /32 blocks.
    pub usable_range: String,
    pub broadcast_address: String,
}

impl From<&SubnetDescriptor> for SubnetRow {
    fn from(s: &SubnetDescriptor) -> Self {
        SubnetRow {
            index: s.index,
            cidr: s.cidr,
            network_address: dotted(s.network_address),
            usable_range: match s.usable_range() {
                Some((first, last)) => format!("{} - {}", dotted(first), dotted(last)),
                None => "none".to_string(),
            },
            broadcast_address: dotted(s.broadcast_address),
        }
    }
}

fn dotted(addr: Ipv4Addr) -> String {
    to_text(to_integer(addr))
}

/// Rows for every subnet of a plan, in index order.
pub fn subnet_rows(report: &PlanReport) -> Vec<SubnetRow> {
    report.subnets.iter().map(SubnetRow::from).collect()
}
