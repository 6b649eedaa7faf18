//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - `ipv4` - address codec and the [`Ipv4`] CIDR value
//! - [`AddressClass`] - legacy class with its default mask and capacity
//! - [`Requirement`], [`SubnetPlan`], [`SubnetDescriptor`] - planning inputs and results

mod class;
mod ipv4;
mod plan;

// Re-export public types
pub use class::{AddressClass, ClassDetails};
pub use ipv4::{
    add, get_cidr_mask, num_hosts, parse_address, subnet_mask, to_integer, to_text, Ipv4,
    MAX_LENGTH,
};
pub use plan::{ClassReport, PlanReport, Requirement, SubnetDescriptor, SubnetPlan};
