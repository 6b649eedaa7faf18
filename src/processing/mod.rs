//! Subnet calculation logic.
//!
//! This module contains the arithmetic behind every query:
//! - `classify` - legacy class lookup and host capacity gate
//! - [`planner`] - borrowed bits and mask length from a requirement
//! - [`enumerator`] - per-subnet network, host range and broadcast addresses

mod classify;
pub mod enumerator;
pub mod planner;

// Re-export public functions
pub use classify::{check_host_capacity, classify};
pub use enumerator::enumerate;
pub use planner::{ceil_log2, plan, plan_by_hosts, plan_by_subnets};
