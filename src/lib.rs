//! IPv4 subnet calculator.
//!
//! Given an address and either a minimum host count or a minimum subnet
//! count, works out the borrowed bits, mask length and subnet count, then
//! lists every subnet's network address, usable host range and broadcast
//! address. Addresses can also be looked up by legacy class (A/B/C).
//!
//! ```
//! use subnet_calculator::Calculator;
//!
//! let report = Calculator::default().plan_by_hosts("192.168.1.0", "50").unwrap();
//! assert_eq!(report.plan.borrowed_bits, 6);
//! assert_eq!(report.plan.mask_length, 26);
//! assert_eq!(report.subnets[0].broadcast_address.to_string(), "192.168.1.63");
//! ```

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use calculator::Calculator;
pub use config::Config;
pub use error::CalcError;
