//! Report header line.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// `# subnet-calculator v0.1.0 generated 2026-10-19 11:00:00 UTC`
pub fn banner<Tz>(now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "# {name} v{version} generated {time}",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        time = now.format("%Y-%m-%d %H:%M:%S %Z")
    )
}
