//! Error kinds reported by the calculator.
//!
//! Every variant is terminal: validation happens before any planning or
//! enumeration work starts, so a failure never comes with a partial result.
//! The `Display` text is the message shown to the user.

use crate::models::AddressClass;
use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Address text does not match the dotted-decimal pattern.
    #[error("Invalid IP address.")]
    InvalidFormat(String),

    /// Address parses but its first octet is 0, 127 or 224-255.
    #[error("Invalid IP address range for class determination.")]
    InvalidClassRange(Ipv4Addr),

    /// Host or subnet count is non-numeric, zero or negative.
    #[error("Please enter a valid number of {what}.")]
    InvalidRequirement { what: &'static str, input: String },

    #[error(
        "The number of hosts exceeds the maximum allowed for a Class {class} network. Maximum hosts: {max_hosts}"
    )]
    HostCountExceedsClassCapacity {
        class: AddressClass,
        requested: u64,
        max_hosts: u64,
    },

    #[error("The requirement needs {subnet_count} subnets, more than the limit of {limit}.")]
    RequirementTooLarge { subnet_count: u64, limit: u64 },

    #[error("Mask length /{0} is longer than 32 bits.")]
    InvalidMaskLength(u8),

    /// Enumerating `span` addresses from `base` would pass 255.255.255.255.
    #[error("Subnets starting at {base} spanning {span} addresses run past 255.255.255.255.")]
    AddressOverflow { base: Ipv4Addr, span: u64 },
}
