//! Legacy (classful) address categories.

use super::ipv4::{num_hosts, subnet_mask, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Smallest block that still leaves usable hosts (/30: two hosts).
const MIN_USABLE_HOST_BITS: u8 = 2;

/// Legacy address class, determined by the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    /// First octet 1-126.
    A,
    /// First octet 128-191.
    B,
    /// First octet 192-223.
    C,
    /// 0, 127 and 224-255.
    Invalid,
}

/// Default mask and capacity of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDetails {
    pub default_mask_length: u8,
    pub default_mask: Ipv4Addr,
    /// `2^(32 - default_mask_length) - 2`
    pub max_hosts: u64,
    /// Subnets available when borrowing every host bit but the two a /30 keeps.
    pub max_subnets: u64,
}

impl AddressClass {
    /// Default prefix length, `None` for [`AddressClass::Invalid`].
    pub fn default_mask_length(self) -> Option<u8> {
        match self {
            AddressClass::A => Some(8),
            AddressClass::B => Some(16),
            AddressClass::C => Some(24),
            AddressClass::Invalid => None,
        }
    }

    /// Table lookup of the class defaults.
    ///
    /// `Invalid` has no details, callers must check the variant first.
    pub fn details(self) -> Option<ClassDetails> {
        let len = self.default_mask_length()?;
        Some(ClassDetails {
            default_mask_length: len,
            default_mask: subnet_mask(len)?,
            max_hosts: num_hosts(len)?,
            max_subnets: 1u64 << (MAX_LENGTH - MIN_USABLE_HOST_BITS - len),
        })
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}
