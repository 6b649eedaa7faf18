//! IPv4 address codec and CIDR notation utilities.
//!
//! Converts between dotted-decimal text and the 32-bit integer form the
//! calculator does its arithmetic on, and provides the [`Ipv4`] struct for
//! an address paired with a prefix length.

use crate::error::CalcError;
use itertools::Itertools;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Dotted-decimal pattern, one 0-255 group per octet.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        let octet = r"(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";
        Regex::new(&format!(r"^{octet}\.{octet}\.{octet}\.{octet}$")).expect("Invalid Regex")
    })
}

/// Parse dotted-decimal text into an address.
///
/// Only four dot-separated decimal groups in 0..=255 are accepted; surrounding
/// whitespace, a missing octet or a value such as `256` is rejected.
///
/// # Examples
/// ```
/// use subnet_calculator::models::parse_address;
/// assert_eq!(parse_address("192.168.1.0").unwrap().octets(), [192, 168, 1, 0]);
/// assert!(parse_address("192.168.1.256").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, CalcError> {
    let invalid = || CalcError::InvalidFormat(text.to_string());
    let caps = get_address_regex().captures(text).ok_or_else(invalid)?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1].parse::<u8>().map_err(|_| invalid())?;
    }
    log::trace!("parse_address({text}) -> {octets:?}");
    Ok(Ipv4Addr::from(octets))
}

/// Big-endian packing of the four octets.
pub fn to_integer(addr: Ipv4Addr) -> u32 {
    u32::from_be_bytes(addr.octets())
}

/// Unpack a 32-bit value into dotted-decimal text.
pub fn to_text(bits: u32) -> String {
    bits.to_be_bytes().iter().join(".")
}

/// Add `delta` to an address.
///
/// The caller is expected to keep the sum within 0..=u32::MAX; a sum past
/// 255.255.255.255 is reported as [`CalcError::AddressOverflow`] rather than
/// wrapping.
pub fn add(addr: Ipv4Addr, delta: u64) -> Result<Ipv4Addr, CalcError> {
    let bits = (to_integer(addr) as u64)
        .checked_add(delta)
        .and_then(|sum| u32::try_from(sum).ok())
        .ok_or(CalcError::AddressOverflow {
            base: addr,
            span: delta,
        })?;
    Ok(Ipv4Addr::from(bits))
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Dotted-decimal subnet mask for a prefix length, e.g. 26 -> 255.255.255.192.
pub fn subnet_mask(len: u8) -> Option<Ipv4Addr> {
    get_cidr_mask(len).map(Ipv4Addr::from)
}

/// Number of usable host addresses in a block of the given prefix length.
///
/// Two addresses per block are reserved (network and broadcast), so /31 and
/// /32 blocks have none.
pub fn num_hosts(len: u8) -> Option<u64> {
    match len {
        0..=30 => Some((1u64 << (MAX_LENGTH - len)) - 2),
        31 | 32 => Some(0),
        _ => None,
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
