//! Legacy class lookup.

use crate::error::CalcError;
use crate::models::AddressClass;
use std::net::Ipv4Addr;

/// Classify an address by its first octet.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use subnet_calculator::models::AddressClass;
/// use subnet_calculator::processing::classify;
/// assert_eq!(classify(Ipv4Addr::new(172, 16, 5, 200)), AddressClass::B);
/// assert_eq!(classify(Ipv4Addr::new(127, 0, 0, 1)), AddressClass::Invalid);
/// ```
pub fn classify(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        _ => AddressClass::Invalid,
    }
}

/// Reject a host requirement larger than the address's class can hold.
///
/// Returns the class on success. An unclassifiable address has no capacity
/// and fails with [`CalcError::InvalidClassRange`].
pub fn check_host_capacity(addr: Ipv4Addr, min_hosts: u64) -> Result<AddressClass, CalcError> {
    let class = classify(addr);
    let details = class
        .details()
        .ok_or(CalcError::InvalidClassRange(addr))?;

    if min_hosts > details.max_hosts {
        log::warn!(
            "{min_hosts} hosts requested, class {class} allows {max}",
            max = details.max_hosts
        );
        return Err(CalcError::HostCountExceedsClassCapacity {
            class,
            requested: min_hosts,
            max_hosts: details.max_hosts,
        });
    }
    Ok(class)
}
