//! Borrowed-bit planning from a host or subnet requirement.
//!
//! Both plans borrow from a flat 32-bit baseline: the new mask length is
//! `32 - borrowed_bits` regardless of the address's default class mask.

use crate::error::CalcError;
use crate::models::{Requirement, SubnetPlan, MAX_LENGTH};

/// Network and broadcast address reserved in every block.
const RESERVED_PER_BLOCK: u64 = 2;

/// Smallest `b` with `2^b >= n`, computed on integer bit length so exact
/// powers of two are never pushed up by one.
///
/// # Examples
/// ```
/// use subnet_calculator::processing::ceil_log2;
/// assert_eq!(ceil_log2(4), 2);
/// assert_eq!(ceil_log2(5), 3);
/// assert_eq!(ceil_log2(52), 6);
/// ```
pub fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

/// Plan for at least `min_hosts` usable hosts: `ceil(log2(min_hosts + 2))`
/// bits are borrowed.
///
/// The class capacity check is the caller's job
/// ([`check_host_capacity`](super::check_host_capacity)).
pub fn plan_by_hosts(min_hosts: u64) -> Result<SubnetPlan, CalcError> {
    let requirement = Requirement::ByHosts(min_hosts);
    require_positive(requirement)?;
    let needed = min_hosts
        .checked_add(RESERVED_PER_BLOCK)
        .ok_or(CalcError::RequirementTooLarge {
            subnet_count: u64::MAX,
            limit: 1u64 << MAX_LENGTH,
        })?;
    build_plan(ceil_log2(needed))
}

/// Plan for at least `min_subnets` subnets: `ceil(log2(min_subnets))` bits
/// are borrowed, no reservation margin.
pub fn plan_by_subnets(min_subnets: u64) -> Result<SubnetPlan, CalcError> {
    require_positive(Requirement::BySubnets(min_subnets))?;
    build_plan(ceil_log2(min_subnets))
}

/// Dispatch on the requirement variant.
pub fn plan(requirement: Requirement) -> Result<SubnetPlan, CalcError> {
    match requirement {
        Requirement::ByHosts(n) => plan_by_hosts(n),
        Requirement::BySubnets(n) => plan_by_subnets(n),
    }
}

fn require_positive(requirement: Requirement) -> Result<(), CalcError> {
    if requirement.count() == 0 {
        return Err(CalcError::InvalidRequirement {
            what: requirement.what(),
            input: "0".to_string(),
        });
    }
    Ok(())
}

fn build_plan(borrowed_bits: u32) -> Result<SubnetPlan, CalcError> {
    if borrowed_bits > MAX_LENGTH as u32 {
        return Err(CalcError::RequirementTooLarge {
            subnet_count: 1u64.checked_shl(borrowed_bits).unwrap_or(u64::MAX),
            limit: 1u64 << MAX_LENGTH,
        });
    }
    let borrowed_bits = borrowed_bits as u8;
    let plan = SubnetPlan {
        borrowed_bits,
        mask_length: MAX_LENGTH - borrowed_bits,
        subnet_count: 1u64 << borrowed_bits,
    };
    log::debug!("plan {plan:?}");
    Ok(plan)
}
