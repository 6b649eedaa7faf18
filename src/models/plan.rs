//! Subnetting requirement, plan and result types.

use super::class::{AddressClass, ClassDetails};
use super::ipv4::{subnet_mask, Ipv4, MAX_LENGTH};
use std::net::Ipv4Addr;

/// What the user asked for: a minimum host count per subnet, or a minimum
/// number of subnets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    ByHosts(u64),
    BySubnets(u64),
}

impl Requirement {
    /// The requested count.
    pub fn count(&self) -> u64 {
        match *self {
            Requirement::ByHosts(n) | Requirement::BySubnets(n) => n,
        }
    }

    /// Noun used in user-facing messages.
    pub fn what(&self) -> &'static str {
        match self {
            Requirement::ByHosts(_) => "hosts",
            Requirement::BySubnets(_) => "subnets",
        }
    }
}

/// Borrowed bits and the resulting mask for a requirement.
///
/// The mask is computed from a flat 32-bit baseline, `mask_length = 32 -
/// borrowed_bits`, independent of the address's class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetPlan {
    pub borrowed_bits: u8,
    pub mask_length: u8,
    /// `2^borrowed_bits`
    pub subnet_count: u64,
}

impl SubnetPlan {
    /// Addresses per block, `2^(32 - mask_length)`.
    pub fn block_size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask_length)
    }

    pub fn subnet_mask(&self) -> Option<Ipv4Addr> {
        subnet_mask(self.mask_length)
    }
}

/// One enumerated subnet.
///
/// `first_host`/`last_host` are `None` for blocks of fewer than four
/// addresses (/31 and /32), which have no usable hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDescriptor {
    pub index: u64,
    pub cidr: Ipv4,
    pub network_address: Ipv4Addr,
    pub first_host: Option<Ipv4Addr>,
    pub last_host: Option<Ipv4Addr>,
    pub broadcast_address: Ipv4Addr,
}

impl SubnetDescriptor {
    pub fn usable_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        self.first_host.zip(self.last_host)
    }
}

/// Result of a class query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassReport {
    pub address: Ipv4Addr,
    pub class: AddressClass,
    pub details: ClassDetails,
}

/// Result of a planning query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub address: Ipv4Addr,
    pub requirement: Requirement,
    pub plan: SubnetPlan,
    pub subnets: Vec<SubnetDescriptor>,
}
