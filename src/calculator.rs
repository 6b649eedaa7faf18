//! Query orchestration: validate, plan, enumerate, assemble.
//!
//! Every input is validated before any planning work starts; the first
//! failing stage decides the error.

use crate::config::Config;
use crate::error::CalcError;
use crate::models::{parse_address, ClassReport, PlanReport, Requirement};
use crate::processing::{check_host_capacity, classify, enumerate, plan};
use std::num::IntErrorKind;

/// Entry point for the three user-facing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    max_subnets: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(crate::config::DEFAULT_MAX_SUBNETS)
    }
}

impl Calculator {
    pub fn new(max_subnets: u64) -> Self {
        Calculator { max_subnets }
    }

    pub fn from_config(config: &Config) -> Self {
        Calculator::new(config.max_subnets)
    }

    pub fn max_subnets(&self) -> u64 {
        self.max_subnets
    }

    /// Class, default mask and capacity of an address.
    pub fn classify(&self, address: &str) -> Result<ClassReport, CalcError> {
        log::info!("#Start classify({address})");
        let addr = parse_address(address)?;
        let class = classify(addr);
        let details = class.details().ok_or_else(|| {
            log::warn!("{addr} has no class");
            CalcError::InvalidClassRange(addr)
        })?;
        Ok(ClassReport {
            address: addr,
            class,
            details,
        })
    }

    /// Subnets holding at least `hosts` usable addresses each.
    pub fn plan_by_hosts(&self, address: &str, hosts: &str) -> Result<PlanReport, CalcError> {
        log::info!("#Start plan_by_hosts({address}, {hosts})");
        let addr = parse_address(address)?;
        let min_hosts = parse_requirement(hosts, "hosts", self.max_subnets)?;
        let class = check_host_capacity(addr, min_hosts)?;
        log::debug!("{addr} is class {class}");
        self.build(addr, Requirement::ByHosts(min_hosts))
    }

    /// At least `subnets` equal subnets.
    pub fn plan_by_subnets(&self, address: &str, subnets: &str) -> Result<PlanReport, CalcError> {
        log::info!("#Start plan_by_subnets({address}, {subnets})");
        let addr = parse_address(address)?;
        let min_subnets = parse_requirement(subnets, "subnets", self.max_subnets)?;
        self.build(addr, Requirement::BySubnets(min_subnets))
    }

    fn build(
        &self,
        addr: std::net::Ipv4Addr,
        requirement: Requirement,
    ) -> Result<PlanReport, CalcError> {
        let plan = plan(requirement)?;
        let subnets = enumerate(addr, plan.subnet_count, plan.mask_length, self.max_subnets)?;
        log::info!(
            "{addr} {what}={count}: {bits} borrowed bits, {n} subnets of /{len}",
            what = requirement.what(),
            count = requirement.count(),
            bits = plan.borrowed_bits,
            n = plan.subnet_count,
            len = plan.mask_length
        );
        Ok(PlanReport {
            address: addr,
            requirement,
            plan,
            subnets,
        })
    }
}

/// Parse a host or subnet count: a positive decimal integer, surrounding
/// whitespace ignored.
///
/// A number too big for `u64` is reported as too large rather than invalid.
pub fn parse_requirement(text: &str, what: &'static str, limit: u64) -> Result<u64, CalcError> {
    let invalid = || {
        log::warn!("invalid number of {what}: {text:?}");
        CalcError::InvalidRequirement {
            what,
            input: text.to_string(),
        }
    };
    match text.trim().parse::<u64>() {
        Ok(0) => Err(invalid()),
        Ok(n) => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(CalcError::RequirementTooLarge {
            subnet_count: u64::MAX,
            limit,
        }),
        Err(_) => Err(invalid()),
    }
}
