//! Integration tests for subnet-calculator
//!
//! These tests run complete queries through the calculator and the command
//! line layer.

use clap::Parser;
use std::net::Ipv4Addr;
use subnet_calculator::cli::{run, Cli};
use subnet_calculator::models::{parse_address, to_integer, to_text, AddressClass};
use subnet_calculator::{CalcError, Calculator, Config};

#[test]
fn test_plan_by_hosts_class_c() {
    let report = Calculator::default()
        .plan_by_hosts("192.168.1.0", "50")
        .expect("Failed to plan by hosts");

    assert_eq!(report.plan.borrowed_bits, 6, "ceil(log2(52)) = 6");
    assert_eq!(report.plan.mask_length, 26);
    assert_eq!(report.plan.subnet_count, 64);
    assert_eq!(report.subnets.len(), 64);

    let s0 = &report.subnets[0];
    assert_eq!(s0.network_address, Ipv4Addr::new(192, 168, 1, 0));
    assert_eq!(s0.first_host, Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert_eq!(s0.last_host, Some(Ipv4Addr::new(192, 168, 1, 62)));
    assert_eq!(s0.broadcast_address, Ipv4Addr::new(192, 168, 1, 63));
}

#[test]
fn test_plan_by_subnets_flat_baseline() {
    let report = Calculator::default()
        .plan_by_subnets("10.0.0.0", "8")
        .expect("Failed to plan by subnets");

    // mask comes from the 32-bit baseline, not the class A default
    assert_eq!(report.plan.borrowed_bits, 3);
    assert_eq!(report.plan.mask_length, 29);
    assert_eq!(report.plan.subnet_count, 8);
    assert_eq!(report.subnets[0].network_address, Ipv4Addr::new(10, 0, 0, 0));
    assert_eq!(report.subnets[0].broadcast_address, Ipv4Addr::new(10, 0, 0, 7));
}

#[test]
fn test_plan_by_subnets_exact_power_of_two() {
    let report = Calculator::default()
        .plan_by_subnets("192.168.0.0", "4")
        .expect("Failed to plan by subnets");
    assert_eq!(report.plan.borrowed_bits, 2);
    assert_eq!(report.plan.subnet_count, 4);
}

#[test]
fn test_plan_by_subnets_idempotent() {
    let calc = Calculator::default();
    let first = calc.plan_by_subnets("172.16.0.0", "100").unwrap();
    let second = calc.plan_by_subnets("172.16.0.0", "100").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_enumeration_has_no_gaps() {
    let calc = Calculator::default();
    for (addr, count) in [("10.0.0.0", "3"), ("172.16.5.200", "20"), ("192.168.1.0", "1000")] {
        let report = calc.plan_by_subnets(addr, count).unwrap();
        assert_eq!(report.subnets.len() as u64, report.plan.subnet_count);
        for pair in report.subnets.windows(2) {
            assert_eq!(
                to_integer(pair[0].broadcast_address) + 1,
                to_integer(pair[1].network_address),
                "{addr} {count}"
            );
        }
    }
}

#[test]
fn test_classify_class_b() {
    let report = Calculator::default()
        .classify("172.16.5.200")
        .expect("Failed to classify");
    assert_eq!(report.class, AddressClass::B);
    assert_eq!(report.details.default_mask, Ipv4Addr::new(255, 255, 0, 0));
    assert_eq!(report.details.max_hosts, 65534);
}

#[test]
fn test_class_a_capacity() {
    let calc = Calculator::default();
    for first in [1, 10, 64, 126] {
        let report = calc.classify(&format!("{first}.0.0.1")).unwrap();
        assert_eq!(report.class, AddressClass::A);
        assert_eq!(report.details.max_hosts, 16777214);
    }
}

#[test]
fn test_round_trip() {
    for text in ["0.0.0.0", "8.8.4.4", "192.168.100.254", "255.255.255.255"] {
        let addr = parse_address(text).unwrap();
        assert_eq!(to_text(to_integer(addr)), text);
    }
}

#[test]
fn test_error_kinds() {
    let calc = Calculator::default();
    assert!(matches!(
        calc.classify("192.168.1"),
        Err(CalcError::InvalidFormat(_))
    ));
    assert!(matches!(
        calc.classify("0.1.2.3"),
        Err(CalcError::InvalidClassRange(_))
    ));
    assert!(matches!(
        calc.classify("224.0.0.1"),
        Err(CalcError::InvalidClassRange(_))
    ));
    assert!(matches!(
        calc.plan_by_subnets("10.0.0.0", "zero"),
        Err(CalcError::InvalidRequirement { what: "subnets", .. })
    ));
    assert!(matches!(
        calc.plan_by_hosts("172.16.0.0", "70000"),
        Err(CalcError::HostCountExceedsClassCapacity {
            class: AddressClass::B,
            max_hosts: 65534,
            ..
        })
    ));
    assert!(matches!(
        calc.plan_by_hosts("10.0.0.0", "16777214"),
        Err(CalcError::RequirementTooLarge { .. })
    ));
    assert!(matches!(
        calc.plan_by_subnets("255.255.255.0", "512"),
        Err(CalcError::AddressOverflow { .. })
    ));
}

#[test]
fn test_cli_table() {
    let cli = Cli::try_parse_from(["subnet-calc", "hosts", "192.168.1.0", "50"]).unwrap();
    let text = run(&cli, &Config::default(), Some("# test banner")).unwrap();
    assert!(text.contains("# test banner"));
    assert!(text.contains("192.168.1.1 - 192.168.1.62"));
    assert!(text.contains("192.168.16.255"));
}

#[test]
fn test_cli_json() {
    let cli = Cli::try_parse_from(["subnet-calc", "--format", "json", "class", "200.1.1.1"]).unwrap();
    let text = run(&cli, &Config::default(), Some("# not in json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).expect("Output is not JSON");
    assert_eq!(value["class"], "C");
    assert_eq!(value["defaultMask"], "255.255.255.0");
    assert_eq!(value["maxHostsPerSubnet"], 254);
    assert_eq!(value["maxSubnets"], 64);
}

#[test]
fn test_cli_error_message() {
    let cli = Cli::try_parse_from(["subnet-calc", "hosts", "192.168.1.0", "500"]).unwrap();
    let err = run(&cli, &Config::default(), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The number of hosts exceeds the maximum allowed for a Class C network. Maximum hosts: 254"
    );
}
