//! Eager enumeration of equal-sized subnets.
//!
//! Blocks are laid out back to back starting at the given address itself
//! (it is not first aligned to the mask), in ascending index order.

use crate::error::CalcError;
use crate::models::{add, to_integer, Ipv4, SubnetDescriptor, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Blocks smaller than this have no usable host range.
const MIN_BLOCK_WITH_HOSTS: u64 = 4;

/// Produce `subnet_count` descriptors of `2^(32 - mask_length)` addresses each.
///
/// Fails with [`CalcError::InvalidMaskLength`] for a prefix longer than 32
/// bits, with [`CalcError::RequirementTooLarge`] if `subnet_count` exceeds
/// `limit`, and with [`CalcError::AddressOverflow`] if the last block would
/// end past 255.255.255.255. Both are checked before anything is built.
pub fn enumerate(
    addr: Ipv4Addr,
    subnet_count: u64,
    mask_length: u8,
    limit: u64,
) -> Result<Vec<SubnetDescriptor>, CalcError> {
    if mask_length > MAX_LENGTH {
        return Err(CalcError::InvalidMaskLength(mask_length));
    }
    if subnet_count > limit {
        log::warn!("refusing to enumerate {subnet_count} subnets, limit is {limit}");
        return Err(CalcError::RequirementTooLarge {
            subnet_count,
            limit,
        });
    }

    let block_size = 1u64 << (MAX_LENGTH - mask_length);
    let span = block_size
        .checked_mul(subnet_count)
        .ok_or(CalcError::AddressOverflow {
            base: addr,
            span: u64::MAX,
        })?;
    if to_integer(addr) as u64 + span > u32::MAX as u64 + 1 {
        return Err(CalcError::AddressOverflow { base: addr, span });
    }

    log::info!("enumerate {subnet_count} subnets of /{mask_length} from {addr}");
    let mut subnets = Vec::with_capacity(subnet_count as usize);
    for index in 0..subnet_count {
        let network_address = add(addr, block_size * index)?;
        let (first_host, last_host) = if block_size >= MIN_BLOCK_WITH_HOSTS {
            (
                Some(add(network_address, 1)?),
                Some(add(network_address, block_size - 2)?),
            )
        } else {
            (None, None)
        };
        let broadcast_address = add(network_address, block_size - 1)?;

        log::trace!("subnet#{index} {network_address} .. {broadcast_address}");
        subnets.push(SubnetDescriptor {
            index,
            cidr: Ipv4 {
                addr: network_address,
                mask: mask_length,
            },
            network_address,
            first_host,
            last_host,
            broadcast_address,
        });
    }
    Ok(subnets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 1 << 16;

    #[test]
    fn test_enumerate_first_subnet() {
        let subnets = enumerate(Ipv4Addr::new(192, 168, 1, 0), 64, 26, LIMIT).unwrap();
        assert_eq!(subnets.len(), 64);

        let s0 = &subnets[0];
        assert_eq!(s0.index, 0);
        assert_eq!(s0.cidr.to_string(), "192.168.1.0/26");
        assert_eq!(s0.network_address, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(
            s0.usable_range(),
            Some((Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 62)))
        );
        assert_eq!(s0.broadcast_address, Ipv4Addr::new(192, 168, 1, 63));

        let s63 = &subnets[63];
        assert_eq!(s63.network_address, Ipv4Addr::new(192, 168, 16, 192));
        assert_eq!(s63.broadcast_address, Ipv4Addr::new(192, 168, 16, 255));
    }

    #[test]
    fn test_enumerate_contiguous() {
        let subnets = enumerate(Ipv4Addr::new(10, 0, 0, 0), 32, 27, LIMIT).unwrap();
        assert_eq!(subnets.len(), 32);
        for pair in subnets.windows(2) {
            assert!(pair[0].network_address < pair[1].network_address);
            assert_eq!(
                to_integer(pair[0].broadcast_address) + 1,
                to_integer(pair[1].network_address)
            );
            assert_eq!(pair[0].index + 1, pair[1].index);
        }
        for s in &subnets {
            let (first, last) = s.usable_range().unwrap();
            assert!(s.network_address < first);
            assert!(first <= last);
            assert!(last < s.broadcast_address);
        }
    }

    #[test]
    fn test_enumerate_unaligned_base() {
        let subnets = enumerate(Ipv4Addr::new(172, 16, 5, 200), 2, 29, LIMIT).unwrap();
        assert_eq!(subnets[0].network_address, Ipv4Addr::new(172, 16, 5, 200));
        assert_eq!(subnets[0].broadcast_address, Ipv4Addr::new(172, 16, 5, 207));
        assert_eq!(subnets[1].network_address, Ipv4Addr::new(172, 16, 5, 208));
    }

    #[test]
    fn test_enumerate_small_blocks() {
        let p2p = enumerate(Ipv4Addr::new(10, 0, 0, 0), 2, 31, LIMIT).unwrap();
        assert_eq!(p2p[0].usable_range(), None);
        assert_eq!(p2p[0].broadcast_address, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(p2p[1].network_address, Ipv4Addr::new(10, 0, 0, 2));

        let single = enumerate(Ipv4Addr::new(10, 0, 0, 5), 1, 32, LIMIT).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].first_host, None);
        assert_eq!(single[0].broadcast_address, Ipv4Addr::new(10, 0, 0, 5));

        let four = enumerate(Ipv4Addr::new(10, 0, 0, 0), 1, 30, LIMIT).unwrap();
        assert_eq!(
            four[0].usable_range(),
            Some((Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)))
        );
    }

    #[test]
    fn test_enumerate_limit() {
        assert_eq!(
            enumerate(Ipv4Addr::new(10, 0, 0, 0), 128, 25, 64),
            Err(CalcError::RequirementTooLarge {
                subnet_count: 128,
                limit: 64
            })
        );
        assert!(enumerate(Ipv4Addr::new(10, 0, 0, 0), 64, 25, 64).is_ok());
    }

    #[test]
    fn test_enumerate_overflow() {
        let base = Ipv4Addr::new(255, 255, 255, 0);
        assert_eq!(
            enumerate(base, 2, 24, LIMIT),
            Err(CalcError::AddressOverflow { base, span: 512 })
        );
        // ends exactly on 255.255.255.255
        let last = enumerate(base, 4, 26, LIMIT).unwrap();
        assert_eq!(last[3].broadcast_address, Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_enumerate_rejects_long_mask() {
        assert_eq!(
            enumerate(Ipv4Addr::new(10, 0, 0, 0), 1, 33, LIMIT),
            Err(CalcError::InvalidMaskLength(33))
        );
    }
}
