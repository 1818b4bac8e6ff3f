// SPDX-License-Identifier: Apache-2.0
// Copyright 2023 SUSE LLC
// Author: Nicolai Stange <nstange@suse.de>

//! Test-only helpers: reference arithmetic and random operand generation.

extern crate alloc;

use alloc::vec::Vec;

use num_bigint::BigUint;
use proptest::collection::vec;
use proptest::strategy::{Just, Strategy};

use super::limb::{LimbType, LIMB_BITS};

pub fn tst_mp_to_biguint(op0: &[LimbType]) -> BigUint {
    op0.iter()
        .rev()
        .fold(BigUint::from(0u32), |acc, v| (acc << LIMB_BITS) + BigUint::from(*v))
}

pub fn tst_mp_from_biguint(v: &BigUint, nlimbs: usize) -> Vec<LimbType> {
    let mut limbs: Vec<LimbType> = v
        .to_u32_digits()
        .iter()
        .flat_map(|d| [*d as LimbType, (*d >> LIMB_BITS) as LimbType])
        .collect();
    assert!(limbs[nlimbs.min(limbs.len())..].iter().all(|l| *l == 0));
    limbs.resize(nlimbs, 0);
    limbs
}

#[test]
fn test_tst_mp_biguint_conversions() {
    let op0: [LimbType; 3] = [0x3456, 0x0012, 0xabcd];
    let v = tst_mp_to_biguint(&op0);
    assert_eq!(v, BigUint::parse_bytes(b"abcd00123456", 16).unwrap());
    assert_eq!(tst_mp_from_biguint(&v, 4), [0x3456, 0x0012, 0xabcd, 0]);
}

/// Random multiprecision integer of `min_nlimbs..=max_nlimbs` limbs.
pub fn tst_mp(min_nlimbs: usize, max_nlimbs: usize) -> impl Strategy<Value = Vec<LimbType>> {
    vec(proptest::num::u16::ANY, min_nlimbs..=max_nlimbs)
}

/// Pair of random multiprecision integers of equal width.
pub fn tst_mp_pair(
    min_nlimbs: usize,
    max_nlimbs: usize,
) -> impl Strategy<Value = (Vec<LimbType>, Vec<LimbType>)> {
    (min_nlimbs..=max_nlimbs).prop_flat_map(|nlimbs| {
        (
            vec(proptest::num::u16::ANY, nlimbs),
            vec(proptest::num::u16::ANY, nlimbs),
        )
    })
}

/// Random multiprecision integer of exactly `nlimbs` limbs with a non-zero high limb.
pub fn tst_mp_high_set(nlimbs: usize) -> impl Strategy<Value = Vec<LimbType>> {
    (vec(proptest::num::u16::ANY, nlimbs - 1), 1..=LimbType::MAX).prop_map(|(mut v, high)| {
        v.push(high);
        v
    })
}

/// Random modulus of `min_nlimbs..=max_nlimbs` limbs with a non-zero high limb.
pub fn tst_mp_modulus(
    min_nlimbs: usize,
    max_nlimbs: usize,
) -> impl Strategy<Value = Vec<LimbType>> {
    (min_nlimbs..=max_nlimbs).prop_flat_map(tst_mp_high_set)
}

/// Dividend and divisor for long division: the divisor has at least two limbs and a non-zero
/// high limb, the dividend is at least as wide as the divisor.
pub fn tst_div_operands(
    max_nlimbs: usize,
) -> impl Strategy<Value = (Vec<LimbType>, Vec<LimbType>)> {
    (2..=max_nlimbs)
        .prop_flat_map(move |y_nlimbs| (y_nlimbs..=max_nlimbs, Just(y_nlimbs)))
        .prop_flat_map(|(x_nlimbs, y_nlimbs)| {
            (vec(proptest::num::u16::ANY, x_nlimbs), tst_mp_high_set(y_nlimbs))
        })
}

/// A modulus of `nlimbs` limbs with a non-zero high limb and two operands reduced modulo it.
pub fn tst_mod_operands(
    min_nlimbs: usize,
    max_nlimbs: usize,
) -> impl Strategy<Value = (Vec<LimbType>, Vec<LimbType>, Vec<LimbType>)> {
    (min_nlimbs..=max_nlimbs)
        .prop_flat_map(|nlimbs| {
            (
                tst_mp_high_set(nlimbs),
                vec(proptest::num::u16::ANY, nlimbs),
                vec(proptest::num::u16::ANY, nlimbs),
            )
        })
        .prop_map(|(p, op0, op1)| {
            let p_val = tst_mp_to_biguint(&p);
            let op0 = tst_mp_from_biguint(&(tst_mp_to_biguint(&op0) % &p_val), p.len());
            let op1 = tst_mp_from_biguint(&(tst_mp_to_biguint(&op1) % &p_val), p.len());
            (p, op0, op1)
        })
}
