//! Implementation of multiprecision integer comparison primitives.

use core::cmp::Ordering;

use super::limb::LimbType;
use super::limbs_buffer::{check_same_len_mp, MpBufferLenError};

/// Compare two multiprecision integers of equal width.
///
/// The limbs are scanned from the most significant one downwards, the first differing limb pair
/// decides.
fn cmp_mp_mp(op0: &[LimbType], op1: &[LimbType]) -> Result<Ordering, MpBufferLenError> {
    check_same_len_mp(op0, op1)?;

    for (op0_val, op1_val) in op0.iter().rev().zip(op1.iter().rev()) {
        match op0_val.cmp(op1_val) {
            Ordering::Equal => continue,
            ord => return Ok(ord),
        }
    }
    Ok(Ordering::Equal)
}

/// Compare two multiprecision integers for `>=`.
///
/// Evaluates to `true` iff `op0` is greater or equal than `op1` in value. Two equal integers
/// compare as `true`.
///
/// # Arguments
///
/// * `op0` - The first operand.
/// * `op1` - The second operand. Its length must equal the length of `op0`.
///
pub fn geq_mp_mp(op0: &[LimbType], op1: &[LimbType]) -> Result<bool, MpBufferLenError> {
    Ok(cmp_mp_mp(op0, op1)? != Ordering::Less)
}

/// Compare two multiprecision integers for `>`.
pub fn gt_mp_mp(op0: &[LimbType], op1: &[LimbType]) -> Result<bool, MpBufferLenError> {
    Ok(cmp_mp_mp(op0, op1)? == Ordering::Greater)
}

/// Compare two multiprecision integers for `<`.
pub fn lt_mp_mp(op0: &[LimbType], op1: &[LimbType]) -> Result<bool, MpBufferLenError> {
    Ok(cmp_mp_mp(op0, op1)? == Ordering::Less)
}

/// Compare two multiprecision integers for `==`.
///
/// Evaluates to `true` iff `op0` is equal to `op1` in value.
pub fn eq_mp_mp(op0: &[LimbType], op1: &[LimbType]) -> Result<bool, MpBufferLenError> {
    check_same_len_mp(op0, op1)?;
    Ok(op0 == op1)
}

#[test]
fn test_geq_mp_mp() {
    let op0: [LimbType; 2] = [1, 2];
    let op1: [LimbType; 2] = [1, 2];
    assert!(geq_mp_mp(&op0, &op1).unwrap());
    assert!(!gt_mp_mp(&op0, &op1).unwrap());
    assert!(!lt_mp_mp(&op0, &op1).unwrap());
    assert!(eq_mp_mp(&op0, &op1).unwrap());

    // The high limb decides, regardless of the lower ones.
    let op0: [LimbType; 2] = [0, 3];
    let op1: [LimbType; 2] = [!0, 2];
    assert!(geq_mp_mp(&op0, &op1).unwrap());
    assert!(gt_mp_mp(&op0, &op1).unwrap());
    assert!(!geq_mp_mp(&op1, &op0).unwrap());
    assert!(lt_mp_mp(&op1, &op0).unwrap());
    assert!(!eq_mp_mp(&op0, &op1).unwrap());

    let op0: [LimbType; 3] = [2, 0, 0];
    let op1: [LimbType; 3] = [1, 0, 0];
    assert!(geq_mp_mp(&op0, &op1).unwrap());
    assert!(!geq_mp_mp(&op1, &op0).unwrap());

    assert!(geq_mp_mp(&[], &[]).unwrap());
}

#[test]
fn test_cmp_mp_mp_len_mismatch() {
    let op0: [LimbType; 2] = [1, 0];
    let op1: [LimbType; 1] = [1];
    assert_eq!(geq_mp_mp(&op0, &op1), Err(MpBufferLenError::OperandLenMismatch));
    assert_eq!(lt_mp_mp(&op0, &op1), Err(MpBufferLenError::OperandLenMismatch));
    assert_eq!(eq_mp_mp(&op0, &op1), Err(MpBufferLenError::OperandLenMismatch));
}

/// Test whether a multiprecision integer equals zero.
pub fn is_zero_mp(op0: &[LimbType]) -> bool {
    op0.iter().all(|v| *v == 0)
}

#[test]
fn test_is_zero_mp() {
    assert!(is_zero_mp(&[]));
    assert!(is_zero_mp(&[0, 0, 0]));
    assert!(!is_zero_mp(&[0, 1, 0]));
}

#[cfg(test)]
proptest::proptest! {
    #[test]
    fn test_geq_mp_mp_reflexive(op0 in super::test_helpers::tst_mp(1, 32)) {
        assert!(geq_mp_mp(&op0, &op0).unwrap());
    }

    #[test]
    fn test_geq_mp_mp_matches_reference((op0, op1) in super::test_helpers::tst_mp_pair(1, 8)) {
        use super::test_helpers::tst_mp_to_biguint;

        let expected = tst_mp_to_biguint(&op0) >= tst_mp_to_biguint(&op1);
        assert_eq!(geq_mp_mp(&op0, &op1).unwrap(), expected);
    }
}
